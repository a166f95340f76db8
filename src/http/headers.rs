//! Parsed HTTP headers of an [`HttpMessage`](crate::http::message::HttpMessage)
//!
//! Headers are stored in an ordered map to preserve the order in which they
//! appeared in the raw header block. Names are lower-cased on insertion so
//! lookups are case-insensitive; values are stored trimmed, as raw strings,
//! without validation.
//!
//! Inserting a name that is already present overwrites its value in place,
//! so the last occurrence of a duplicated header wins while keeping the
//! position of the first one.

use indexmap::IndexMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpHeaders {
    headers: IndexMap<String, String>,
}

impl HttpHeaders {
    pub fn new() -> Self {
        Self {
            headers: IndexMap::new(),
        }
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        self.headers
            .insert(name.trim().to_lowercase(), value.trim().to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name.trim().to_lowercase().as_str())
            .map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}
