//! Resolved page table

use hyper::body::Bytes;
use std::collections::HashMap;

/// Page name to fully resolved content.
///
/// Built once before the server accepts connections and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct PageTable {
    pages: HashMap<String, Bytes>,
}

impl PageTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: String, content: Bytes) {
        self.pages.insert(name, content);
    }

    /// Exact, case-sensitive lookup
    pub fn get(&self, name: &str) -> Option<&Bytes> {
        self.pages.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.pages.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Page names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.pages.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl FromIterator<(String, Bytes)> for PageTable {
    fn from_iter<I: IntoIterator<Item = (String, Bytes)>>(iter: I) -> Self {
        Self {
            pages: iter.into_iter().collect(),
        }
    }
}
