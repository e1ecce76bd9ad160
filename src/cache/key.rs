//! Composite cache key.

use std::fmt;

use serde::Serialize;

// == Page Key ==
/// Identifies one page of results for one search term.
///
/// Compared structurally, so a term containing `_` or digits can never
/// collide with a different `(term, page)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PageKey {
    pub term: String,
    pub page: u32,
}

impl PageKey {
    pub fn new(term: impl Into<String>, page: u32) -> Self {
        Self {
            term: term.into(),
            page,
        }
    }

    /// Key of the page after this one for the same term.
    pub fn next(&self) -> Self {
        Self {
            term: self.term.clone(),
            page: self.page.saturating_add(1),
        }
    }
}

impl fmt::Display for PageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}#{}", self.term, self.page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_next_key() {
        let key = PageKey::new("rick", 3);
        assert_eq!(key.next(), PageKey::new("rick", 4));
    }

    #[test]
    fn test_no_delimiter_collision() {
        // "a_1" page 2 and "a" page 12 would both stringify to "a_1_2"-ish keys
        let mut keys = HashSet::new();
        keys.insert(PageKey::new("a_1", 2));
        keys.insert(PageKey::new("a", 12));
        keys.insert(PageKey::new("a_12", 1));
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(PageKey::new("morty", 2).to_string(), "\"morty\"#2");
    }
}
