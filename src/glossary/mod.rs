//! Glossary data model.
//!
//! A [`Glossary`] maps each term to its definition. It is produced once by
//! [`parse`] and only read afterwards.
//!
//! The backing map has no meaningful order. Anything that needs the terms in
//! a stable order goes through [`Glossary::sorted_terms`].

mod parser;
mod sort;

pub use parser::{DuplicatePolicy, parse};
pub use sort::sort_terms;

use rustc_hash::FxHashMap;

/// Immutable term -> definition mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Glossary {
    entries: FxHashMap<String, String>,
}

impl Glossary {
    /// Wrap a fully built map.
    fn from_entries(entries: FxHashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Definition of `term`, if it is defined.
    #[inline]
    pub fn definition(&self, term: &str) -> Option<&str> {
        self.entries.get(term).map(String::as_str)
    }

    /// Exact, case-sensitive membership test.
    #[inline]
    pub fn contains(&self, term: &str) -> bool {
        self.entries.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All terms in ascending ordinal order.
    pub fn sorted_terms(&self) -> Vec<&str> {
        sort_terms(self.entries.keys().map(String::as_str).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glossary(pairs: &[(&str, &str)]) -> Glossary {
        Glossary::from_entries(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect(),
        )
    }

    #[test]
    fn test_definition_lookup() {
        let g = glossary(&[("Alpha", "first letter")]);
        assert_eq!(g.definition("Alpha"), Some("first letter"));
        assert_eq!(g.definition("alpha"), None);
    }

    #[test]
    fn test_contains_is_case_sensitive() {
        let g = glossary(&[("Rust", "a language")]);
        assert!(g.contains("Rust"));
        assert!(!g.contains("rust"));
        assert!(!g.contains("Rust."));
    }

    #[test]
    fn test_sorted_terms() {
        let g = glossary(&[("b", "x"), ("C", "x"), ("a", "x")]);
        // Uppercase sorts before lowercase in ordinal order
        assert_eq!(g.sorted_terms(), vec!["C", "a", "b"]);
    }

    #[test]
    fn test_empty() {
        let g = Glossary::default();
        assert!(g.is_empty());
        assert_eq!(g.len(), 0);
        assert!(g.sorted_terms().is_empty());
    }
}
