//! Term ordering.

/// Sort terms in ascending ordinal (byte) order.
///
/// Glossary terms are unique, so stability never matters here.
pub fn sort_terms<S: AsRef<str>>(mut terms: Vec<S>) -> Vec<S> {
    terms.sort_unstable_by(|a, b| a.as_ref().cmp(b.as_ref()));
    terms
}
