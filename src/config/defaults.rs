//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn input() -> Option<PathBuf> {
        None
    }

    pub fn output() -> Option<PathBuf> {
        None
    }
}

// ============================================================================
// [parse] Section Defaults
// ============================================================================

pub mod parse {
    use crate::glossary::DuplicatePolicy;

    pub fn duplicates() -> DuplicatePolicy {
        DuplicatePolicy::default()
    }
}

// ============================================================================
// [render] Section Defaults
// ============================================================================

pub mod render {
    use crate::render::TrailingWords;

    pub fn trailing() -> TrailingWords {
        TrailingWords::default()
    }
}
