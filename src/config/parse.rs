//! `[parse]` section configuration.

use super::defaults;
use crate::glossary::DuplicatePolicy;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[parse]` section in glossgen.toml.
///
/// # Example
/// ```toml
/// [parse]
/// duplicates = "last"   # or "reject" (default)
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct ParseConfig {
    /// Policy for a term defined more than once.
    #[serde(default = "defaults::parse::duplicates")]
    #[educe(Default = defaults::parse::duplicates())]
    pub duplicates: DuplicatePolicy,
}
