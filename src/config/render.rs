//! `[render]` section configuration.

use super::defaults;
use crate::render::TrailingWords;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[render]` section in glossgen.toml.
///
/// # Example
/// ```toml
/// [render]
/// trailing = "drop"   # or "keep" (default)
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Whether words after the last linked term are kept.
    #[serde(default = "defaults::render::trailing")]
    #[educe(Default = defaults::render::trailing())]
    pub trailing: TrailingWords,
}
