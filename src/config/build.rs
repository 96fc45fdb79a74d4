//! `[build]` section configuration.
//!
//! Where to read the glossary from, where to write pages, and whether to
//! minify them.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[build]` section in glossgen.toml.
///
/// # Example
/// ```toml
/// [build]
/// input = "glossary.txt"   # Glossary source file
/// output = "public"        # Existing output directory
/// minify = false           # Minify HTML
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Glossary source file. Prompted for when unset.
    #[serde(default = "defaults::build::input")]
    #[educe(Default = defaults::build::input())]
    pub input: Option<PathBuf>,

    /// Output directory. Must already exist. Prompted for when unset.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: Option<PathBuf>,

    /// Minify HTML output (removes whitespace between tags).
    #[serde(default = "defaults::r#false")]
    #[educe(Default = false)]
    pub minify: bool,
}
