//! HTML minification.
//!
//! Enabled by `[build] minify = true` or `--minify`.

use crate::config::GlossaryConfig;
use std::borrow::Cow;

/// Minify a rendered page if the config asks for it.
///
/// Returns `Cow::Borrowed` if minify disabled, `Cow::Owned` if minified.
pub fn minify<'a>(html: &'a [u8], config: &GlossaryConfig) -> Cow<'a, [u8]> {
    if config.build.minify {
        Cow::Owned(minify_html_inner(html))
    } else {
        Cow::Borrowed(html)
    }
}

/// Minify HTML content using `minify_html` crate.
fn minify_html_inner(html: &[u8]) -> Vec<u8> {
    let mut cfg = minify_html::Cfg::new();
    cfg.keep_closing_tags = true;
    cfg.keep_html_and_head_opening_tags = true;
    cfg.keep_comments = false;
    minify_html::minify(html, &cfg)
}
