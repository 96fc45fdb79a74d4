//! HTML page rendering.
//!
//! Two page kinds are produced:
//!
//! | Page        | File           | Module    |
//! |-------------|----------------|-----------|
//! | Index Page  | `index.html`   | [`index`] |
//! | Term Page   | `<term>.html`  | [`term`]  |
//!
//! Every element is written on its own line. Terms and definitions are
//! emitted verbatim: no HTML escaping is applied, so markup in the source
//! file ends up in the output.

mod index;
mod term;

pub use index::render_index;
pub use term::{TrailingWords, render_term};

/// File name of the index page.
pub const INDEX_FILE: &str = "index.html";

/// Output file name for a term page.
#[inline]
pub fn page_file_name(term: &str) -> String {
    format!("{term}.html")
}

/// Append `line` followed by a newline.
#[inline]
fn push_line(html: &mut String, line: &str) {
    html.push_str(line);
    html.push('\n');
}
