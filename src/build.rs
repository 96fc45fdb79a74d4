//! Glossary site building.
//!
//! # Architecture
//!
//! ```text
//! build_glossary()
//!     │
//!     ├── read + parse input ──► Glossary (immutable from here on)
//!     │
//!     ├── check page names + output directory
//!     │
//!     ├── render_index() ──► index.html
//!     │
//!     └── write_term_pages() ──► <term>.html, in parallel
//! ```
//!
//! Any failure aborts the build. Pages written before the failure stay on
//! disk.

use crate::{
    config::GlossaryConfig,
    glossary::{Glossary, parse},
    log,
    logger::ProgressBars,
    render::{INDEX_FILE, page_file_name, render_index, render_term},
    utils::minify::minify,
};
use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::atomic::{AtomicBool, Ordering},
};

/// Outcome of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    /// Number of term pages written (the index page is not counted).
    pub pages: usize,
    /// Directory the pages were written to.
    pub output: PathBuf,
}

/// Parse the configured input and write the index and all term pages.
///
/// The input is read and parsed completely before anything is written.
pub fn build_glossary(config: &GlossaryConfig) -> Result<BuildSummary> {
    let input = config.input()?;
    let output = config.output()?;

    let glossary = load_glossary(input, config)?;
    log!("parse"; "{} terms from {}", glossary.len(), input.display());
    if glossary.is_empty() {
        log!("warn"; "glossary is empty, only the index will be written");
    }

    check_page_names(&glossary)?;
    ensure_output_dir(output)?;

    write_page(&output.join(INDEX_FILE), render_index(&glossary).as_bytes(), config)?;
    log!("index"; "{}", INDEX_FILE);

    let terms = glossary.sorted_terms();
    write_term_pages(&glossary, &terms, output, config)?;

    Ok(BuildSummary {
        pages: terms.len(),
        output: output.to_path_buf(),
    })
}

/// Read and parse the glossary source file.
fn load_glossary(input: &Path, config: &GlossaryConfig) -> Result<Glossary> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("Failed to read glossary file: {}", input.display()))?;
    let glossary = parse(&source, config.parse.duplicates)
        .with_context(|| format!("Malformed glossary file: {}", input.display()))?;
    Ok(glossary)
}

/// Reject terms whose page would overwrite the index page.
///
/// The comparison ignores ASCII case so `Index` is caught on
/// case-insensitive filesystems too.
fn check_page_names(glossary: &Glossary) -> Result<()> {
    if let Some(term) = glossary
        .sorted_terms()
        .into_iter()
        .find(|term| page_file_name(term).eq_ignore_ascii_case(INDEX_FILE))
    {
        bail!("Term `{term}` would overwrite the index page {INDEX_FILE}");
    }
    Ok(())
}

/// The output directory is never created; it must already exist.
fn ensure_output_dir(output: &Path) -> Result<()> {
    if !output.exists() {
        bail!("Output directory not found: {}", output.display());
    }
    if !output.is_dir() {
        bail!("Output path is not a directory: {}", output.display());
    }
    Ok(())
}

/// Render and write one page per term.
///
/// The first failure is logged and returned; pages not yet started are skipped.
fn write_term_pages(
    glossary: &Glossary,
    terms: &[&str],
    output: &Path,
    config: &GlossaryConfig,
) -> Result<()> {
    let progress = ProgressBars::new_filtered(&[("pages", terms.len())]);
    let has_error = AtomicBool::new(false);

    let result = terms.par_iter().try_for_each(|term| {
        // Another worker already failed and its error is the one reported
        if has_error.load(Ordering::Relaxed) {
            return Ok(());
        }
        if let Err(e) = write_term_page(glossary, term, output, config) {
            if !has_error.swap(true, Ordering::Relaxed) {
                log!("error"; "{term}: {e:#}");
            }
            return Err(e);
        }
        if let Some(progress) = &progress {
            progress.inc_by_name("pages");
        }
        Ok(())
    });

    if let Some(progress) = &progress {
        progress.finish();
    }
    result
}

fn write_term_page(
    glossary: &Glossary,
    term: &str,
    output: &Path,
    config: &GlossaryConfig,
) -> Result<()> {
    let html = render_term(glossary, term, config.render.trailing)
        .with_context(|| format!("Term `{term}` is not in the glossary"))?;
    write_page(&output.join(page_file_name(term)), html.as_bytes(), config)
}

/// Minify (if enabled) and write a page.
fn write_page(path: &Path, html: &[u8], config: &GlossaryConfig) -> Result<()> {
    let html = minify(html, config);
    fs::write(path, &*html).with_context(|| format!("Failed to write {}", path.display()))
}

// ============================================================================
// Tests
// ============================================================================
