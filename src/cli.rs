//! Command-line interface definitions.
//!
//! Defines all CLI arguments using clap, plus the interactive prompt used
//! when a required path was given neither here nor in the config file.

use crate::{glossary::DuplicatePolicy, render::TrailingWords};
use anyhow::{Context, Result};
use clap::Parser;
use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

/// Generate cross-linked HTML pages from a glossary file
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Glossary source file (prompted for when omitted)
    pub input: Option<PathBuf>,

    /// Existing output directory (prompted for when omitted)
    pub output: Option<PathBuf>,

    /// Config file name (default: glossgen.toml)
    #[arg(short = 'C', long, default_value = "glossgen.toml")]
    pub config: PathBuf,

    /// Minify the html content
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = true)]
    pub minify: Option<bool>,

    /// What to do with a term defined twice
    #[arg(long, value_enum)]
    pub duplicates: Option<DuplicatePolicy>,

    /// Whether words after the last linked term are kept
    #[arg(long, value_enum)]
    pub trailing: Option<TrailingWords>,
}

/// Print `label` to `out` and read one line from `input`.
///
/// The line terminator is stripped. End of input yields an empty string.
pub fn prompt<R: BufRead, W: Write>(label: &str, input: &mut R, out: &mut W) -> Result<String> {
    write!(out, "{label}").context("Failed to write prompt")?;
    out.flush().context("Failed to write prompt")?;

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read answer")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

/// [`prompt`] on the process's stdin/stdout.
pub fn prompt_stdio(label: &str) -> Result<String> {
    prompt(label, &mut std::io::stdin().lock(), &mut std::io::stdout().lock())
}
