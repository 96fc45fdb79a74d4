//! Glossary source parser.
//!
//! # Format
//!
//! ```text
//! term
//! first definition line
//! more definition lines...
//! <blank line>
//! next term
//! ...
//! ```
//!
//! Definition lines are joined with a single space. The last record may end
//! at end of input instead of a blank line.

use super::Glossary;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What to do when a term is defined twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Fail with [`ParseError::DuplicateTerm`] (default).
    #[default]
    Reject,
    /// Keep the definition that appears last.
    Last,
}

/// Malformed glossary source.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: term `{term}` has no definition")]
    MissingDefinition { term: String, line: usize },

    #[error("line {line}: term `{term}` is already defined")]
    DuplicateTerm { term: String, line: usize },
}

/// Parse glossary source text.
pub fn parse(text: &str, duplicates: DuplicatePolicy) -> Result<Glossary, ParseError> {
    parse_lines(text.lines(), duplicates)
}

/// Parse a sequence of lines (without line terminators) into a [`Glossary`].
///
/// Blank lines between records are skipped. A term directly followed by a
/// blank line or end of input is a [`ParseError::MissingDefinition`].
pub fn parse_lines<'a, I>(lines: I, duplicates: DuplicatePolicy) -> Result<Glossary, ParseError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut lines = lines.into_iter().enumerate().map(|(idx, line)| (idx + 1, line));
    let mut entries: FxHashMap<String, String> = FxHashMap::default();

    while let Some((line_no, term)) = lines.by_ref().find(|(_, line)| !is_blank(line)) {
        let mut definition = match lines.next() {
            Some((_, line)) if !is_blank(line) => line.to_owned(),
            _ => {
                return Err(ParseError::MissingDefinition {
                    term: term.to_owned(),
                    line: line_no,
                });
            }
        };

        for (_, line) in lines.by_ref() {
            if is_blank(line) {
                break;
            }
            definition.push(' ');
            definition.push_str(line);
        }

        if duplicates == DuplicatePolicy::Reject && entries.contains_key(term) {
            return Err(ParseError::DuplicateTerm {
                term: term.to_owned(),
                line: line_no,
            });
        }
        entries.insert(term.to_owned(), definition);
    }

    Ok(Glossary::from_entries(entries))
}

#[inline]
fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
