//! Term page rendering and definition cross-linking.
//!
//! Any whitespace-separated word of a definition that is itself a glossary
//! term becomes a link to that term's page. Matching is exact and
//! case-sensitive: `Term.` or `term` do not match `Term`.

use super::{INDEX_FILE, page_file_name, push_line};
use crate::glossary::Glossary;
use serde::{Deserialize, Serialize};

/// Handling of the words after the last linked term in a definition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TrailingWords {
    /// Emit them as plain text (default).
    #[default]
    Keep,
    /// Leave them out, matching the output of older glossary generators.
    Drop,
}

/// A piece of a rendered definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Space-separated run of words that are not terms.
    Text(String),
    /// A word that names a glossary term.
    Link(&'a str),
}

impl Segment<'_> {
    fn to_html(&self) -> String {
        match self {
            Segment::Text(text) => text.clone(),
            Segment::Link(term) => format!("<a href={}>{term}</a>", page_file_name(term)),
        }
    }
}

/// Split a definition into plain runs and term links.
///
/// A definition without any term yields a single [`Segment::Text`] holding
/// the definition unchanged.
pub fn link_definition<'a>(
    glossary: &Glossary,
    definition: &'a str,
    trailing: TrailingWords,
) -> Vec<Segment<'a>> {
    let words: Vec<&'a str> = definition.split_whitespace().collect();
    let mut segments = Vec::new();
    let mut run_start = 0;

    for (idx, &word) in words.iter().enumerate() {
        if !glossary.contains(word) {
            continue;
        }
        if run_start < idx {
            segments.push(Segment::Text(words[run_start..idx].join(" ")));
        }
        segments.push(Segment::Link(word));
        run_start = idx + 1;
    }

    if segments.is_empty() {
        return vec![Segment::Text(definition.to_owned())];
    }

    if trailing == TrailingWords::Keep && run_start < words.len() {
        segments.push(Segment::Text(words[run_start..].join(" ")));
    }

    segments
}

/// Render the page for `term`, or `None` if the glossary does not define it.
pub fn render_term(glossary: &Glossary, term: &str, trailing: TrailingWords) -> Option<String> {
    let definition = glossary.definition(term)?;
    let body = link_definition(glossary, definition, trailing)
        .iter()
        .map(Segment::to_html)
        .collect::<Vec<_>>()
        .join(" ");

    let mut html = String::with_capacity(256 + body.len());
    push_line(&mut html, "<html>");
    push_line(&mut html, "<head>");
    push_line(&mut html, &format!("<title>{term}</title>"));
    push_line(&mut html, "</head>");
    push_line(&mut html, "<body>");
    push_line(
        &mut html,
        &format!("<h2><b><i><font color=red>{term}</font></i></b></h2>"),
    );
    push_line(&mut html, "<blockquote>");
    push_line(&mut html, &body);
    push_line(&mut html, "</blockquote>");
    push_line(&mut html, "<hr>");
    push_line(
        &mut html,
        &format!("<p>Return to <a href={INDEX_FILE}>index</a></p>"),
    );
    push_line(&mut html, "</body>");
    push_line(&mut html, "</html>");

    Some(html)
}
