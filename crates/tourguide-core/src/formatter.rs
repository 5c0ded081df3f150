//! Guide text formatting.
//!
//! The guide answers with lines of the form `**Label**: content`, where
//! `*text*` marks emphasis. This module turns that text into display blocks;
//! it does not interpret the content any further.

use std::sync::LazyLock;

use regex::Regex;

static SECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*(.*?)\*\*:\s*(.*)").expect("static regex"));

static EMPHASIS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("static regex"));

/// A run of inline text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Emphasis(String),
}

/// One display line of a description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Blank line.
    Break,
    Section {
        label: String,
        content: Vec<Inline>,
        /// The closing anecdote, styled apart from the other sections.
        anecdote: bool,
    },
    Paragraph(Vec<Inline>),
}

/// Split a description into display blocks, one per line.
pub fn format_description(text: &str) -> Vec<Block> {
    text.lines().map(parse_line).collect()
}

fn parse_line(line: &str) -> Block {
    if line.trim().is_empty() {
        return Block::Break;
    }

    if let Some(caps) = SECTION_RE.captures(line) {
        let label = caps[1].to_string();
        let anecdote = label.eq_ignore_ascii_case("anecdote");
        return Block::Section {
            content: parse_inline(&caps[2]),
            label,
            anecdote,
        };
    }

    Block::Paragraph(parse_inline(line))
}

fn parse_inline(text: &str) -> Vec<Inline> {
    let mut spans = Vec::new();
    let mut last = 0;

    for caps in EMPHASIS_RE.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        if whole.start() > last {
            spans.push(Inline::Text(text[last..whole.start()].to_string()));
        }
        let inner = &caps[1];
        if !inner.is_empty() {
            spans.push(Inline::Emphasis(inner.to_string()));
        }
        last = whole.end();
    }

    if last < text.len() {
        spans.push(Inline::Text(text[last..].to_string()));
    }
    spans
}

impl Inline {
    pub fn text(&self) -> &str {
        match self {
            Inline::Text(t) | Inline::Emphasis(t) => t,
        }
    }
}

fn inline_text(spans: &[Inline]) -> String {
    spans.iter().map(Inline::text).collect()
}

/// The description without markup, for narration.
pub fn to_plain_text(description: &str) -> String {
    format_description(description)
        .iter()
        .filter_map(|block| match block {
            Block::Break => None,
            Block::Section { label, content, .. } => {
                Some(format!("{}. {}", label.trim_end_matches('.'), inline_text(content)))
            }
            Block::Paragraph(spans) => Some(inline_text(spans)),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
#[path = "formatter_tests.rs"]
mod tests;
