//! Document outline detection.
//!
//! Recovers a rough title, section list, and summary from plain text using
//! line heuristics for Chinese academic writing: chapter headings such as
//! `第一章 ...` and short label lines ending in a full-width colon.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text;

/// Title length limit, in characters.
const TITLE_CHARS: usize = 100;
/// Summary length limit, in characters.
const SUMMARY_CHARS: usize = 200;
/// Label lines shorter than this (in characters) can be headings.
const LABEL_HEADING_CHARS: usize = 50;

/// Outline recovered from a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Outline {
    /// First non-blank line, truncated.
    pub title: String,
    /// Detected sections in document order.
    pub sections: Vec<OutlineSection>,
    /// Number of non-blank lines.
    pub paragraph_count: usize,
    /// Leading excerpt of the document.
    pub summary: String,
}

/// One detected section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OutlineSection {
    /// Heading line.
    pub title: String,
    /// Body lines joined with newlines, each line newline-terminated.
    pub content: String,
}

/// Build an outline from plain text.
///
/// Lines before the first heading belong to no section.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn build_outline(text: &str) -> Outline {
    if text.is_empty() {
        return Outline::default();
    }

    let paragraphs = text::split_paragraphs(text);
    let title = paragraphs
        .first()
        .map(|p| p.chars().take(TITLE_CHARS).collect())
        .unwrap_or_default();

    let mut sections = Vec::new();
    let mut current: Option<OutlineSection> = None;
    for para in &paragraphs {
        if is_heading(para) {
            sections.extend(current.take());
            current = Some(OutlineSection {
                title: (*para).to_string(),
                content: String::new(),
            });
        } else if let Some(ref mut section) = current {
            section.content.push_str(para);
            section.content.push('\n');
        }
    }
    sections.extend(current);

    Outline {
        title,
        sections,
        paragraph_count: paragraphs.len(),
        summary: summarize(text),
    }
}

/// Whether a trimmed line looks like a section heading.
pub fn is_heading(line: &str) -> bool {
    let chapter = line.starts_with('第') && (line.contains('章') || line.contains('节'));
    let label = line.chars().count() < LABEL_HEADING_CHARS && line.ends_with('：');
    chapter || label
}

fn summarize(text: &str) -> String {
    if text.chars().count() > SUMMARY_CHARS {
        let mut summary: String = text.chars().take(SUMMARY_CHARS).collect();
        summary.push_str("...");
        summary
    } else {
        text.to_string()
    }
}
