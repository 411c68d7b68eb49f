//! Citation extraction.
//!
//! Lists every bracketed or parenthesized span that could be a citation, in
//! ASCII and full-width forms. This is a listing aid for the writer, broader
//! than the citation count used for scoring.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Bracket style a citation was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CitationKind {
    /// `(...)`
    Parenthesized,
    /// `[...]`
    Bracketed,
    /// `（...）`
    FullWidthParenthesized,
    /// `【...】`
    FullWidthBracketed,
}

impl CitationKind {
    /// All kinds in extraction order.
    pub const ALL: [Self; 4] = [
        Self::Parenthesized,
        Self::Bracketed,
        Self::FullWidthParenthesized,
        Self::FullWidthBracketed,
    ];

    fn regex(self) -> &'static Regex {
        match self {
            Self::Parenthesized => &PARENTHESIZED,
            Self::Bracketed => &BRACKETED,
            Self::FullWidthParenthesized => &FULL_WIDTH_PARENTHESIZED,
            Self::FullWidthBracketed => &FULL_WIDTH_BRACKETED,
        }
    }
}

static PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)").expect("valid regex"));

static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]").expect("valid regex"));

static FULL_WIDTH_PARENTHESIZED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"（([^）]+)）").expect("valid regex"));

static FULL_WIDTH_BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"【([^】]+)】").expect("valid regex"));

/// A span that looks like a citation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Citation {
    /// Text inside the brackets.
    pub text: String,
    /// Bracket style.
    pub kind: CitationKind,
    /// Byte offset of the first occurrence of `text` in the document.
    pub offset: usize,
}

/// Extract candidate citations, grouped by kind and ordered by position.
///
/// `offset` points at the first occurrence of the inner text anywhere in the
/// document, so repeated citations share an offset.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn extract_citations(text: &str) -> Vec<Citation> {
    let mut citations = Vec::new();

    for kind in CitationKind::ALL {
        for caps in kind.regex().captures_iter(text) {
            let Some(inner) = caps.get(1) else {
                continue;
            };
            let inner = inner.as_str();
            citations.push(Citation {
                text: inner.to_string(),
                kind,
                offset: text.find(inner).unwrap_or_default(),
            });
        }
    }

    tracing::debug!(count = citations.len(), "citations extracted");
    citations
}
