//! Text segmentation.
//!
//! Splits a document body into words, sentences, and paragraphs using plain
//! delimiter rules. No case folding or punctuation stripping is done, so every
//! count derived from these lists is a surface-level approximation.

/// Characters that end a sentence, in both full-width and ASCII forms.
pub const SENTENCE_TERMINATORS: &[char] = &['。', '！', '？', '.', '!', '?'];

/// A segmented view over one document body.
///
/// Built fresh per analysis call and never mutated. All segments borrow from
/// the original text.
#[derive(Debug, Clone)]
pub struct Document<'a> {
    raw: &'a str,
    words: Vec<&'a str>,
    sentences: Vec<&'a str>,
    paragraphs: Vec<&'a str>,
}

impl<'a> Document<'a> {
    /// Segment `raw` into words, sentences, and paragraphs.
    #[tracing::instrument(skip_all, fields(text_len = raw.len()))]
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            words: split_words(raw),
            sentences: split_sentences(raw),
            paragraphs: split_paragraphs(raw),
        }
    }

    /// The unmodified document body.
    pub const fn raw(&self) -> &'a str {
        self.raw
    }

    /// Whitespace-delimited tokens.
    pub fn words(&self) -> &[&'a str] {
        &self.words
    }

    /// Non-blank sentence segments, untrimmed.
    pub fn sentences(&self) -> &[&'a str] {
        &self.sentences
    }

    /// Non-blank lines, trimmed.
    pub fn paragraphs(&self) -> &[&'a str] {
        &self.paragraphs
    }

    /// Physical lines, including blank ones.
    pub fn lines(&self) -> impl Iterator<Item = &'a str> {
        self.raw.lines()
    }
}

/// Split text on whitespace.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Split text on [`SENTENCE_TERMINATORS`], dropping blank segments.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(SENTENCE_TERMINATORS)
        .filter(|s| !s.trim().is_empty())
        .collect()
}

/// Split text on line breaks, dropping blank lines.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Number of whitespace-delimited tokens in a segment.
pub fn word_count(segment: &str) -> usize {
    segment.split_whitespace().count()
}
