//! Writing style scoring: complexity, diversity, formality, clarity.

use std::collections::HashSet;

use crate::error::AnalysisResult;
use crate::lexicon::{PRONOUNS, TermMatcher};
use crate::text::{self, Document};

use super::reports::StyleProfile;

/// Sentences longer than this many words hurt clarity.
pub const LONG_SENTENCE_WORDS: usize = 30;

/// Score sentence complexity, vocabulary diversity, tone, and clarity.
///
/// - Complexity: average words per sentence × 2, capped at 100
/// - Diversity: unique words / words × 100 (0 for an empty word list)
/// - Formality: 100 − 10 per distinct pronoun present, floored at 0
/// - Clarity: 100 − 15 per sentence over [`LONG_SENTENCE_WORDS`], floored at 0
#[tracing::instrument(skip_all)]
pub fn analyze_style(doc: &Document<'_>) -> AnalysisResult<StyleProfile> {
    let pronouns = TermMatcher::new("pronouns", PRONOUNS, &[])?;

    let sentence_lengths: Vec<usize> = doc.sentences().iter().map(|s| text::word_count(s)).collect();
    let total: usize = sentence_lengths.iter().sum();
    let avg_sentence_length = total as f64 / sentence_lengths.len().max(1) as f64;

    let words = doc.words();
    let vocabulary_diversity = if words.is_empty() {
        0.0
    } else {
        let unique: HashSet<&str> = words.iter().copied().collect();
        (unique.len() as f64 / words.len() as f64 * 100.0).min(100.0)
    };

    let pronoun_count = pronouns.count_present(doc.raw());
    let long_sentences = sentence_lengths
        .iter()
        .filter(|len| **len > LONG_SENTENCE_WORDS)
        .count();

    Ok(StyleProfile {
        sentence_complexity: (avg_sentence_length * 2.0).min(100.0),
        vocabulary_diversity,
        tone_formality: deduct(pronoun_count, 10),
        clarity_score: deduct(long_sentences, 15),
    })
}

/// `100 − hits × per_hit`, floored at 0.
fn deduct(hits: usize, per_hit: u32) -> u32 {
    let penalty = u32::try_from(hits)
        .unwrap_or(u32::MAX)
        .saturating_mul(per_hit);
    100u32.saturating_sub(penalty)
}
