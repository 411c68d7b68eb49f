//! Surface statistics.

use crate::text::Document;

use super::reports::BasicStats;

/// Reading speed used for the time estimate.
const WORDS_PER_MINUTE: f64 = 200.0;

/// Count characters, words, sentences, and paragraphs.
#[tracing::instrument(skip_all)]
pub fn analyze_basic_stats(doc: &Document<'_>) -> BasicStats {
    let total_words = doc.words().len();
    let total_sentences = doc.sentences().len();

    BasicStats {
        total_characters: doc.raw().chars().count(),
        total_words,
        total_sentences,
        total_paragraphs: doc.paragraphs().len(),
        avg_sentence_length: total_words as f64 / total_sentences.max(1) as f64,
        reading_time_minutes: total_words as f64 / WORDS_PER_MINUTE,
    }
}
