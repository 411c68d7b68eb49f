//! Academic quality scoring: citations, formal connectives, academic terms.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{AnalysisError, AnalysisResult};
use crate::lexicon::{ACADEMIC_TERMS, ExtraTerms, FORMAL_CONNECTIVES, TermMatcher};
use crate::text::Document;

use super::reports::QualityProfile;

/// Built-in citation pattern families: `(Author, 2020)` and `[1,2]`.
pub const CITATION_PATTERNS: &[&str] = &[r"\([^)]+\d{4}\)", r"\[[\d,]+\]"];

static BUILTIN_CITATIONS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    CITATION_PATTERNS
        .iter()
        .map(|p| Regex::new(p).expect("valid regex"))
        .collect()
});

/// Counts citation-like matches across pattern families.
///
/// Families are counted independently, so text matching two families is
/// counted once per family.
#[derive(Debug, Clone)]
pub struct CitationCounter {
    patterns: Vec<Regex>,
}

impl CitationCounter {
    /// Built-in families plus any extra pattern sources.
    pub fn new(extra_patterns: &[String]) -> AnalysisResult<Self> {
        let mut patterns = BUILTIN_CITATIONS.clone();
        for source in extra_patterns {
            let re = Regex::new(source).map_err(|e| AnalysisError::InvalidPattern {
                pattern: source.clone(),
                source: e,
            })?;
            patterns.push(re);
        }
        Ok(Self { patterns })
    }

    /// Total non-overlapping matches, summed per family.
    pub fn count(&self, text: &str) -> usize {
        self.patterns
            .iter()
            .map(|re| re.find_iter(text).count())
            .sum()
    }
}

/// Score citations, formal language, and academic vocabulary.
#[tracing::instrument(skip_all)]
pub fn analyze_quality(
    doc: &Document<'_>,
    extra_terms: &ExtraTerms,
    extra_patterns: &[String],
) -> AnalysisResult<QualityProfile> {
    let citations = CitationCounter::new(extra_patterns)?;
    let formal = TermMatcher::new("formal", FORMAL_CONNECTIVES, &extra_terms.formal)?;
    let academic = TermMatcher::new("academic", ACADEMIC_TERMS, &extra_terms.academic)?;

    let text = doc.raw();
    let citation_count = citations.count(text);
    let formal_language_score = capped(formal.count_present(text), 10);
    let academic_terms_score = capped(academic.count_present(text), 15);

    Ok(QualityProfile {
        citation_count,
        formal_language_score,
        academic_terms_score,
        overall_quality_score: overall_quality(
            formal_language_score,
            academic_terms_score,
            citation_count,
        ),
    })
}

/// `0.4 × formal + 0.4 × academic + min(citations × 10, 20)`.
///
/// The blend itself is not clamped; the bound of 100 follows from the caps
/// on its inputs.
pub fn overall_quality(formal: u32, academic: u32, citation_count: usize) -> f64 {
    let citation_part = citation_count.saturating_mul(10).min(20) as f64;
    f64::from(formal) * 0.4 + f64::from(academic) * 0.4 + citation_part
}

/// `hits × per_hit`, capped at 100.
pub(crate) fn capped(hits: usize, per_hit: u32) -> u32 {
    u32::try_from(hits)
        .unwrap_or(u32::MAX)
        .saturating_mul(per_hit)
        .min(100)
}
