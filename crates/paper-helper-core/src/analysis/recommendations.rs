//! Threshold rules that turn scores into improvement advice.
//!
//! Rules run in a fixed order and the list is cut at the variant's cap, so an
//! earlier rule is never displaced by a later one. There is no ranking.

use std::sync::LazyLock;

use crate::lexicon::{
    ABSTRACT_MARKERS, ADVISORY_CONNECTIVES, CONTRIBUTION_INDICATORS, DISCIPLINE_TERMS,
    KEYWORDS_MARKERS, METHOD_INDICATORS, REFERENCES_MARKERS, THEORY_INDICATORS, TermMatcher,
    contains_any,
};
use crate::text::Document;

use super::Variant;
use super::reports::{BasicStats, QualityProfile};

/// Below this many words the draft is considered short.
pub const MIN_WORDS: usize = 1000;
/// Above this many words the draft is considered long.
pub const MAX_WORDS: usize = 10_000;
/// Above this many citations the draft is considered over-cited.
pub const MAX_CITATIONS: usize = 50;

fn builtin(list: &'static str, terms: &[&str]) -> TermMatcher {
    TermMatcher::new(list, terms, &[]).expect("valid term list")
}

static CONNECTIVES: LazyLock<TermMatcher> =
    LazyLock::new(|| builtin("advisory connectives", ADVISORY_CONNECTIVES));

static DISCIPLINE_RULES: LazyLock<[(TermMatcher, usize, Advice); 4]> = LazyLock::new(|| {
    [
        (builtin("discipline", DISCIPLINE_TERMS), 3, Advice::DisciplineTerms),
        (builtin("theory indicators", THEORY_INDICATORS), 2, Advice::TheoryFraming),
        (builtin("method indicators", METHOD_INDICATORS), 2, Advice::MethodDetail),
        (
            builtin("contribution indicators", CONTRIBUTION_INDICATORS),
            1,
            Advice::StateContribution,
        ),
    ]
});

const SECTION_RULES: [(&[&str], Advice); 3] = [
    (ABSTRACT_MARKERS, Advice::AddAbstract),
    (KEYWORDS_MARKERS, Advice::AddKeywords),
    (REFERENCES_MARKERS, Advice::AddReferences),
];

/// One piece of advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advice {
    /// Fewer than [`MIN_WORDS`] words.
    TooShort,
    /// More than [`MAX_WORDS`] words.
    TooLong,
    /// Under the variant's citation floor.
    FewCitations,
    /// Over [`MAX_CITATIONS`] citations.
    ManyCitations,
    /// Fewer than three formal connectives.
    InformalLanguage,
    /// No abstract marker.
    AddAbstract,
    /// No keywords marker.
    AddKeywords,
    /// No references marker.
    AddReferences,
    /// Little discipline vocabulary.
    DisciplineTerms,
    /// Little theoretical framing.
    TheoryFraming,
    /// Research method barely described.
    MethodDetail,
    /// No stated contribution.
    StateContribution,
}

impl Advice {
    /// The advisory text shown to the writer.
    pub const fn message(self) -> &'static str {
        match self {
            Self::TooShort => {
                "The draft is short; expand it with more theoretical analysis and empirical detail."
            }
            Self::TooLong => "The draft is long; tighten the wording and foreground the core argument.",
            Self::FewCitations => {
                "Cite more sources, especially important work from the last five years."
            }
            Self::ManyCitations => {
                "The draft cites heavily; keep the core references and avoid over-citation."
            }
            Self::InformalLanguage => {
                "Use more formal academic language and logical connectives to tighten the argument."
            }
            Self::AddAbstract => {
                "Add an abstract summarizing the purpose, method, results, and conclusion."
            }
            Self::AddKeywords => "Add a keywords section to help indexing and retrieval.",
            Self::AddReferences => {
                "Add a references section so every citation is complete and traceable."
            }
            Self::DisciplineTerms => {
                "Use more journalism and communication terminology and theory to show the discipline."
            }
            Self::TheoryFraming => {
                "Strengthen the theoretical analysis with relevant communication theories."
            }
            Self::MethodDetail => {
                "Describe the research method in detail: design, data collection, and analysis."
            }
            Self::StateContribution => {
                "State the study's innovations and theoretical contribution explicitly."
            }
        }
    }
}

impl std::fmt::Display for Advice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Inputs the rules inspect. A `None` quality profile means that component
/// failed and the citation rules are skipped.
#[derive(Debug, Clone, Copy)]
pub struct RuleInputs<'r> {
    /// Surface statistics.
    pub stats: &'r BasicStats,
    /// Quality profile, if available.
    pub quality: Option<&'r QualityProfile>,
}

/// Evaluate the rules in order and truncate to the variant's cap.
#[tracing::instrument(skip_all, fields(variant = %variant))]
pub fn generate_recommendations(
    doc: &Document<'_>,
    inputs: RuleInputs<'_>,
    variant: Variant,
) -> Vec<Advice> {
    let text = doc.raw();
    let mut advice = Vec::new();

    let words = inputs.stats.total_words;
    if words < MIN_WORDS {
        advice.push(Advice::TooShort);
    } else if words > MAX_WORDS {
        advice.push(Advice::TooLong);
    }

    if let Some(quality) = inputs.quality {
        if quality.citation_count < variant.citation_floor() {
            advice.push(Advice::FewCitations);
        } else if variant.is_extended() && quality.citation_count > MAX_CITATIONS {
            advice.push(Advice::ManyCitations);
        }
    }

    if CONNECTIVES.count_present(text) < 3 {
        advice.push(Advice::InformalLanguage);
    }

    // Whole-text, case-sensitive search, independent of the structural profile.
    for (markers, item) in SECTION_RULES {
        if !contains_any(text, markers) {
            advice.push(item);
        }
    }

    if variant.is_extended() {
        for (matcher, minimum, item) in DISCIPLINE_RULES.iter() {
            if matcher.count_present(text) < *minimum {
                advice.push(*item);
            }
        }
    }

    advice.truncate(variant.recommendation_cap());
    advice
}
