//! Report types for document analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for use in
//! both CLI JSON output and MCP tool responses.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

use super::Variant;

/// Full document analysis report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
    /// Feature set the report was produced with.
    pub variant: Variant,
    /// Surface statistics.
    pub basic_stats: BasicStats,
    /// Section presence and completeness.
    pub structure_analysis: ComponentResult<StructuralProfile>,
    /// Citations, formal language, and academic vocabulary.
    pub academic_quality: ComponentResult<QualityProfile>,
    /// Sentence complexity, diversity, formality, clarity.
    pub writing_style: ComponentResult<StyleProfile>,
    /// Discipline profile (extended variant only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub communication_analysis: Option<ComponentResult<SpecialtyProfile>>,
    /// Improvement advice in rule order.
    pub recommendations: Vec<String>,
}

impl AnalysisReport {
    /// Messages from every component that failed.
    pub fn component_errors(&self) -> Vec<(&'static str, &str)> {
        let mut errors = Vec::new();
        if let Some(e) = self.structure_analysis.error() {
            errors.push(("structure_analysis", e));
        }
        if let Some(e) = self.academic_quality.error() {
            errors.push(("academic_quality", e));
        }
        if let Some(e) = self.writing_style.error() {
            errors.push(("writing_style", e));
        }
        if let Some(e) = self
            .communication_analysis
            .as_ref()
            .and_then(ComponentResult::error)
        {
            errors.push(("communication_analysis", e));
        }
        errors
    }
}

/// Outcome of one scoring component.
///
/// Serializes as the profile itself on success, or as `{"error": "..."}` when
/// the component failed. A failed component never blanks out its siblings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ComponentResult<T> {
    /// The component produced a profile.
    Ok(T),
    /// The component failed.
    Failed {
        /// What went wrong.
        error: String,
    },
}

impl<T> ComponentResult<T> {
    /// The profile, if the component succeeded.
    pub const fn ok(&self) -> Option<&T> {
        match self {
            Self::Ok(v) => Some(v),
            Self::Failed { .. } => None,
        }
    }

    /// The failure message, if the component failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Ok(_) => None,
            Self::Failed { error } => Some(error.as_str()),
        }
    }

    /// Returns `true` if the component succeeded.
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }
}

impl<T> From<AnalysisResult<T>> for ComponentResult<T> {
    fn from(result: AnalysisResult<T>) -> Self {
        match result {
            Ok(v) => Self::Ok(v),
            Err(e) => Self::Failed {
                error: e.to_string(),
            },
        }
    }
}

/// Either a report or a single error field.
///
/// This is the shape handed to presentation layers: an empty document yields
/// `{"error": "..."}` and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    /// Analysis ran.
    Report(Box<AnalysisReport>),
    /// Analysis was refused.
    Error {
        /// Why the document was not analyzed.
        error: String,
    },
}

impl From<Result<AnalysisReport, AnalysisError>> for AnalysisOutcome {
    fn from(result: Result<AnalysisReport, AnalysisError>) -> Self {
        match result {
            Ok(report) => Self::Report(Box::new(report)),
            Err(e) => Self::Error {
                error: e.to_string(),
            },
        }
    }
}

// -- Basic statistics -------------------------------------------------------

/// Surface statistics over the segmented document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BasicStats {
    /// Unicode scalar values in the body.
    pub total_characters: usize,
    /// Whitespace-delimited tokens.
    pub total_words: usize,
    /// Non-blank sentence segments.
    pub total_sentences: usize,
    /// Non-blank lines.
    pub total_paragraphs: usize,
    /// Words per sentence (sentence count floored at 1).
    pub avg_sentence_length: f64,
    /// Minutes at 200 words per minute.
    pub reading_time_minutes: f64,
}

// -- Structure --------------------------------------------------------------

/// Presence of the five canonical sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StructuralProfile {
    /// Abstract marker found.
    pub has_abstract: bool,
    /// Keywords marker found.
    pub has_keywords: bool,
    /// Introduction marker found.
    pub has_introduction: bool,
    /// Conclusion marker found.
    pub has_conclusion: bool,
    /// References marker found.
    pub has_references: bool,
    /// Weighted completeness (0–100).
    pub structure_score: u32,
}

// -- Academic quality -------------------------------------------------------

/// Citation and vocabulary heuristics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct QualityProfile {
    /// Matches across all citation pattern families, counted per family.
    pub citation_count: usize,
    /// Distinct formal connectives × 10, capped at 100.
    pub formal_language_score: u32,
    /// Distinct academic terms × 15, capped at 100.
    pub academic_terms_score: u32,
    /// 0.4 × formal + 0.4 × academic + min(citations × 10, 20). Not re-clamped.
    pub overall_quality_score: f64,
}

// -- Writing style ----------------------------------------------------------

/// Sentence- and vocabulary-level style scores, each 0–100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StyleProfile {
    /// Average words per sentence × 2, capped at 100.
    pub sentence_complexity: f64,
    /// Unique words / total words × 100.
    pub vocabulary_diversity: f64,
    /// 100 − 10 per distinct pronoun, floored at 0.
    pub tone_formality: u32,
    /// 100 − 15 per sentence over 30 words, floored at 0.
    pub clarity_score: u32,
}

// -- Communication specialty ------------------------------------------------

/// Journalism and communication studies profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SpecialtyProfile {
    /// Theories named × 20, capped at 100.
    pub theory_application: u32,
    /// Methods named × 25, capped at 100.
    pub method_appropriateness: u32,
    /// Industry terms × 15, capped at 100.
    pub industry_relevance: u32,
    /// Social-value terms × 20, capped at 100.
    pub social_value: u32,
    /// Innovation indicators × 25, capped at 100.
    pub innovation_score: u32,
    /// Weighted blend of the five sub-scores.
    pub overall_specialty_score: f64,
}
