//! Heuristic document analysis.
//!
//! Decomposes scoring into independent components, assembled by
//! [`Analyzer::analyze`]:
//!
//! - [`basic_stats`]: surface counts
//! - [`structure`]: section presence and completeness
//! - [`quality`]: citations, formal connectives, academic terms
//! - [`style`]: complexity, diversity, formality, clarity
//! - [`specialty`]: journalism and communication profile (extended variant)
//! - [`recommendations`]: threshold rules over the above
//!
//! Each component is a pure function of the document text. Callers can also
//! invoke components individually.

pub mod basic_stats;
pub mod quality;
pub mod recommendations;
pub mod reports;
pub mod specialty;
pub mod structure;
pub mod style;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use reports::{
    AnalysisOutcome, AnalysisReport, BasicStats, ComponentResult, QualityProfile,
    SpecialtyProfile, StructuralProfile, StyleProfile,
};

use crate::error::{AnalysisError, AnalysisResult};
use crate::lexicon::ExtraTerms;
use crate::text::Document;

use recommendations::RuleInputs;

/// Feature set selected for an analysis run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Variant {
    /// Structure, quality, and style; up to five recommendations.
    Baseline,
    /// Adds the communication specialty profile; up to eight recommendations.
    #[default]
    Extended,
}

impl Variant {
    /// Maximum number of recommendations returned.
    pub const fn recommendation_cap(self) -> usize {
        match self {
            Self::Baseline => 5,
            Self::Extended => 8,
        }
    }

    /// Citation count below which more citations are advised.
    pub const fn citation_floor(self) -> usize {
        match self {
            Self::Baseline => 3,
            Self::Extended => 5,
        }
    }

    /// Returns `true` for [`Variant::Extended`].
    pub const fn is_extended(self) -> bool {
        matches!(self, Self::Extended)
    }

    /// Lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Extended => "extended",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only analyzer configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzerSettings {
    /// Feature set.
    pub variant: Variant,
    /// Additions to the built-in term lists.
    pub extra_terms: ExtraTerms,
    /// Additional citation regex sources.
    pub extra_citation_patterns: Vec<String>,
}

/// Stateless document analyzer.
///
/// Holds only immutable settings, so one instance can be shared across
/// threads and reused for any number of documents.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    settings: AnalyzerSettings,
}

impl Analyzer {
    /// Create an analyzer with the given settings.
    pub const fn new(settings: AnalyzerSettings) -> Self {
        Self { settings }
    }

    /// Create an analyzer with built-in term lists for a variant.
    pub fn with_variant(variant: Variant) -> Self {
        Self::new(AnalyzerSettings {
            variant,
            ..AnalyzerSettings::default()
        })
    }

    /// Settings in use.
    pub const fn settings(&self) -> &AnalyzerSettings {
        &self.settings
    }

    /// Analyze one document body.
    ///
    /// Returns [`AnalysisError::EmptyInput`] for an empty string without
    /// running any component. Otherwise every component runs; a component
    /// that fails is reported in its own section and the rest still populate.
    #[tracing::instrument(skip_all, fields(text_len = text.len(), variant = %self.settings.variant))]
    pub fn analyze(&self, text: &str) -> AnalysisResult<AnalysisReport> {
        if text.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let settings = &self.settings;
        let variant = settings.variant;
        let doc = Document::new(text);

        let basic_stats = basic_stats::analyze_basic_stats(&doc);

        let structure_analysis = ComponentResult::Ok(structure::analyze_structure(&doc));

        let academic_quality = component(
            "academic_quality",
            quality::analyze_quality(
                &doc,
                &settings.extra_terms,
                &settings.extra_citation_patterns,
            ),
        );

        let writing_style = component("writing_style", style::analyze_style(&doc));

        let communication_analysis = variant.is_extended().then(|| {
            component(
                "communication_analysis",
                specialty::analyze_specialty(&doc, &settings.extra_terms),
            )
        });

        let inputs = RuleInputs {
            stats: &basic_stats,
            quality: academic_quality.ok(),
        };
        let recommendations = recommendations::generate_recommendations(&doc, inputs, variant)
            .iter()
            .map(|a| a.message().to_string())
            .collect();

        Ok(AnalysisReport {
            variant,
            basic_stats,
            structure_analysis,
            academic_quality,
            writing_style,
            communication_analysis,
            recommendations,
        })
    }

    /// Analyze and fold the result into the presentation shape.
    pub fn analyze_outcome(&self, text: &str) -> AnalysisOutcome {
        AnalysisOutcome::from(self.analyze(text))
    }
}

fn component<T>(name: &'static str, result: AnalysisResult<T>) -> ComponentResult<T> {
    if let Err(ref e) = result {
        tracing::warn!(component = name, error = %e, "component failed");
    }
    ComponentResult::from(result)
}
