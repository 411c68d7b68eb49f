//! Section presence detection and completeness scoring.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::text::Document;

use super::reports::StructuralProfile;

/// The five canonical sections of an academic paper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// 摘要 / Abstract.
    Abstract,
    /// 关键词 / Keywords.
    Keywords,
    /// 引言 / Introduction.
    Introduction,
    /// 结论 / Conclusion.
    Conclusion,
    /// 参考文献 / References.
    References,
}

impl Section {
    /// All sections in scan order.
    pub const ALL: [Self; 5] = [
        Self::Abstract,
        Self::Keywords,
        Self::Introduction,
        Self::Conclusion,
        Self::References,
    ];

    /// Points this section contributes to the completeness score.
    pub const fn weight(self) -> u32 {
        match self {
            Self::Abstract | Self::Introduction | Self::Conclusion => 20,
            Self::Keywords => 15,
            Self::References => 25,
        }
    }

    /// Marker in the primary language, matched as-is.
    pub const fn localized_marker(self) -> &'static str {
        match self {
            Self::Abstract => "摘要",
            Self::Keywords => "关键词",
            Self::Introduction => "引言",
            Self::Conclusion => "结论",
            Self::References => "参考文献",
        }
    }

    /// English marker, matched case-insensitively.
    pub const fn english_marker(self) -> &'static str {
        match self {
            Self::Abstract => "abstract",
            Self::Keywords => "keywords",
            Self::Introduction => "introduction",
            Self::Conclusion => "conclusion",
            Self::References => "references",
        }
    }

    /// Human-readable section name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Abstract => "Abstract",
            Self::Keywords => "Keywords",
            Self::Introduction => "Introduction",
            Self::Conclusion => "Conclusion",
            Self::References => "References",
        }
    }

    fn matches(self, line: &str, line_lower: &str) -> bool {
        line.contains(self.localized_marker()) || line_lower.contains(self.english_marker())
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl StructuralProfile {
    /// Whether `section` was detected.
    pub const fn has(&self, section: Section) -> bool {
        match section {
            Section::Abstract => self.has_abstract,
            Section::Keywords => self.has_keywords,
            Section::Introduction => self.has_introduction,
            Section::Conclusion => self.has_conclusion,
            Section::References => self.has_references,
        }
    }

    /// Sections that were not detected, in scan order.
    pub fn missing(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| !self.has(*s))
            .collect()
    }

    fn mark(&mut self, section: Section) {
        let flag = match section {
            Section::Abstract => &mut self.has_abstract,
            Section::Keywords => &mut self.has_keywords,
            Section::Introduction => &mut self.has_introduction,
            Section::Conclusion => &mut self.has_conclusion,
            Section::References => &mut self.has_references,
        };
        *flag = true;
    }

    /// Weighted sum over the detected sections.
    fn weighted_score(&self) -> u32 {
        Section::ALL
            .into_iter()
            .filter(|s| self.has(*s))
            .map(Section::weight)
            .sum()
    }
}

/// Scan lines for section markers and score completeness.
///
/// A section counts once no matter how many lines mention it.
#[tracing::instrument(skip_all)]
pub fn analyze_structure(doc: &Document<'_>) -> StructuralProfile {
    let mut profile = StructuralProfile::default();

    for line in doc.lines() {
        let line_lower = line.to_lowercase();
        for section in Section::ALL {
            if !profile.has(section) && section.matches(line, &line_lower) {
                profile.mark(section);
            }
        }
    }

    profile.structure_score = profile.weighted_score();
    profile
}
