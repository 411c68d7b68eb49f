//! Journalism and communication studies specialty profile.

use crate::error::AnalysisResult;
use crate::lexicon::{
    COMMUNICATION_THEORIES, ExtraTerms, INDUSTRY_TERMS, INNOVATION_INDICATORS, RESEARCH_METHODS,
    SOCIAL_VALUE_TERMS, TermMatcher,
};
use crate::text::Document;

use super::quality::capped;
use super::reports::SpecialtyProfile;

/// Score theory, method, industry, social-value, and innovation vocabulary.
///
/// Each sub-score is presence-counted and capped at 100, so the weighted
/// overall score also stays within 0–100.
#[tracing::instrument(skip_all)]
pub fn analyze_specialty(doc: &Document<'_>, extra: &ExtraTerms) -> AnalysisResult<SpecialtyProfile> {
    let text = doc.raw();

    let theories = TermMatcher::new("theories", COMMUNICATION_THEORIES, &extra.theories)?;
    let methods = TermMatcher::new("methods", RESEARCH_METHODS, &extra.methods)?;
    let industry = TermMatcher::new("industry", INDUSTRY_TERMS, &extra.industry)?;
    let social = TermMatcher::new("social", SOCIAL_VALUE_TERMS, &extra.social)?;
    let innovation = TermMatcher::new("innovation", INNOVATION_INDICATORS, &extra.innovation)?;

    let theory_application = capped(theories.count_present(text), 20);
    let method_appropriateness = capped(methods.count_present(text), 25);
    let industry_relevance = capped(industry.count_present(text), 15);
    let social_value = capped(social.count_present(text), 20);
    let innovation_score = capped(innovation.count_present(text), 25);

    let overall_specialty_score = f64::from(theory_application) * 0.25
        + f64::from(method_appropriateness) * 0.25
        + f64::from(industry_relevance) * 0.2
        + f64::from(social_value) * 0.2
        + f64::from(innovation_score) * 0.1;

    Ok(SpecialtyProfile {
        theory_application,
        method_appropriateness,
        industry_relevance,
        social_value,
        innovation_score,
        overall_specialty_score,
    })
}
