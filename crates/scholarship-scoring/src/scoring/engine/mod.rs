mod content;
pub mod ladder;
mod recommendation;
pub mod rules;

pub use content::{
    ContentAssessor, FixedContentAssessor, SimulatedContentAssessor, SIMULATED_CONTENT_MAX,
    SIMULATED_CONTENT_MIN,
};
pub use recommendation::{RecommendationNote, RecommendationTier, Recommendations};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::ApplicantRecord;

/// Stateless evaluator applying the scholarship rubric to an applicant record.
///
/// The engine never fails: absent fields contribute nothing to their
/// sub-score. Callers that require a grade and a motivation letter before
/// scoring enforce that themselves (see [`ApplicantRecord::is_complete`]).
pub struct ScoringEngine<C = SimulatedContentAssessor> {
    content: C,
}

impl ScoringEngine<SimulatedContentAssessor> {
    /// Engine backed by the simulated content assessment.
    pub fn simulated(seed: Option<u64>) -> Self {
        Self::new(SimulatedContentAssessor::from_seed(seed))
    }
}

impl<C: ContentAssessor> ScoringEngine<C> {
    pub fn new(content: C) -> Self {
        Self { content }
    }

    pub fn content_assessor(&self) -> &C {
        &self.content
    }

    pub fn evaluate(&self, record: &ApplicantRecord) -> ScoreResult {
        let academic = rules::academic_score(record);
        let socioeconomic = rules::socioeconomic_score(record);

        let letter = record.letter();
        let content_points = letter
            .map(|text| self.content.assess(text))
            .unwrap_or(0.0);
        let motivation = rules::motivation_score(letter, content_points);

        let total = rules::weighted_total(academic, socioeconomic, motivation);

        debug!(
            academic,
            socioeconomic,
            motivation,
            content_points,
            total,
            "applicant sub-scores computed"
        );

        ScoreResult::from_sub_scores(academic, socioeconomic, motivation, total)
    }
}

/// Scores and recommendations produced by one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub academic_score: f64,
    pub socioeconomic_score: f64,
    pub motivation_score: f64,
    pub total_score: f64,
    pub tier: RecommendationTier,
    pub notes: Vec<RecommendationNote>,
    pub recommendation_text: String,
}

impl ScoreResult {
    /// Round the clamped sub-scores and total, then derive the recommendations
    /// from the rounded values. `total` must come from the unrounded sub-scores.
    pub fn from_sub_scores(academic: f64, socioeconomic: f64, motivation: f64, total: f64) -> Self {
        let academic_score = rules::round2(academic);
        let socioeconomic_score = rules::round2(socioeconomic);
        let motivation_score = rules::round2(motivation);
        let total_score = rules::round2(rules::clamp_score(total));

        let recommendations = Recommendations::from_scores(
            academic_score,
            socioeconomic_score,
            motivation_score,
            total_score,
        );
        let recommendation_text = recommendations.render();

        Self {
            academic_score,
            socioeconomic_score,
            motivation_score,
            total_score,
            tier: recommendations.tier,
            notes: recommendations.notes,
            recommendation_text,
        }
    }

    pub fn recommendations(&self) -> Recommendations {
        Recommendations {
            tier: self.tier,
            notes: self.notes.clone(),
        }
    }
}
