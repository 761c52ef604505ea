use serde::{Deserialize, Serialize};

use super::super::domain::ApplicationStatus;
use super::ladder::Ladder;

pub const ACADEMIC_CONCERN_BELOW: f64 = 50.0;
pub const SOCIOECONOMIC_NEED_FROM: f64 = 80.0;
pub const MOTIVATION_CONCERN_BELOW: f64 = 60.0;

const STATEMENT_SEPARATOR: &str = "\n\n";

/// Overall recommendation bands keyed on the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationTier {
    Exceptional,
    VeryGood,
    Satisfactory,
    Average,
    Insufficient,
}

pub const TIER_LADDER: Ladder<f64, RecommendationTier> = Ladder::new(
    &[
        (80.0, RecommendationTier::Exceptional),
        (70.0, RecommendationTier::VeryGood),
        (60.0, RecommendationTier::Satisfactory),
        (50.0, RecommendationTier::Average),
    ],
    RecommendationTier::Insufficient,
);

impl RecommendationTier {
    pub fn for_total(total_score: f64) -> Self {
        TIER_LADDER.lookup(total_score)
    }

    pub const fn label(self) -> &'static str {
        match self {
            RecommendationTier::Exceptional => "exceptional",
            RecommendationTier::VeryGood => "very_good",
            RecommendationTier::Satisfactory => "satisfactory",
            RecommendationTier::Average => "average",
            RecommendationTier::Insufficient => "insufficient",
        }
    }

    /// Review status a committee would typically assign for this band.
    pub const fn suggested_status(self) -> ApplicationStatus {
        match self {
            RecommendationTier::Exceptional
            | RecommendationTier::VeryGood
            | RecommendationTier::Satisfactory => ApplicationStatus::Accepted,
            RecommendationTier::Average => ApplicationStatus::WaitingList,
            RecommendationTier::Insufficient => ApplicationStatus::Rejected,
        }
    }

    pub const fn statement(self) -> &'static str {
        match self {
            RecommendationTier::Exceptional => {
                "Exceptional application. The candidate shows an excellent academic profile \
                 and a socio-economic situation that justifies awarding a scholarship. \
                 Recommendation: priority acceptance."
            }
            RecommendationTier::VeryGood => {
                "Very good application. The candidate shows a strong overall profile. \
                 Recommendation: acceptance."
            }
            RecommendationTier::Satisfactory => {
                "Satisfactory application. The candidate shows an interesting profile. \
                 Recommendation: acceptance subject to available places."
            }
            RecommendationTier::Average => {
                "Average application. The candidate could benefit from a scholarship but is \
                 not a priority. Recommendation: waiting list."
            }
            RecommendationTier::Insufficient => {
                "Insufficient application under the evaluation criteria. \
                 Recommendation: reject, with the option to reapply next year."
            }
        }
    }
}

/// Targeted remarks appended after the tier statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationNote {
    ImproveAcademics,
    SocioeconomicNeed,
    ImproveMotivationLetter,
}

impl RecommendationNote {
    pub const fn statement(self) -> &'static str {
        match self {
            RecommendationNote::ImproveAcademics => {
                "The academic profile is below expectations. \
                 We recommend that the candidate improve their school results."
            }
            RecommendationNote::SocioeconomicNeed => {
                "The candidate's socio-economic situation fully justifies awarding a scholarship."
            }
            RecommendationNote::ImproveMotivationLetter => {
                "The motivation letter could be improved. We recommend that the candidate \
                 explain their study plans and ambitions more clearly."
            }
        }
    }
}

/// Tier plus notes in reporting order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    pub tier: RecommendationTier,
    pub notes: Vec<RecommendationNote>,
}

impl Recommendations {
    pub fn from_scores(academic: f64, socioeconomic: f64, motivation: f64, total: f64) -> Self {
        let mut notes = Vec::new();
        if academic < ACADEMIC_CONCERN_BELOW {
            notes.push(RecommendationNote::ImproveAcademics);
        }
        if socioeconomic >= SOCIOECONOMIC_NEED_FROM {
            notes.push(RecommendationNote::SocioeconomicNeed);
        }
        if motivation < MOTIVATION_CONCERN_BELOW {
            notes.push(RecommendationNote::ImproveMotivationLetter);
        }

        Self {
            tier: RecommendationTier::for_total(total),
            notes,
        }
    }

    pub fn statements(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.tier.statement())
            .chain(self.notes.iter().map(|note| note.statement()))
    }

    pub fn render(&self) -> String {
        self.statements()
            .collect::<Vec<_>>()
            .join(STATEMENT_SEPARATOR)
    }
}
