use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::engine::ScoreResult;

/// Identifier wrapper for stored scholarship applications.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Honors tier awarded at the national secondary-education exam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaccalaureateMention {
    None,
    Passable,
    AssezBien,
    Bien,
    TresBien,
}

impl BaccalaureateMention {
    pub const fn code(self) -> &'static str {
        match self {
            BaccalaureateMention::None => "none",
            BaccalaureateMention::Passable => "passable",
            BaccalaureateMention::AssezBien => "assez_bien",
            BaccalaureateMention::Bien => "bien",
            BaccalaureateMention::TresBien => "tres_bien",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown baccalaureate mention '{0}'")]
pub struct UnknownMention(pub String);

impl FromStr for BaccalaureateMention {
    type Err = UnknownMention;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace([' ', '-'], "_").as_str() {
            "" | "none" => Ok(Self::None),
            "passable" => Ok(Self::Passable),
            "assez_bien" => Ok(Self::AssezBien),
            "bien" => Ok(Self::Bien),
            "tres_bien" | "très_bien" => Ok(Self::TresBien),
            _ => Err(UnknownMention(value.to_string())),
        }
    }
}

/// Scoring inputs adapted from a stored application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicantRecord {
    /// Grade-point average on a 20-point scale.
    #[serde(default)]
    pub average_grade: Option<f64>,
    #[serde(default)]
    pub baccalaureate_mention: Option<BaccalaureateMention>,
    /// Annual household income in abstract currency units.
    #[serde(default)]
    pub family_income: Option<u64>,
    #[serde(default)]
    pub number_of_dependents: Option<u32>,
    #[serde(default)]
    pub has_disability: bool,
    #[serde(default)]
    pub motivation_letter: Option<String>,
}

impl ApplicantRecord {
    /// Letter text when one was actually written.
    pub fn letter(&self) -> Option<&str> {
        self.motivation_letter
            .as_deref()
            .filter(|letter| !letter.trim().is_empty())
    }

    /// Whether the fields reviewers require before scoring are populated.
    pub fn is_complete(&self) -> bool {
        self.average_grade.is_some() && self.letter().is_some()
    }
}

/// Review status tracked for each application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    UnderReview,
    Accepted,
    Rejected,
    WaitingList,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::UnderReview => "under_review",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::WaitingList => "waiting_list",
        }
    }
}

/// Score result as persisted on the applicant, stamped with when it was computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredEvaluation {
    pub result: ScoreResult,
    pub evaluated_at: chrono::DateTime<chrono::Utc>,
}

/// Stored application entity as seen by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    pub application_id: ApplicationId,
    pub full_name: String,
    pub email: String,
    pub record: ApplicantRecord,
    pub status: ApplicationStatus,
    pub evaluation: Option<StoredEvaluation>,
}

impl Applicant {
    pub fn new(
        application_id: ApplicationId,
        full_name: impl Into<String>,
        email: impl Into<String>,
        record: ApplicantRecord,
    ) -> Self {
        Self {
            application_id,
            full_name: full_name.into(),
            email: email.into(),
            record,
            status: ApplicationStatus::Pending,
            evaluation: None,
        }
    }
}
