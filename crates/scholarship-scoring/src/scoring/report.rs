use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::domain::{Applicant, ApplicationId};
use super::engine::ScoreResult;

/// Serializable view of one scored application.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<ApplicationId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    pub academic_score: f64,
    pub socioeconomic_score: f64,
    pub motivation_score: f64,
    pub total_score: f64,
    pub tier: &'static str,
    pub suggested_status: &'static str,
    pub recommendations: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluated_at: Option<DateTime<Utc>>,
}

impl EvaluationView {
    pub fn from_result(result: &ScoreResult) -> Self {
        Self {
            application_id: None,
            full_name: None,
            academic_score: result.academic_score,
            socioeconomic_score: result.socioeconomic_score,
            motivation_score: result.motivation_score,
            total_score: result.total_score,
            tier: result.tier.label(),
            suggested_status: result.tier.suggested_status().label(),
            recommendations: result.recommendations().statements().collect(),
            evaluated_at: None,
        }
    }

    /// View of the evaluation stored on an applicant, if it has one.
    pub fn for_applicant(applicant: &Applicant) -> Option<Self> {
        let stored = applicant.evaluation.as_ref()?;
        let mut view = Self::from_result(&stored.result);
        view.application_id = Some(applicant.application_id.clone());
        view.full_name = Some(applicant.full_name.clone());
        view.evaluated_at = Some(stored.evaluated_at);
        Some(view)
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();

        match (&self.application_id, &self.full_name) {
            (Some(id), Some(name)) if !name.is_empty() => {
                let _ = writeln!(out, "Application {id} ({name})");
            }
            (Some(id), _) => {
                let _ = writeln!(out, "Application {id}");
            }
            _ => {
                let _ = writeln!(out, "Applicant evaluation");
            }
        }

        let _ = writeln!(out, "- academic: {:.2}", self.academic_score);
        let _ = writeln!(out, "- socio-economic: {:.2}", self.socioeconomic_score);
        let _ = writeln!(out, "- motivation: {:.2}", self.motivation_score);
        let _ = writeln!(
            out,
            "- total: {:.2} ({}, suggested status {})",
            self.total_score, self.tier, self.suggested_status
        );

        let _ = writeln!(out, "\nRecommendations");
        for statement in &self.recommendations {
            let _ = writeln!(out, "- {statement}");
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> ScoreResult {
        ScoreResult::from_sub_scores(40.0, 90.0, 40.0, 55.0)
    }

    #[test]
    fn view_carries_scores_and_labels() {
        let view = EvaluationView::from_result(&result());

        assert_eq!(view.total_score, 55.0);
        assert_eq!(view.tier, "average");
        assert_eq!(view.suggested_status, "waiting_list");
        assert_eq!(view.recommendations.len(), 4);
    }

    #[test]
    fn json_omits_missing_identity() {
        let view = EvaluationView::from_result(&result());
        let payload = serde_json::to_value(&view).expect("serializes");

        assert!(payload.get("application_id").is_none());
        assert_eq!(
            payload.get("tier").and_then(serde_json::Value::as_str),
            Some("average")
        );
    }

    #[test]
    fn text_lists_each_statement() {
        let text = EvaluationView::from_result(&result()).render_text();

        assert!(text.starts_with("Applicant evaluation"));
        assert!(text.contains("- total: 55.00 (average, suggested status waiting_list)"));
        assert_eq!(text.matches("\n- ").count(), 8);
    }
}
