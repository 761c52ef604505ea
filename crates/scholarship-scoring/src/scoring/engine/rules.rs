//! Sub-score rules of the applicant rubric.
//!
//! Every function here returns an unrounded contribution; rounding happens
//! once in the engine after the weighted total is combined.

use super::super::domain::{ApplicantRecord, BaccalaureateMention};
use super::ladder::{Ladder, PiecewiseLinear};

pub const MAX_SUB_SCORE: f64 = 100.0;
pub const GRADE_SCALE: f64 = 20.0;
pub const GRADE_POINTS: f64 = 60.0;
pub const DISABILITY_BONUS: f64 = 20.0;
pub const MAX_CONTENT_POINTS: f64 = 70.0;

pub const ACADEMIC_WEIGHT: f64 = 0.4;
pub const SOCIOECONOMIC_WEIGHT: f64 = 0.3;
pub const MOTIVATION_WEIGHT: f64 = 0.3;

/// Income bonus knots: full bonus up to 1M, tapering to 25 at 3M and 10 at 5M.
pub const INCOME_BONUS: PiecewiseLinear = PiecewiseLinear::new(&[
    (1_000_000.0, 50.0),
    (3_000_000.0, 25.0),
    (5_000_000.0, 10.0),
]);

pub const DEPENDENTS_BONUS: Ladder<u32, f64> = Ladder::new(&[(5, 30.0), (3, 20.0), (1, 10.0)], 0.0);

/// Keyed on character count, not bytes.
pub const LETTER_LENGTH_POINTS: Ladder<usize, f64> =
    Ladder::new(&[(2000, 30.0), (1000, 20.0), (500, 10.0)], 0.0);

pub const MENTION_POINTS: [(BaccalaureateMention, f64); 5] = [
    (BaccalaureateMention::TresBien, 40.0),
    (BaccalaureateMention::Bien, 30.0),
    (BaccalaureateMention::AssezBien, 20.0),
    (BaccalaureateMention::Passable, 10.0),
    (BaccalaureateMention::None, 0.0),
];

pub fn clamp_score(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, MAX_SUB_SCORE)
    } else {
        0.0
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn grade_points(grade: Option<f64>) -> f64 {
    match grade {
        Some(grade) if grade.is_finite() => (grade.clamp(0.0, GRADE_SCALE) * GRADE_POINTS) / GRADE_SCALE,
        _ => 0.0,
    }
}

pub fn mention_points(mention: Option<BaccalaureateMention>) -> f64 {
    mention
        .and_then(|mention| {
            MENTION_POINTS
                .iter()
                .find(|(candidate, _)| *candidate == mention)
                .map(|(_, points)| *points)
        })
        .unwrap_or(0.0)
}

pub fn academic_score(record: &ApplicantRecord) -> f64 {
    let raw = grade_points(record.average_grade) + mention_points(record.baccalaureate_mention);
    debug_assert!(raw <= MAX_SUB_SCORE, "academic rubric exceeds its cap");
    clamp_score(raw)
}

pub fn income_bonus(income: Option<u64>) -> f64 {
    income
        .map(|income| INCOME_BONUS.eval(income as f64))
        .unwrap_or(0.0)
}

pub fn dependents_bonus(dependents: Option<u32>) -> f64 {
    dependents
        .map(|count| DEPENDENTS_BONUS.lookup(count))
        .unwrap_or(0.0)
}

pub fn disability_bonus(has_disability: bool) -> f64 {
    if has_disability {
        DISABILITY_BONUS
    } else {
        0.0
    }
}

pub fn socioeconomic_score(record: &ApplicantRecord) -> f64 {
    clamp_score(
        income_bonus(record.family_income)
            + dependents_bonus(record.number_of_dependents)
            + disability_bonus(record.has_disability),
    )
}

pub fn letter_length_points(letter: Option<&str>) -> f64 {
    letter
        .map(|letter| LETTER_LENGTH_POINTS.lookup(letter.chars().count()))
        .unwrap_or(0.0)
}

/// Assessor output forced into the content band.
pub fn bound_content_points(points: f64) -> f64 {
    if points.is_finite() {
        points.clamp(0.0, MAX_CONTENT_POINTS)
    } else {
        0.0
    }
}

pub fn motivation_score(letter: Option<&str>, content_points: f64) -> f64 {
    let content = match letter {
        Some(_) => bound_content_points(content_points),
        None => 0.0,
    };
    clamp_score(letter_length_points(letter) + content)
}

pub fn weighted_total(academic: f64, socioeconomic: f64, motivation: f64) -> f64 {
    academic * ACADEMIC_WEIGHT + socioeconomic * SOCIOECONOMIC_WEIGHT + motivation * MOTIVATION_WEIGHT
}
