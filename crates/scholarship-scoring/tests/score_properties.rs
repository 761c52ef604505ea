use proptest::prelude::*;
use scholarship_scoring::scoring::engine::rules;
use scholarship_scoring::scoring::{
    ApplicantRecord, BaccalaureateMention, FixedContentAssessor, ScoringEngine,
};

fn mention() -> impl Strategy<Value = Option<BaccalaureateMention>> {
    prop_oneof![
        Just(None),
        Just(Some(BaccalaureateMention::None)),
        Just(Some(BaccalaureateMention::Passable)),
        Just(Some(BaccalaureateMention::AssezBien)),
        Just(Some(BaccalaureateMention::Bien)),
        Just(Some(BaccalaureateMention::TresBien)),
    ]
}

fn record() -> impl Strategy<Value = ApplicantRecord> {
    (
        proptest::option::of(0.0f64..=20.0),
        mention(),
        proptest::option::of(0u64..12_000_000),
        proptest::option::of(0u32..12),
        any::<bool>(),
        proptest::option::of(0usize..3_000),
    )
        .prop_map(
            |(average_grade, baccalaureate_mention, family_income, dependents, has_disability, letter)| {
                ApplicantRecord {
                    average_grade,
                    baccalaureate_mention,
                    family_income,
                    number_of_dependents: dependents,
                    has_disability,
                    motivation_letter: letter.map(|len| "x".repeat(len)),
                }
            },
        )
}

proptest! {
    #[test]
    fn scores_stay_within_bounds(record in record(), content in 0.0f64..=70.0) {
        let result = ScoringEngine::new(FixedContentAssessor(content)).evaluate(&record);
        for score in [
            result.academic_score,
            result.socioeconomic_score,
            result.motivation_score,
            result.total_score,
        ] {
            prop_assert!((0.0..=100.0).contains(&score), "score {} out of range", score);
        }
    }

    #[test]
    fn fixed_content_is_deterministic(record in record(), content in 0.0f64..=70.0) {
        let engine = ScoringEngine::new(FixedContentAssessor(content));
        prop_assert_eq!(engine.evaluate(&record), engine.evaluate(&record));
    }

    #[test]
    fn lower_income_never_lowers_socioeconomic_score(
        record in record(),
        a in 0u64..12_000_000,
        b in 0u64..12_000_000,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let engine = ScoringEngine::new(FixedContentAssessor(50.0));
        let poorer = ApplicantRecord { family_income: Some(low), ..record.clone() };
        let richer = ApplicantRecord { family_income: Some(high), ..record };
        prop_assert!(
            engine.evaluate(&poorer).socioeconomic_score
                >= engine.evaluate(&richer).socioeconomic_score
        );
    }

    #[test]
    fn higher_grade_never_lowers_academic_score(
        record in record(),
        a in 0.0f64..=20.0,
        b in 0.0f64..=20.0,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let engine = ScoringEngine::new(FixedContentAssessor(50.0));
        let weaker = ApplicantRecord { average_grade: Some(low), ..record.clone() };
        let stronger = ApplicantRecord { average_grade: Some(high), ..record };
        prop_assert!(
            engine.evaluate(&stronger).academic_score >= engine.evaluate(&weaker).academic_score
        );
    }

    #[test]
    fn income_bonus_has_no_jumps(offset in 1u64..1_000) {
        for breakpoint in [1_000_000u64, 3_000_000, 5_000_000] {
            let at = rules::income_bonus(Some(breakpoint));
            let below = rules::income_bonus(Some(breakpoint - offset));
            let above = rules::income_bonus(Some(breakpoint + offset));
            prop_assert!((at - below).abs() <= 0.02);
            prop_assert!((at - above).abs() <= 0.02);
        }
    }
}
