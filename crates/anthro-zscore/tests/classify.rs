//! Tests for status classification bands.

use anthro_model::{NutritionalStatus, StuntingStatus, WastingStatus, ZScoreResult};
use anthro_zscore::{classify, nutritional_status, stunting_status, wasting_status};

#[test]
fn nutritional_boundaries() {
    let cases = [
        (-3.01, NutritionalStatus::SeverelyUnderweight),
        (-3.00, NutritionalStatus::Underweight),
        (-2.01, NutritionalStatus::Underweight),
        (-2.00, NutritionalStatus::Normal),
        (0.00, NutritionalStatus::Normal),
        (2.00, NutritionalStatus::Normal),
        (2.01, NutritionalStatus::RiskOverweight),
        (6.00, NutritionalStatus::RiskOverweight),
    ];
    for (z, expected) in cases {
        assert_eq!(nutritional_status(Some(z)), Some(expected), "z = {z}");
    }
}

#[test]
fn stunting_boundaries() {
    let cases = [
        (-6.00, StuntingStatus::SeverelyStunted),
        (-3.01, StuntingStatus::SeverelyStunted),
        (-3.00, StuntingStatus::Stunted),
        (-2.01, StuntingStatus::Stunted),
        (-2.00, StuntingStatus::Normal),
        (3.50, StuntingStatus::Normal),
    ];
    for (z, expected) in cases {
        assert_eq!(stunting_status(Some(z)), Some(expected), "z = {z}");
    }
}

#[test]
fn wasting_boundaries() {
    let cases = [
        (-3.01, WastingStatus::SeverelyWasted),
        (-3.00, WastingStatus::Wasted),
        (-2.01, WastingStatus::Wasted),
        (-2.00, WastingStatus::Normal),
        (2.00, WastingStatus::Normal),
        (2.01, WastingStatus::RiskOverweight),
    ];
    for (z, expected) in cases {
        assert_eq!(wasting_status(Some(z)), Some(expected), "z = {z}");
    }
}

#[test]
fn missing_scores_have_no_status() {
    assert_eq!(nutritional_status(None), None);
    assert_eq!(stunting_status(None), None);
    assert_eq!(wasting_status(None), None);
}

#[test]
fn classify_reads_the_right_indicator() {
    let z_scores = ZScoreResult {
        weight_for_age_zscore: Some(-2.5),
        height_for_age_zscore: Some(-3.2),
        weight_for_height_zscore: Some(2.4),
        // BMI and head circumference do not feed any status.
        bmi_for_age_zscore: Some(-5.0),
        head_circumference_zscore: Some(-5.0),
    };
    let result = classify(&z_scores);
    assert_eq!(result.nutritional_status, Some(NutritionalStatus::Underweight));
    assert_eq!(result.stunting_status, Some(StuntingStatus::SeverelyStunted));
    assert_eq!(result.wasting_status, Some(WastingStatus::RiskOverweight));
}

#[test]
fn status_labels_are_snake_case() {
    assert_eq!(
        serde_json::to_value(NutritionalStatus::SeverelyUnderweight).unwrap(),
        "severely_underweight"
    );
    assert_eq!(
        serde_json::to_value(WastingStatus::RiskOverweight).unwrap(),
        WastingStatus::RiskOverweight.as_str()
    );
    assert_eq!(StuntingStatus::SeverelyStunted.to_string(), "severely_stunted");
}
