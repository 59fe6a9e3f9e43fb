//! End-to-end tests for the growth engine.

use anthro_model::{
    AgeKeyMode, EngineOptions, Indicator, MeasurementInput, NutritionalStatus, Quantity, Sex,
    StuntingStatus,
};
use anthro_standards::{Breakpoint, ReferenceStore, ReferenceTable};
use anthro_zscore::{GrowthEngine, ZScoreError, resolve};

fn engine() -> GrowthEngine<'static> {
    GrowthEngine::builtin().expect("builtin engine")
}

#[test]
fn median_boy_at_two_years_is_normal() {
    let input = MeasurementInput::new(Sex::Male, 24.0).with_weight(12.1515);
    let result = engine().evaluate(&input).unwrap();

    assert_eq!(result.z_scores.weight_for_age_zscore, Some(0.0));
    assert_eq!(
        result.classification.nutritional_status,
        Some(NutritionalStatus::Normal)
    );
    assert_eq!(result.classification.stunting_status, None);
    assert_eq!(result.classification.wasting_status, None);
    assert!(result.rejections.is_empty());
}

#[test]
fn height_only_measurement() {
    let input = MeasurementInput::new(Sex::Male, 24.0).with_height(87.1161);
    let result = engine().evaluate(&input).unwrap();

    assert_eq!(result.z_scores.height_for_age_zscore, Some(0.0));
    assert_eq!(result.z_scores.weight_for_age_zscore, None);
    assert_eq!(result.z_scores.weight_for_height_zscore, None);
    assert_eq!(result.z_scores.bmi_for_age_zscore, None);
    assert_eq!(result.z_scores.head_circumference_zscore, None);
    assert_eq!(
        result.classification.stunting_status,
        Some(StuntingStatus::Normal)
    );
    assert_eq!(result.classification.nutritional_status, None);
}

#[test]
fn age_beyond_sixty_months_only_keeps_weight_for_height() {
    let input = MeasurementInput::new(Sex::Male, 61.0)
        .with_weight(13.0)
        .with_height(90.0)
        .with_head_circumference(50.0);
    let result = engine().evaluate(&input).unwrap();

    assert_eq!(result.z_scores.weight_for_age_zscore, None);
    assert_eq!(result.z_scores.height_for_age_zscore, None);
    assert_eq!(result.z_scores.bmi_for_age_zscore, None);
    assert_eq!(result.z_scores.head_circumference_zscore, None);
    assert!(result.z_scores.weight_for_height_zscore.is_some());
    assert!(result.classification.wasting_status.is_some());
    assert!(result.rejections.is_empty());
}

#[test]
fn age_exactly_sixty_months_is_in_range() {
    let input = MeasurementInput::new(Sex::Female, 60.0).with_weight(18.2193);
    let result = engine().evaluate(&input).unwrap();
    assert_eq!(result.z_scores.weight_for_age_zscore, Some(0.0));

    let just_over = MeasurementInput::new(Sex::Female, 60.2).with_weight(18.2193);
    let result = engine().evaluate(&just_over).unwrap();
    assert_eq!(result.z_scores.weight_for_age_zscore, None);
}

#[test]
fn negative_age_is_out_of_range() {
    let input = MeasurementInput::new(Sex::Female, -1.0).with_weight(3.2);
    let result = engine().evaluate(&input).unwrap();
    assert_eq!(result.z_scores.weight_for_age_zscore, None);
    assert!(result.rejections.is_empty());
}

#[test]
fn weight_for_height_domain_edges() {
    let at = |height: f64| {
        let input = MeasurementInput::new(Sex::Female, 12.0)
            .with_weight(8.0)
            .with_height(height);
        engine()
            .evaluate(&input)
            .unwrap()
            .z_scores
            .weight_for_height_zscore
    };
    assert!(at(45.0).is_some());
    assert!(at(120.0).is_some());
    assert!(at(44.9).is_none());
    assert!(at(120.1).is_none());
}

#[test]
fn weight_for_height_at_breakpoint_median() {
    let input = MeasurementInput::new(Sex::Male, 36.0)
        .with_weight(12.9593)
        .with_height(90.0);
    let result = engine().evaluate(&input).unwrap();
    assert_eq!(result.z_scores.weight_for_height_zscore, Some(0.0));
}

#[test]
fn bmi_is_derived_from_weight_and_height() {
    // 16.0189 kg/m² is the BMI median for boys at 24 months.
    let height: f64 = 90.0;
    let weight = 16.0189 * (height / 100.0).powi(2);
    let input = MeasurementInput::new(Sex::Male, 24.0)
        .with_weight(weight)
        .with_height(height);
    let result = engine().evaluate(&input).unwrap();
    assert_eq!(result.z_scores.bmi_for_age_zscore, Some(0.0));
}

#[test]
fn invalid_weight_is_isolated() {
    let input = MeasurementInput::new(Sex::Male, 24.0)
        .with_weight(-1.0)
        .with_height(87.1161)
        .with_head_circumference(48.2515);
    let result = engine().evaluate(&input).unwrap();

    assert_eq!(result.z_scores.weight_for_age_zscore, None);
    assert_eq!(result.z_scores.weight_for_height_zscore, None);
    assert_eq!(result.z_scores.bmi_for_age_zscore, None);
    assert_eq!(result.z_scores.height_for_age_zscore, Some(0.0));
    assert_eq!(result.z_scores.head_circumference_zscore, Some(0.0));

    let rejected: Vec<Indicator> = result.rejections.iter().map(|r| r.indicator).collect();
    assert_eq!(
        rejected,
        vec![
            Indicator::WeightForAge,
            Indicator::WeightForHeight,
            Indicator::BmiForAge
        ]
    );
    assert!(
        result
            .rejections
            .iter()
            .all(|r| r.quantity == Quantity::Weight && r.value == -1.0)
    );
}

#[test]
fn non_finite_age_rejects_age_based_indicators() {
    let input = MeasurementInput::new(Sex::Female, f64::NAN)
        .with_weight(9.0)
        .with_height(75.0);
    let result = engine().evaluate(&input).unwrap();

    assert!(result.z_scores.weight_for_height_zscore.is_some());
    assert_eq!(result.z_scores.weight_for_age_zscore, None);
    assert_eq!(result.rejections.len(), 3);
    assert!(result.rejections.iter().all(|r| r.quantity == Quantity::Age));
}

#[test]
fn missing_table_is_fatal() {
    let store = ReferenceStore::from_tables([ReferenceTable::new(
        Indicator::WeightForAge,
        Sex::Male,
        vec![Breakpoint::new(24.0, -0.0137, 12.1515, 0.11426)],
    )])
    .unwrap();
    let engine = GrowthEngine::with_store(&store, EngineOptions::default());

    let boy = MeasurementInput::new(Sex::Male, 24.0).with_weight(12.1515);
    assert_eq!(
        engine.evaluate(&boy).unwrap().z_scores.weight_for_age_zscore,
        Some(0.0)
    );

    let girl = MeasurementInput::new(Sex::Female, 24.0).with_weight(11.0);
    let err = engine.evaluate(&girl).unwrap_err();
    assert!(err.is_fatal());
    assert!(matches!(err, ZScoreError::Standards(_)));

    // A missing table surfaces even when another indicator is computable.
    let boy_with_height = boy.with_height(87.0);
    assert!(engine.evaluate(&boy_with_height).is_err());
}

#[test]
fn age_is_truncated_to_completed_months_by_default() {
    let at = |engine: GrowthEngine<'static>, age: f64| {
        let input = MeasurementInput::new(Sex::Female, age).with_weight(10.0);
        engine
            .evaluate(&input)
            .unwrap()
            .z_scores
            .weight_for_age_zscore
    };

    let truncating = engine();
    assert_eq!(at(truncating, 15.0), at(truncating, 15.9));

    let fractional =
        engine().with_options(EngineOptions::new().with_age_key(AgeKeyMode::Fractional));
    assert_ne!(at(fractional, 15.0), at(fractional, 15.9));
    assert_eq!(at(fractional, 15.0), at(truncating, 15.0));
}

#[test]
fn interpolated_month_uses_midpoint_parameters() {
    let store = ReferenceStore::builtin().unwrap();
    let table = store.lookup(Indicator::WeightForAge, Sex::Male).unwrap();
    let lower = table.get(12.0).unwrap().lms;
    let upper = table.get(18.0).unwrap().lms;
    let mid = resolve(table, 15.0);

    assert!((mid.m - (lower.m + upper.m) / 2.0).abs() < 1e-12);
    assert!((mid.l - (lower.l + upper.l) / 2.0).abs() < 1e-12);
    assert!((mid.s - (lower.s + upper.s) / 2.0).abs() < 1e-12);

    let input = MeasurementInput::new(Sex::Male, 15.0).with_weight(mid.m);
    let result = engine().evaluate(&input).unwrap();
    assert_eq!(result.z_scores.weight_for_age_zscore, Some(0.0));
}

#[test]
fn evaluation_is_shareable_across_threads() {
    let engine = engine();
    let input = MeasurementInput::new(Sex::Female, 9.0)
        .with_weight(8.2254)
        .with_height(70.1435)
        .with_head_circumference(43.83);
    let expected = engine.evaluate(&input).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| engine.evaluate(&input).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
    assert_eq!(expected.z_scores.weight_for_age_zscore, Some(0.0));
    assert_eq!(expected.z_scores.height_for_age_zscore, Some(0.0));
    assert_eq!(expected.z_scores.head_circumference_zscore, Some(0.0));
}

#[test]
fn assessment_json_uses_contract_field_names() {
    let input = MeasurementInput::new(Sex::Male, 24.0).with_weight(12.1515);
    let result = engine().evaluate(&input).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["weight_for_age_zscore"], serde_json::json!(0.0));
    assert_eq!(json["nutritional_status"], "normal");
    assert!(json["height_for_age_zscore"].is_null());
    assert!(json["wasting_status"].is_null());
    assert!(json.get("rejections").is_none());
}
