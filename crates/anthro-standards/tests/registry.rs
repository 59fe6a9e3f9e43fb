//! Tests for the embedded reference store.

use anthro_model::{BreakpointKind, Indicator, Sex};
use anthro_standards::{Breakpoint, ReferenceStore, ReferenceTable, StandardsError};
use proptest::prelude::*;

fn builtin() -> &'static ReferenceStore {
    ReferenceStore::builtin().expect("embedded tables verify")
}

#[test]
fn every_indicator_and_sex_is_registered() {
    let store = builtin();
    assert_eq!(store.len(), 10);
    for indicator in Indicator::ALL {
        for sex in indicator.applicable_sexes() {
            let table = store.lookup(indicator, *sex).expect("table present");
            assert_eq!(table.indicator(), indicator);
            assert_eq!(table.sex(), *sex);
        }
    }
}

#[test]
fn age_tables_span_birth_to_sixty_months() {
    let expected: Vec<f64> = (0..=12)
        .map(f64::from)
        .chain([18.0, 24.0, 36.0, 48.0, 60.0])
        .collect();
    for table in builtin().tables() {
        if table.kind() != BreakpointKind::AgeMonths {
            continue;
        }
        let keys: Vec<f64> = table.breakpoints().iter().map(|row| row.key).collect();
        assert_eq!(keys, expected, "{} ({})", table.indicator(), table.sex());
    }
}

#[test]
fn height_table_spans_45_to_120_cm() {
    let expected: Vec<f64> = (0..16).map(|step| 45.0 + 5.0 * f64::from(step)).collect();
    for sex in Sex::ALL {
        let table = builtin()
            .lookup(Indicator::WeightForHeight, sex)
            .expect("wfh table");
        assert_eq!(table.kind(), BreakpointKind::HeightCm);
        let keys: Vec<f64> = table.breakpoints().iter().map(|row| row.key).collect();
        assert_eq!(keys, expected);
    }
}

#[test]
fn table_keys_cover_indicator_domains() {
    for table in builtin().tables() {
        let domain = table.indicator().domain();
        assert_eq!(table.first().key, domain.min);
        assert_eq!(table.last().key, domain.max);
    }
}

#[test]
fn medians_increase_with_age_for_size_indicators() {
    for indicator in [
        Indicator::WeightForAge,
        Indicator::HeightForAge,
        Indicator::HeadCircumferenceForAge,
        Indicator::WeightForHeight,
    ] {
        for sex in Sex::ALL {
            let table = builtin().lookup(indicator, sex).unwrap();
            for pair in table.breakpoints().windows(2) {
                assert!(
                    pair[0].lms.m < pair[1].lms.m,
                    "{indicator} ({sex}) median drops at {}",
                    pair[1].key
                );
            }
        }
    }
}

#[test]
fn who_median_at_24_months_for_boys() {
    let table = builtin()
        .lookup(Indicator::WeightForAge, Sex::Male)
        .unwrap();
    let row = table.get(24.0).expect("24 month row");
    assert_eq!(row.lms.m, 12.1515);
    assert_eq!(row.lms.l, -0.0137);
    assert_eq!(row.lms.s, 0.11426);
}

#[test]
fn missing_table_is_reported() {
    let store = ReferenceStore::from_tables([ReferenceTable::new(
        Indicator::WeightForAge,
        Sex::Male,
        vec![Breakpoint::new(0.0, 0.3487, 3.3464, 0.14602)],
    )])
    .unwrap();

    let err = store
        .lookup(Indicator::WeightForAge, Sex::Female)
        .unwrap_err();
    assert_eq!(
        err,
        StandardsError::UnknownIndicatorSex {
            indicator: Indicator::WeightForAge,
            sex: Sex::Female,
        }
    );
    assert!(err.to_string().contains("Weight-for-age"));
}

#[test]
fn duplicate_tables_are_rejected() {
    let table = || {
        ReferenceTable::new(
            Indicator::HeightForAge,
            Sex::Female,
            vec![Breakpoint::new(0.0, 1.0, 49.1477, 0.0379)],
        )
    };
    let err = ReferenceStore::from_tables([table(), table()]).unwrap_err();
    assert!(matches!(err, StandardsError::DuplicateTable { .. }));
}

#[test]
fn invalid_table_stops_store_construction() {
    let err = ReferenceStore::from_tables([ReferenceTable::new(
        Indicator::BmiForAge,
        Sex::Male,
        vec![
            Breakpoint::new(1.0, 0.2708, 14.9441, 0.09027),
            Breakpoint::new(0.0, -0.3053, 13.4069, 0.0956),
        ],
    )])
    .unwrap_err();
    assert!(matches!(err, StandardsError::UnsortedBreakpoints { .. }));
}

#[test]
fn summaries_list_every_table() {
    let summaries = builtin().summaries();
    assert_eq!(summaries.len(), 10);
    let wfh = summaries
        .iter()
        .find(|summary| summary.indicator == Indicator::WeightForHeight && summary.sex == Sex::Female)
        .expect("wfh summary");
    assert_eq!(wfh.breakpoint_count, 16);
    assert_eq!(wfh.first_key, 45.0);
    assert_eq!(wfh.last_key, 120.0);
    let json = serde_json::to_value(wfh).unwrap();
    assert_eq!(json["kind"], "height_cm");
}

proptest! {
    #[test]
    fn exact_get_finds_every_tabulated_key(index in 0usize..18) {
        for sex in Sex::ALL {
            let table = builtin().lookup(Indicator::BmiForAge, sex).unwrap();
            let row = table.breakpoints()[index];
            prop_assert_eq!(table.get(row.key), Some(&row));
        }
    }
}
