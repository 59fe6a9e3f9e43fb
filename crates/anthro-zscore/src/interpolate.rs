//! LMS parameter lookup with piecewise linear interpolation.
//!
//! Keys on a breakpoint return that row unchanged. Keys between two
//! breakpoints blend L, M and S independently. Keys beyond either end of the
//! table clamp to the end row; there is no extrapolation.

use anthro_model::LmsParams;
use anthro_standards::ReferenceTable;
use tracing::trace;

/// Resolve the LMS parameters for `key` (age in months or height in cm,
/// depending on the table).
///
/// A NaN key has no position in the table and resolves to the first row;
/// callers validate keys before lookup.
pub fn resolve(table: &ReferenceTable, key: f64) -> LmsParams {
    let rows = table.breakpoints();

    // Index of the first row with row.key >= key.
    let upper_index = rows.partition_point(|row| row.key < key);

    let Some(upper) = rows.get(upper_index) else {
        // Above the last breakpoint.
        return table.last().lms;
    };
    if upper.key == key || upper_index == 0 {
        // Exact match, or below the first breakpoint.
        return upper.lms;
    }

    let lower = &rows[upper_index - 1];
    let ratio = (key - lower.key) / (upper.key - lower.key);
    trace!(
        indicator = %table.indicator(),
        lower = lower.key,
        upper = upper.key,
        ratio,
        "interpolating reference parameters"
    );
    lower.lms.lerp(&upper.lms, ratio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anthro_model::{Indicator, Sex};
    use anthro_standards::Breakpoint;

    fn table() -> ReferenceTable {
        ReferenceTable::new(
            Indicator::WeightForAge,
            Sex::Female,
            vec![
                Breakpoint::new(0.0, 1.0, 10.0, 0.10),
                Breakpoint::new(2.0, 0.0, 12.0, 0.12),
                Breakpoint::new(6.0, -1.0, 20.0, 0.16),
            ],
        )
        .unwrap()
    }

    #[test]
    fn exact_breakpoint_is_returned_unchanged() {
        let table = table();
        assert_eq!(resolve(&table, 2.0), LmsParams::new(0.0, 12.0, 0.12));
        assert_eq!(resolve(&table, 6.0), LmsParams::new(-1.0, 20.0, 0.16));
    }

    #[test]
    fn between_breakpoints_is_linear() {
        let table = table();
        let params = resolve(&table, 3.0);
        assert_eq!(params.l, -0.25);
        assert_eq!(params.m, 14.0);
        assert!((params.s - 0.13).abs() < 1e-12);
    }

    #[test]
    fn outside_table_clamps_to_edges() {
        let table = table();
        assert_eq!(resolve(&table, -1.0), LmsParams::new(1.0, 10.0, 0.10));
        assert_eq!(resolve(&table, 72.0), LmsParams::new(-1.0, 20.0, 0.16));
    }

    #[test]
    fn single_row_table() {
        let table = ReferenceTable::new(
            Indicator::HeightForAge,
            Sex::Male,
            vec![Breakpoint::new(24.0, 1.0, 87.1161, 0.03507)],
        )
        .unwrap();
        assert_eq!(resolve(&table, 0.0).m, 87.1161);
        assert_eq!(resolve(&table, 24.0).m, 87.1161);
        assert_eq!(resolve(&table, 60.0).m, 87.1161);
    }
}
