//! Age in months from calendar dates.
//!
//! The engine itself takes a ready-made age. This helper is for callers
//! that hold a birth date and a measurement date.

use chrono::NaiveDate;

use crate::error::ZScoreError;

/// Average month length used by the WHO growth standards (365.25 / 12).
pub const DAYS_PER_MONTH: f64 = 30.4375;

/// Exact age in months at `measured` for a child born on `birth`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use anthro_zscore::age_in_months;
///
/// let birth = NaiveDate::from_ymd_opt(2022, 3, 1).unwrap();
/// let measured = NaiveDate::from_ymd_opt(2022, 3, 1).unwrap();
/// assert_eq!(age_in_months(birth, measured).unwrap(), 0.0);
/// ```
pub fn age_in_months(birth: NaiveDate, measured: NaiveDate) -> Result<f64, ZScoreError> {
    let days = (measured - birth).num_days();
    if days < 0 {
        return Err(ZScoreError::MeasurementBeforeBirth { birth, measured });
    }
    Ok(days as f64 / DAYS_PER_MONTH)
}
