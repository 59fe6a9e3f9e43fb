//! Per-indicator applicability and dispatch.
//!
//! | Indicator | Needs | Domain | Lookup key |
//! |---|---|---|---|
//! | WeightForAge | weight | age 0..=60 months | age |
//! | HeightForAge | height | age 0..=60 months | age |
//! | WeightForHeight | weight, height | height 45..=120 cm | height |
//! | BmiForAge | weight, height | age 0..=60 months | age |
//! | HeadCircumferenceForAge | head circumference | age 0..=60 months | age |
//!
//! A missing input or an out-of-domain key gives no score. An invalid value
//! gives no score plus a rejection. Neither affects the other indicators.

use anthro_model::{
    BreakpointKind, EngineOptions, Indicator, IndicatorRejection, MeasurementInput, Quantity,
    ZScoreResult,
};
use anthro_standards::ReferenceStore;
use tracing::{debug, warn};

use crate::error::ZScoreError;
use crate::interpolate::resolve;
use crate::transform::{require_positive, z_score};

/// Scores for every indicator plus the indicators rejected for invalid input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComputedScores {
    pub z_scores: ZScoreResult,
    pub rejections: Vec<IndicatorRejection>,
}

/// Compute every applicable indicator for one measurement.
///
/// # Errors
///
/// Only fatal errors (missing reference table) are returned. Invalid
/// measurements are recorded in [`ComputedScores::rejections`].
pub fn compute_all(
    store: &ReferenceStore,
    input: &MeasurementInput,
    options: &EngineOptions,
) -> Result<ComputedScores, ZScoreError> {
    let mut rejections = Vec::new();
    let mut score = |indicator: Indicator| -> Result<Option<f64>, ZScoreError> {
        match compute_indicator(store, indicator, input, options) {
            Ok(z) => Ok(z),
            Err(err) if err.is_fatal() => Err(err),
            Err(err) => {
                let rejected = rejection(indicator, &err);
                // Values stay out of library logs; callers decide on redaction.
                if options.warn_on_rejection {
                    warn!(
                        indicator = indicator.code(),
                        quantity = rejected.quantity.as_str(),
                        "indicator rejected for invalid input"
                    );
                }
                rejections.push(rejected);
                Ok(None)
            }
        }
    };

    let z_scores = ZScoreResult {
        weight_for_age_zscore: score(Indicator::WeightForAge)?,
        height_for_age_zscore: score(Indicator::HeightForAge)?,
        weight_for_height_zscore: score(Indicator::WeightForHeight)?,
        bmi_for_age_zscore: score(Indicator::BmiForAge)?,
        head_circumference_zscore: score(Indicator::HeadCircumferenceForAge)?,
    };
    Ok(ComputedScores {
        z_scores,
        rejections,
    })
}

/// Compute a single indicator.
///
/// Returns `Ok(None)` when the indicator does not apply to this measurement.
pub fn compute_indicator(
    store: &ReferenceStore,
    indicator: Indicator,
    input: &MeasurementInput,
    options: &EngineOptions,
) -> Result<Option<f64>, ZScoreError> {
    let Some(measured) = measured_value(indicator, input)? else {
        return Ok(None);
    };

    let domain = indicator.domain();
    let key = match domain.kind {
        BreakpointKind::AgeMonths => {
            let age = input.age_months;
            if !age.is_finite() {
                return Err(ZScoreError::InvalidMeasurement {
                    quantity: Quantity::Age,
                    value: age,
                });
            }
            if !domain.contains(age) {
                debug!(indicator = indicator.code(), "age outside reference range");
                return Ok(None);
            }
            options.age_key(age)
        }
        BreakpointKind::HeightCm => {
            // measured_value has already required a valid height.
            let height = input.height_cm.unwrap_or(f64::NAN);
            if !domain.contains(height) {
                debug!(indicator = indicator.code(), "height outside reference range");
                return Ok(None);
            }
            height
        }
    };

    let table = store.lookup(indicator, input.sex)?;
    let z = z_score(measured, resolve(table, key))?;
    debug!(indicator = indicator.code(), z, "computed z-score");
    Ok(Some(z))
}

/// The value scored for `indicator`, validated. None when an input is absent.
fn measured_value(
    indicator: Indicator,
    input: &MeasurementInput,
) -> Result<Option<f64>, ZScoreError> {
    let value = match indicator {
        Indicator::WeightForAge => match input.weight_kg {
            Some(weight) => Some(require_positive(Quantity::Weight, weight)?),
            None => None,
        },
        Indicator::HeightForAge => match input.height_cm {
            Some(height) => Some(require_positive(Quantity::Height, height)?),
            None => None,
        },
        Indicator::HeadCircumferenceForAge => match input.head_circumference_cm {
            Some(circumference) => Some(require_positive(
                Quantity::HeadCircumference,
                circumference,
            )?),
            None => None,
        },
        Indicator::WeightForHeight | Indicator::BmiForAge => {
            let (Some(weight), Some(height)) = (input.weight_kg, input.height_cm) else {
                return Ok(None);
            };
            let weight = require_positive(Quantity::Weight, weight)?;
            let height = require_positive(Quantity::Height, height)?;
            if indicator == Indicator::WeightForHeight {
                Some(weight)
            } else {
                let height_m = height / 100.0;
                Some(require_positive(Quantity::Bmi, weight / (height_m * height_m))?)
            }
        }
    };
    Ok(value)
}

fn rejection(indicator: Indicator, err: &ZScoreError) -> IndicatorRejection {
    let (quantity, value) = match err {
        ZScoreError::InvalidMeasurement { quantity, value } => (*quantity, *value),
        _ => (indicator.measured_quantity(), f64::NAN),
    };
    IndicatorRejection {
        indicator,
        quantity,
        value,
        message: err.to_string(),
    }
}
