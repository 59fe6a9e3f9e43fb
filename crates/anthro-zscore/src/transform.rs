//! The LMS transform (Cole's method) and its inverse.

use anthro_model::{LmsParams, Quantity};

use crate::error::ZScoreError;

/// Scores are clamped to `[-Z_LIMIT, Z_LIMIT]`.
pub const Z_LIMIT: f64 = 6.0;

/// Deviation score of `measured` against `params`, clamped to ±6 and
/// rounded to two decimals.
///
/// - `|L| < 1e-4`: `z = ln(measured / M) / S`
/// - otherwise: `z = ((measured / M)^L - 1) / (L * S)`
///
/// # Errors
///
/// `InvalidMeasurement` when `measured`, `M` or `S` is non-positive or
/// non-finite, rather than returning NaN or infinity.
pub fn z_score(measured: f64, params: LmsParams) -> Result<f64, ZScoreError> {
    require_positive(Quantity::Measured, measured)?;
    require_positive(Quantity::ReferenceMedian, params.m)?;
    require_positive(Quantity::ReferenceSpread, params.s)?;

    let ratio = measured / params.m;
    let raw = if params.is_degenerate() {
        ratio.ln() / params.s
    } else {
        (ratio.powf(params.l) - 1.0) / (params.l * params.s)
    };
    Ok(clamp_and_round(raw))
}

/// Clamp to `[-Z_LIMIT, Z_LIMIT]` and round half away from zero to two
/// decimals. Negative zero comes back as zero.
pub fn clamp_and_round(raw: f64) -> f64 {
    let clamped = raw.clamp(-Z_LIMIT, Z_LIMIT);
    (clamped * 100.0).round() / 100.0 + 0.0
}

/// Measurement value lying exactly `z` deviations from the median.
///
/// Returns None when the power base `1 + L*S*z` is not positive, which
/// happens only for extreme `z` with large |L|.
pub fn value_at_z(params: LmsParams, z: f64) -> Option<f64> {
    if params.is_degenerate() {
        return Some(params.m * (params.s * z).exp());
    }
    let base = 1.0 + params.l * params.s * z;
    if base <= 0.0 {
        return None;
    }
    Some(params.m * base.powf(1.0 / params.l))
}

/// Validate a value that enters the transform as a ratio or divisor.
pub(crate) fn require_positive(quantity: Quantity, value: f64) -> Result<f64, ZScoreError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ZScoreError::InvalidMeasurement { quantity, value })
    }
}
