use thiserror::Error;

use anthro_model::Quantity;
use anthro_standards::StandardsError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ZScoreError {
    /// A measured value or reference parameter that the LMS transform
    /// cannot accept (non-positive or non-finite).
    #[error("invalid measurement: {quantity} must be positive and finite, got {value}")]
    InvalidMeasurement { quantity: Quantity, value: f64 },

    #[error("measurement date {measured} is before birth date {birth}")]
    MeasurementBeforeBirth {
        birth: chrono::NaiveDate,
        measured: chrono::NaiveDate,
    },

    /// Missing or corrupt reference data.
    #[error(transparent)]
    Standards(#[from] StandardsError),
}

impl ZScoreError {
    /// Fatal errors must reach the caller; they are never folded into a
    /// missing score.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ZScoreError::Standards(_))
    }
}
