//! Status bands for the WFA, HFA and WFH z-scores.
//!
//! Bands are half-open on the lower side: exactly -3 is already the
//! moderate band and exactly -2 is already normal. The upper cut-off is
//! closed: exactly +2 is still normal.

use anthro_model::{
    ClassificationResult, NutritionalStatus, StuntingStatus, WastingStatus, ZScoreResult,
};

/// Nutritional status from the weight-for-age z-score.
pub fn nutritional_status(z: Option<f64>) -> Option<NutritionalStatus> {
    let z = z?;
    Some(match z {
        z if z < -3.0 => NutritionalStatus::SeverelyUnderweight,
        z if z < -2.0 => NutritionalStatus::Underweight,
        z if z <= 2.0 => NutritionalStatus::Normal,
        _ => NutritionalStatus::RiskOverweight,
    })
}

/// Stunting status from the length/height-for-age z-score.
pub fn stunting_status(z: Option<f64>) -> Option<StuntingStatus> {
    let z = z?;
    Some(match z {
        z if z < -3.0 => StuntingStatus::SeverelyStunted,
        z if z < -2.0 => StuntingStatus::Stunted,
        _ => StuntingStatus::Normal,
    })
}

/// Wasting status from the weight-for-length/height z-score.
pub fn wasting_status(z: Option<f64>) -> Option<WastingStatus> {
    let z = z?;
    Some(match z {
        z if z < -3.0 => WastingStatus::SeverelyWasted,
        z if z < -2.0 => WastingStatus::Wasted,
        z if z <= 2.0 => WastingStatus::Normal,
        _ => WastingStatus::RiskOverweight,
    })
}

pub fn classify(z_scores: &ZScoreResult) -> ClassificationResult {
    ClassificationResult {
        nutritional_status: nutritional_status(z_scores.weight_for_age_zscore),
        stunting_status: stunting_status(z_scores.height_for_age_zscore),
        wasting_status: wasting_status(z_scores.weight_for_height_zscore),
    }
}
