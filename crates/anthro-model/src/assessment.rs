use serde::{Deserialize, Serialize};

use crate::enums::{Indicator, Quantity};
use crate::status::{NutritionalStatus, StuntingStatus, WastingStatus};

/// One z-score per indicator. `None` when the indicator was not computable.
///
/// Values are clamped to [-6, 6] and rounded to two decimals by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ZScoreResult {
    pub weight_for_age_zscore: Option<f64>,
    pub height_for_age_zscore: Option<f64>,
    pub weight_for_height_zscore: Option<f64>,
    pub bmi_for_age_zscore: Option<f64>,
    pub head_circumference_zscore: Option<f64>,
}

impl ZScoreResult {
    pub fn get(&self, indicator: Indicator) -> Option<f64> {
        match indicator {
            Indicator::WeightForAge => self.weight_for_age_zscore,
            Indicator::HeightForAge => self.height_for_age_zscore,
            Indicator::WeightForHeight => self.weight_for_height_zscore,
            Indicator::BmiForAge => self.bmi_for_age_zscore,
            Indicator::HeadCircumferenceForAge => self.head_circumference_zscore,
        }
    }

    /// Number of indicators that produced a score.
    pub fn computed_count(&self) -> usize {
        Indicator::ALL
            .iter()
            .filter(|indicator| self.get(**indicator).is_some())
            .count()
    }
}

/// Categorical statuses derived from [`ZScoreResult`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub nutritional_status: Option<NutritionalStatus>,
    pub stunting_status: Option<StuntingStatus>,
    pub wasting_status: Option<WastingStatus>,
}

/// An indicator that was skipped because one of its inputs was invalid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorRejection {
    pub indicator: Indicator,
    pub quantity: Quantity,
    pub value: f64,
    pub message: String,
}

/// Full result of evaluating one measurement.
///
/// Serializes as the flat record merged into the stored measurement:
/// five z-score fields, three status fields and, only when non-empty,
/// the list of rejected indicators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrowthAssessment {
    #[serde(flatten)]
    pub z_scores: ZScoreResult,
    #[serde(flatten)]
    pub classification: ClassificationResult,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rejections: Vec<IndicatorRejection>,
}

impl GrowthAssessment {
    pub fn has_rejections(&self) -> bool {
        !self.rejections.is_empty()
    }
}
