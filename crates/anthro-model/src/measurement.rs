use serde::{Deserialize, Serialize};

use crate::enums::Sex;

/// One measurement event for one child.
///
/// `age_months` is supplied by the caller (measurement date minus birth
/// date); the engine performs no calendar arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementInput {
    pub sex: Sex,
    pub age_months: f64,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    /// Recumbent length or standing height.
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub head_circumference_cm: Option<f64>,
}

impl MeasurementInput {
    pub fn new(sex: Sex, age_months: f64) -> Self {
        Self {
            sex,
            age_months,
            weight_kg: None,
            height_cm: None,
            head_circumference_cm: None,
        }
    }

    #[must_use]
    pub fn with_weight(mut self, weight_kg: f64) -> Self {
        self.weight_kg = Some(weight_kg);
        self
    }

    #[must_use]
    pub fn with_height(mut self, height_cm: f64) -> Self {
        self.height_cm = Some(height_cm);
        self
    }

    #[must_use]
    pub fn with_head_circumference(mut self, head_circumference_cm: f64) -> Self {
        self.head_circumference_cm = Some(head_circumference_cm);
        self
    }

    /// BMI in kg/m², derived as `weight / (height/100)^2`.
    ///
    /// Returns None unless both weight and height are present. No validity
    /// check is made here: a non-positive height yields a non-finite or
    /// meaningless value that the transform rejects.
    pub fn bmi(&self) -> Option<f64> {
        let weight = self.weight_kg?;
        let height_m = self.height_cm? / 100.0;
        Some(weight / (height_m * height_m))
    }
}
