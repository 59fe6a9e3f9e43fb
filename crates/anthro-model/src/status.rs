//! Clinical status categories derived from z-scores.
//!
//! The four-tier nutritional and wasting schemes follow the current
//! ministry-aligned categories. The retired three-tier scheme with a
//! separate obese category is intentionally absent.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Nutritional status from the weight-for-age z-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutritionalStatus {
    /// z < -3
    SeverelyUnderweight,
    /// -3 <= z < -2
    Underweight,
    /// -2 <= z <= 2
    Normal,
    /// z > 2
    RiskOverweight,
}

impl NutritionalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NutritionalStatus::SeverelyUnderweight => "severely_underweight",
            NutritionalStatus::Underweight => "underweight",
            NutritionalStatus::Normal => "normal",
            NutritionalStatus::RiskOverweight => "risk_overweight",
        }
    }
}

/// Stunting status from the length/height-for-age z-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StuntingStatus {
    /// z < -3
    SeverelyStunted,
    /// -3 <= z < -2
    Stunted,
    /// z >= -2
    Normal,
}

impl StuntingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StuntingStatus::SeverelyStunted => "severely_stunted",
            StuntingStatus::Stunted => "stunted",
            StuntingStatus::Normal => "normal",
        }
    }
}

/// Wasting status from the weight-for-length/height z-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WastingStatus {
    /// z < -3
    SeverelyWasted,
    /// -3 <= z < -2
    Wasted,
    /// -2 <= z <= 2
    Normal,
    /// z > 2
    RiskOverweight,
}

impl WastingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WastingStatus::SeverelyWasted => "severely_wasted",
            WastingStatus::Wasted => "wasted",
            WastingStatus::Normal => "normal",
            WastingStatus::RiskOverweight => "risk_overweight",
        }
    }
}

impl fmt::Display for NutritionalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for StuntingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for WastingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
