//! Configuration options for z-score evaluation.

use serde::{Deserialize, Serialize};

/// How an age-in-months is turned into a reference table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeKeyMode {
    /// Truncate to completed months before lookup.
    #[default]
    TruncateMonths,
    /// Use the fractional age directly; the interpolator blends between
    /// neighbouring monthly rows.
    Fractional,
}

/// Options controlling evaluation behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineOptions {
    /// Lookup key for the age-based indicators.
    pub age_key: AgeKeyMode,

    /// Log a warning for each indicator rejected because of invalid input.
    pub warn_on_rejection: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            age_key: AgeKeyMode::TruncateMonths,
            warn_on_rejection: true,
        }
    }
}

impl EngineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_age_key(mut self, age_key: AgeKeyMode) -> Self {
        self.age_key = age_key;
        self
    }

    #[must_use]
    pub fn with_warn_on_rejection(mut self, enable: bool) -> Self {
        self.warn_on_rejection = enable;
        self
    }

    /// Key used for age-based table lookups.
    ///
    /// Callers pass an age already known to be inside [0, 60], so truncation
    /// and flooring coincide.
    pub fn age_key(&self, age_months: f64) -> f64 {
        match self.age_key {
            AgeKeyMode::TruncateMonths => age_months.trunc(),
            AgeKeyMode::Fractional => age_months,
        }
    }
}
