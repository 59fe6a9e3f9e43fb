//! Type-safe enumerations for growth reference concepts.
//!
//! # WHO Child Growth Standards
//!
//! - Indicators: weight-for-age, length/height-for-age, weight-for-length/height,
//!   BMI-for-age, head-circumference-for-age
//! - Age-based indicators cover birth to 60 months
//! - Weight-for-height covers 45 to 120 cm

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sex of the child. Every reference table is sex-specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Sex {
    type Err = String;

    /// Parse a sex value (case-insensitive).
    /// Accepts the canonical names plus the single-letter and boy/girl forms
    /// found in registration forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "boy" | "l" => Ok(Sex::Male),
            "female" | "f" | "girl" | "p" => Ok(Sex::Female),
            _ => Err(format!("Unknown sex: {s}")),
        }
    }
}

/// What a reference table's breakpoints are measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakpointKind {
    /// Completed age in months.
    AgeMonths,
    /// Recumbent length or standing height in centimetres.
    HeightCm,
}

impl BreakpointKind {
    pub fn unit(&self) -> &'static str {
        match self {
            BreakpointKind::AgeMonths => "months",
            BreakpointKind::HeightCm => "cm",
        }
    }
}

/// Closed interval over which an indicator is defined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidityDomain {
    pub kind: BreakpointKind,
    pub min: f64,
    pub max: f64,
}

impl ValidityDomain {
    /// Returns true when `value` lies inside the closed interval.
    /// NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Anthropometric indicator per the WHO Child Growth Standards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    /// Weight-for-age (WFA).
    WeightForAge,
    /// Length/height-for-age (HFA).
    HeightForAge,
    /// Weight-for-length/height (WFH). Keyed by height, not age.
    WeightForHeight,
    /// BMI-for-age (BFA).
    BmiForAge,
    /// Head-circumference-for-age (HCFA).
    HeadCircumferenceForAge,
}

const AGE_DOMAIN: ValidityDomain = ValidityDomain {
    kind: BreakpointKind::AgeMonths,
    min: 0.0,
    max: 60.0,
};

const HEIGHT_DOMAIN: ValidityDomain = ValidityDomain {
    kind: BreakpointKind::HeightCm,
    min: 45.0,
    max: 120.0,
};

impl Indicator {
    pub const ALL: [Indicator; 5] = [
        Indicator::WeightForAge,
        Indicator::HeightForAge,
        Indicator::WeightForHeight,
        Indicator::BmiForAge,
        Indicator::HeadCircumferenceForAge,
    ];

    /// Short code used on the command line and in CSV headers.
    pub fn code(&self) -> &'static str {
        match self {
            Indicator::WeightForAge => "wfa",
            Indicator::HeightForAge => "hfa",
            Indicator::WeightForHeight => "wfh",
            Indicator::BmiForAge => "bfa",
            Indicator::HeadCircumferenceForAge => "hcfa",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Indicator::WeightForAge => "Weight-for-age",
            Indicator::HeightForAge => "Length/height-for-age",
            Indicator::WeightForHeight => "Weight-for-length/height",
            Indicator::BmiForAge => "BMI-for-age",
            Indicator::HeadCircumferenceForAge => "Head circumference-for-age",
        }
    }

    /// Name of the z-score field in the output contract.
    pub fn output_field(&self) -> &'static str {
        match self {
            Indicator::WeightForAge => "weight_for_age_zscore",
            Indicator::HeightForAge => "height_for_age_zscore",
            Indicator::WeightForHeight => "weight_for_height_zscore",
            Indicator::BmiForAge => "bmi_for_age_zscore",
            Indicator::HeadCircumferenceForAge => "head_circumference_zscore",
        }
    }

    /// The quantity that is scored against the reference.
    pub fn measured_quantity(&self) -> Quantity {
        match self {
            Indicator::WeightForAge | Indicator::WeightForHeight => Quantity::Weight,
            Indicator::HeightForAge => Quantity::Height,
            Indicator::BmiForAge => Quantity::Bmi,
            Indicator::HeadCircumferenceForAge => Quantity::HeadCircumference,
        }
    }

    pub fn breakpoint_kind(&self) -> BreakpointKind {
        self.domain().kind
    }

    pub fn domain(&self) -> ValidityDomain {
        match self {
            Indicator::WeightForHeight => HEIGHT_DOMAIN,
            _ => AGE_DOMAIN,
        }
    }

    /// Every indicator is tabulated for both sexes.
    pub fn applicable_sexes(&self) -> &'static [Sex] {
        &Sex::ALL
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Indicator {
    type Err = String;

    /// Parse an indicator from its short code or snake_case name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "wfa" | "weight_for_age" => Ok(Indicator::WeightForAge),
            "hfa" | "lhfa" | "height_for_age" | "length_for_age" => Ok(Indicator::HeightForAge),
            "wfh" | "wfl" | "weight_for_height" | "weight_for_length" => {
                Ok(Indicator::WeightForHeight)
            }
            "bfa" | "bmi" | "bmi_for_age" => Ok(Indicator::BmiForAge),
            "hcfa" | "hc" | "head_circumference_for_age" | "head_circumference" => {
                Ok(Indicator::HeadCircumferenceForAge)
            }
            _ => Err(format!("Unknown indicator: {s}")),
        }
    }
}

/// A numeric quantity that can be rejected as invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    /// A measurement scored without further context.
    Measured,
    Weight,
    Height,
    HeadCircumference,
    Bmi,
    Age,
    ReferenceMedian,
    ReferenceSpread,
}

impl Quantity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quantity::Measured => "measured value",
            Quantity::Weight => "weight",
            Quantity::Height => "height",
            Quantity::HeadCircumference => "head circumference",
            Quantity::Bmi => "BMI",
            Quantity::Age => "age",
            Quantity::ReferenceMedian => "reference median (M)",
            Quantity::ReferenceSpread => "reference coefficient of variation (S)",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_from_str() {
        assert_eq!("Male".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!(" f ".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!("GIRL".parse::<Sex>().unwrap(), Sex::Female);
        assert!("x".parse::<Sex>().is_err());
    }

    #[test]
    fn test_indicator_from_str() {
        assert_eq!("wfa".parse::<Indicator>().unwrap(), Indicator::WeightForAge);
        assert_eq!(
            "weight-for-length".parse::<Indicator>().unwrap(),
            Indicator::WeightForHeight
        );
        assert_eq!(
            "HCFA".parse::<Indicator>().unwrap(),
            Indicator::HeadCircumferenceForAge
        );
        assert!("obese".parse::<Indicator>().is_err());
    }

    #[test]
    fn test_domain_bounds_are_inclusive() {
        let age = Indicator::WeightForAge.domain();
        assert!(age.contains(0.0));
        assert!(age.contains(60.0));
        assert!(!age.contains(60.01));
        assert!(!age.contains(-0.5));
        assert!(!age.contains(f64::NAN));

        let height = Indicator::WeightForHeight.domain();
        assert_eq!(height.kind, BreakpointKind::HeightCm);
        assert!(height.contains(45.0));
        assert!(height.contains(120.0));
        assert!(!height.contains(44.9));
    }
}
