//! Shared vocabulary of the growth z-score engine.
//!
//! Everything here is a plain value type: no reference data, no numeric
//! algorithms. The other crates exchange these types.

pub mod assessment;
pub mod enums;
pub mod lms;
pub mod measurement;
pub mod options;
pub mod status;

pub use assessment::{ClassificationResult, GrowthAssessment, IndicatorRejection, ZScoreResult};
pub use enums::{BreakpointKind, Indicator, Quantity, Sex, ValidityDomain};
pub use lms::LmsParams;
pub use measurement::MeasurementInput;
pub use options::{AgeKeyMode, EngineOptions};
pub use status::{NutritionalStatus, StuntingStatus, WastingStatus};
