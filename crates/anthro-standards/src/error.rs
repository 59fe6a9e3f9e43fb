#![deny(unsafe_code)]

use anthro_model::{Indicator, Sex};

/// Reference data errors. All of them indicate incomplete or corrupt
/// reference tables and are not recoverable at evaluation time.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StandardsError {
    #[error("no reference table registered for {indicator} ({sex})")]
    UnknownIndicatorSex { indicator: Indicator, sex: Sex },

    #[error("reference table for {indicator} ({sex}) has no breakpoints")]
    EmptyTable { indicator: Indicator, sex: Sex },

    #[error(
        "reference table for {indicator} ({sex}) is not strictly increasing at breakpoint {key} (previous {previous})"
    )]
    UnsortedBreakpoints {
        indicator: Indicator,
        sex: Sex,
        key: f64,
        previous: f64,
    },

    #[error(
        "reference table for {indicator} ({sex}) has invalid LMS parameters at breakpoint {key}: L={l}, M={m}, S={s}"
    )]
    InvalidParameters {
        indicator: Indicator,
        sex: Sex,
        key: f64,
        l: f64,
        m: f64,
        s: f64,
    },

    #[error("duplicate reference table for {indicator} ({sex})")]
    DuplicateTable { indicator: Indicator, sex: Sex },
}
