use serde::Serialize;

use anthro_model::{BreakpointKind, Indicator, LmsParams, Sex};

use crate::error::StandardsError;

/// LMS parameters tabulated at one age (months) or height (cm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Breakpoint {
    pub key: f64,
    pub lms: LmsParams,
}

impl Breakpoint {
    pub const fn new(key: f64, l: f64, m: f64, s: f64) -> Self {
        Self {
            key,
            lms: LmsParams::new(l, m, s),
        }
    }
}

/// Reference table for one (indicator, sex) pair.
///
/// Construction verifies that the table is non-empty, that keys are finite
/// and strictly increasing, and that every row has valid LMS parameters.
/// A constructed table is never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceTable {
    indicator: Indicator,
    sex: Sex,
    breakpoints: Vec<Breakpoint>,
}

impl ReferenceTable {
    pub fn new(
        indicator: Indicator,
        sex: Sex,
        breakpoints: Vec<Breakpoint>,
    ) -> Result<Self, StandardsError> {
        if breakpoints.is_empty() {
            return Err(StandardsError::EmptyTable { indicator, sex });
        }
        for (index, row) in breakpoints.iter().enumerate() {
            if !row.lms.is_valid() || !row.key.is_finite() {
                return Err(StandardsError::InvalidParameters {
                    indicator,
                    sex,
                    key: row.key,
                    l: row.lms.l,
                    m: row.lms.m,
                    s: row.lms.s,
                });
            }
            if index > 0 {
                let previous = breakpoints[index - 1].key;
                if row.key <= previous {
                    return Err(StandardsError::UnsortedBreakpoints {
                        indicator,
                        sex,
                        key: row.key,
                        previous,
                    });
                }
            }
        }
        Ok(Self {
            indicator,
            sex,
            breakpoints,
        })
    }

    pub fn indicator(&self) -> Indicator {
        self.indicator
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn kind(&self) -> BreakpointKind {
        self.indicator.breakpoint_kind()
    }

    /// Rows in ascending key order. Never empty.
    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    pub fn first(&self) -> &Breakpoint {
        &self.breakpoints[0]
    }

    pub fn last(&self) -> &Breakpoint {
        &self.breakpoints[self.breakpoints.len() - 1]
    }

    /// Exact row for `key`, if tabulated.
    pub fn get(&self, key: f64) -> Option<&Breakpoint> {
        self.breakpoints
            .binary_search_by(|row| row.key.total_cmp(&key))
            .ok()
            .map(|index| &self.breakpoints[index])
    }
}
