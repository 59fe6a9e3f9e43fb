//! Growth reference z-score engine.
//!
//! This crate turns a raw anthropometric measurement into WHO z-scores and
//! clinical statuses:
//!
//! - **interpolate**: LMS parameters at an arbitrary age or height
//! - **transform**: the LMS transform and its inverse
//! - **selector**: which indicators apply to a measurement
//! - **classify**: nutritional, stunting and wasting status bands
//! - **engine**: the single entry point used by callers
//! - **age**: age-in-months from calendar dates, for callers that need it

pub mod age;
pub mod classify;
pub mod engine;
pub mod error;
pub mod interpolate;
pub mod selector;
pub mod transform;

pub use age::{DAYS_PER_MONTH, age_in_months};
pub use classify::{classify, nutritional_status, stunting_status, wasting_status};
pub use engine::GrowthEngine;
pub use error::ZScoreError;
pub use interpolate::resolve;
pub use selector::{ComputedScores, compute_all};
pub use transform::{Z_LIMIT, clamp_and_round, value_at_z, z_score};
