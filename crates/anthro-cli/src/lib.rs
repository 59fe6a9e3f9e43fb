//! CLI library components for the growth z-score engine.

pub mod batch;
pub mod config;
pub mod logging;
pub mod summary;
