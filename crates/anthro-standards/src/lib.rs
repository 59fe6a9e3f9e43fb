#![deny(unsafe_code)]

mod data;
pub mod error;
pub mod registry;
pub mod table;

pub use crate::error::StandardsError;
pub use crate::registry::{ReferenceStore, TableSummary};
pub use crate::table::{Breakpoint, ReferenceTable};
