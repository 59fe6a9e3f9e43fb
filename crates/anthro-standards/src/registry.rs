#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::sync::LazyLock;

use anthro_model::{BreakpointKind, Indicator, Sex};

use crate::data::BUILTIN_TABLES;
use crate::error::StandardsError;
use crate::table::ReferenceTable;

static BUILTIN: LazyLock<Result<ReferenceStore, StandardsError>> = LazyLock::new(|| {
    ReferenceStore::from_tables(BUILTIN_TABLES.iter().map(|(indicator, sex, rows)| {
        ReferenceTable::new(*indicator, *sex, rows.to_vec())
    }))
});

/// One line of the table listing.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TableSummary {
    pub indicator: Indicator,
    pub sex: Sex,
    pub kind: BreakpointKind,
    pub breakpoint_count: usize,
    pub first_key: f64,
    pub last_key: f64,
}

/// Immutable set of reference tables keyed by (indicator, sex).
#[derive(Debug, Clone)]
pub struct ReferenceStore {
    tables: BTreeMap<(Indicator, Sex), ReferenceTable>,
}

impl ReferenceStore {
    /// The process-wide store built from the embedded WHO tables.
    ///
    /// Built and verified on first use. A verification failure is returned
    /// on every call; it means the embedded data is corrupt.
    pub fn builtin() -> Result<&'static ReferenceStore, StandardsError> {
        BUILTIN.as_ref().map_err(Clone::clone)
    }

    /// Build a store from already-verified tables, rejecting duplicates.
    pub fn from_tables<I>(tables: I) -> Result<Self, StandardsError>
    where
        I: IntoIterator<Item = Result<ReferenceTable, StandardsError>>,
    {
        let mut map = BTreeMap::new();
        for table in tables {
            let table = table?;
            let key = (table.indicator(), table.sex());
            if map.contains_key(&key) {
                return Err(StandardsError::DuplicateTable {
                    indicator: key.0,
                    sex: key.1,
                });
            }
            map.insert(key, table);
        }
        Ok(Self { tables: map })
    }

    pub fn lookup(&self, indicator: Indicator, sex: Sex) -> Result<&ReferenceTable, StandardsError> {
        self.tables
            .get(&(indicator, sex))
            .ok_or(StandardsError::UnknownIndicatorSex { indicator, sex })
    }

    /// Tables in (indicator, sex) order.
    pub fn tables(&self) -> impl Iterator<Item = &ReferenceTable> {
        self.tables.values()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn summaries(&self) -> Vec<TableSummary> {
        self.tables()
            .map(|table| TableSummary {
                indicator: table.indicator(),
                sex: table.sex(),
                kind: table.kind(),
                breakpoint_count: table.breakpoints().len(),
                first_key: table.first().key,
                last_key: table.last().key,
            })
            .collect()
    }
}
