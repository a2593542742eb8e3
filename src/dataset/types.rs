//! Dataset Types
//!
//! Defines the scholarship record as it appears in the CSV artifact and the
//! in-memory collection wrapper shared across handlers.

use serde::{Deserialize, Serialize};

use super::normalize;

/// One scholarship as loaded from the CSV dataset. Immutable after load.
///
/// `name` is the unique lookup key. The three categorical fields
/// (`education_level`, `funding_type`, `continent`) drive the filter stage;
/// the remaining fields are display data returned by the detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScholarshipRecord {
    pub name: String,
    pub education_level: String,
    pub funding_type: String,
    pub continent: String,
    pub country: String,
    pub deadline: String,
    pub description: String,
    pub link: String,
}

/// Ordered, read-only collection of scholarship records.
///
/// Loaded once at startup; record positions are stable and double as row
/// indices into the TF-IDF matrix.
#[derive(Debug)]
pub struct Dataset {
    records: Vec<ScholarshipRecord>,
}

impl Dataset {
    pub(super) fn new(records: Vec<ScholarshipRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ScholarshipRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&ScholarshipRecord> {
        self.records.get(index)
    }

    /// Case-insensitive exact match on the unique name key.
    pub fn find_by_name(&self, name: &str) -> Option<&ScholarshipRecord> {
        let wanted = normalize(name);
        self.records
            .iter()
            .find(|record| normalize(&record.name) == wanted)
    }
}
