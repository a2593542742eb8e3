//! CSV Loader
//!
//! Parses the scholarship CSV artifact into a [`Dataset`] and enforces the
//! load-time invariants. Violations are fatal: the process must not start
//! serving requests over a dataset it cannot trust.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};

use super::normalize;
use super::types::{Dataset, ScholarshipRecord};

/// Loads the dataset from a CSV file on disk.
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let file = File::open(path)
        .with_context(|| format!("failed to open dataset file {}", path.display()))?;
    read_records(file).with_context(|| format!("failed to load dataset {}", path.display()))
}

/// Parses CSV rows from any reader. Split out of [`load_csv`] so tests can
/// feed in-memory fixtures.
pub fn read_records<R: Read>(reader: R) -> Result<Dataset> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records: Vec<ScholarshipRecord> = Vec::new();
    let mut seen_names: HashSet<String> = HashSet::new();

    for (row, result) in csv_reader.deserialize::<ScholarshipRecord>().enumerate() {
        // Row numbers are 1-based and skip the header line.
        let row_number = row + 2;
        let record = result.with_context(|| format!("malformed CSV row {}", row_number))?;

        let key = normalize(&record.name);
        if key.is_empty() {
            bail!("row {} has an empty scholarship name", row_number);
        }
        if !seen_names.insert(key) {
            bail!(
                "row {} duplicates scholarship name {:?}",
                row_number,
                record.name
            );
        }

        records.push(record);
    }

    if records.is_empty() {
        bail!("dataset contains no records");
    }

    tracing::info!("Loaded {} scholarship records", records.len());
    Ok(Dataset::new(records))
}
