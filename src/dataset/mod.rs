//! Dataset Module
//!
//! Loads the scholarship reference data into memory once at startup.
//!
//! ## Overview
//! The dataset is a CSV file fetched from blob storage. It is parsed into an
//! ordered, immutable [`types::Dataset`] that lives for the whole process and
//! is shared read-only across request handlers.
//!
//! ## Invariants
//! - Every record name is non-empty and unique under normalization
//!   (trim + lowercase). Ranking output is deduplicated by construction.
//! - Record order matches the CSV row order, which is also the row order of
//!   the TF-IDF matrix artifact.

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

/// Case/whitespace normalization applied to names and categorical filter
/// values before comparison.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}
