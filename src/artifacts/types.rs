//! Artifact Names and Locations
//!
//! The three blob-storage objects the service depends on, and the resolved
//! local paths handed to the loaders after a successful fetch.

use std::path::{Path, PathBuf};

/// Blob name of the serialized vectorizer state (vocabulary + IDF weights).
pub const VECTORIZER_FILE: &str = "tfidf_vectorizer.json";
/// Blob name of the precomputed TF-IDF weight matrix.
pub const MATRIX_FILE: &str = "tfidf_matrix.json";
/// Blob name of the scholarship CSV dataset.
pub const DATASET_FILE: &str = "scholarships.csv";

/// Local paths of the fetched artifacts, all inside the data directory.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub vectorizer: PathBuf,
    pub matrix: PathBuf,
    pub dataset: PathBuf,
}

impl ArtifactPaths {
    pub fn resolve(data_dir: &Path) -> Self {
        Self {
            vectorizer: data_dir.join(VECTORIZER_FILE),
            matrix: data_dir.join(MATRIX_FILE),
            dataset: data_dir.join(DATASET_FILE),
        }
    }
}
