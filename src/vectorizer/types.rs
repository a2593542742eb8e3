//! Vectorizer Artifact Types
//!
//! JSON layouts of the two serialized TF-IDF artifacts fetched at startup.
//! Both are opaque training outputs; the service never recomputes them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The fitted vectorizer state: token vocabulary and IDF weights.
///
/// `vocabulary` maps each token to its dimension index; `idf` holds one
/// weight per dimension, in index order.
#[derive(Debug, Serialize, Deserialize)]
pub struct VectorizerArtifact {
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f32>,
}

/// The precomputed TF-IDF weight matrix.
///
/// One row per dataset record, in CSV row order; every row has the
/// vocabulary dimensionality.
#[derive(Debug, Serialize, Deserialize)]
pub struct MatrixArtifact {
    pub rows: Vec<Vec<f32>>,
}
