//! Vector Space
//!
//! Holds the validated TF-IDF state in memory and provides the similarity
//! math for the ranking stage.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context, Result};

use super::types::{MatrixArtifact, VectorizerArtifact};

/// The read-only TF-IDF vector space: fixed vocabulary, IDF weights and one
/// weight vector per dataset record.
#[derive(Debug)]
pub struct VectorSpace {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
    rows: Vec<Vec<f32>>,
}

impl VectorSpace {
    /// Deserializes both artifacts from disk and validates them.
    pub fn load(vectorizer_path: &Path, matrix_path: &Path) -> Result<Self> {
        let vectorizer_file = File::open(vectorizer_path)
            .with_context(|| format!("failed to open {}", vectorizer_path.display()))?;
        let vectorizer: VectorizerArtifact = serde_json::from_reader(vectorizer_file)
            .with_context(|| format!("failed to parse {}", vectorizer_path.display()))?;

        let matrix_file = File::open(matrix_path)
            .with_context(|| format!("failed to open {}", matrix_path.display()))?;
        let matrix: MatrixArtifact = serde_json::from_reader(matrix_file)
            .with_context(|| format!("failed to parse {}", matrix_path.display()))?;

        Self::from_artifacts(vectorizer, matrix)
    }

    /// Builds the space from already-deserialized artifacts, enforcing the
    /// dimensionality invariants.
    pub fn from_artifacts(vectorizer: VectorizerArtifact, matrix: MatrixArtifact) -> Result<Self> {
        let dims = vectorizer.vocabulary.len();

        if vectorizer.idf.len() != dims {
            bail!(
                "vectorizer has {} IDF weights for {} vocabulary terms",
                vectorizer.idf.len(),
                dims
            );
        }

        for (token, term_index) in &vectorizer.vocabulary {
            if *term_index >= dims {
                bail!(
                    "vocabulary token {:?} maps to dimension {} outside {} dimensions",
                    token,
                    term_index,
                    dims
                );
            }
        }

        for (row, vector) in matrix.rows.iter().enumerate() {
            if vector.len() != dims {
                bail!(
                    "matrix row {} has {} dimensions, expected {}",
                    row,
                    vector.len(),
                    dims
                );
            }
        }

        tracing::info!(
            "Loaded TF-IDF space: {} terms, {} record vectors",
            dims,
            matrix.rows.len()
        );

        Ok(Self {
            vocabulary: vectorizer.vocabulary,
            idf: vectorizer.idf,
            rows: matrix.rows,
        })
    }

    /// Number of record vectors (matrix rows).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Vocabulary cardinality, i.e. the vector dimensionality.
    pub fn dims(&self) -> usize {
        self.vocabulary.len()
    }

    /// The fitted IDF weights, one per dimension.
    ///
    /// The request path only reads precomputed rows, so ranking never
    /// consults this directly; it is retained and exposed so that the
    /// complete fitted state stays inspectable (artifact validation in
    /// tests, operational debugging of a suspect training export).
    pub fn idf(&self) -> &[f32] {
        &self.idf
    }

    /// The precomputed weight vector for the record at `index`.
    pub fn row(&self, index: usize) -> Option<&[f32]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Mean vector of the rows selected by `indices`. Returns `None` when
    /// the selection is empty or references no loaded rows.
    pub fn centroid(&self, indices: &[usize]) -> Option<Vec<f32>> {
        let mut acc = vec![0.0f32; self.dims()];
        let mut count = 0usize;

        for &index in indices {
            let Some(row) = self.row(index) else {
                continue;
            };
            for (slot, value) in acc.iter_mut().zip(row) {
                *slot += value;
            }
            count += 1;
        }

        if count == 0 {
            return None;
        }

        for slot in &mut acc {
            *slot /= count as f32;
        }
        Some(acc)
    }
}

/// Cosine similarity between two vectors. Yields 0.0 when either vector has
/// zero norm, so all-zero TF-IDF rows never rank above genuine matches.
pub fn cosine(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
