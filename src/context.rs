//! Application Context
//!
//! The immutable per-process state shared by all request handlers: the
//! loaded dataset and the TF-IDF vector space. Constructed once at startup
//! and passed to handlers as `Extension<Arc<AppContext>>`; nothing mutates
//! it afterwards, so concurrent requests need no locking.

use anyhow::{bail, Result};

use crate::dataset::types::Dataset;
use crate::vectorizer::space::VectorSpace;

#[derive(Debug)]
pub struct AppContext {
    pub dataset: Dataset,
    pub space: VectorSpace,
}

impl AppContext {
    /// Pairs the dataset with its vector space. Row `i` of the matrix must
    /// describe record `i` of the dataset, so a length mismatch means the
    /// artifacts are out of sync and startup must abort.
    pub fn new(dataset: Dataset, space: VectorSpace) -> Result<Self> {
        if space.len() != dataset.len() {
            bail!(
                "TF-IDF matrix has {} rows for {} dataset records",
                space.len(),
                dataset.len()
            );
        }
        Ok(Self { dataset, space })
    }
}
