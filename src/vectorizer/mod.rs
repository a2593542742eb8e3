//! Vectorizer Module
//!
//! The precomputed TF-IDF vector space used by the ranking stage.
//!
//! ## Overview
//! The vocabulary, IDF weights and per-record weight vectors are learned
//! offline at training time and shipped as two serialized artifacts. This
//! module only deserializes and validates that state; nothing here retrains
//! or mutates vectors at runtime.
//!
//! ## Submodules
//! - **`space`**: The in-memory [`space::VectorSpace`] plus the cosine and
//!   centroid math used for similarity ranking.
//! - **`types`**: Serialized artifact layouts.

pub mod space;
pub mod types;
