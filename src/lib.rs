//! Scholarship Recommendation Service Library
//!
//! This library crate defines the core modules behind the binary executable (`main.rs`):
//! a small HTTP service that recommends scholarships by TF-IDF content similarity
//! and serves detail lookups over a read-only in-memory dataset.
//!
//! ## Architecture Modules
//! The system is composed of five loosely coupled subsystems:
//!
//! - **`artifacts`**: Startup resource acquisition. Downloads the reference data
//!   (CSV dataset, serialized vectorizer, serialized TF-IDF matrix) from blob
//!   storage into local files before the server starts accepting requests.
//! - **`dataset`**: The data loading layer. Parses the scholarship CSV into an
//!   immutable, ordered `Dataset` and enforces the name-uniqueness invariant.
//! - **`vectorizer`**: The precomputed TF-IDF vector space. Loads vocabulary,
//!   IDF weights and per-record weight vectors, and provides the cosine and
//!   centroid math used for ranking.
//! - **`recommend`**: The recommendation pipeline. Contains the filter stage,
//!   the similarity ranking stage, the detail lookup, and the HTTP handlers.
//! - **`context`**: The immutable per-process application state shared across
//!   request handlers.

pub mod artifacts;
pub mod context;
pub mod dataset;
pub mod error;
pub mod recommend;
pub mod vectorizer;
