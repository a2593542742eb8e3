//! Recommendation Module
//!
//! The core component answering user queries against the in-memory dataset.
//!
//! ## Overview
//! This module implements the content-based filtering pipeline. It bridges
//! the HTTP API layer with the loaded reference data (`Dataset` and TF-IDF
//! `VectorSpace`).
//!
//! ## Responsibilities
//! - **Filtering**: Narrowing the dataset to records matching the requested
//!   education level, funding type and continent.
//! - **Ranking**: Scoring the filtered records by cosine similarity to the
//!   subset centroid and returning a capped, ordered list.
//! - **Lookup**: Resolving a scholarship name to its full detail record.
//! - **API**: Exposing both operations via RESTful HTTP endpoints.
//!
//! ## Submodules
//! - **`engine`**: Contains the filter, ranking and lookup logic.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod engine;
pub mod handlers;
pub mod types;
