//! Artifact Acquisition Module
//!
//! Fetches the reference data from blob storage at process startup.
//!
//! ## Workflow
//! 1. **Download**: Fetches the serialized vectorizer, the TF-IDF matrix and
//!    the scholarship CSV over HTTP, with bounded retry.
//! 2. **Atomicity**: Each artifact is written to a `.part` temp file and only
//!    renamed into place once fully downloaded, so a failed fetch never
//!    leaves a partial file behind.
//! 3. **Reuse**: Artifacts already present in the data directory are kept
//!    as-is and the download is skipped.
//!
//! Any failure here is fatal: the server must not bind its listener without
//! a complete set of artifacts.

pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
