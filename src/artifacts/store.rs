//! Artifact Store
//!
//! HTTP client for the blob-storage endpoint serving the reference data.
//! Downloads run once at startup, before the server becomes reachable.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ApiError;

use super::types::{ArtifactPaths, DATASET_FILE, MATRIX_FILE, VECTORIZER_FILE};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);
const FETCH_ATTEMPTS: usize = 3;

/// Fetches the artifact set from a base URL into a local data directory.
pub struct ArtifactStore {
    base_url: String,
    data_dir: PathBuf,
    http_client: reqwest::Client,
}

impl ArtifactStore {
    pub fn new(base_url: &str, data_dir: &Path) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            data_dir: data_dir.to_path_buf(),
            http_client: reqwest::Client::new(),
        }
    }

    pub fn artifact_url(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name)
    }

    /// Downloads all three artifacts, returning their local paths.
    pub async fn fetch_all(&self) -> Result<ArtifactPaths, ApiError> {
        tokio::fs::create_dir_all(&self.data_dir).await.map_err(|e| {
            ApiError::Dependency(format!(
                "failed to create data directory {}: {}",
                self.data_dir.display(),
                e
            ))
        })?;

        let paths = ArtifactPaths::resolve(&self.data_dir);
        self.fetch_one(VECTORIZER_FILE, &paths.vectorizer).await?;
        self.fetch_one(MATRIX_FILE, &paths.matrix).await?;
        self.fetch_one(DATASET_FILE, &paths.dataset).await?;
        Ok(paths)
    }

    async fn fetch_one(&self, name: &str, dest: &Path) -> Result<(), ApiError> {
        if tokio::fs::try_exists(dest).await.unwrap_or(false) {
            tracing::info!("Artifact {} already present, skipping download", name);
            return Ok(());
        }

        let url = self.artifact_url(name);
        tracing::info!("Fetching artifact {}", url);

        let response = self.get_with_retry(&url).await.map_err(|e| {
            ApiError::Dependency(format!("failed to download {}: {}", url, e))
        })?;

        if !response.status().is_success() {
            return Err(ApiError::Dependency(format!(
                "download of {} returned {}",
                url,
                response.status()
            )));
        }

        let bytes = response.bytes().await.map_err(|e| {
            ApiError::Dependency(format!("failed to read body of {}: {}", url, e))
        })?;

        // Write-then-rename so an interrupted download never leaves a
        // partial artifact under the final name.
        let part = part_path(dest);
        if let Err(e) = write_and_rename(&part, dest, &bytes).await {
            let _ = tokio::fs::remove_file(&part).await;
            return Err(ApiError::Dependency(format!(
                "failed to store {}: {}",
                dest.display(),
                e
            )));
        }

        tracing::info!("Stored artifact {} ({} bytes)", dest.display(), bytes.len());
        Ok(())
    }

    async fn get_with_retry(&self, url: &str) -> anyhow::Result<reqwest::Response> {
        let mut delay_ms = 150u64;

        for attempt in 0..FETCH_ATTEMPTS {
            let response = self
                .http_client
                .get(url)
                .timeout(FETCH_TIMEOUT)
                .send()
                .await;

            match response {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    if attempt + 1 == FETCH_ATTEMPTS {
                        return Err(anyhow::anyhow!(e));
                    }
                    let jitter = rand::random::<u64>() % 50;
                    tokio::time::sleep(Duration::from_millis(delay_ms + jitter)).await;
                    delay_ms = (delay_ms * 2).min(1200);
                }
            }
        }

        Err(anyhow::anyhow!("Retry attempts exhausted"))
    }
}

pub(super) fn part_path(dest: &Path) -> PathBuf {
    let mut part = dest.as_os_str().to_owned();
    part.push(".part");
    PathBuf::from(part)
}

async fn write_and_rename(part: &Path, dest: &Path, bytes: &[u8]) -> std::io::Result<()> {
    tokio::fs::write(part, bytes).await?;
    tokio::fs::rename(part, dest).await
}
