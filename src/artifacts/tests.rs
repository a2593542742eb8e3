//! Artifacts Module Tests
//!
//! Validates URL construction, path resolution and the offline reuse path.
//!
//! *Note: live downloads are exercised against a real blob-storage endpoint
//! in deployment smoke tests, not here.*

#[cfg(test)]
mod tests {
    use crate::artifacts::store::{part_path, ArtifactStore};
    use crate::artifacts::types::{ArtifactPaths, DATASET_FILE, MATRIX_FILE, VECTORIZER_FILE};
    use std::path::Path;

    // ============================================================
    // URL AND PATH RESOLUTION
    // ============================================================

    #[test]
    fn test_artifact_url_joins_base() {
        let store = ArtifactStore::new("https://storage.example.com/scholarships", Path::new("data"));

        assert_eq!(
            store.artifact_url(DATASET_FILE),
            "https://storage.example.com/scholarships/scholarships.csv"
        );
    }

    #[test]
    fn test_artifact_url_trims_trailing_slash() {
        let store = ArtifactStore::new("https://storage.example.com/scholarships/", Path::new("data"));

        assert_eq!(
            store.artifact_url(VECTORIZER_FILE),
            "https://storage.example.com/scholarships/tfidf_vectorizer.json"
        );
    }

    #[test]
    fn test_paths_resolve_into_data_dir() {
        let paths = ArtifactPaths::resolve(Path::new("/var/lib/svc"));

        assert_eq!(paths.vectorizer, Path::new("/var/lib/svc").join(VECTORIZER_FILE));
        assert_eq!(paths.matrix, Path::new("/var/lib/svc").join(MATRIX_FILE));
        assert_eq!(paths.dataset, Path::new("/var/lib/svc").join(DATASET_FILE));
    }

    #[test]
    fn test_part_path_appends_suffix() {
        let part = part_path(Path::new("/tmp/scholarships.csv"));
        assert_eq!(part, Path::new("/tmp/scholarships.csv.part"));
    }

    // ============================================================
    // OFFLINE REUSE
    // ============================================================

    #[tokio::test]
    async fn test_fetch_all_skips_existing_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        for name in [VECTORIZER_FILE, MATRIX_FILE, DATASET_FILE] {
            std::fs::write(dir.path().join(name), b"cached").unwrap();
        }

        // Base URL is unroutable; success proves no download was attempted
        let store = ArtifactStore::new("http://127.0.0.1:1/none", dir.path());
        let paths = store.fetch_all().await.expect("reuse path failed");

        assert_eq!(std::fs::read(&paths.dataset).unwrap(), b"cached");
    }

    #[tokio::test]
    async fn test_fetch_all_fails_without_source() {
        let dir = tempfile::tempdir().unwrap();

        // Empty data dir and unreachable endpoint: fetch must error out
        let store = ArtifactStore::new("http://127.0.0.1:1/none", dir.path());
        let result = store.fetch_all().await;

        assert!(result.is_err());
        // No partial files may remain
        assert!(!dir.path().join(format!("{}.part", VECTORIZER_FILE)).exists());
        assert!(!dir.path().join(VECTORIZER_FILE).exists());
    }
}
