use super::file_writer::write_atomic;
use crate::ports::outbound::{LicenseTextSource, LicenseTextStore};
use crate::shared::error::AttributionError;
use crate::shared::security::{read_regular_file_lossy, validate_license_id};
use crate::shared::Result;
use async_trait::async_trait;
use std::fs;
use std::path::PathBuf;

/// LicenseCacheDirectory adapter - the on-disk license text cache
///
/// One `<id>.txt` file per license id. Cached texts are trusted as-is:
/// a hit is returned verbatim and never re-fetched.
///
/// Implements both the first tier of the resolution chain and the store
/// that remote texts are written back to.
pub struct LicenseCacheDirectory {
    dir: PathBuf,
}

impl LicenseCacheDirectory {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn path_for(&self, license_id: &str) -> Result<PathBuf> {
        validate_license_id(license_id)?;
        Ok(self.dir.join(format!("{}.txt", license_id)))
    }
}

#[async_trait]
impl LicenseTextSource for LicenseCacheDirectory {
    fn name(&self) -> &str {
        "cache"
    }

    fn applies_to(&self, _license_id: &str) -> bool {
        true
    }

    async fn fetch(&self, license_id: &str) -> Result<Option<String>> {
        let path = self.path_for(license_id)?;
        if !path.exists() {
            return Ok(None);
        }

        read_regular_file_lossy(&path, "cached license text").map(Some)
    }
}

impl LicenseTextStore for LicenseCacheDirectory {
    fn store(&self, license_id: &str, text: &str) -> Result<()> {
        let path = self.path_for(license_id)?;
        fs::create_dir_all(&self.dir).map_err(|e| AttributionError::FileWriteError {
            path: self.dir.clone(),
            details: format!("Failed to create license cache directory: {}", e),
        })?;
        write_atomic(&path, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_cache_hit_returns_verbatim_text() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("MIT.txt"), "cached text\n").unwrap();

        let cache = LicenseCacheDirectory::new(temp_dir.path().to_path_buf());
        let text = cache.fetch("MIT").await.unwrap();

        assert_eq!(text.as_deref(), Some("cached text\n"));
    }

    #[tokio::test]
    async fn test_cache_hit_with_non_utf8_bytes_is_still_a_hit() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("MIT.txt"), b"caf\xe9 license\n").unwrap();

        let cache = LicenseCacheDirectory::new(temp_dir.path().to_path_buf());
        let text = cache.fetch("MIT").await.unwrap();

        assert_eq!(text.as_deref(), Some("caf\u{FFFD} license\n"));
    }

    #[tokio::test]
    async fn test_cache_miss_is_not_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let cache = LicenseCacheDirectory::new(temp_dir.path().join("licenses"));

        assert_eq!(cache.fetch("MIT").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_cache_rejects_path_traversal() {
        let temp_dir = TempDir::new().unwrap();
        let cache = LicenseCacheDirectory::new(temp_dir.path().to_path_buf());

        assert!(cache.fetch("../secret").await.is_err());
        assert!(cache.store("../secret", "x").is_err());
    }

    #[tokio::test]
    async fn test_store_creates_directory_and_is_readable() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("third_party").join("licenses");
        let cache = LicenseCacheDirectory::new(dir.clone());

        cache.store("Apache-2.0", "Apache text").unwrap();

        assert_eq!(
            cache.fetch("Apache-2.0").await.unwrap().as_deref(),
            Some("Apache text")
        );
        assert!(dir.join("Apache-2.0.txt").is_file());
    }

    #[test]
    fn test_cache_applies_to_every_id() {
        let cache = LicenseCacheDirectory::new(PathBuf::from("licenses"));
        assert!(cache.applies_to("MIT"));
        assert!(cache.applies_to("LicenseRef-Custom"));
        assert!(!cache.persists_result());
        assert_eq!(cache.name(), "cache");
    }
}
