use crate::attribution::services::LICENSE_REF_PREFIX;
use crate::ports::outbound::LicenseTextSource;
use crate::shared::security::{read_regular_file, validate_license_id};
use crate::shared::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// CustomLicenseDirectory adapter - operator supplied texts for `LicenseRef-` ids
///
/// Only consulted for custom ids. A missing file is a resolution failure for
/// that id: no other tier can know the text of a locally defined license.
pub struct CustomLicenseDirectory {
    dir: PathBuf,
}

impl CustomLicenseDirectory {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

#[async_trait]
impl LicenseTextSource for CustomLicenseDirectory {
    fn name(&self) -> &str {
        "custom"
    }

    fn applies_to(&self, license_id: &str) -> bool {
        license_id.starts_with(LICENSE_REF_PREFIX)
    }

    async fn fetch(&self, license_id: &str) -> Result<Option<String>> {
        validate_license_id(license_id)?;
        let path = self.dir.join(format!("{}.txt", license_id));

        if !path.exists() {
            anyhow::bail!(
                "unknown license {:?}: expected custom license text at {}",
                license_id,
                path.display()
            );
        }

        read_regular_file(&path, "custom license text").map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_applies_only_to_license_refs() {
        let custom = CustomLicenseDirectory::new(PathBuf::from("custom"));
        assert!(custom.applies_to("LicenseRef-Acme-EULA"));
        assert!(!custom.applies_to("MIT"));
    }

    #[tokio::test]
    async fn test_reads_custom_text() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("LicenseRef-Acme.txt"), "Acme terms").unwrap();

        let custom = CustomLicenseDirectory::new(temp_dir.path().to_path_buf());
        assert_eq!(
            custom.fetch("LicenseRef-Acme").await.unwrap().as_deref(),
            Some("Acme terms")
        );
    }

    #[tokio::test]
    async fn test_missing_custom_text_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let custom = CustomLicenseDirectory::new(temp_dir.path().to_path_buf());

        let err = custom.fetch("LicenseRef-Missing").await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("unknown license \"LicenseRef-Missing\""));
        assert!(message.contains("LicenseRef-Missing.txt"));
    }
}
