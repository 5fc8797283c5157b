use async_trait::async_trait;
use oss_attributions::prelude::*;

/// Mock SpdxCatalog for testing
pub struct MockSpdxCatalog {
    pub names: SpdxNames,
    pub should_fail: bool,
}

impl MockSpdxCatalog {
    pub fn new() -> Self {
        Self {
            names: SpdxNames::new(),
            should_fail: false,
        }
    }

    pub fn with_name(mut self, id: &str, name: &str) -> Self {
        self.names.insert(id.to_string(), name.to_string());
        self
    }

    pub fn with_failure() -> Self {
        Self {
            names: SpdxNames::new(),
            should_fail: true,
        }
    }
}

impl Default for MockSpdxCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpdxCatalog for MockSpdxCatalog {
    async fn fetch_license_names(&self) -> Result<SpdxNames> {
        if self.should_fail {
            anyhow::bail!("Mock SPDX catalog failure");
        }
        Ok(self.names.clone())
    }
}
