use oss_attributions::prelude::*;
use std::path::Path;

/// Mock ResourceReader for testing
#[derive(Default)]
pub struct MockResourceReader {
    pub aliases: Vec<(String, String)>,
    pub filters: Option<Filters>,
}

impl MockResourceReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alias(mut self, text: &str, id: &str) -> Self {
        self.aliases.push((text.to_string(), id.to_string()));
        self
    }

    pub fn with_purl_filter(mut self, pattern: &str) -> Self {
        let empty: [&str; 0] = [];
        self.filters = Some(Filters::compile(&[pattern], &empty).unwrap());
        self
    }
}

impl ResourceReader for MockResourceReader {
    fn read_license_map(&self, _path: Option<&Path>) -> Result<LicenseAliasMap> {
        Ok(self.aliases.iter().cloned().collect())
    }

    fn read_filters(&self, path: &Path) -> Result<Filters> {
        match &self.filters {
            Some(filters) => Ok(filters.clone()),
            None => anyhow::bail!("Mock filters not found: {}", path.display()),
        }
    }
}
