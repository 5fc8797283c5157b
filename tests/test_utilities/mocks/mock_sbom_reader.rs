use oss_attributions::prelude::*;
use std::path::Path;

/// Mock SbomReader for testing
pub struct MockSbomReader {
    pub sbom: Sbom,
    pub should_fail: bool,
}

impl MockSbomReader {
    pub fn new(components: Vec<Component>) -> Self {
        Self {
            sbom: Sbom::new(components),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            sbom: Sbom::default(),
            should_fail: true,
        }
    }
}

impl SbomReader for MockSbomReader {
    fn read_sbom(&self, path: &Path) -> Result<Sbom> {
        if self.should_fail {
            anyhow::bail!("Mock SBOM reader failure: {}", path.display());
        }
        Ok(self.sbom.clone())
    }
}
