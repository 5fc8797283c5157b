use std::path::PathBuf;
use std::time::Duration;

/// Default number of license texts resolved concurrently
pub const DEFAULT_CONCURRENCY: usize = 8;

/// AttributionRequest - Internal request DTO for the attribution use case
#[derive(Debug, Clone)]
pub struct AttributionRequest {
    /// Path to the CycloneDX JSON SBOM
    pub sbom_path: PathBuf,
    /// License alias map override; the bundled map is used when None
    pub license_map_path: Option<PathBuf>,
    /// Optional filters resource, applied on top of `ignore_purl_patterns`
    pub filters_path: Option<PathBuf>,
    /// PURL patterns that are always ignored
    pub ignore_purl_patterns: Vec<String>,
    /// Maximum number of license ids resolved at the same time
    pub concurrency: usize,
    /// Deadline for the whole license text resolution phase
    pub deadline: Option<Duration>,
}

impl AttributionRequest {
    pub fn new(sbom_path: PathBuf) -> Self {
        Self {
            sbom_path,
            license_map_path: None,
            filters_path: None,
            ignore_purl_patterns: Vec::new(),
            concurrency: DEFAULT_CONCURRENCY,
            deadline: None,
        }
    }

    pub fn with_license_map(mut self, path: Option<PathBuf>) -> Self {
        self.license_map_path = path;
        self
    }

    pub fn with_filters(mut self, path: Option<PathBuf>) -> Self {
        self.filters_path = path;
        self
    }

    pub fn with_ignore_purl_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_purl_patterns = patterns;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn with_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }
}
