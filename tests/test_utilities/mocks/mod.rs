/// Mock implementations for testing
mod mock_license_text_source;
mod mock_progress_reporter;
mod mock_resource_reader;
mod mock_sbom_reader;
mod mock_spdx_catalog;

pub use mock_license_text_source::MockLicenseTextSource;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_resource_reader::MockResourceReader;
pub use mock_sbom_reader::MockSbomReader;
pub use mock_spdx_catalog::MockSpdxCatalog;
