//! oss-attributions - open-source license attribution reports from CycloneDX SBOMs
//!
//! This library turns a CycloneDX SBOM into a human-readable attribution
//! report (`THIRD_PARTY_LICENSES.html`), a Markdown `NOTICE.md`, and a
//! directory of cached license texts, following hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`attribution`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use oss_attributions::prelude::*;
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let cache = Arc::new(LicenseCacheDirectory::new(PathBuf::from("third_party/licenses")));
//! let custom = Arc::new(CustomLicenseDirectory::new(PathBuf::from("third_party/licenses/custom")));
//! let spdx = Arc::new(SpdxLicenseListClient::new("v3.27.0")?);
//!
//! let tiers: Vec<Arc<dyn LicenseTextSource>> = vec![cache.clone(), custom, spdx.clone()];
//! let resolver = LicenseTextResolver::new(tiers, cache);
//!
//! // Create use case
//! let use_case = GenerateAttributionUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     spdx,
//!     resolver,
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = AttributionRequest::new(PathBuf::from("third_party/sbom/my-repo.cdx.json"));
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let output = NoticeFormatter::new().format(&response.model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod attribution;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        CustomLicenseDirectory, FileSystemReader, FileSystemWriter, LicenseCacheDirectory,
    };
    pub use crate::adapters::outbound::formatters::{
        HtmlFormatter, NoticeFormatter, TemplateOverride,
    };
    pub use crate::adapters::outbound::network::SpdxLicenseListClient;
    pub use crate::application::dto::{AttributionRequest, AttributionResponse};
    pub use crate::application::services::{LicenseText, LicenseTextResolver};
    pub use crate::application::use_cases::GenerateAttributionUseCase;
    pub use crate::attribution::domain::{
        Component, Filters, LicenseAliasMap, LicenseBlock, LicenseDeclaration, OutComponent,
        OverviewItem, ReportModel, Sbom, SpdxNames,
    };
    pub use crate::ports::outbound::{
        LicenseTextSource, LicenseTextStore, OutputPresenter, ProgressReporter, ReportFormatter,
        ResourceReader, SbomReader, SpdxCatalog,
    };
    pub use crate::shared::Result;
}
