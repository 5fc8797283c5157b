/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod formatter;
pub mod license_text_source;
pub mod output_presenter;
pub mod progress_reporter;
pub mod sbom_reader;
pub mod spdx_catalog;

pub use formatter::ReportFormatter;
pub use license_text_source::{LicenseTextSource, LicenseTextStore};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use sbom_reader::{ResourceReader, SbomReader};
pub use spdx_catalog::SpdxCatalog;
