pub mod component;
pub mod filters;
pub mod license_map;
pub mod out_component;
pub mod report;

pub use component::{Component, LicenseDeclaration, Sbom};
pub use filters::Filters;
pub use license_map::{LicenseAliasMap, SpdxNames};
pub use out_component::{IdentityKey, OutComponent};
pub use report::{LicenseBlock, OverviewItem, ReportModel};
