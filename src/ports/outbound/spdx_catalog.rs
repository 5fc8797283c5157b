use crate::attribution::domain::SpdxNames;
use crate::shared::Result;
use async_trait::async_trait;

/// SpdxCatalog port for the SPDX license list (id -> display name)
#[async_trait]
pub trait SpdxCatalog: Send + Sync {
    /// Fetches the id -> name table of the configured SPDX dataset version
    ///
    /// # Errors
    /// Returns an error if the request fails or the payload cannot be parsed
    async fn fetch_license_names(&self) -> Result<SpdxNames>;
}

/// Lets one client serve both as a text tier and as the catalog
#[async_trait]
impl<T: SpdxCatalog + ?Sized> SpdxCatalog for std::sync::Arc<T> {
    async fn fetch_license_names(&self) -> Result<SpdxNames> {
        (**self).fetch_license_names().await
    }
}
