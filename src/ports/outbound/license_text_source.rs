use crate::shared::Result;
use async_trait::async_trait;

/// LicenseTextSource port - one tier of the license text resolution chain
///
/// Tiers are tried in order; the first one that applies to an id and
/// returns a text wins.
///
/// # Async Support
/// Implementations must be `Send + Sync`: distinct ids are resolved concurrently.
#[async_trait]
pub trait LicenseTextSource: Send + Sync {
    /// Short tier name used in diagnostics ("cache", "custom", "spdx")
    fn name(&self) -> &str;

    /// Whether this tier should be consulted for the id at all
    fn applies_to(&self, license_id: &str) -> bool;

    /// Looks the text up
    ///
    /// # Returns
    /// - `Ok(Some(text))` - resolved
    /// - `Ok(None)` - not found here, continue with the next tier
    ///
    /// # Errors
    /// Returns an error when this tier was responsible for the id and failed
    /// (missing custom text file, HTTP error, ...)
    async fn fetch(&self, license_id: &str) -> Result<Option<String>>;

    /// Whether texts found by this tier are written back to the cache
    fn persists_result(&self) -> bool {
        false
    }
}

/// LicenseTextStore port for persisting resolved license texts
pub trait LicenseTextStore: Send + Sync {
    /// Stores the text so later lookups of the same id hit the cache
    ///
    /// Implementations must make the write atomic with respect to readers.
    fn store(&self, license_id: &str, text: &str) -> Result<()>;
}
