use crate::attribution::domain::{Filters, LicenseAliasMap, Sbom};
use crate::shared::Result;
use std::path::Path;

/// SbomReader port for loading the CycloneDX SBOM
pub trait SbomReader {
    /// Reads and parses the SBOM at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The SBOM file does not exist
    /// - The file cannot be read or is not valid CycloneDX JSON
    fn read_sbom(&self, path: &Path) -> Result<Sbom>;
}

/// ResourceReader port for the configuration resources of a run
pub trait ResourceReader {
    /// Loads the license alias map, or the bundled default when `path` is None
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a JSON object of strings
    fn read_license_map(&self, path: Option<&Path>) -> Result<LicenseAliasMap>;

    /// Loads and compiles the component filters at `path`
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// contains a pattern that is not a valid regular expression
    fn read_filters(&self, path: &Path) -> Result<Filters>;
}
