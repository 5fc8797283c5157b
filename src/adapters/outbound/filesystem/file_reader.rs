use crate::attribution::domain::{
    Component, Filters, LicenseAliasMap, LicenseDeclaration, Sbom,
};
use crate::ports::outbound::{ResourceReader, SbomReader};
use crate::shared::error::AttributionError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// License alias map shipped with the binary
const BUNDLED_LICENSE_MAP: &str = include_str!("../../../../data/license-map.json");

#[derive(Debug, Deserialize)]
struct CycloneDxDocument {
    #[serde(default)]
    components: Vec<CdxComponent>,
}

#[derive(Debug, Deserialize)]
struct CdxComponent {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    purl: Option<String>,
    #[serde(default)]
    copyright: Option<String>,
    #[serde(default)]
    supplier: Option<CdxSupplier>,
    #[serde(default)]
    licenses: Vec<CdxLicenseChoice>,
    /// CycloneDX allows components to nest sub-components
    #[serde(default)]
    components: Vec<CdxComponent>,
}

/// Supplier is an organizational entity in CycloneDX, but some generators emit a plain string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CdxSupplier {
    Name(String),
    Entity {
        #[serde(default)]
        name: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
struct CdxLicenseChoice {
    #[serde(default)]
    expression: Option<String>,
    #[serde(default)]
    license: Option<CdxLicense>,
}

#[derive(Debug, Deserialize)]
struct CdxLicense {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FiltersResource {
    #[serde(default)]
    purl_regex: Vec<String>,
    #[serde(default)]
    suppliers: Vec<String>,
}

impl CdxLicenseChoice {
    /// An explicit id wins; otherwise the expression, falling back to the license name
    fn into_declaration(self) -> LicenseDeclaration {
        let (id, name) = match self.license {
            Some(license) => (
                license.id.unwrap_or_default(),
                license.name.unwrap_or_default(),
            ),
            None => (String::new(), String::new()),
        };

        if !id.trim().is_empty() {
            return LicenseDeclaration::License { id, name };
        }

        match self.expression {
            Some(expression) if !expression.trim().is_empty() => {
                LicenseDeclaration::Expression(expression)
            }
            _ => LicenseDeclaration::License { id, name },
        }
    }
}

impl CdxComponent {
    /// Flattens this component and its nested sub-components in document order
    fn flatten_into(self, out: &mut Vec<Component>) {
        let supplier = match self.supplier {
            Some(CdxSupplier::Name(name)) => name,
            Some(CdxSupplier::Entity { name }) => name.unwrap_or_default(),
            None => String::new(),
        };

        out.push(Component {
            name: self.name.unwrap_or_default(),
            version: self.version.unwrap_or_default(),
            purl: self.purl.unwrap_or_default(),
            supplier,
            copyright: self.copyright.unwrap_or_default(),
            licenses: self
                .licenses
                .into_iter()
                .map(CdxLicenseChoice::into_declaration)
                .collect(),
        });

        for child in self.components {
            child.flatten_into(out);
        }
    }
}

/// FileSystemReader adapter for reading run inputs from the file system
///
/// This adapter implements both SbomReader and ResourceReader ports.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Parses CycloneDX JSON content
    pub fn parse_sbom(content: &str) -> std::result::Result<Sbom, serde_json::Error> {
        let document: CycloneDxDocument = serde_json::from_str(content)?;
        let mut components = Vec::new();
        for component in document.components {
            component.flatten_into(&mut components);
        }
        Ok(Sbom::new(components))
    }

    fn parse_license_map(content: &str, source_name: &str) -> Result<LicenseAliasMap> {
        let aliases: HashMap<String, String> =
            serde_json::from_str(content).map_err(|e| AttributionError::LicenseMapError {
                source_name: source_name.to_string(),
                details: e.to_string(),
            })?;
        Ok(LicenseAliasMap::new(aliases))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SbomReader for FileSystemReader {
    fn read_sbom(&self, path: &Path) -> Result<Sbom> {
        if !path.exists() {
            return Err(AttributionError::SbomNotFound {
                path: path.to_path_buf(),
                suggestion: format!(
                    "No SBOM at \"{}\".\n   \
                     Generate a CycloneDX JSON SBOM named <repo-name>.cdx.json, or point --sbom-dir at the directory containing it.",
                    path.display()
                ),
            }
            .into());
        }

        let content = read_regular_file(path, "SBOM").map_err(|e| AttributionError::SbomParseError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        Self::parse_sbom(&content).map_err(|e| {
            AttributionError::SbomParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl ResourceReader for FileSystemReader {
    fn read_license_map(&self, path: Option<&Path>) -> Result<LicenseAliasMap> {
        match path {
            None => Self::parse_license_map(BUNDLED_LICENSE_MAP, "bundled license map"),
            Some(path) => {
                let source_name = path.display().to_string();
                let content = read_regular_file(path, "license map").map_err(|e| {
                    AttributionError::LicenseMapError {
                        source_name: source_name.clone(),
                        details: e.to_string(),
                    }
                })?;
                Self::parse_license_map(&content, &source_name)
            }
        }
    }

    fn read_filters(&self, path: &Path) -> Result<Filters> {
        let source_name = path.display().to_string();
        let filters_error = |details: String| AttributionError::FiltersError {
            source_name: source_name.clone(),
            details,
        };

        let content =
            read_regular_file(path, "filters").map_err(|e| filters_error(e.to_string()))?;
        let resource: FiltersResource =
            serde_json::from_str(&content).map_err(|e| filters_error(e.to_string()))?;

        Filters::compile(&resource.purl_regex, &resource.suppliers)
            .map_err(|e| filters_error(format!("{:#}", e)).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE_SBOM: &str = r#"{
  "bomFormat": "CycloneDX",
  "specVersion": "1.5",
  "components": [
    {
      "name": "foo",
      "version": "1.0.0",
      "purl": "pkg:npm/foo@1.0.0",
      "copyright": "(c) Foo",
      "supplier": { "name": "Foo Inc." },
      "licenses": [
        { "license": { "id": "MIT", "name": "ignored" } },
        { "expression": "Apache-2.0 OR ISC" },
        { "license": { "name": "Some License" } }
      ],
      "components": [
        { "name": "foo-sub", "version": "1.0.0", "supplier": "Plain Supplier" }
      ]
    },
    { "name": "bar", "version": null }
  ]
}"#;

    #[test]
    fn test_parse_sbom_components() {
        let sbom = FileSystemReader::parse_sbom(SAMPLE_SBOM).unwrap();
        assert_eq!(sbom.components.len(), 3);

        let foo = &sbom.components[0];
        assert_eq!(foo.name, "foo");
        assert_eq!(foo.supplier, "Foo Inc.");
        assert_eq!(foo.copyright, "(c) Foo");
        assert_eq!(
            foo.licenses,
            vec![
                LicenseDeclaration::License {
                    id: "MIT".to_string(),
                    name: "ignored".to_string()
                },
                LicenseDeclaration::Expression("Apache-2.0 OR ISC".to_string()),
                LicenseDeclaration::named("Some License"),
            ]
        );

        assert_eq!(sbom.components[1].name, "foo-sub");
        assert_eq!(sbom.components[1].supplier, "Plain Supplier");
        assert_eq!(sbom.components[2].version, "");
    }

    #[test]
    fn test_parse_sbom_without_components() {
        let sbom = FileSystemReader::parse_sbom(r#"{"bomFormat":"CycloneDX"}"#).unwrap();
        assert!(sbom.components.is_empty());
    }

    #[test]
    fn test_read_sbom_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileSystemReader::new().read_sbom(&temp_dir.path().join("repo.cdx.json"));
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("SBOM file not found"));
    }

    #[test]
    fn test_read_sbom_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("repo.cdx.json");
        fs::write(&path, "not json").unwrap();

        let result = FileSystemReader::new().read_sbom(&path);
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("Failed to parse SBOM file"));
    }

    #[test]
    fn test_read_sbom_success() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("repo.cdx.json");
        fs::write(&path, r#"{"components":[{"name":"foo","version":"1"}]}"#).unwrap();

        let sbom = FileSystemReader::new().read_sbom(&path).unwrap();
        assert_eq!(sbom.components.len(), 1);
        assert_eq!(sbom.components[0].name, "foo");
        assert_eq!(sbom.components[0].version, "1");
    }

    #[test]
    fn test_bundled_license_map_loads() {
        let map = FileSystemReader::new().read_license_map(None).unwrap();
        assert!(!map.is_empty());
        assert_eq!(map.lookup("Python Software Foundation License"), Some("PSF-2.0"));
    }

    #[test]
    fn test_license_map_override() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("map.json");
        fs::write(&path, r#"{"My License": "LicenseRef-Mine"}"#).unwrap();

        let map = FileSystemReader::new().read_license_map(Some(&path)).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.lookup("My License"), Some("LicenseRef-Mine"));
    }

    #[test]
    fn test_license_map_invalid() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("map.json");
        fs::write(&path, r#"["not", "an", "object"]"#).unwrap();

        let result = FileSystemReader::new().read_license_map(Some(&path));
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("Failed to load license map"));
    }

    #[test]
    fn test_read_filters() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("filters.json");
        fs::write(&path, r#"{"purlRegex": ["use\\.local"], "suppliers": ["^Acme$"]}"#).unwrap();

        let filters = FileSystemReader::new().read_filters(&path).unwrap();
        assert_eq!(filters.purl_patterns().len(), 1);
        assert!(filters.supplier_patterns()[0].is_match("Acme"));
    }

    #[test]
    fn test_read_filters_invalid_regex() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("filters.json");
        fs::write(&path, r#"{"purlRegex": ["(broken"]}"#).unwrap();

        let result = FileSystemReader::new().read_filters(&path);
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to load filters"));
        assert!(err.contains("(broken"));
    }
}
