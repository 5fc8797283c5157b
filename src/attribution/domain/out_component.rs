use super::Component;
use std::fmt;

/// Identity of a component within one report run
///
/// The PURL when present, otherwise `name@version`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdentityKey(String);

impl IdentityKey {
    pub fn for_component(component: &Component) -> Self {
        if component.purl.is_empty() {
            Self(format!("{}@{}", component.name, component.version))
        } else {
            Self(component.purl.clone())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Deduplicated, output-facing component
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OutComponent {
    pub name: String,
    pub version: String,
    pub purl: String,
    pub homepage: Option<String>,
    /// Sorted, unique resolved license ids
    pub license_ids: Vec<String>,
    pub copyright: String,
}

impl OutComponent {
    /// Ordering key used wherever components are listed: name and version concatenated
    pub fn sort_key(&self) -> String {
        format!("{}{}", self.name, self.version)
    }

    pub fn has_copyright(&self) -> bool {
        !self.copyright.trim().is_empty()
    }

    /// Folds another declaration of the same component into this one
    ///
    /// License ids become the sorted union; the first non-blank copyright wins.
    pub fn merge(&mut self, other: OutComponent) {
        if !self.has_copyright() && other.has_copyright() {
            self.copyright = other.copyright;
        }

        let mut ids = std::mem::take(&mut self.license_ids);
        ids.extend(other.license_ids);
        self.license_ids = crate::attribution::services::unique_sorted(ids);
    }
}
