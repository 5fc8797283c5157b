use std::collections::HashMap;

/// SPDX license id -> human readable license name
pub type SpdxNames = HashMap<String, String>;

/// Table mapping known free-text license strings to canonical license ids
///
/// Lookups are exact: the key must match the trimmed declaration verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicenseAliasMap {
    aliases: HashMap<String, String>,
}

impl LicenseAliasMap {
    pub fn new(aliases: HashMap<String, String>) -> Self {
        Self { aliases }
    }

    /// Returns the mapped id, ignoring entries that map to an empty id
    pub fn lookup(&self, text: &str) -> Option<&str> {
        self.aliases
            .get(text)
            .map(String::as_str)
            .filter(|id| !id.trim().is_empty())
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LicenseAliasMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
