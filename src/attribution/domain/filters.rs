use crate::shared::Result;
use anyhow::Context;
use regex::Regex;

/// Compiled exclusion patterns for SBOM components
///
/// A component is dropped from the report when its PURL or its supplier
/// matches any of the patterns.
#[derive(Debug, Clone, Default)]
pub struct Filters {
    purl_patterns: Vec<Regex>,
    supplier_patterns: Vec<Regex>,
}

impl Filters {
    pub fn new(purl_patterns: Vec<Regex>, supplier_patterns: Vec<Regex>) -> Self {
        Self {
            purl_patterns,
            supplier_patterns,
        }
    }

    /// Compiles raw pattern strings
    ///
    /// # Errors
    /// Returns an error naming the first pattern that is not a valid regular expression
    pub fn compile<S: AsRef<str>>(purl_patterns: &[S], supplier_patterns: &[S]) -> Result<Self> {
        Ok(Self::new(
            compile_all(purl_patterns, "purlRegex")?,
            compile_all(supplier_patterns, "suppliers")?,
        ))
    }

    pub fn purl_patterns(&self) -> &[Regex] {
        &self.purl_patterns
    }

    pub fn supplier_patterns(&self) -> &[Regex] {
        &self.supplier_patterns
    }

    /// Appends the patterns of another filter set
    pub fn extend(&mut self, other: Filters) {
        self.purl_patterns.extend(other.purl_patterns);
        self.supplier_patterns.extend(other.supplier_patterns);
    }
}

fn compile_all<S: AsRef<str>>(patterns: &[S], field: &str) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| {
            let p = p.as_ref();
            Regex::new(p).with_context(|| format!("Invalid regular expression in {}: '{}'", field, p))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_valid_patterns() {
        let filters = Filters::compile(&[r"use\.local"], &["^Foo$"]).unwrap();
        assert_eq!(filters.purl_patterns().len(), 1);
        assert_eq!(filters.supplier_patterns().len(), 1);
    }

    #[test]
    fn test_compile_invalid_pattern() {
        let result = Filters::compile(&["(unclosed"], &[]);
        assert!(result.is_err());
        let err = format!("{:#}", result.unwrap_err());
        assert!(err.contains("purlRegex"));
        assert!(err.contains("(unclosed"));
    }

    #[test]
    fn test_extend_merges_patterns() {
        let mut filters = Filters::compile(&["a"], &[]).unwrap();
        filters.extend(Filters::compile(&["b"], &["c"]).unwrap());
        assert_eq!(filters.purl_patterns().len(), 2);
        assert_eq!(filters.supplier_patterns().len(), 1);
    }
}
