use crate::attribution::domain::{Component, Filters};

/// ComponentFilter - decides which SBOM components are left out of the report
///
/// Pure predicate over the compiled patterns of a [`Filters`] set.
#[derive(Debug, Clone, Default)]
pub struct ComponentFilter {
    filters: Filters,
}

impl ComponentFilter {
    pub fn new(filters: Filters) -> Self {
        Self { filters }
    }

    /// Returns true when the component must be excluded
    ///
    /// - a non-empty PURL matching any PURL pattern excludes it
    /// - a non-empty supplier matching any supplier pattern excludes it
    /// - a missing PURL is never a reason to exclude on its own
    pub fn should_ignore(&self, component: &Component) -> bool {
        let purl_match = !component.purl.is_empty()
            && self
                .filters
                .purl_patterns()
                .iter()
                .any(|re| re.is_match(&component.purl));

        let supplier_match = !component.supplier.is_empty()
            && self
                .filters
                .supplier_patterns()
                .iter()
                .any(|re| re.is_match(&component.supplier));

        purl_match || supplier_match
    }
}
