mod component_aggregator;
mod component_filter;
mod homepage;
mod license_normalizer;
mod report_builder;

pub use component_aggregator::{AggregatedComponents, ComponentAggregator, ComponentHandle};
pub use component_filter::ComponentFilter;
pub use homepage::HomepageResolver;
pub use license_normalizer::{sanitize_id, LicenseNormalizer, LICENSE_REF_PREFIX};
pub use report_builder::ReportBuilder;

/// Trims, drops blanks, deduplicates and sorts lexicographically
pub fn unique_sorted<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let set: std::collections::BTreeSet<String> = values
        .into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    set.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_sorted() {
        let input = [" b ", "a", "", "a", "c", "B", "  "];
        assert_eq!(unique_sorted(input), vec!["B", "a", "b", "c"]);
    }
}
