use super::AggregatedComponents;
use crate::attribution::domain::{LicenseBlock, OutComponent, OverviewItem, ReportModel};

/// ReportBuilder - shapes aggregated components into the ordered report model
///
/// Every list that ends up in the report is sorted explicitly here; nothing
/// relies on the iteration order of a map.
pub struct ReportBuilder;

impl ReportBuilder {
    /// Components of one license block, sorted by name + version
    pub fn block_components(aggregated: &AggregatedComponents, license_id: &str) -> Vec<OutComponent> {
        let mut components: Vec<OutComponent> = aggregated
            .components_for(license_id)
            .into_iter()
            .cloned()
            .collect();
        Self::sort_components(&mut components);
        components
    }

    /// Stable sort on the concatenation of name and version
    pub fn sort_components(components: &mut [OutComponent]) {
        components.sort_by_cached_key(|c| c.sort_key());
    }

    /// One entry per block, by descending usage count, ties by ascending id
    pub fn build_overview(licenses: &[LicenseBlock]) -> Vec<OverviewItem> {
        let mut overview: Vec<OverviewItem> = licenses
            .iter()
            .map(|block| OverviewItem {
                id: block.id.clone(),
                name: block.name.clone(),
                count: block.used_by.len(),
            })
            .collect();

        overview.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.id.cmp(&b.id)));
        overview
    }

    /// One entry per distinct component with a non-blank copyright
    pub fn build_notices(aggregated: &AggregatedComponents) -> Vec<OutComponent> {
        let mut notices: Vec<OutComponent> = aggregated
            .components()
            .iter()
            .filter(|c| c.has_copyright())
            .cloned()
            .collect();
        Self::sort_components(&mut notices);
        notices
    }

    /// Assembles the final model from already ordered license blocks
    pub fn build_model(
        generated_at: String,
        licenses: Vec<LicenseBlock>,
        aggregated: &AggregatedComponents,
    ) -> ReportModel {
        ReportModel {
            generated_at,
            overview: Self::build_overview(&licenses),
            notices: Self::build_notices(aggregated),
            licenses,
        }
    }
}
