use super::{ComponentFilter, HomepageResolver, LicenseNormalizer};
use crate::attribution::domain::{Component, IdentityKey, OutComponent};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Handle to the single owned record of a deduplicated component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentHandle(usize);

/// Result of aggregation: one owned record per identity key, plus a
/// license id -> component handles index
///
/// License buckets hold handles, never copies, so a later merge is visible
/// from every license the component is listed under.
#[derive(Debug, Default)]
pub struct AggregatedComponents {
    components: Vec<OutComponent>,
    by_key: HashMap<IdentityKey, ComponentHandle>,
    by_license: BTreeMap<String, BTreeSet<ComponentHandle>>,
}

impl AggregatedComponents {
    pub fn get(&self, handle: ComponentHandle) -> &OutComponent {
        &self.components[handle.0]
    }

    /// Every distinct component in first-seen SBOM order
    pub fn components(&self) -> &[OutComponent] {
        &self.components
    }

    /// Distinct license ids, sorted lexicographically
    pub fn license_ids(&self) -> Vec<String> {
        self.by_license.keys().cloned().collect()
    }

    /// Components using a license (unsorted, each listed once)
    pub fn components_for(&self, license_id: &str) -> Vec<&OutComponent> {
        self.by_license
            .get(license_id)
            .map(|handles| handles.iter().map(|h| self.get(*h)).collect())
            .unwrap_or_default()
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn license_count(&self) -> usize {
        self.by_license.len()
    }

    fn upsert(&mut self, key: IdentityKey, candidate: OutComponent) -> ComponentHandle {
        match self.by_key.get(&key) {
            Some(handle) => {
                self.components[handle.0].merge(candidate);
                *handle
            }
            None => {
                let handle = ComponentHandle(self.components.len());
                self.components.push(candidate);
                self.by_key.insert(key, handle);
                handle
            }
        }
    }

    fn index(&mut self, handle: ComponentHandle) {
        for id in &self.components[handle.0].license_ids {
            self.by_license.entry(id.clone()).or_default().insert(handle);
        }
    }
}

/// ComponentAggregator - deduplicates components and indexes them by license
pub struct ComponentAggregator<'a> {
    filter: &'a ComponentFilter,
    normalizer: &'a LicenseNormalizer<'a>,
}

impl<'a> ComponentAggregator<'a> {
    pub fn new(filter: &'a ComponentFilter, normalizer: &'a LicenseNormalizer<'a>) -> Self {
        Self { filter, normalizer }
    }

    /// Aggregates components in SBOM order, skipping filtered ones
    ///
    /// A repeated identity key merges into the existing record: license ids
    /// are unioned and the first non-blank copyright is kept.
    pub fn aggregate(&self, components: &[Component]) -> AggregatedComponents {
        let mut aggregated = AggregatedComponents::default();

        for component in components {
            if self.filter.should_ignore(component) {
                continue;
            }

            let key = IdentityKey::for_component(component);
            let candidate = OutComponent {
                name: component.name.clone(),
                version: component.version.clone(),
                purl: component.purl.clone(),
                homepage: HomepageResolver::from_purl(&component.purl),
                license_ids: self.normalizer.normalize(&component.licenses),
                copyright: component.copyright.clone(),
            };

            let handle = aggregated.upsert(key, candidate);
            aggregated.index(handle);
        }

        aggregated
    }
}
