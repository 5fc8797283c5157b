use crate::ports::outbound::{LicenseTextSource, LicenseTextStore};
use crate::shared::Result;
use anyhow::Context;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Outcome of resolving one license id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseText {
    Resolved(String),
    /// Resolution failed for this id only; carries the reason
    Unresolved(String),
}

impl LicenseText {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

/// LicenseTextResolver - ordered chain of license text tiers
///
/// Tiers are consulted in order (cache, custom, remote); the first tier that
/// applies to an id and finds a text wins. A tier that applies and fails ends
/// the chain for that id. Texts found by a persisting tier are written back
/// to the store.
///
/// # Concurrency
/// Distinct ids may be resolved concurrently. The whole chain for one id runs
/// under that id's lock and its outcome is memoized, so each id is fetched at
/// most once per run and its cache file is never written concurrently.
pub struct LicenseTextResolver {
    tiers: Vec<Arc<dyn LicenseTextSource>>,
    store: Arc<dyn LicenseTextStore>,
    locks: DashMap<String, Arc<Mutex<()>>>,
    memo: DashMap<String, LicenseText>,
}

impl LicenseTextResolver {
    pub fn new(tiers: Vec<Arc<dyn LicenseTextSource>>, store: Arc<dyn LicenseTextStore>) -> Self {
        Self {
            tiers,
            store,
            locks: DashMap::new(),
            memo: DashMap::new(),
        }
    }

    /// Resolves the text of a license id
    ///
    /// # Errors
    /// Only write-back failures are returned as errors: they are output I/O
    /// errors and abort the run. Everything else is reported as
    /// `LicenseText::Unresolved`.
    pub async fn resolve(&self, license_id: &str) -> Result<LicenseText> {
        if let Some(outcome) = self.memo.get(license_id) {
            return Ok(outcome.value().clone());
        }

        let lock = self
            .locks
            .entry(license_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let _guard = lock.lock().await;

        // Another task may have finished this id while we waited
        if let Some(outcome) = self.memo.get(license_id) {
            return Ok(outcome.value().clone());
        }

        let outcome = self.resolve_uncached(license_id).await?;
        self.memo.insert(license_id.to_string(), outcome.clone());
        Ok(outcome)
    }

    async fn resolve_uncached(&self, license_id: &str) -> Result<LicenseText> {
        for tier in self.tiers.iter().filter(|t| t.applies_to(license_id)) {
            match tier.fetch(license_id).await {
                Ok(Some(text)) => {
                    if tier.persists_result() {
                        self.store.store(license_id, &text).with_context(|| {
                            format!("Failed to cache license text for {}", license_id)
                        })?;
                    }
                    return Ok(LicenseText::Resolved(text));
                }
                Ok(None) => continue,
                Err(e) => {
                    return Ok(LicenseText::Unresolved(format!("{}: {:#}", tier.name(), e)))
                }
            }
        }

        Ok(LicenseText::Unresolved(format!(
            "no license text source available for {:?}",
            license_id
        )))
    }
}
