use async_trait::async_trait;
use oss_attributions::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock remote LicenseTextSource counting every fetch
///
/// Ids without a registered text fail the way an HTTP 404 would.
pub struct MockLicenseTextSource {
    pub texts: HashMap<String, String>,
    pub calls: Arc<AtomicUsize>,
    pub persists: bool,
}

impl MockLicenseTextSource {
    pub fn new() -> Self {
        Self {
            texts: HashMap::new(),
            calls: Arc::new(AtomicUsize::new(0)),
            persists: true,
        }
    }

    pub fn with_text(mut self, id: &str, text: &str) -> Self {
        self.texts.insert(id.to_string(), text.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockLicenseTextSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LicenseTextSource for MockLicenseTextSource {
    fn name(&self) -> &str {
        "mock-remote"
    }

    fn applies_to(&self, license_id: &str) -> bool {
        !license_id.starts_with("LicenseRef-")
    }

    async fn fetch(&self, license_id: &str) -> Result<Option<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.texts.get(license_id) {
            Some(text) => Ok(Some(text.clone())),
            None => anyhow::bail!("http 404 for {}", license_id),
        }
    }

    fn persists_result(&self) -> bool {
        self.persists
    }
}
