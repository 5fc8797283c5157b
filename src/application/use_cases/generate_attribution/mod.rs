use crate::application::dto::{AttributionRequest, AttributionResponse};
use crate::application::services::{LicenseText, LicenseTextResolver};
use crate::attribution::domain::{Filters, LicenseBlock, Sbom, SpdxNames};
use crate::attribution::policies::DisplayNamePolicy;
use crate::attribution::services::{
    AggregatedComponents, ComponentAggregator, ComponentFilter, LicenseNormalizer, ReportBuilder,
};
use crate::ports::outbound::{ProgressReporter, ResourceReader, SbomReader, SpdxCatalog};
use crate::shared::error::AttributionError;
use crate::shared::Result;
use anyhow::Context;
use chrono::{SecondsFormat, Utc};
use futures::stream::{self, StreamExt};

/// GenerateAttributionUseCase - Core use case for attribution report generation
///
/// Orchestrates the run: load inputs, filter and aggregate components,
/// resolve every distinct license text, then shape the report model.
///
/// # Type Parameters
/// * `SR` - SbomReader implementation
/// * `RR` - ResourceReader implementation
/// * `SC` - SpdxCatalog implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateAttributionUseCase<SR, RR, SC, PR> {
    sbom_reader: SR,
    resource_reader: RR,
    spdx_catalog: SC,
    resolver: LicenseTextResolver,
    progress_reporter: PR,
}

impl<SR, RR, SC, PR> GenerateAttributionUseCase<SR, RR, SC, PR>
where
    SR: SbomReader,
    RR: ResourceReader,
    SC: SpdxCatalog,
    PR: ProgressReporter,
{
    /// Creates a new GenerateAttributionUseCase with injected dependencies
    pub fn new(
        sbom_reader: SR,
        resource_reader: RR,
        spdx_catalog: SC,
        resolver: LicenseTextResolver,
        progress_reporter: PR,
    ) -> Self {
        Self {
            sbom_reader,
            resource_reader,
            spdx_catalog,
            resolver,
            progress_reporter,
        }
    }

    /// Executes the attribution use case
    ///
    /// # Errors
    /// - Input errors (SBOM, alias map, filters, SPDX license list) abort before
    ///   any license text is resolved
    /// - `AttributionError::UnknownLicenses` lists every id whose text could not
    ///   be resolved, after all ids were attempted
    /// - `AttributionError::Timeout` when the deadline expires during resolution
    pub async fn execute(&self, request: AttributionRequest) -> Result<AttributionResponse> {
        // Step 1: Load inputs
        let sbom = self.read_sbom(&request)?;
        let alias_map = self
            .resource_reader
            .read_license_map(request.license_map_path.as_deref())?;
        let filters = self.load_filters(&request)?;

        // Step 2: Filter, normalize and aggregate components
        let filter = ComponentFilter::new(filters);
        let normalizer = LicenseNormalizer::new(&alias_map);
        let ignored = sbom
            .components
            .iter()
            .filter(|c| filter.should_ignore(c))
            .count();
        if ignored > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Excluded {} component(s) based on filters",
                ignored
            ));
        }

        let aggregated = ComponentAggregator::new(&filter, &normalizer).aggregate(&sbom.components);
        self.progress_reporter.report(&format!(
            "📦 {} distinct component(s) using {} license(s)",
            aggregated.component_count(),
            aggregated.license_count()
        ));

        // Step 3: SPDX display names
        self.progress_reporter
            .report("🔍 Fetching SPDX license list...");
        let spdx_names = self
            .spdx_catalog
            .fetch_license_names()
            .await
            .context("Failed to load SPDX license names")?;

        // Step 4: License texts, in sorted id order
        let license_ids = aggregated.license_ids();
        let texts = self.resolve_texts_with_deadline(&license_ids, &request).await?;

        // Step 5: License blocks and aggregate failure
        let licenses = self.build_license_blocks(&license_ids, texts, &aggregated, &spdx_names)?;

        let generated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let model = ReportBuilder::build_model(generated_at, licenses, &aggregated);
        Ok(AttributionResponse::new(model, ignored))
    }

    fn read_sbom(&self, request: &AttributionRequest) -> Result<Sbom> {
        self.progress_reporter.report(&format!(
            "📖 Loading SBOM from: {}",
            request.sbom_path.display()
        ));

        let sbom = self.sbom_reader.read_sbom(&request.sbom_path)?;

        self.progress_reporter
            .report(&format!("✅ Detected {} component(s)", sbom.components.len()));
        Ok(sbom)
    }

    /// Built-in ignore patterns, extended by the filters resource when one is configured
    fn load_filters(&self, request: &AttributionRequest) -> Result<Filters> {
        let empty: [String; 0] = [];
        let mut filters = Filters::compile(&request.ignore_purl_patterns, &empty).map_err(|e| {
            AttributionError::FiltersError {
                source_name: "ignore_purl_patterns".to_string(),
                details: format!("{:#}", e),
            }
        })?;

        if let Some(path) = &request.filters_path {
            filters.extend(self.resource_reader.read_filters(path)?);
        }
        Ok(filters)
    }

    async fn resolve_texts_with_deadline(
        &self,
        license_ids: &[String],
        request: &AttributionRequest,
    ) -> Result<Vec<LicenseText>> {
        self.progress_reporter.report(&format!(
            "📜 Resolving {} license text(s)...",
            license_ids.len()
        ));

        let resolution = self.resolve_texts(license_ids, request.concurrency);
        match request.deadline {
            Some(deadline) => tokio::time::timeout(deadline, resolution)
                .await
                .map_err(|_| AttributionError::Timeout {
                    seconds: deadline.as_secs(),
                })?,
            None => resolution.await,
        }
    }

    /// Resolves ids concurrently; results come back in input order
    async fn resolve_texts(&self, license_ids: &[String], concurrency: usize) -> Result<Vec<LicenseText>> {
        let total = license_ids.len();
        let mut texts = Vec::with_capacity(total);

        let mut outcomes = stream::iter(license_ids)
            .map(|id| self.resolver.resolve(id))
            .buffered(concurrency.max(1));

        while let Some(outcome) = outcomes.next().await {
            texts.push(outcome?);
            let done = texts.len();
            self.progress_reporter
                .report_progress(done, total, Some(license_ids[done - 1].as_str()));
        }

        Ok(texts)
    }

    fn build_license_blocks(
        &self,
        license_ids: &[String],
        texts: Vec<LicenseText>,
        aggregated: &AggregatedComponents,
        spdx_names: &SpdxNames,
    ) -> Result<Vec<LicenseBlock>> {
        let mut licenses = Vec::with_capacity(license_ids.len());
        let mut unknown = Vec::new();

        for (id, text) in license_ids.iter().zip(texts) {
            let text = match text {
                LicenseText::Resolved(text) => text,
                LicenseText::Unresolved(reason) => {
                    self.progress_reporter
                        .report_error(&format!("⚠️  Warning: {}: {}", id, reason));
                    unknown.push(id.clone());
                    format!(
                        "ERROR: Could not retrieve license text for {}: {}",
                        id, reason
                    )
                }
            };

            licenses.push(LicenseBlock {
                id: id.clone(),
                name: DisplayNamePolicy::resolve(id, spdx_names),
                text,
                used_by: ReportBuilder::block_components(aggregated, id),
            });
        }

        if !unknown.is_empty() {
            self.progress_reporter.report_completion(&format!(
                "❌ License text resolution: {} of {} failed",
                unknown.len(),
                license_ids.len()
            ));
            return Err(AttributionError::UnknownLicenses { ids: unknown }.into());
        }

        self.progress_reporter.report_completion(&format!(
            "✅ License text resolution complete: {} license(s)",
            licenses.len()
        ));
        Ok(licenses)
    }
}
