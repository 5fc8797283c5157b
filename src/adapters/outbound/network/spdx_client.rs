use crate::attribution::domain::SpdxNames;
use crate::attribution::services::LICENSE_REF_PREFIX;
use crate::ports::outbound::{LicenseTextSource, SpdxCatalog};
use crate::shared::security::validate_license_id;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Raw content root of the SPDX license-list-data repository
pub const DEFAULT_SPDX_BASE_URL: &str = "https://raw.githubusercontent.com/spdx/license-list-data";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Deserialize)]
struct SpdxLicenseEntry {
    #[serde(rename = "licenseId")]
    license_id: String,
    name: String,
}

/// `licenses.json` wraps the entries in an object; mirrors sometimes serve the bare array
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SpdxLicenseList {
    Document { licenses: Vec<SpdxLicenseEntry> },
    Entries(Vec<SpdxLicenseEntry>),
}

impl SpdxLicenseList {
    fn into_names(self) -> SpdxNames {
        let entries = match self {
            Self::Document { licenses } => licenses,
            Self::Entries(entries) => entries,
        };
        entries
            .into_iter()
            .map(|entry| (entry.license_id, entry.name))
            .collect()
    }
}

/// SpdxLicenseListClient adapter for the SPDX license-list-data repository
///
/// Implements the remote tier of the license text chain and the SpdxCatalog
/// port. One attempt per request, no retries.
///
/// # Async Support
/// Uses the async reqwest client so distinct license ids can be fetched
/// concurrently.
pub struct SpdxLicenseListClient {
    client: reqwest::Client,
    base_url: String,
    spdx_version: String,
}

impl SpdxLicenseListClient {
    /// Creates a client for the given SPDX dataset version (e.g. "v3.27.0")
    pub fn new(spdx_version: &str) -> Result<Self> {
        Self::with_base_url(spdx_version, DEFAULT_SPDX_BASE_URL)
    }

    /// Creates a client against a mirror of license-list-data
    pub fn with_base_url(spdx_version: &str, base_url: &str) -> Result<Self> {
        Self::from_builder(reqwest::Client::builder(), spdx_version, base_url)
    }

    fn from_builder(
        builder: reqwest::ClientBuilder,
        spdx_version: &str,
        base_url: &str,
    ) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("oss-attributions/{}", version);
        let client = builder
            .timeout(REQUEST_TIMEOUT)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            spdx_version: spdx_version.to_string(),
        })
    }

    pub fn text_url(&self, license_id: &str) -> String {
        format!(
            "{}/{}/text/{}.txt",
            self.base_url,
            urlencoding::encode(&self.spdx_version),
            urlencoding::encode(license_id)
        )
    }

    pub fn names_url(&self) -> String {
        format!(
            "{}/{}/json/licenses.json",
            self.base_url,
            urlencoding::encode(&self.spdx_version)
        )
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        let response = self.client.get(url).send().await?;
        if response.status() != reqwest::StatusCode::OK {
            anyhow::bail!("http {} for {}", response.status().as_u16(), url);
        }
        Ok(response)
    }
}

#[async_trait]
impl LicenseTextSource for SpdxLicenseListClient {
    fn name(&self) -> &str {
        "spdx"
    }

    fn applies_to(&self, license_id: &str) -> bool {
        !license_id.starts_with(LICENSE_REF_PREFIX)
    }

    async fn fetch(&self, license_id: &str) -> Result<Option<String>> {
        validate_license_id(license_id)?;
        let url = self.text_url(license_id);
        let text = self.get(&url).await?.text().await?;
        Ok(Some(text))
    }

    fn persists_result(&self) -> bool {
        true
    }
}

#[async_trait]
impl SpdxCatalog for SpdxLicenseListClient {
    async fn fetch_license_names(&self) -> Result<SpdxNames> {
        let url = self.names_url();
        let list: SpdxLicenseList = self.get(&url).await?.json().await?;
        Ok(list.into_names())
    }
}
