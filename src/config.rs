//! Configuration file support for oss-attributions.
//!
//! Provides YAML-based configuration through `oss-attributions.config.yml`
//! files, and merges it with command-line flags and built-in defaults into
//! the effective [`Settings`] of a run.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::Args;
use oss_attributions::adapters::outbound::network::DEFAULT_SPDX_BASE_URL;
use oss_attributions::application::dto::DEFAULT_CONCURRENCY;
use oss_attributions::application::factories::ReportKind;
use oss_attributions::shared::error::AttributionError;
use oss_attributions::shared::Result;

pub const CONFIG_FILENAME: &str = "oss-attributions.config.yml";

const DEFAULT_OUT_DIR: &str = "third_party";
const DEFAULT_SPDX_VERSION: &str = "v3.27.0";
/// Components of local modules never need attribution
const DEFAULT_IGNORE_PURL_PATTERN: &str = r"use\.local";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub repo_name: Option<String>,
    pub sbom_dir: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub licenses_dir: Option<PathBuf>,
    pub custom_dir: Option<PathBuf>,
    pub spdx_version: Option<String>,
    pub spdx_base_url: Option<String>,
    pub license_map: Option<PathBuf>,
    pub filters: Option<PathBuf>,
    pub html_template: Option<PathBuf>,
    pub notice_template: Option<PathBuf>,
    pub concurrency: Option<usize>,
    pub deadline_secs: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file is a valid, empty configuration
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
///
/// Out-of-range values are argument errors, so they map to the same exit
/// code as invalid flags.
fn validate_config(config: &ConfigFile) -> Result<()> {
    let invalid = |message: String| -> anyhow::Error {
        AttributionError::Validation {
            message: format!("Invalid config: {}", message),
        }
        .into()
    };

    if config.concurrency == Some(0) {
        return Err(invalid(format!(
            "concurrency must be at least 1.\n\n💡 Hint: Remove the key to use the default of {}.",
            DEFAULT_CONCURRENCY
        )));
    }
    if config.deadline_secs == Some(0) {
        return Err(invalid(
            "deadline_secs must be at least 1.\n\n\
             💡 Hint: Remove the key to resolve license texts without a deadline."
                .to_string(),
        ));
    }
    if let Some(url) = &config.spdx_base_url {
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(invalid(format!(
                "spdx_base_url must be an http(s) URL, got '{}'.",
                url
            )));
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Effective settings of a run: CLI flags over config file over defaults
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub repo_name: String,
    pub sbom_dir: PathBuf,
    pub out_dir: PathBuf,
    pub licenses_dir: PathBuf,
    pub custom_dir: PathBuf,
    pub spdx_version: String,
    pub spdx_base_url: String,
    pub license_map: Option<PathBuf>,
    pub filters: Option<PathBuf>,
    pub html_template: Option<PathBuf>,
    pub notice_template: Option<PathBuf>,
    pub ignore_purl_patterns: Vec<String>,
    pub concurrency: usize,
    pub deadline: Option<Duration>,
}

impl Default for Settings {
    fn default() -> Self {
        let out_dir = PathBuf::from(DEFAULT_OUT_DIR);
        let licenses_dir = out_dir.join("licenses");
        Self {
            repo_name: String::new(),
            sbom_dir: out_dir.join("sbom"),
            custom_dir: licenses_dir.join("custom"),
            licenses_dir,
            out_dir,
            spdx_version: DEFAULT_SPDX_VERSION.to_string(),
            spdx_base_url: DEFAULT_SPDX_BASE_URL.to_string(),
            license_map: None,
            filters: None,
            html_template: None,
            notice_template: None,
            ignore_purl_patterns: vec![DEFAULT_IGNORE_PURL_PATTERN.to_string()],
            concurrency: DEFAULT_CONCURRENCY,
            deadline: None,
        }
    }
}

impl Settings {
    /// Merges CLI flags and the optional config file over the defaults
    ///
    /// Directories derived from the output directory (SBOM, license texts,
    /// custom texts) follow it unless set explicitly.
    ///
    /// # Errors
    /// Returns `AttributionError::Validation` when a required value is missing
    /// or out of range after merging
    pub fn resolve(args: &Args, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();
        let defaults = Self::default();

        let out_dir = args
            .out_dir
            .clone()
            .or(config.out_dir)
            .unwrap_or(defaults.out_dir);
        let licenses_dir = config
            .licenses_dir
            .unwrap_or_else(|| out_dir.join("licenses"));
        let custom_dir = config
            .custom_dir
            .unwrap_or_else(|| licenses_dir.join("custom"));
        let sbom_dir = args
            .sbom_dir
            .clone()
            .or(config.sbom_dir)
            .unwrap_or_else(|| out_dir.join("sbom"));

        let settings = Self {
            repo_name: args
                .repo_name
                .clone()
                .or(config.repo_name)
                .unwrap_or_default()
                .trim()
                .to_string(),
            sbom_dir,
            out_dir,
            licenses_dir,
            custom_dir,
            spdx_version: args
                .spdx_version
                .clone()
                .or(config.spdx_version)
                .unwrap_or(defaults.spdx_version),
            spdx_base_url: config.spdx_base_url.unwrap_or(defaults.spdx_base_url),
            license_map: args.license_map.clone().or(config.license_map),
            filters: args.filters.clone().or(config.filters),
            html_template: args.html_template.clone().or(config.html_template),
            notice_template: args.notice_template.clone().or(config.notice_template),
            ignore_purl_patterns: defaults.ignore_purl_patterns,
            concurrency: args
                .concurrency
                .or(config.concurrency)
                .unwrap_or(defaults.concurrency),
            deadline: config.deadline_secs.map(Duration::from_secs),
        };

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.repo_name.is_empty() {
            return Err(AttributionError::Validation {
                message: "repo name cannot be empty\n\n💡 Hint: Pass --repo-name <NAME> or set repo_name in the config file".to_string(),
            }
            .into());
        }
        if self.repo_name.contains(['/', '\\']) || self.repo_name.contains("..") {
            return Err(AttributionError::Validation {
                message: format!(
                    "repo name '{}' must not contain path separators or '..'",
                    self.repo_name
                ),
            }
            .into());
        }
        if self.spdx_version.trim().is_empty() {
            return Err(AttributionError::Validation {
                message: "spdx version cannot be empty".to_string(),
            }
            .into());
        }
        if self.concurrency == 0 {
            return Err(AttributionError::Validation {
                message: "concurrency must be at least 1".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// `<sbom dir>/<repo name>.cdx.json`
    pub fn sbom_path(&self) -> PathBuf {
        self.sbom_dir.join(format!("{}.cdx.json", self.repo_name))
    }

    pub fn output_path(&self, kind: ReportKind) -> PathBuf {
        self.out_dir.join(kind.file_name())
    }

    pub fn template_for(&self, kind: ReportKind) -> Option<&Path> {
        match kind {
            ReportKind::Html => self.html_template.as_deref(),
            ReportKind::Notice => self.notice_template.as_deref(),
        }
    }
}
