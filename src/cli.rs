use clap::Parser;
use std::path::PathBuf;

/// Generate open-source attribution reports from CycloneDX SBOMs
#[derive(Parser, Debug, Default)]
#[command(name = "oss-attributions")]
#[command(version)]
#[command(
    about = "Generate THIRD_PARTY_LICENSES.html and NOTICE.md from a CycloneDX SBOM",
    long_about = None
)]
pub struct Args {
    /// Name of the repository; the SBOM is read from <sbom-dir>/<repo-name>.cdx.json
    #[arg(long, value_name = "NAME")]
    pub repo_name: Option<String>,

    /// Directory containing the SBOM [default: <out-dir>/sbom]
    #[arg(long, value_name = "DIR")]
    pub sbom_dir: Option<PathBuf>,

    /// Output directory [default: third_party]
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// SPDX license-list-data version tag [default: v3.27.0]
    #[arg(long, value_name = "TAG")]
    pub spdx_version: Option<String>,

    /// License alias map (JSON object) replacing the bundled one
    #[arg(long, value_name = "PATH")]
    pub license_map: Option<PathBuf>,

    /// Filters resource (JSON with `purlRegex` and `suppliers` arrays)
    #[arg(long, value_name = "PATH")]
    pub filters: Option<PathBuf>,

    /// Override the built-in HTML template
    #[arg(long, value_name = "PATH")]
    pub html_template: Option<PathBuf>,

    /// Override the built-in NOTICE template
    #[arg(long, value_name = "PATH")]
    pub notice_template: Option<PathBuf>,

    /// Number of license texts resolved concurrently [default: 8]
    #[arg(long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Path to a config file [default: ./oss-attributions.config.yml when present]
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_all_flags() {
        let args = Args::try_parse_from([
            "oss-attributions",
            "--repo-name",
            "traefik",
            "--sbom-dir",
            "sboms",
            "--out-dir",
            "out",
            "--spdx-version",
            "v3.26.0",
            "--license-map",
            "map.json",
            "--filters",
            "filters.json",
            "--html-template",
            "page.html",
            "--notice-template",
            "notice.md",
            "--concurrency",
            "4",
            "--config",
            "custom.yml",
        ])
        .unwrap();

        assert_eq!(args.repo_name.as_deref(), Some("traefik"));
        assert_eq!(args.sbom_dir, Some(PathBuf::from("sboms")));
        assert_eq!(args.out_dir, Some(PathBuf::from("out")));
        assert_eq!(args.spdx_version.as_deref(), Some("v3.26.0"));
        assert_eq!(args.license_map, Some(PathBuf::from("map.json")));
        assert_eq!(args.filters, Some(PathBuf::from("filters.json")));
        assert_eq!(args.html_template, Some(PathBuf::from("page.html")));
        assert_eq!(args.notice_template, Some(PathBuf::from("notice.md")));
        assert_eq!(args.concurrency, Some(4));
        assert_eq!(args.config, Some(PathBuf::from("custom.yml")));
    }

    #[test]
    fn test_parse_no_flags() {
        let args = Args::try_parse_from(["oss-attributions"]).unwrap();
        assert!(args.repo_name.is_none());
        assert!(args.concurrency.is_none());
    }

    #[test]
    fn test_invalid_concurrency() {
        let result = Args::try_parse_from(["oss-attributions", "--concurrency", "many"]);
        assert!(result.is_err());
    }
}
