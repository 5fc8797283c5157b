mod cli;
mod config;

use cli::Args;
use config::Settings;
use oss_attributions::adapters::outbound::console::StderrProgressReporter;
use oss_attributions::adapters::outbound::filesystem::{
    CustomLicenseDirectory, FileSystemReader, FileSystemWriter, LicenseCacheDirectory,
};
use oss_attributions::adapters::outbound::network::SpdxLicenseListClient;
use oss_attributions::application::dto::AttributionRequest;
use oss_attributions::application::factories::{FormatterFactory, ReportKind};
use oss_attributions::application::services::LicenseTextResolver;
use oss_attributions::application::use_cases::GenerateAttributionUseCase;
use oss_attributions::ports::outbound::{LicenseTextSource, OutputPresenter, ReportFormatter};
use oss_attributions::shared::error::{AttributionError, ExitCode};
use oss_attributions::shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    match run(args).await {
        Ok(written) => {
            println!("Wrote:");
            for path in written {
                println!("- {}", path.display());
            }
        }
        Err(e) => process::exit(report_error(&e).as_i32()),
    }
}

/// Prints the error and picks the exit code for it
fn report_error(e: &anyhow::Error) -> ExitCode {
    match e.downcast_ref::<AttributionError>() {
        Some(AttributionError::UnknownLicenses { ids }) => {
            eprintln!("\n❌ Unknown license expressions found:");
            for id in ids {
                eprintln!("- {}", id);
            }
            eprintln!("\n💡 Hint: Map them to valid SPDX IDs in the license map or add custom license texts.\n");
            ExitCode::UnknownLicenses
        }
        Some(AttributionError::Validation { .. }) => {
            eprintln!("\n❌ {}\n", e);
            ExitCode::InvalidArguments
        }
        _ => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }
            eprintln!();
            ExitCode::ApplicationError
        }
    }
}

/// Runs one attribution pass; returns the written artifacts and license directory
async fn run(args: Args) -> Result<Vec<PathBuf>> {
    let config = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(Path::new("."))?,
    };
    let settings = Settings::resolve(&args, config)?;

    // Template overrides are read up front so a bad path fails before any network work
    let mut formatters: Vec<(ReportKind, Box<dyn ReportFormatter>)> = Vec::new();
    for kind in ReportKind::ALL {
        formatters.push((kind, FormatterFactory::create(kind, settings.template_for(kind))?));
    }

    // Create adapters (Dependency Injection)
    let cache = Arc::new(LicenseCacheDirectory::new(settings.licenses_dir.clone()));
    let custom = Arc::new(CustomLicenseDirectory::new(settings.custom_dir.clone()));
    let spdx = Arc::new(SpdxLicenseListClient::with_base_url(
        &settings.spdx_version,
        &settings.spdx_base_url,
    )?);

    let tiers: Vec<Arc<dyn LicenseTextSource>> = vec![cache.clone(), custom, spdx.clone()];
    let resolver = LicenseTextResolver::new(tiers, cache);

    let use_case = GenerateAttributionUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        spdx,
        resolver,
        StderrProgressReporter::new(),
    );

    let request = AttributionRequest::new(settings.sbom_path())
        .with_license_map(settings.license_map.clone())
        .with_filters(settings.filters.clone())
        .with_ignore_purl_patterns(settings.ignore_purl_patterns.clone())
        .with_concurrency(settings.concurrency)
        .with_deadline(settings.deadline);

    let response = use_case.execute(request).await?;

    let mut written = Vec::with_capacity(formatters.len() + 1);
    for (kind, formatter) in formatters {
        eprintln!("{}", FormatterFactory::progress_message(kind));
        let content = formatter.format(&response.model)?;

        let presenter = FileSystemWriter::new(settings.output_path(kind));
        presenter.present(&content)?;
        written.push(presenter.output_path().to_path_buf());
    }
    written.push(settings.licenses_dir.clone());

    Ok(written)
}
