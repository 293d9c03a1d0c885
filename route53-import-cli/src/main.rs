//! Command-line entry point for the Route 53 CSV import
//!
//! Reads an invocation event, runs the import pipeline against Route 53 and
//! prints the `{ number, state, message }` result as JSON on stdout. Logs go
//! to stderr; `RUST_LOG` refines the filter.

mod adapters;
mod config;

use std::process::ExitCode;
use std::sync::Arc;

use adapters::{LocalFileRowSource, ObjectStorageRowSource};
use clap::Parser;
use config::Cli;
use route53_import_core::{ImportService, RowSource, ServiceContext};
use route53_import_provider::{create_object_storage, HostedZoneApi, Route53Provider};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    // stdout carries the result, logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();

    match run(&cli).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns whether the import succeeded. `Err` means the pipeline never ran.
async fn run(cli: &Cli) -> anyhow::Result<bool> {
    let event = cli.event()?;
    let credentials = cli.credentials()?;

    let row_source: Arc<dyn RowSource> = match &cli.local_dir {
        Some(dir) => {
            tracing::info!("Reading CSV files from {}", dir.display());
            Arc::new(LocalFileRowSource::new(dir))
        }
        None => {
            tracing::info!("Reading CSV files from S3 ({})", cli.region);
            Arc::new(ObjectStorageRowSource::new(create_object_storage(
                credentials.clone(),
                cli.region.as_str(),
            )))
        }
    };

    let mut route53 = Route53Provider::builder(credentials);
    if let Some(endpoint) = &cli.route53_endpoint {
        tracing::info!("Using Route 53 endpoint {endpoint}");
        route53 = route53.endpoint(endpoint.as_str());
    }
    let hosted_zone_api: Arc<dyn HostedZoneApi> = Arc::new(route53.build());

    let ctx = Arc::new(ServiceContext::new(
        row_source,
        hosted_zone_api,
        cli.settings(),
    ));
    let service = ImportService::new(ctx);

    let result = service.handle(&event).await;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(result.is_success())
}
