//! Command-line configuration

use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::Parser;
use route53_import_core::types::{ImportSettings, DEFAULT_ZONE_LOOKUP_LIMIT};
use route53_import_provider::AwsCredentials;
use serde_json::{json, Value};

/// Command-line options.
///
/// The invocation event comes either from `--event` (a JSON file, `-` for
/// stdin) or is assembled from `--bucket`, `--key` and `--number`.
///
/// ```bash
/// route53-import --bucket imports --key batch.csv --number 42
/// route53-import --event event.json
/// echo '{"file_name": {...}}' | route53-import --event -
/// route53-import --local-dir ./data --bucket imports --key batch.csv
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "route53-import",
    version,
    about = "Imports DNS records from a CSV file into Route 53 hosted zones."
)]
pub struct Cli {
    /// Invocation event JSON file (`-` reads stdin)
    #[arg(long, value_name = "FILE", conflicts_with_all = ["bucket", "key", "number"])]
    pub event: Option<PathBuf>,

    /// Bucket (or directory under --local-dir) holding the CSV file
    #[arg(long, requires = "key")]
    pub bucket: Option<String>,

    /// Object key of the CSV file
    #[arg(long, requires = "bucket")]
    pub key: Option<String>,

    /// Correlation id echoed back in the result
    #[arg(long)]
    pub number: Option<String>,

    /// Read the CSV from this directory instead of S3
    #[arg(long, value_name = "DIR")]
    pub local_dir: Option<PathBuf>,

    #[arg(long, env = "AWS_ACCESS_KEY_ID", hide_env_values = true)]
    pub access_key_id: Option<String>,

    #[arg(long, env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
    pub secret_access_key: Option<String>,

    #[arg(long, env = "AWS_SESSION_TOKEN", hide_env_values = true)]
    pub session_token: Option<String>,

    /// Region of the S3 bucket
    #[arg(long, env = "AWS_REGION", default_value = "us-east-1")]
    pub region: String,

    /// Route 53 endpoint override, e.g. a local emulator
    #[arg(long, env = "ROUTE53_IMPORT_ENDPOINT")]
    pub route53_endpoint: Option<String>,

    /// Pause after each committed batch, in milliseconds
    #[arg(long, env = "ROUTE53_IMPORT_SETTLE_MS", default_value_t = 1000)]
    pub settle_ms: u64,

    /// Number of hosted zones requested per lookup
    #[arg(
        long,
        default_value_t = DEFAULT_ZONE_LOOKUP_LIMIT,
        value_parser = clap::value_parser!(u32).range(1..=100)
    )]
    pub zone_lookup_limit: u32,
}

impl Cli {
    /// Runtime knobs handed to the import core.
    pub fn settings(&self) -> ImportSettings {
        ImportSettings {
            settle_delay: Duration::from_millis(self.settle_ms),
            zone_lookup_limit: self.zone_lookup_limit,
        }
    }

    pub fn credentials(&self) -> anyhow::Result<AwsCredentials> {
        let Some(access_key_id) = non_empty(self.access_key_id.as_deref()) else {
            bail!("AWS access key id is missing (set AWS_ACCESS_KEY_ID or --access-key-id)");
        };
        let Some(secret_access_key) = non_empty(self.secret_access_key.as_deref()) else {
            bail!("AWS secret access key is missing (set AWS_SECRET_ACCESS_KEY or --secret-access-key)");
        };
        let session_token = non_empty(self.session_token.as_deref()).map(ToString::to_string);

        Ok(AwsCredentials::new(
            access_key_id,
            secret_access_key,
            session_token,
        ))
    }

    /// Load or assemble the invocation event.
    pub fn event(&self) -> anyhow::Result<Value> {
        if let Some(path) = &self.event {
            let text = if path.as_os_str() == "-" {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read event from stdin")?;
                text
            } else {
                std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read event file {}", path.display()))?
            };
            return serde_json::from_str(&text).context("Event is not valid JSON");
        }

        match (&self.bucket, &self.key) {
            (Some(bucket), Some(key)) => Ok(event_from_parts(self.number.as_deref(), bucket, key)),
            _ => bail!("Either --event or both --bucket and --key are required"),
        }
    }
}

/// Build an invocation event with the same shape as the storage trigger.
pub fn event_from_parts(number: Option<&str>, bucket: &str, key: &str) -> Value {
    json!({
        "number": number,
        "file_name": {
            "bucket": { "name": bucket },
            "object": { "key": key }
        }
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
