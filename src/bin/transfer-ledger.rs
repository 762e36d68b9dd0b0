use std::fs::File;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use transfer_ledger::bin_utils::{RowError, Service};

fn main() -> Result<()> {
    // stdout carries the CSV output, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let filename = std::env::args()
        .nth(1)
        .context("Expected a file name as the first argument")?;
    let file = File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?;

    let service = Service {
        input: file,
        output: &mut std::io::stdout(),
        error_printer: Box::new(|line, err| match err {
            RowError::Malformed(err) => tracing::error!("Error at line {line}: {err}"),
            RowError::Rejected(err) => tracing::warn!("Rejected command at line {line}: {err}"),
        }),
    };
    service.run()
}
