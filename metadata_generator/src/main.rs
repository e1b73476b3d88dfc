use anyhow::{Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    cfg::Cfg,
    metadata::{generate, persist},
};

mod cfg;
mod metadata;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cfg = Cfg::parse();
    let template = cfg.template();

    let records = generate(&template, cfg.count);
    info!(
        "Generated {} metadata records for {}",
        records.len(),
        template.collection_name
    );

    let summary = persist(&records, &cfg.output_dir, cfg.write_concurrency).await?;
    info!(
        written = summary.written,
        failed = summary.failures.len(),
        "Finished writing metadata to {}",
        cfg.output_dir.display()
    );

    if !summary.is_complete() {
        bail!(
            "{} of {} metadata files could not be written",
            summary.failures.len(),
            records.len()
        );
    }

    Ok(())
}
