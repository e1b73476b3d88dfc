use std::{
    io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use futures::{StreamExt, stream};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

pub const DEFAULT_COLLECTION_NAME: &str = "HoneyGenesis";
pub const DEFAULT_DESCRIPTION: &str = "HoneyGenesis is the Gen-0 series NFT created by Honeypot Finance team. This will help Honeypot Finance OGs gain unique perks.";
pub const DEFAULT_IMAGE: &str =
    "https://bafybeianvftytynjzo3twbmv36xrolkwmwfai5xcrxo6u5q3s5zsg5hwb4.ipfs.nftstorage.link/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub trait_type: String,
    pub value: String,
}

impl Attribute {
    fn new(trait_type: &str, value: &str) -> Self {
        Self {
            trait_type: trait_type.to_string(),
            value: value.to_string(),
        }
    }
}

/// One token's metadata document, serialized as-is into its own file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    pub name: String,
    pub description: String,
    pub image: String,
    pub attributes: Vec<Attribute>,
}

/// The part of a record shared by every token of the collection.
#[derive(Debug, Clone)]
pub struct MetadataTemplate {
    pub collection_name: String,
    pub description: String,
    pub image: String,
    pub attributes: Vec<Attribute>,
}

impl Default for MetadataTemplate {
    fn default() -> Self {
        Self {
            collection_name: DEFAULT_COLLECTION_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            image: DEFAULT_IMAGE.to_string(),
            attributes: vec![
                Attribute::new("bear", "pot the bera"),
                Attribute::new("generation", "zero"),
                Attribute::new("nickname", "HoneyPotOG"),
            ],
        }
    }
}

impl MetadataTemplate {
    fn record(&self, ordinal: usize) -> MetadataRecord {
        MetadataRecord {
            name: format!("{} #{}", self.collection_name, ordinal),
            description: self.description.clone(),
            image: self.image.clone(),
            attributes: self.attributes.clone(),
        }
    }
}

/// Builds `count` records, numbered from 1.
pub fn generate(template: &MetadataTemplate, count: usize) -> Vec<MetadataRecord> {
    (1..=count).map(|ordinal| template.record(ordinal)).collect()
}

#[derive(Debug)]
pub struct WriteFailure {
    pub ordinal: usize,
    pub path: PathBuf,
    pub error: io::Error,
}

#[derive(Debug, Default)]
pub struct PersistSummary {
    pub written: usize,
    pub failures: Vec<WriteFailure>,
}

impl PersistSummary {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Writes each record to `dir/<ordinal>` as pretty-printed JSON.
///
/// The directory is created if missing; failing to create it is the only
/// error returned. Individual write failures are logged and collected in the
/// summary while the remaining writes carry on. At most `concurrency` writes
/// are in flight, and every one of them has completed when this returns.
pub async fn persist(
    records: &[MetadataRecord],
    dir: &Path,
    concurrency: usize,
) -> Result<PersistSummary> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("creating metadata directory {}", dir.display()))?;

    let results: Vec<Result<usize, WriteFailure>> = stream::iter(records.iter().enumerate())
        .map(|(index, record)| write_record(dir, index + 1, record))
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    let mut summary = PersistSummary::default();
    for result in results {
        match result {
            Ok(ordinal) => {
                debug!("Metadata for #{} written", ordinal);
                summary.written += 1;
            }
            Err(failure) => {
                error!(
                    "Error writing metadata #{} to {}: {}",
                    failure.ordinal,
                    failure.path.display(),
                    failure.error
                );
                summary.failures.push(failure);
            }
        }
    }
    summary.failures.sort_by_key(|failure| failure.ordinal);

    Ok(summary)
}

async fn write_record(
    dir: &Path,
    ordinal: usize,
    record: &MetadataRecord,
) -> Result<usize, WriteFailure> {
    let path = dir.join(ordinal.to_string());
    let written = match serde_json::to_string_pretty(record) {
        Ok(json) => tokio::fs::write(&path, json).await,
        Err(err) => Err(io::Error::from(err)),
    };

    match written {
        Ok(()) => Ok(ordinal),
        Err(error) => Err(WriteFailure {
            ordinal,
            path,
            error,
        }),
    }
}
