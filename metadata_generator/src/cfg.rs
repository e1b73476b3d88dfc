use std::path::PathBuf;

use clap::Parser;

use crate::metadata::{
    DEFAULT_COLLECTION_NAME, DEFAULT_DESCRIPTION, DEFAULT_IMAGE, MetadataTemplate,
};

#[derive(Parser, Debug)]
#[command(name = "metadata-generator")]
pub struct Cfg {
    #[arg(long, env = "TOKEN_COUNT", default_value_t = 6000)]
    pub count: usize,

    #[arg(long, env = "METADATA_DIR", default_value = "metadata")]
    pub output_dir: PathBuf,

    #[arg(long, env = "WRITE_CONCURRENCY", default_value_t = 64)]
    pub write_concurrency: usize,

    #[arg(long, env = "COLLECTION_NAME", default_value = DEFAULT_COLLECTION_NAME)]
    pub collection_name: String,

    #[arg(long, env = "COLLECTION_DESCRIPTION", default_value = DEFAULT_DESCRIPTION)]
    pub description: String,

    #[arg(long, env = "COLLECTION_IMAGE", default_value = DEFAULT_IMAGE)]
    pub image: String,
}

impl Cfg {
    pub fn template(&self) -> MetadataTemplate {
        MetadataTemplate {
            collection_name: self.collection_name.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            ..MetadataTemplate::default()
        }
    }
}
