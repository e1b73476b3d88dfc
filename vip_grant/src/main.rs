use alloy::providers::ProviderBuilder;
use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{cfg::Cfg, contract::AlloyGrantContract, submitter::VipGrantSubmitter};

mod cfg;
mod contract;
mod error;
mod request;
mod submitter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cfg = Cfg::parse();
    let request = cfg.load_request()?;

    info!(
        "Granting VIP mint quota from {} through contract {}",
        cfg.private_key.address(),
        cfg.contract_address
    );

    let provider = ProviderBuilder::new()
        .wallet(cfg.private_key.clone())
        .connect_http(cfg.rpc_url.clone());

    let submitter = VipGrantSubmitter::new(
        AlloyGrantContract::new(cfg.contract_address, provider),
        cfg.confirmations,
    )
    .with_confirmation_timeout(cfg.confirmation_timeout());

    submitter.submit_grant(&request).await?;

    Ok(())
}
