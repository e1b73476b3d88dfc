use std::{path::PathBuf, time::Duration};

use alloy::{
    primitives::Address, signers::local::PrivateKeySigner, transports::http::reqwest::Url,
};
use anyhow::Result;
use clap::Parser;

use crate::{request::VipGrantRequest, submitter::DEFAULT_CONFIRMATIONS};

#[derive(Parser, Debug)]
#[command(name = "vip-grant")]
pub struct Cfg {
    #[arg(long, env = "RPC_URL")]
    pub rpc_url: Url,

    #[arg(long, env = "PRIVATE_KEY", hide_env_values = true)]
    pub private_key: PrivateKeySigner,

    #[arg(long, env = "CONTRACT_ADDRESS")]
    pub contract_address: Address,

    #[arg(
        long,
        env = "CONFIRMATIONS",
        default_value_t = DEFAULT_CONFIRMATIONS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub confirmations: u64,

    // Unset means wait for as long as the node keeps answering.
    #[arg(long, env = "CONFIRMATION_TIMEOUT_SECS")]
    pub confirmation_timeout_secs: Option<u64>,

    #[arg(long, env = "GRANT_REQUEST_FILE")]
    pub request_file: Option<PathBuf>,
}

impl Cfg {
    pub fn confirmation_timeout(&self) -> Option<Duration> {
        self.confirmation_timeout_secs.map(Duration::from_secs)
    }

    /// The request named by `--request-file`, or an empty one.
    pub fn load_request(&self) -> Result<VipGrantRequest> {
        match &self.request_file {
            Some(path) => VipGrantRequest::from_json_file(path),
            None => Ok(VipGrantRequest::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;

    // Well-known development key (anvil account 0).
    const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_parse_with_defaults() {
        let cfg = Cfg::try_parse_from([
            "vip-grant",
            "--rpc-url",
            "http://localhost:8545",
            "--private-key",
            DEV_KEY,
            "--contract-address",
            "0x5FbDB2315678afecb367f032d93F642f64180aa3",
        ])
        .unwrap();

        assert_eq!(cfg.confirmations, DEFAULT_CONFIRMATIONS);
        assert_eq!(cfg.confirmation_timeout(), None);
        assert_eq!(
            cfg.private_key.address(),
            address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266")
        );
        assert_eq!(cfg.load_request().unwrap(), VipGrantRequest::default());
    }

    #[test]
    fn test_rejects_malformed_private_key() {
        let result = Cfg::try_parse_from([
            "vip-grant",
            "--rpc-url",
            "http://localhost:8545",
            "--private-key",
            "not-a-key",
            "--contract-address",
            "0x5FbDB2315678afecb367f032d93F642f64180aa3",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_zero_confirmations() {
        let result = Cfg::try_parse_from([
            "vip-grant",
            "--rpc-url",
            "http://localhost:8545",
            "--private-key",
            DEV_KEY,
            "--contract-address",
            "0x5FbDB2315678afecb367f032d93F642f64180aa3",
            "--confirmations",
            "0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_empty_rpc_url() {
        let result = Cfg::try_parse_from([
            "vip-grant",
            "--rpc-url",
            "",
            "--private-key",
            DEV_KEY,
            "--contract-address",
            "0x5FbDB2315678afecb367f032d93F642f64180aa3",
        ]);
        assert!(result.is_err());
    }
}
