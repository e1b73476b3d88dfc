use alloy::primitives::TxHash;
use thiserror::Error;

use crate::request::ValidationError;

/// Why a VIP grant did not reach the requested confirmation depth.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("invalid grant request: {0}")]
    Validation(#[from] ValidationError),

    #[error("failed to sign transaction: {0}")]
    Signing(String),

    #[error("rpc endpoint unreachable: {0}")]
    Network(String),

    #[error("insufficient funds for gas: {0}")]
    InsufficientFunds(String),

    #[error("rpc rejected transaction: {0}")]
    Rpc(String),

    #[error("contract reverted: {reason}")]
    ContractRevert {
        tx_hash: Option<TxHash>,
        reason: String,
    },

    #[error("transaction {tx_hash} did not reach {confirmations} confirmations in time")]
    ConfirmationTimeout { tx_hash: TxHash, confirmations: u64 },

    #[error("failed waiting for transaction {tx_hash}: {reason}")]
    Confirmation { tx_hash: TxHash, reason: String },
}

impl SubmissionError {
    /// Hash of the transaction when the failure happened after broadcast.
    pub fn tx_hash(&self) -> Option<TxHash> {
        match self {
            Self::ContractRevert { tx_hash, .. } => *tx_hash,
            Self::ConfirmationTimeout { tx_hash, .. } | Self::Confirmation { tx_hash, .. } => {
                Some(*tx_hash)
            }
            _ => None,
        }
    }
}
