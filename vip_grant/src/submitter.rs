use std::time::Duration;

use alloy::primitives::TxHash;
use async_trait::async_trait;
use tracing::{error, info};

use crate::{error::SubmissionError, request::VipGrantRequest};

pub const DEFAULT_CONFIRMATIONS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrantReceipt {
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
}

/// The on-chain side of a grant: sign and broadcast the call, then wait for it.
#[async_trait]
pub trait GrantContract: Send + Sync {
    /// Signs and broadcasts `incrementVIPMintQuota(users, amounts)`.
    async fn broadcast(&self, request: &VipGrantRequest) -> Result<TxHash, SubmissionError>;

    /// Waits until `tx_hash` has `confirmations` blocks on top of it.
    /// `None` waits for as long as the node keeps answering.
    async fn confirm(
        &self,
        tx_hash: TxHash,
        confirmations: u64,
        timeout: Option<Duration>,
    ) -> Result<GrantReceipt, SubmissionError>;
}

/// Submits one grant request at a time. There is no retry and no record of
/// earlier grants, so submitting the same request twice grants twice.
pub struct VipGrantSubmitter<C> {
    contract: C,
    confirmations: u64,
    confirmation_timeout: Option<Duration>,
}

impl<C: GrantContract> VipGrantSubmitter<C> {
    pub fn new(contract: C, confirmations: u64) -> Self {
        Self {
            contract,
            confirmations,
            confirmation_timeout: None,
        }
    }

    pub fn with_confirmation_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.confirmation_timeout = timeout;
        self
    }

    /// Validates, broadcasts and waits for the grant, returning its transaction hash.
    pub async fn submit_grant(&self, request: &VipGrantRequest) -> Result<TxHash, SubmissionError> {
        match self.try_submit(request).await {
            Ok(receipt) => {
                info!(
                    block = ?receipt.block_number,
                    "VIP grant confirmed, request: {}, tx hash: {}",
                    request,
                    receipt.tx_hash
                );
                Ok(receipt.tx_hash)
            }
            Err(err) => {
                error!(
                    tx_hash = ?err.tx_hash(),
                    "VIP grant failed, request: {}, error: {}",
                    request,
                    err
                );
                Err(err)
            }
        }
    }

    async fn try_submit(&self, request: &VipGrantRequest) -> Result<GrantReceipt, SubmissionError> {
        request.validate()?;

        let tx_hash = self.contract.broadcast(request).await?;
        info!(
            "Broadcast VIP grant transaction {}, waiting for {} confirmations",
            tx_hash, self.confirmations
        );

        self.contract
            .confirm(tx_hash, self.confirmations, self.confirmation_timeout)
            .await
    }
}
