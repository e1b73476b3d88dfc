use std::time::Duration;

use alloy::{
    network::ReceiptResponse,
    primitives::{Address, TxHash},
    providers::{PendingTransactionBuilder, PendingTransactionError, Provider, WatchTxError},
    sol,
    transports::{RpcError, TransportError},
};
use async_trait::async_trait;
use tracing::debug;

use crate::{
    error::SubmissionError,
    request::VipGrantRequest,
    submitter::{GrantContract, GrantReceipt},
};

sol! {
    #[sol(rpc)]
    interface IVipMintQuota {
        function incrementVIPMintQuota(address[] calldata user, uint256[] calldata amount) external;
    }
}

/// [`GrantContract`] backed by an alloy provider. The provider must carry the
/// signing wallet; the contract call is filled, signed and sent through it.
pub struct AlloyGrantContract<P> {
    instance: IVipMintQuota::IVipMintQuotaInstance<P>,
}

impl<P: Provider> AlloyGrantContract<P> {
    pub fn new(address: Address, provider: P) -> Self {
        Self {
            instance: IVipMintQuota::new(address, provider),
        }
    }
}

#[async_trait]
impl<P: Provider> GrantContract for AlloyGrantContract<P> {
    async fn broadcast(&self, request: &VipGrantRequest) -> Result<TxHash, SubmissionError> {
        debug!(
            "Calling incrementVIPMintQuota on {} with {} users",
            self.instance.address(),
            request.users.len()
        );
        let pending = self
            .instance
            .incrementVIPMintQuota(request.users.clone(), request.amounts.clone())
            .send()
            .await
            .map_err(classify_call_error)?;

        Ok(*pending.tx_hash())
    }

    async fn confirm(
        &self,
        tx_hash: TxHash,
        confirmations: u64,
        timeout: Option<Duration>,
    ) -> Result<GrantReceipt, SubmissionError> {
        let receipt = PendingTransactionBuilder::new(self.instance.provider().root().clone(), tx_hash)
            .with_required_confirmations(confirmations)
            .with_timeout(timeout)
            .get_receipt()
            .await
            .map_err(|err| classify_pending_error(tx_hash, confirmations, err))?;

        if !receipt.status() {
            return Err(SubmissionError::ContractRevert {
                tx_hash: Some(tx_hash),
                reason: "transaction was mined but its receipt reports failure".to_string(),
            });
        }

        Ok(GrantReceipt {
            tx_hash,
            block_number: receipt.block_number(),
        })
    }
}

fn classify_call_error(err: alloy::contract::Error) -> SubmissionError {
    match err {
        alloy::contract::Error::TransportError(err) => classify_transport_error(&err),
        other => SubmissionError::Rpc(other.to_string()),
    }
}

/// Maps a failed send (gas estimation, signing or `eth_sendRawTransaction`)
/// onto the submission error taxonomy.
fn classify_transport_error(err: &TransportError) -> SubmissionError {
    if let Some(payload) = err.as_error_resp() {
        let message = payload.message.to_string();
        let lowered = message.to_lowercase();
        if payload.as_revert_data().is_some() || lowered.contains("revert") {
            return SubmissionError::ContractRevert {
                tx_hash: None,
                reason: message,
            };
        }
        if lowered.contains("insufficient funds") {
            return SubmissionError::InsufficientFunds(message);
        }
        return SubmissionError::Rpc(message);
    }

    match err {
        RpcError::LocalUsageError(inner) => SubmissionError::Signing(inner.to_string()),
        other => SubmissionError::Network(other.to_string()),
    }
}

fn classify_pending_error(
    tx_hash: TxHash,
    confirmations: u64,
    err: PendingTransactionError,
) -> SubmissionError {
    match err {
        PendingTransactionError::TxWatcher(WatchTxError::Timeout) => {
            SubmissionError::ConfirmationTimeout {
                tx_hash,
                confirmations,
            }
        }
        // Already broadcast, so the hash must survive for the caller.
        PendingTransactionError::TransportError(err) => SubmissionError::Confirmation {
            tx_hash,
            reason: err.to_string(),
        },
        other => SubmissionError::Confirmation {
            tx_hash,
            reason: other.to_string(),
        },
    }
}
