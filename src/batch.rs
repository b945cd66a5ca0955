//! Transaction processing
//!
//! Runs every per-transaction interpretation (message signers, signature
//! records, touched addresses, message surcharges, reconciled fee) and
//! collects the results into one summary. Batches are processed on the
//! blocking pool, one task per transaction, with results in input order.

use std::sync::Arc;

use log::{debug, info};
use serde::Serialize;
use thiserror::Error;

use crate::config::ExplorerConfig;
use crate::events::touched_addresses;
use crate::fees::{
    identify_msg_based_fees, FeeResolver, FeeResult, FeeSource, MsgBasedFee, MsgFeeError,
    MsgFeeScheduleLookup,
};
use crate::messages::{MessageRegistry, MsgTypeBreakout, SignerError};
use crate::signatures::{first_signer, signature_records, SignatureRecord};
use crate::tx::{TxError, TxOutcome};

/// Processing errors
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(transparent)]
    Tx(#[from] TxError),
    #[error(transparent)]
    Signer(#[from] SignerError),
    #[error(transparent)]
    MsgFee(#[from] MsgFeeError),
    #[error("Processing task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Everything derived from one transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxSummary {
    pub height: u64,
    pub txhash: String,
    pub success: bool,
    pub message_types: Vec<MsgTypeBreakout>,
    /// Signer addresses per message, in message order
    pub message_signers: Vec<Vec<String>>,
    pub addresses: Vec<String>,
    pub first_signer: Option<String>,
    pub signatures: Vec<SignatureRecord>,
    pub msg_based_fees: Vec<MsgBasedFee>,
    pub fee: FeeResult,
    pub fee_source: FeeSource,
}

/// Interprets transactions against one network's configuration
#[derive(Clone)]
pub struct TxProcessor {
    registry: Arc<MessageRegistry>,
    config: Arc<ExplorerConfig>,
    lookup: Arc<dyn MsgFeeScheduleLookup>,
}

impl TxProcessor {
    pub fn new(
        registry: Arc<MessageRegistry>,
        config: Arc<ExplorerConfig>,
        lookup: Arc<dyn MsgFeeScheduleLookup>,
    ) -> Self {
        Self { registry, config, lookup }
    }

    /// Processor using the standard message registry
    pub fn standard(config: ExplorerConfig, lookup: Arc<dyn MsgFeeScheduleLookup>) -> Self {
        Self::new(Arc::new(MessageRegistry::standard()), Arc::new(config), lookup)
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn process(&self, outcome: &TxOutcome) -> Result<TxSummary, ProcessError> {
        let hrp = self.config.account_prefix();
        let height = outcome.height();

        let message_signers = outcome
            .messages()
            .iter()
            .map(|env| self.registry.signers_of(env))
            .collect::<Result<Vec<_>, _>>()?;
        let message_types = outcome
            .messages()
            .iter()
            .map(|env| MsgTypeBreakout::from_type_url(&env.type_url))
            .collect();

        let all_signers: Vec<String> = message_signers.iter().flatten().cloned().collect();
        let addresses = touched_addresses(&all_signers, outcome.events());

        let msg_based_fees = identify_msg_based_fees(outcome, self.lookup.as_ref(), height)?;
        let resolver = FeeResolver::new(&self.config.fees, self.lookup.as_ref());
        let (fee, fee_source) = resolver.resolve_with_source(outcome, !msg_based_fees.is_empty());

        debug!(
            "Processed {} at height {}: {} messages, {} addresses",
            outcome.txhash(),
            height,
            message_signers.len(),
            addresses.len()
        );

        Ok(TxSummary {
            height,
            txhash: outcome.txhash().to_string(),
            success: outcome.is_success(),
            message_types,
            message_signers,
            addresses,
            first_signer: first_signer(outcome, hrp),
            signatures: signature_records(outcome, hrp),
            msg_based_fees,
            fee,
            fee_source,
        })
    }

    /// Process a batch concurrently. Results keep input order; one failed
    /// transaction does not stop the others.
    pub async fn process_batch(&self, outcomes: Vec<TxOutcome>) -> Vec<Result<TxSummary, ProcessError>> {
        let total = outcomes.len();
        let handles: Vec<_> = outcomes
            .into_iter()
            .map(|outcome| {
                let processor = self.clone();
                tokio::task::spawn_blocking(move || processor.process(&outcome))
            })
            .collect();

        let mut results = Vec::with_capacity(total);
        for handle in handles {
            results.push(handle.await.map_err(ProcessError::from).and_then(|r| r));
        }
        info!(
            "Processed batch of {} transactions ({} failed)",
            total,
            results.iter().filter(|r| r.is_err()).count()
        );
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fees::StaticFeeSchedule;
    use crate::proto::cosmos::bank::MsgSend;
    use crate::proto::tx::{AuthInfo, Event, Fee, Tx, TxBody, TxResponse};
    use crate::proto::{Coin, MessageEnvelope};

    fn send(from: &str, to: &str) -> MessageEnvelope {
        MessageEnvelope::pack(
            "/cosmos.bank.v1beta1.MsgSend",
            &MsgSend {
                from_address: from.to_string(),
                to_address: to.to_string(),
            },
        )
    }

    fn outcome(hash: &str, messages: Vec<MessageEnvelope>, events: Vec<Event>) -> TxOutcome {
        let tx = Tx {
            body: Some(TxBody { messages, ..Default::default() }),
            auth_info: Some(AuthInfo {
                signer_infos: vec![],
                fee: Some(Fee {
                    amount: vec![Coin::new(381_000u32, "nhash")],
                    gas_limit: 200,
                    ..Default::default()
                }),
            }),
            signatures: vec![],
        };
        let response = TxResponse {
            height: 12,
            txhash: hash.to_string(),
            gas_wanted: 200,
            events,
            ..Default::default()
        };
        TxOutcome::new(response, tx)
    }

    fn processor() -> TxProcessor {
        TxProcessor::standard(ExplorerConfig::mainnet(), Arc::new(StaticFeeSchedule::empty()))
    }

    #[test]
    fn test_process_summary() {
        let o = outcome(
            "AA",
            vec![send("pb1from", "pb1to")],
            vec![
                Event::new("transfer", [("sender", "pb1from"), ("recipient", "pb1to")]),
                Event::new("tx", [("acc_seq", "pb1from/0"), ("fee", "381000nhash")]),
            ],
        );
        let summary = processor().process(&o).unwrap();

        assert_eq!(
            summary.message_signers,
            vec![vec!["pb1from".to_string(), "pb1to".to_string()]]
        );
        assert_eq!(summary.message_types[0].action, "send");
        assert_eq!(summary.addresses, vec!["pb1from", "pb1to"]);
        assert_eq!(summary.first_signer.as_deref(), Some("pb1from"));
        assert_eq!(summary.fee, FeeResult::new(381_000, "nhash"));
        assert_eq!(summary.fee_source, FeeSource::FeeEvent);
        assert!(summary.msg_based_fees.is_empty());
    }

    #[test]
    fn test_undecodable_message_fails() {
        let bad = MessageEnvelope {
            type_url: "/cosmos.bank.v1beta1.MsgSend".to_string(),
            value: vec![0xff, 0xff, 0xff],
        };
        let o = outcome("BB", vec![bad], vec![]);
        assert!(matches!(processor().process(&o), Err(ProcessError::Signer(_))));
    }

    #[tokio::test]
    async fn test_batch_keeps_order() {
        let batch: Vec<TxOutcome> = (0..8)
            .map(|i| outcome(&format!("H{}", i), vec![send("pb1a", "pb1b")], vec![]))
            .collect();
        let results = processor().process_batch(batch).await;

        assert_eq!(results.len(), 8);
        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.as_ref().unwrap().txhash, format!("H{}", i));
        }
    }
}
