//! Decoded transaction plus its execution result

use prost::Message;
use thiserror::Error;

use crate::constants::{NO_CHARGE_REJECTIONS, TX_ACC_SEQ, TX_EVENT};
use crate::events::EventAttributeReader;
use crate::proto::tx::{AuthInfo, Event, GetTxResponse, SignerInfo, Tx, TxResponse};
use crate::proto::{Coin, MessageEnvelope};

/// Errors building a [`TxOutcome`]
#[derive(Debug, Error)]
pub enum TxError {
    #[error("Transaction response is missing")]
    MissingResponse,
    #[error("Transaction body is missing and the response carries no packed transaction")]
    MissingTx,
    #[error("Failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        source: prost::DecodeError,
    },
}

/// One transaction as the node reported it. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct TxOutcome {
    response: TxResponse,
    tx: Tx,
}

impl TxOutcome {
    pub fn new(response: TxResponse, tx: Tx) -> Self {
        Self { response, tx }
    }

    /// Build from a `GetTx` response. When the top-level `tx` is absent the
    /// packed copy inside the response is decoded instead.
    pub fn from_get_tx(resp: GetTxResponse) -> Result<Self, TxError> {
        let response = resp.tx_response.ok_or(TxError::MissingResponse)?;
        let tx = match resp.tx {
            Some(tx) => tx,
            None => response
                .tx
                .as_ref()
                .ok_or(TxError::MissingTx)?
                .unpack::<Tx>()
                .map_err(|source| TxError::Decode { what: "packed transaction", source })?,
        };
        Ok(Self { response, tx })
    }

    /// Decode a protobuf-encoded `GetTxResponse`
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TxError> {
        let resp = GetTxResponse::decode(bytes)
            .map_err(|source| TxError::Decode { what: "GetTxResponse", source })?;
        Self::from_get_tx(resp)
    }

    pub fn response(&self) -> &TxResponse {
        &self.response
    }

    pub fn tx(&self) -> &Tx {
        &self.tx
    }

    pub fn txhash(&self) -> &str {
        &self.response.txhash
    }

    /// Block height; a negative wire value reads as 0
    pub fn height(&self) -> u64 {
        u64::try_from(self.response.height).unwrap_or(0)
    }

    pub fn code(&self) -> u32 {
        self.response.code
    }

    pub fn codespace(&self) -> &str {
        &self.response.codespace
    }

    pub fn is_success(&self) -> bool {
        self.response.code == 0
    }

    /// Rejected before any fee could be charged
    pub fn is_no_charge_rejection(&self) -> bool {
        NO_CHARGE_REJECTIONS
            .iter()
            .any(|(space, code)| *space == self.codespace() && *code == self.code())
    }

    pub fn gas_wanted(&self) -> u128 {
        u128::try_from(self.response.gas_wanted).unwrap_or(0)
    }

    pub fn events(&self) -> &[Event] {
        &self.response.events
    }

    pub fn reader(&self) -> EventAttributeReader<'_> {
        EventAttributeReader::new(&self.response.events)
    }

    pub fn messages(&self) -> &[MessageEnvelope] {
        self.tx.body.as_ref().map(|b| b.messages.as_slice()).unwrap_or(&[])
    }

    pub fn memo(&self) -> &str {
        self.tx.body.as_ref().map(|b| b.memo.as_str()).unwrap_or("")
    }

    fn auth_info(&self) -> Option<&AuthInfo> {
        self.tx.auth_info.as_ref()
    }

    pub fn signer_infos(&self) -> &[SignerInfo] {
        self.auth_info().map(|a| a.signer_infos.as_slice()).unwrap_or(&[])
    }

    /// Fee coins the payer authorized
    pub fn declared_fee(&self) -> &[Coin] {
        self.auth_info()
            .and_then(|a| a.fee.as_ref())
            .map(|f| f.amount.as_slice())
            .unwrap_or(&[])
    }

    /// Sum of declared fee coins in `denom`. Coins whose amount does not
    /// parse count as zero.
    pub fn declared_total(&self, denom: &str) -> u128 {
        self.declared_fee()
            .iter()
            .filter(|coin| coin.denom == denom)
            .map(|coin| coin.amount.trim().parse::<u128>().unwrap_or(0))
            .fold(0u128, u128::saturating_add)
    }

    /// Address half of the `tx`/`acc_seq` attribute
    pub fn acc_seq_address(&self) -> Option<String> {
        self.reader()
            .find(TX_EVENT, TX_ACC_SEQ, None)
            .and_then(|v| v.split('/').next().map(str::to_string))
            .filter(|a| !a.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proto::tx::{Fee, TxBody};

    fn outcome_with_fee(coins: Vec<Coin>) -> TxOutcome {
        let tx = Tx {
            body: Some(TxBody::default()),
            auth_info: Some(AuthInfo {
                signer_infos: vec![],
                fee: Some(Fee {
                    amount: coins,
                    gas_limit: 200_000,
                    ..Default::default()
                }),
            }),
            signatures: vec![],
        };
        TxOutcome::new(TxResponse { height: 10, ..Default::default() }, tx)
    }

    #[test]
    fn test_declared_total_sums_utility_coins() {
        let outcome = outcome_with_fee(vec![
            Coin::new(100u32, "nhash"),
            Coin::new(7u32, "uusd"),
            Coin::new(50u32, "nhash"),
            Coin::new("bogus", "nhash"),
        ]);
        assert_eq!(outcome.declared_total("nhash"), 150);
        assert_eq!(outcome.declared_total("uusd"), 7);
        assert_eq!(outcome.declared_total("other"), 0);
    }

    #[test]
    fn test_from_get_tx_uses_packed_tx() {
        let tx = Tx {
            body: Some(TxBody { memo: "hello".into(), ..Default::default() }),
            ..Default::default()
        };
        let resp = GetTxResponse {
            tx: None,
            tx_response: Some(TxResponse {
                height: 42,
                tx: Some(MessageEnvelope::pack("/cosmos.tx.v1beta1.Tx", &tx)),
                ..Default::default()
            }),
        };
        let outcome = TxOutcome::from_bytes(&resp.encode_to_vec()).unwrap();
        assert_eq!(outcome.memo(), "hello");
        assert_eq!(outcome.height(), 42);
    }

    #[test]
    fn test_missing_pieces() {
        let resp = GetTxResponse { tx: Some(Tx::default()), tx_response: None };
        assert!(matches!(TxOutcome::from_get_tx(resp), Err(TxError::MissingResponse)));

        let resp = GetTxResponse { tx: None, tx_response: Some(TxResponse::default()) };
        assert!(matches!(TxOutcome::from_get_tx(resp), Err(TxError::MissingTx)));

        assert!(matches!(TxOutcome::from_bytes(&[0xff, 0xff]), Err(TxError::Decode { .. })));
    }

    #[test]
    fn test_negative_wire_values_clamp() {
        let outcome = TxOutcome::new(
            TxResponse { height: -5, gas_wanted: -1, ..Default::default() },
            Tx::default(),
        );
        assert_eq!(outcome.height(), 0);
        assert_eq!(outcome.gas_wanted(), 0);
        assert!(outcome.messages().is_empty());
        assert!(outcome.declared_fee().is_empty());
    }

    #[test]
    fn test_no_charge_rejection() {
        let mut response = TxResponse { code: 8, codespace: "sdk".into(), ..Default::default() };
        assert!(TxOutcome::new(response.clone(), Tx::default()).is_no_charge_rejection());
        response.code = 5;
        assert!(!TxOutcome::new(response.clone(), Tx::default()).is_no_charge_rejection());
        response.code = 32;
        response.codespace = "wasm".into();
        assert!(!TxOutcome::new(response, Tx::default()).is_no_charge_rejection());
    }

    #[test]
    fn test_acc_seq_address() {
        let outcome = TxOutcome::new(
            TxResponse {
                events: vec![Event::new("tx", [("acc_seq", "pb1signer/17")])],
                ..Default::default()
            },
            Tx::default(),
        );
        assert_eq!(outcome.acc_seq_address().as_deref(), Some("pb1signer"));
    }
}
