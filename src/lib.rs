//! Provenance explorer transaction core
//!
//! Interprets raw transaction responses from a Cosmos-SDK node: who signed
//! each embedded message, and what fee was actually paid for the transaction.
//!
//! Everything here is a pure function of its inputs plus an immutable
//! [`config::ExplorerConfig`]; the only external collaborator is the
//! message fee schedule ([`fees::MsgFeeScheduleLookup`]).

pub mod address;
pub mod batch;
pub mod config;
pub mod crypto;
pub mod events;
pub mod fees;
pub mod messages;
pub mod proto;
pub mod signatures;
pub mod tx;

/// Protocol constants shared by the fee and signature paths
pub mod constants {
    /// Mainnet account prefix
    pub const MAINNET_ACCOUNT_PREFIX: &str = "pb";

    /// Mainnet validator operator prefix
    pub const MAINNET_VALOPER_PREFIX: &str = "pbvaloper";

    /// Mainnet validator consensus prefix
    pub const MAINNET_VALCONS_PREFIX: &str = "pbvalcons";

    /// Testnet account prefix
    pub const TESTNET_ACCOUNT_PREFIX: &str = "tp";

    /// Testnet validator operator prefix
    pub const TESTNET_VALOPER_PREFIX: &str = "tpvaloper";

    /// Testnet validator consensus prefix
    pub const TESTNET_VALCONS_PREFIX: &str = "tpvalcons";

    /// Utility token denomination (fees are charged in this)
    pub const UTILITY_DENOM: &str = "nhash";

    /// Floor gas price used when the chain cannot report one for a height
    pub const DEFAULT_GAS_PRICE: u128 = 1905;

    /// Transaction-level event type
    pub const TX_EVENT: &str = "tx";

    /// Attribute on the `tx` event carrying "address/sequence"
    pub const TX_ACC_SEQ: &str = "acc_seq";

    /// Attribute tagging an event with the message it belongs to
    pub const MSG_INDEX: &str = "msg_index";

    /// (codespace, code) pairs rejected before any fee could be charged
    pub const NO_CHARGE_REJECTIONS: [(&str, u32); 2] = [("sdk", 8), ("sdk", 32)];
}
