//! Message types for the relay router contract
//!
//! Execute and query messages live in `common::router` so that senders can
//! build router calls without depending on this crate.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

pub use common::router::{
    ChainConfiguration, DeliveryStatus, FeeBalanceResponse, FeeResponse, NextMessageIdResponse,
    OutboundRecord, OutboxResponse, RouterExecuteMsg as ExecuteMsg,
    RouterQueryMsg as QueryMsg, SendResponse,
};

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// This chain's selector (must not be 0)
    pub chain_selector: u64,
    /// Off-chain relayer account allowed to deliver and confirm messages
    pub relayer: String,
    /// Name of the fee token (e.g. "link")
    pub fee_token: String,
    /// Flat fee charged per message
    pub fee_per_message: Uint128,
    /// Chains this router exchanges messages with
    pub remote_chains: Vec<u64>,
}
