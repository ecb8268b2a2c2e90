//! Relay router interface
//!
//! Messages understood by the `relay-router` contract. One router runs on
//! every domain: it charges the relay fee, assigns message ids, keeps the
//! outbox the off-chain relayer drains, and hands inbound messages to their
//! receiver.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

use crate::message::CrossChainMessage;

/// Per-domain relay configuration. Read-only after instantiation.
#[cw_serde]
pub struct ChainConfiguration {
    /// This domain's selector
    pub chain_selector: u64,
    /// This router's address
    pub router_address: Addr,
    /// Name of the fungible fee token
    pub fee_token: String,
    /// Flat fee charged per message
    pub fee_per_message: Uint128,
    /// Domains messages may be sent to and received from
    pub remote_chains: Vec<u64>,
}

/// Delivery state of an outbound message, as reported by the relayer
#[cw_serde]
pub enum DeliveryStatus {
    Pending,
    Delivered,
    Failed { reason: String },
}

#[cw_serde]
pub struct OutboundRecord {
    pub message: CrossChainMessage,
    pub status: DeliveryStatus,
}

#[cw_serde]
pub enum RouterExecuteMsg {
    /// Send `payload` to `receiver` on another domain
    ///
    /// Authorization: anyone with enough fee balance
    Send {
        destination_chain_selector: u64,
        receiver: String,
        payload: Binary,
    },

    /// Hand an inbound message to its receiver
    ///
    /// Authorization: relayer only
    Deliver { message: CrossChainMessage },

    /// Record the delivery outcome of an outbound message
    ///
    /// Authorization: relayer only
    ConfirmDelivery {
        destination_chain_selector: u64,
        message_id: u64,
        status: DeliveryStatus,
    },

    /// Test/bootstrap faucet: credit `amount` of fee token to `account`
    ///
    /// Authorization: anyone
    RequestFee { account: String, amount: Uint128 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum RouterQueryMsg {
    #[returns(ChainConfiguration)]
    ChainConfig {},

    /// Fee charged for one message to `destination_chain_selector`
    #[returns(FeeResponse)]
    Fee { destination_chain_selector: u64 },

    #[returns(FeeBalanceResponse)]
    FeeBalance { account: String },

    #[returns(OutboundRecord)]
    Message {
        destination_chain_selector: u64,
        message_id: u64,
    },

    /// Outbound messages to one destination, ascending by id
    #[returns(OutboxResponse)]
    Outbox {
        destination_chain_selector: u64,
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    #[returns(NextMessageIdResponse)]
    NextMessageId { destination_chain_selector: u64 },
}

#[cw_serde]
pub struct FeeResponse {
    pub fee_token: String,
    pub fee: Uint128,
}

#[cw_serde]
pub struct FeeBalanceResponse {
    pub balance: Uint128,
}

#[cw_serde]
pub struct OutboxResponse {
    pub messages: Vec<OutboundRecord>,
}

#[cw_serde]
pub struct NextMessageIdResponse {
    pub message_id: u64,
}

/// Response data of `Send`: the pending handle for the message
#[cw_serde]
pub struct SendResponse {
    pub destination_chain_selector: u64,
    pub message_id: u64,
}
