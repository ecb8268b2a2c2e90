//! Cross-chain message envelope.
//!
//! A `CrossChainMessage` is created by the source router on `Send`, stored in
//! its outbox, and handed unchanged to the receiver on the destination chain.
//! The router never looks inside `payload`; pools encode a `TransferPayload`
//! there.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{from_json, to_json_binary, Binary, CosmosMsg, StdResult, Uint128, WasmMsg};

/// NFT transfer instruction carried between the two pools
#[cw_serde]
pub struct TransferPayload {
    /// Origin token id (wrapped ids are mapped back before sending)
    pub token_id: u64,
    /// Recipient on the destination chain
    pub target_owner: String,
    /// Origin collection id
    pub collection_id: u64,
}

impl TransferPayload {
    pub fn encode(&self) -> StdResult<Binary> {
        to_json_binary(self)
    }

    pub fn decode(payload: &Binary) -> StdResult<Self> {
        from_json(payload)
    }
}

/// Message envelope relayed between domains. Immutable once sent.
#[cw_serde]
pub struct CrossChainMessage {
    /// Strictly increasing per (source, destination) lane, starting at 1
    pub message_id: u64,
    pub source_chain_selector: u64,
    pub destination_chain_selector: u64,
    /// Sending contract on the source chain
    pub sender: String,
    /// Receiving contract on the destination chain
    pub receiver: String,
    /// Opaque application payload
    pub payload: Binary,
    /// Relay fee debited from the sender
    pub fee_paid: Uint128,
}

impl CrossChainMessage {
    pub fn lane(&self) -> Lane {
        Lane {
            source_chain_selector: self.source_chain_selector,
            destination_chain_selector: self.destination_chain_selector,
        }
    }
}

/// Ordered channel between two domains
#[cw_serde]
#[derive(Copy, Eq, PartialOrd, Ord, Hash)]
pub struct Lane {
    pub source_chain_selector: u64,
    pub destination_chain_selector: u64,
}

impl std::fmt::Display for Lane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}->{}",
            self.source_chain_selector, self.destination_chain_selector
        )
    }
}

/// Interface every message receiver must expose to the router
#[cw_serde]
pub enum ReceiverExecuteMsg {
    /// Inbound message handler. Only the local router may call it.
    ReceiveMessage { message: CrossChainMessage },
}

impl ReceiverExecuteMsg {
    pub fn into_cosmos_msg(self, contract_addr: impl Into<String>) -> StdResult<CosmosMsg> {
        Ok(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: contract_addr.into(),
            msg: to_json_binary(&self)?,
            funds: vec![],
        }))
    }
}
