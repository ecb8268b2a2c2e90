//! State definitions for the relay router contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

use common::router::{ChainConfiguration, OutboundRecord};

pub const CONTRACT_NAME: &str = "crates.io:nft-relay-router";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Router configuration
#[cw_serde]
pub struct Config {
    /// Public chain configuration (read-only after instantiation)
    pub chain: ChainConfiguration,
    /// Relayer account
    pub relayer: Addr,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// account => fee token balance
pub const FEE_BALANCES: Map<&Addr, Uint128> = Map::new("fee_balances");

/// destination selector => next message id on that lane
pub const NEXT_MESSAGE_ID: Map<u64, u64> = Map::new("next_message_id");

/// (destination selector, message id) => outbound record
pub const OUTBOX: Map<(u64, u64), OutboundRecord> = Map::new("outbox");

/// First id on every lane
pub const FIRST_MESSAGE_ID: u64 = 1;
