//! State definitions for the lock-and-release pool

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

use common::pool::CounterpartConfig;

pub const CONTRACT_NAME: &str = "crates.io:nft-pool-lock-release";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Pool configuration
#[cw_serde]
pub struct Config {
    /// Instantiator; the only account that may bind the counterpart
    pub owner: Addr,
    /// Asset registry holding the origin collection
    pub registry: Addr,
    /// Origin collection this pool takes custody of
    pub collection_id: u64,
    /// Local relay router
    pub router: Addr,
    /// This chain's selector, read from the router
    pub chain_selector: u64,
}

/// Custody record of a locked token
#[cw_serde]
pub struct LockRecord {
    pub token_id: u64,
    /// Owner the token was locked from
    pub original_owner: Addr,
    /// Value of the pool-local lock counter when this lock was taken
    pub locked_at_sequence: u64,
}

/// Lifetime counters
#[cw_serde]
#[derive(Default)]
pub struct Stats {
    pub total_locked: u64,
    pub total_unlocked: u64,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Remote burn-and-mint pool; written once
pub const COUNTERPART: Item<CounterpartConfig> = Item::new("counterpart");

/// token id => active lock
pub const LOCKS: Map<u64, LockRecord> = Map::new("locks");

/// Incremented on every lock
pub const LOCK_SEQUENCE: Item<u64> = Item::new("lock_sequence");

/// (source chain selector, message id) => processed
pub const PROCESSED: Map<(u64, u64), bool> = Map::new("processed");

pub const STATS: Item<Stats> = Item::new("stats");
