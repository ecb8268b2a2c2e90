//! State definitions for the burn-and-mint pool

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

use common::pool::CounterpartConfig;

pub const CONTRACT_NAME: &str = "crates.io:nft-pool-burn-mint";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// How wrapped token ids are chosen
#[cw_serde]
#[derive(Default, Copy)]
pub enum TokenIdMode {
    /// Wrapped id equals the origin id
    #[default]
    Mirror,
    /// Registry assigns the next id; the pool records the link
    Sequential,
}

/// Pool configuration
#[cw_serde]
pub struct Config {
    /// Instantiator; the only account that may bind the counterpart
    pub owner: Addr,
    /// Asset registry holding the wrapped collection
    pub registry: Addr,
    /// Wrapped collection this pool mints into
    pub wrapped_collection_id: u64,
    /// Origin collection on the counterpart's chain, taken from the wrapped
    /// collection's kind
    pub origin_collection_id: u64,
    pub origin_chain_selector: u64,
    /// Local relay router
    pub router: Addr,
    /// This chain's selector, read from the router
    pub chain_selector: u64,
    pub token_id_mode: TokenIdMode,
}

/// Lifetime counters
#[cw_serde]
#[derive(Default)]
pub struct Stats {
    pub total_minted: u64,
    pub total_burned: u64,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Remote lock-and-release pool; written once
pub const COUNTERPART: Item<CounterpartConfig> = Item::new("counterpart");

/// wrapped token id => origin token id, for every outstanding wrapped token
pub const TOKEN_LINKS: Map<u64, u64> = Map::new("token_links");

/// origin token id => wrapped token id
pub const ORIGIN_LINKS: Map<u64, u64> = Map::new("origin_links");

/// (source chain selector, message id) => processed
pub const PROCESSED: Map<(u64, u64), bool> = Map::new("processed");

pub const STATS: Item<Stats> = Item::new("stats");
