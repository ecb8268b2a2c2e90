//! State definitions for the asset registry contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

use common::registry::CollectionKind;

pub const CONTRACT_NAME: &str = "crates.io:nft-asset-registry";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Collection settings and counters
#[cw_serde]
pub struct Collection {
    pub name: String,
    pub symbol: String,
    pub kind: CollectionKind,
    /// May change the allow-list
    pub admin: Addr,
    /// Designated minter (origin collections only)
    pub minter: Option<Addr>,
    pub next_token_id: u64,
    pub total_supply: u64,
}

/// A live token
#[cw_serde]
pub struct TokenInfo {
    pub owner: Addr,
    /// Single-token operator, cleared on transfer
    pub approved: Option<Addr>,
    pub metadata_ref: Option<String>,
}

/// Id the next created collection receives
pub const NEXT_COLLECTION_ID: Item<u64> = Item::new("next_collection_id");

/// collection_id => collection
pub const COLLECTIONS: Map<u64, Collection> = Map::new("collections");

/// (collection_id, token_id) => token
pub const TOKENS: Map<(u64, u64), TokenInfo> = Map::new("tokens");

/// (collection_id, address) => allowed
pub const ALLOW_LIST: Map<(u64, &Addr), bool> = Map::new("allow_list");
