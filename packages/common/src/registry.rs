//! Asset registry interface
//!
//! Messages understood by the `asset-registry` contract. Pools build their
//! registry calls from these types so the registry crate itself is never a
//! dependency of another contract.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

/// Collection flavour
#[cw_serde]
pub enum CollectionKind {
    /// Original assets. Minted by the designated minter or allow-listed accounts.
    Origin,
    /// Wrapped representations of a collection that lives on another chain.
    /// Minted only by allow-listed accounts.
    Wrapped {
        origin_chain_selector: u64,
        origin_collection_id: u64,
    },
}

impl CollectionKind {
    pub fn is_wrapped(&self) -> bool {
        matches!(self, CollectionKind::Wrapped { .. })
    }
}

#[cw_serde]
pub enum RegistryExecuteMsg {
    /// Create a new collection. The caller becomes its admin.
    CreateCollection {
        name: String,
        symbol: String,
        kind: CollectionKind,
        /// Designated minter (origin collections only)
        minter: Option<String>,
    },

    /// Mint the next sequential token id to `owner`
    ///
    /// Authorization: designated minter or allow-listed account
    Mint {
        collection_id: u64,
        owner: String,
        metadata_ref: Option<String>,
    },

    /// Mint a specific token id (wrapped collections only)
    ///
    /// Authorization: allow-listed account
    MintWithId {
        collection_id: u64,
        token_id: u64,
        owner: String,
        metadata_ref: Option<String>,
    },

    /// Move `token_id` from `from` to `to`
    ///
    /// Authorization: owner or approved operator
    TransferNft {
        collection_id: u64,
        token_id: u64,
        from: String,
        to: String,
    },

    /// Grant a single-token transfer right. Cleared on transfer.
    ///
    /// Authorization: owner
    Approve {
        collection_id: u64,
        token_id: u64,
        operator: String,
    },

    /// Clear the approved operator of a token
    ///
    /// Authorization: owner
    Revoke { collection_id: u64, token_id: u64 },

    /// Destroy `token_id`, which must be owned by `owner`
    ///
    /// Authorization: owner or approved operator
    Burn {
        collection_id: u64,
        token_id: u64,
        owner: String,
    },

    /// Add or remove an address from the collection allow-list (idempotent)
    ///
    /// Authorization: collection admin
    SetAllowListed {
        collection_id: u64,
        address: String,
        allowed: bool,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum RegistryQueryMsg {
    #[returns(OwnerOfResponse)]
    OwnerOf { collection_id: u64, token_id: u64 },

    #[returns(Asset)]
    NftInfo { collection_id: u64, token_id: u64 },

    #[returns(CollectionInfo)]
    Collection { collection_id: u64 },

    #[returns(IsAllowListedResponse)]
    IsAllowListed { collection_id: u64, address: String },

    /// Token ids held by `owner`, ascending
    #[returns(TokensResponse)]
    Tokens {
        collection_id: u64,
        owner: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct OwnerOfResponse {
    pub owner: Addr,
    pub approved: Option<Addr>,
}

#[cw_serde]
pub struct Asset {
    pub collection_id: u64,
    pub token_id: u64,
    pub owner: Addr,
    pub approved: Option<Addr>,
    pub metadata_ref: Option<String>,
}

#[cw_serde]
pub struct CollectionInfo {
    pub collection_id: u64,
    pub name: String,
    pub symbol: String,
    pub kind: CollectionKind,
    pub admin: Addr,
    pub minter: Option<Addr>,
    /// Id the next sequential mint will receive
    pub next_token_id: u64,
    /// Live tokens (minted minus burned)
    pub total_supply: u64,
}

#[cw_serde]
pub struct IsAllowListedResponse {
    pub allowed: bool,
}

#[cw_serde]
pub struct TokensResponse {
    pub tokens: Vec<u64>,
}

/// Response data of `CreateCollection`
#[cw_serde]
pub struct CreateCollectionResponse {
    pub collection_id: u64,
}

/// Response data of `Mint` and `MintWithId`
#[cw_serde]
pub struct MintResponse {
    pub token_id: u64,
}
