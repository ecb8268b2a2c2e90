//! Message types for the asset registry contract
//!
//! Execute and query messages live in `common::registry` so that pools can
//! build registry calls without depending on this crate.

use cosmwasm_schema::cw_serde;

pub use common::registry::{
    Asset, CollectionInfo, CollectionKind, CreateCollectionResponse, IsAllowListedResponse,
    MintResponse, OwnerOfResponse, RegistryExecuteMsg as ExecuteMsg,
    RegistryQueryMsg as QueryMsg, TokensResponse,
};

/// Instantiate message. Collections are created afterwards.
#[cw_serde]
pub struct InstantiateMsg {}
