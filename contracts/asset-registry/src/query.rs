//! Query handlers for the asset registry.

use cosmwasm_std::{Deps, Order, StdError, StdResult};
use cw_storage_plus::Bound;

use common::registry::{
    Asset, CollectionInfo, IsAllowListedResponse, OwnerOfResponse, TokensResponse,
};

use crate::state::{TokenInfo, ALLOW_LIST, COLLECTIONS, TOKENS};

const DEFAULT_LIMIT: u32 = 30;
const MAX_LIMIT: u32 = 100;

fn load_token(deps: Deps, collection_id: u64, token_id: u64) -> StdResult<TokenInfo> {
    TOKENS
        .may_load(deps.storage, (collection_id, token_id))?
        .ok_or_else(|| {
            StdError::not_found(format!(
                "token {} in collection {}",
                token_id, collection_id
            ))
        })
}

pub fn query_owner_of(deps: Deps, collection_id: u64, token_id: u64) -> StdResult<OwnerOfResponse> {
    let token = load_token(deps, collection_id, token_id)?;
    Ok(OwnerOfResponse {
        owner: token.owner,
        approved: token.approved,
    })
}

pub fn query_nft_info(deps: Deps, collection_id: u64, token_id: u64) -> StdResult<Asset> {
    let token = load_token(deps, collection_id, token_id)?;
    Ok(Asset {
        collection_id,
        token_id,
        owner: token.owner,
        approved: token.approved,
        metadata_ref: token.metadata_ref,
    })
}

pub fn query_collection(deps: Deps, collection_id: u64) -> StdResult<CollectionInfo> {
    let collection = COLLECTIONS.load(deps.storage, collection_id)?;
    Ok(CollectionInfo {
        collection_id,
        name: collection.name,
        symbol: collection.symbol,
        kind: collection.kind,
        admin: collection.admin,
        minter: collection.minter,
        next_token_id: collection.next_token_id,
        total_supply: collection.total_supply,
    })
}

pub fn query_is_allow_listed(
    deps: Deps,
    collection_id: u64,
    address: String,
) -> StdResult<IsAllowListedResponse> {
    let address = deps.api.addr_validate(&address)?;
    let allowed = ALLOW_LIST
        .may_load(deps.storage, (collection_id, &address))?
        .unwrap_or(false);
    Ok(IsAllowListedResponse { allowed })
}

/// Scans the collection in id order and keeps the tokens held by `owner`.
pub fn query_tokens(
    deps: Deps,
    collection_id: u64,
    owner: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<TokensResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let tokens = TOKENS
        .prefix(collection_id)
        .range(deps.storage, start, None, Order::Ascending)
        .filter(|item| match item {
            Ok((_, token)) => token.owner == owner,
            Err(_) => true,
        })
        .take(limit)
        .map(|item| item.map(|(token_id, _)| token_id))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(TokensResponse { tokens })
}
