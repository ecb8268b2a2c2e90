//! Query handlers for the burn-and-mint pool.

use cosmwasm_std::{Deps, StdResult};

use common::pool::IsProcessedResponse;

use crate::msg::{ConfigResponse, OriginTokenIdResponse, StatsResponse};
use crate::state::{CONFIG, COUNTERPART, PROCESSED, STATS, TOKEN_LINKS};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        registry: config.registry,
        wrapped_collection_id: config.wrapped_collection_id,
        origin_collection_id: config.origin_collection_id,
        origin_chain_selector: config.origin_chain_selector,
        router: config.router,
        chain_selector: config.chain_selector,
        token_id_mode: config.token_id_mode,
        counterpart: COUNTERPART.may_load(deps.storage)?,
    })
}

pub fn query_is_processed(
    deps: Deps,
    source_chain_selector: u64,
    message_id: u64,
) -> StdResult<IsProcessedResponse> {
    Ok(IsProcessedResponse {
        processed: PROCESSED.has(deps.storage, (source_chain_selector, message_id)),
    })
}

pub fn query_origin_token_id(deps: Deps, wrapped_token_id: u64) -> StdResult<OriginTokenIdResponse> {
    Ok(OriginTokenIdResponse {
        origin_token_id: TOKEN_LINKS.may_load(deps.storage, wrapped_token_id)?,
    })
}

pub fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.load(deps.storage)?;
    Ok(StatsResponse {
        outstanding: stats.total_minted - stats.total_burned,
        total_minted: stats.total_minted,
        total_burned: stats.total_burned,
    })
}
