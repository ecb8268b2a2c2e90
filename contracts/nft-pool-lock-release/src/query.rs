//! Query handlers for the lock-and-release pool.

use cosmwasm_std::{Deps, Order, StdResult};
use cw_storage_plus::Bound;

use common::pool::IsProcessedResponse;

use crate::msg::{ConfigResponse, LockResponse, LocksResponse, StatsResponse};
use crate::state::{CONFIG, COUNTERPART, LOCKS, PROCESSED, STATS};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        registry: config.registry,
        collection_id: config.collection_id,
        router: config.router,
        chain_selector: config.chain_selector,
        counterpart: COUNTERPART.may_load(deps.storage)?,
    })
}

pub fn query_lock(deps: Deps, token_id: u64) -> StdResult<LockResponse> {
    Ok(LockResponse {
        lock: LOCKS.may_load(deps.storage, token_id)?,
    })
}

/// List active locks with cursor-based pagination.
pub fn query_locks(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<LocksResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let locks = LOCKS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, lock)| lock))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(LocksResponse { locks })
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

pub fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.load(deps.storage)?;
    Ok(StatsResponse {
        active_locks: stats.total_locked - stats.total_unlocked,
        total_locked: stats.total_locked,
        total_unlocked: stats.total_unlocked,
    })
}
