//! Query handlers for the relay router.

use cosmwasm_std::{Deps, Order, StdError, StdResult};
use cw_storage_plus::Bound;

use common::router::{
    ChainConfiguration, FeeBalanceResponse, FeeResponse, NextMessageIdResponse, OutboundRecord,
    OutboxResponse,
};

use crate::state::{CONFIG, FEE_BALANCES, FIRST_MESSAGE_ID, NEXT_MESSAGE_ID, OUTBOX};

const DEFAULT_LIMIT: u32 = 30;
const MAX_LIMIT: u32 = 100;

pub fn query_chain_config(deps: Deps) -> StdResult<ChainConfiguration> {
    Ok(CONFIG.load(deps.storage)?.chain)
}

pub fn query_fee(deps: Deps, destination_chain_selector: u64) -> StdResult<FeeResponse> {
    let config = CONFIG.load(deps.storage)?;
    if !config
        .chain
        .remote_chains
        .contains(&destination_chain_selector)
    {
        return Err(StdError::generic_err(format!(
            "Unknown destination chain: {}",
            destination_chain_selector
        )));
    }
    Ok(FeeResponse {
        fee_token: config.chain.fee_token,
        fee: config.chain.fee_per_message,
    })
}

pub fn query_fee_balance(deps: Deps, account: String) -> StdResult<FeeBalanceResponse> {
    let account = deps.api.addr_validate(&account)?;
    let balance = FEE_BALANCES
        .may_load(deps.storage, &account)?
        .unwrap_or_default();
    Ok(FeeBalanceResponse { balance })
}

pub fn query_message(
    deps: Deps,
    destination_chain_selector: u64,
    message_id: u64,
) -> StdResult<OutboundRecord> {
    OUTBOX.load(deps.storage, (destination_chain_selector, message_id))
}

pub fn query_outbox(
    deps: Deps,
    destination_chain_selector: u64,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<OutboxResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let messages = OUTBOX
        .prefix(destination_chain_selector)
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, record)| record))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(OutboxResponse { messages })
}

pub fn query_next_message_id(
    deps: Deps,
    destination_chain_selector: u64,
) -> StdResult<NextMessageIdResponse> {
    let message_id = NEXT_MESSAGE_ID
        .may_load(deps.storage, destination_chain_selector)?
        .unwrap_or(FIRST_MESSAGE_ID);
    Ok(NextMessageIdResponse { message_id })
}
