//! Lock-and-Release Pool - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use common::registry::{CollectionInfo, RegistryQueryMsg};
use common::router::{ChainConfiguration, RouterQueryMsg};

use crate::error::ContractError;
use crate::execute::{
    execute_bind_counterpart, execute_lock_and_send, execute_receive_message,
    validate_counterpart,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::query::{query_config, query_is_processed, query_lock, query_locks, query_stats};
use crate::state::{
    Config, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, COUNTERPART, LOCK_SEQUENCE, STATS,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let registry = deps.api.addr_validate(&msg.registry)?;
    let router = deps.api.addr_validate(&msg.router)?;

    // Custody is only taken of originals
    let collection: CollectionInfo = deps.querier.query_wasm_smart(
        &registry,
        &RegistryQueryMsg::Collection {
            collection_id: msg.collection_id,
        },
    )?;
    if collection.kind.is_wrapped() {
        return Err(ContractError::InvalidCollectionKind {
            reason: format!("collection {} is wrapped", msg.collection_id),
        });
    }

    let chain: ChainConfiguration = deps
        .querier
        .query_wasm_smart(&router, &RouterQueryMsg::ChainConfig {})?;

    let config = Config {
        owner: info.sender,
        registry,
        collection_id: msg.collection_id,
        router,
        chain_selector: chain.chain_selector,
    };
    CONFIG.save(deps.storage, &config)?;
    LOCK_SEQUENCE.save(deps.storage, &0u64)?;
    STATS.save(deps.storage, &Stats::default())?;

    if let Some(counterpart) = msg.counterpart {
        validate_counterpart(&config, &counterpart)?;
        COUNTERPART.save(deps.storage, &counterpart)?;
    }

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("collection_id", config.collection_id.to_string())
        .add_attribute("chain_selector", config.chain_selector.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::LockAndSend {
            token_id,
            target_owner,
            destination_chain_selector,
            destination_pool,
        } => execute_lock_and_send(
            deps,
            env,
            info,
            token_id,
            target_owner,
            destination_chain_selector,
            destination_pool,
        ),
        ExecuteMsg::ReceiveMessage { message } => {
            execute_receive_message(deps, env, info, message)
        }
        ExecuteMsg::BindCounterpart { counterpart } => {
            execute_bind_counterpart(deps, info, counterpart)
        }
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Lock { token_id } => to_json_binary(&query_lock(deps, token_id)?),
        QueryMsg::Locks { start_after, limit } => {
            to_json_binary(&query_locks(deps, start_after, limit)?)
        }
        QueryMsg::IsProcessed {
            source_chain_selector,
            message_id,
        } => to_json_binary(&query_is_processed(
            deps,
            source_chain_selector,
            message_id,
        )?),
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),
    }
}
