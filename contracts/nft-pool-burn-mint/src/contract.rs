//! Burn-and-Mint Pool - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use common::registry::{CollectionInfo, CollectionKind, RegistryQueryMsg};
use common::router::{ChainConfiguration, RouterQueryMsg};

use crate::error::ContractError;
use crate::execute::{
    execute_bind_counterpart, execute_burn_and_send, execute_receive_message,
    validate_counterpart,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::query::{query_config, query_is_processed, query_origin_token_id, query_stats};
use crate::state::{Config, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, COUNTERPART, STATS};

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

    let collection: CollectionInfo = deps.querier.query_wasm_smart(
        &registry,
        &RegistryQueryMsg::Collection {
            collection_id: msg.wrapped_collection_id,
        },
    )?;
    let (origin_chain_selector, origin_collection_id) = match collection.kind {
        CollectionKind::Wrapped {
            origin_chain_selector,
            origin_collection_id,
        } => (origin_chain_selector, origin_collection_id),
        CollectionKind::Origin => {
            return Err(ContractError::InvalidCollectionKind {
                reason: format!("collection {} is not wrapped", msg.wrapped_collection_id),
            })
        }
    };

    let chain: ChainConfiguration = deps
        .querier
        .query_wasm_smart(&router, &RouterQueryMsg::ChainConfig {})?;

    let config = Config {
        owner: info.sender,
        registry,
        wrapped_collection_id: msg.wrapped_collection_id,
        origin_collection_id,
        origin_chain_selector,
        router,
        chain_selector: chain.chain_selector,
        token_id_mode: msg.token_id_mode.unwrap_or_default(),
    };
    CONFIG.save(deps.storage, &config)?;
    STATS.save(deps.storage, &Stats::default())?;

    if let Some(counterpart) = msg.counterpart {
        validate_counterpart(&config, &counterpart)?;
        COUNTERPART.save(deps.storage, &counterpart)?;
    }

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute(
            "wrapped_collection_id",
            config.wrapped_collection_id.to_string(),
        )
        .add_attribute(
            "origin_chain_selector",
            config.origin_chain_selector.to_string(),
        ))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::BurnAndSend {
            token_id,
            target_owner,
            destination_chain_selector,
            destination_pool,
        } => execute_burn_and_send(
            deps,
            info,
            token_id,
            target_owner,
            destination_chain_selector,
            destination_pool,
        ),
        ExecuteMsg::ReceiveMessage { message } => {
            execute_receive_message(deps, info, message)
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
        QueryMsg::IsProcessed {
            source_chain_selector,
            message_id,
        } => to_json_binary(&query_is_processed(
            deps,
            source_chain_selector,
            message_id,
        )?),
        QueryMsg::OriginTokenId { wrapped_token_id } => {
            to_json_binary(&query_origin_token_id(deps, wrapped_token_id)?)
        }
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),
    }
}
