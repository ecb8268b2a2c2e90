//! Execute handlers for the burn-and-mint pool.

use cosmwasm_std::{to_json_binary, DepsMut, MessageInfo, Response, WasmMsg};

use common::message::{CrossChainMessage, TransferPayload};
use common::pool::{unauthorized_sender, CounterpartConfig};
use common::registry::{CollectionInfo, RegistryExecuteMsg, RegistryQueryMsg};
use common::router::RouterExecuteMsg;

use crate::error::ContractError;
use crate::state::{
    Config, TokenIdMode, CONFIG, COUNTERPART, ORIGIN_LINKS, PROCESSED, STATS, TOKEN_LINKS,
};

/// The counterpart must sit on the chain the wrapped collection mirrors.
pub(crate) fn validate_counterpart(
    config: &Config,
    counterpart: &CounterpartConfig,
) -> Result<(), ContractError> {
    if counterpart.chain_selector != config.origin_chain_selector
        || counterpart.chain_selector == config.chain_selector
    {
        return Err(ContractError::InvalidCounterpart {
            reason: format!(
                "counterpart must live on origin chain {}",
                config.origin_chain_selector
            ),
        });
    }
    if counterpart.pool.trim().is_empty() {
        return Err(ContractError::InvalidCounterpart {
            reason: "pool address must not be empty".to_string(),
        });
    }
    Ok(())
}

// ============================================================================
// Configuration
// ============================================================================

pub fn execute_bind_counterpart(
    deps: DepsMut,
    info: MessageInfo,
    counterpart: CounterpartConfig,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    if COUNTERPART.may_load(deps.storage)?.is_some() {
        return Err(ContractError::CounterpartAlreadyBound);
    }
    validate_counterpart(&config, &counterpart)?;
    COUNTERPART.save(deps.storage, &counterpart)?;

    Ok(Response::new()
        .add_attribute("action", "bind_counterpart")
        .add_attribute("chain_selector", counterpart.chain_selector.to_string())
        .add_attribute("pool", counterpart.pool))
}

// ============================================================================
// Inbound
// ============================================================================

/// Execute handler for the counterpart's lock notice: mint the wrapped token.
///
/// A registry refusal (pool not allow-listed on the wrapped collection)
/// fails the whole delivery.
pub fn execute_receive_message(
    deps: DepsMut,
    info: MessageInfo,
    message: CrossChainMessage,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let counterpart = COUNTERPART.may_load(deps.storage)?;

    if let Some(sender) =
        unauthorized_sender(&config.router, counterpart.as_ref(), &info.sender, &message)
    {
        return Err(ContractError::UnauthorizedSender { sender });
    }

    let replay_key = (message.source_chain_selector, message.message_id);
    if PROCESSED.has(deps.storage, replay_key) {
        return Err(ContractError::AlreadyProcessed {
            source_chain_selector: message.source_chain_selector,
            message_id: message.message_id,
        });
    }

    let payload =
        TransferPayload::decode(&message.payload).map_err(|e| ContractError::InvalidPayload {
            reason: e.to_string(),
        })?;
    if payload.collection_id != config.origin_collection_id {
        return Err(ContractError::CollectionMismatch {
            expected: config.origin_collection_id,
            got: payload.collection_id,
        });
    }

    let origin_token_id = payload.token_id;
    if ORIGIN_LINKS.has(deps.storage, origin_token_id) {
        return Err(ContractError::AlreadyMinted { origin_token_id });
    }
    let recipient =
        deps.api
            .addr_validate(&payload.target_owner)
            .map_err(|e| ContractError::InvalidAddress {
                reason: e.to_string(),
            })?;

    let (wrapped_token_id, mint_msg) = match config.token_id_mode {
        TokenIdMode::Mirror => (
            origin_token_id,
            RegistryExecuteMsg::MintWithId {
                collection_id: config.wrapped_collection_id,
                token_id: origin_token_id,
                owner: recipient.to_string(),
                metadata_ref: None,
            },
        ),
        TokenIdMode::Sequential => {
            // Execution is serial, so the id read here is the one Mint assigns
            let collection: CollectionInfo = deps.querier.query_wasm_smart(
                &config.registry,
                &RegistryQueryMsg::Collection {
                    collection_id: config.wrapped_collection_id,
                },
            )?;
            (
                collection.next_token_id,
                RegistryExecuteMsg::Mint {
                    collection_id: config.wrapped_collection_id,
                    owner: recipient.to_string(),
                    metadata_ref: None,
                },
            )
        }
    };

    TOKEN_LINKS.save(deps.storage, wrapped_token_id, &origin_token_id)?;
    ORIGIN_LINKS.save(deps.storage, origin_token_id, &wrapped_token_id)?;
    PROCESSED.save(deps.storage, replay_key, &true)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.total_minted += 1;
    STATS.save(deps.storage, &stats)?;

    let mint = WasmMsg::Execute {
        contract_addr: config.registry.to_string(),
        msg: to_json_binary(&mint_msg)?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(mint)
        .add_attribute("action", "mint")
        .add_attribute("wrapped_token_id", wrapped_token_id.to_string())
        .add_attribute("origin_token_id", origin_token_id.to_string())
        .add_attribute("recipient", recipient)
        .add_attribute("message_id", message.message_id.to_string())
        .add_attribute(
            "source_chain_selector",
            message.source_chain_selector.to_string(),
        ))
}

// ============================================================================
// Outbound
// ============================================================================

/// Execute handler for redeeming a wrapped token.
///
/// Burn and send are messages of one transaction: both happen or neither.
pub fn execute_burn_and_send(
    deps: DepsMut,
    info: MessageInfo,
    token_id: u64,
    target_owner: String,
    destination_chain_selector: u64,
    destination_pool: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let bound = COUNTERPART.may_load(deps.storage)?;
    if !bound
        .as_ref()
        .map_or(false, |c| c.matches(destination_chain_selector, &destination_pool))
    {
        return Err(ContractError::UnknownDestinationPool {
            chain_selector: destination_chain_selector,
            pool: destination_pool,
        });
    }

    let origin_token_id = TOKEN_LINKS
        .may_load(deps.storage, token_id)?
        .ok_or(ContractError::UnknownWrappedToken { token_id })?;
    if target_owner.trim().is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "target owner must not be empty".to_string(),
        });
    }

    TOKEN_LINKS.remove(deps.storage, token_id);
    ORIGIN_LINKS.remove(deps.storage, origin_token_id);

    let mut stats = STATS.load(deps.storage)?;
    stats.total_burned += 1;
    STATS.save(deps.storage, &stats)?;

    let burn = WasmMsg::Execute {
        contract_addr: config.registry.to_string(),
        msg: to_json_binary(&RegistryExecuteMsg::Burn {
            collection_id: config.wrapped_collection_id,
            token_id,
            owner: info.sender.to_string(),
        })?,
        funds: vec![],
    };

    let payload = TransferPayload {
        token_id: origin_token_id,
        target_owner: target_owner.clone(),
        collection_id: config.origin_collection_id,
    };
    let send = WasmMsg::Execute {
        contract_addr: config.router.to_string(),
        msg: to_json_binary(&RouterExecuteMsg::Send {
            destination_chain_selector,
            receiver: destination_pool,
            payload: payload.encode()?,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(burn)
        .add_message(send)
        .add_attribute("action", "burn")
        .add_attribute("wrapped_token_id", token_id.to_string())
        .add_attribute("origin_token_id", origin_token_id.to_string())
        .add_attribute("owner", info.sender)
        .add_attribute("target_owner", target_owner)
        .add_attribute(
            "destination_chain_selector",
            destination_chain_selector.to_string(),
        ))
}
