//! Execute handlers for the lock-and-release pool.
//!
//! This module handles:
//! - LockAndSend: take custody and notify the counterpart
//! - ReceiveMessage: release a locked token on the counterpart's burn notice
//! - BindCounterpart: one-shot counterpart configuration

use cosmwasm_std::{to_json_binary, DepsMut, Env, MessageInfo, Response, WasmMsg};

use common::message::{CrossChainMessage, TransferPayload};
use common::pool::{unauthorized_sender, CounterpartConfig};
use common::registry::RegistryExecuteMsg;
use common::router::RouterExecuteMsg;

use crate::error::ContractError;
use crate::state::{
    Config, LockRecord, CONFIG, COUNTERPART, LOCKS, LOCK_SEQUENCE, PROCESSED, STATS,
};

pub(crate) fn validate_counterpart(
    config: &Config,
    counterpart: &CounterpartConfig,
) -> Result<(), ContractError> {
    if counterpart.chain_selector == 0 || counterpart.chain_selector == config.chain_selector {
        return Err(ContractError::InvalidCounterpart {
            reason: "counterpart must live on another chain".to_string(),
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
// Outbound
// ============================================================================

/// Execute handler for locking an origin token.
///
/// The registry transfer and the router send run as messages of this
/// transaction, so a registry error (`NotOwner`, `NotApproved`) or a router
/// error (`InsufficientFee`) reverts the lock record as well.
pub fn execute_lock_and_send(
    deps: DepsMut,
    env: Env,
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

    if LOCKS.has(deps.storage, token_id) {
        return Err(ContractError::AlreadyLocked { token_id });
    }
    if target_owner.trim().is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "target owner must not be empty".to_string(),
        });
    }

    let sequence = LOCK_SEQUENCE.load(deps.storage)? + 1;
    LOCK_SEQUENCE.save(deps.storage, &sequence)?;
    LOCKS.save(
        deps.storage,
        token_id,
        &LockRecord {
            token_id,
            original_owner: info.sender.clone(),
            locked_at_sequence: sequence,
        },
    )?;

    let mut stats = STATS.load(deps.storage)?;
    stats.total_locked += 1;
    STATS.save(deps.storage, &stats)?;

    let take_custody = WasmMsg::Execute {
        contract_addr: config.registry.to_string(),
        msg: to_json_binary(&RegistryExecuteMsg::TransferNft {
            collection_id: config.collection_id,
            token_id,
            from: info.sender.to_string(),
            to: env.contract.address.to_string(),
        })?,
        funds: vec![],
    };

    let payload = TransferPayload {
        token_id,
        target_owner: target_owner.clone(),
        collection_id: config.collection_id,
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
        .add_message(take_custody)
        .add_message(send)
        .add_attribute("action", "lock")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("owner", info.sender)
        .add_attribute("target_owner", target_owner)
        .add_attribute(
            "destination_chain_selector",
            destination_chain_selector.to_string(),
        )
        .add_attribute("lock_sequence", sequence.to_string()))
}

// ============================================================================
// Inbound
// ============================================================================

/// Execute handler for the counterpart's burn notice.
pub fn execute_receive_message(
    deps: DepsMut,
    env: Env,
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

    // Replay protection
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
    if payload.collection_id != config.collection_id {
        return Err(ContractError::CollectionMismatch {
            expected: config.collection_id,
            got: payload.collection_id,
        });
    }

    let token_id = payload.token_id;
    let lock = LOCKS
        .may_load(deps.storage, token_id)?
        .ok_or(ContractError::NoActiveLock { token_id })?;
    let recipient =
        deps.api
            .addr_validate(&payload.target_owner)
            .map_err(|e| ContractError::InvalidAddress {
                reason: e.to_string(),
            })?;

    LOCKS.remove(deps.storage, token_id);
    PROCESSED.save(deps.storage, replay_key, &true)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.total_unlocked += 1;
    STATS.save(deps.storage, &stats)?;

    let release = WasmMsg::Execute {
        contract_addr: config.registry.to_string(),
        msg: to_json_binary(&RegistryExecuteMsg::TransferNft {
            collection_id: config.collection_id,
            token_id,
            from: env.contract.address.to_string(),
            to: recipient.to_string(),
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(release)
        .add_attribute("action", "unlock")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("recipient", recipient)
        .add_attribute("original_owner", lock.original_owner)
        .add_attribute("message_id", message.message_id.to_string())
        .add_attribute(
            "source_chain_selector",
            message.source_chain_selector.to_string(),
        ))
}
