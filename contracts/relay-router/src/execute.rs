//! Execute handlers for the relay router.

use cosmwasm_std::{to_json_binary, Binary, DepsMut, MessageInfo, Response, StdError, Uint128};

use common::message::{CrossChainMessage, ReceiverExecuteMsg};
use common::router::{DeliveryStatus, OutboundRecord, SendResponse};

use crate::error::ContractError;
use crate::state::{CONFIG, FEE_BALANCES, FIRST_MESSAGE_ID, NEXT_MESSAGE_ID, OUTBOX};

// ============================================================================
// Outbound
// ============================================================================

/// Charge the relay fee, assign the next id on the lane and queue the
/// message in the outbox. The returned data is the pending handle.
pub fn execute_send(
    deps: DepsMut,
    info: MessageInfo,
    destination_chain_selector: u64,
    receiver: String,
    payload: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if !config
        .chain
        .remote_chains
        .contains(&destination_chain_selector)
    {
        return Err(ContractError::UnknownDestination {
            chain_selector: destination_chain_selector,
        });
    }
    if receiver.trim().is_empty() {
        return Err(ContractError::InvalidReceiver {
            reason: "receiver must not be empty".to_string(),
        });
    }

    // Debit fee
    let fee = config.chain.fee_per_message;
    let balance = FEE_BALANCES
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();
    if balance < fee {
        return Err(ContractError::InsufficientFee {
            required: fee,
            available: balance,
        });
    }
    FEE_BALANCES.save(deps.storage, &info.sender, &(balance - fee))?;

    // Assign id
    let message_id = NEXT_MESSAGE_ID
        .may_load(deps.storage, destination_chain_selector)?
        .unwrap_or(FIRST_MESSAGE_ID);
    NEXT_MESSAGE_ID.save(deps.storage, destination_chain_selector, &(message_id + 1))?;

    let message = CrossChainMessage {
        message_id,
        source_chain_selector: config.chain.chain_selector,
        destination_chain_selector,
        sender: info.sender.to_string(),
        receiver: receiver.clone(),
        payload,
        fee_paid: fee,
    };
    OUTBOX.save(
        deps.storage,
        (destination_chain_selector, message_id),
        &OutboundRecord {
            message,
            status: DeliveryStatus::Pending,
        },
    )?;

    Ok(Response::new()
        .set_data(to_json_binary(&SendResponse {
            destination_chain_selector,
            message_id,
        })?)
        .add_attribute("action", "message_sent")
        .add_attribute("message_id", message_id.to_string())
        .add_attribute(
            "source_chain_selector",
            config.chain.chain_selector.to_string(),
        )
        .add_attribute(
            "destination_chain_selector",
            destination_chain_selector.to_string(),
        )
        .add_attribute("sender", info.sender)
        .add_attribute("receiver", receiver)
        .add_attribute("fee_paid", fee))
}

/// Record the outcome the relayer observed for an outbound message.
pub fn execute_confirm_delivery(
    deps: DepsMut,
    info: MessageInfo,
    destination_chain_selector: u64,
    message_id: u64,
    status: DeliveryStatus,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.relayer {
        return Err(ContractError::Unauthorized);
    }

    let key = (destination_chain_selector, message_id);
    let mut record =
        OUTBOX
            .may_load(deps.storage, key)?
            .ok_or(ContractError::MessageNotFound {
                chain_selector: destination_chain_selector,
                message_id,
            })?;

    let status_label = match &status {
        DeliveryStatus::Pending => "pending",
        DeliveryStatus::Delivered => "delivered",
        DeliveryStatus::Failed { .. } => "failed",
    };
    record.status = status;
    OUTBOX.save(deps.storage, key, &record)?;

    Ok(Response::new()
        .add_attribute("action", "confirm_delivery")
        .add_attribute("message_id", message_id.to_string())
        .add_attribute(
            "destination_chain_selector",
            destination_chain_selector.to_string(),
        )
        .add_attribute("status", status_label))
}

// ============================================================================
// Inbound
// ============================================================================

/// Hand an inbound message to its receiver. A receiver rejection fails the
/// whole delivery, leaving this chain untouched.
pub fn execute_deliver(
    deps: DepsMut,
    info: MessageInfo,
    message: CrossChainMessage,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.relayer {
        return Err(ContractError::Unauthorized);
    }

    if message.destination_chain_selector != config.chain.chain_selector {
        return Err(ContractError::WrongDestination {
            expected: config.chain.chain_selector,
            got: message.destination_chain_selector,
        });
    }
    if !config
        .chain
        .remote_chains
        .contains(&message.source_chain_selector)
    {
        return Err(ContractError::UnknownSource {
            chain_selector: message.source_chain_selector,
        });
    }

    let receiver =
        deps.api
            .addr_validate(&message.receiver)
            .map_err(|e| ContractError::InvalidReceiver {
                reason: e.to_string(),
            })?;

    let message_id = message.message_id;
    let source_chain_selector = message.source_chain_selector;
    let sender = message.sender.clone();
    let handoff = ReceiverExecuteMsg::ReceiveMessage { message }.into_cosmos_msg(&receiver)?;

    Ok(Response::new()
        .add_message(handoff)
        .add_attribute("action", "message_delivered")
        .add_attribute("message_id", message_id.to_string())
        .add_attribute("source_chain_selector", source_chain_selector.to_string())
        .add_attribute("sender", sender)
        .add_attribute("receiver", receiver))
}

// ============================================================================
// Faucet
// ============================================================================

/// Credit fee tokens to any account. Not present on a production router.
pub fn execute_request_fee(
    deps: DepsMut,
    account: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "amount must be greater than zero".to_string(),
        });
    }

    let account = deps.api.addr_validate(&account)?;
    let balance = FEE_BALANCES
        .may_load(deps.storage, &account)?
        .unwrap_or_default();
    let balance = balance.checked_add(amount).map_err(StdError::from)?;
    FEE_BALANCES.save(deps.storage, &account, &balance)?;

    Ok(Response::new()
        .add_attribute("action", "request_fee")
        .add_attribute("account", account)
        .add_attribute("amount", amount)
        .add_attribute("balance", balance))
}
