//! Relay Router Contract - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use common::router::ChainConfiguration;

use crate::error::ContractError;
use crate::execute::{
    execute_confirm_delivery, execute_deliver, execute_request_fee, execute_send,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::query::{
    query_chain_config, query_fee, query_fee_balance, query_message, query_next_message_id,
    query_outbox,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.chain_selector == 0 {
        return Err(ContractError::InvalidChainSelector {
            reason: "chain selector 0 is reserved".to_string(),
        });
    }
    if msg.fee_token.trim().is_empty() {
        return Err(ContractError::InvalidAmount {
            reason: "fee token must be named".to_string(),
        });
    }

    let mut remote_chains = msg.remote_chains;
    remote_chains.sort_unstable();
    remote_chains.dedup();
    if remote_chains
        .iter()
        .any(|&selector| selector == 0 || selector == msg.chain_selector)
    {
        return Err(ContractError::InvalidChainSelector {
            reason: "remote chains must be non-zero and differ from this chain".to_string(),
        });
    }

    let relayer = deps.api.addr_validate(&msg.relayer)?;
    let config = Config {
        chain: ChainConfiguration {
            chain_selector: msg.chain_selector,
            router_address: env.contract.address,
            fee_token: msg.fee_token,
            fee_per_message: msg.fee_per_message,
            remote_chains,
        },
        relayer,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("chain_selector", config.chain.chain_selector.to_string())
        .add_attribute("relayer", config.relayer)
        .add_attribute("fee_token", config.chain.fee_token)
        .add_attribute("fee_per_message", config.chain.fee_per_message))
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
        ExecuteMsg::Send {
            destination_chain_selector,
            receiver,
            payload,
        } => execute_send(deps, info, destination_chain_selector, receiver, payload),
        ExecuteMsg::Deliver { message } => execute_deliver(deps, info, message),
        ExecuteMsg::ConfirmDelivery {
            destination_chain_selector,
            message_id,
            status,
        } => execute_confirm_delivery(deps, info, destination_chain_selector, message_id, status),
        ExecuteMsg::RequestFee { account, amount } => {
            execute_request_fee(deps, account, amount)
        }
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::ChainConfig {} => to_json_binary(&query_chain_config(deps)?),
        QueryMsg::Fee {
            destination_chain_selector,
        } => to_json_binary(&query_fee(deps, destination_chain_selector)?),
        QueryMsg::FeeBalance { account } => to_json_binary(&query_fee_balance(deps, account)?),
        QueryMsg::Message {
            destination_chain_selector,
            message_id,
        } => to_json_binary(&query_message(deps, destination_chain_selector, message_id)?),
        QueryMsg::Outbox {
            destination_chain_selector,
            start_after,
            limit,
        } => to_json_binary(&query_outbox(
            deps,
            destination_chain_selector,
            start_after,
            limit,
        )?),
        QueryMsg::NextMessageId {
            destination_chain_selector,
        } => to_json_binary(&query_next_message_id(deps, destination_chain_selector)?),
    }
}
