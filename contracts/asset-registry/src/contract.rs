//! Asset Registry Contract - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_approve, execute_burn, execute_create_collection, execute_mint,
    execute_mint_with_id, execute_revoke, execute_set_allow_listed, execute_transfer_nft,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::query::{
    query_collection, query_is_allow_listed, query_nft_info, query_owner_of, query_tokens,
};
use crate::state::{CONTRACT_NAME, CONTRACT_VERSION, NEXT_COLLECTION_ID};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    NEXT_COLLECTION_ID.save(deps.storage, &0u64)?;

    Ok(Response::new().add_attribute("action", "instantiate"))
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
        ExecuteMsg::CreateCollection {
            name,
            symbol,
            kind,
            minter,
        } => execute_create_collection(deps, info, name, symbol, kind, minter),
        ExecuteMsg::Mint {
            collection_id,
            owner,
            metadata_ref,
        } => execute_mint(deps, info, collection_id, owner, metadata_ref),
        ExecuteMsg::MintWithId {
            collection_id,
            token_id,
            owner,
            metadata_ref,
        } => execute_mint_with_id(deps, info, collection_id, token_id, owner, metadata_ref),
        ExecuteMsg::TransferNft {
            collection_id,
            token_id,
            from,
            to,
        } => execute_transfer_nft(deps, info, collection_id, token_id, from, to),
        ExecuteMsg::Approve {
            collection_id,
            token_id,
            operator,
        } => execute_approve(deps, info, collection_id, token_id, operator),
        ExecuteMsg::Revoke {
            collection_id,
            token_id,
        } => execute_revoke(deps, info, collection_id, token_id),
        ExecuteMsg::Burn {
            collection_id,
            token_id,
            owner,
        } => execute_burn(deps, info, collection_id, token_id, owner),
        ExecuteMsg::SetAllowListed {
            collection_id,
            address,
            allowed,
        } => execute_set_allow_listed(deps, info, collection_id, address, allowed),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::OwnerOf {
            collection_id,
            token_id,
        } => to_json_binary(&query_owner_of(deps, collection_id, token_id)?),
        QueryMsg::NftInfo {
            collection_id,
            token_id,
        } => to_json_binary(&query_nft_info(deps, collection_id, token_id)?),
        QueryMsg::Collection { collection_id } => {
            to_json_binary(&query_collection(deps, collection_id)?)
        }
        QueryMsg::IsAllowListed {
            collection_id,
            address,
        } => to_json_binary(&query_is_allow_listed(deps, collection_id, address)?),
        QueryMsg::Tokens {
            collection_id,
            owner,
            start_after,
            limit,
        } => to_json_binary(&query_tokens(
            deps,
            collection_id,
            owner,
            start_after,
            limit,
        )?),
    }
}
