//! Execute handlers for the asset registry.
//!
//! This module handles:
//! - Collection creation and allow-list administration
//! - Minting (sequential and fixed-id)
//! - Approvals, transfers and burns

use cosmwasm_std::{to_json_binary, Addr, Deps, DepsMut, MessageInfo, Response};

use common::registry::{CollectionKind, CreateCollectionResponse, MintResponse};

use crate::error::ContractError;
use crate::state::{Collection, TokenInfo, ALLOW_LIST, COLLECTIONS, NEXT_COLLECTION_ID, TOKENS};

// ============================================================================
// Helpers
// ============================================================================

fn load_collection(deps: Deps, collection_id: u64) -> Result<Collection, ContractError> {
    COLLECTIONS
        .may_load(deps.storage, collection_id)?
        .ok_or(ContractError::NoSuchCollection { collection_id })
}

fn load_token(deps: Deps, collection_id: u64, token_id: u64) -> Result<TokenInfo, ContractError> {
    TOKENS
        .may_load(deps.storage, (collection_id, token_id))?
        .ok_or(ContractError::NoSuchToken {
            collection_id,
            token_id,
        })
}

fn is_allow_listed(deps: Deps, collection_id: u64, address: &Addr) -> Result<bool, ContractError> {
    Ok(ALLOW_LIST
        .may_load(deps.storage, (collection_id, address))?
        .unwrap_or(false))
}

fn can_mint(
    deps: Deps,
    collection_id: u64,
    collection: &Collection,
    caller: &Addr,
) -> Result<bool, ContractError> {
    if collection.minter.as_ref() == Some(caller) {
        return Ok(true);
    }
    is_allow_listed(deps, collection_id, caller)
}

/// Owner may always move a token. An approved operator may move it too,
/// but on origin collections only if it is also allow-listed.
fn authorize_mover(
    deps: Deps,
    collection_id: u64,
    collection: &Collection,
    token_id: u64,
    token: &TokenInfo,
    caller: &Addr,
) -> Result<(), ContractError> {
    if token.owner == *caller {
        return Ok(());
    }
    if token.approved.as_ref() != Some(caller) {
        return Err(ContractError::NotApproved { token_id });
    }
    if !collection.kind.is_wrapped() && !is_allow_listed(deps, collection_id, caller)? {
        return Err(ContractError::Unauthorized { collection_id });
    }
    Ok(())
}

// ============================================================================
// Collections
// ============================================================================

pub fn execute_create_collection(
    deps: DepsMut,
    info: MessageInfo,
    name: String,
    symbol: String,
    kind: CollectionKind,
    minter: Option<String>,
) -> Result<Response, ContractError> {
    if name.trim().is_empty() || symbol.trim().is_empty() {
        return Err(ContractError::InvalidCollection {
            reason: "name and symbol must not be empty".to_string(),
        });
    }
    if kind.is_wrapped() && minter.is_some() {
        return Err(ContractError::InvalidCollectionKind {
            reason: "wrapped collections are minted through the allow-list only".to_string(),
        });
    }
    let minter = minter
        .map(|m| deps.api.addr_validate(&m))
        .transpose()?;

    let collection_id = NEXT_COLLECTION_ID.load(deps.storage)?;
    NEXT_COLLECTION_ID.save(deps.storage, &(collection_id + 1))?;

    let collection = Collection {
        name,
        symbol,
        kind,
        admin: info.sender.clone(),
        minter,
        next_token_id: 0,
        total_supply: 0,
    };
    COLLECTIONS.save(deps.storage, collection_id, &collection)?;

    Ok(Response::new()
        .set_data(to_json_binary(&CreateCollectionResponse { collection_id })?)
        .add_attribute("action", "create_collection")
        .add_attribute("collection_id", collection_id.to_string())
        .add_attribute("symbol", collection.symbol)
        .add_attribute("admin", info.sender))
}

pub fn execute_set_allow_listed(
    deps: DepsMut,
    info: MessageInfo,
    collection_id: u64,
    address: String,
    allowed: bool,
) -> Result<Response, ContractError> {
    let collection = load_collection(deps.as_ref(), collection_id)?;
    if info.sender != collection.admin {
        return Err(ContractError::Unauthorized { collection_id });
    }

    let address = deps.api.addr_validate(&address)?;
    if allowed {
        ALLOW_LIST.save(deps.storage, (collection_id, &address), &true)?;
    } else {
        ALLOW_LIST.remove(deps.storage, (collection_id, &address));
    }

    Ok(Response::new()
        .add_attribute("action", "set_allow_listed")
        .add_attribute("collection_id", collection_id.to_string())
        .add_attribute("address", address)
        .add_attribute("allowed", allowed.to_string()))
}

// ============================================================================
// Minting
// ============================================================================

pub fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    collection_id: u64,
    owner: String,
    metadata_ref: Option<String>,
) -> Result<Response, ContractError> {
    let mut collection = load_collection(deps.as_ref(), collection_id)?;
    if !can_mint(deps.as_ref(), collection_id, &collection, &info.sender)? {
        return Err(ContractError::Unauthorized { collection_id });
    }

    let owner = deps.api.addr_validate(&owner)?;
    let token_id = collection.next_token_id;
    if TOKENS.has(deps.storage, (collection_id, token_id)) {
        return Err(ContractError::TokenExists {
            collection_id,
            token_id,
        });
    }

    mint_token(deps, collection_id, &mut collection, token_id, owner, metadata_ref)
}

pub fn execute_mint_with_id(
    deps: DepsMut,
    info: MessageInfo,
    collection_id: u64,
    token_id: u64,
    owner: String,
    metadata_ref: Option<String>,
) -> Result<Response, ContractError> {
    let mut collection = load_collection(deps.as_ref(), collection_id)?;
    if !collection.kind.is_wrapped() {
        return Err(ContractError::InvalidCollectionKind {
            reason: "fixed token ids are only allowed on wrapped collections".to_string(),
        });
    }
    if !can_mint(deps.as_ref(), collection_id, &collection, &info.sender)? {
        return Err(ContractError::Unauthorized { collection_id });
    }

    let owner = deps.api.addr_validate(&owner)?;
    if TOKENS.has(deps.storage, (collection_id, token_id)) {
        return Err(ContractError::TokenExists {
            collection_id,
            token_id,
        });
    }

    mint_token(deps, collection_id, &mut collection, token_id, owner, metadata_ref)
}

fn mint_token(
    deps: DepsMut,
    collection_id: u64,
    collection: &mut Collection,
    token_id: u64,
    owner: Addr,
    metadata_ref: Option<String>,
) -> Result<Response, ContractError> {
    let token = TokenInfo {
        owner: owner.clone(),
        approved: None,
        metadata_ref,
    };
    TOKENS.save(deps.storage, (collection_id, token_id), &token)?;

    // Sequential mints never collide with fixed-id mints
    collection.next_token_id = collection.next_token_id.max(token_id.saturating_add(1));
    collection.total_supply += 1;
    COLLECTIONS.save(deps.storage, collection_id, collection)?;

    Ok(Response::new()
        .set_data(to_json_binary(&MintResponse { token_id })?)
        .add_attribute("action", "mint")
        .add_attribute("collection_id", collection_id.to_string())
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("owner", owner))
}

// ============================================================================
// Custody
// ============================================================================

pub fn execute_approve(
    deps: DepsMut,
    info: MessageInfo,
    collection_id: u64,
    token_id: u64,
    operator: String,
) -> Result<Response, ContractError> {
    load_collection(deps.as_ref(), collection_id)?;
    let mut token = load_token(deps.as_ref(), collection_id, token_id)?;
    if token.owner != info.sender {
        return Err(ContractError::NotOwner {
            token_id,
            address: info.sender.to_string(),
        });
    }

    let operator = deps.api.addr_validate(&operator)?;
    token.approved = Some(operator.clone());
    TOKENS.save(deps.storage, (collection_id, token_id), &token)?;

    Ok(Response::new()
        .add_attribute("action", "approve")
        .add_attribute("collection_id", collection_id.to_string())
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("operator", operator))
}

pub fn execute_revoke(
    deps: DepsMut,
    info: MessageInfo,
    collection_id: u64,
    token_id: u64,
) -> Result<Response, ContractError> {
    let mut token = load_token(deps.as_ref(), collection_id, token_id)?;
    if token.owner != info.sender {
        return Err(ContractError::NotOwner {
            token_id,
            address: info.sender.to_string(),
        });
    }

    token.approved = None;
    TOKENS.save(deps.storage, (collection_id, token_id), &token)?;

    Ok(Response::new()
        .add_attribute("action", "revoke")
        .add_attribute("collection_id", collection_id.to_string())
        .add_attribute("token_id", token_id.to_string()))
}

pub fn execute_transfer_nft(
    deps: DepsMut,
    info: MessageInfo,
    collection_id: u64,
    token_id: u64,
    from: String,
    to: String,
) -> Result<Response, ContractError> {
    let collection = load_collection(deps.as_ref(), collection_id)?;
    let mut token = load_token(deps.as_ref(), collection_id, token_id)?;

    let from = deps.api.addr_validate(&from)?;
    if token.owner != from {
        return Err(ContractError::NotOwner {
            token_id,
            address: from.to_string(),
        });
    }
    authorize_mover(
        deps.as_ref(),
        collection_id,
        &collection,
        token_id,
        &token,
        &info.sender,
    )?;

    let to = deps.api.addr_validate(&to)?;
    token.owner = to.clone();
    token.approved = None;
    TOKENS.save(deps.storage, (collection_id, token_id), &token)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_nft")
        .add_attribute("collection_id", collection_id.to_string())
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("from", from)
        .add_attribute("to", to))
}

pub fn execute_burn(
    deps: DepsMut,
    info: MessageInfo,
    collection_id: u64,
    token_id: u64,
    owner: String,
) -> Result<Response, ContractError> {
    let mut collection = load_collection(deps.as_ref(), collection_id)?;
    let token = load_token(deps.as_ref(), collection_id, token_id)?;

    let owner = deps.api.addr_validate(&owner)?;
    if token.owner != owner {
        return Err(ContractError::NotOwner {
            token_id,
            address: owner.to_string(),
        });
    }
    authorize_mover(
        deps.as_ref(),
        collection_id,
        &collection,
        token_id,
        &token,
        &info.sender,
    )?;

    TOKENS.remove(deps.storage, (collection_id, token_id));
    collection.total_supply -= 1;
    COLLECTIONS.save(deps.storage, collection_id, &collection)?;

    Ok(Response::new()
        .add_attribute("action", "burn")
        .add_attribute("collection_id", collection_id.to_string())
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("owner", owner))
}
