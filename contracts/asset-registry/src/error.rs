//! Error types for the asset registry contract

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: caller lacks permission on collection {collection_id}")]
    Unauthorized { collection_id: u64 },

    #[error("Not owner: {address} does not own token {token_id}")]
    NotOwner { token_id: u64, address: String },

    #[error("Not approved: caller may not move token {token_id}")]
    NotApproved { token_id: u64 },

    // ========================================================================
    // Referential Errors
    // ========================================================================

    #[error("No such collection: {collection_id}")]
    NoSuchCollection { collection_id: u64 },

    #[error("No such token: {token_id} in collection {collection_id}")]
    NoSuchToken { collection_id: u64, token_id: u64 },

    #[error("Token already exists: {token_id} in collection {collection_id}")]
    TokenExists { collection_id: u64, token_id: u64 },

    // ========================================================================
    // Validation Errors
    // ========================================================================

    #[error("Invalid collection kind: {reason}")]
    InvalidCollectionKind { reason: String },

    #[error("Invalid collection: {reason}")]
    InvalidCollection { reason: String },
}
