//! Error types for the relay router contract

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only the relayer can perform this action")]
    Unauthorized,

    // ========================================================================
    // Routing Errors
    // ========================================================================

    #[error("Unknown destination chain: {chain_selector}")]
    UnknownDestination { chain_selector: u64 },

    #[error("Unknown source chain: {chain_selector}")]
    UnknownSource { chain_selector: u64 },

    #[error("Wrong destination: message for chain {got}, this is chain {expected}")]
    WrongDestination { expected: u64, got: u64 },

    #[error("Invalid chain selector: {reason}")]
    InvalidChainSelector { reason: String },

    #[error("Invalid receiver: {reason}")]
    InvalidReceiver { reason: String },

    #[error("Message not found: {message_id} to chain {chain_selector}")]
    MessageNotFound { chain_selector: u64, message_id: u64 },

    // ========================================================================
    // Fee Errors
    // ========================================================================

    #[error("Insufficient fee: required {required}, available {available}")]
    InsufficientFee {
        required: Uint128,
        available: Uint128,
    },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },
}
