//! Error types for the lock-and-release pool

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only the pool owner can perform this action")]
    Unauthorized,

    // ========================================================================
    // Inbound Errors
    // ========================================================================

    #[error("Unauthorized sender: {sender}")]
    UnauthorizedSender { sender: String },

    #[error("Already processed: message {message_id} from chain {source_chain_selector}")]
    AlreadyProcessed {
        source_chain_selector: u64,
        message_id: u64,
    },

    #[error("Invalid payload: {reason}")]
    InvalidPayload { reason: String },

    #[error("Collection mismatch: expected {expected}, got {got}")]
    CollectionMismatch { expected: u64, got: u64 },

    #[error("No active lock for token {token_id}")]
    NoActiveLock { token_id: u64 },

    // ========================================================================
    // Outbound Errors
    // ========================================================================

    #[error("Token {token_id} is already locked")]
    AlreadyLocked { token_id: u64 },

    #[error("Unknown destination pool: {pool} on chain {chain_selector}")]
    UnknownDestinationPool { chain_selector: u64, pool: String },

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    // ========================================================================
    // Configuration Errors
    // ========================================================================

    #[error("Counterpart already bound")]
    CounterpartAlreadyBound,

    #[error("Invalid counterpart: {reason}")]
    InvalidCounterpart { reason: String },

    #[error("Invalid collection kind: {reason}")]
    InvalidCollectionKind { reason: String },
}
