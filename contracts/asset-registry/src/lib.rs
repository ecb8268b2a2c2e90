//! Asset Registry Contract - Ownership Ledger for Unique Tokens
//!
//! One registry instance per chain hosts any number of collections. A
//! collection is either an `Origin` collection (the real assets) or a
//! `Wrapped` collection (representations of assets locked on another chain).
//!
//! # Minting
//! - Origin collections: designated minter or allow-listed accounts
//! - Wrapped collections: allow-listed accounts only (the burn-and-mint pool)
//!
//! # Custody
//! - Owners approve a single operator per token; the approval is cleared on
//!   every transfer
//! - On origin collections an operator must also be allow-listed, so only
//!   wired-up pools can take custody

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
