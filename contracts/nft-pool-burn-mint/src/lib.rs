//! Burn-and-Mint Pool - Destination-Chain Custodian
//!
//! Mints a wrapped token for every lock announced by the counterpart
//! lock-and-release pool, and burns wrapped tokens to redeem the originals.
//!
//! Wrapped ids mirror origin ids by default (`TokenIdMode::Mirror`). With
//! `TokenIdMode::Sequential` the registry assigns ids and the pool keeps the
//! wrapped-to-origin link.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
