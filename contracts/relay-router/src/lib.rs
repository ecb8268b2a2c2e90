//! Relay Router Contract - On-Chain Half of the Cross-Chain Relay
//!
//! One router runs on every chain. It is the only way pools talk to other
//! chains.
//!
//! # Outbound
//! 1. A sender calls `Send` with an opaque payload
//! 2. The router debits the relay fee from the sender's fee balance
//! 3. The message gets the next id on its lane and is stored as `Pending`
//!    in the outbox
//!
//! # Inbound
//! 1. The off-chain relayer drains the source outbox
//! 2. It calls `Deliver` on the destination router
//! 3. The router invokes the receiver's `ReceiveMessage` in the same
//!    transaction; a rejection reverts the delivery
//! 4. The relayer reports the outcome back with `ConfirmDelivery`
//!
//! The router does not deduplicate deliveries. Receivers track processed
//! message ids themselves.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
