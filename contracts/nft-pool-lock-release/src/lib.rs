//! Lock-and-Release Pool - Source-Chain Custodian
//!
//! Takes custody of origin NFTs and announces each lock to the counterpart
//! burn-and-mint pool through the relay router. When the counterpart later
//! reports a burn, the locked original is released to the target owner.
//!
//! # Per-token state machine
//! `Unlocked -> Locked -> Unlocked`
//!
//! # Wiring
//! - The pool must be allow-listed on the origin collection before owners can
//!   approve it as operator
//! - The pool needs a fee balance on the local router to send messages
//! - The counterpart is bound once, at instantiation or via `BindCounterpart`

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
