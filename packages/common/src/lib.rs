//! Common - Shared Types for the Cross-Chain NFT Pools
//!
//! This package holds the contract-to-contract interfaces used across the
//! workspace:
//! - `message` - the cross-chain message envelope and NFT transfer payload
//! - `registry` - execute/query interface of the asset registry
//! - `router` - execute/query interface of the relay router
//! - `pool` - configuration types shared by both custody pools

pub mod message;
pub mod pool;
pub mod registry;
pub mod router;

pub use message::{CrossChainMessage, Lane, ReceiverExecuteMsg, TransferPayload};
pub use pool::{unauthorized_sender, CounterpartConfig, IsProcessedResponse};
