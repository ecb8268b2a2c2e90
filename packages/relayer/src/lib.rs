//! NFT Relayer - Delivery Worker for the Cross-Chain NFT Pools
//!
//! Each chain is simulated by its own `cw-multi-test` `App` running a relay
//! router, an asset registry and one custody pool. The relayer moves
//! messages between the routers:
//!
//! 1. Poll every router's outbox for `Pending` messages
//! 2. Queue them per lane (source, destination), in message id order
//! 3. Call `Deliver` on the destination router as the relayer account
//! 4. Report the outcome back with `ConfirmDelivery` on the source router
//!
//! `deploy` bootstraps a fully wired two-chain bridge for tests and the
//! demo binary.

pub mod actions;
pub mod config;
pub mod contracts;
pub mod deploy;
pub mod domain;
pub mod relay;

pub use config::RelayerConfig;
pub use deploy::{deploy, DeployOptions, Deployment};
pub use domain::Domain;
pub use relay::{CrossChainRelay, DeadLetter, DeliveryOutcome, DeliveryReport};
