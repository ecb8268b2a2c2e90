//! Message types for the lock-and-release pool

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

use common::message::CrossChainMessage;
pub use common::pool::{CounterpartConfig, IsProcessedResponse};

pub use crate::state::LockRecord;

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Asset registry address
    pub registry: String,
    /// Origin collection to take custody of
    pub collection_id: u64,
    /// Local relay router address
    pub router: String,
    /// Counterpart burn-and-mint pool, if already deployed
    pub counterpart: Option<CounterpartConfig>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Lock `token_id` in the pool and announce it to the counterpart
    ///
    /// The caller must own the token and have approved this pool.
    LockAndSend {
        token_id: u64,
        /// Recipient of the wrapped token on the destination chain
        target_owner: String,
        destination_chain_selector: u64,
        destination_pool: String,
    },

    /// Inbound handler called by the local router
    ///
    /// Releases the locked token named in the payload.
    ReceiveMessage { message: CrossChainMessage },

    /// Bind the counterpart pool (once)
    ///
    /// Authorization: owner
    BindCounterpart { counterpart: CounterpartConfig },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(LockResponse)]
    Lock { token_id: u64 },

    /// Active locks, ascending by token id
    #[returns(LocksResponse)]
    Locks {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    #[returns(IsProcessedResponse)]
    IsProcessed {
        source_chain_selector: u64,
        message_id: u64,
    },

    #[returns(StatsResponse)]
    Stats {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub registry: Addr,
    pub collection_id: u64,
    pub router: Addr,
    pub chain_selector: u64,
    pub counterpart: Option<CounterpartConfig>,
}

#[cw_serde]
pub struct LockResponse {
    pub lock: Option<LockRecord>,
}

#[cw_serde]
pub struct LocksResponse {
    pub locks: Vec<LockRecord>,
}

#[cw_serde]
pub struct StatsResponse {
    /// Tokens currently held by the pool
    pub active_locks: u64,
    pub total_locked: u64,
    pub total_unlocked: u64,
}
