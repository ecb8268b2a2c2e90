//! Message types for the burn-and-mint pool

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

use common::message::CrossChainMessage;
pub use common::pool::{CounterpartConfig, IsProcessedResponse};

pub use crate::state::TokenIdMode;

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Asset registry address
    pub registry: String,
    /// Wrapped collection to mint into (must be of kind `Wrapped`)
    pub wrapped_collection_id: u64,
    /// Local relay router address
    pub router: String,
    /// Counterpart lock-and-release pool, if already deployed
    pub counterpart: Option<CounterpartConfig>,
    /// Defaults to `Mirror`
    pub token_id_mode: Option<TokenIdMode>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Burn a wrapped token and ask the counterpart to release the original
    ///
    /// The caller must own the token and have approved this pool.
    BurnAndSend {
        token_id: u64,
        /// Recipient of the original on the origin chain
        target_owner: String,
        destination_chain_selector: u64,
        destination_pool: String,
    },

    /// Inbound handler called by the local router
    ///
    /// Mints the wrapped token named in the payload.
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

    #[returns(IsProcessedResponse)]
    IsProcessed {
        source_chain_selector: u64,
        message_id: u64,
    },

    /// Origin id behind an outstanding wrapped token
    #[returns(OriginTokenIdResponse)]
    OriginTokenId { wrapped_token_id: u64 },

    #[returns(StatsResponse)]
    Stats {},
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub registry: Addr,
    pub wrapped_collection_id: u64,
    pub origin_collection_id: u64,
    pub origin_chain_selector: u64,
    pub router: Addr,
    pub chain_selector: u64,
    pub token_id_mode: TokenIdMode,
    pub counterpart: Option<CounterpartConfig>,
}

#[cw_serde]
pub struct OriginTokenIdResponse {
    pub origin_token_id: Option<u64>,
}

#[cw_serde]
pub struct StatsResponse {
    /// Wrapped tokens currently outstanding
    pub outstanding: u64,
    pub total_minted: u64,
    pub total_burned: u64,
}
