//! Types shared by the lock-and-release and burn-and-mint pools.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;

use crate::message::CrossChainMessage;

/// The remote pool a custody pool trusts, bound once per deployment
#[cw_serde]
pub struct CounterpartConfig {
    /// Chain selector of the domain the counterpart lives on
    pub chain_selector: u64,
    /// Counterpart pool address on that domain
    pub pool: String,
}

impl CounterpartConfig {
    /// True if `(chain_selector, pool)` names this counterpart
    pub fn matches(&self, chain_selector: u64, pool: &str) -> bool {
        self.chain_selector == chain_selector && self.pool == pool
    }
}

/// Check that an inbound message was handed over by the local `router` and
/// originates from the bound `counterpart`.
///
/// Returns the offending sender when the check fails: the caller itself if
/// it is not the router, otherwise the message's source-side sender.
pub fn unauthorized_sender(
    router: &Addr,
    counterpart: Option<&CounterpartConfig>,
    caller: &Addr,
    message: &CrossChainMessage,
) -> Option<String> {
    if caller != router {
        return Some(caller.to_string());
    }
    match counterpart {
        Some(c) if c.matches(message.source_chain_selector, &message.sender) => None,
        _ => Some(message.sender.clone()),
    }
}

#[cw_serde]
pub struct IsProcessedResponse {
    pub processed: bool,
}
