//! Contract code for the simulated chains.

use cosmwasm_std::Empty;
use cw_multi_test::{Contract, ContractWrapper};

pub fn asset_registry() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        asset_registry::contract::execute,
        asset_registry::contract::instantiate,
        asset_registry::contract::query,
    ))
}

pub fn relay_router() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        relay_router::contract::execute,
        relay_router::contract::instantiate,
        relay_router::contract::query,
    ))
}

pub fn lock_release_pool() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        nft_pool_lock_release::contract::execute,
        nft_pool_lock_release::contract::instantiate,
        nft_pool_lock_release::contract::query,
    ))
}

pub fn burn_mint_pool() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        nft_pool_burn_mint::contract::execute,
        nft_pool_burn_mint::contract::instantiate,
        nft_pool_burn_mint::contract::query,
    ))
}
