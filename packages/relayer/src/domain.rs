//! A simulated chain: one `App` with its relay router.
//!
//! Domains share no state. Each execution is atomic: a failing submessage
//! reverts everything the transaction did on that domain.

use std::fmt::Debug;

use cosmwasm_std::Addr;
use cw_multi_test::{App, AppResponse, Executor};
use eyre::{eyre, Result};
use serde::{de::DeserializeOwned, Serialize};

use common::router::ChainConfiguration;
use relay_router::msg::QueryMsg as RouterQueryMsg;

pub struct Domain {
    /// Human-readable label used in logs
    pub name: String,
    pub chain_selector: u64,
    pub app: App,
    pub router: Addr,
}

impl Domain {
    /// Wrap an app whose router is already instantiated. The selector is
    /// read back from the router.
    pub fn new(name: impl Into<String>, app: App, router: Addr) -> Result<Self> {
        let config: ChainConfiguration = app
            .wrap()
            .query_wasm_smart(&router, &RouterQueryMsg::ChainConfig {})
            .map_err(|e| eyre!("router {} is not a relay router: {}", router, e))?;

        Ok(Self {
            name: name.into(),
            chain_selector: config.chain_selector,
            app,
            router,
        })
    }

    /// Execute `msg` on `contract` as `sender`. Errors carry the contract's
    /// root cause, which is what rejections are reported with.
    pub fn execute<T: Serialize + Debug>(
        &mut self,
        sender: &Addr,
        contract: &Addr,
        msg: &T,
    ) -> Result<AppResponse> {
        self.app
            .execute_contract(sender.clone(), contract.clone(), msg, &[])
            .map_err(|e| eyre!("{}", e.root_cause()))
    }

    pub fn query<T: DeserializeOwned>(&self, contract: &Addr, msg: &impl Serialize) -> Result<T> {
        self.app
            .wrap()
            .query_wasm_smart(contract, msg)
            .map_err(|e| eyre!("query on {} failed: {}", self.name, e))
    }

    pub fn chain_config(&self) -> Result<ChainConfiguration> {
        self.query(&self.router, &RouterQueryMsg::ChainConfig {})
    }
}

impl Debug for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Domain")
            .field("name", &self.name)
            .field("chain_selector", &self.chain_selector)
            .field("router", &self.router)
            .finish()
    }
}
