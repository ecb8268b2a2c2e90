//! User-side actions and state reads on a deployed bridge.

use cosmwasm_std::{from_json, Addr};
use cw_multi_test::AppResponse;
use eyre::{eyre, Result};

use common::registry::{
    CollectionInfo, MintResponse, OwnerOfResponse, RegistryExecuteMsg, RegistryQueryMsg,
};
use nft_pool_burn_mint::msg::{
    ExecuteMsg as BurnMintExecuteMsg, QueryMsg as BurnMintQueryMsg,
    StatsResponse as BurnMintStats,
};
use nft_pool_lock_release::msg::{
    ExecuteMsg as LockReleaseExecuteMsg, LockResponse, QueryMsg as LockReleaseQueryMsg,
    StatsResponse as LockReleaseStats,
};

use crate::deploy::Deployment;

impl Deployment {
    /// Mint the next origin token to `owner`
    pub fn mint_origin(&mut self, owner: &str) -> Result<u64> {
        let deployer = self.deployer.clone();
        let registry = self.source.registry.clone();
        let collection_id = self.source.collection_id;
        let res = self.source_domain()?.execute(
            &deployer,
            &registry,
            &RegistryExecuteMsg::Mint {
                collection_id,
                owner: owner.to_string(),
                metadata_ref: None,
            },
        )?;
        let data = res.data.ok_or_else(|| eyre!("Mint returned no data"))?;
        let minted: MintResponse = from_json(data)?;
        Ok(minted.token_id)
    }

    /// Approve the lock-and-release pool for `token_id`
    pub fn approve_origin(&mut self, owner: &str, token_id: u64) -> Result<()> {
        let registry = self.source.registry.clone();
        let msg = RegistryExecuteMsg::Approve {
            collection_id: self.source.collection_id,
            token_id,
            operator: self.source.pool.to_string(),
        };
        self.source_domain()?
            .execute(&Addr::unchecked(owner), &registry, &msg)?;
        Ok(())
    }

    /// `LockAndSend` to the bound burn-and-mint pool, without approving
    pub fn lock(&mut self, owner: &str, token_id: u64, target_owner: &str) -> Result<AppResponse> {
        let pool = self.source.pool.clone();
        let msg = LockReleaseExecuteMsg::LockAndSend {
            token_id,
            target_owner: target_owner.to_string(),
            destination_chain_selector: self.destination.chain_selector,
            destination_pool: self.destination.pool.to_string(),
        };
        self.source_domain()?
            .execute(&Addr::unchecked(owner), &pool, &msg)
    }

    /// Approve the pool, then lock
    pub fn approve_and_lock(
        &mut self,
        owner: &str,
        token_id: u64,
        target_owner: &str,
    ) -> Result<AppResponse> {
        self.approve_origin(owner, token_id)?;
        self.lock(owner, token_id, target_owner)
    }

    /// Approve the burn-and-mint pool for `token_id`
    pub fn approve_wrapped(&mut self, owner: &str, token_id: u64) -> Result<()> {
        let registry = self.destination.registry.clone();
        let msg = RegistryExecuteMsg::Approve {
            collection_id: self.destination.wrapped_collection_id,
            token_id,
            operator: self.destination.pool.to_string(),
        };
        self.destination_domain()?
            .execute(&Addr::unchecked(owner), &registry, &msg)?;
        Ok(())
    }

    /// `BurnAndSend` to the bound lock-and-release pool, without approving
    pub fn burn(&mut self, owner: &str, token_id: u64, target_owner: &str) -> Result<AppResponse> {
        let pool = self.destination.pool.clone();
        let msg = BurnMintExecuteMsg::BurnAndSend {
            token_id,
            target_owner: target_owner.to_string(),
            destination_chain_selector: self.source.chain_selector,
            destination_pool: self.source.pool.to_string(),
        };
        self.destination_domain()?
            .execute(&Addr::unchecked(owner), &pool, &msg)
    }

    /// Approve the pool, then burn
    pub fn approve_and_burn(
        &mut self,
        owner: &str,
        token_id: u64,
        target_owner: &str,
    ) -> Result<AppResponse> {
        self.approve_wrapped(owner, token_id)?;
        self.burn(owner, token_id, target_owner)
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Owner of an origin token, `None` if it does not exist
    pub fn origin_owner(&self, token_id: u64) -> Result<Option<Addr>> {
        let domain = self.relay.domain(self.source.chain_selector)?;
        Ok(domain
            .query::<OwnerOfResponse>(
                &self.source.registry,
                &RegistryQueryMsg::OwnerOf {
                    collection_id: self.source.collection_id,
                    token_id,
                },
            )
            .ok()
            .map(|r| r.owner))
    }

    /// Owner of a wrapped token, `None` if it does not exist
    pub fn wrapped_owner(&self, token_id: u64) -> Result<Option<Addr>> {
        let domain = self.relay.domain(self.destination.chain_selector)?;
        Ok(domain
            .query::<OwnerOfResponse>(
                &self.destination.registry,
                &RegistryQueryMsg::OwnerOf {
                    collection_id: self.destination.wrapped_collection_id,
                    token_id,
                },
            )
            .ok()
            .map(|r| r.owner))
    }

    pub fn lock_record(&self, token_id: u64) -> Result<LockResponse> {
        self.relay.domain(self.source.chain_selector)?.query(
            &self.source.pool,
            &LockReleaseQueryMsg::Lock { token_id },
        )
    }

    /// Origin tokens currently held by the lock-and-release pool
    pub fn locked_count(&self) -> Result<u64> {
        let stats: LockReleaseStats = self
            .relay
            .domain(self.source.chain_selector)?
            .query(&self.source.pool, &LockReleaseQueryMsg::Stats {})?;
        Ok(stats.active_locks)
    }

    /// Live tokens in the wrapped collection
    pub fn wrapped_supply(&self) -> Result<u64> {
        let info: CollectionInfo = self.relay.domain(self.destination.chain_selector)?.query(
            &self.destination.registry,
            &RegistryQueryMsg::Collection {
                collection_id: self.destination.wrapped_collection_id,
            },
        )?;
        Ok(info.total_supply)
    }

    pub fn burn_mint_stats(&self) -> Result<BurnMintStats> {
        self.relay
            .domain(self.destination.chain_selector)?
            .query(&self.destination.pool, &BurnMintQueryMsg::Stats {})
    }
}
