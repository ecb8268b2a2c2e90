//! Two-chain bootstrap.
//!
//! Deploys and wires a complete bridge in the order the system expects:
//! 1. a relay router on each chain
//! 2. the origin registry, collection and lock-and-release pool
//! 3. the wrapped registry, collection and burn-and-mint pool (bound to the
//!    lock-and-release pool at instantiation)
//! 4. the lock-and-release pool bound to the burn-and-mint pool
//! 5. allow-listing: burn-and-mint pool as minter on the wrapped collection,
//!    lock-and-release pool as spender on the origin collection
//! 6. relay fee funding for both pools

use cosmwasm_std::{from_json, Addr, Uint128};
use cw_multi_test::{App, Executor};
use eyre::{eyre, Result};
use tracing::info;

use common::pool::CounterpartConfig;
use common::registry::{CollectionKind, CreateCollectionResponse, RegistryExecuteMsg};
use common::router::RouterExecuteMsg;
use nft_pool_burn_mint::msg::TokenIdMode;

use crate::config::RelayerConfig;
use crate::contracts;
use crate::domain::Domain;
use crate::relay::CrossChainRelay;

pub const DEFAULT_SOURCE_CHAIN_SELECTOR: u64 = 16015286601757825753;
pub const DEFAULT_DESTINATION_CHAIN_SELECTOR: u64 = 3478487238524512106;

#[derive(Debug, Clone)]
pub struct DeployOptions {
    pub source_chain_selector: u64,
    pub destination_chain_selector: u64,
    /// Account that deploys everything and administers both collections
    pub deployer: String,
    pub fee_token: String,
    pub fee_per_message: Uint128,
    /// Faucet credit given to each pool
    pub pool_fee_funding: Uint128,
    pub token_id_mode: TokenIdMode,
}

impl Default for DeployOptions {
    fn default() -> Self {
        Self {
            source_chain_selector: DEFAULT_SOURCE_CHAIN_SELECTOR,
            destination_chain_selector: DEFAULT_DESTINATION_CHAIN_SELECTOR,
            deployer: "deployer".to_string(),
            fee_token: "link".to_string(),
            fee_per_message: Uint128::new(100),
            pool_fee_funding: Uint128::new(1_000_000),
            token_id_mode: TokenIdMode::Mirror,
        }
    }
}

/// Addresses on the origin chain
#[derive(Debug, Clone)]
pub struct SourceDeployment {
    pub chain_selector: u64,
    pub registry: Addr,
    pub router: Addr,
    pub collection_id: u64,
    pub pool: Addr,
}

/// Addresses on the wrapped chain
#[derive(Debug, Clone)]
pub struct DestinationDeployment {
    pub chain_selector: u64,
    pub registry: Addr,
    pub router: Addr,
    pub wrapped_collection_id: u64,
    pub pool: Addr,
}

/// A wired bridge and the worker relaying between its chains
pub struct Deployment {
    pub deployer: Addr,
    pub relay: CrossChainRelay,
    pub source: SourceDeployment,
    pub destination: DestinationDeployment,
}

impl Deployment {
    pub fn source_domain(&mut self) -> Result<&mut Domain> {
        self.relay.domain_mut(self.source.chain_selector)
    }

    pub fn destination_domain(&mut self) -> Result<&mut Domain> {
        self.relay.domain_mut(self.destination.chain_selector)
    }
}

pub fn deploy(options: &DeployOptions, relayer_config: RelayerConfig) -> Result<Deployment> {
    if options.source_chain_selector == options.destination_chain_selector {
        return Err(eyre!("source and destination selectors must differ"));
    }
    let deployer = Addr::unchecked(&options.deployer);
    let relayer = relayer_config.relayer_address.clone();

    // 1. Routers
    let mut source_app = App::default();
    let mut destination_app = App::default();
    let source_router = instantiate_router(
        &mut source_app,
        &deployer,
        options,
        &relayer,
        options.source_chain_selector,
        options.destination_chain_selector,
    )?;
    let destination_router = instantiate_router(
        &mut destination_app,
        &deployer,
        options,
        &relayer,
        options.destination_chain_selector,
        options.source_chain_selector,
    )?;
    let mut source = Domain::new("source", source_app, source_router.clone())?;
    let mut destination = Domain::new("destination", destination_app, destination_router.clone())?;

    // 2. Origin side
    let source_registry = instantiate_registry(&mut source.app, &deployer)?;
    let collection_id = create_collection(
        &mut source,
        &deployer,
        &source_registry,
        CollectionKind::Origin,
        Some(deployer.to_string()),
    )?;
    let lock_release_code = source.app.store_code(contracts::lock_release_pool());
    let source_pool = source
        .app
        .instantiate_contract(
            lock_release_code,
            deployer.clone(),
            &nft_pool_lock_release::msg::InstantiateMsg {
                registry: source_registry.to_string(),
                collection_id,
                router: source_router.to_string(),
                counterpart: None,
            },
            &[],
            "nft-pool-lock-release",
            None,
        )
        .map_err(|e| eyre!("lock-and-release pool: {}", e.root_cause()))?;

    // 3. Wrapped side
    let destination_registry = instantiate_registry(&mut destination.app, &deployer)?;
    let wrapped_collection_id = create_collection(
        &mut destination,
        &deployer,
        &destination_registry,
        CollectionKind::Wrapped {
            origin_chain_selector: options.source_chain_selector,
            origin_collection_id: collection_id,
        },
        None,
    )?;
    let burn_mint_code = destination.app.store_code(contracts::burn_mint_pool());
    let destination_pool = destination
        .app
        .instantiate_contract(
            burn_mint_code,
            deployer.clone(),
            &nft_pool_burn_mint::msg::InstantiateMsg {
                registry: destination_registry.to_string(),
                wrapped_collection_id,
                router: destination_router.to_string(),
                counterpart: Some(CounterpartConfig {
                    chain_selector: options.source_chain_selector,
                    pool: source_pool.to_string(),
                }),
                token_id_mode: Some(options.token_id_mode),
            },
            &[],
            "nft-pool-burn-mint",
            None,
        )
        .map_err(|e| eyre!("burn-and-mint pool: {}", e.root_cause()))?;

    // 4. Close the loop
    source.execute(
        &deployer,
        &source_pool,
        &nft_pool_lock_release::msg::ExecuteMsg::BindCounterpart {
            counterpart: CounterpartConfig {
                chain_selector: options.destination_chain_selector,
                pool: destination_pool.to_string(),
            },
        },
    )?;

    // 5. Allow-lists
    destination.execute(
        &deployer,
        &destination_registry,
        &RegistryExecuteMsg::SetAllowListed {
            collection_id: wrapped_collection_id,
            address: destination_pool.to_string(),
            allowed: true,
        },
    )?;
    source.execute(
        &deployer,
        &source_registry,
        &RegistryExecuteMsg::SetAllowListed {
            collection_id,
            address: source_pool.to_string(),
            allowed: true,
        },
    )?;

    // 6. Fees
    fund(&mut source, &deployer, &source_pool, options.pool_fee_funding)?;
    fund(&mut destination, &deployer, &destination_pool, options.pool_fee_funding)?;

    info!(
        source_pool = %source_pool,
        destination_pool = %destination_pool,
        collection_id,
        wrapped_collection_id,
        "Bridge deployed"
    );

    let source_deployment = SourceDeployment {
        chain_selector: source.chain_selector,
        registry: source_registry,
        router: source_router,
        collection_id,
        pool: source_pool,
    };
    let destination_deployment = DestinationDeployment {
        chain_selector: destination.chain_selector,
        registry: destination_registry,
        router: destination_router,
        wrapped_collection_id,
        pool: destination_pool,
    };

    let mut relay = CrossChainRelay::new(relayer_config)?;
    relay.add_domain(source)?;
    relay.add_domain(destination)?;

    Ok(Deployment {
        deployer,
        relay,
        source: source_deployment,
        destination: destination_deployment,
    })
}

fn instantiate_router(
    app: &mut App,
    deployer: &Addr,
    options: &DeployOptions,
    relayer: &str,
    chain_selector: u64,
    remote: u64,
) -> Result<Addr> {
    let code_id = app.store_code(contracts::relay_router());
    app.instantiate_contract(
        code_id,
        deployer.clone(),
        &relay_router::msg::InstantiateMsg {
            chain_selector,
            relayer: relayer.to_string(),
            fee_token: options.fee_token.clone(),
            fee_per_message: options.fee_per_message,
            remote_chains: vec![remote],
        },
        &[],
        "relay-router",
        None,
    )
    .map_err(|e| eyre!("relay router: {}", e.root_cause()))
}

fn instantiate_registry(app: &mut App, deployer: &Addr) -> Result<Addr> {
    let code_id = app.store_code(contracts::asset_registry());
    app.instantiate_contract(
        code_id,
        deployer.clone(),
        &asset_registry::msg::InstantiateMsg {},
        &[],
        "asset-registry",
        None,
    )
    .map_err(|e| eyre!("asset registry: {}", e.root_cause()))
}

fn create_collection(
    domain: &mut Domain,
    deployer: &Addr,
    registry: &Addr,
    kind: CollectionKind,
    minter: Option<String>,
) -> Result<u64> {
    let res = domain.execute(
        deployer,
        registry,
        &RegistryExecuteMsg::CreateCollection {
            name: "Cross-Chain Collectible".to_string(),
            symbol: "XNFT".to_string(),
            kind,
            minter,
        },
    )?;
    let data = res
        .data
        .ok_or_else(|| eyre!("CreateCollection returned no data"))?;
    let created: CreateCollectionResponse = from_json(data)?;
    Ok(created.collection_id)
}

fn fund(domain: &mut Domain, caller: &Addr, account: &Addr, amount: Uint128) -> Result<()> {
    if amount.is_zero() {
        return Ok(());
    }
    let router = domain.router.clone();
    domain.execute(
        caller,
        &router,
        &RouterExecuteMsg::RequestFee {
            account: account.to_string(),
            amount,
        },
    )?;
    Ok(())
}
