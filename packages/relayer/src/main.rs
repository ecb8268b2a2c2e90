//! NFT Relayer demo
//!
//! Deploys a two-chain bridge, moves one token to the wrapped chain and back,
//! and logs every step.

use nft_relayer::{deploy, DeployOptions, RelayerConfig};
use tracing::info;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    init_logging();

    let config = RelayerConfig::load()?;
    info!(
        relayer = %config.relayer_address,
        max_delivery_attempts = config.max_delivery_attempts,
        batch_size = config.batch_size,
        "Configuration loaded"
    );

    let mut bridge = deploy(&DeployOptions::default(), config)?;

    let token_id = bridge.mint_origin("alice")?;
    bridge.approve_and_lock("alice", token_id, "alice")?;
    let outbound = bridge.relay.run_until_idle()?;
    let wrapped_owner = bridge.wrapped_owner(token_id)?;
    info!(
        token_id,
        delivered = outbound.delivered,
        wrapped_owner = ?wrapped_owner,
        "Token bridged"
    );

    bridge.approve_and_burn("alice", token_id, "alice")?;
    let inbound = bridge.relay.run_until_idle()?;
    let origin_owner = bridge.origin_owner(token_id)?;
    let locked = bridge.locked_count()?;
    let wrapped_supply = bridge.wrapped_supply()?;
    info!(
        token_id,
        delivered = inbound.delivered,
        origin_owner = ?origin_owner,
        locked,
        wrapped_supply,
        "Token redeemed"
    );

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,nft_relayer=debug"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();
}
