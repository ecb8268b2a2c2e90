//! Cross-chain tests: two simulated chains, the full contract set, and the
//! delivery worker in between.

use cosmwasm_std::{Addr, Uint128};

use common::message::{CrossChainMessage, Lane, TransferPayload};
use common::registry::RegistryExecuteMsg;
use common::router::{DeliveryStatus, OutboundRecord, RouterExecuteMsg, RouterQueryMsg};
use nft_pool_burn_mint::msg::{ExecuteMsg as BurnMintExecuteMsg, TokenIdMode};
use nft_relayer::{deploy, DeliveryOutcome, DeployOptions, Deployment, Domain, RelayerConfig};

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn setup() -> Deployment {
    setup_with(DeployOptions::default())
}

fn setup_with(options: DeployOptions) -> Deployment {
    init_tracing();
    deploy(&options, RelayerConfig::default()).unwrap()
}

/// Mint origin tokens 0..count to `owner`
fn mint_many(bridge: &mut Deployment, owner: &str, count: u64) {
    for expected in 0..count {
        assert_eq!(bridge.mint_origin(owner).unwrap(), expected);
    }
}

fn outbound_record(
    bridge: &Deployment,
    source_chain_selector: u64,
    destination_chain_selector: u64,
    message_id: u64,
) -> OutboundRecord {
    let domain = bridge.relay.domain(source_chain_selector).unwrap();
    domain
        .query(
            &domain.router,
            &RouterQueryMsg::Message {
                destination_chain_selector,
                message_id,
            },
        )
        .unwrap()
}

/// Source to destination lane
fn outbound_lane(bridge: &Deployment) -> Lane {
    Lane {
        source_chain_selector: bridge.source.chain_selector,
        destination_chain_selector: bridge.destination.chain_selector,
    }
}

/// Destination back to source
fn inbound_lane(bridge: &Deployment) -> Lane {
    Lane {
        source_chain_selector: bridge.destination.chain_selector,
        destination_chain_selector: bridge.source.chain_selector,
    }
}

fn set_pool_minter(bridge: &mut Deployment, allowed: bool) {
    let deployer = bridge.deployer.clone();
    let registry = bridge.destination.registry.clone();
    let msg = RegistryExecuteMsg::SetAllowListed {
        collection_id: bridge.destination.wrapped_collection_id,
        address: bridge.destination.pool.to_string(),
        allowed,
    };
    bridge
        .destination_domain()
        .unwrap()
        .execute(&deployer, &registry, &msg)
        .unwrap();
}

fn assert_conserved(bridge: &Deployment) {
    assert_eq!(
        bridge.locked_count().unwrap(),
        bridge.wrapped_supply().unwrap(),
        "locked originals and wrapped supply diverged"
    );
}

fn alice() -> Option<Addr> {
    Some(Addr::unchecked("alice"))
}

// ============================================================================
// Round Trip
// ============================================================================

#[test]
fn test_round_trip_returns_original() {
    let mut bridge = setup();
    mint_many(&mut bridge, "alice", 6);

    bridge.approve_and_lock("alice", 5, "alice").unwrap();
    assert_eq!(bridge.origin_owner(5).unwrap(), Some(bridge.source.pool.clone()));
    assert_eq!(bridge.wrapped_owner(5).unwrap(), None);

    let report = bridge.relay.run_until_idle().unwrap();
    assert_eq!(report.delivered, 1);
    assert_eq!(bridge.wrapped_owner(5).unwrap(), alice());
    assert_conserved(&bridge);

    bridge.approve_and_burn("alice", 5, "alice").unwrap();
    assert_eq!(bridge.wrapped_owner(5).unwrap(), None);

    let report = bridge.relay.run_until_idle().unwrap();
    assert_eq!(report.delivered, 1);
    assert_eq!(bridge.origin_owner(5).unwrap(), alice());
    assert!(bridge.lock_record(5).unwrap().lock.is_none());
    assert_eq!(bridge.wrapped_supply().unwrap(), 0);
    assert_eq!(bridge.locked_count().unwrap(), 0);
}

#[test]
fn test_round_trip_to_another_owner() {
    let mut bridge = setup();
    mint_many(&mut bridge, "alice", 1);

    bridge.approve_and_lock("alice", 0, "bob").unwrap();
    bridge.relay.run_until_idle().unwrap();
    assert_eq!(bridge.wrapped_owner(0).unwrap(), Some(Addr::unchecked("bob")));

    bridge.approve_and_burn("bob", 0, "carol").unwrap();
    bridge.relay.run_until_idle().unwrap();
    assert_eq!(bridge.origin_owner(0).unwrap(), Some(Addr::unchecked("carol")));
}

#[test]
fn test_sequential_ids_round_trip() {
    let mut bridge = setup_with(DeployOptions {
        token_id_mode: TokenIdMode::Sequential,
        ..Default::default()
    });
    mint_many(&mut bridge, "alice", 4);

    bridge.approve_and_lock("alice", 3, "alice").unwrap();
    bridge.relay.run_until_idle().unwrap();
    // First wrapped token gets id 0 regardless of the origin id
    assert_eq!(bridge.wrapped_owner(0).unwrap(), alice());
    assert_eq!(bridge.wrapped_owner(3).unwrap(), None);

    bridge.approve_and_burn("alice", 0, "alice").unwrap();
    bridge.relay.run_until_idle().unwrap();
    assert_eq!(bridge.origin_owner(3).unwrap(), alice());
    assert_conserved(&bridge);
}

// ============================================================================
// Conservation
// ============================================================================

#[test]
fn test_locked_count_matches_wrapped_supply() {
    let mut bridge = setup();
    mint_many(&mut bridge, "alice", 5);

    for token_id in 0..5 {
        bridge.approve_and_lock("alice", token_id, "alice").unwrap();
        bridge.relay.run_until_idle().unwrap();
        assert_conserved(&bridge);
    }
    assert_eq!(bridge.wrapped_supply().unwrap(), 5);

    for token_id in [1, 3] {
        bridge.approve_and_burn("alice", token_id, "alice").unwrap();
        bridge.relay.run_until_idle().unwrap();
        assert_conserved(&bridge);
    }
    assert_eq!(bridge.locked_count().unwrap(), 3);

    let stats = bridge.burn_mint_stats().unwrap();
    assert_eq!(stats.total_minted, 5);
    assert_eq!(stats.total_burned, 2);
}

// ============================================================================
// Replay
// ============================================================================

#[test]
fn test_replayed_lock_message_does_not_double_mint() {
    let mut bridge = setup();
    mint_many(&mut bridge, "alice", 1);
    bridge.approve_and_lock("alice", 0, "alice").unwrap();
    bridge.relay.run_until_idle().unwrap();

    let lane = outbound_lane(&bridge);
    let err = bridge.relay.redeliver(lane, 1).unwrap_err().to_string();
    assert!(err.contains("Already processed"), "got: {}", err);

    assert_eq!(bridge.wrapped_supply().unwrap(), 1);
    assert_conserved(&bridge);
}

#[test]
fn test_replayed_burn_message_does_not_double_unlock() {
    let mut bridge = setup();
    mint_many(&mut bridge, "alice", 2);
    for token_id in [0, 1] {
        bridge.approve_and_lock("alice", token_id, "alice").unwrap();
    }
    bridge.relay.run_until_idle().unwrap();
    bridge.approve_and_burn("alice", 0, "alice").unwrap();
    bridge.relay.run_until_idle().unwrap();

    let lane = inbound_lane(&bridge);
    let err = bridge.relay.redeliver(lane, 1).unwrap_err().to_string();
    assert!(err.contains("Already processed"), "got: {}", err);

    // Token 1 is still locked and token 0 stays with alice
    assert_eq!(bridge.origin_owner(1).unwrap(), Some(bridge.source.pool.clone()));
    assert_eq!(bridge.origin_owner(0).unwrap(), alice());
    assert_eq!(bridge.locked_count().unwrap(), 1);
}

// ============================================================================
// Authorization
// ============================================================================

#[test]
fn test_forged_sender_is_unauthorized() {
    let mut bridge = setup();
    let forged = CrossChainMessage {
        message_id: 99,
        source_chain_selector: bridge.source.chain_selector,
        destination_chain_selector: bridge.destination.chain_selector,
        sender: "impostor_pool".to_string(),
        receiver: bridge.destination.pool.to_string(),
        payload: TransferPayload {
            token_id: 0,
            target_owner: "mallory".to_string(),
            collection_id: bridge.source.collection_id,
        }
        .encode()
        .unwrap(),
        fee_paid: Uint128::zero(),
    };

    let relayer = bridge.relay.relayer().clone();
    let router = bridge.destination.router.clone();
    let err = bridge
        .destination_domain()
        .unwrap()
        .execute(&relayer, &router, &RouterExecuteMsg::Deliver { message: forged })
        .unwrap_err()
        .to_string();
    assert!(err.contains("Unauthorized sender: impostor_pool"), "got: {}", err);
    assert_eq!(bridge.wrapped_supply().unwrap(), 0);
}

#[test]
fn test_redeliver_refuses_unsent_message() {
    let mut bridge = setup();
    mint_many(&mut bridge, "alice", 1);

    // Nothing was locked, so id 42 never left the source router
    let lane = outbound_lane(&bridge);
    let err = bridge.relay.redeliver(lane, 42).unwrap_err().to_string();
    assert!(err.contains("never sent"), "got: {}", err);

    assert_eq!(bridge.wrapped_supply().unwrap(), 0);
    assert_eq!(bridge.wrapped_owner(0).unwrap(), None);
    assert_eq!(bridge.origin_owner(0).unwrap(), alice());
    assert_conserved(&bridge);
}

#[test]
fn test_redeliver_refuses_pending_message() {
    let mut bridge = setup();
    mint_many(&mut bridge, "alice", 1);
    bridge.approve_and_lock("alice", 0, "alice").unwrap();

    let lane = outbound_lane(&bridge);
    let err = bridge.relay.redeliver(lane, 1).unwrap_err().to_string();
    assert!(err.contains("still pending"), "got: {}", err);
    assert_eq!(bridge.wrapped_supply().unwrap(), 0);

    // The worker still delivers it exactly once
    let report = bridge.relay.run_until_idle().unwrap();
    assert_eq!(report.delivered, 1);
    assert_eq!(bridge.wrapped_owner(0).unwrap(), alice());
    assert_conserved(&bridge);
}

#[test]
fn test_direct_call_to_burn_mint_pool_is_unauthorized() {
    let mut bridge = setup();
    let message = CrossChainMessage {
        message_id: 1,
        source_chain_selector: bridge.source.chain_selector,
        destination_chain_selector: bridge.destination.chain_selector,
        // Claims to be the real counterpart
        sender: bridge.source.pool.to_string(),
        receiver: bridge.destination.pool.to_string(),
        payload: TransferPayload {
            token_id: 0,
            target_owner: "mallory".to_string(),
            collection_id: bridge.source.collection_id,
        }
        .encode()
        .unwrap(),
        fee_paid: Uint128::zero(),
    };

    let pool = bridge.destination.pool.clone();
    let err = bridge
        .destination_domain()
        .unwrap()
        .execute(
            &Addr::unchecked("mallory"),
            &pool,
            &BurnMintExecuteMsg::ReceiveMessage { message },
        )
        .unwrap_err()
        .to_string();
    assert!(err.contains("Unauthorized sender"), "got: {}", err);
    assert_eq!(bridge.wrapped_supply().unwrap(), 0);
}

// ============================================================================
// Fees
// ============================================================================

#[test]
fn test_lock_with_insufficient_fee_keeps_token() {
    let mut bridge = setup_with(DeployOptions {
        pool_fee_funding: Uint128::zero(),
        ..Default::default()
    });
    mint_many(&mut bridge, "alice", 1);

    let err = bridge
        .approve_and_lock("alice", 0, "alice")
        .unwrap_err()
        .to_string();
    assert!(err.contains("Insufficient fee"), "got: {}", err);
    assert_eq!(bridge.origin_owner(0).unwrap(), alice());
    assert!(bridge.lock_record(0).unwrap().lock.is_none());

    let report = bridge.relay.run_until_idle().unwrap();
    assert_eq!(report.delivered, 0);
}

// ============================================================================
// Delivery Worker
// ============================================================================

#[test]
fn test_lane_delivers_in_send_order() {
    let mut bridge = setup();
    mint_many(&mut bridge, "alice", 3);
    for token_id in [2, 0, 1] {
        bridge.approve_and_lock("alice", token_id, "alice").unwrap();
    }

    assert_eq!(bridge.relay.poll().unwrap(), 3);
    let lane = Lane {
        source_chain_selector: bridge.source.chain_selector,
        destination_chain_selector: bridge.destination.chain_selector,
    };
    assert_eq!(bridge.relay.pending(&lane), 3);

    let mut delivered = vec![];
    while let Some(outcome) = bridge.relay.deliver_next(lane).unwrap() {
        match outcome {
            DeliveryOutcome::Delivered { message_id, .. } => delivered.push(message_id),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
    assert_eq!(delivered, vec![1, 2, 3]);
    assert_eq!(bridge.relay.pending(&lane), 0);

    // Polling again does not requeue delivered messages
    assert_eq!(bridge.relay.poll().unwrap(), 0);
}

#[test]
fn test_delivery_is_confirmed_on_source() {
    let mut bridge = setup();
    mint_many(&mut bridge, "alice", 1);
    bridge.approve_and_lock("alice", 0, "alice").unwrap();

    let record = outbound_record(
        &bridge,
        bridge.source.chain_selector,
        bridge.destination.chain_selector,
        1,
    );
    assert_eq!(record.status, DeliveryStatus::Pending);

    bridge.relay.run_until_idle().unwrap();
    let record = outbound_record(
        &bridge,
        bridge.source.chain_selector,
        bridge.destination.chain_selector,
        1,
    );
    assert_eq!(record.status, DeliveryStatus::Delivered);
}

#[test]
fn test_rejected_message_is_retried_on_next_pass() {
    let mut bridge = setup();
    mint_many(&mut bridge, "alice", 1);
    set_pool_minter(&mut bridge, false);

    bridge.approve_and_lock("alice", 0, "alice").unwrap();
    let report = bridge.relay.run_until_idle().unwrap();
    assert_eq!(report.delivered, 0);
    assert_eq!(report.rejected, 1);
    assert_eq!(bridge.relay.pending(&outbound_lane(&bridge)), 1);

    // Fixing the wiring between passes lets the retry through
    set_pool_minter(&mut bridge, true);
    let report = bridge.relay.run_until_idle().unwrap();
    assert_eq!(report.delivered, 1);
    assert_eq!(report.rejected, 0);

    assert_eq!(bridge.wrapped_owner(0).unwrap(), alice());
    assert!(bridge.relay.dead_letters().is_empty());
    assert_conserved(&bridge);
}

#[test]
fn test_missing_wiring_dead_letters_then_redelivers() {
    let mut bridge = setup();
    mint_many(&mut bridge, "alice", 1);
    set_pool_minter(&mut bridge, false);

    bridge.approve_and_lock("alice", 0, "alice").unwrap();
    let attempts = bridge.relay.config().max_delivery_attempts;
    for _ in 1..attempts {
        let report = bridge.relay.run_until_idle().unwrap();
        assert_eq!(report.rejected, 1);
        assert_eq!(report.dead_lettered, 0);
    }
    let report = bridge.relay.run_until_idle().unwrap();
    assert_eq!(report.delivered, 0);
    assert_eq!(report.dead_lettered, 1);
    assert_eq!(bridge.relay.pending(&outbound_lane(&bridge)), 0);

    let dead = bridge.relay.dead_letters()[0].clone();
    assert_eq!(dead.attempts, attempts);
    assert_eq!(dead.message.message_id, 1);
    assert!(dead.reason.contains("Unauthorized"), "got: {}", dead.reason);

    let record = outbound_record(
        &bridge,
        bridge.source.chain_selector,
        bridge.destination.chain_selector,
        1,
    );
    assert!(matches!(record.status, DeliveryStatus::Failed { .. }));

    // The original stays locked with nothing minted
    assert_eq!(bridge.origin_owner(0).unwrap(), Some(bridge.source.pool.clone()));
    assert_eq!(bridge.wrapped_supply().unwrap(), 0);

    set_pool_minter(&mut bridge, true);
    bridge
        .relay
        .redeliver(dead.message.lane(), dead.message.message_id)
        .unwrap();

    assert_eq!(bridge.wrapped_owner(0).unwrap(), alice());
    let record = outbound_record(
        &bridge,
        bridge.source.chain_selector,
        bridge.destination.chain_selector,
        1,
    );
    assert_eq!(record.status, DeliveryStatus::Delivered);
    assert!(bridge.relay.dead_letters().is_empty());
    assert_conserved(&bridge);
}

#[test]
fn test_duplicate_domain_is_rejected() {
    let mut bridge = setup();
    let app = cw_multi_test::App::default();
    // An app without a router cannot become a domain
    assert!(Domain::new("bogus", app, Addr::unchecked("contract0")).is_err());

    let mut other = setup();
    let selector = bridge.source.chain_selector;
    let domain = other.relay.domain_mut(selector).unwrap();
    let router = domain.router.clone();
    let app = std::mem::take(&mut domain.app);
    let clone = Domain::new("source-again", app, router).unwrap();

    let err = bridge.relay.add_domain(clone).unwrap_err().to_string();
    assert!(err.contains("already registered"), "got: {}", err);
}
