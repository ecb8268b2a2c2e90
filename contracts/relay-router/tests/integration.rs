//! Integration tests for the relay router using cw-multi-test.
//!
//! These tests verify fee accounting, lane id assignment, the outbox, and
//! relayer-only delivery into a mock receiver.

use cosmwasm_std::{
    from_json, to_json_binary, Addr, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response,
    StdError, StdResult, Uint128,
};
use cw_multi_test::{App, Contract, ContractWrapper, Executor};
use cw_storage_plus::Item;

use common::message::{CrossChainMessage, ReceiverExecuteMsg};
use relay_router::msg::{
    ChainConfiguration, DeliveryStatus, ExecuteMsg, FeeBalanceResponse, FeeResponse,
    InstantiateMsg, NextMessageIdResponse, OutboundRecord, OutboxResponse, QueryMsg, SendResponse,
};

const THIS_CHAIN: u64 = 16015286601757825753;
const REMOTE_CHAIN: u64 = 3478487238524512106;
const OTHER_REMOTE: u64 = 14767482510784806043;
const FEE: u128 = 100;

// ============================================================================
// Mock Receiver
// ============================================================================

const RECEIVED: Item<Vec<u64>> = Item::new("received");

fn mock_instantiate(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: Empty,
) -> StdResult<Response> {
    Ok(Response::new())
}

fn mock_execute(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: ReceiverExecuteMsg,
) -> StdResult<Response> {
    match msg {
        ReceiverExecuteMsg::ReceiveMessage { message } => {
            if message.payload.as_slice() == b"reject" {
                return Err(StdError::generic_err("receiver rejected payload"));
            }
            let mut seen = RECEIVED.may_load(deps.storage)?.unwrap_or_default();
            seen.push(message.message_id);
            RECEIVED.save(deps.storage, &seen)?;
            Ok(Response::new())
        }
    }
}

fn mock_query(deps: Deps, _env: Env, _msg: Empty) -> StdResult<Binary> {
    to_json_binary(&RECEIVED.may_load(deps.storage)?.unwrap_or_default())
}

// ============================================================================
// Test Setup
// ============================================================================

fn contract_router() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        relay_router::contract::execute,
        relay_router::contract::instantiate,
        relay_router::contract::query,
    );
    Box::new(contract)
}

fn contract_receiver() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(mock_execute, mock_instantiate, mock_query))
}

struct Setup {
    app: App,
    router: Addr,
    receiver: Addr,
    relayer: Addr,
}

fn instantiate_msg() -> InstantiateMsg {
    InstantiateMsg {
        chain_selector: THIS_CHAIN,
        relayer: "relayer".to_string(),
        fee_token: "link".to_string(),
        fee_per_message: Uint128::new(FEE),
        remote_chains: vec![REMOTE_CHAIN, OTHER_REMOTE],
    }
}

fn setup() -> Setup {
    let mut app = App::default();
    let deployer = Addr::unchecked("deployer");

    let router_code = app.store_code(contract_router());
    let router = app
        .instantiate_contract(
            router_code,
            deployer.clone(),
            &instantiate_msg(),
            &[],
            "relay-router",
            None,
        )
        .unwrap();

    let receiver_code = app.store_code(contract_receiver());
    let receiver = app
        .instantiate_contract(receiver_code, deployer, &Empty {}, &[], "receiver", None)
        .unwrap();

    Setup {
        app,
        router,
        receiver,
        relayer: Addr::unchecked("relayer"),
    }
}

fn fund(s: &mut Setup, account: &str, amount: u128) {
    s.app
        .execute_contract(
            Addr::unchecked("anyone"),
            s.router.clone(),
            &ExecuteMsg::RequestFee {
                account: account.to_string(),
                amount: Uint128::new(amount),
            },
            &[],
        )
        .unwrap();
}

fn fee_balance(s: &Setup, account: &str) -> Uint128 {
    let res: FeeBalanceResponse = s
        .app
        .wrap()
        .query_wasm_smart(
            &s.router,
            &QueryMsg::FeeBalance {
                account: account.to_string(),
            },
        )
        .unwrap();
    res.balance
}

/// Sends a message and returns its handle, or the root cause of the failure
fn send(s: &mut Setup, sender: &str, destination: u64) -> Result<SendResponse, String> {
    let res = s
        .app
        .execute_contract(
            Addr::unchecked(sender),
            s.router.clone(),
            &ExecuteMsg::Send {
                destination_chain_selector: destination,
                receiver: "remote_pool".to_string(),
                payload: Binary::from(b"payload".to_vec()),
            },
            &[],
        )
        .map_err(|e| e.root_cause().to_string())?;
    Ok(from_json(res.data.unwrap()).unwrap())
}

fn inbound(s: &Setup, message_id: u64, payload: &[u8]) -> CrossChainMessage {
    CrossChainMessage {
        message_id,
        source_chain_selector: REMOTE_CHAIN,
        destination_chain_selector: THIS_CHAIN,
        sender: "remote_pool".to_string(),
        receiver: s.receiver.to_string(),
        payload: Binary::from(payload.to_vec()),
        fee_paid: Uint128::new(FEE),
    }
}

fn received(s: &Setup) -> Vec<u64> {
    s.app
        .wrap()
        .query_wasm_smart(&s.receiver, &Empty {})
        .unwrap()
}

// ============================================================================
// Instantiation
// ============================================================================

#[test]
fn test_chain_configuration_is_exposed() {
    let s = setup();
    let config: ChainConfiguration = s
        .app
        .wrap()
        .query_wasm_smart(&s.router, &QueryMsg::ChainConfig {})
        .unwrap();
    assert_eq!(config.chain_selector, THIS_CHAIN);
    assert_eq!(config.router_address, s.router);
    assert_eq!(config.fee_token, "link");
    assert_eq!(config.remote_chains, vec![REMOTE_CHAIN, OTHER_REMOTE]);

    let fee: FeeResponse = s
        .app
        .wrap()
        .query_wasm_smart(
            &s.router,
            &QueryMsg::Fee {
                destination_chain_selector: REMOTE_CHAIN,
            },
        )
        .unwrap();
    assert_eq!(fee.fee, Uint128::new(FEE));
}

#[test]
fn test_instantiate_rejects_self_as_remote() {
    let mut app = App::default();
    let code = app.store_code(contract_router());
    let mut msg = instantiate_msg();
    msg.remote_chains.push(THIS_CHAIN);

    let res = app.instantiate_contract(
        code,
        Addr::unchecked("deployer"),
        &msg,
        &[],
        "relay-router",
        None,
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Invalid chain selector"), "got: {}", err_str);
}

// ============================================================================
// Send
// ============================================================================

#[test]
fn test_send_to_unknown_destination_fails() {
    let mut s = setup();
    fund(&mut s, "pool", 1_000);

    let err_str = send(&mut s, "pool", 42).unwrap_err();
    assert!(err_str.contains("Unknown destination"), "got: {}", err_str);
    assert_eq!(fee_balance(&s, "pool"), Uint128::new(1_000));
}

#[test]
fn test_send_requires_fee_balance() {
    let mut s = setup();

    let err_str = send(&mut s, "pool", REMOTE_CHAIN)
        .unwrap_err();
    assert!(err_str.contains("Insufficient fee"), "got: {}", err_str);

    fund(&mut s, "pool", FEE + 1);
    send(&mut s, "pool", REMOTE_CHAIN).unwrap();
    assert_eq!(fee_balance(&s, "pool"), Uint128::new(1));

    let err_str = send(&mut s, "pool", REMOTE_CHAIN)
        .unwrap_err();
    assert!(err_str.contains("Insufficient fee"), "got: {}", err_str);
}

#[test]
fn test_message_ids_increase_per_lane() {
    let mut s = setup();
    fund(&mut s, "pool", 10 * FEE);
    fund(&mut s, "other_pool", 10 * FEE);

    assert_eq!(send(&mut s, "pool", REMOTE_CHAIN).unwrap().message_id, 1);
    assert_eq!(send(&mut s, "other_pool", REMOTE_CHAIN).unwrap().message_id, 2);
    assert_eq!(send(&mut s, "pool", REMOTE_CHAIN).unwrap().message_id, 3);
    // A different lane has its own counter
    assert_eq!(send(&mut s, "pool", OTHER_REMOTE).unwrap().message_id, 1);

    let next: NextMessageIdResponse = s
        .app
        .wrap()
        .query_wasm_smart(
            &s.router,
            &QueryMsg::NextMessageId {
                destination_chain_selector: REMOTE_CHAIN,
            },
        )
        .unwrap();
    assert_eq!(next.message_id, 4);
}

#[test]
fn test_outbox_records_pending_messages_in_order() {
    let mut s = setup();
    fund(&mut s, "pool", 10 * FEE);
    for _ in 0..3 {
        send(&mut s, "pool", REMOTE_CHAIN).unwrap();
    }

    let page: OutboxResponse = s
        .app
        .wrap()
        .query_wasm_smart(
            &s.router,
            &QueryMsg::Outbox {
                destination_chain_selector: REMOTE_CHAIN,
                start_after: Some(1),
                limit: None,
            },
        )
        .unwrap();
    let ids: Vec<u64> = page.messages.iter().map(|r| r.message.message_id).collect();
    assert_eq!(ids, vec![2, 3]);

    let record = &page.messages[0];
    assert_eq!(record.status, DeliveryStatus::Pending);
    assert_eq!(record.message.sender, "pool");
    assert_eq!(record.message.receiver, "remote_pool");
    assert_eq!(record.message.source_chain_selector, THIS_CHAIN);
    assert_eq!(record.message.destination_chain_selector, REMOTE_CHAIN);
    assert_eq!(record.message.fee_paid, Uint128::new(FEE));
}

// ============================================================================
// Deliver
// ============================================================================

#[test]
fn test_deliver_is_relayer_only() {
    let mut s = setup();
    let message = inbound(&s, 1, b"hello");

    let res = s.app.execute_contract(
        Addr::unchecked("mallory"),
        s.router.clone(),
        &ExecuteMsg::Deliver { message },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Unauthorized"), "got: {}", err_str);
    assert!(received(&s).is_empty());
}

#[test]
fn test_deliver_invokes_receiver() {
    let mut s = setup();
    for id in [1, 2] {
        let message = inbound(&s, id, b"hello");
        s.app
            .execute_contract(
                s.relayer.clone(),
                s.router.clone(),
                &ExecuteMsg::Deliver { message },
                &[],
            )
            .unwrap();
    }
    assert_eq!(received(&s), vec![1, 2]);
}

#[test]
fn test_deliver_rejection_reverts() {
    let mut s = setup();
    let message = inbound(&s, 1, b"reject");

    let res = s.app.execute_contract(
        s.relayer.clone(),
        s.router.clone(),
        &ExecuteMsg::Deliver { message },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("receiver rejected payload"), "got: {}", err_str);
    assert!(received(&s).is_empty());
}

#[test]
fn test_deliver_checks_lane_endpoints() {
    let mut s = setup();

    let mut wrong_destination = inbound(&s, 1, b"hello");
    wrong_destination.destination_chain_selector = OTHER_REMOTE;
    let res = s.app.execute_contract(
        s.relayer.clone(),
        s.router.clone(),
        &ExecuteMsg::Deliver {
            message: wrong_destination,
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Wrong destination"), "got: {}", err_str);

    let mut unknown_source = inbound(&s, 1, b"hello");
    unknown_source.source_chain_selector = 42;
    let res = s.app.execute_contract(
        s.relayer.clone(),
        s.router.clone(),
        &ExecuteMsg::Deliver {
            message: unknown_source,
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Unknown source"), "got: {}", err_str);
}

// ============================================================================
// Delivery Confirmation
// ============================================================================

#[test]
fn test_confirm_delivery_updates_status() {
    let mut s = setup();
    fund(&mut s, "pool", FEE);
    let handle = send(&mut s, "pool", REMOTE_CHAIN).unwrap();

    let confirm = ExecuteMsg::ConfirmDelivery {
        destination_chain_selector: handle.destination_chain_selector,
        message_id: handle.message_id,
        status: DeliveryStatus::Failed {
            reason: "Already processed".to_string(),
        },
    };
    let res = s.app.execute_contract(
        Addr::unchecked("mallory"),
        s.router.clone(),
        &confirm,
        &[],
    );
    assert!(res.is_err());

    s.app
        .execute_contract(s.relayer.clone(), s.router.clone(), &confirm, &[])
        .unwrap();

    let record: OutboundRecord = s
        .app
        .wrap()
        .query_wasm_smart(
            &s.router,
            &QueryMsg::Message {
                destination_chain_selector: REMOTE_CHAIN,
                message_id: handle.message_id,
            },
        )
        .unwrap();
    assert_eq!(
        record.status,
        DeliveryStatus::Failed {
            reason: "Already processed".to_string()
        }
    );

    let res = s.app.execute_contract(
        s.relayer.clone(),
        s.router.clone(),
        &ExecuteMsg::ConfirmDelivery {
            destination_chain_selector: REMOTE_CHAIN,
            message_id: 99,
            status: DeliveryStatus::Delivered,
        },
        &[],
    );
    let err_str = res.unwrap_err().root_cause().to_string();
    assert!(err_str.contains("Message not found"), "got: {}", err_str);
}

// ============================================================================
// Faucet
// ============================================================================

#[test]
fn test_faucet_accumulates_and_rejects_zero() {
    let mut s = setup();
    fund(&mut s, "pool", 10);
    fund(&mut s, "pool", 15);
    assert_eq!(fee_balance(&s, "pool"), Uint128::new(25));

    let res = s.app.execute_contract(
        Addr::unchecked("anyone"),
        s.router.clone(),
        &ExecuteMsg::RequestFee {
            account: "pool".to_string(),
            amount: Uint128::zero(),
        },
        &[],
    );
    assert!(res.is_err());
}
