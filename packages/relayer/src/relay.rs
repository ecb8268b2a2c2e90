//! Cross-chain delivery worker.
//!
//! `CrossChainRelay` drains every router's outbox, queues messages per lane
//! and hands them to the destination router's `Deliver`. Each lane is FIFO:
//! a rejected message stays at the head and blocks its lane until the next
//! `run_until_idle` pass, so every retry sees whatever changed on the chains
//! in between. Once it runs out of attempts it is dead-lettered and marked
//! `Failed` on the source router, and the lane moves on.
//!
//! Nothing is refunded for a dead-lettered message. The source asset stays
//! locked (or burned) and the dead-letter list is the record of it.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use cosmwasm_std::Addr;
use cw_multi_test::AppResponse;
use eyre::{eyre, Result};
use tracing::{debug, error, info, warn};

use common::message::{CrossChainMessage, Lane};
use common::router::{
    DeliveryStatus, OutboundRecord, OutboxResponse, RouterExecuteMsg, RouterQueryMsg,
};

use crate::config::RelayerConfig;
use crate::domain::Domain;

/// A message waiting at a lane
#[derive(Debug, Clone)]
struct PendingDelivery {
    message: CrossChainMessage,
    attempts: u32,
}

#[derive(Debug, Default)]
struct LaneState {
    /// Highest message id pulled from the source outbox
    cursor: Option<u64>,
    queue: VecDeque<PendingDelivery>,
}

/// A message that exhausted its delivery attempts
#[derive(Debug, Clone, PartialEq)]
pub struct DeadLetter {
    pub message: CrossChainMessage,
    pub attempts: u32,
    /// Root cause of the last rejection
    pub reason: String,
}

/// Result of one delivery attempt
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryOutcome {
    Delivered {
        lane: Lane,
        message_id: u64,
    },
    /// Rejected; will be retried
    Rejected {
        lane: Lane,
        message_id: u64,
        attempts: u32,
        reason: String,
    },
    /// Rejected for the last time
    DeadLettered {
        lane: Lane,
        message_id: u64,
        reason: String,
    },
}

/// Totals of a `run_until_idle` pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    pub delivered: u32,
    pub rejected: u32,
    pub dead_lettered: u32,
}

pub struct CrossChainRelay {
    config: RelayerConfig,
    relayer: Addr,
    domains: BTreeMap<u64, Domain>,
    lanes: BTreeMap<Lane, LaneState>,
    dead_letters: Vec<DeadLetter>,
}

impl CrossChainRelay {
    pub fn new(config: RelayerConfig) -> Result<Self> {
        config.validate()?;
        let relayer = Addr::unchecked(&config.relayer_address);
        Ok(Self {
            config,
            relayer,
            domains: BTreeMap::new(),
            lanes: BTreeMap::new(),
            dead_letters: Vec::new(),
        })
    }

    pub fn config(&self) -> &RelayerConfig {
        &self.config
    }

    /// Account the worker signs deliveries with
    pub fn relayer(&self) -> &Addr {
        &self.relayer
    }

    pub fn add_domain(&mut self, domain: Domain) -> Result<()> {
        if self.domains.contains_key(&domain.chain_selector) {
            return Err(eyre!(
                "chain selector {} is already registered",
                domain.chain_selector
            ));
        }
        info!(
            name = %domain.name,
            chain_selector = domain.chain_selector,
            router = %domain.router,
            "Domain registered"
        );
        self.domains.insert(domain.chain_selector, domain);
        Ok(())
    }

    pub fn domain(&self, chain_selector: u64) -> Result<&Domain> {
        self.domains
            .get(&chain_selector)
            .ok_or_else(|| eyre!("unknown chain selector {}", chain_selector))
    }

    pub fn domain_mut(&mut self, chain_selector: u64) -> Result<&mut Domain> {
        self.domains
            .get_mut(&chain_selector)
            .ok_or_else(|| eyre!("unknown chain selector {}", chain_selector))
    }

    pub fn dead_letters(&self) -> &[DeadLetter] {
        &self.dead_letters
    }

    /// Messages queued on `lane` and not yet delivered
    pub fn pending(&self, lane: &Lane) -> usize {
        self.lanes.get(lane).map_or(0, |l| l.queue.len())
    }

    /// Lanes with queued messages, in lane order
    pub fn busy_lanes(&self) -> Vec<Lane> {
        self.lanes
            .iter()
            .filter(|(_, state)| !state.queue.is_empty())
            .map(|(lane, _)| *lane)
            .collect()
    }

    // ========================================================================
    // Polling
    // ========================================================================

    /// Pull new pending messages from every router outbox. Returns the
    /// number of messages queued.
    pub fn poll(&mut self) -> Result<usize> {
        let mut queued = 0;

        for (&source, domain) in &self.domains {
            for destination in domain.chain_config()?.remote_chains {
                if !self.domains.contains_key(&destination) {
                    continue;
                }
                let lane = Lane {
                    source_chain_selector: source,
                    destination_chain_selector: destination,
                };
                let state = self.lanes.entry(lane).or_default();

                loop {
                    let page: OutboxResponse = domain.query(
                        &domain.router,
                        &RouterQueryMsg::Outbox {
                            destination_chain_selector: destination,
                            start_after: state.cursor,
                            limit: Some(self.config.batch_size),
                        },
                    )?;
                    if page.messages.is_empty() {
                        break;
                    }

                    for record in page.messages {
                        state.cursor = Some(record.message.message_id);
                        if record.status != DeliveryStatus::Pending {
                            continue;
                        }
                        debug!(
                            lane = %lane,
                            message_id = record.message.message_id,
                            "Message queued"
                        );
                        state.queue.push_back(PendingDelivery {
                            message: record.message,
                            attempts: 0,
                        });
                        queued += 1;
                    }
                }
            }
        }

        Ok(queued)
    }

    // ========================================================================
    // Delivery
    // ========================================================================

    /// Attempt the message at the head of `lane`. `None` if the lane is idle.
    pub fn deliver_next(&mut self, lane: Lane) -> Result<Option<DeliveryOutcome>> {
        let Some(head) = self
            .lanes
            .get(&lane)
            .and_then(|state| state.queue.front())
            .cloned()
        else {
            return Ok(None);
        };
        let message_id = head.message.message_id;
        let attempts = head.attempts + 1;

        let result = self.submit(&head.message);

        let outcome = match result {
            Ok(_) => {
                self.pop_head(&lane);
                self.confirm(&lane, message_id, DeliveryStatus::Delivered)?;
                info!(lane = %lane, message_id, attempts, "Message delivered");
                DeliveryOutcome::Delivered { lane, message_id }
            }
            Err(e) => {
                let reason = e.to_string();
                warn!(
                    lane = %lane,
                    message_id,
                    attempts,
                    reason = %reason,
                    "MessageRejected"
                );

                if attempts >= self.config.max_delivery_attempts {
                    self.pop_head(&lane);
                    self.confirm(
                        &lane,
                        message_id,
                        DeliveryStatus::Failed {
                            reason: reason.clone(),
                        },
                    )?;
                    error!(
                        lane = %lane,
                        message_id,
                        attempts,
                        reason = %reason,
                        "Message dead-lettered"
                    );
                    self.dead_letters.push(DeadLetter {
                        message: head.message,
                        attempts,
                        reason: reason.clone(),
                    });
                    DeliveryOutcome::DeadLettered {
                        lane,
                        message_id,
                        reason,
                    }
                } else {
                    if let Some(front) = self
                        .lanes
                        .get_mut(&lane)
                        .and_then(|state| state.queue.front_mut())
                    {
                        front.attempts = attempts;
                    }
                    DeliveryOutcome::Rejected {
                        lane,
                        message_id,
                        attempts,
                        reason,
                    }
                }
            }
        };

        Ok(Some(outcome))
    }

    /// Poll and deliver until every lane is empty or stalled.
    ///
    /// A lane whose head is rejected is not touched again in this pass; the
    /// message gets its next attempt on the following call.
    pub fn run_until_idle(&mut self) -> Result<DeliveryReport> {
        let mut report = DeliveryReport::default();
        let mut stalled = BTreeSet::new();

        loop {
            self.poll()?;
            let lanes: Vec<Lane> = self
                .busy_lanes()
                .into_iter()
                .filter(|lane| !stalled.contains(lane))
                .collect();
            if lanes.is_empty() {
                break;
            }
            for lane in lanes {
                match self.deliver_next(lane)? {
                    Some(DeliveryOutcome::Delivered { .. }) => report.delivered += 1,
                    Some(DeliveryOutcome::Rejected { .. }) => {
                        report.rejected += 1;
                        stalled.insert(lane);
                    }
                    Some(DeliveryOutcome::DeadLettered { .. }) => {
                        report.rejected += 1;
                        report.dead_lettered += 1;
                    }
                    None => {}
                }
            }
        }

        info!(
            delivered = report.delivered,
            rejected = report.rejected,
            dead_lettered = report.dead_lettered,
            "Relay idle"
        );
        Ok(report)
    }

    /// Replay message `message_id` of `lane`, outside the lane queues.
    ///
    /// The message is read back from the source router's outbox; ids that
    /// were never sent, or are still pending in a lane, are refused. On
    /// success the source record is confirmed `Delivered` and any dead
    /// letter for it is cleared.
    pub fn redeliver(&mut self, lane: Lane, message_id: u64) -> Result<AppResponse> {
        let source = self.domain(lane.source_chain_selector)?;
        let record: OutboundRecord = source
            .query(
                &source.router,
                &RouterQueryMsg::Message {
                    destination_chain_selector: lane.destination_chain_selector,
                    message_id,
                },
            )
            .map_err(|_| eyre!("message {} was never sent on lane {}", message_id, lane))?;
        if record.status == DeliveryStatus::Pending {
            return Err(eyre!(
                "message {} on lane {} is still pending delivery",
                message_id,
                lane
            ));
        }

        info!(lane = %lane, message_id, "Redelivering message");
        let response = match self.submit(&record.message) {
            Ok(response) => response,
            Err(e) => {
                warn!(
                    lane = %lane,
                    message_id,
                    reason = %e,
                    "MessageRejected"
                );
                return Err(e);
            }
        };

        self.confirm(&lane, message_id, DeliveryStatus::Delivered)?;
        self.dead_letters
            .retain(|d| !(d.message.lane() == lane && d.message.message_id == message_id));
        info!(lane = %lane, message_id, "Message delivered");
        Ok(response)
    }

    fn submit(&mut self, message: &CrossChainMessage) -> Result<AppResponse> {
        let relayer = self.relayer.clone();
        let destination = self.domain_mut(message.destination_chain_selector)?;
        let router = destination.router.clone();
        destination.execute(
            &relayer,
            &router,
            &RouterExecuteMsg::Deliver {
                message: message.clone(),
            },
        )
    }

    fn pop_head(&mut self, lane: &Lane) {
        if let Some(state) = self.lanes.get_mut(lane) {
            state.queue.pop_front();
        }
    }

    /// Record the outcome on the source router
    fn confirm(&mut self, lane: &Lane, message_id: u64, status: DeliveryStatus) -> Result<()> {
        let relayer = self.relayer.clone();
        let source = self.domain_mut(lane.source_chain_selector)?;
        let router = source.router.clone();
        source.execute(
            &relayer,
            &router,
            &RouterExecuteMsg::ConfirmDelivery {
                destination_chain_selector: lane.destination_chain_selector,
                message_id,
                status,
            },
        )?;
        Ok(())
    }
}
