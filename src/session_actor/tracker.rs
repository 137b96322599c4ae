//! # Order Tracker
//!
//! One background task per placed order that steps its status forward on a fixed interval.
//!
//! The task never touches the order directly. It holds a [`WeakResourceClient`] plus the
//! `(SessionId, OrderId)` pair and sends an [`SessionAction::AdvanceOrder`] per tick, so the
//! status changes go through the same message loop as every user operation.
//!
//! It stops when:
//! - the order reaches `Delivered`,
//! - the session no longer has that order (`Stale`),
//! - the session was closed or the actor failed the request,
//! - the actor is shutting down (the weak handle no longer upgrades),
//! - the session aborts it through its [`TrackerHandle`].

use crate::framework::WeakResourceClient;
use crate::model::{OrderId, Session, SessionId, TickOutcome};
use crate::session_actor::{SessionAction, SessionActionResult};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::AbortHandle;
use tokio::time::{self, Instant};
use tracing::{debug, info, warn, Instrument};

/// Why a tracker loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerExit {
    Delivered,
    Stale,
    /// The request failed: session closed or actor gone mid-call.
    Rejected,
    /// Every strong client was dropped before the next tick.
    ActorGone,
}

/// Cancellation handle for a running tracker, kept in the owning [`Session`].
///
/// Session snapshots handed out by `get` share the same handle.
#[derive(Debug, Clone)]
pub struct TrackerHandle(Arc<AbortHandle>);

impl TrackerHandle {
    pub fn abort(&self) {
        self.0.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.0.is_finished()
    }
}

/// Spawns the tracker for `order_id` on the current runtime.
pub fn spawn_tracker(
    sessions: WeakResourceClient<Session>,
    session_id: SessionId,
    order_id: OrderId,
    period: Duration,
) -> TrackerHandle {
    let span = tracing::info_span!("tracker", %session_id, %order_id);
    let task = tokio::spawn(
        async move {
            let exit = run_tracker(sessions, session_id, order_id, period).await;
            debug!(?exit, "Tracker stopped");
        }
        .instrument(span),
    );
    TrackerHandle(Arc::new(task.abort_handle()))
}

/// The tracker loop. First tick fires one `period` after the call.
pub async fn run_tracker(
    sessions: WeakResourceClient<Session>,
    session_id: SessionId,
    order_id: OrderId,
    period: Duration,
) -> TrackerExit {
    let mut ticks = time::interval_at(Instant::now() + period, period);

    loop {
        ticks.tick().await;

        let Some(client) = sessions.upgrade() else {
            return TrackerExit::ActorGone;
        };
        let result = client
            .perform_action(session_id, SessionAction::AdvanceOrder(order_id.clone()))
            .await;
        // Never hold a strong handle while sleeping.
        drop(client);

        match result {
            Ok(SessionActionResult::AdvanceOrder(TickOutcome::Advanced(status))) => {
                info!(%status, "Order advanced");
                if status.is_terminal() {
                    return TrackerExit::Delivered;
                }
            }
            Ok(SessionActionResult::AdvanceOrder(TickOutcome::AlreadyDelivered)) => {
                return TrackerExit::Delivered;
            }
            Ok(SessionActionResult::AdvanceOrder(TickOutcome::Stale)) => {
                debug!("Order no longer active");
                return TrackerExit::Stale;
            }
            Ok(other) => {
                warn!(?other, "Unexpected tick result");
                return TrackerExit::Rejected;
            }
            Err(e) => {
                debug!(error = %e, "Tick rejected");
                return TrackerExit::Rejected;
            }
        }
    }
}
