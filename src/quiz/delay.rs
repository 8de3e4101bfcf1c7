//! The validation delay.
//!
//! The engine never sleeps. It asks a [`DelayScheduler`] to call back after
//! the delay; the callback arrives as [`AppEvent::ValidationElapsed`] on the
//! main event loop, which hands it to `QuizEngine::complete_validation`.

use crate::app::event::AppEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Identifies one `validate()` call. A completion carrying any other ticket
/// than the engine's pending one is stale and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidationTicket(pub u64);

pub trait DelayScheduler {
    /// Arrange for `ticket` to be delivered back after `delay`.
    fn schedule(&mut self, ticket: ValidationTicket, delay: Duration);

    /// Drop a scheduled delivery. No-op if it already fired.
    fn cancel(&mut self, ticket: ValidationTicket);
}

/// Spawns one tokio sleep task per scheduled validation.
pub struct TokioDelay {
    event_tx: mpsc::UnboundedSender<AppEvent>,
    pending: Option<(ValidationTicket, JoinHandle<()>)>,
}

impl TokioDelay {
    pub fn new(event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            event_tx,
            pending: None,
        }
    }
}

impl DelayScheduler for TokioDelay {
    fn schedule(&mut self, ticket: ValidationTicket, delay: Duration) {
        // Only one validation can be in flight.
        if let Some((old, handle)) = self.pending.take() {
            tracing::debug!(ticket = old.0, "replacing pending validation delay");
            handle.abort();
        }

        let tx = self.event_tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(AppEvent::ValidationElapsed { ticket });
        });
        self.pending = Some((ticket, handle));
    }

    fn cancel(&mut self, ticket: ValidationTicket) {
        match self.pending.take() {
            Some((pending, handle)) if pending == ticket => {
                tracing::debug!(ticket = ticket.0, "cancelled validation delay");
                handle.abort();
            }
            other => self.pending = other,
        }
    }
}

impl Drop for TokioDelay {
    fn drop(&mut self) {
        if let Some((_, handle)) = self.pending.take() {
            handle.abort();
        }
    }
}
