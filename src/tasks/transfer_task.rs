//! src/tasks/transfer_task.rs
//! ============================================================================
//! # TransferTask: Sequential Simulated Move Workflow
//!
//! Walks the snapshot of selected entries in catalog order, strictly one at a
//! time: remove the entry, wait for the confirmation generator (bounded by
//! the configured timeout), publish the message, then move on. Never a
//! parallel fan-out; the one-entry-at-a-time log update is the point.
//!
//! The task owns no state. Every effect is an `Action` sent back to the
//! controller, which applies it on the session state in order.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::confirm::generator::{ConfirmRequest, ConfirmationGenerator};
use crate::controller::actions::Action;
use crate::error::AppError;
use crate::model::destination::Destination;

/// One queued entry, snapshotted at confirm time.
#[derive(Debug, Clone)]
pub struct TransferItem {
    pub id: String,
    pub file_name: String,
}

pub struct TransferTask {
    items: Vec<TransferItem>,
    destination: Destination,
    persona_id: String,
    generator: Arc<dyn ConfirmationGenerator>,
    confirm_timeout: Duration,
    action_tx: mpsc::UnboundedSender<Action>,
    cancel: CancellationToken,
}

impl TransferTask {
    pub fn new(
        items: Vec<TransferItem>,
        destination: Destination,
        persona_id: String,
        generator: Arc<dyn ConfirmationGenerator>,
        confirm_timeout: Duration,
        action_tx: mpsc::UnboundedSender<Action>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            items,
            destination,
            persona_id,
            generator,
            confirm_timeout,
            action_tx,
            cancel,
        }
    }

    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    async fn run(self) {
        for item in &self.items {
            // Cancellation is honored between entries, never mid-entry.
            if self.cancel.is_cancelled() {
                info!("transfer cancelled before {:?}", item.file_name);
                self.send(Action::TransferAborted);
                return;
            }

            self.send(Action::RemoveEntry {
                id: item.id.clone(),
            });

            let req = ConfirmRequest {
                file_name: item.file_name.clone(),
                destination_name: self.destination.name.clone(),
                destination_path: self.destination.path.clone(),
                persona_id: self.persona_id.clone(),
            };

            match timeout(self.confirm_timeout, self.generator.generate(&req)).await {
                Ok(message) => self.send(Action::TransferLog { message }),
                Err(_) => {
                    let err = AppError::ConfirmTimeout {
                        file: item.file_name.clone(),
                    };
                    warn!("{err}; aborting the rest of the run");
                    self.send(Action::TransferFailed {
                        error: err.to_string(),
                    });
                    return;
                }
            }
        }

        self.send(Action::TransferComplete);
    }

    fn send(&self, action: Action) {
        // The receiver only closes on shutdown; nothing useful to do then.
        if self.action_tx.send(action).is_err() {
            warn!("controller gone, dropping transfer action");
        }
    }
}

// ------------------------------------------------------------------------- //
// Tests
// ------------------------------------------------------------------------- //
