//! Single-flight reset of the extension.
//!
//! The phase is checked and moved out of `Idle` in one locked step before the
//! flow first suspends, so at most one reset is ever confirming, clearing or
//! reporting. Any trigger seen outside `Idle` is dropped.

use crate::app::dialog::{DialogBody, DialogManager, DialogSpec};
use crate::app::i18n::{MessageKey, Messages};
use crate::app::runtime::HostRuntime;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetPhase {
    Idle,
    Confirming,
    Executing,
    Reporting,
}

impl ResetPhase {
    pub fn label(self) -> &'static str {
        match self {
            ResetPhase::Idle => "idle",
            ResetPhase::Confirming => "awaiting confirmation",
            ResetPhase::Executing => "clearing storage",
            ResetPhase::Reporting => "reset failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetOutcome {
    Declined,
    Reloaded,
    Failed { message: String },
}

#[derive(Clone)]
pub struct ResetController {
    dialogs: DialogManager,
    host: Arc<dyn HostRuntime>,
    messages: Arc<Messages>,
    phase: Arc<Mutex<ResetPhase>>,
}

impl ResetController {
    pub fn new(
        dialogs: DialogManager,
        host: Arc<dyn HostRuntime>,
        messages: Arc<Messages>,
    ) -> Self {
        Self {
            dialogs,
            host,
            messages,
            phase: Arc::new(Mutex::new(ResetPhase::Idle)),
        }
    }

    pub fn phase(&self) -> ResetPhase {
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts a reset unless one is already in flight. Must be called inside a
    /// tokio runtime. Returns `None` when the trigger was absorbed.
    pub fn trigger_reset(&self) -> Option<JoinHandle<ResetOutcome>> {
        if !self.try_begin() {
            tracing::debug!(phase = ?self.phase(), "reset already in flight");
            return None;
        }
        tracing::info!("reset requested");
        let controller = self.clone();
        Some(tokio::spawn(async move {
            let outcome = controller.run().await;
            controller.set_phase(ResetPhase::Idle);
            tracing::info!(?outcome, "reset finished");
            outcome
        }))
    }

    fn try_begin(&self) -> bool {
        let mut phase = self.phase.lock().unwrap_or_else(PoisonError::into_inner);
        if *phase != ResetPhase::Idle {
            return false;
        }
        *phase = ResetPhase::Confirming;
        true
    }

    fn set_phase(&self, next: ResetPhase) {
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner) = next;
    }

    async fn run(&self) -> ResetOutcome {
        let confirmed = self
            .dialogs
            .confirm(DialogSpec::new(
                self.messages.get(MessageKey::ActionConfirmation),
                DialogBody::Message(MessageKey::ResetExtensionConfirmation),
            ))
            .await;
        if !confirmed {
            return ResetOutcome::Declined;
        }

        self.set_phase(ResetPhase::Executing);
        match self.host.clear_storage().await {
            Ok(()) => {
                self.host.reload();
                ResetOutcome::Reloaded
            }
            Err(error) => {
                let message = error.to_string();
                tracing::warn!(error = %message, "failed to clear extension storage");
                self.set_phase(ResetPhase::Reporting);
                self.dialogs
                    .alert(DialogSpec::new(
                        self.messages.get(MessageKey::Error),
                        DialogBody::Text(message.clone()),
                    ))
                    .await;
                ResetOutcome::Failed { message }
            }
        }
    }
}
