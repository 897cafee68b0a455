pub(crate) mod dialog;
pub(crate) mod handlers;
pub(crate) mod i18n;
pub(crate) mod reset;
pub(crate) mod runtime;
pub(crate) mod state;
pub(crate) mod util;
pub(crate) mod view;

pub(crate) use crate::app::state::ActiveDialogState;
use crate::app::dialog::DialogManager;
use crate::app::i18n::Messages;
use crate::app::reset::{ResetController, ResetPhase};
use crate::app::runtime::HostRuntime;
use std::sync::Arc;
use tokio::sync::watch;

/// Everything that lives for one load of the options page.
pub struct AppState {
    pub messages: Arc<Messages>,
    pub dialogs: DialogManager,
    pub dialog_changes: watch::Receiver<u64>,
    pub reset: ResetController,
    pub reset_phase: ResetPhase,
    pub active_dialog: Option<ActiveDialogState>,
    pub storage_label: String,
    pub should_exit: bool,
}

impl AppState {
    pub fn new(messages: Messages, host: Arc<dyn HostRuntime>, storage_label: String) -> Self {
        let messages = Arc::new(messages);
        let dialogs = DialogManager::new();
        let dialog_changes = dialogs.subscribe();
        let reset = ResetController::new(dialogs.clone(), host, messages.clone());
        Self {
            messages,
            dialogs,
            dialog_changes,
            reset,
            reset_phase: ResetPhase::Idle,
            active_dialog: None,
            storage_label,
            should_exit: false,
        }
    }

    pub fn is_resetting(&self) -> bool {
        self.reset_phase != ResetPhase::Idle
    }

    /// Pulls the controller's phase into the page. Returns true when it changed.
    pub fn refresh_reset_phase(&mut self) -> bool {
        let phase = self.reset.phase();
        if phase == self.reset_phase {
            return false;
        }
        self.reset_phase = phase;
        true
    }

    /// Page teardown before a reload: unanswered dialogs are dropped.
    pub fn unload(&mut self) {
        self.active_dialog = None;
        self.dialogs.teardown();
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::AppState;
    use crate::app::i18n::Messages;
    use crate::app::runtime::{HostError, HostRuntime};
    use async_trait::async_trait;
    use std::sync::Arc;

    pub(crate) struct InertHost;

    #[async_trait]
    impl HostRuntime for InertHost {
        async fn clear_storage(&self) -> Result<(), HostError> {
            Ok(())
        }

        fn reload(&self) {}
    }

    pub(crate) fn test_app() -> AppState {
        AppState::new(
            Messages::builtin(),
            Arc::new(InertHost),
            "/tmp/temple-wallet/storage".to_string(),
        )
    }
}
