use crate::app::AppState;
use crossterm::event::{KeyCode, KeyModifiers};

/// Keys for the options page itself, only reached while no dialog is shown.
pub fn handle_options_key(app: &mut AppState, key: KeyCode, modifiers: KeyModifiers) -> bool {
    if modifiers.contains(KeyModifiers::CONTROL) || modifiers.contains(KeyModifiers::ALT) {
        return false;
    }
    match key {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r') | KeyCode::Char('R') => {
            // Repeated presses while a reset is in flight are absorbed by the controller.
            if app.reset.trigger_reset().is_some() {
                app.refresh_reset_phase();
                return true;
            }
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            app.should_exit = true;
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::handle_options_key;
    use crate::app::handlers::dialog::sync_active_dialog;
    use crate::app::reset::ResetPhase;
    use crate::app::test_support::test_app;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[tokio::test]
    async fn reset_key_opens_single_confirmation() {
        let mut app = test_app();
        assert!(handle_options_key(&mut app, KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(app.reset_phase, ResetPhase::Confirming);
        assert!(!handle_options_key(&mut app, KeyCode::Char('r'), KeyModifiers::NONE));
        assert!(!handle_options_key(&mut app, KeyCode::Enter, KeyModifiers::NONE));

        for _ in 0..10 {
            if app.dialogs.pending_len() > 0 {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert_eq!(app.dialogs.pending_len(), 1);
        assert!(sync_active_dialog(&mut app, false));
        assert_eq!(
            app.active_dialog.as_ref().expect("confirm").title,
            "Action confirmation"
        );
    }

    #[tokio::test]
    async fn quit_keys_request_exit() {
        let mut app = test_app();
        assert!(!handle_options_key(&mut app, KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert!(handle_options_key(&mut app, KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(app.should_exit);
    }
}
