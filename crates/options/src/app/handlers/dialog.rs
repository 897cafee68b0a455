use crate::app::dialog::{DialogKind, DialogResponse};
use crate::app::state::{dialog_option_count, ActiveDialogState};
use crate::app::AppState;
use crossterm::event::KeyCode;

/// Presents the oldest pending request. Returns true when the visible dialog changed.
pub fn sync_active_dialog(app: &mut AppState, force: bool) -> bool {
    let changed = app.dialog_changes.has_changed().unwrap_or(false);
    if !changed && !force {
        return false;
    }
    app.dialog_changes.borrow_and_update();

    match app.dialogs.front() {
        Some(front) => {
            if app
                .active_dialog
                .as_ref()
                .is_some_and(|active| active.id == front.id)
            {
                return false;
            }
            app.active_dialog = Some(ActiveDialogState::from_snapshot(front, &app.messages));
            true
        }
        None => app.active_dialog.take().is_some(),
    }
}

struct DialogKeyUpdate {
    selected: usize,
    response: Option<DialogResponse>,
}

fn confirm_response_for(selected: usize) -> DialogResponse {
    if selected == 0 {
        DialogResponse::Accept
    } else {
        DialogResponse::Decline
    }
}

fn handle_dialog_select_key(kind: DialogKind, key: KeyCode, selected: usize) -> DialogKeyUpdate {
    let mut update = DialogKeyUpdate {
        selected,
        response: None,
    };
    let max_index = dialog_option_count(kind).saturating_sub(1);

    match (kind, key) {
        (DialogKind::Alert, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) => {
            update.response = Some(DialogResponse::Dismiss);
        }
        (DialogKind::Confirm, KeyCode::Up | KeyCode::Left | KeyCode::BackTab) => {
            update.selected = update.selected.saturating_sub(1);
        }
        (DialogKind::Confirm, KeyCode::Down | KeyCode::Right | KeyCode::Tab) => {
            update.selected = usize::min(update.selected + 1, max_index);
        }
        (DialogKind::Confirm, KeyCode::Char('1')) => update.selected = 0,
        (DialogKind::Confirm, KeyCode::Char('2')) => update.selected = 1,
        (DialogKind::Confirm, KeyCode::Enter | KeyCode::Char(' ')) => {
            update.response = Some(confirm_response_for(update.selected));
        }
        (DialogKind::Confirm, KeyCode::Char('y') | KeyCode::Char('Y')) => {
            update.response = Some(DialogResponse::Accept);
        }
        (DialogKind::Confirm, KeyCode::Char('n') | KeyCode::Char('N')) => {
            update.response = Some(DialogResponse::Decline);
        }
        (DialogKind::Confirm, KeyCode::Esc) => {
            update.response = Some(DialogResponse::Dismiss);
        }
        _ => {}
    }

    update
}

/// Routes a key to the visible dialog. Returns `None` when no dialog is shown,
/// otherwise whether a redraw is needed. While a dialog is shown it swallows
/// every key so the page underneath stays inert.
pub fn handle_dialog_key(app: &mut AppState, key: KeyCode) -> Option<bool> {
    let (dialog_id, kind, selected) = {
        let dialog = app.active_dialog.as_ref()?;
        (dialog.id, dialog.kind, dialog.selected)
    };

    let update = handle_dialog_select_key(kind, key, selected);

    if let Some(response) = update.response {
        app.active_dialog = None;
        app.dialogs.respond(dialog_id, response);
        sync_active_dialog(app, true);
        return Some(true);
    }

    let dialog = app.active_dialog.as_mut()?;
    let selected = update
        .selected
        .min(dialog.option_count().saturating_sub(1));
    let moved = dialog.selected != selected;
    dialog.selected = selected;
    Some(moved)
}

#[cfg(test)]
mod tests {
    use super::{handle_dialog_key, handle_dialog_select_key, sync_active_dialog};
    use crate::app::dialog::{DialogBody, DialogKind, DialogResponse, DialogSpec};
    use crate::app::test_support::test_app;
    use crossterm::event::KeyCode;

    #[test]
    fn confirm_select_moves_within_bounds() {
        let update = handle_dialog_select_key(DialogKind::Confirm, KeyCode::Down, 0);
        assert_eq!(update.selected, 1);
        let update = handle_dialog_select_key(DialogKind::Confirm, KeyCode::Down, 1);
        assert_eq!(update.selected, 1);
        let update = handle_dialog_select_key(DialogKind::Confirm, KeyCode::Up, 0);
        assert_eq!(update.selected, 0);
        assert!(update.response.is_none());
    }

    #[test]
    fn confirm_enter_follows_selection() {
        let accept = handle_dialog_select_key(DialogKind::Confirm, KeyCode::Enter, 0);
        assert_eq!(accept.response, Some(DialogResponse::Accept));
        let decline = handle_dialog_select_key(DialogKind::Confirm, KeyCode::Enter, 1);
        assert_eq!(decline.response, Some(DialogResponse::Decline));
    }

    #[test]
    fn confirm_shortcuts_answer_directly() {
        let yes = handle_dialog_select_key(DialogKind::Confirm, KeyCode::Char('y'), 1);
        assert_eq!(yes.response, Some(DialogResponse::Accept));
        let no = handle_dialog_select_key(DialogKind::Confirm, KeyCode::Char('N'), 0);
        assert_eq!(no.response, Some(DialogResponse::Decline));
        let esc = handle_dialog_select_key(DialogKind::Confirm, KeyCode::Esc, 0);
        assert_eq!(esc.response, Some(DialogResponse::Dismiss));
    }

    #[test]
    fn alert_ignores_confirm_shortcuts() {
        let update = handle_dialog_select_key(DialogKind::Alert, KeyCode::Char('y'), 0);
        assert!(update.response.is_none());
        let update = handle_dialog_select_key(DialogKind::Alert, KeyCode::Enter, 0);
        assert_eq!(update.response, Some(DialogResponse::Dismiss));
    }

    #[tokio::test]
    async fn presenter_shows_requests_one_at_a_time() {
        let mut app = test_app();
        assert!(!sync_active_dialog(&mut app, false));
        assert_eq!(handle_dialog_key(&mut app, KeyCode::Enter), None);

        let first = app.dialogs.confirm(DialogSpec::new(
            "First",
            DialogBody::Text("one".to_string()),
        ));
        let second = app.dialogs.alert(DialogSpec::new(
            "Second",
            DialogBody::Text("two".to_string()),
        ));
        assert!(sync_active_dialog(&mut app, false));
        assert_eq!(app.active_dialog.as_ref().expect("first").title, "First");
        assert!(!sync_active_dialog(&mut app, true));

        assert_eq!(handle_dialog_key(&mut app, KeyCode::Down), Some(true));
        assert_eq!(handle_dialog_key(&mut app, KeyCode::Enter), Some(true));
        assert!(!first.await);

        let active = app.active_dialog.as_ref().expect("second");
        assert_eq!(active.title, "Second");
        assert_eq!(active.kind, DialogKind::Alert);
        assert_eq!(handle_dialog_key(&mut app, KeyCode::Esc), Some(true));
        second.await;
        assert!(app.active_dialog.is_none());
        assert_eq!(app.dialogs.pending_len(), 0);
    }
}
