use crate::app::dialog::DialogKind;
use crate::app::ActiveDialogState;

use super::types::PanelView;

pub(super) fn build_dialog_panel_view(dialog: &ActiveDialogState) -> PanelView {
    let mut lines = Vec::new();
    if !dialog.message.trim().is_empty() {
        lines.extend(dialog.message.lines().map(|line| line.to_string()));
        lines.push(String::new());
    }
    let option_start = lines.len();
    match dialog.kind {
        DialogKind::Confirm => {
            lines.push(format!("1. {}", dialog.confirm_label));
            lines.push(format!("2. {}", dialog.cancel_label));
        }
        DialogKind::Alert => lines.push(dialog.confirm_label.clone()),
    }
    let max_index = dialog.option_count().saturating_sub(1);
    PanelView {
        title: dialog.title.clone(),
        lines,
        selected: option_start + dialog.selected.min(max_index),
        choices_from: option_start,
    }
}

#[cfg(test)]
mod tests {
    use super::build_dialog_panel_view;
    use crate::app::dialog::{DialogBody, DialogManager, DialogSpec};
    use crate::app::i18n::Messages;
    use crate::app::ActiveDialogState;

    fn active(spec: DialogSpec, confirm: bool) -> ActiveDialogState {
        let manager = DialogManager::new();
        if confirm {
            drop(manager.confirm(spec));
        } else {
            drop(manager.alert(spec));
        }
        ActiveDialogState::from_snapshot(manager.front().expect("front"), &Messages::builtin())
    }

    #[test]
    fn confirm_panel_lists_both_choices_after_message() {
        let mut dialog = active(
            DialogSpec::new("Action confirmation", DialogBody::Text("Sure?\nReally?".into())),
            true,
        );
        dialog.selected = 1;
        let view = build_dialog_panel_view(&dialog);
        assert_eq!(view.title, "Action confirmation");
        assert_eq!(view.lines, vec!["Sure?", "Really?", "", "1. OK", "2. Cancel"]);
        assert_eq!(view.selected, 4);
        assert_eq!(view.choices_from, 3);
    }

    #[test]
    fn alert_panel_without_message_only_has_ok() {
        let dialog = active(DialogSpec::new("Error", DialogBody::Text("  ".into())), false);
        let view = build_dialog_panel_view(&dialog);
        assert_eq!(view.lines, vec!["OK"]);
        assert_eq!(view.selected, 0);
        assert_eq!(view.choices_from, 0);
    }
}
