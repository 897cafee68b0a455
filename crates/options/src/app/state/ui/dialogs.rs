use crate::app::dialog::{DialogBody, DialogId, DialogKind, DialogSnapshot};
use crate::app::i18n::{MessageKey, Messages};
use crate::app::util::text::sanitize_for_tui;

pub struct ActiveDialogState {
    pub id: DialogId,
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
    pub selected: usize,
}

impl ActiveDialogState {
    pub fn from_snapshot(snapshot: DialogSnapshot, messages: &Messages) -> Self {
        let raw = match &snapshot.body {
            DialogBody::Text(text) => text.as_str(),
            DialogBody::Message(key) => messages.get(*key),
        };
        let message = raw
            .lines()
            .map(sanitize_for_tui)
            .collect::<Vec<_>>()
            .join("\n");
        Self {
            id: snapshot.id,
            kind: snapshot.kind,
            title: sanitize_for_tui(&snapshot.title),
            message,
            confirm_label: messages.get(MessageKey::Ok).to_string(),
            cancel_label: messages.get(MessageKey::Cancel).to_string(),
            selected: 0,
        }
    }

    pub fn option_count(&self) -> usize {
        dialog_option_count(self.kind)
    }
}

pub fn dialog_option_count(kind: DialogKind) -> usize {
    match kind {
        DialogKind::Alert => 1,
        DialogKind::Confirm => 2,
    }
}
