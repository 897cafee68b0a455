use crate::app::AppState;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::constants::PRIMARY_ORANGE;
use super::text::truncate_to_width;

pub(super) fn build_status_line(app: &AppState, width: usize) -> Line<'static> {
    let mut segments = Vec::new();
    if app.is_resetting() {
        segments.push(format!("reset: {}", app.reset_phase.label()));
    }
    let pending = app.dialogs.pending_len();
    if pending > 1 {
        segments.push(format!("dialogs: {pending}"));
    }
    segments.push(format!("storage: {}", app.storage_label));
    if app.active_dialog.is_some() {
        segments.push("Enter choose · y/n · Esc close".to_string());
    } else {
        segments.push("Enter reset · q quit".to_string());
    }

    let style = if app.is_resetting() {
        Style::default().fg(PRIMARY_ORANGE)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };
    Line::from(Span::styled(
        truncate_to_width(&segments.join(" · "), width),
        style,
    ))
}
