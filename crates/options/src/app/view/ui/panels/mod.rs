mod dialogs;
mod render;
mod types;

use crate::app::AppState;

use dialogs::build_dialog_panel_view;

pub(super) use render::render_dialog_panel;
pub(super) use types::PanelView;

pub(super) fn build_panel_view(app: &AppState) -> Option<PanelView> {
    app.active_dialog.as_ref().map(build_dialog_panel_view)
}
