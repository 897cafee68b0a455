mod constants;
mod page;
mod panels;
mod status;
mod text;

use crate::app::AppState;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use self::constants::{PAGE_PADDING_X, PAGE_PADDING_Y};
use self::page::render_options_page;
use self::panels::{build_panel_view, render_dialog_panel};
use self::status::build_status_line;

pub fn draw_ui(f: &mut Frame, app: &AppState) {
    let size = f.area();
    if size.width == 0 || size.height == 0 {
        return;
    }

    // `Paragraph` doesn't overwrite every cell, so a dismissed dialog would leave ghost text.
    f.render_widget(Clear, size);

    let [body, status] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(size);
    let page = Rect {
        x: body.x + PAGE_PADDING_X.min(body.width / 2),
        y: body.y + PAGE_PADDING_Y.min(body.height / 2),
        width: body.width.saturating_sub(PAGE_PADDING_X.saturating_mul(2)),
        height: body.height.saturating_sub(PAGE_PADDING_Y.saturating_mul(2)),
    };
    render_options_page(f, page, app);
    f.render_widget(
        Paragraph::new(build_status_line(app, status.width as usize)),
        status,
    );

    if let Some(panel) = build_panel_view(app) {
        render_dialog_panel(f, size, &panel);
    }
}
