use crate::app::i18n::MessageKey;
use crate::app::AppState;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::constants::{BUTTON_HEIGHT, PRIMARY_ORANGE, PRIMARY_ORANGE_LIGHTER};
use super::text::{truncate_to_width, visual_width};

pub(super) fn render_options_page(f: &mut Frame, area: Rect, app: &AppState) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let [title_area, _, button_area, _] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(BUTTON_HEIGHT),
        Constraint::Min(0),
    ])
    .areas(area);

    let title = truncate_to_width(
        app.messages.get(MessageKey::TempleWalletOptions),
        title_area.width as usize,
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        ))),
        title_area,
    );

    let label = truncate_to_width(
        app.messages.get(MessageKey::ResetExtension),
        button_area.width.saturating_sub(4) as usize,
    );
    let button_width = (visual_width(&label) as u16 + 4).min(button_area.width);
    let button_rect = Rect {
        width: button_width,
        ..button_area
    };
    let mut style = Style::default()
        .fg(PRIMARY_ORANGE_LIGHTER)
        .bg(PRIMARY_ORANGE)
        .add_modifier(Modifier::BOLD);
    if app.is_resetting() {
        style = style.add_modifier(Modifier::DIM);
    }
    let button = Paragraph::new(Line::from(format!(" {label} "))).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(PRIMARY_ORANGE)),
    );
    f.render_widget(button, button_rect);
}
