use crate::app::util::text::wrap_line;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};
use ratatui::Frame;

use super::super::constants::{
    DIALOG_BG, DIALOG_BORDER_FG, DIALOG_MAX_WIDTH, DIALOG_PADDING_X, DIALOG_PADDING_Y,
};
use super::super::text::truncate_to_width;
use super::types::PanelView;

pub(in crate::app::view::ui) fn build_panel_render(
    panel: &PanelView,
    max_lines: u16,
    max_width: usize,
) -> Vec<Line<'static>> {
    if max_lines == 0 || panel.lines.is_empty() {
        return Vec::new();
    }

    let mut expanded: Vec<(usize, String)> = Vec::new();
    let content_width = max_width.saturating_sub(2).max(1);
    for (line_index, line) in panel.lines.iter().enumerate() {
        if line.is_empty() {
            expanded.push((line_index, String::new()));
            continue;
        }
        for wrapped in wrap_line(line, content_width) {
            expanded.push((line_index, wrapped));
        }
    }

    let total = expanded.len();
    let visible = usize::min(total, max_lines as usize);
    // Keep the choices on screen when a long message does not fit.
    let choices_start = expanded
        .iter()
        .position(|(idx, _)| *idx >= panel.choices_from)
        .unwrap_or(total);
    let start = if total - choices_start >= visible {
        choices_start.min(total - visible)
    } else {
        total - visible
    };

    let mut prev_line_index: Option<usize> = None;
    let mut out = Vec::with_capacity(visible);
    for (line_index, line) in expanded[start..start + visible].iter() {
        let is_selected_line = panel.selected == *line_index;
        let is_first_visual_line = prev_line_index != Some(*line_index);
        let mut style = Style::default();
        if is_selected_line {
            style = style.add_modifier(Modifier::BOLD);
        } else if *line_index >= panel.choices_from {
            style = style.add_modifier(Modifier::DIM);
        }
        let marker = if is_selected_line && is_first_visual_line {
            "> "
        } else {
            "  "
        };
        out.push(Line::from(Span::styled(format!("{marker}{line}"), style)));
        prev_line_index = Some(*line_index);
    }
    out
}

/// Draws the panel as a bordered box centred over `screen`.
pub(in crate::app::view::ui) fn render_dialog_panel(
    f: &mut Frame,
    screen: Rect,
    panel: &PanelView,
) {
    let chrome_x = 2 + DIALOG_PADDING_X.saturating_mul(2);
    let chrome_y = 2 + DIALOG_PADDING_Y.saturating_mul(2);
    let width = screen.width.saturating_sub(4).min(DIALOG_MAX_WIDTH);
    if width <= chrome_x || screen.height <= chrome_y {
        return;
    }

    let lines = build_panel_render(
        panel,
        screen.height - chrome_y,
        (width - chrome_x) as usize,
    );
    let height = (lines.len() as u16 + chrome_y).min(screen.height);
    let area = Rect {
        x: screen.x + (screen.width - width) / 2,
        y: screen.y + (screen.height - height) / 2,
        width,
        height,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DIALOG_BORDER_FG))
        .style(Style::default().bg(DIALOG_BG))
        .padding(Padding::new(
            DIALOG_PADDING_X,
            DIALOG_PADDING_X,
            DIALOG_PADDING_Y,
            DIALOG_PADDING_Y,
        ));
    let title = truncate_to_width(&panel.title, (width - 4) as usize);
    let block = block.title(Span::styled(
        format!(" {title} "),
        Style::default().add_modifier(Modifier::BOLD),
    ));

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}
