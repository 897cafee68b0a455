use ratatui::style::Color;

pub(super) const PAGE_PADDING_X: u16 = 2;
pub(super) const PAGE_PADDING_Y: u16 = 1;
pub(super) const BUTTON_HEIGHT: u16 = 3;
pub(super) const PRIMARY_ORANGE: Color = Color::Rgb(237, 98, 37);
pub(super) const PRIMARY_ORANGE_LIGHTER: Color = Color::Rgb(255, 210, 190);
pub(super) const DIALOG_MAX_WIDTH: u16 = 64;
pub(super) const DIALOG_PADDING_X: u16 = 2;
pub(super) const DIALOG_PADDING_Y: u16 = 1;
pub(super) const DIALOG_BG: Color = Color::Rgb(40, 40, 40);
pub(super) const DIALOG_BORDER_FG: Color = Color::DarkGray;
