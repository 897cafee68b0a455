pub(crate) mod ui;

pub(crate) use ui::{dialog_option_count, ActiveDialogState};
