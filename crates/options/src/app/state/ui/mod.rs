mod dialogs;

pub use dialogs::{dialog_option_count, ActiveDialogState};
