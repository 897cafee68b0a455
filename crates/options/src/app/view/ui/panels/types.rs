pub(in crate::app::view::ui) struct PanelView {
    pub(super) title: String,
    pub(super) lines: Vec<String>,
    pub(super) selected: usize,
    /// Index of the first choice line; everything before it is the message.
    pub(super) choices_from: usize,
}
