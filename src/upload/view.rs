use crate::upload::types::StatusClass;

/// The surface an upload reports to.
///
/// `set_loading(true)` shows the spinner and disables the upload trigger,
/// `set_loading(false)` undoes both.
pub trait StatusView {
    fn set_status(&mut self, text: &str, class: StatusClass);
    fn set_loading(&mut self, loading: bool);
}
