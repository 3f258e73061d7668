use crate::domain::{ActivityCatalog, StatusMessage};

/// The page elements the client drives.
///
/// The browser implementation updates the rendered page; tests substitute
/// an in-memory recorder.
pub trait ActivityView {
    /// Replace the card list and the dropdown options with `catalog`
    fn render_activities(&self, catalog: &ActivityCatalog);

    /// Replace the card list with a failure notice. The dropdown is left as is.
    fn render_load_failure(&self, notice: &str);

    /// Show `status` with its styling, replacing any previous message
    fn show_status(&self, status: &StatusMessage);

    /// Hide the status element without clearing its text
    fn hide_status(&self);

    /// Clear the signup form fields
    fn reset_form(&self);
}
