use crate::state::{PageAction, PageState};
use activity_signup_core::{ActivityCatalog, ActivityView, StatusMessage};
use yew::functional::UseReducerDispatcher;

/// [`ActivityView`] that feeds the page reducer
pub struct ReducerView {
    dispatcher: UseReducerDispatcher<PageState>,
}

impl ReducerView {
    pub fn new(dispatcher: UseReducerDispatcher<PageState>) -> Self {
        Self { dispatcher }
    }
}

impl ActivityView for ReducerView {
    fn render_activities(&self, catalog: &ActivityCatalog) {
        self.dispatcher
            .dispatch(PageAction::ActivitiesLoaded(catalog.clone()));
    }

    fn render_load_failure(&self, notice: &str) {
        self.dispatcher
            .dispatch(PageAction::LoadFailed(notice.to_string()));
    }

    fn show_status(&self, status: &StatusMessage) {
        self.dispatcher
            .dispatch(PageAction::StatusShown(status.clone()));
    }

    fn hide_status(&self) {
        self.dispatcher.dispatch(PageAction::StatusHidden);
    }

    fn reset_form(&self) {
        self.dispatcher.dispatch(PageAction::FormReset);
    }
}
