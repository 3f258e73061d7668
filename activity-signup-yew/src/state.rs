use activity_signup_core::{ActivityCatalog, StatusMessage};
use std::rc::Rc;
use yew::prelude::*;

/// What the activity list area shows
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Loaded(ActivityCatalog),
    Failed(String),
}

/// Everything the page renders
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub list: ListState,
    /// Dropdown entries, without the placeholder
    pub options: Vec<String>,
    pub email: String,
    pub selected_activity: String,
    pub status: Option<StatusMessage>,
    pub status_visible: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            list: ListState::Loading,
            options: Vec::new(),
            email: String::new(),
            selected_activity: String::new(),
            status: None,
            status_visible: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageAction {
    ActivitiesLoaded(ActivityCatalog),
    LoadFailed(String),
    StatusShown(StatusMessage),
    StatusHidden,
    FormReset,
    EmailChanged(String),
    ActivitySelected(String),
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            PageAction::ActivitiesLoaded(catalog) => {
                next.options = catalog.names();
                // A selection that no longer exists falls back to the placeholder
                if catalog.get(&next.selected_activity).is_none() {
                    next.selected_activity.clear();
                }
                next.list = ListState::Loaded(catalog);
            }
            PageAction::LoadFailed(notice) => {
                next.list = ListState::Failed(notice);
            }
            PageAction::StatusShown(status) => {
                next.status = Some(status);
                next.status_visible = true;
            }
            PageAction::StatusHidden => {
                next.status_visible = false;
            }
            PageAction::FormReset => {
                next.email.clear();
                next.selected_activity.clear();
            }
            PageAction::EmailChanged(email) => {
                next.email = email;
            }
            PageAction::ActivitySelected(activity) => {
                next.selected_activity = activity;
            }
        }

        Rc::new(next)
    }
}
