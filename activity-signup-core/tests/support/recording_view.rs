use activity_signup_core::domain::copy;
use activity_signup_core::{ActivityCatalog, ActivityView, StatusMessage};
use std::cell::RefCell;

/// What the activity list area currently shows
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListSnapshot {
    #[default]
    Loading,
    Rendered(ActivityCatalog),
    Failed(String),
}

/// In-memory stand-in for the page
#[derive(Debug, Clone, PartialEq)]
pub struct PageSnapshot {
    pub list: ListSnapshot,
    /// Dropdown option values, placeholder first
    pub options: Vec<String>,
    pub status: Option<StatusMessage>,
    pub status_visible: bool,
    pub email_field: String,
    pub activity_field: String,
    pub form_resets: usize,
    pub renders: usize,
}

impl Default for PageSnapshot {
    fn default() -> Self {
        Self {
            list: ListSnapshot::Loading,
            options: vec![String::new()],
            status: None,
            status_visible: false,
            email_field: String::new(),
            activity_field: String::new(),
            form_resets: 0,
            renders: 0,
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingView {
    page: RefCell<PageSnapshot>,
}

impl RecordingView {
    pub fn snapshot(&self) -> PageSnapshot {
        self.page.borrow().clone()
    }

    /// Type into the signup form
    pub fn fill_form(&self, email: &str, activity: &str) {
        let mut page = self.page.borrow_mut();
        page.email_field = email.to_string();
        page.activity_field = activity.to_string();
    }

    pub fn rendered_catalog(&self) -> Option<ActivityCatalog> {
        match &self.page.borrow().list {
            ListSnapshot::Rendered(catalog) => Some(catalog.clone()),
            _ => None,
        }
    }

    pub fn status_text(&self) -> Option<String> {
        self.page.borrow().status.as_ref().map(|s| s.text.clone())
    }

    pub fn status_visible(&self) -> bool {
        self.page.borrow().status_visible
    }
}

impl ActivityView for RecordingView {
    fn render_activities(&self, catalog: &ActivityCatalog) {
        let mut page = self.page.borrow_mut();
        page.list = ListSnapshot::Rendered(catalog.clone());
        page.options = std::iter::once(String::new())
            .chain(catalog.names())
            .collect();
        if catalog.get(&page.activity_field).is_none() {
            page.activity_field.clear();
        }
        page.renders += 1;
    }

    fn render_load_failure(&self, notice: &str) {
        assert_eq!(notice, copy::LOAD_FAILURE_NOTICE);
        self.page.borrow_mut().list = ListSnapshot::Failed(notice.to_string());
    }

    fn show_status(&self, status: &StatusMessage) {
        let mut page = self.page.borrow_mut();
        page.status = Some(status.clone());
        page.status_visible = true;
    }

    fn hide_status(&self) {
        self.page.borrow_mut().status_visible = false;
    }

    fn reset_form(&self) {
        let mut page = self.page.borrow_mut();
        page.email_field.clear();
        page.activity_field.clear();
        page.form_resets += 1;
    }
}
