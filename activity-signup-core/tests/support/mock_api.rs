use activity_signup_core::infrastructure::Result;
use activity_signup_core::{ActivityApi, ActivityCatalog, ApiError};
use async_trait::async_trait;
use futures::channel::oneshot;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

/// Calls observed by the mock, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Fetch,
    Signup { activity: String, email: String },
    Unregister { activity: String, email: String },
}

/// In-memory activities API following the real server's rules
pub struct MockActivityApi {
    catalog: RefCell<ActivityCatalog>,
    calls: RefCell<Vec<ApiCall>>,
    fetches: Cell<usize>,
    /// Gate for the next fetch; the response waits until the sender fires
    held_fetch: RefCell<Option<oneshot::Receiver<()>>>,
    /// Errors returned instead of contacting the backend
    injected: RefCell<VecDeque<ApiError>>,
}

impl MockActivityApi {
    pub fn new(catalog: ActivityCatalog) -> Self {
        Self {
            catalog: RefCell::new(catalog),
            calls: RefCell::new(Vec::new()),
            fetches: Cell::new(0),
            held_fetch: RefCell::new(None),
            injected: RefCell::new(VecDeque::new()),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.get()
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    pub fn server_catalog(&self) -> ActivityCatalog {
        self.catalog.borrow().clone()
    }

    /// Hold the next fetch response until the returned sender fires.
    /// The response reflects server state at request time.
    pub fn hold_next_fetch(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.held_fetch.borrow_mut() = Some(rx);
        tx
    }

    /// Make the next call fail with `error`
    pub fn fail_next(&self, error: ApiError) {
        self.injected.borrow_mut().push_back(error);
    }

    fn take_injected(&self) -> Option<ApiError> {
        self.injected.borrow_mut().pop_front()
    }
}

#[async_trait(?Send)]
impl ActivityApi for MockActivityApi {
    async fn fetch_activities(&self) -> Result<ActivityCatalog> {
        self.calls.borrow_mut().push(ApiCall::Fetch);
        self.fetches.set(self.fetches.get() + 1);

        let snapshot = match self.take_injected() {
            Some(error) => Err(error),
            None => Ok(self.catalog.borrow().clone()),
        };

        let gate = self.held_fetch.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }

        snapshot
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<String> {
        self.calls.borrow_mut().push(ApiCall::Signup {
            activity: activity.to_string(),
            email: email.to_string(),
        });
        if let Some(error) = self.take_injected() {
            return Err(error);
        }

        let mut catalog = self.catalog.borrow_mut();
        let entry = catalog.get_mut(activity).ok_or_else(|| ApiError::Rejected {
            status: 404,
            detail: Some("Activity not found".to_string()),
        })?;

        if entry.is_registered(email) {
            return Err(ApiError::Rejected {
                status: 400,
                detail: Some("Student is already signed up for this activity".to_string()),
            });
        }

        entry.participants.push(email.to_string());
        Ok(format!("Signed up {} for {}", email, activity))
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<String> {
        self.calls.borrow_mut().push(ApiCall::Unregister {
            activity: activity.to_string(),
            email: email.to_string(),
        });
        if let Some(error) = self.take_injected() {
            return Err(error);
        }

        let mut catalog = self.catalog.borrow_mut();
        let entry = catalog.get_mut(activity).ok_or_else(|| ApiError::Rejected {
            status: 404,
            detail: Some("Activity not found".to_string()),
        })?;

        let position = entry
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| ApiError::Rejected {
                status: 404,
                detail: Some("Student is not signed up for this activity".to_string()),
            })?;

        entry.participants.remove(position);
        Ok(format!("Unregistered {} from {}", email, activity))
    }
}
