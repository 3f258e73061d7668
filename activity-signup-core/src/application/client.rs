use super::{ActivityView, ClientCommand, ClientConfig, ClientEvent, Scheduler};
use crate::domain::{copy, StatusMessage};
use crate::infrastructure::{ActivityApi, ApiError};
use std::cell::Cell;
use std::rc::Rc;

/// Page controller: loads and renders activities, runs the signup and
/// removal flows, and shows transient status messages.
///
/// All work happens on the UI thread. Operations are not cancelable; a
/// load that is overtaken by a newer one is discarded when
/// [`ClientConfig::discard_stale_loads`] is set.
pub struct ActivityClient<A, V, S> {
    api: A,
    view: Rc<V>,
    scheduler: S,
    config: ClientConfig,
    /// Sequence number of the most recently started load
    load_seq: Cell<u64>,
    /// Sequence number of the most recently shown status
    status_seq: Rc<Cell<u64>>,
}

impl<A, V, S> ActivityClient<A, V, S>
where
    A: ActivityApi,
    V: ActivityView + 'static,
    S: Scheduler,
{
    pub fn new(api: A, view: V, scheduler: S, config: ClientConfig) -> Self {
        Self {
            api,
            view: Rc::new(view),
            scheduler,
            config,
            load_seq: Cell::new(0),
            status_seq: Rc::new(Cell::new(0)),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Dispatch a command to its operation
    pub async fn handle_command(&self, command: ClientCommand) -> ClientEvent {
        tracing::debug!("Handling {}", command.name());

        match command {
            ClientCommand::LoadActivities => self.load_activities().await,
            ClientCommand::Signup { email, activity } => {
                self.submit_signup(&email, &activity).await
            }
            ClientCommand::RemoveParticipant { activity, email } => {
                self.remove_participant(&activity, &email).await
            }
        }
    }

    /// Fetch the catalog and rebuild the card list and dropdown.
    ///
    /// On failure the list shows a notice and the dropdown keeps its options.
    pub async fn load_activities(&self) -> ClientEvent {
        let request = self.load_seq.get() + 1;
        self.load_seq.set(request);
        tracing::debug!(request, "Loading activities");

        let result = self.api.fetch_activities().await;

        let latest = self.load_seq.get();
        if self.config.discard_stale_loads && request != latest {
            tracing::debug!(request, latest, "Discarding stale activities response");
            return ClientEvent::StaleLoadDiscarded { request };
        }

        match result {
            Ok(catalog) => {
                tracing::info!(request, count = catalog.len(), "Activities loaded");
                self.view.render_activities(&catalog);
                ClientEvent::ActivitiesLoaded {
                    count: catalog.len(),
                }
            }
            Err(e) => {
                tracing::error!("Error fetching activities: {}", e);
                self.view.render_load_failure(copy::LOAD_FAILURE_NOTICE);
                ClientEvent::LoadFailed {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Register `email` for `activity`.
    ///
    /// Inputs are sent verbatim; an empty activity name is passed through
    /// and left for the server to reject.
    pub async fn submit_signup(&self, email: &str, activity: &str) -> ClientEvent {
        tracing::info!("Signing up {} for '{}'", email, activity);

        match self.api.signup(activity, email).await {
            Ok(message) => {
                self.show_status(StatusMessage::success(message.clone()));
                self.view.reset_form();
                self.load_activities().await;

                ClientEvent::SignedUp {
                    activity: activity.to_string(),
                    email: email.to_string(),
                    message,
                }
            }
            Err(e) => {
                log_failure("signing up", &e);
                self.show_status(StatusMessage::error(failure_text(
                    &e,
                    copy::SIGNUP_REJECTED_FALLBACK,
                    copy::SIGNUP_FAILED,
                )));

                ClientEvent::SignupFailed {
                    activity: activity.to_string(),
                    email: email.to_string(),
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Unregister `email` from `activity`
    pub async fn remove_participant(&self, activity: &str, email: &str) -> ClientEvent {
        tracing::info!("Removing {} from '{}'", email, activity);

        match self.api.unregister(activity, email).await {
            Ok(message) => {
                self.show_status(StatusMessage::success(message.clone()));
                self.load_activities().await;

                ClientEvent::ParticipantRemoved {
                    activity: activity.to_string(),
                    email: email.to_string(),
                    message,
                }
            }
            Err(e) => {
                log_failure("unregistering participant", &e);
                self.show_status(StatusMessage::error(failure_text(
                    &e,
                    copy::REMOVAL_REJECTED_FALLBACK,
                    copy::REMOVAL_FAILED,
                )));

                ClientEvent::RemovalFailed {
                    activity: activity.to_string(),
                    email: email.to_string(),
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Show `status` and schedule its hide
    fn show_status(&self, status: StatusMessage) {
        let ticket = self.status_seq.get() + 1;
        self.status_seq.set(ticket);
        self.view.show_status(&status);

        let view = Rc::clone(&self.view);
        let status_seq = Rc::clone(&self.status_seq);
        let guarded = self.config.guard_status_hide;

        self.scheduler.schedule(
            self.config.status_display,
            Box::new(move || {
                if guarded && status_seq.get() != ticket {
                    tracing::trace!(ticket, "Newer status on screen, skipping hide");
                    return;
                }
                view.hide_status();
            }),
        );
    }
}

/// Server detail for rejections (or `rejected_fallback`), `failed` otherwise
fn failure_text(error: &ApiError, rejected_fallback: &str, failed: &str) -> String {
    if error.is_rejection() {
        error
            .detail()
            .filter(|detail| !detail.is_empty())
            .unwrap_or(rejected_fallback)
            .to_string()
    } else {
        failed.to_string()
    }
}

fn log_failure(action: &str, error: &ApiError) {
    if error.is_rejection() {
        tracing::warn!("Server refused {}: {}", action, error);
    } else {
        tracing::error!("Error {}: {}", action, error);
    }
}
