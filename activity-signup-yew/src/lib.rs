//! # Activity Signup Yew Client
//!
//! Browser front end for the activity sign-up service: renders the
//! activity cards, the signup form and the status message, and wires them
//! to [`activity_signup_core::ActivityClient`].

pub mod app;
pub mod components;
pub mod hooks;
pub mod infrastructure;
pub mod providers;
pub mod state;
pub mod view;

// Re-exports for convenience
pub use app::{App, AppProps};
pub use components::{ActivityCard, ActivityList, ParticipantList, SignupForm, StatusBanner};
pub use hooks::{use_signup, SignupContext};
pub use infrastructure::{GlooActivityApi, GlooScheduler};
pub use providers::{ActivityClientProvider, ActivityClientProviderProps, BrowserClient};
pub use state::{ListState, PageAction, PageState};
pub use view::ReducerView;
