//! # Activity Signup Core
//!
//! Domain model, API seam and page controller for the activity sign-up
//! client. Rendering and HTTP live in `activity-signup-yew`.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{
    ActivityClient, ActivityView, ClientCommand, ClientConfig, ClientEvent, Scheduler,
};
pub use domain::{Activity, ActivityCatalog, StatusKind, StatusMessage};
pub use infrastructure::{ActivityApi, ApiError, ApiReply, Endpoints};
