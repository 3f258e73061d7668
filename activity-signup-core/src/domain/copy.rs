//! User-visible strings

pub const LOADING_NOTICE: &str = "Loading activities...";
pub const LOAD_FAILURE_NOTICE: &str = "Failed to load activities. Please try again later.";
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";
pub const NO_PARTICIPANTS: &str = "No participants yet";

pub const SIGNUP_REJECTED_FALLBACK: &str = "An error occurred";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";

pub const REMOVAL_REJECTED_FALLBACK: &str = "Failed to unregister participant";
pub const REMOVAL_FAILED: &str = "Failed to unregister participant.";
