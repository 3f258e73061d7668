//! UI components for the activity sign-up page

mod activity_card;
mod activity_list;
mod participant_list;
mod signup_form;
mod status_banner;

pub use activity_card::{ActivityCard, ActivityCardProps};
pub use activity_list::ActivityList;
pub use participant_list::{ParticipantList, ParticipantListProps};
pub use signup_form::SignupForm;
pub use status_banner::StatusBanner;
