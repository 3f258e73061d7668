pub mod activity;
pub mod copy;
pub mod status;

pub use activity::{Activity, ActivityCatalog};
pub use status::{StatusKind, StatusMessage};
