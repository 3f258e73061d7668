#![allow(dead_code)]

pub mod manual_scheduler;
pub mod mock_api;
pub mod recording_view;

use activity_signup_core::{Activity, ActivityCatalog, ActivityClient, ClientConfig};
use manual_scheduler::ManualScheduler;
use mock_api::MockActivityApi;
use recording_view::RecordingView;
use std::time::Duration;

pub type TestClient = ActivityClient<MockActivityApi, RecordingView, ManualScheduler>;

pub const STATUS_DISPLAY: Duration = Duration::from_secs(5);

pub fn activity(max_participants: u32, participants: &[&str]) -> Activity {
    Activity {
        description: "An after-school activity".to_string(),
        schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

/// Catalog resembling the school's default activities
pub fn school_catalog() -> ActivityCatalog {
    ActivityCatalog::new()
        .with_activity(
            "Chess Club",
            activity(12, &["michael@mergington.edu", "daniel@mergington.edu"]),
        )
        .with_activity(
            "Programming Class",
            activity(20, &["emma@mergington.edu", "sophia@mergington.edu"]),
        )
        .with_activity("Art Studio", activity(8, &[]))
}

pub fn client_with_config(catalog: ActivityCatalog, config: ClientConfig) -> TestClient {
    ActivityClient::new(
        MockActivityApi::new(catalog),
        RecordingView::default(),
        ManualScheduler::default(),
        config,
    )
}

pub fn client(catalog: ActivityCatalog) -> TestClient {
    client_with_config(catalog, ClientConfig::default())
}

/// Opt-in log output: `RUST_LOG=activity_signup_core=debug cargo test`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
