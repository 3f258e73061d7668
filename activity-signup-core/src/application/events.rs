/// What happened as the result of a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    /// Catalog fetched and rendered
    ActivitiesLoaded { count: usize },

    /// Catalog could not be fetched or parsed; failure notice rendered
    LoadFailed { reason: String },

    /// A newer load was started before this response arrived
    StaleLoadDiscarded { request: u64 },

    SignedUp {
        activity: String,
        email: String,
        message: String,
    },

    SignupFailed {
        activity: String,
        email: String,
        reason: String,
    },

    ParticipantRemoved {
        activity: String,
        email: String,
        message: String,
    },

    RemovalFailed {
        activity: String,
        email: String,
        reason: String,
    },
}

impl ClientEvent {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            ClientEvent::LoadFailed { .. }
                | ClientEvent::SignupFailed { .. }
                | ClientEvent::RemovalFailed { .. }
        )
    }
}
