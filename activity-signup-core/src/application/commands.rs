/// User actions the client can perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    /// Fetch the catalog and re-render list and dropdown
    LoadActivities,

    /// Register `email` for `activity` (form submit)
    Signup { email: String, activity: String },

    /// Unregister `email` from `activity` (remove button)
    RemoveParticipant { activity: String, email: String },
}

impl ClientCommand {
    pub fn name(&self) -> &'static str {
        match self {
            ClientCommand::LoadActivities => "LoadActivities",
            ClientCommand::Signup { .. } => "Signup",
            ClientCommand::RemoveParticipant { .. } => "RemoveParticipant",
        }
    }
}
