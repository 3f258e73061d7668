use std::time::Duration;

/// Configuration for the activity client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for API requests, empty for same-origin
    pub base_url: String,

    /// How long a status message stays visible
    pub status_display: Duration,

    /// Drop list responses older than the most recently started load
    pub discard_stale_loads: bool,

    /// Skip a scheduled hide when a newer status was shown in the meantime
    pub guard_status_hide: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            status_display: Duration::from_secs(5),
            discard_stale_loads: true,
            guard_status_hide: true,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_status_display(mut self, display: Duration) -> Self {
        self.status_display = display;
        self
    }

    /// Apply every list response in arrival order (last response wins)
    pub fn with_stale_loads(mut self) -> Self {
        self.discard_stale_loads = false;
        self
    }

    /// Let every hide timer fire, even over a newer message
    pub fn with_unguarded_status_hide(mut self) -> Self {
        self.guard_status_hide = false;
        self
    }
}
