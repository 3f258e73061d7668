mod client_provider;

pub use client_provider::{
    ActivityClientProvider, ActivityClientProviderProps, BrowserClient, DEFAULT_STATUS_DISPLAY_MS,
};
