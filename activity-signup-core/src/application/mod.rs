mod client;
mod commands;
mod config;
mod events;
mod scheduler;
mod view;

pub use client::ActivityClient;
pub use commands::ClientCommand;
pub use config::ClientConfig;
pub use events::ClientEvent;
pub use scheduler::Scheduler;
pub use view::ActivityView;
