mod http;
mod timers;

pub use http::GlooActivityApi;
pub use timers::GlooScheduler;
