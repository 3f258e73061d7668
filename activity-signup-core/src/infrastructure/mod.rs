pub mod api;
pub mod endpoints;
pub mod error;

pub use api::{catalog_from_response, ActivityApi, ApiReply};
pub use endpoints::Endpoints;
pub use error::{ApiError, Result};
