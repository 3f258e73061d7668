use super::error::{ApiError, Result};
use crate::domain::ActivityCatalog;
use async_trait::async_trait;
use serde::Deserialize;

/// Transport seam for the activities API (allows mocking in tests)
#[async_trait(?Send)]
pub trait ActivityApi {
    /// `GET /activities`
    async fn fetch_activities(&self) -> Result<ActivityCatalog>;

    /// `POST /activities/{activity}/signup?email={email}`, returns the server message
    async fn signup(&self, activity: &str, email: &str) -> Result<String>;

    /// `DELETE /activities/{activity}/signup?email={email}`, returns the server message
    async fn unregister(&self, activity: &str, email: &str) -> Result<String>;
}

/// JSON body of a mutation response.
///
/// Success carries `message`, failure carries `detail`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiReply {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl ApiReply {
    pub fn parse(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Interpret the reply against the HTTP status it arrived with
    pub fn into_result(self, ok: bool, status: u16) -> Result<String> {
        if ok {
            self.message
                .ok_or_else(|| ApiError::Decode("success response without message".to_string()))
        } else {
            Err(ApiError::Rejected {
                status,
                detail: self.detail,
            })
        }
    }
}

/// Interpret a `GET /activities` response.
///
/// A non-2xx status is a rejection whatever the body holds; the body's
/// `detail` is kept when it has one.
pub fn catalog_from_response(ok: bool, status: u16, body: &str) -> Result<ActivityCatalog> {
    if !ok {
        let detail = ApiReply::parse(body).ok().and_then(|reply| reply.detail);
        return Err(ApiError::Rejected { status, detail });
    }

    Ok(serde_json::from_str(body)?)
}
