//! Activities API over the browser's fetch, via gloo-net

use activity_signup_core::infrastructure::{catalog_from_response, Result};
use activity_signup_core::{ActivityApi, ActivityCatalog, ApiError, ApiReply, Endpoints};
use async_trait::async_trait;
use gloo_net::http::{Request, Response};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlooActivityApi {
    endpoints: Endpoints,
}

impl GlooActivityApi {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }

    async fn read_reply(response: Response) -> Result<String> {
        let ok = response.ok();
        let status = response.status();
        let body = response.text().await.map_err(transport)?;

        ApiReply::parse(&body)?.into_result(ok, status)
    }
}

fn transport(error: gloo_net::Error) -> ApiError {
    ApiError::Transport(error.to_string())
}

#[async_trait(?Send)]
impl ActivityApi for GlooActivityApi {
    async fn fetch_activities(&self) -> Result<ActivityCatalog> {
        let response = Request::get(&self.endpoints.activities())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(transport)?;

        let ok = response.ok();
        let status = response.status();
        let body = response.text().await.map_err(transport)?;

        catalog_from_response(ok, status, &body)
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<String> {
        let url = self.endpoints.signup(activity, email);
        tracing::debug!("POST {}", url);

        let response = Request::post(&url).send().await.map_err(transport)?;
        Self::read_reply(response).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<String> {
        let url = self.endpoints.signup(activity, email);
        tracing::debug!("DELETE {}", url);

        let response = Request::delete(&url).send().await.map_err(transport)?;
        Self::read_reply(response).await
    }
}
