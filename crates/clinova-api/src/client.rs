use reqwest::{Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::ApiError;

/// Typed HTTP client for the Clinova backend.
///
/// Cheap to clone; holds only the connection pool and the base URL from
/// the application config.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        debug!(path = path, "GET");
        let resp = self
            .http
            .get(self.url(path))
            .query(query)
            .send()
            .await?;
        decode(resp, path).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path = path, "POST");
        let resp = self.http.post(self.url(path)).json(body).send().await?;
        decode(resp, path).await
    }

    /// POST where only success matters; the response body is discarded.
    pub(crate) async fn post_json_unit<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        debug!(path = path, "POST");
        let resp = self.http.post(self.url(path)).json(body).send().await?;
        ensure_ok(resp, path).await
    }

    /// POST authenticated with a bearer token; the response body is
    /// discarded.
    pub(crate) async fn post_json_bearer<B: Serialize>(
        &self,
        path: &str,
        body: &B,
        token: &str,
    ) -> Result<(), ApiError> {
        debug!(path = path, "POST (bearer)");
        let resp = self
            .http
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?;
        ensure_ok(resp, path).await
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path = path, "PUT");
        let resp = self.http.put(self.url(path)).json(body).send().await?;
        decode(resp, path).await
    }

    /// PUT where only success matters; the response body is discarded.
    pub(crate) async fn put_json_unit<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        debug!(path = path, "PUT");
        let resp = self.http.put(self.url(path)).json(body).send().await?;
        ensure_ok(resp, path).await
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: String,
}

/// Map a response to the typed value, or extract the backend's error
/// message. Non-JSON or empty error bodies fall back to a generic string.
async fn decode<T: DeserializeOwned>(resp: Response, path: &str) -> Result<T, ApiError> {
    let resp = check_status(resp, path).await?;
    Ok(resp.json::<T>().await?)
}

/// Like [`decode`], but the caller does not care what came back.
async fn ensure_ok(resp: Response, path: &str) -> Result<(), ApiError> {
    check_status(resp, path).await.map(|_| ())
}

async fn check_status(resp: Response, path: &str) -> Result<Response, ApiError> {
    let status = resp.status();

    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound {
            path: path.to_string(),
        });
    }

    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => parsed.error,
            Err(_) => format!("request failed with status {status}"),
        };
        warn!(path = path, status = status.as_u16(), message = %message, "backend error");
        return Err(ApiError::Backend {
            status: status.as_u16(),
            message,
        });
    }

    Ok(resp)
}
