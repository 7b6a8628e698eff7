use crate::config::ApiConfig;
use crate::error::AppError;
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

/// One configured HTTP client against the marketplace API. Every logical
/// operation is exactly one request: no retries, no backoff, no auth
/// headers. Callers interpret the decoded body.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: Client,
    base_url: String,
}

impl RestClient {
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        // Validate the base URL eagerly so a typo fails at startup, not on
        // the first screen load.
        Url::parse(&config.base_url)?;

        let http = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout))
            .timeout(Duration::from_secs(config.request_timeout))
            .build()
            .map_err(|e| AppError::backend("Failed to build HTTP client", e))?;

        debug!(base_url = %config.base_url, "REST client initialized");

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn execute(&self, method: Method, path: &str, request: RequestBuilder) -> Result<String, AppError> {
        let request_id = Uuid::new_v4();
        debug!(request_id = %request_id, method = %method, path = %path, "request");

        let response = request.send().await.map_err(|e| {
            warn!(request_id = %request_id, path = %path, error = %e, "transport failure");
            AppError::backend(format!("{} {} failed", method, path), e)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(request_id = %request_id, path = %path, status = %status, "request failed");
            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(AppError::NotFound(path.to_string()));
            }
            return Err(AppError::backend_message(format!("{} {} returned {}", method, path, status)));
        }

        response
            .text()
            .await
            .map_err(|e| AppError::backend(format!("Failed to read body of {}", path), e))
    }

    fn decode<T: DeserializeOwned>(path: &str, body: &str) -> Result<T, AppError> {
        serde_json::from_str(body).map_err(|e| AppError::decode(format!("Unexpected body from {}", path), e))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let request = self.http.get(self.endpoint(path));
        let body = self.execute(Method::GET, path, request).await?;
        Self::decode(path, &body)
    }

    pub async fn get_json_query<T: DeserializeOwned, Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> Result<T, AppError> {
        let request = self.http.get(self.endpoint(path)).query(query);
        let body = self.execute(Method::GET, path, request).await?;
        Self::decode(path, &body)
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, payload: &B) -> Result<T, AppError> {
        let request = self.http.post(self.endpoint(path)).json(payload);
        let body = self.execute(Method::POST, path, request).await?;
        Self::decode(path, &body)
    }

    /// POST with parameters in the query string and an empty body, as a few
    /// backend endpoints expect.
    pub async fn post_query<Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> Result<(), AppError> {
        let request = self.http.post(self.endpoint(path)).query(query);
        self.execute(Method::POST, path, request).await?;
        Ok(())
    }

    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, payload: &B) -> Result<T, AppError> {
        let request = self.http.put(self.endpoint(path)).json(payload);
        let body = self.execute(Method::PUT, path, request).await?;
        Self::decode(path, &body)
    }

    /// PUT with no body, for bare state transitions such as vendor approval.
    pub async fn put_empty(&self, path: &str) -> Result<(), AppError> {
        let request = self.http.put(self.endpoint(path));
        self.execute(Method::PUT, path, request).await?;
        Ok(())
    }

    pub async fn put_json_discard<B: Serialize + ?Sized>(&self, path: &str, payload: &B) -> Result<(), AppError> {
        let request = self.http.put(self.endpoint(path)).json(payload);
        self.execute(Method::PUT, path, request).await?;
        Ok(())
    }

    pub async fn put_query<Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> Result<(), AppError> {
        let request = self.http.put(self.endpoint(path)).query(query);
        self.execute(Method::PUT, path, request).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> Result<(), AppError> {
        let request = self.http.delete(self.endpoint(path));
        self.execute(Method::DELETE, path, request).await?;
        Ok(())
    }
}
