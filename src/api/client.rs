//! HTTP client for task API requests.
//!
//! This module provides a low-level HTTP client wrapper for making requests
//! to the task API, handling bearer authentication, error bodies and
//! response parsing.

use super::ApiError;
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Error body returned by the API on failure.
///
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Makes requests to the task API and tries to conform response data to the
/// requested type.
///
pub struct Client {
    pub(crate) access_token: Option<String>,
    pub(crate) base_url: String,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL and request timeout.
    ///
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        Ok(Client {
            access_token: None,
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: reqwest::Client::builder().timeout(timeout).build()?,
        })
    }

    /// Return the full URL for the given API path.
    ///
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a request without a session token and decode the response.
    ///
    pub async fn public<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let response = self.send(method, path, body, None).await?;
        Self::decode(response).await
    }

    /// Make a request carrying the session token and decode the response.
    ///
    pub async fn authorized<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError> {
        let token = self.access_token.as_deref().ok_or(ApiError::MissingToken)?;
        let response = self.send(method, path, body, Some(token)).await?;
        Self::decode(response).await
    }

    /// Make a request carrying the session token, ignoring any response body.
    ///
    pub async fn authorized_empty(&self, method: Method, path: &str) -> Result<(), ApiError> {
        let token = self.access_token.as_deref().ok_or(ApiError::MissingToken)?;
        let response = self.send::<()>(method, path, None, Some(token)).await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Build and send the request.
    ///
    async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<Response, ApiError> {
        let request_url = self.url(path);
        log::debug!("{} {}", method, request_url);

        let mut request = self.http_client.request(method, &request_url);
        if let Some(token) = token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        Ok(request.send().await?)
    }

    /// Turn non-success responses into API errors carrying the server message.
    ///
    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let bytes = response.bytes().await.unwrap_or_default();
        let message = serde_json::from_slice::<ErrorBody>(&bytes)
            .ok()
            .and_then(|body| body.message);
        // Response bodies can carry credentials and are never logged
        log::error!(
            "API request failed with status {}: {}",
            status,
            message.as_deref().unwrap_or("no message")
        );
        Err(ApiError::ApiError {
            status: status.as_u16(),
            message,
        })
    }

    /// Check status and deserialize the body.
    ///
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let response = Self::check(response).await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        serde_json::from_slice::<T>(&bytes).map_err(|e| {
            let error = ApiError::Deserialization(e);
            log::error!("{} ({}, {} bytes)", error, status, bytes.len());
            error
        })
    }
}
