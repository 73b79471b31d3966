//! HTTP client for the server-management API.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use super::types::{RebootResponse, RestartOutcome};
use crate::domain::{Credentials, Server};

/// Collection endpoint used when `--endpoint` is not given.
pub const DEFAULT_ENDPOINT: &str = "https://api.dallas-idc.com/v1/server";

/// Errors that can occur when talking to the server API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("error making request: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status code: {0}")]
    UnexpectedStatus(u16),
    #[error("error decoding response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::UnexpectedStatus(code) => Some(*code),
            ApiError::Request(e) => e.status().map(|s| s.as_u16()),
            ApiError::Decode(_) => None,
        }
    }
}

/// Operations the console needs from the API.
#[async_trait]
pub trait ServerApi: Send + Sync {
    /// Fetch every server visible to the account, in API order.
    async fn list_servers(&self) -> Result<Vec<Server>, ApiError>;

    /// Ask the API to restart one server.
    async fn restart_server(&self, server_id: &str) -> Result<RestartOutcome, ApiError>;
}

/// Basic-auth client bound to one collection URL.
pub struct ApiClient {
    client: Client,
    base_url: String,
    credentials: Credentials,
}

impl ApiClient {
    /// Create a new API client.
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(concat!("idc-admin/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            credentials,
        })
    }

    /// `{base}/{server_id}/restart`.
    pub fn restart_url(&self, server_id: &str) -> String {
        format!(
            "{}/{}/restart",
            self.base_url.trim_end_matches('/'),
            server_id
        )
    }

    /// GET `url` and return the body of a 200 response.
    pub async fn get_bytes(&self, url: &str) -> Result<(StatusCode, Vec<u8>), ApiError> {
        debug!("HTTP GET {}", url);

        let response = self
            .client
            .get(url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .send()
            .await
            .map_err(|e| {
                warn!(url, error = %e, "request failed");
                ApiError::Request(e)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(url, status = status.as_u16(), "unexpected status");
            return Err(ApiError::UnexpectedStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        debug!(url, bytes = body.len(), "HTTP GET complete");
        Ok((status, body.to_vec()))
    }

    /// GET `url` and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<(StatusCode, T), ApiError> {
        let (status, body) = self.get_bytes(url).await?;
        let value = serde_json::from_slice(&body).map_err(|e| {
            warn!(url, error = %e, "malformed response body");
            ApiError::Decode(e)
        })?;
        Ok((status, value))
    }
}

#[async_trait]
impl ServerApi for ApiClient {
    async fn list_servers(&self) -> Result<Vec<Server>, ApiError> {
        let (_, servers) = self.get_json::<Vec<Server>>(&self.base_url).await?;
        Ok(servers)
    }

    async fn restart_server(&self, server_id: &str) -> Result<RestartOutcome, ApiError> {
        let url = self.restart_url(server_id);
        let (status, response) = self.get_json::<RebootResponse>(&url).await?;
        Ok(RestartOutcome {
            status_code: status.as_u16(),
            response,
        })
    }
}
