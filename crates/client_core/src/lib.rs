use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::{Experience, ListEnvelope, Project, ReachOutRequest, ReachOutResponse};
use thiserror::Error;
use tracing::debug;

const PROJECTS_PATH: &str = "/portfolio/projects/";
const EXPERIENCES_PATH: &str = "/portfolio/experiences/";
const REACH_OUT_PATH: &str = "/portfolio/reach-out/";

#[derive(Debug, Error)]
pub enum ApiRequestError {
    #[error("failed to reach {endpoint} endpoint: {source}")]
    Transport {
        endpoint: &'static str,
        source: reqwest::Error,
    },
    #[error("{endpoint} endpoint returned error status: {source}")]
    Status {
        endpoint: &'static str,
        source: reqwest::Error,
    },
    #[error("invalid {endpoint} response payload: {source}")]
    Payload {
        endpoint: &'static str,
        source: reqwest::Error,
    },
}

/// Seam between the GUI backend worker and the portfolio HTTP API.
///
/// The worker only sees this trait; tests substitute stub implementations
/// the same way production wires in [`PortfolioClient`].
#[async_trait]
pub trait PortfolioApi: Send + Sync {
    async fn fetch_projects(&self) -> Result<Vec<Project>>;
    async fn fetch_experiences(&self) -> Result<Vec<Experience>>;
    async fn send_reach_out(&self, request: &ReachOutRequest) -> Result<ReachOutResponse>;
}

pub struct PortfolioClient {
    http: Client,
    base_url: String,
}

impl PortfolioClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: normalize_base_url(base_url.into()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn fetch_projects(&self) -> std::result::Result<Vec<Project>, ApiRequestError> {
        self.fetch_list(PROJECTS_PATH, "projects").await
    }

    pub async fn fetch_experiences(&self) -> std::result::Result<Vec<Experience>, ApiRequestError> {
        self.fetch_list(EXPERIENCES_PATH, "experiences").await
    }

    pub async fn send_reach_out(
        &self,
        request: &ReachOutRequest,
    ) -> std::result::Result<ReachOutResponse, ApiRequestError> {
        let endpoint = "reach-out";
        let response = self
            .http
            .post(self.endpoint_url(REACH_OUT_PATH))
            .json(request)
            .send()
            .await
            .map_err(|source| ApiRequestError::Transport { endpoint, source })?
            .error_for_status()
            .map_err(|source| ApiRequestError::Status { endpoint, source })?;

        response
            .json()
            .await
            .map_err(|source| ApiRequestError::Payload { endpoint, source })
    }

    async fn fetch_list<T>(
        &self,
        path: &str,
        endpoint: &'static str,
    ) -> std::result::Result<Vec<T>, ApiRequestError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .http
            .get(self.endpoint_url(path))
            .send()
            .await
            .map_err(|source| ApiRequestError::Transport { endpoint, source })?
            .error_for_status()
            .map_err(|source| ApiRequestError::Status { endpoint, source })?;

        let envelope: ListEnvelope<T> = response
            .json()
            .await
            .map_err(|source| ApiRequestError::Payload { endpoint, source })?;
        debug!(endpoint, count = envelope.data.len(), "fetched list snapshot");
        Ok(envelope.data)
    }
}

#[async_trait]
impl PortfolioApi for PortfolioClient {
    async fn fetch_projects(&self) -> Result<Vec<Project>> {
        Ok(PortfolioClient::fetch_projects(self).await?)
    }

    async fn fetch_experiences(&self) -> Result<Vec<Experience>> {
        Ok(PortfolioClient::fetch_experiences(self).await?)
    }

    async fn send_reach_out(&self, request: &ReachOutRequest) -> Result<ReachOutResponse> {
        Ok(PortfolioClient::send_reach_out(self, request).await?)
    }
}

/// Trims whitespace and trailing slashes so endpoint paths can be appended
/// verbatim.
pub fn normalize_base_url(raw: String) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
