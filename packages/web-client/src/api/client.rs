use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::types::{ApiErrorBody, CreateJobInput, DeleteResponse, FieldError, Job};

/// Base URL used when `JOB_BOARD_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("api returned {status}: {message}")]
    Status {
        status: u16,
        message: String,
        fields: Vec<FieldError>,
    },

    #[error("invalid api url: {0}")]
    InvalidUrl(String),

    #[error("server reported the delete as unsuccessful")]
    DeleteRejected,
}

impl ClientError {
    /// True when the server refused the payload as invalid.
    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Status { status: 422, .. })
    }
}

/// The three calls the job list store needs from the API.
#[async_trait]
pub trait JobsApi: Send + Sync {
    async fn get_jobs(&self) -> Result<Vec<Job>, ClientError>;

    async fn create_job(&self, input: &CreateJobInput) -> Result<Job, ClientError>;

    async fn delete_job(&self, id: &str) -> Result<(), ClientError>;
}

/// JSON-over-HTTP client for the job board API.
#[derive(Clone)]
pub struct HttpJobsApi {
    client: Client,
    base_url: String,
}

impl HttpJobsApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Reads the base URL from `JOB_BOARD_API_URL`.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("JOB_BOARD_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let text = response.text().await.unwrap_or_default();
        let (message, fields) = match serde_json::from_str::<ApiErrorBody>(&text) {
            Ok(body) => (body.message, body.fields),
            Err(_) => (text, Vec::new()),
        };
        tracing::debug!(status = status.as_u16(), %message, "api request failed");

        Err(ClientError::Status {
            status: status.as_u16(),
            message,
            fields,
        })
    }
}

#[async_trait]
impl JobsApi for HttpJobsApi {
    async fn get_jobs(&self) -> Result<Vec<Job>, ClientError> {
        let response = self.client.get(self.endpoint(&["jobs"])?).send().await?;
        Self::decode(response).await
    }

    async fn create_job(&self, input: &CreateJobInput) -> Result<Job, ClientError> {
        let response = self
            .client
            .post(self.endpoint(&["create", "job"])?)
            .json(input)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn delete_job(&self, id: &str) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.endpoint(&["jobs", id])?)
            .send()
            .await?;
        let result: DeleteResponse = Self::decode(response).await?;
        if result.success {
            Ok(())
        } else {
            Err(ClientError::DeleteRejected)
        }
    }
}
