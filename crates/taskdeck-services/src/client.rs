//! HTTP client for the task service.

use tracing::instrument;
use url::Url;

use crate::error::TaskApiError;
use crate::task::{Stats, Task, TaskCreateRequest};

/// Typed client for the remote task service.
///
/// Every method maps to one endpoint; any non-2xx response is reported as
/// [`TaskApiError::Status`] regardless of payload content. No retries are
/// performed; callers reissue failed operations.
#[derive(Debug, Clone)]
pub struct TaskClient {
    client: reqwest::Client,
    base_url: String,
}

impl TaskClient {
    /// Create a client for the service at `base_url`.
    ///
    /// # Errors
    /// Returns [`TaskApiError::InvalidBaseUrl`] if `base_url` is not a
    /// parseable URL.
    pub fn new(base_url: &str) -> Result<Self, TaskApiError> {
        Url::parse(base_url)?;

        Ok(Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// List all tasks, in server order.
    #[instrument(skip(self), level = "info")]
    pub async fn list_tasks(&self) -> Result<Vec<Task>, TaskApiError> {
        let url = format!("{}/tasks", self.base_url);

        let response = self.client.get(&url).send().await?;
        self.handle_response(response).await
    }

    /// Fetch aggregate task counts.
    #[instrument(skip(self), level = "info")]
    pub async fn stats(&self) -> Result<Stats, TaskApiError> {
        let url = format!("{}/tasks/stats", self.base_url);

        let response = self.client.get(&url).send().await?;
        self.handle_response(response).await
    }

    /// Create a new task; returns the server representation with its
    /// assigned id.
    #[instrument(skip(self), level = "info")]
    pub async fn create_task(&self, request: TaskCreateRequest) -> Result<Task, TaskApiError> {
        let url = format!("{}/tasks", self.base_url);

        let response = self.client.post(&url).json(&request).send().await?;
        self.handle_response(response).await
    }

    /// Mark the task as completed; returns the updated server
    /// representation.
    #[instrument(skip(self), level = "info")]
    pub async fn complete_task(&self, id: i64) -> Result<Task, TaskApiError> {
        let url = format!("{}/tasks/{}/complete", self.base_url, id);

        let response = self.client.put(&url).send().await?;
        self.handle_response(response).await
    }

    /// Delete the task. Any success response body is ignored.
    #[instrument(skip(self), level = "info")]
    pub async fn delete_task(&self, id: i64) -> Result<(), TaskApiError> {
        let url = format!("{}/tasks/{}", self.base_url, id);

        let response = self.client.delete(&url).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(TaskApiError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, TaskApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TaskApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| TaskApiError::InvalidResponse(e.to_string()))
    }
}
