// ABOUTME: HTTP client for communicating with the Hire In Minutes REST API
// ABOUTME: Handles job creation, listing, saved-job bookmarks and error mapping

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

use super::models::{
    AdminJobDocument, ApiMessage, ApiResponse, Company, Job, JobDocument, JobPage, JobQuery,
};
use super::JobsApi;
use crate::error::{HireError, Result};

pub struct RemoteClient {
    client: Client,
    api_base_url: String,
}

impl RemoteClient {
    pub fn new(api_base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.api_base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base_url, path)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiMessage>(&body)
            .ok()
            .and_then(|m| m.message)
            .unwrap_or_else(|| {
                if body.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                } else {
                    body
                }
            });
        warn!(status = status.as_u16(), %message, "API request rejected");
        Err(HireError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| HireError::Parse(format!("failed to parse API response: {}", e)))
    }

    /// Decodes the standard envelope and rejects bodies that report `success: false`.
    async fn decode_envelope<T: DeserializeOwned + Default>(
        response: Response,
    ) -> Result<ApiResponse<T>> {
        let status = response.status().as_u16();
        let envelope: ApiResponse<T> = Self::decode(response).await?;
        if envelope.success == Some(false) {
            let message = envelope
                .message
                .unwrap_or_else(|| "request was not successful".to_string());
            warn!(status, %message, "API reported failure");
            return Err(HireError::Api { status, message });
        }
        Ok(envelope)
    }

    /// `/api/jobs/{id}/{action}` with the job id percent-encoded as one segment.
    fn job_url(&self, job_id: &str, action: &str) -> Result<Url> {
        let mut url = Url::parse(&self.url("/api/jobs")).map_err(|e| {
            HireError::Config(format!("invalid API base URL '{}': {}", self.api_base_url, e))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                HireError::Config(format!("API base URL '{}' cannot take a path", self.api_base_url))
            })?
            .push(job_id)
            .push(action);
        Ok(url)
    }
}

#[async_trait]
impl JobsApi for RemoteClient {
    async fn create_job(&self, token: &str, document: &JobDocument) -> Result<()> {
        let url = self.url("/api/jobs");
        debug!(%url, title = %document.job_details.basic_info.job_title, "Creating job");

        self.send(self.client.post(&url).bearer_auth(token).json(document))
            .await?;
        Ok(())
    }

    async fn create_admin_job(&self, token: &str, document: &AdminJobDocument) -> Result<()> {
        let url = self.url("/api/admin/jobs");
        debug!(%url, company_id = ?document.company_id, "Creating job on behalf of company");

        self.send(self.client.post(&url).bearer_auth(token).json(document))
            .await?;
        Ok(())
    }

    async fn list_jobs(&self, query: &JobQuery) -> Result<JobPage> {
        let url = self.url("/api/jobs");
        debug!(%url, page = query.page, "Fetching jobs");

        let response = self.send(self.client.get(&url).query(query)).await?;
        let envelope: ApiResponse<Vec<Job>> = Self::decode_envelope(response).await?;
        let pagination = envelope.pagination.ok_or_else(|| {
            HireError::Parse("job listing response is missing pagination".to_string())
        })?;

        Ok(JobPage {
            jobs: envelope.data,
            page: pagination.page,
            pages: pagination.pages,
        })
    }

    async fn saved_job_ids(&self, token: &str) -> Result<Vec<String>> {
        let url = self.url("/api/jobs/saved/my-saved-jobs");

        let response = self
            .send(
                self.client
                    .get(&url)
                    .bearer_auth(token)
                    .query(&[("idsOnly", "true")]),
            )
            .await?;
        let envelope: ApiResponse<Vec<String>> = Self::decode_envelope(response).await?;
        Ok(envelope.data)
    }

    async fn save_job(&self, token: &str, job_id: &str) -> Result<()> {
        let url = self.job_url(job_id, "save")?;
        self.send(self.client.post(url).bearer_auth(token)).await?;
        Ok(())
    }

    async fn unsave_job(&self, token: &str, job_id: &str) -> Result<()> {
        let url = self.job_url(job_id, "unsave")?;
        self.send(self.client.delete(url).bearer_auth(token)).await?;
        Ok(())
    }

    async fn list_companies(&self, token: &str) -> Result<Vec<Company>> {
        let url = self.url("/api/admin/companies");
        let response = self.send(self.client.get(&url).bearer_auth(token)).await?;
        let envelope: ApiResponse<Vec<Company>> = Self::decode_envelope(response).await?;
        Ok(envelope.data)
    }
}
