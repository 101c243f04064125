// ABOUTME: Remote jobs API: the JobsApi seam and its HTTP implementation
// ABOUTME: Controllers depend on the trait so tests can script responses

pub mod client;
pub mod models;

use async_trait::async_trait;

use crate::error::Result;

pub use client::RemoteClient;
pub use models::{AdminJobDocument, Company, Job, JobDocument, JobPage, JobQuery};

/// Everything the posting and listing workflows need from the backend.
#[async_trait]
pub trait JobsApi: Send + Sync {
    /// `POST /api/jobs`
    async fn create_job(&self, token: &str, document: &JobDocument) -> Result<()>;

    /// `POST /api/admin/jobs`
    async fn create_admin_job(&self, token: &str, document: &AdminJobDocument) -> Result<()>;

    /// `GET /api/jobs`
    async fn list_jobs(&self, query: &JobQuery) -> Result<JobPage>;

    /// `GET /api/jobs/saved/my-saved-jobs?idsOnly=true`
    async fn saved_job_ids(&self, token: &str) -> Result<Vec<String>>;

    /// `POST /api/jobs/{id}/save`
    async fn save_job(&self, token: &str, job_id: &str) -> Result<()>;

    /// `DELETE /api/jobs/{id}/unsave`
    async fn unsave_job(&self, token: &str, job_id: &str) -> Result<()>;

    /// `GET /api/admin/companies`
    async fn list_companies(&self, token: &str) -> Result<Vec<Company>>;
}
