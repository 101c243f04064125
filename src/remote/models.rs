// ABOUTME: Data structures exchanged with the jobs REST API
// ABOUTME: These are serialized to JSON (camelCase) for API communication

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::draft::{Education, EmploymentType, JobLevel, SalaryType, WorkMode};

pub const STATUS_ACTIVE: &str = "active";

/// Body of `POST /api/jobs`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDocument {
    pub job_details: JobDetails,
    pub benefits: Vec<String>,
    pub status: String, // "active" for direct recruiter and admin postings
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetails {
    pub basic_info: BasicInfoDoc,
    pub location: LocationDoc,
    pub compensation: CompensationDoc,
    pub description: DescriptionDoc,
    pub qualifications: QualificationsDoc,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicInfoDoc {
    pub job_title: String,
    pub department: String,
    pub number_of_openings: u32,
    pub employment_type: EmploymentType,
    pub work_mode: WorkMode,
    pub job_level: JobLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDoc {
    pub city: String,
    pub state: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub office_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompensationDoc {
    pub salary: u64,
    pub salary_type: SalaryType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionDoc {
    pub role_summary: String,
    pub responsibilities: Vec<String>,
    pub required_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualificationsDoc {
    pub minimum_education: Education,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_education: Option<Education>,
    pub years_of_experience: u32,
}

/// Body of `POST /api/admin/jobs`: a job document posted on behalf of a company.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminJobDocument {
    #[serde(flatten)]
    pub job: JobDocument,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_company: Option<CustomCompany>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomCompany {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>, // data URL
}

/// Query string of `GET /api/jobs`. Unset filters are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employment_type: Option<EmploymentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_mode: Option<WorkMode>,
    pub limit: u32,
    pub page: u32,
}

/// Standard `{ success, data, pagination? }` envelope. A `success: false`
/// body may carry a `message` instead of `data`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub success: Option<bool>,
    pub message: Option<String>,
    #[serde(default)]
    pub data: T,
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub pages: u32,
}

/// Error body returned with non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    pub message: Option<String>,
}

/// One page of `GET /api/jobs`.
#[derive(Debug, Clone, PartialEq)]
pub struct JobPage {
    pub jobs: Vec<Job>,
    pub page: u32,
    pub pages: u32,
}

impl JobPage {
    pub fn has_more(&self) -> bool {
        self.page < self.pages
    }
}

/// A job as returned by the listing endpoint. Lenient: missing sections default to empty.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub company: Option<CompanyRef>,
    #[serde(default)]
    pub job_details: ListedJobDetails,
    pub category: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompanyRef {
    pub name: String,
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListedJobDetails {
    pub basic_info: ListedBasicInfo,
    pub location: ListedLocation,
    pub compensation: ListedCompensation,
    pub description: ListedDescription,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListedBasicInfo {
    pub job_title: String,
    pub employment_type: Option<String>,
    pub work_mode: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListedLocation {
    pub city: String,
    pub state: String,
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListedCompensation {
    pub salary: Option<u64>,
    pub min_salary: Option<u64>,
    pub max_salary: Option<u64>,
    pub salary_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListedDescription {
    pub role_summary: String,
}

/// An existing company an admin can post on behalf of.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Company {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub logo: Option<String>,
}
