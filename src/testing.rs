// ABOUTME: Test fixtures: a scripted in-memory JobsApi and a known-good draft
// ABOUTME: Every mock call is recorded; calls can be failed or held in flight

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Semaphore;

use crate::draft::{
    DraftEdit, Education, EmploymentType, JobDraft, JobLevel, ListEdit, ListField, SalaryType,
    WorkMode,
};
use crate::error::{HireError, Result};
use crate::remote::models::{Job, ListedBasicInfo, ListedJobDetails};
use crate::remote::{AdminJobDocument, Company, JobDocument, JobPage, JobQuery, JobsApi};
use crate::wizard::{FormController, Step};

/// The "Backend Engineer" posting, valid on every step.
pub fn sample_draft() -> JobDraft {
    let list = |field, index, value: &str| {
        DraftEdit::List(
            field,
            ListEdit::Update {
                index,
                value: value.to_string(),
            },
        )
    };
    let edits = vec![
        DraftEdit::Title("Backend Engineer".to_string()),
        DraftEdit::Department("Platform".to_string()),
        DraftEdit::EmploymentType(EmploymentType::FullTime),
        DraftEdit::WorkMode(WorkMode::Remote),
        DraftEdit::JobLevel(JobLevel::Mid),
        DraftEdit::City("Pune".to_string()),
        DraftEdit::State("MH".to_string()),
        DraftEdit::Country("India".to_string()),
        DraftEdit::Salary("1200000".to_string()),
        DraftEdit::SalaryType(SalaryType::Annual),
        DraftEdit::RoleSummary("Build APIs".to_string()),
        list(ListField::Responsibilities, 0, "Design services"),
        DraftEdit::List(ListField::Responsibilities, ListEdit::Add),
        list(ListField::Responsibilities, 1, "Write tests"),
        list(ListField::RequiredSkills, 0, "Go"),
        DraftEdit::List(ListField::RequiredSkills, ListEdit::Add),
        list(ListField::RequiredSkills, 1, "SQL"),
        DraftEdit::MinimumEducation(Some(Education::Bachelors)),
        DraftEdit::YearsOfExperience(Some(2)),
    ];
    edits
        .into_iter()
        .fold(JobDraft::default(), |draft, edit| draft.apply(edit))
}

/// A form filled with [`sample_draft`] and walked to the review step.
pub fn complete_form() -> FormController {
    let mut form = FormController::new();
    let draft = sample_draft();
    form.apply(DraftEdit::Title(draft.basic_info.title.clone()));
    form.apply(DraftEdit::Department(draft.basic_info.department.clone()));
    form.apply(DraftEdit::WorkMode(draft.basic_info.work_mode));
    form.apply(DraftEdit::JobLevel(draft.basic_info.job_level));
    assert!(form.next());
    form.apply(DraftEdit::City(draft.location.city.clone()));
    form.apply(DraftEdit::State(draft.location.state.clone()));
    form.apply(DraftEdit::Country(draft.location.country.clone()));
    assert!(form.next());
    form.apply(DraftEdit::Salary(draft.compensation.salary.clone()));
    assert!(form.next());
    form.apply(DraftEdit::RoleSummary(draft.description.role_summary.clone()));
    for (i, r) in draft.description.responsibilities.iter().enumerate() {
        if i > 0 {
            form.apply(DraftEdit::List(ListField::Responsibilities, ListEdit::Add));
        }
        form.apply(DraftEdit::List(
            ListField::Responsibilities,
            ListEdit::Update {
                index: i,
                value: r.clone(),
            },
        ));
    }
    for (i, s) in draft.description.required_skills.iter().enumerate() {
        if i > 0 {
            form.apply(DraftEdit::List(ListField::RequiredSkills, ListEdit::Add));
        }
        form.apply(DraftEdit::List(
            ListField::RequiredSkills,
            ListEdit::Update {
                index: i,
                value: s.clone(),
            },
        ));
    }
    assert!(form.next());
    form.apply(DraftEdit::MinimumEducation(draft.qualifications.minimum_education));
    form.apply(DraftEdit::YearsOfExperience(draft.qualifications.years_of_experience));
    assert!(form.next());
    assert_eq!(form.step(), Step::Review);
    assert_eq!(form.draft(), &draft);
    form
}

pub fn job(id: &str, title: &str) -> Job {
    Job {
        id: id.to_string(),
        company: None,
        job_details: ListedJobDetails {
            basic_info: ListedBasicInfo {
                job_title: title.to_string(),
                ..Default::default()
            },
            ..Default::default()
        },
        category: None,
        created_at: None,
    }
}

pub fn page_of(ids: &[&str], page: u32, pages: u32) -> JobPage {
    JobPage {
        jobs: ids.iter().map(|id| job(id, &format!("Job {}", id))).collect(),
        page,
        pages,
    }
}

/// Arguments captured from a mock call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    CreateJob { token: String, document: JobDocument },
    CreateAdminJob { token: String, document: AdminJobDocument },
    ListJobs(JobQuery),
    SavedIds,
    Save(String),
    Unsave(String),
    ListCompanies,
}

type ListHandler = Box<dyn Fn(&JobQuery) -> Result<JobPage> + Send + Sync>;

pub struct MockJobsApi {
    calls: Mutex<Vec<ApiCall>>,
    list_handler: ListHandler,
    saved_ids: Vec<String>,
    companies: Vec<Company>,
    failure: Mutex<Option<u16>>,
    gate: Mutex<Option<Arc<Semaphore>>>,
}

impl Default for MockJobsApi {
    fn default() -> Self {
        Self::new()
    }
}

impl MockJobsApi {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            list_handler: Box::new(|q| {
                Ok(JobPage {
                    jobs: Vec::new(),
                    page: q.page,
                    pages: q.page,
                })
            }),
            saved_ids: Vec::new(),
            companies: Vec::new(),
            failure: Mutex::new(None),
            gate: Mutex::new(None),
        }
    }

    /// Serves each page by its `page` number; unknown pages come back empty.
    pub fn with_pages(self, pages: Vec<JobPage>) -> Self {
        self.with_list_handler(move |q| {
            Ok(pages
                .iter()
                .find(|p| p.page == q.page)
                .cloned()
                .unwrap_or(JobPage {
                    jobs: Vec::new(),
                    page: q.page,
                    pages: q.page,
                }))
        })
    }

    pub fn with_list_handler(
        mut self,
        handler: impl Fn(&JobQuery) -> Result<JobPage> + Send + Sync + 'static,
    ) -> Self {
        self.list_handler = Box::new(handler);
        self
    }

    pub fn with_saved_ids(mut self, ids: &[&str]) -> Self {
        self.saved_ids = ids.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_companies(mut self, companies: Vec<Company>) -> Self {
        self.companies = companies;
        self
    }

    /// Every following call fails with `status`.
    pub fn fail_with(&self, status: u16) {
        *self.failure.lock().unwrap() = Some(status);
    }

    pub fn succeed(&self) {
        *self.failure.lock().unwrap() = None;
    }

    /// Holds every following call in flight until a permit is added.
    pub fn gate(&self) -> Arc<Semaphore> {
        let gate = Arc::new(Semaphore::new(0));
        *self.gate.lock().unwrap() = Some(Arc::clone(&gate));
        gate
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    async fn record(&self, call: ApiCall) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        let gate = self.gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.acquire()
                .await
                .map_err(|e| HireError::Parse(e.to_string()))?
                .forget();
        }
        match *self.failure.lock().unwrap() {
            Some(status) => Err(HireError::Api {
                status,
                message: "simulated failure".to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl JobsApi for MockJobsApi {
    async fn create_job(&self, token: &str, document: &JobDocument) -> Result<()> {
        self.record(ApiCall::CreateJob {
            token: token.to_string(),
            document: document.clone(),
        })
        .await
    }

    async fn create_admin_job(&self, token: &str, document: &AdminJobDocument) -> Result<()> {
        self.record(ApiCall::CreateAdminJob {
            token: token.to_string(),
            document: document.clone(),
        })
        .await
    }

    async fn list_jobs(&self, query: &JobQuery) -> Result<JobPage> {
        let response = (self.list_handler)(query);
        self.record(ApiCall::ListJobs(query.clone())).await?;
        response
    }

    async fn saved_job_ids(&self, _token: &str) -> Result<Vec<String>> {
        self.record(ApiCall::SavedIds).await?;
        Ok(self.saved_ids.clone())
    }

    async fn save_job(&self, _token: &str, job_id: &str) -> Result<()> {
        self.record(ApiCall::Save(job_id.to_string())).await
    }

    async fn unsave_job(&self, _token: &str, job_id: &str) -> Result<()> {
        self.record(ApiCall::Unsave(job_id.to_string())).await
    }

    async fn list_companies(&self, _token: &str) -> Result<Vec<Company>> {
        self.record(ApiCall::ListCompanies).await?;
        Ok(self.companies.clone())
    }
}
