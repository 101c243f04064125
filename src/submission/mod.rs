// ABOUTME: Submission pipeline: validated draft -> job document -> POST
// ABOUTME: Resets the wizard on success and leaves it untouched on failure

mod logo;
mod payload;

use std::sync::Arc;

use tracing::{info, warn};

use crate::error::{HireError, Result};
use crate::remote::models::{AdminJobDocument, CustomCompany};
use crate::remote::{Company, JobDocument, JobsApi};
use crate::session::Session;
use crate::wizard::{FormController, Step};

pub use logo::{encode_data_url, logo_data_url};
pub use payload::{build_job_document, parse_salary};

/// Returned after the server accepted a posting; the caller refreshes its list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitted {
    pub title: String,
}

/// Which company an admin posts on behalf of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanyChoice {
    Existing { id: String },
    /// Registered inline; `logo` is a data URL.
    New { name: String, logo: Option<String> },
}

impl CompanyChoice {
    pub fn validate(&self) -> Result<()> {
        let ok = match self {
            CompanyChoice::Existing { id } => !id.trim().is_empty(),
            CompanyChoice::New { name, .. } => !name.trim().is_empty(),
        };
        if ok {
            Ok(())
        } else {
            Err(HireError::Validation(
                "select an existing company or enter a new company name".to_string(),
            ))
        }
    }

    fn attach(&self, job: JobDocument) -> AdminJobDocument {
        match self {
            CompanyChoice::Existing { id } => AdminJobDocument {
                job,
                company_id: Some(id.trim().to_string()),
                custom_company: None,
            },
            CompanyChoice::New { name, logo } => AdminJobDocument {
                job,
                company_id: None,
                custom_company: Some(CustomCompany {
                    name: name.trim().to_string(),
                    logo: logo.clone(),
                }),
            },
        }
    }
}

pub struct SubmissionPipeline<A: ?Sized> {
    api: Arc<A>,
    session: Session,
}

impl<A: JobsApi + ?Sized> SubmissionPipeline<A> {
    pub fn new(api: Arc<A>, session: Session) -> Self {
        Self { api, session }
    }

    /// Checks authentication and every step, then builds the document.
    fn prepare(&self, form: &FormController) -> Result<(String, JobDocument)> {
        let token = self.session.require_token()?.to_string();
        if !form.is_complete() {
            let incomplete: Vec<String> = Step::ALL
                .iter()
                .filter(|s| !crate::draft::validate_step(form.draft(), **s))
                .map(|s| s.title().to_string())
                .collect();
            return Err(HireError::Validation(format!(
                "incomplete steps: {}",
                incomplete.join(", ")
            )));
        }
        let document = build_job_document(form.draft())?;
        Ok((token, document))
    }

    pub async fn submit(&self, form: &mut FormController) -> Result<Submitted> {
        let (token, document) = self.prepare(form)?;
        let title = document.job_details.basic_info.job_title.clone();
        info!(%title, "Submitting job posting");

        match self.api.create_job(&token, &document).await {
            Ok(()) => {
                info!(%title, "Job posting created");
                form.reset();
                Ok(Submitted { title })
            }
            Err(e) => {
                warn!(%title, error = %e, "Job posting failed; draft kept for retry");
                Err(e)
            }
        }
    }

    pub async fn submit_admin(
        &self,
        form: &mut FormController,
        company: &CompanyChoice,
    ) -> Result<Submitted> {
        company.validate()?;
        let (token, document) = self.prepare(form)?;
        let title = document.job_details.basic_info.job_title.clone();
        let document = company.attach(document);
        info!(%title, company_id = ?document.company_id, "Submitting job on behalf of company");

        match self.api.create_admin_job(&token, &document).await {
            Ok(()) => {
                info!(%title, "Admin job posting created");
                form.reset();
                Ok(Submitted { title })
            }
            Err(e) => {
                warn!(%title, error = %e, "Admin job posting failed; draft kept for retry");
                Err(e)
            }
        }
    }

    pub async fn list_companies(&self) -> Result<Vec<Company>> {
        let token = self.session.require_token()?;
        self.api.list_companies(token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::DraftEdit;
    use crate::testing::{complete_form, ApiCall, MockJobsApi};

    fn pipeline(api: &Arc<MockJobsApi>) -> SubmissionPipeline<MockJobsApi> {
        SubmissionPipeline::new(Arc::clone(api), Session::with_token("tok"))
    }

    #[tokio::test]
    async fn test_backend_engineer_end_to_end() {
        let api = Arc::new(MockJobsApi::new());
        let mut form = complete_form();
        assert_eq!(form.step(), Step::Review);

        let submitted = pipeline(&api).submit(&mut form).await.unwrap();
        assert_eq!(submitted.title, "Backend Engineer");

        let calls = api.calls();
        assert_eq!(calls.len(), 1);
        match &calls[0] {
            ApiCall::CreateJob { token, document } => {
                assert_eq!(token, "tok");
                assert_eq!(document.job_details.compensation.salary, 1_200_000);
                assert_eq!(document.job_details.description.responsibilities.len(), 2);
                assert_eq!(document.status, "active");
            }
            other => panic!("unexpected call {:?}", other),
        }

        assert_eq!(form.step(), Step::Basics);
        assert_eq!(form.draft(), &crate::draft::JobDraft::default());
    }

    #[tokio::test]
    async fn test_failure_preserves_draft_and_step() {
        let api = Arc::new(MockJobsApi::new());
        api.fail_with(500);
        let mut form = complete_form();
        let before = form.draft().clone();

        let err = pipeline(&api).submit(&mut form).await.unwrap_err();
        assert!(matches!(err, HireError::Api { status: 500, .. }));
        assert_eq!(form.step(), Step::Review);
        assert_eq!(form.draft(), &before);
        assert_eq!(api.calls().len(), 1);

        api.succeed();
        pipeline(&api).submit(&mut form).await.unwrap();
        assert_eq!(api.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_incomplete_draft_sends_nothing() {
        let api = Arc::new(MockJobsApi::new());
        let mut form = complete_form();
        form.apply(DraftEdit::Country(String::new()));

        let err = pipeline(&api).submit(&mut form).await.unwrap_err();
        assert!(matches!(err, HireError::Validation(ref m) if m.contains("Location")));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_anonymous_submit_sends_nothing() {
        let api = Arc::new(MockJobsApi::new());
        let mut form = complete_form();
        let pipeline = SubmissionPipeline::new(Arc::clone(&api), Session::anonymous());

        let err = pipeline.submit(&mut form).await.unwrap_err();
        assert!(matches!(err, HireError::Unauthenticated));
        assert!(api.calls().is_empty());
        assert_eq!(form.step(), Step::Review);
    }

    #[tokio::test]
    async fn test_admin_requires_company() {
        let api = Arc::new(MockJobsApi::new());
        let mut form = complete_form();

        let blank = CompanyChoice::New {
            name: "  ".to_string(),
            logo: None,
        };
        let err = pipeline(&api).submit_admin(&mut form, &blank).await.unwrap_err();
        assert!(matches!(err, HireError::Validation(_)));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_admin_new_company_payload() {
        let api = Arc::new(MockJobsApi::new());
        let mut form = complete_form();
        let choice = CompanyChoice::New {
            name: " Acme Labs ".to_string(),
            logo: Some(encode_data_url("image/png", b"png")),
        };

        pipeline(&api).submit_admin(&mut form, &choice).await.unwrap();

        let calls = api.calls();
        let ApiCall::CreateAdminJob { document, .. } = &calls[0] else {
            panic!("unexpected call {:?}", calls[0]);
        };
        let value = serde_json::to_value(document).unwrap();
        assert_eq!(value["customCompany"]["name"], "Acme Labs");
        assert_eq!(value["customCompany"]["logo"], "data:image/png;base64,cG5n");
        assert!(value.get("companyId").is_none());
        assert_eq!(value["jobDetails"]["basicInfo"]["jobTitle"], "Backend Engineer");
        assert_eq!(form.step(), Step::Basics);
    }

    #[tokio::test]
    async fn test_list_companies_requires_login() {
        let api = Arc::new(MockJobsApi::new().with_companies(vec![Company {
            id: "c1".to_string(),
            name: "Acme".to_string(),
            logo: None,
        }]));

        let companies = pipeline(&api).list_companies().await.unwrap();
        assert_eq!(companies[0].name, "Acme");
        assert_eq!(api.calls(), vec![ApiCall::ListCompanies]);

        let anonymous = SubmissionPipeline::new(Arc::clone(&api), Session::anonymous());
        assert!(matches!(
            anonymous.list_companies().await,
            Err(HireError::Unauthenticated)
        ));
        assert_eq!(api.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_admin_existing_company_payload() {
        let api = Arc::new(MockJobsApi::new());
        let mut form = complete_form();
        let choice = CompanyChoice::Existing {
            id: "c-42".to_string(),
        };

        pipeline(&api).submit_admin(&mut form, &choice).await.unwrap();

        let calls = api.calls();
        let ApiCall::CreateAdminJob { document, .. } = &calls[0] else {
            panic!("unexpected call {:?}", calls[0]);
        };
        assert_eq!(document.company_id.as_deref(), Some("c-42"));
        assert!(document.custom_company.is_none());
    }
}
