// ABOUTME: Serializes a validated draft into the nested job document the API expects
// ABOUTME: Trims text, drops blank list entries and parses the salary to an integer

use crate::draft::list_field::non_blank;
use crate::draft::JobDraft;
use crate::error::{HireError, Result};
use crate::remote::models::{
    BasicInfoDoc, CompensationDoc, DescriptionDoc, JobDetails, JobDocument, LocationDoc,
    QualificationsDoc, STATUS_ACTIVE,
};

/// Accepts digits with optional `,` or `_` grouping, e.g. `12,00,000`.
pub fn parse_salary(raw: &str) -> Result<u64> {
    let digits: String = raw
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();
    digits.parse::<u64>().map_err(|_| {
        HireError::Validation(format!("salary '{}' must be a whole number", raw.trim()))
    })
}

fn optional_text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub fn build_job_document(draft: &JobDraft) -> Result<JobDocument> {
    let basic = &draft.basic_info;
    let location = &draft.location;
    let description = &draft.description;
    let qualifications = &draft.qualifications;

    let minimum_education = qualifications
        .minimum_education
        .ok_or_else(|| HireError::Validation("minimum education is required".to_string()))?;
    let years_of_experience = qualifications
        .years_of_experience
        .ok_or_else(|| HireError::Validation("years of experience is required".to_string()))?;

    Ok(JobDocument {
        job_details: JobDetails {
            basic_info: BasicInfoDoc {
                job_title: basic.title.trim().to_string(),
                department: basic.department.trim().to_string(),
                number_of_openings: basic.openings,
                employment_type: basic.employment_type,
                work_mode: basic.work_mode,
                job_level: basic.job_level,
            },
            location: LocationDoc {
                city: location.city.trim().to_string(),
                state: location.state.trim().to_string(),
                country: location.country.trim().to_string(),
                office_address: optional_text(&location.office_address),
            },
            compensation: CompensationDoc {
                salary: parse_salary(&draft.compensation.salary)?,
                salary_type: draft.compensation.salary_type,
            },
            description: DescriptionDoc {
                role_summary: description.role_summary.trim().to_string(),
                responsibilities: non_blank(&description.responsibilities),
                required_skills: non_blank(&description.required_skills),
            },
            qualifications: QualificationsDoc {
                minimum_education,
                preferred_education: qualifications.preferred_education,
                years_of_experience,
            },
        },
        benefits: non_blank(&draft.benefits),
        status: STATUS_ACTIVE.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{DraftEdit, ListEdit, ListField};
    use crate::testing::sample_draft;
    use serde_json::json;

    #[test]
    fn test_nested_paths_match_draft() {
        let value = serde_json::to_value(build_job_document(&sample_draft()).unwrap()).unwrap();
        let details = &value["jobDetails"];

        assert_eq!(details["basicInfo"]["jobTitle"], "Backend Engineer");
        assert_eq!(details["basicInfo"]["department"], "Platform");
        assert_eq!(details["basicInfo"]["numberOfOpenings"], 1);
        assert_eq!(details["basicInfo"]["employmentType"], "full-time");
        assert_eq!(details["basicInfo"]["workMode"], "remote");
        assert_eq!(details["basicInfo"]["jobLevel"], "mid");
        assert_eq!(details["location"]["city"], "Pune");
        assert_eq!(details["location"]["state"], "MH");
        assert_eq!(details["location"]["country"], "India");
        assert!(details["location"].get("officeAddress").is_none());
        assert_eq!(details["compensation"]["salary"], json!(1_200_000));
        assert!(details["compensation"]["salary"].is_u64());
        assert_eq!(details["compensation"]["salaryType"], "annual");
        assert_eq!(details["description"]["roleSummary"], "Build APIs");
        assert_eq!(
            details["description"]["responsibilities"],
            json!(["Design services", "Write tests"])
        );
        assert_eq!(details["description"]["requiredSkills"], json!(["Go", "SQL"]));
        assert_eq!(details["qualifications"]["minimumEducation"], "bachelors");
        assert_eq!(details["qualifications"]["yearsOfExperience"], 2);
        assert_eq!(value["benefits"], json!([]));
        assert_eq!(value["status"], "active");
    }

    #[test]
    fn test_blank_entries_are_dropped() {
        let draft = sample_draft()
            .apply(DraftEdit::List(ListField::Responsibilities, ListEdit::Add))
            .apply(DraftEdit::List(ListField::RequiredSkills, ListEdit::Add))
            .apply(DraftEdit::List(
                ListField::Benefits,
                ListEdit::Update {
                    index: 0,
                    value: "Health insurance".to_string(),
                },
            ))
            .apply(DraftEdit::List(ListField::Benefits, ListEdit::Add));

        let document = build_job_document(&draft).unwrap();
        assert_eq!(document.job_details.description.responsibilities.len(), 2);
        assert_eq!(document.job_details.description.required_skills, vec!["Go", "SQL"]);
        assert_eq!(document.benefits, vec!["Health insurance"]);
    }

    #[test]
    fn test_office_address_is_trimmed_or_omitted() {
        let draft = sample_draft().apply(DraftEdit::OfficeAddress(Some("  Baner Road ".to_string())));
        let document = build_job_document(&draft).unwrap();
        assert_eq!(
            document.job_details.location.office_address.as_deref(),
            Some("Baner Road")
        );

        let draft = sample_draft().apply(DraftEdit::OfficeAddress(Some("  ".to_string())));
        let document = build_job_document(&draft).unwrap();
        assert!(document.job_details.location.office_address.is_none());
    }

    #[test]
    fn test_parse_salary() {
        assert_eq!(parse_salary("1200000").unwrap(), 1_200_000);
        assert_eq!(parse_salary(" 12,00,000 ").unwrap(), 1_200_000);
        assert_eq!(parse_salary("45_000").unwrap(), 45_000);
        assert!(parse_salary("12k").is_err());
        assert!(parse_salary("-5").is_err());
    }

    #[test]
    fn test_unparseable_salary_is_a_validation_error() {
        let draft = sample_draft().apply(DraftEdit::Salary("competitive".to_string()));
        let err = build_job_document(&draft).unwrap_err();
        assert!(matches!(err, HireError::Validation(_)));
    }
}
