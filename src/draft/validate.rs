// ABOUTME: Per-step validation predicates for the job draft
// ABOUTME: Pure functions of the draft; the wizard gates "next" on them

use super::list_field::non_blank;
use super::JobDraft;
use crate::wizard::Step;

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

pub fn validate_step(draft: &JobDraft, step: Step) -> bool {
    missing_fields(draft, step).is_empty()
}

/// Names of the required inputs that are still missing on `step`.
pub fn missing_fields(draft: &JobDraft, step: Step) -> Vec<&'static str> {
    let mut missing = Vec::new();
    match step {
        Step::Basics => {
            let basic = &draft.basic_info;
            if blank(&basic.title) {
                missing.push("job title");
            }
            if blank(&basic.department) {
                missing.push("department");
            }
            if basic.openings < 1 {
                missing.push("number of openings");
            }
        }
        Step::Location => {
            let loc = &draft.location;
            if blank(&loc.city) {
                missing.push("city");
            }
            if blank(&loc.state) {
                missing.push("state");
            }
            if blank(&loc.country) {
                missing.push("country");
            }
        }
        Step::Compensation => {
            if blank(&draft.compensation.salary) {
                missing.push("salary");
            }
        }
        Step::Description => {
            let desc = &draft.description;
            if blank(&desc.role_summary) {
                missing.push("role summary");
            }
            if non_blank(&desc.responsibilities).is_empty() {
                missing.push("at least one responsibility");
            }
            if non_blank(&desc.required_skills).is_empty() {
                missing.push("at least one required skill");
            }
        }
        Step::Qualifications => {
            let q = &draft.qualifications;
            if q.minimum_education.is_none() {
                missing.push("minimum education");
            }
            if q.years_of_experience.is_none() {
                missing.push("years of experience");
            }
        }
        Step::Review => {}
    }
    missing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{DraftEdit, Education, ListEdit, ListField};
    use crate::testing::sample_draft;

    #[test]
    fn test_default_draft_fails_every_input_step() {
        let draft = JobDraft::default();
        for step in Step::ALL {
            let valid = validate_step(&draft, *step);
            assert_eq!(valid, *step == Step::Review, "step {:?}", step);
        }
    }

    #[test]
    fn test_sample_draft_passes_every_step() {
        let draft = sample_draft();
        for step in Step::ALL {
            assert!(validate_step(&draft, *step), "step {:?}", step);
        }
    }

    #[test]
    fn test_whitespace_counts_as_blank() {
        let draft = sample_draft().apply(DraftEdit::City("   ".to_string()));
        assert_eq!(missing_fields(&draft, Step::Location), vec!["city"]);
    }

    #[test]
    fn test_zero_openings_fails_basics() {
        let draft = sample_draft().apply(DraftEdit::Openings(0));
        assert!(!validate_step(&draft, Step::Basics));
    }

    #[test]
    fn test_blank_list_entries_do_not_count() {
        let draft = sample_draft()
            .apply(DraftEdit::List(
                ListField::Responsibilities,
                ListEdit::Update {
                    index: 0,
                    value: " ".to_string(),
                },
            ))
            .apply(DraftEdit::List(
                ListField::Responsibilities,
                ListEdit::Remove { index: 1 },
            ));
        assert_eq!(
            missing_fields(&draft, Step::Description),
            vec!["at least one responsibility"]
        );
    }

    #[test]
    fn test_qualifications_require_education_and_experience() {
        let draft = sample_draft()
            .apply(DraftEdit::MinimumEducation(None))
            .apply(DraftEdit::YearsOfExperience(None));
        assert_eq!(
            missing_fields(&draft, Step::Qualifications),
            vec!["minimum education", "years of experience"]
        );

        let draft = draft
            .apply(DraftEdit::MinimumEducation(Some(Education::Diploma)))
            .apply(DraftEdit::YearsOfExperience(Some(0)));
        assert!(validate_step(&draft, Step::Qualifications));
    }
}
