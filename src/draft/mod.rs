// ABOUTME: The in-progress job posting (draft) and the edits that can be applied to it
// ABOUTME: Drafts are plain values; every edit produces a new draft

pub mod list_field;
pub mod validate;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use list_field::{ListEdit, ListField};
pub use validate::{missing_fields, validate_step};

/// Declares a closed set of wire values with `as_str`, `ALL`, `Display` and `FromStr`.
macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $wire)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_ascii_lowercase();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == wanted)
                    .ok_or_else(|| {
                        let allowed: Vec<&str> = $name::ALL.iter().map(|v| v.as_str()).collect();
                        format!("'{}' is not one of: {}", s, allowed.join(", "))
                    })
            }
        }
    };
}

wire_enum!(EmploymentType {
    FullTime => "full-time",
    PartTime => "part-time",
    Contract => "contract",
    Internship => "internship",
});

wire_enum!(WorkMode {
    Onsite => "onsite",
    Remote => "remote",
    Hybrid => "hybrid",
});

wire_enum!(JobLevel {
    Fresher => "fresher",
    Junior => "junior",
    Mid => "mid",
    Senior => "senior",
    Lead => "lead",
    Executive => "executive",
});

wire_enum!(SalaryType {
    Annual => "annual",
    Monthly => "monthly",
    Hourly => "hourly",
});

wire_enum!(Education {
    HighSchool => "high-school",
    Diploma => "diploma",
    Bachelors => "bachelors",
    Masters => "masters",
    Doctorate => "doctorate",
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicInfo {
    pub title: String,
    pub department: String,
    pub openings: u32,
    pub employment_type: EmploymentType,
    pub work_mode: WorkMode,
    pub job_level: JobLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub country: String,
    pub office_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compensation {
    /// Kept as typed text until submission parses it.
    pub salary: String,
    pub salary_type: SalaryType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    pub role_summary: String,
    pub responsibilities: Vec<String>,
    pub required_skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Qualifications {
    pub minimum_education: Option<Education>,
    pub preferred_education: Option<Education>,
    pub years_of_experience: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobDraft {
    pub basic_info: BasicInfo,
    pub location: Location,
    pub compensation: Compensation,
    pub description: Description,
    pub qualifications: Qualifications,
    pub benefits: Vec<String>,
}

impl Default for JobDraft {
    fn default() -> Self {
        Self {
            basic_info: BasicInfo {
                title: String::new(),
                department: String::new(),
                openings: 1,
                employment_type: EmploymentType::FullTime,
                work_mode: WorkMode::Onsite,
                job_level: JobLevel::Fresher,
            },
            location: Location::default(),
            compensation: Compensation {
                salary: String::new(),
                salary_type: SalaryType::Annual,
            },
            description: Description {
                role_summary: String::new(),
                responsibilities: vec![String::new()],
                required_skills: vec![String::new()],
            },
            qualifications: Qualifications::default(),
            benefits: vec![String::new()],
        }
    }
}

/// A single described mutation of a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEdit {
    Title(String),
    Department(String),
    Openings(u32),
    EmploymentType(EmploymentType),
    WorkMode(WorkMode),
    JobLevel(JobLevel),
    City(String),
    State(String),
    Country(String),
    OfficeAddress(Option<String>),
    Salary(String),
    SalaryType(SalaryType),
    RoleSummary(String),
    MinimumEducation(Option<Education>),
    PreferredEducation(Option<Education>),
    YearsOfExperience(Option<u32>),
    List(ListField, ListEdit),
}

impl JobDraft {
    /// Returns a copy of this draft with `edit` applied.
    pub fn apply(&self, edit: DraftEdit) -> JobDraft {
        let mut next = self.clone();
        match edit {
            DraftEdit::Title(v) => next.basic_info.title = v,
            DraftEdit::Department(v) => next.basic_info.department = v,
            DraftEdit::Openings(v) => next.basic_info.openings = v,
            DraftEdit::EmploymentType(v) => next.basic_info.employment_type = v,
            DraftEdit::WorkMode(v) => next.basic_info.work_mode = v,
            DraftEdit::JobLevel(v) => next.basic_info.job_level = v,
            DraftEdit::City(v) => next.location.city = v,
            DraftEdit::State(v) => next.location.state = v,
            DraftEdit::Country(v) => next.location.country = v,
            DraftEdit::OfficeAddress(v) => next.location.office_address = v,
            DraftEdit::Salary(v) => next.compensation.salary = v,
            DraftEdit::SalaryType(v) => next.compensation.salary_type = v,
            DraftEdit::RoleSummary(v) => next.description.role_summary = v,
            DraftEdit::MinimumEducation(v) => next.qualifications.minimum_education = v,
            DraftEdit::PreferredEducation(v) => next.qualifications.preferred_education = v,
            DraftEdit::YearsOfExperience(v) => next.qualifications.years_of_experience = v,
            DraftEdit::List(field, list_edit) => {
                list_edit.apply_to(next.list_mut(field));
            }
        }
        next
    }

    pub fn list(&self, field: ListField) -> &[String] {
        match field {
            ListField::Responsibilities => &self.description.responsibilities,
            ListField::RequiredSkills => &self.description.required_skills,
            ListField::Benefits => &self.benefits,
        }
    }

    fn list_mut(&mut self, field: ListField) -> &mut Vec<String> {
        match field {
            ListField::Responsibilities => &mut self.description.responsibilities,
            ListField::RequiredSkills => &mut self.description.required_skills,
            ListField::Benefits => &mut self.benefits,
        }
    }
}
