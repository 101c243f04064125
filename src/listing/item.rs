// ABOUTME: Read-only display rows derived from fetched jobs
// ABOUTME: Flattens location, formats salary and date, truncates the description

use crate::remote::models::{CompanyRef, Job, ListedCompensation};

pub const DESCRIPTION_LIMIT: usize = 150;

#[derive(Debug, Clone, PartialEq)]
pub struct JobListItem {
    pub id: String,
    pub title: String,
    pub company: Option<CompanyRef>,
    pub location: String,
    pub employment_type: Option<String>,
    pub salary: Option<String>,
    pub category: Option<String>,
    pub description: String,
    pub posted: String,
}

impl JobListItem {
    pub fn from_job(job: &Job) -> Self {
        let details = &job.job_details;
        let loc = &details.location;
        let location = [&loc.city, &loc.state, &loc.country]
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            id: job.id.clone(),
            title: details.basic_info.job_title.clone(),
            company: job.company.clone(),
            location,
            employment_type: details.basic_info.employment_type.clone(),
            salary: format_salary(&details.compensation),
            category: job.category.clone(),
            description: truncate(&details.description.role_summary, DESCRIPTION_LIMIT),
            posted: job
                .created_at
                .map(|d| d.format("%b %-d, %Y").to_string())
                .unwrap_or_else(|| "Recently".to_string()),
        }
    }
}

/// Cuts to `limit` characters and appends `...` when anything was removed.
pub fn truncate(text: &str, limit: usize) -> String {
    let text = text.trim();
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn format_salary(comp: &ListedCompensation) -> Option<String> {
    let amount = match (comp.min_salary, comp.max_salary, comp.salary) {
        (Some(min), Some(max), _) if min != max => {
            format!("{} - {}", group_thousands(min), group_thousands(max))
        }
        (Some(v), _, _) | (_, Some(v), _) | (_, _, Some(v)) => group_thousands(v),
        _ => return None,
    };
    Some(match comp.salary_type.as_deref() {
        Some(kind) if !kind.is_empty() => format!("{} / {}", amount, kind),
        _ => amount,
    })
}
