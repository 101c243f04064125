// ABOUTME: Interactive job-posting wizard (`him post` and `him admin-post`)
// ABOUTME: Prompts per step, gates Next on validation, submits from the review step

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use indicatif::ProgressBar;

use hire_in_minutes::draft::{
    missing_fields, DraftEdit, Education, EmploymentType, JobDraft, JobLevel, ListEdit, ListField,
    SalaryType, WorkMode,
};
use hire_in_minutes::remote::RemoteClient;
use hire_in_minutes::submission::{logo_data_url, CompanyChoice, SubmissionPipeline};
use hire_in_minutes::wizard::{FormController, Retreat, Step};
use hire_in_minutes::HireError;

use super::App;

pub async fn run(app: &App, admin: bool) -> Result<()> {
    if !app.session.is_authenticated() {
        bail!(HireError::Unauthenticated);
    }
    let theme = ColorfulTheme::default();
    let pipeline = SubmissionPipeline::new(Arc::clone(&app.api), app.session.clone());

    let company = if admin {
        Some(choose_company(&theme, &pipeline).await?)
    } else {
        None
    };

    let mut form = FormController::new();
    loop {
        println!("\n== {} ==", form.step());

        if form.step() == Step::Review {
            print_review(form.draft());
            match review_action(&theme)? {
                ReviewAction::Submit => {
                    let spinner = ProgressBar::new_spinner();
                    spinner.set_message("Submitting job posting...");
                    spinner.enable_steady_tick(Duration::from_millis(100));
                    let result = match &company {
                        Some(choice) => pipeline.submit_admin(&mut form, choice).await,
                        None => pipeline.submit(&mut form).await,
                    };
                    spinner.finish_and_clear();
                    match result {
                        Ok(submitted) => {
                            println!("Job \"{}\" posted. It is now live.", submitted.title);
                            return Ok(());
                        }
                        // Draft is untouched; the user can retry or edit.
                        Err(e) => eprintln!("Could not post the job: {}", e),
                    }
                }
                ReviewAction::Edit(step) => {
                    form.go_to(step);
                }
                ReviewAction::Back => {
                    form.previous();
                }
                ReviewAction::Cancel => {
                    form.reset();
                    println!("Posting cancelled.");
                    return Ok(());
                }
            }
            continue;
        }

        prompt_step(&theme, &mut form)?;

        let missing = missing_fields(form.draft(), form.step());
        if !missing.is_empty() {
            println!("Still needed: {}", missing.join(", "));
        }

        let back_label = if form.step() == Step::Basics {
            "Cancel posting"
        } else {
            "Back"
        };
        let mut options = vec!["Edit this step again", back_label];
        if form.can_advance() {
            options.insert(0, "Next");
        }
        let choice = Select::with_theme(&theme)
            .items(&options)
            .default(0)
            .interact()?;
        match options[choice] {
            "Next" => {
                form.next();
            }
            "Edit this step again" => {}
            _ => {
                if form.previous() == Retreat::CancelFlow {
                    form.reset();
                    println!("Posting cancelled.");
                    return Ok(());
                }
            }
        }
    }
}

async fn choose_company(
    theme: &ColorfulTheme,
    pipeline: &SubmissionPipeline<RemoteClient>,
) -> Result<CompanyChoice> {
    let companies = match pipeline.list_companies().await {
        Ok(companies) => companies,
        Err(e) => {
            eprintln!("Could not load companies ({}); you can still register a new one.", e);
            Vec::new()
        }
    };

    let mut items: Vec<String> = companies.iter().map(|c| c.name.clone()).collect();
    items.push("Register a new company".to_string());
    let choice = Select::with_theme(theme)
        .with_prompt("Post on behalf of")
        .items(&items)
        .default(0)
        .interact()?;

    let company = match companies.get(choice) {
        Some(existing) => CompanyChoice::Existing {
            id: existing.id.clone(),
        },
        None => {
            let name: String = Input::with_theme(theme)
                .with_prompt("Company name")
                .interact_text()?;
            let logo = if Confirm::with_theme(theme)
                .with_prompt("Upload a logo?")
                .default(false)
                .interact()?
            {
                let path: String = Input::with_theme(theme)
                    .with_prompt("Path to logo image")
                    .interact_text()?;
                Some(logo_data_url(path.trim())?)
            } else {
                None
            };
            CompanyChoice::New { name, logo }
        }
    };
    company.validate()?;
    Ok(company)
}

fn text(theme: &ColorfulTheme, prompt: &str, current: &str, optional: bool) -> Result<String> {
    Ok(Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .with_initial_text(current)
        .allow_empty(optional)
        .interact_text()?)
}

fn pick<T: Copy + PartialEq + ToString>(
    theme: &ColorfulTheme,
    prompt: &str,
    all: &[T],
    current: T,
) -> Result<T> {
    let labels: Vec<String> = all.iter().map(ToString::to_string).collect();
    let index = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&labels)
        .default(all.iter().position(|v| *v == current).unwrap_or(0))
        .interact()?;
    Ok(all[index])
}

fn pick_optional<T: Copy + PartialEq + ToString>(
    theme: &ColorfulTheme,
    prompt: &str,
    all: &[T],
    current: Option<T>,
) -> Result<Option<T>> {
    let mut labels = vec!["(none)".to_string()];
    labels.extend(all.iter().map(ToString::to_string));
    let default = current
        .and_then(|c| all.iter().position(|v| *v == c))
        .map(|i| i + 1)
        .unwrap_or(0);
    let index = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;
    Ok(index.checked_sub(1).map(|i| all[i]))
}

fn prompt_step(theme: &ColorfulTheme, form: &mut FormController) -> Result<()> {
    let draft = form.draft().clone();
    match form.step() {
        Step::Basics => {
            let basic = &draft.basic_info;
            form.apply(DraftEdit::Title(text(theme, "Job title", &basic.title, false)?));
            form.apply(DraftEdit::Department(text(theme, "Department", &basic.department, false)?));
            let openings: u32 = Input::with_theme(theme)
                .with_prompt("Number of openings")
                .default(basic.openings)
                .validate_with(|n: &u32| if *n >= 1 { Ok(()) } else { Err("at least 1") })
                .interact_text()?;
            form.apply(DraftEdit::Openings(openings));
            form.apply(DraftEdit::EmploymentType(pick(
                theme,
                "Employment type",
                EmploymentType::ALL,
                basic.employment_type,
            )?));
            form.apply(DraftEdit::WorkMode(pick(theme, "Work mode", WorkMode::ALL, basic.work_mode)?));
            form.apply(DraftEdit::JobLevel(pick(theme, "Job level", JobLevel::ALL, basic.job_level)?));
        }
        Step::Location => {
            let loc = &draft.location;
            form.apply(DraftEdit::City(text(theme, "City", &loc.city, false)?));
            form.apply(DraftEdit::State(text(theme, "State", &loc.state, false)?));
            form.apply(DraftEdit::Country(text(theme, "Country", &loc.country, false)?));
            let address = text(
                theme,
                "Office address (optional)",
                loc.office_address.as_deref().unwrap_or(""),
                true,
            )?;
            form.apply(DraftEdit::OfficeAddress(
                (!address.trim().is_empty()).then_some(address),
            ));
        }
        Step::Compensation => {
            let comp = &draft.compensation;
            form.apply(DraftEdit::Salary(text(theme, "Salary", &comp.salary, false)?));
            form.apply(DraftEdit::SalaryType(pick(
                theme,
                "Salary type",
                SalaryType::ALL,
                comp.salary_type,
            )?));
        }
        Step::Description => {
            form.apply(DraftEdit::RoleSummary(text(
                theme,
                "Role summary",
                &draft.description.role_summary,
                false,
            )?));
            edit_list(theme, form, ListField::Responsibilities)?;
            edit_list(theme, form, ListField::RequiredSkills)?;
        }
        Step::Qualifications => {
            let q = &draft.qualifications;
            let minimum = pick_optional(theme, "Minimum education", Education::ALL, q.minimum_education)?;
            form.apply(DraftEdit::MinimumEducation(minimum));
            let preferred =
                pick_optional(theme, "Preferred education", Education::ALL, q.preferred_education)?;
            form.apply(DraftEdit::PreferredEducation(preferred));
            let years: u32 = Input::with_theme(theme)
                .with_prompt("Years of experience")
                .default(q.years_of_experience.unwrap_or(0))
                .interact_text()?;
            form.apply(DraftEdit::YearsOfExperience(Some(years)));
            edit_list(theme, form, ListField::Benefits)?;
        }
        Step::Review => {}
    }
    Ok(())
}

fn edit_list(theme: &ColorfulTheme, form: &mut FormController, field: ListField) -> Result<()> {
    loop {
        let entries = form.draft().list(field).to_vec();
        println!("{}s:", field);
        for (i, entry) in entries.iter().enumerate() {
            let shown = if entry.trim().is_empty() { "(blank)" } else { entry.as_str() };
            println!("  {}. {}", i + 1, shown);
        }

        let actions = ["Edit an entry", "Add an entry", "Remove an entry", "Done"];
        let action = Select::with_theme(theme)
            .with_prompt(format!("{}s", field))
            .items(&actions[..])
            .default(if entries.iter().any(|e| e.trim().is_empty()) { 0 } else { 3 })
            .interact()?;

        match action {
            0 => {
                let index = choose_entry(theme, &entries)?;
                let value = text(theme, field.label(), &entries[index], true)?;
                form.apply(DraftEdit::List(field, ListEdit::Update { index, value }));
            }
            1 => {
                form.apply(DraftEdit::List(field, ListEdit::Add));
                let value = text(theme, field.label(), "", true)?;
                form.apply(DraftEdit::List(
                    field,
                    ListEdit::Update {
                        index: entries.len(),
                        value,
                    },
                ));
            }
            2 => {
                if entries.len() <= 1 {
                    println!("At least one row is kept; edit it instead.");
                    continue;
                }
                let index = choose_entry(theme, &entries)?;
                form.apply(DraftEdit::List(field, ListEdit::Remove { index }));
            }
            _ => return Ok(()),
        }
    }
}

fn choose_entry(theme: &ColorfulTheme, entries: &[String]) -> Result<usize> {
    let labels: Vec<String> = entries
        .iter()
        .enumerate()
        .map(|(i, e)| format!("{}. {}", i + 1, e))
        .collect();
    Ok(Select::with_theme(theme)
        .with_prompt("Which entry?")
        .items(&labels)
        .default(0)
        .interact()?)
}

enum ReviewAction {
    Submit,
    Edit(Step),
    Back,
    Cancel,
}

fn review_action(theme: &ColorfulTheme) -> Result<ReviewAction> {
    let editable = &Step::ALL[..Step::ALL.len() - 1];
    let mut items = vec!["Submit".to_string()];
    items.extend(editable.iter().map(|s| format!("Edit: {}", s.title())));
    items.push("Back".to_string());
    items.push("Cancel posting".to_string());

    let choice = Select::with_theme(theme)
        .items(&items)
        .default(0)
        .interact()?;
    Ok(match choice {
        0 => ReviewAction::Submit,
        i if i <= editable.len() => ReviewAction::Edit(editable[i - 1]),
        i if i == editable.len() + 1 => ReviewAction::Back,
        _ => ReviewAction::Cancel,
    })
}

fn print_review(draft: &JobDraft) {
    let b = &draft.basic_info;
    let l = &draft.location;
    let c = &draft.compensation;
    let d = &draft.description;
    let q = &draft.qualifications;
    let or_dash = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());

    println!("{} ({}), {} opening(s)", b.title, b.department, b.openings);
    println!("  {} / {} / {}", b.employment_type, b.work_mode, b.job_level);
    println!("  Location: {}, {}, {}", l.city, l.state, l.country);
    if let Some(address) = &l.office_address {
        println!("  Office: {}", address);
    }
    println!("  Salary: {} ({})", c.salary, c.salary_type);
    println!("  Summary: {}", d.role_summary);
    let list = |label: &str, items: &[String]| {
        let items: Vec<&str> = items
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();
        if !items.is_empty() {
            println!("  {}: {}", label, items.join("; "));
        }
    };
    list("Responsibilities", &d.responsibilities);
    list("Skills", &d.required_skills);
    println!(
        "  Education: {} (preferred {}), experience: {} year(s)",
        or_dash(q.minimum_education.map(|e| e.to_string())),
        or_dash(q.preferred_education.map(|e| e.to_string())),
        or_dash(q.years_of_experience.map(|y| y.to_string())),
    );
    list("Benefits", &draft.benefits);
}
