// ABOUTME: Interactive job browser (`him jobs`) and saved-job listing (`him saved`)
// ABOUTME: Drives the listing controller: load more, search, filter and bookmark

use std::sync::Arc;

use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Input, Select};

use hire_in_minutes::listing::{
    FetchOutcome, JobFilters, JobListItem, ListingController, ToggleOutcome,
};
use hire_in_minutes::remote::JobsApi;

use super::App;

fn print_item(index: usize, item: &JobListItem, saved: bool) {
    let marker = if saved { "*" } else { " " };
    let company = item
        .company
        .as_ref()
        .map(|c| c.name.as_str())
        .unwrap_or("Unknown company");
    println!("{}{:>3}. {} at {}", marker, index + 1, item.title, company);

    let mut facts = vec![item.location.clone()];
    facts.extend(item.employment_type.clone());
    facts.extend(item.salary.clone());
    facts.extend(item.category.clone());
    facts.push(format!("posted {}", item.posted));
    let facts: Vec<String> = facts.into_iter().filter(|f| !f.is_empty()).collect();
    println!("      {}", facts.join(" | "));
    if !item.description.is_empty() {
        println!("      {}", item.description);
    }
}

fn report(outcome: &FetchOutcome) {
    match outcome {
        FetchOutcome::Failed(e) => eprintln!("Could not load jobs: {}", e),
        FetchOutcome::Loaded { added: 0 } => println!("No jobs found."),
        _ => {}
    }
}

pub async fn run(app: &App, filters: JobFilters) -> Result<()> {
    let theme = ColorfulTheme::default();
    let listing = Arc::new(ListingController::with_filters(
        Arc::clone(&app.api),
        app.session.clone(),
        app.config.page_size,
        app.config.debounce(),
        filters,
    ));

    if let Err(e) = listing.load_saved_ids().await {
        eprintln!("Could not load saved jobs: {}", e);
    }
    report(&listing.refresh().await);

    let mut shown = 0;
    loop {
        let view = listing.view().await;
        for (i, item) in view.items.iter().enumerate().skip(shown) {
            print_item(i, item, view.saved.contains(&item.id));
        }
        shown = view.items.len();

        let mut actions = Vec::new();
        if view.has_more {
            actions.push("Load more");
        }
        if !view.items.is_empty() {
            actions.push("Save / unsave a job");
        }
        actions.push("Search");
        actions.push("Filter by location");
        actions.push("Quit");

        let choice = Select::with_theme(&theme)
            .with_prompt(format!("{} job(s) shown", view.items.len()))
            .items(&actions)
            .default(0)
            .interact()?;

        match actions[choice] {
            "Load more" => report(&listing.load_more().await),
            "Save / unsave a job" => {
                let labels: Vec<String> = view
                    .items
                    .iter()
                    .map(|i| {
                        let mark = if view.saved.contains(&i.id) { "*" } else { " " };
                        format!("{} {}", mark, i.title)
                    })
                    .collect();
                let index = Select::with_theme(&theme)
                    .with_prompt("Which job?")
                    .items(&labels)
                    .default(0)
                    .interact()?;
                let item = &view.items[index];
                match listing.toggle_save(&item.id).await {
                    ToggleOutcome::Confirmed { saved: true } => println!("Saved \"{}\".", item.title),
                    ToggleOutcome::Confirmed { saved: false } => {
                        println!("Removed \"{}\" from saved jobs.", item.title)
                    }
                    ToggleOutcome::RolledBack { error, .. } => {
                        eprintln!("Could not update saved jobs: {}", error)
                    }
                    ToggleOutcome::LoginRequired => {
                        eprintln!("Please log in to save jobs (`him token set <TOKEN>`).")
                    }
                    ToggleOutcome::Ignored => println!("Still saving that job, try again shortly."),
                }
            }
            "Search" => {
                let search: String = Input::with_theme(&theme)
                    .with_prompt("Search")
                    .with_initial_text(view.filters.search.clone())
                    .allow_empty(true)
                    .interact_text()?;
                listing.update_filters(|f| f.search = search).await;
                listing.settle().await;
                shown = 0;
            }
            "Filter by location" => {
                let location: String = Input::with_theme(&theme)
                    .with_prompt("Location")
                    .with_initial_text(view.filters.location.clone())
                    .allow_empty(true)
                    .interact_text()?;
                listing.update_filters(|f| f.location = location).await;
                listing.settle().await;
                shown = 0;
            }
            _ => return Ok(()),
        }

        if let Some(error) = listing.view().await.error {
            eprintln!("Last error: {}", error);
        }
    }
}

pub async fn print_saved(app: &App) -> Result<()> {
    let token = app.session.require_token()?;
    let ids = app
        .api
        .saved_job_ids(token)
        .await
        .context("Failed to fetch saved jobs")?;
    if ids.is_empty() {
        println!("You have no saved jobs.");
    }
    for id in ids {
        println!("{}", id);
    }
    Ok(())
}
