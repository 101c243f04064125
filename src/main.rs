// ABOUTME: Command-line entry point for the Hire In Minutes client
// ABOUTME: Parses arguments, sets up logging and configuration, dispatches commands

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hire_in_minutes::config::Config;
use hire_in_minutes::draft::{EmploymentType, WorkMode};
use hire_in_minutes::listing::JobFilters;

#[derive(Parser)]
#[command(name = "him", version, about = "Post and browse jobs on Hire In Minutes")]
struct Cli {
    /// Override the API base URL from the config file
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Post a job with the step-by-step wizard
    Post,
    /// Post a job on behalf of a company (admin only)
    AdminPost,
    /// Browse open jobs, load more pages and bookmark jobs
    Jobs {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long)]
        employment_type: Option<EmploymentType>,
        #[arg(long)]
        work_mode: Option<WorkMode>,
    },
    /// Print the IDs of your saved jobs
    Saved,
    /// Manage the stored API token
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },
}

#[derive(Subcommand)]
enum TokenAction {
    /// Store a bearer token for later commands
    Set { token: String },
    /// Remove the stored token
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hire_in_minutes=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(url) = cli.api_url {
        config.api_base_url = url;
    }

    match cli.command {
        Command::Token { action } => match action {
            TokenAction::Set { token } => commands::token::set(&token),
            TokenAction::Clear => commands::token::clear(),
        },
        Command::Post => commands::post::run(&commands::App::new(config)?, false).await,
        Command::AdminPost => commands::post::run(&commands::App::new(config)?, true).await,
        Command::Jobs {
            search,
            location,
            employment_type,
            work_mode,
        } => {
            let filters = JobFilters {
                search,
                location,
                employment_type,
                work_mode,
            };
            commands::browse::run(&commands::App::new(config)?, filters).await
        }
        Command::Saved => commands::browse::print_saved(&commands::App::new(config)?).await,
    }
}
