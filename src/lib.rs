// ABOUTME: Library root for the Hire In Minutes job-posting and job-browsing client
// ABOUTME: Exposes the draft, wizard, submission, listing and remote API layers

pub mod config;
pub mod draft;
pub mod error;
pub mod listing;
pub mod remote;
pub mod session;
pub mod submission;
pub mod wizard;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{HireError, Result};
