// ABOUTME: Interactive terminal commands built on the library controllers
// ABOUTME: Shared application context: config, session and API client

pub mod browse;
pub mod post;
pub mod token;

use std::sync::Arc;

use anyhow::{Context, Result};

use hire_in_minutes::config::Config;
use hire_in_minutes::remote::RemoteClient;
use hire_in_minutes::session::{Session, TokenStore};

pub struct App {
    pub config: Config,
    pub session: Session,
    pub api: Arc<RemoteClient>,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let session = TokenStore::default_location()
            .and_then(|store| store.session())
            .context("Failed to read the stored token")?;
        let api = RemoteClient::new(config.api_base_url.clone(), config.request_timeout())
            .context("Failed to create HTTP client")?;
        tracing::debug!(api = %api.base_url(), authenticated = session.is_authenticated(), "Client ready");

        Ok(Self {
            config,
            session,
            api: Arc::new(api),
        })
    }
}
