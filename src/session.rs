// ABOUTME: Bearer-token session backed by a local token file
// ABOUTME: HIM_TOKEN overrides the stored token; acquiring tokens happens elsewhere

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HireError, Result};

pub const TOKEN_ENV: &str = "HIM_TOKEN";

/// The current user's credentials, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        let token = token.into();
        let token = token.trim();
        Self {
            token: (!token.is_empty()).then(|| token.to_string()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The token, or `Unauthenticated` when there is none.
    pub fn require_token(&self) -> Result<&str> {
        self.token().ok_or(HireError::Unauthenticated)
    }
}

/// Persistent token storage, `~/.hireinminutes/token` by default.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_location() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| HireError::Config("could not determine home directory".to_string()))?;
        Ok(Self::new(home.join(".hireinminutes").join("token")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            HireError::Config(format!("failed to read {}: {}", self.path.display(), e))
        })?;
        let token = contents.trim();
        Ok((!token.is_empty()).then(|| token.to_string()))
    }

    pub fn store(&self, token: &str) -> Result<()> {
        let token = token.trim();
        if token.is_empty() {
            return Err(HireError::Validation("token must not be empty".to_string()));
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    /// Builds the session: the environment token wins over the stored one.
    pub fn session(&self) -> Result<Session> {
        if let Ok(token) = std::env::var(TOKEN_ENV) {
            if !token.trim().is_empty() {
                return Ok(Session::with_token(token));
            }
        }
        Ok(self.load()?.map(Session::with_token).unwrap_or_default())
    }
}
