// ABOUTME: `him token` subcommands for storing and clearing the bearer token
// ABOUTME: The token itself is issued by the marketplace login flow

use anyhow::{Context, Result};

use hire_in_minutes::session::TokenStore;

pub fn set(token: &str) -> Result<()> {
    let store = TokenStore::default_location()?;
    store
        .store(token)
        .with_context(|| format!("Failed to write token to {}", store.path().display()))?;
    println!("Token saved to {}", store.path().display());
    Ok(())
}

pub fn clear() -> Result<()> {
    let store = TokenStore::default_location()?;
    store
        .clear()
        .with_context(|| format!("Failed to remove {}", store.path().display()))?;
    println!("Token removed");
    Ok(())
}
