// Rust guideline compliant 2026-10-18

//! Implementation of `folio login`, `folio logout` and `folio whoami`.

use crate::context::SiteServices;
use anyhow::Result;
use folio_app::AuthProvider;
use std::path::Path;

/// Signs in with the configured admin account.
///
/// # Errors
///
/// Returns an error if the credentials are rejected.
pub async fn login(site_root: Option<&Path>, email: &str, password: &str) -> Result<String> {
    let services = SiteServices::open(site_root).await?;
    let session = services.auth().sign_in(email, password).await?;
    Ok(format!("Signed in as {}", session.email()))
}

/// Ends the persisted session.
///
/// # Errors
///
/// Returns an error if the session file cannot be removed.
pub async fn logout(site_root: Option<&Path>) -> Result<String> {
    let services = SiteServices::open(site_root).await?;
    services.auth().sign_out().await?;
    Ok("Signed out".to_string())
}

/// Reports the current session.
///
/// # Errors
///
/// Returns an error if the site cannot be opened.
pub async fn whoami(site_root: Option<&Path>, json: bool) -> Result<String> {
    let services = SiteServices::open(site_root).await?;
    let session = services.auth().current_session();
    if json {
        return Ok(serde_json::to_string_pretty(&serde_json::json!({
            "session": session,
        }))?);
    }
    Ok(match session {
        Some(session) => {
            let since = chrono::DateTime::from_timestamp(session.signed_in_at(), 0)
                .map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
                .unwrap_or_else(|| session.signed_in_at().to_string());
            format!("{} (since {since})", session.email())
        }
        None => "Not signed in".to_string(),
    })
}
