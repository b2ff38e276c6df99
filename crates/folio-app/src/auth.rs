// Rust guideline compliant 2026-10-16

//! Config-backed admin authentication.

use crate::error::{AppError, Result};
use crate::ports::AuthProvider;
use crate::session::AdminSession;
use crate::time::unix_timestamp;
use async_trait::async_trait;
use folio_core::Config;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tokio::sync::watch;

/// Returns the lowercase SHA-256 hex digest of a password.
#[must_use]
pub fn hash_password(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    email: String,
    signed_in_at: i64,
}

/// Auth provider for a single admin account declared in `config.toml`.
///
/// The signed-in session is persisted to `session.json` so consecutive
/// CLI invocations share it. A session whose email no longer matches the
/// configured admin is ignored.
#[derive(Debug)]
pub struct LocalAuth {
    admin_email: Option<String>,
    password_sha256: Option<String>,
    session_path: PathBuf,
    sender: watch::Sender<Option<AdminSession>>,
}

impl LocalAuth {
    /// Creates the provider and restores a persisted session.
    #[must_use]
    pub fn new(config: &Config, session_path: PathBuf) -> Self {
        let admin_email = config.admin_email.clone();
        let restored = restore_session(&session_path, admin_email.as_deref());
        let (sender, _) = watch::channel(restored);
        Self {
            admin_email,
            password_sha256: config.admin_password_sha256.clone(),
            session_path,
            sender,
        }
    }

    fn persist(&self, session: &AdminSession) -> Result<()> {
        let stored = StoredSession {
            email: session.email().to_string(),
            signed_in_at: session.signed_in_at(),
        };
        let body = serde_json::to_vec_pretty(&stored)
            .map_err(|err| AppError::Auth(err.to_string()))?;
        std::fs::write(&self.session_path, body)?;
        Ok(())
    }
}

fn restore_session(path: &Path, admin_email: Option<&str>) -> Option<AdminSession> {
    let body = std::fs::read(path).ok()?;
    let stored: StoredSession = match serde_json::from_slice(&body) {
        Ok(stored) => stored,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable session");
            return None;
        }
    };
    if admin_email != Some(stored.email.as_str()) {
        return None;
    }
    Some(AdminSession::new(stored.email, stored.signed_in_at))
}

#[async_trait]
impl AuthProvider for LocalAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AdminSession> {
        let (Some(admin_email), Some(expected)) = (&self.admin_email, &self.password_sha256) else {
            return Err(AppError::Auth(
                "no admin account configured; set admin_email and admin_password_sha256".to_string(),
            ));
        };

        if !admin_email.eq_ignore_ascii_case(email.trim())
            || !expected.eq_ignore_ascii_case(&hash_password(password))
        {
            tracing::warn!(email, "rejected sign-in");
            return Err(AppError::Auth("invalid email or password".to_string()));
        }

        let session = AdminSession::new(admin_email.clone(), unix_timestamp());
        self.persist(&session)?;
        self.sender.send_replace(Some(session.clone()));
        tracing::info!(email = session.email(), "signed in");
        Ok(session)
    }

    async fn sign_out(&self) -> Result<()> {
        match std::fs::remove_file(&self.session_path) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }
        self.sender.send_replace(None);
        tracing::info!("signed out");
        Ok(())
    }

    fn current_session(&self) -> Option<AdminSession> {
        self.sender.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<Option<AdminSession>> {
        self.sender.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config() -> Config {
        Config {
            admin_email: Some("admin@folio.test".to_string()),
            admin_password_sha256: Some(hash_password("hunter2")),
            ..Config::default()
        }
    }

    #[test]
    fn test_hash_password_is_hex_sha256() {
        assert_eq!(
            hash_password("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[tokio::test]
    async fn test_session_survives_restart() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("session.json");

        let auth = LocalAuth::new(&config(), path.clone());
        auth.sign_in("admin@folio.test", "hunter2")
            .await
            .expect("Failed to sign in");

        let restarted = LocalAuth::new(&config(), path.clone());
        assert_eq!(
            restarted.current_session().map(|s| s.email().to_string()),
            Some("admin@folio.test".to_string())
        );

        restarted.sign_out().await.expect("Failed to sign out");
        assert!(!path.exists());
        assert!(LocalAuth::new(&config(), path).current_session().is_none());
    }

    #[tokio::test]
    async fn test_subscribe_observes_sign_in_and_out() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let auth = LocalAuth::new(&config(), dir.path().join("session.json"));
        let mut sessions = auth.subscribe();
        assert!(sessions.borrow().is_none());

        let session = auth
            .sign_in("admin@folio.test", "hunter2")
            .await
            .expect("Failed to sign in");
        sessions.changed().await.expect("Sender dropped");
        assert_eq!(sessions.borrow_and_update().as_ref(), Some(&session));

        auth.sign_out().await.expect("Failed to sign out");
        sessions.changed().await.expect("Sender dropped");
        assert!(sessions.borrow_and_update().is_none());
    }

    #[tokio::test]
    async fn test_wrong_password_rejected_without_signup() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("session.json");
        let auth = LocalAuth::new(&config(), path.clone());

        let result = auth.sign_in("admin@folio.test", "wrong").await;
        assert!(matches!(result, Err(AppError::Auth(_))));
        assert!(auth.current_session().is_none());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_unconfigured_account() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let auth = LocalAuth::new(&Config::default(), dir.path().join("session.json"));
        assert!(matches!(
            auth.sign_in("a@b.c", "x").await,
            Err(AppError::Auth(_))
        ));
    }
}
