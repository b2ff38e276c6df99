// Rust guideline compliant 2026-10-18

//! Implementation of the `folio init` command.

use anyhow::Result;
use folio_app::{hash_password, SiteContext};
use std::path::Path;

/// Initializes a site under `root` and optionally records the admin account.
///
/// Existing files are left alone, so running `init` twice only updates the
/// admin credentials.
///
/// # Errors
///
/// Returns an error if the site directory or its files cannot be written.
pub fn execute(
    root: &Path,
    admin_email: Option<String>,
    admin_password: Option<String>,
) -> Result<String> {
    let site = SiteContext::init(root)?;

    if admin_email.is_some() || admin_password.is_some() {
        let mut config = site.load_config()?;
        if let Some(email) = admin_email {
            config.admin_email = Some(email.trim().to_string());
        }
        if let Some(password) = admin_password {
            config.admin_password_sha256 = Some(hash_password(&password));
        }
        config.save(site.folio_dir())?;
    }

    let mut lines = vec![format!(
        "Folio site initialized at {}",
        site.folio_dir().display()
    )];
    lines.push(format!("  - {}", site.projects_path().display()));
    lines.push(format!("  - {}", site.categories_path().display()));
    lines.push(format!("  - {}", site.config_path().display()));
    Ok(lines.join("\n"))
}
