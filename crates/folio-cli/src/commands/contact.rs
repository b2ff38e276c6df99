// Rust guideline compliant 2026-10-18

//! Implementation of the `folio contact` command.

use crate::context::SiteServices;
use anyhow::{bail, Result};
use folio_app::{ContactService, SubmitOutcome};
use folio_core::ContactField;
use std::path::Path;
use std::sync::Arc;

/// Validates a contact message and queues it with the notification provider.
///
/// # Errors
///
/// Returns an error listing each invalid field, or the provider failure.
pub async fn execute(
    site_root: Option<&Path>,
    name: &str,
    email: &str,
    message: &str,
) -> Result<String> {
    let services = SiteServices::open(site_root).await?;
    let notifier = Arc::new(services.site.notifier(&services.config));
    let mut contact = ContactService::new(notifier, services.config.notify_template.clone());

    contact.edit(ContactField::Name, name);
    contact.edit(ContactField::Email, email);
    contact.edit(ContactField::Content, message);

    match contact.submit().await? {
        SubmitOutcome::Sent => Ok("Message sent".to_string()),
        SubmitOutcome::Invalid(errors) => {
            let fields: Vec<String> = errors
                .iter()
                .map(|(field, msg)| format!("{field}: {msg}"))
                .collect();
            bail!("Invalid contact form ({})", fields.join(", "))
        }
    }
}
