// Rust guideline compliant 2026-10-18

//! Implementation of the `folio delete` command.

use crate::context::SiteServices;
use anyhow::{bail, Result};
use folio_app::Selection;
use std::path::Path;

/// Deletes one project, or several concurrently.
///
/// Duplicate IDs collapse to one selection entry.
///
/// # Errors
///
/// Returns an error if nobody is signed in or any delete is rejected. A
/// partial bulk failure reports the rejected IDs; the others stay deleted.
pub async fn execute(site_root: Option<&Path>, ids: &[String]) -> Result<String> {
    let mut selection = Selection::new();
    for id in ids {
        if !selection.contains(id) {
            selection.toggle(id);
        }
    }
    if selection.is_empty() {
        bail!("No project IDs given");
    }

    let services = SiteServices::open(site_root).await?;
    let gateway = services.gateway()?;

    let ids = selection.ids();
    if let [id] = ids.as_slice() {
        gateway.delete_project(id).await?;
        return Ok(format!("Deleted {id}"));
    }

    let deleted = gateway.bulk_delete(&ids).await?;
    Ok(format!("Deleted {deleted} projects"))
}
