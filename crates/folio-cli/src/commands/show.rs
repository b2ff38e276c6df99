// Rust guideline compliant 2026-10-18

//! Implementation of the `folio show` command.

use crate::context::SiteServices;
use crate::output::OutputFormatter;
use anyhow::{bail, Result};
use folio_app::{resolve_detail, DetailResolution};
use std::path::Path;

/// Shows a project's detail view.
///
/// # Errors
///
/// Returns an error carrying the not-found notice if the project is missing.
pub async fn execute(
    site_root: Option<&Path>,
    id: &str,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let services = SiteServices::open(site_root).await?;
    match resolve_detail(services.documents.as_ref(), id).await? {
        DetailResolution::Found(project) => Ok(formatter.format_project(&project)),
        DetailResolution::Redirect { notice, .. } => bail!(notice),
    }
}
