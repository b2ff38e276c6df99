// Rust guideline compliant 2026-10-18

//! Implementation of the `folio categories` and `folio category` commands.

use crate::context::SiteServices;
use crate::output::OutputFormatter;
use anyhow::Result;
use folio_core::Mode;
use std::path::Path;

/// Change requested by `folio category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryChange {
    /// Append a value.
    Add,
    /// Remove every occurrence of a value.
    Remove,
}

/// Shows the category lists as loaded by the gallery.
///
/// # Errors
///
/// Returns an error if the site cannot be opened.
pub async fn show(site_root: Option<&Path>, formatter: &dyn OutputFormatter) -> Result<String> {
    let services = SiteServices::open(site_root).await?;
    Ok(formatter.format_categories(&services.store.categories()))
}

/// Adds or removes a category value for a mode.
///
/// # Errors
///
/// Returns an error if nobody is signed in, the mode is invalid, or the
/// document update fails.
pub async fn change(
    site_root: Option<&Path>,
    kind: CategoryChange,
    mode: &str,
    value: &str,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let mode: Mode = mode.parse()?;
    let services = SiteServices::open(site_root).await?;
    let gateway = services.gateway()?;
    let set = match kind {
        CategoryChange::Add => gateway.add_category(mode, value).await?,
        CategoryChange::Remove => gateway.remove_category(mode, value).await?,
    };
    Ok(formatter.format_categories(&set))
}
