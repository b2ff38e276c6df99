// Rust guideline compliant 2026-10-18

//! Implementation of the `folio projects` command: the admin project table.

use crate::context::SiteServices;
use crate::output::OutputFormatter;
use anyhow::Result;
use folio_app::{AdminFilter, ModeFilter};
use folio_core::CategoryFilter;
use std::path::Path;

/// Lists every project in collection order, filtered by mode and category.
///
/// # Errors
///
/// Returns an error if nobody is signed in or the collection cannot be read.
pub async fn execute(
    site_root: Option<&Path>,
    mode: Option<String>,
    category: Option<String>,
    formatter: &dyn OutputFormatter,
) -> Result<String> {
    let services = SiteServices::open(site_root).await?;
    let gateway = services.gateway()?;

    let mut filter = AdminFilter::default();
    if let Some(mode) = mode {
        filter.set_mode(mode.parse::<ModeFilter>()?);
    }
    if let Some(label) = category {
        filter.category = CategoryFilter::from_label(&label);
    }

    let projects = gateway.list_projects().await?;
    let rows: Vec<_> = filter.apply(&projects).into_iter().cloned().collect();
    Ok(formatter.format_list(&rows))
}
