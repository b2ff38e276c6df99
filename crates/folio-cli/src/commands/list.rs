// Rust guideline compliant 2026-10-18

//! Implementation of the `folio list` command: the public gallery view.

use crate::context::SiteServices;
use crate::output::OutputFormatter;
use anyhow::Result;
use folio_app::EmptyState;
use folio_core::{CategoryFilter, GalleryQuery, Mode};
use std::path::Path;

/// Result of a gallery listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// Rendered project list.
    Projects(String),
    /// Empty-state notice.
    Empty(String),
}

/// Lists the projects the gallery would show for a mode, category and search.
///
/// # Errors
///
/// Returns an error if the site cannot be opened or the mode is invalid.
pub async fn execute(
    site_root: Option<&Path>,
    mode: Option<String>,
    category: Option<String>,
    search: Option<String>,
    formatter: &dyn OutputFormatter,
) -> Result<Listing> {
    let services = SiteServices::open(site_root).await?;

    let mut query = GalleryQuery::default();
    if let Some(mode) = mode {
        query.set_mode(mode.parse::<Mode>()?);
    }
    if let Some(label) = category {
        query.category = CategoryFilter::from_label(&label);
    }
    query.search = search.unwrap_or_default();

    let visible = services.store.visible(&query);
    match services.store.empty_state(&query) {
        Some(EmptyState::NoResults) => Ok(Listing::Empty(format!(
            "No results for \"{}\"",
            query.search.trim()
        ))),
        Some(EmptyState::NoProjects) => Ok(Listing::Empty(format!(
            "No projects in {} / {}",
            query.mode, query.category
        ))),
        None => Ok(Listing::Projects(formatter.format_list(&visible))),
    }
}
