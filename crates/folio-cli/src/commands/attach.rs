// Rust guideline compliant 2026-10-18

//! Implementation of the `folio attach` command.

use crate::context::SiteServices;
use anyhow::Result;
use folio_app::MediaFile;
use std::path::{Path, PathBuf};

/// Appends detail media to an existing project.
///
/// # Errors
///
/// Returns an error if nobody is signed in, the project is missing, or a
/// file cannot be read or uploaded.
pub async fn execute(site_root: Option<&Path>, id: &str, files: &[PathBuf]) -> Result<String> {
    let services = SiteServices::open(site_root).await?;
    let gateway = services.gateway()?;

    let files = files
        .iter()
        .map(|path| MediaFile::read(path))
        .collect::<folio_app::Result<Vec<_>>>()?;
    let added = files.len();
    let media = gateway.append_media(id, files).await?;

    Ok(format!(
        "Added {added} file(s) to {id}; {} detail item(s) total",
        media.len()
    ))
}
