// Rust guideline compliant 2026-10-18

//! Implementation of the `folio upload` command.

use crate::context::SiteServices;
use anyhow::Result;
use folio_app::{MediaFile, ProjectDraft};
use folio_core::{Layout, Mode};
use std::path::{Path, PathBuf};

/// Arguments of `folio upload`, mirroring the upload form.
#[derive(Debug, Clone, Default)]
pub struct UploadArgs {
    /// Mode name (`std` or `lab`).
    pub mode: String,
    /// Category from the mode's list.
    pub category: String,
    /// Project title.
    pub title: String,
    /// Optional subtitle.
    pub subtitle: Option<String>,
    /// Optional description.
    pub description: Option<String>,
    /// Layout hint name.
    pub layout: Option<String>,
    /// Date label.
    pub date: Option<String>,
    /// Role.
    pub role: Option<String>,
    /// Client.
    pub client: Option<String>,
    /// Cover media.
    pub thumbnail: Option<PathBuf>,
    /// Detail media in display order.
    pub details: Vec<PathBuf>,
}

impl UploadArgs {
    fn into_draft(self) -> Result<(ProjectDraft, Option<PathBuf>, Vec<PathBuf>)> {
        let layout = match self.layout.as_deref() {
            Some(name) => name.parse::<Layout>()?,
            None => Layout::default(),
        };
        let draft = ProjectDraft {
            mode: self.mode.parse::<Mode>()?,
            category: self.category,
            title: self.title,
            subtitle: self.subtitle,
            description: self.description,
            layout,
            date: self.date,
            role: self.role,
            client: self.client,
        };
        Ok((draft, self.thumbnail, self.details))
    }
}

/// Uploads media and creates a project.
///
/// # Returns
///
/// The new project's ID.
///
/// # Errors
///
/// Returns an error if nobody is signed in, the form is invalid, a file
/// cannot be read, or an upload or document write fails.
pub async fn execute(site_root: Option<&Path>, args: UploadArgs) -> Result<String> {
    let services = SiteServices::open(site_root).await?;
    let gateway = services.gateway()?;

    let (draft, thumbnail, details) = args.into_draft()?;
    let thumbnail = thumbnail.as_deref().map(MediaFile::read).transpose()?;
    let details = details
        .iter()
        .map(|path| MediaFile::read(path))
        .collect::<folio_app::Result<Vec<_>>>()?;

    let id = gateway.create_project(draft, thumbnail, details).await?;
    Ok(id)
}
