// Rust guideline compliant 2026-10-15

//! Collaborator interfaces.
//!
//! Persistence, media hosting, authentication, notification delivery and
//! resource fetching are external services. The application only talks to
//! them through these traits; `local` and `memory` provide implementations.

use crate::error::{AppError, Result};
use crate::session::AdminSession;
use async_trait::async_trait;
use folio_core::{CategorySet, Layout, Mode, Project};
use std::collections::BTreeMap;
use std::path::Path;
use tokio::sync::watch;

/// Field values for a project that does not have an ID yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    /// Top-level grouping.
    pub mode: Mode,
    /// Category name.
    pub category: String,
    /// Title.
    pub title: String,
    /// Optional subtitle.
    pub subtitle: Option<String>,
    /// Optional description.
    pub description: Option<String>,
    /// Uploaded thumbnail URL.
    pub thumbnail: String,
    /// Uploaded detail URLs in order.
    pub sub_images: Vec<String>,
    /// Layout hint.
    pub layout: Layout,
    /// Date label.
    pub date: String,
    /// Role on the project.
    pub role: String,
    /// Client name.
    pub client: String,
    /// Creation time in Unix seconds.
    pub created_at: i64,
}

impl NewProject {
    /// Assigns an ID, producing a full record.
    #[must_use]
    pub fn into_project(self, id: String) -> Project {
        let mut project = Project::new(id, self.mode, self.category, self.title);
        project.subtitle = self.subtitle;
        project.description = self.description;
        project.thumbnail = Some(self.thumbnail);
        project.sub_images = self.sub_images;
        project.layout = self.layout;
        project.date = Some(self.date);
        project.role = Some(self.role);
        project.client = Some(self.client);
        project.created_at = Some(self.created_at);
        project
    }
}

/// Field-level overwrite applied to an existing project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectUpdate {
    /// Replace the detail media list.
    SetSubImages(Vec<String>),
}

impl ProjectUpdate {
    /// Applies the update to a record.
    pub fn apply(&self, project: &mut Project) {
        match self {
            ProjectUpdate::SetSubImages(urls) => project.sub_images = urls.clone(),
        }
    }
}

/// Field-level change to one category list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryOp {
    /// Set union with a single value.
    Add(String),
    /// Set difference with a single value.
    Remove(String),
}

impl CategoryOp {
    /// Applies the change to the list for `mode`, returning true if it changed.
    pub fn apply(&self, set: &mut CategorySet, mode: Mode) -> bool {
        match self {
            CategoryOp::Add(value) => set.add(mode, value),
            CategoryOp::Remove(value) => set.remove(mode, value),
        }
    }
}

/// Upload destinations on the asset host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadProfile {
    /// Card and cover media.
    Thumbnails,
    /// Detail view media.
    Details,
}

impl UploadProfile {
    /// Returns the folder name used by the asset host.
    #[must_use]
    pub fn folder(&self) -> &'static str {
        match self {
            UploadProfile::Thumbnails => "portfolio/thumbnails",
            UploadProfile::Details => "portfolio/details",
        }
    }
}

/// A media file selected for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    /// Original file name, used for the extension.
    pub file_name: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl MediaFile {
    /// Creates a media file from in-memory contents.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Reads a media file from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the path has no file name or cannot be read.
    pub fn read(path: &Path) -> Result<Self> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| AppError::InvalidInput(format!("Not a file: {}", path.display())))?
            .to_string();
        let bytes = std::fs::read(path)?;
        Ok(Self { file_name, bytes })
    }

    /// Returns the lowercased extension, if any.
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
    }
}

/// Parameters substituted into a notification template.
pub type TemplateParams = BTreeMap<String, String>;

/// Remote document database holding projects and the category document.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns every project in the collection.
    async fn list_projects(&self) -> Result<Vec<Project>>;

    /// Returns one project, or `None` if the ID is unknown.
    async fn get_project(&self, id: &str) -> Result<Option<Project>>;

    /// Writes a new project and returns its assigned ID.
    async fn add_project(&self, project: NewProject) -> Result<String>;

    /// Applies a field-level overwrite to an existing project.
    async fn update_project(&self, id: &str, update: ProjectUpdate) -> Result<()>;

    /// Deletes a single project.
    async fn delete_project(&self, id: &str) -> Result<()>;

    /// Returns the category document, or `None` if it was never written.
    async fn get_categories(&self) -> Result<Option<CategorySet>>;

    /// Overwrites the category document.
    async fn put_categories(&self, set: &CategorySet) -> Result<()>;

    /// Applies a union or difference to one list of the category document.
    async fn update_categories(&self, mode: Mode, op: CategoryOp) -> Result<()>;
}

/// Hosted media upload endpoint.
#[async_trait]
pub trait AssetHost: Send + Sync {
    /// Uploads a file under a profile and returns its public URL.
    async fn upload(&self, file: &MediaFile, profile: UploadProfile) -> Result<String>;
}

/// Email/password authentication provider.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Signs in and returns the new session.
    async fn sign_in(&self, email: &str, password: &str) -> Result<AdminSession>;

    /// Ends the current session.
    async fn sign_out(&self) -> Result<()>;

    /// Returns the current session, if any.
    fn current_session(&self) -> Option<AdminSession>;

    /// Observes session changes.
    fn subscribe(&self) -> watch::Receiver<Option<AdminSession>>;
}

/// Template-based transactional notification sender.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends the template with the given parameters.
    async fn send(&self, template: &str, params: &TemplateParams) -> Result<()>;
}

/// Network access for the shell cache.
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    /// Fetches a resource body by path.
    async fn fetch(&self, path: &str) -> Result<Vec<u8>>;
}
