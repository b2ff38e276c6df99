// Rust guideline compliant 2026-10-17

//! Admin-only mutations against the document store and asset host.
//!
//! Every mutation is followed by a refetch of the shared `ProjectStore`;
//! local state is never patched in place. Create and bulk delete span
//! several remote calls and are not transactional: a failed upload can
//! leave earlier uploads orphaned on the asset host, and a failed batch
//! can leave some projects deleted.

use crate::error::{AppError, Result};
use crate::ports::{
    AssetHost, CategoryOp, DocumentStore, MediaFile, NewProject, ProjectUpdate, UploadProfile,
};
use crate::session::AdminSession;
use crate::store::ProjectStore;
use crate::time::{current_year, unix_timestamp};
use folio_core::{CategorySet, Layout, Mode, Project};
use futures::future::join_all;
use std::sync::Arc;

/// Default role recorded when the form leaves it blank.
pub const DEFAULT_ROLE: &str = "Design";
/// Default client recorded when the form leaves it blank.
pub const DEFAULT_CLIENT: &str = "Client";

/// Metadata entered on the upload form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectDraft {
    /// Target mode.
    pub mode: Mode,
    /// Category from the mode's list.
    pub category: String,
    /// Title.
    pub title: String,
    /// Optional subtitle.
    pub subtitle: Option<String>,
    /// Optional description.
    pub description: Option<String>,
    /// Layout hint.
    pub layout: Layout,
    /// Date label; defaults to the current year.
    pub date: Option<String>,
    /// Role; defaults to "Design".
    pub role: Option<String>,
    /// Client; defaults to "Client".
    pub client: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ProjectDraft {
    /// Checks the fields the upload form requires.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if the title or category is blank.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::Validation("title is required".to_string()));
        }
        if self.category.trim().is_empty() {
            return Err(AppError::Validation("category is required".to_string()));
        }
        Ok(())
    }

    fn into_new_project(self, thumbnail: String, sub_images: Vec<String>) -> NewProject {
        NewProject {
            mode: self.mode,
            category: self.category.trim().to_string(),
            title: self.title.trim().to_string(),
            subtitle: non_blank(self.subtitle),
            description: non_blank(self.description),
            thumbnail,
            sub_images,
            layout: self.layout,
            date: non_blank(self.date).unwrap_or_else(current_year),
            role: non_blank(self.role).unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            client: non_blank(self.client).unwrap_or_else(|| DEFAULT_CLIENT.to_string()),
            created_at: unix_timestamp(),
        }
    }
}

/// Write access to the portfolio for a signed-in admin.
pub struct AdminMutationGateway {
    session: AdminSession,
    documents: Arc<dyn DocumentStore>,
    assets: Arc<dyn AssetHost>,
    store: Arc<ProjectStore>,
}

impl std::fmt::Debug for AdminMutationGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminMutationGateway")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl AdminMutationGateway {
    /// Creates a gateway for the holder of `session`.
    #[must_use]
    pub fn new(
        session: AdminSession,
        documents: Arc<dyn DocumentStore>,
        assets: Arc<dyn AssetHost>,
        store: Arc<ProjectStore>,
    ) -> Self {
        Self {
            session,
            documents,
            assets,
            store,
        }
    }

    /// Returns the session this gateway acts for.
    #[must_use]
    pub fn session(&self) -> &AdminSession {
        &self.session
    }

    /// Returns the shared project store refreshed by this gateway.
    #[must_use]
    pub fn store(&self) -> &Arc<ProjectStore> {
        &self.store
    }

    async fn refresh(&self) -> Result<()> {
        self.store.refresh(self.documents.as_ref()).await
    }

    /// Lists every project in the collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the document store fails.
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        self.documents.list_projects().await
    }

    /// Fetches one project.
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the ID is unknown, or a store error.
    pub async fn get_project(&self, id: &str) -> Result<Project> {
        self.documents
            .get_project(id)
            .await?
            .ok_or_else(|| AppError::project_not_found(id))
    }

    /// Deletes one project and refreshes the store.
    ///
    /// A refresh failure after the delete landed is logged, not returned;
    /// the store keeps its previous snapshot until the next refresh.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete is rejected.
    pub async fn delete_project(&self, id: &str) -> Result<()> {
        self.documents.delete_project(id).await?;
        tracing::info!(id, by = self.session.email(), "project deleted");
        if let Err(err) = self.refresh().await {
            tracing::warn!(id, error = %err, "refresh after delete failed");
        }
        Ok(())
    }

    /// Deletes several projects concurrently.
    ///
    /// All deletes are dispatched at once and awaited together. If any of
    /// them is rejected the whole operation fails with the rejected IDs,
    /// even though the others may already have landed; the store is then
    /// refreshed so the list reflects what actually happened.
    ///
    /// # Returns
    ///
    /// The number of projects deleted.
    ///
    /// # Errors
    ///
    /// Returns `AppError::BulkDeleteFailed` if any delete was rejected, or a
    /// store error if the refresh after a clean batch fails.
    pub async fn bulk_delete(&self, ids: &[String]) -> Result<usize> {
        if ids.is_empty() {
            return Ok(0);
        }

        let results = join_all(ids.iter().map(|id| async move {
            (id.as_str(), self.documents.delete_project(id).await)
        }))
        .await;

        let failed: Vec<String> = results
            .into_iter()
            .filter_map(|(id, result)| match result {
                Ok(()) => None,
                Err(err) => {
                    tracing::warn!(id, error = %err, "delete rejected");
                    Some(id.to_string())
                }
            })
            .collect();

        if !failed.is_empty() {
            if let Err(err) = self.refresh().await {
                tracing::warn!(error = %err, "refresh after failed batch also failed");
            }
            return Err(AppError::BulkDeleteFailed {
                failed,
                attempted: ids.len(),
            });
        }

        tracing::info!(count = ids.len(), by = self.session.email(), "projects deleted");
        self.refresh().await?;
        Ok(ids.len())
    }

    /// Returns the category document, writing the defaults if it is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the read or the default write fails.
    pub async fn categories(&self) -> Result<CategorySet> {
        if let Some(set) = self.documents.get_categories().await? {
            return Ok(set);
        }
        let defaults = CategorySet::with_defaults();
        self.documents.put_categories(&defaults).await?;
        tracing::info!("category document created with defaults");
        Ok(defaults)
    }

    /// Adds a category to a mode's list. Blank values are ignored.
    ///
    /// # Returns
    ///
    /// The category document after the change.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub async fn add_category(&self, mode: Mode, value: &str) -> Result<CategorySet> {
        let value = value.trim();
        if value.is_empty() {
            return self.categories().await;
        }
        self.categories().await?;
        self.documents
            .update_categories(mode, CategoryOp::Add(value.to_string()))
            .await?;
        tracing::info!(%mode, value, "category added");
        self.refresh().await?;
        self.categories().await
    }

    /// Removes a category from a mode's list.
    ///
    /// # Returns
    ///
    /// The category document after the change.
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails.
    pub async fn remove_category(&self, mode: Mode, value: &str) -> Result<CategorySet> {
        self.categories().await?;
        self.documents
            .update_categories(mode, CategoryOp::Remove(value.to_string()))
            .await?;
        tracing::info!(%mode, value, "category removed");
        self.refresh().await?;
        self.categories().await
    }

    /// Uploads media and writes a new project.
    ///
    /// The thumbnail goes first, then each detail file in order, one at a
    /// time. The document is only written once every upload succeeded.
    ///
    /// # Arguments
    ///
    /// * `draft` - Form metadata
    /// * `thumbnail` - Cover media; required
    /// * `details` - Detail media in display order
    ///
    /// # Returns
    ///
    /// The new project's ID.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The draft is invalid or the thumbnail is missing
    /// - Any upload fails
    /// - The document write or refresh fails
    pub async fn create_project(
        &self,
        draft: ProjectDraft,
        thumbnail: Option<MediaFile>,
        details: Vec<MediaFile>,
    ) -> Result<String> {
        draft.validate()?;
        let thumbnail =
            thumbnail.ok_or_else(|| AppError::Validation("thumbnail is required".to_string()))?;

        let thumbnail_url = self
            .assets
            .upload(&thumbnail, UploadProfile::Thumbnails)
            .await?;
        let detail_urls = self.upload_all(&details, UploadProfile::Details).await?;

        let id = self
            .documents
            .add_project(draft.into_new_project(thumbnail_url, detail_urls))
            .await?;
        tracing::info!(%id, by = self.session.email(), "project created");
        self.refresh().await?;
        Ok(id)
    }

    /// Uploads detail media and appends it to a project's list.
    ///
    /// # Returns
    ///
    /// The project's detail media list after the append.
    ///
    /// # Errors
    ///
    /// Returns an error if the project is missing, no files were given, an
    /// upload fails, or the update fails.
    pub async fn append_media(&self, id: &str, files: Vec<MediaFile>) -> Result<Vec<String>> {
        if files.is_empty() {
            return Err(AppError::Validation("no files selected".to_string()));
        }
        let project = self.get_project(id).await?;
        let uploaded = self.upload_all(&files, UploadProfile::Details).await?;

        let mut sub_images = project.sub_images;
        sub_images.extend(uploaded);
        self.documents
            .update_project(id, ProjectUpdate::SetSubImages(sub_images.clone()))
            .await?;
        tracing::info!(id, added = files.len(), "detail media appended");
        self.refresh().await?;
        Ok(sub_images)
    }

    async fn upload_all(&self, files: &[MediaFile], profile: UploadProfile) -> Result<Vec<String>> {
        let mut urls = Vec::with_capacity(files.len());
        for file in files {
            let url = self.assets.upload(file, profile).await.inspect_err(|err| {
                tracing::warn!(file = %file.file_name, error = %err, "upload failed");
            })?;
            urls.push(url);
        }
        Ok(urls)
    }
}
