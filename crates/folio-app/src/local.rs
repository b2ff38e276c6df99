// Rust guideline compliant 2026-10-16

//! File-backed collaborators for a site on local disk.
//!
//! These adapters let the CLI run the full admin flow without any hosted
//! service: projects and categories live under `.folio/`, uploads are
//! copied into `.folio/assets/` and contact messages are queued in an
//! outbox file for a delivery job to pick up.

use crate::error::{AppError, Result};
use crate::ports::{
    AssetHost, CategoryOp, DocumentStore, MediaFile, NewProject, Notifier, ProjectUpdate,
    TemplateParams, UploadProfile,
};
use crate::time::unix_timestamp;
use async_trait::async_trait;
use folio_core::identity::generate_unique_id;
use folio_core::{CategoryDocument, CategorySet, Error as CoreError, Mode, Project, Storage};
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Document store over the JSONL project file and the category document.
#[derive(Debug, Clone)]
pub struct LocalDocumentStore {
    storage: Storage,
    categories: CategoryDocument,
}

impl LocalDocumentStore {
    /// Creates a store over existing storage handles.
    #[must_use]
    pub fn new(storage: Storage, categories: CategoryDocument) -> Self {
        Self {
            storage,
            categories,
        }
    }
}

#[async_trait]
impl DocumentStore for LocalDocumentStore {
    async fn list_projects(&self) -> Result<Vec<Project>> {
        Ok(self.storage.load_all()?)
    }

    async fn get_project(&self, id: &str) -> Result<Option<Project>> {
        match self.storage.load_by_id(id) {
            Ok(project) => Ok(Some(project)),
            Err(CoreError::NotFound(_)) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn add_project(&self, project: NewProject) -> Result<String> {
        let storage = &self.storage;
        let id = storage.with_lock(|| {
            let existing = storage.ids()?;
            let id = generate_unique_id(
                &project.title,
                project.created_at,
                existing.iter().map(String::as_str),
            );
            storage.save(&project.clone().into_project(id.clone()))?;
            Ok(id)
        })?;
        tracing::info!(%id, "project written");
        Ok(id)
    }

    async fn update_project(&self, id: &str, update: ProjectUpdate) -> Result<()> {
        let storage = &self.storage;
        storage.with_lock(|| {
            let mut project = storage.load_by_id(id)?;
            update.apply(&mut project);
            storage.save(&project)
        })?;
        Ok(())
    }

    async fn delete_project(&self, id: &str) -> Result<()> {
        let storage = &self.storage;
        storage.with_lock(|| storage.delete(id))?;
        Ok(())
    }

    async fn get_categories(&self) -> Result<Option<CategorySet>> {
        Ok(self.categories.load()?)
    }

    async fn put_categories(&self, set: &CategorySet) -> Result<()> {
        Ok(self.categories.save(set)?)
    }

    async fn update_categories(&self, mode: Mode, op: CategoryOp) -> Result<()> {
        if self.categories.load()?.is_none() {
            self.categories.save(&CategorySet::with_defaults())?;
        }
        self.categories.update(|set| {
            op.apply(set, mode);
        })?;
        Ok(())
    }
}

/// Asset host that copies uploads into a content-addressed directory tree.
#[derive(Debug, Clone)]
pub struct LocalAssetHost {
    root: PathBuf,
    base_url: String,
}

impl LocalAssetHost {
    /// Creates a host writing under `root` and serving from `base_url`.
    #[must_use]
    pub fn new(root: PathBuf, base_url: String) -> Self {
        Self { root, base_url }
    }

    fn stored_name(file: &MediaFile) -> String {
        let digest = Sha256::digest(&file.bytes);
        let hash: String = digest.iter().take(8).map(|b| format!("{b:02x}")).collect();
        match file.extension() {
            Some(ext) => format!("{hash}.{ext}"),
            None => hash,
        }
    }
}

#[async_trait]
impl AssetHost for LocalAssetHost {
    async fn upload(&self, file: &MediaFile, profile: UploadProfile) -> Result<String> {
        if file.bytes.is_empty() {
            return Err(AppError::Upload(format!("{} is empty", file.file_name)));
        }

        let name = Self::stored_name(file);
        let dir = self.root.join(profile.folder());
        let target = dir.join(&name);
        let io_failure = |err: std::io::Error| AppError::Upload(format!("{}: {err}", file.file_name));

        std::fs::create_dir_all(&dir).map_err(io_failure)?;
        if !target.exists() {
            std::fs::write(&target, &file.bytes).map_err(io_failure)?;
        }

        let url = format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            profile.folder(),
            name
        );
        tracing::debug!(file = %file.file_name, %url, "asset stored");
        Ok(url)
    }
}

/// Notifier that appends each message to a JSONL outbox.
#[derive(Debug, Clone)]
pub struct OutboxNotifier {
    path: PathBuf,
    service: String,
}

impl OutboxNotifier {
    /// Creates a notifier writing to `path` on behalf of `service`.
    #[must_use]
    pub fn new(path: PathBuf, service: String) -> Self {
        Self { path, service }
    }
}

#[async_trait]
impl Notifier for OutboxNotifier {
    async fn send(&self, template: &str, params: &TemplateParams) -> Result<()> {
        let record = serde_json::json!({
            "service": self.service,
            "template": template,
            "params": params,
            "queued_at": unix_timestamp(),
        });

        let mut line = serde_json::to_vec(&record)
            .map_err(|err| AppError::Notification(err.to_string()))?;
        line.push(b'\n');

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(&line))
            .map_err(|err| AppError::Notification(err.to_string()))?;

        tracing::info!(template, "notification queued");
        Ok(())
    }
}
