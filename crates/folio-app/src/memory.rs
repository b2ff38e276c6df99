// Rust guideline compliant 2026-10-16

//! In-memory collaborators with failure injection.
//!
//! Used by tests and by embedders that want a throwaway site. Every
//! adapter records what it was asked to do so callers can assert on it.

use crate::error::{AppError, Result};
use crate::ports::{
    AssetHost, AuthProvider, CategoryOp, DocumentStore, MediaFile, NewProject, Notifier,
    ProjectUpdate, ResourceFetcher, TemplateParams, UploadProfile,
};
use crate::session::AdminSession;
use crate::time::unix_timestamp;
use async_trait::async_trait;
use folio_core::{CategorySet, Mode, Project};
use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Document store kept in process memory.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    projects: Mutex<Vec<Project>>,
    categories: Mutex<Option<CategorySet>>,
    failing_deletes: Mutex<HashSet<String>>,
    unavailable: AtomicBool,
    listing_fails: AtomicBool,
    next_id: AtomicUsize,
    list_calls: AtomicUsize,
}

impl MemoryDocumentStore {
    /// Creates an empty store with no category document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store preloaded with projects.
    #[must_use]
    pub fn with_projects(projects: Vec<Project>) -> Self {
        let store = Self::new();
        *lock(&store.projects) = projects;
        store
    }

    /// Makes every later delete of `id` fail.
    pub fn fail_delete(&self, id: &str) {
        lock(&self.failing_deletes).insert(id.to_string());
    }

    /// Makes every call fail while `unavailable` is true.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Makes listing the collection fail while `failing` is true; writes
    /// still succeed.
    pub fn set_listing_fails(&self, failing: bool) {
        self.listing_fails.store(failing, Ordering::SeqCst);
    }

    /// Returns a copy of the stored projects.
    #[must_use]
    pub fn projects(&self) -> Vec<Project> {
        lock(&self.projects).clone()
    }

    /// Returns the stored category document.
    #[must_use]
    pub fn categories(&self) -> Option<CategorySet> {
        lock(&self.categories).clone()
    }

    /// Returns how many times the collection was listed.
    #[must_use]
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::backend("document store", "service unavailable"));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn list_projects(&self) -> Result<Vec<Project>> {
        self.check_available()?;
        if self.listing_fails.load(Ordering::SeqCst) {
            return Err(AppError::backend("document store", "list timed out"));
        }
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.projects())
    }

    async fn get_project(&self, id: &str) -> Result<Option<Project>> {
        self.check_available()?;
        Ok(lock(&self.projects).iter().find(|p| p.id == id).cloned())
    }

    async fn add_project(&self, project: NewProject) -> Result<String> {
        self.check_available()?;
        let id = format!("mem-{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        lock(&self.projects).push(project.into_project(id.clone()));
        Ok(id)
    }

    async fn update_project(&self, id: &str, update: ProjectUpdate) -> Result<()> {
        self.check_available()?;
        let mut projects = lock(&self.projects);
        let project = projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::project_not_found(id))?;
        update.apply(project);
        Ok(())
    }

    async fn delete_project(&self, id: &str) -> Result<()> {
        self.check_available()?;
        if lock(&self.failing_deletes).contains(id) {
            return Err(AppError::backend("document store", format!("delete of {id} rejected")));
        }
        lock(&self.projects).retain(|p| p.id != id);
        Ok(())
    }

    async fn get_categories(&self) -> Result<Option<CategorySet>> {
        self.check_available()?;
        Ok(self.categories())
    }

    async fn put_categories(&self, set: &CategorySet) -> Result<()> {
        self.check_available()?;
        *lock(&self.categories) = Some(set.clone());
        Ok(())
    }

    async fn update_categories(&self, mode: Mode, op: CategoryOp) -> Result<()> {
        self.check_available()?;
        let mut categories = lock(&self.categories);
        let set = categories.get_or_insert_with(CategorySet::with_defaults);
        op.apply(set, mode);
        Ok(())
    }
}

/// Asset host that records uploads and returns `memory://` URLs.
#[derive(Debug, Default)]
pub struct MemoryAssetHost {
    uploads: Mutex<Vec<(UploadProfile, String)>>,
    failing_files: Mutex<HashSet<String>>,
}

impl MemoryAssetHost {
    /// Creates a host that accepts every upload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes uploads of `file_name` fail.
    pub fn fail_file(&self, file_name: &str) {
        lock(&self.failing_files).insert(file_name.to_string());
    }

    /// Returns the accepted uploads in order.
    #[must_use]
    pub fn uploads(&self) -> Vec<(UploadProfile, String)> {
        lock(&self.uploads).clone()
    }
}

#[async_trait]
impl AssetHost for MemoryAssetHost {
    async fn upload(&self, file: &MediaFile, profile: UploadProfile) -> Result<String> {
        if lock(&self.failing_files).contains(&file.file_name) {
            return Err(AppError::Upload(format!("{} rejected", file.file_name)));
        }
        lock(&self.uploads).push((profile, file.file_name.clone()));
        Ok(format!("memory://{}/{}", profile.folder(), file.file_name))
    }
}

/// Auth provider with a fixed set of accounts.
#[derive(Debug)]
pub struct MemoryAuth {
    accounts: BTreeMap<String, String>,
    sender: watch::Sender<Option<AdminSession>>,
}

impl MemoryAuth {
    /// Creates a provider accepting the given `(email, password)` pairs.
    #[must_use]
    pub fn new<I, E, P>(accounts: I) -> Self
    where
        I: IntoIterator<Item = (E, P)>,
        E: Into<String>,
        P: Into<String>,
    {
        let (sender, _) = watch::channel(None);
        Self {
            accounts: accounts
                .into_iter()
                .map(|(email, password)| (email.into(), password.into()))
                .collect(),
            sender,
        }
    }
}

#[async_trait]
impl AuthProvider for MemoryAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AdminSession> {
        match self.accounts.get(email) {
            Some(expected) if expected == password => {
                let session = AdminSession::new(email.to_string(), unix_timestamp());
                self.sender.send_replace(Some(session.clone()));
                Ok(session)
            }
            _ => Err(AppError::Auth("invalid email or password".to_string())),
        }
    }

    async fn sign_out(&self) -> Result<()> {
        self.sender.send_replace(None);
        Ok(())
    }

    fn current_session(&self) -> Option<AdminSession> {
        self.sender.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<Option<AdminSession>> {
        self.sender.subscribe()
    }
}

/// Notifier that records sent messages.
#[derive(Debug, Default)]
pub struct MemoryNotifier {
    sent: Mutex<Vec<(String, TemplateParams)>>,
    failing: AtomicBool,
}

impl MemoryNotifier {
    /// Creates a notifier that accepts every message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes sends fail while `failing` is true.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Returns the messages sent so far.
    #[must_use]
    pub fn sent(&self) -> Vec<(String, TemplateParams)> {
        lock(&self.sent).clone()
    }
}

#[async_trait]
impl Notifier for MemoryNotifier {
    async fn send(&self, template: &str, params: &TemplateParams) -> Result<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::Notification("provider unavailable".to_string()));
        }
        lock(&self.sent).push((template.to_string(), params.clone()));
        Ok(())
    }
}

/// Fetcher serving a fixed set of resources.
#[derive(Debug, Default)]
pub struct MemoryFetcher {
    resources: BTreeMap<String, Vec<u8>>,
    calls: AtomicUsize,
}

impl MemoryFetcher {
    /// Creates a fetcher serving `resources`.
    #[must_use]
    pub fn new<I, P, B>(resources: I) -> Self
    where
        I: IntoIterator<Item = (P, B)>,
        P: Into<String>,
        B: Into<Vec<u8>>,
    {
        Self {
            resources: resources
                .into_iter()
                .map(|(path, body)| (path.into(), body.into()))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Returns how many fetches reached the network.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResourceFetcher for MemoryFetcher {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.resources
            .get(path)
            .cloned()
            .ok_or_else(|| AppError::backend("network", format!("{path} returned 404")))
    }
}
