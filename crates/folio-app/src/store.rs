// Rust guideline compliant 2026-10-16

//! In-memory read-through cache of the project collection.

use crate::error::Result;
use crate::ports::DocumentStore;
use folio_core::{CategorySet, GalleryQuery, Mode, Project};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Why the gallery shows no cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyState {
    /// A search term is active and nothing matched.
    NoResults,
    /// The mode and category hold no projects.
    NoProjects,
}

#[derive(Debug, Default)]
struct Snapshot {
    projects: Vec<Project>,
    categories: CategorySet,
    loaded: bool,
    applied_ticket: u64,
}

/// Holds the last fetched projects and category lists.
///
/// The store is constructed explicitly and shared by reference or `Arc`.
/// Loads are tagged with a ticket so a slow response can never overwrite
/// the result of a newer one, and nothing is applied after `dispose`.
#[derive(Debug, Default)]
pub struct ProjectStore {
    state: RwLock<Snapshot>,
    next_ticket: AtomicU64,
    in_flight: AtomicU64,
    disposed: AtomicBool,
}

impl ProjectStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Snapshot> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Snapshot> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fetches projects and categories from the document store.
    ///
    /// A missing category document reads as the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if either fetch fails. The previous snapshot is kept.
    pub async fn load(&self, documents: &dyn DocumentStore) -> Result<()> {
        if self.is_disposed() {
            return Ok(());
        }
        let ticket = self.next_ticket.fetch_add(1, Ordering::SeqCst) + 1;
        self.in_flight.fetch_add(1, Ordering::SeqCst);

        let fetched = async {
            let projects = documents.list_projects().await?;
            let categories = documents
                .get_categories()
                .await?
                .unwrap_or_else(CategorySet::with_defaults);
            Ok::<_, crate::AppError>((projects, categories))
        }
        .await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        let (projects, categories) = fetched?;

        if self.is_disposed() {
            tracing::debug!(ticket, "discarding load completed after dispose");
            return Ok(());
        }

        let mut state = self.write();
        if ticket < state.applied_ticket {
            tracing::debug!(ticket, applied = state.applied_ticket, "discarding stale load");
            return Ok(());
        }
        tracing::debug!(ticket, count = projects.len(), "project snapshot updated");
        state.projects = projects;
        state.categories = categories;
        state.loaded = true;
        state.applied_ticket = ticket;
        Ok(())
    }

    /// Refetches after a mutation. Same as `load`.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails.
    pub async fn refresh(&self, documents: &dyn DocumentStore) -> Result<()> {
        self.load(documents).await
    }

    /// Detaches the store; loads finishing afterwards are dropped.
    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::SeqCst);
    }

    /// Returns true once `dispose` has been called.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }

    /// Returns true while a fetch is running or before the first load lands.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0 || !self.read().loaded
    }

    /// Returns a copy of every cached project in fetch order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Project> {
        self.read().projects.clone()
    }

    /// Returns a copy of the cached category lists.
    #[must_use]
    pub fn categories(&self) -> CategorySet {
        self.read().categories.clone()
    }

    /// Returns the category list for one mode.
    #[must_use]
    pub fn categories_for(&self, mode: Mode) -> Vec<String> {
        self.read().categories.list(mode).to_vec()
    }

    /// Looks up a cached project.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<Project> {
        self.read().projects.iter().find(|p| p.id == id).cloned()
    }

    /// Returns the projects the gallery shows for a query.
    #[must_use]
    pub fn visible(&self, query: &GalleryQuery) -> Vec<Project> {
        let state = self.read();
        query.apply(&state.projects).into_iter().cloned().collect()
    }

    /// Returns the empty-state to show for a query, if its result is empty.
    #[must_use]
    pub fn empty_state(&self, query: &GalleryQuery) -> Option<EmptyState> {
        let state = self.read();
        if !query.apply(&state.projects).is_empty() {
            return None;
        }
        if query.search.trim().is_empty() {
            Some(EmptyState::NoProjects)
        } else {
            Some(EmptyState::NoResults)
        }
    }
}
