// Rust guideline compliant 2026-10-18

//! Wiring of a local site to the application services.

use anyhow::Result;
use folio_app::{
    AdminMutationGateway, AppError, AuthProvider, LocalAssetHost, LocalAuth, LocalDocumentStore,
    ProjectStore, Route, RouteGuard, SiteContext,
};
use folio_core::Config;
use std::path::Path;
use std::sync::Arc;

/// A discovered site with its loaded configuration and project store.
pub struct SiteServices {
    /// Site paths.
    pub site: SiteContext,
    /// Loaded configuration.
    pub config: Config,
    /// File-backed document store.
    pub documents: Arc<LocalDocumentStore>,
    /// Project store, loaded once on open.
    pub store: Arc<ProjectStore>,
}

impl SiteServices {
    /// Discovers the site and loads the project store.
    ///
    /// # Errors
    ///
    /// Returns an error if the site is not initialized, the config is
    /// invalid or the project collection cannot be read.
    pub async fn open(site_root: Option<&Path>) -> Result<Self> {
        let site = SiteContext::discover(site_root)?;
        let config = site.load_config()?;
        let documents = Arc::new(site.document_store()?);
        let store = Arc::new(ProjectStore::new());
        store.load(documents.as_ref()).await?;
        Ok(Self {
            site,
            config,
            documents,
            store,
        })
    }

    /// Returns the auth provider for this site.
    pub fn auth(&self) -> LocalAuth {
        self.site.auth(&self.config)
    }

    /// Returns the asset host for this site.
    pub fn assets(&self) -> LocalAssetHost {
        self.site.asset_host(&self.config)
    }

    /// Opens the admin gateway for the signed-in session.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Unauthorized` if nobody is signed in.
    pub fn gateway(&self) -> Result<AdminMutationGateway> {
        let guard = RouteGuard::new(Route::Admin, self.auth().subscribe());
        match (guard.current(), guard.session()) {
            (Route::Admin, Some(session)) => Ok(AdminMutationGateway::new(
                session,
                self.documents.clone(),
                Arc::new(self.assets()),
                self.store.clone(),
            )),
            _ => Err(AppError::Unauthorized.into()),
        }
    }
}
