// Rust guideline compliant 2026-10-16

//! Site discovery and path management utilities.

use crate::auth::LocalAuth;
use crate::error::{AppError, Result};
use crate::local::{LocalAssetHost, LocalDocumentStore, OutboxNotifier};
use folio_core::{CategoryDocument, CategorySet, Config, Storage};
use std::path::{Path, PathBuf};

/// Name of the site data directory.
pub const SITE_DIR: &str = ".folio";

/// Path metadata for a Folio site.
#[derive(Debug, Clone)]
pub struct SiteContext {
    root: PathBuf,
    folio_dir: PathBuf,
    projects_path: PathBuf,
    categories_path: PathBuf,
    config_path: PathBuf,
    session_path: PathBuf,
    outbox_path: PathBuf,
    assets_dir: PathBuf,
}

impl SiteContext {
    fn at(root: PathBuf) -> Self {
        let folio_dir = root.join(SITE_DIR);
        Self {
            root,
            projects_path: folio_dir.join("projects.jsonl"),
            categories_path: folio_dir.join("categories.json"),
            config_path: folio_dir.join("config.toml"),
            session_path: folio_dir.join("session.json"),
            outbox_path: folio_dir.join("outbox.jsonl"),
            assets_dir: folio_dir.join("assets"),
            folio_dir,
        }
    }

    /// Discovers a Folio site starting from an optional root.
    ///
    /// # Arguments
    ///
    /// * `site_root` - Optional site root to pin discovery
    ///
    /// # Returns
    ///
    /// A `SiteContext` with resolved paths for the site.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The site root cannot be resolved
    /// - The `.folio` directory is missing
    pub fn discover(site_root: Option<&Path>) -> Result<Self> {
        let root = match site_root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let context = Self::at(root);
        if !context.folio_dir.exists() {
            return Err(AppError::SiteNotInitialized {
                path: context.folio_dir,
            });
        }
        Ok(context)
    }

    /// Creates the site layout under `root`, keeping any existing files.
    ///
    /// Writes a default `config.toml`, an empty project collection and the
    /// default category document when they are absent.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or file cannot be created.
    pub fn init(root: &Path) -> Result<Self> {
        let context = Self::at(root.to_path_buf());
        std::fs::create_dir_all(&context.assets_dir)?;

        if !context.config_path.exists() {
            Config::default().save(&context.folio_dir)?;
        }
        if !context.projects_path.exists() {
            std::fs::File::create(&context.projects_path)?;
        }
        let categories = context.open_category_document()?;
        if categories.load()?.is_none() {
            categories.save(&CategorySet::with_defaults())?;
        }

        tracing::info!(path = %context.folio_dir.display(), "initialized site");
        Ok(context)
    }

    /// Returns the site root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Returns the `.folio` directory path.
    #[must_use]
    pub fn folio_dir(&self) -> &Path {
        self.folio_dir.as_path()
    }

    /// Returns the projects JSONL path.
    #[must_use]
    pub fn projects_path(&self) -> &Path {
        self.projects_path.as_path()
    }

    /// Returns the category document path.
    #[must_use]
    pub fn categories_path(&self) -> &Path {
        self.categories_path.as_path()
    }

    /// Returns the config TOML path.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        self.config_path.as_path()
    }

    /// Returns the persisted session path.
    #[must_use]
    pub fn session_path(&self) -> &Path {
        self.session_path.as_path()
    }

    /// Returns the notification outbox path.
    #[must_use]
    pub fn outbox_path(&self) -> &Path {
        self.outbox_path.as_path()
    }

    /// Returns the uploaded assets directory.
    #[must_use]
    pub fn assets_dir(&self) -> &Path {
        self.assets_dir.as_path()
    }

    /// Opens storage for the project collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be initialized.
    pub fn open_storage(&self) -> Result<Storage> {
        Ok(Storage::new(self.projects_path.clone())?)
    }

    /// Opens the category document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document handle cannot be created.
    pub fn open_category_document(&self) -> Result<CategoryDocument> {
        Ok(CategoryDocument::new(self.categories_path.clone())?)
    }

    /// Loads site configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(self.folio_dir())?)
    }

    /// Builds the file-backed document store.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage handles cannot be created.
    pub fn document_store(&self) -> Result<LocalDocumentStore> {
        Ok(LocalDocumentStore::new(
            self.open_storage()?,
            self.open_category_document()?,
        ))
    }

    /// Builds the file-backed asset host.
    #[must_use]
    pub fn asset_host(&self, config: &Config) -> LocalAssetHost {
        LocalAssetHost::new(self.assets_dir.clone(), config.asset_base_url.clone())
    }

    /// Builds the config-backed auth provider, restoring any saved session.
    #[must_use]
    pub fn auth(&self, config: &Config) -> LocalAuth {
        LocalAuth::new(config, self.session_path.clone())
    }

    /// Builds the outbox notifier.
    #[must_use]
    pub fn notifier(&self, config: &Config) -> OutboxNotifier {
        OutboxNotifier::new(self.outbox_path.clone(), config.notify_service.clone())
    }
}
