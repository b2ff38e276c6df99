// Rust guideline compliant 2026-10-17

//! Application services for Folio.
//!
//! This crate wires the core gallery logic to its collaborators: the
//! document store, asset host, auth and notification providers. It holds
//! the project store and the admin mutation gateway, plus the view-level
//! helpers (routing, admin selection, detail overlay, shell cache) and
//! standardized error codes and response envelopes.

pub mod admin;
pub mod auth;
pub mod contact;
pub mod error;
pub mod gateway;
pub mod listener;
pub mod local;
pub mod memory;
pub mod overlay;
pub mod ports;
pub mod response;
pub mod routes;
pub mod session;
pub mod shell_cache;
pub mod site;
pub mod store;
pub mod time;

pub use admin::{AdminFilter, ModeFilter, Selection};
pub use auth::{hash_password, LocalAuth};
pub use contact::{ContactService, SubmitOutcome};
pub use error::{AppError, ErrorCode, Result};
pub use gateway::{AdminMutationGateway, ProjectDraft};
pub use listener::{Binding, ListenerGuard, ListenerRegistry};
pub use local::{LocalAssetHost, LocalDocumentStore, OutboxNotifier};
pub use overlay::{DetailOverlay, OverlayEvent, OverlayResponse};
pub use ports::{
    AssetHost, AuthProvider, CategoryOp, DocumentStore, MediaFile, NewProject, Notifier,
    ProjectUpdate, ResourceFetcher, TemplateParams, UploadProfile,
};
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use routes::{
    card_action, resolve_detail, CardAction, DetailResolution, Route, RouteGuard, Viewport,
};
pub use session::AdminSession;
pub use shell_cache::{ShellCache, CACHE_NAME, SHELL_URLS};
pub use site::SiteContext;
pub use store::{EmptyState, ProjectStore};
pub use time::{current_year, unix_timestamp};
