// Rust guideline compliant 2026-10-15

//! Error handling for Folio application services.

use folio_core::Error as CoreError;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for command and envelope responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested project or document was not found.
    NotFound,
    /// Input validation failed.
    ValidationError,
    /// The request included invalid inputs.
    InvalidInput,
    /// The operation needs an admin session.
    Unauthorized,
    /// The document store rejected or failed a call.
    BackendError,
    /// The asset host rejected or failed an upload.
    UploadError,
    /// The auth provider rejected the credentials or failed.
    AuthError,
    /// The notification provider failed to send.
    NotificationError,
    /// At least one delete in a batch was rejected.
    BulkDeleteFailed,
    /// IO failure while reading or writing site data.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
    /// Configuration is invalid.
    ConfigError,
    /// The site has not been initialized.
    SiteNotInitialized,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Site directory is missing or not initialized.
    #[error("Folio site not initialized at {path}. Run 'folio init' first.")]
    SiteNotInitialized {
        /// Path where `.folio` was expected.
        path: PathBuf,
    },

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A draft or form failed validation.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The operation requires a signed-in admin.
    #[error("Not signed in. Run 'folio login' first.")]
    Unauthorized,

    /// A document store call failed.
    #[error("{service} error: {message}")]
    Backend {
        /// Name of the failing collaborator.
        service: String,
        /// Failure description.
        message: String,
    },

    /// A media upload failed.
    #[error("Upload failed: {0}")]
    Upload(String),

    /// Sign-in or sign-out failed.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// The notification provider failed.
    #[error("Notification failed: {0}")]
    Notification(String),

    /// One or more deletes in a batch were rejected.
    #[error("Bulk delete failed for {} of {attempted} projects", .failed.len())]
    BulkDeleteFailed {
        /// IDs whose delete was rejected.
        failed: Vec<String>,
        /// Number of deletes dispatched.
        attempted: usize,
    },

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Builds a backend error for a named collaborator.
    pub fn backend(service: &str, message: impl Into<String>) -> Self {
        AppError::Backend {
            service: service.to_string(),
            message: message.into(),
        }
    }

    /// Builds a not-found error for a project ID.
    pub fn project_not_found(id: &str) -> Self {
        AppError::Core(CoreError::NotFound(id.to_string()))
    }

    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::SiteNotInitialized { .. } => ErrorCode::SiteNotInitialized,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Validation(_) => ErrorCode::ValidationError,
            AppError::Unauthorized => ErrorCode::Unauthorized,
            AppError::Backend { .. } => ErrorCode::BackendError,
            AppError::Upload(_) => ErrorCode::UploadError,
            AppError::Auth(_) => ErrorCode::AuthError,
            AppError::Notification(_) => ErrorCode::NotificationError,
            AppError::BulkDeleteFailed { .. } => ErrorCode::BulkDeleteFailed,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::NotFound(_) => ErrorCode::NotFound,
                CoreError::InvalidProject(_) => ErrorCode::ValidationError,
                CoreError::InvalidValue(_) => ErrorCode::InvalidInput,
                CoreError::InvalidConfig(_) => ErrorCode::ConfigError,
                CoreError::Locked(_) => ErrorCode::BackendError,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::SiteNotInitialized { path } => Some(serde_json::json!({
                "path": path,
            })),
            AppError::Backend { service, .. } => Some(serde_json::json!({
                "service": service,
            })),
            AppError::BulkDeleteFailed { failed, attempted } => Some(serde_json::json!({
                "failed": failed,
                "attempted": attempted,
            })),
            AppError::Core(CoreError::NotFound(id)) => Some(serde_json::json!({
                "id": id,
            })),
            _ => None,
        }
    }

    /// Returns the one-line notice shown to the user when an operation aborts.
    #[must_use]
    pub fn notice(&self) -> String {
        match self {
            AppError::Core(CoreError::NotFound(_)) => "Project not found.".to_string(),
            AppError::Upload(_) => "Upload failed. Nothing was saved; please try again.".to_string(),
            AppError::Notification(_) => {
                "Your message could not be sent. Please try again.".to_string()
            }
            AppError::Auth(_) => "Sign-in failed. Check your email and password.".to_string(),
            AppError::BulkDeleteFailed { failed, attempted } => format!(
                "Delete failed for {} of {} selected projects. The list has been reloaded.",
                failed.len(),
                attempted
            ),
            AppError::Backend { .. } => "The server did not respond. Please try again.".to_string(),
            other => other.to_string(),
        }
    }
}
