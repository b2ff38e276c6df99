// Rust guideline compliant 2026-10-17

//! Client routes and navigation decisions.

use crate::error::Result;
use crate::ports::DocumentStore;
use crate::session::AdminSession;
use folio_core::{image_count, Project};
use std::fmt;
use tokio::sync::watch;

/// Notice shown when a detail link points at a missing project.
pub const PROJECT_NOT_FOUND: &str = "Project not found.";

/// A client-visible route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Gallery,
    /// `/project/:id`
    Project(String),
    /// `/login`
    Login,
    /// `/admin`
    Admin,
    /// `/upload`
    Upload,
}

impl Route {
    /// Parses a path. Query strings, fragments and a trailing slash are ignored.
    #[must_use]
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Route::Gallery),
            "/login" => Some(Route::Login),
            "/admin" => Some(Route::Admin),
            "/upload" => Some(Route::Upload),
            other => other
                .strip_prefix("/project/")
                .filter(|id| !id.is_empty() && !id.contains('/'))
                .map(|id| Route::Project(id.to_string())),
        }
    }

    /// Returns the canonical path.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Route::Gallery => "/".to_string(),
            Route::Project(id) => format!("/project/{id}"),
            Route::Login => "/login".to_string(),
            Route::Admin => "/admin".to_string(),
            Route::Upload => "/upload".to_string(),
        }
    }

    /// Returns true for routes that need an admin session.
    #[must_use]
    pub fn requires_session(&self) -> bool {
        matches!(self, Route::Admin | Route::Upload)
    }

    /// Returns the route to actually render, redirecting to login without a session.
    #[must_use]
    pub fn guard(self, session: Option<&AdminSession>) -> Route {
        if self.requires_session() && session.is_none() {
            tracing::debug!(route = %self, "redirecting to login");
            Route::Login
        } else {
            self
        }
    }
}

/// A requested route kept in step with the auth provider's session channel.
///
/// The rendered route is re-evaluated from the latest session, so signing
/// out while on `/admin` moves the guard to `/login`.
#[derive(Debug)]
pub struct RouteGuard {
    requested: Route,
    sessions: watch::Receiver<Option<AdminSession>>,
}

impl RouteGuard {
    /// Guards `requested` using a receiver from `AuthProvider::subscribe`.
    pub fn new(requested: Route, sessions: watch::Receiver<Option<AdminSession>>) -> Self {
        Self {
            requested,
            sessions,
        }
    }

    /// Returns the latest observed session.
    #[must_use]
    pub fn session(&self) -> Option<AdminSession> {
        self.sessions.borrow().clone()
    }

    /// Returns the route to render for the latest session.
    #[must_use]
    pub fn current(&self) -> Route {
        self.requested.clone().guard(self.sessions.borrow().as_ref())
    }

    /// Waits for the next session change and returns the route to render.
    ///
    /// Returns `None` once the provider is gone.
    pub async fn changed(&mut self) -> Option<Route> {
        self.sessions.changed().await.ok()?;
        Some(self.current())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Viewport dimensions relevant to layout decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in CSS pixels.
    pub width: u32,
}

impl Viewport {
    /// Returns true when the width is at or below the breakpoint.
    #[must_use]
    pub fn is_mobile(&self, breakpoint: u32) -> bool {
        self.width <= breakpoint
    }
}

/// What tapping a gallery card does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    /// Open the in-page carousel overlay for this project.
    OpenOverlay(String),
    /// Navigate to a route.
    Navigate(Route),
}

/// Decides what a card tap does for the current viewport.
#[must_use]
pub fn card_action(project_id: &str, viewport: Viewport, breakpoint: u32) -> CardAction {
    if viewport.is_mobile(breakpoint) {
        CardAction::OpenOverlay(project_id.to_string())
    } else {
        CardAction::Navigate(Route::Project(project_id.to_string()))
    }
}

/// Returns true if the card shows the "multiple images" badge.
#[must_use]
pub fn shows_multi_badge(project: &Project, viewport: Viewport, breakpoint: u32) -> bool {
    viewport.is_mobile(breakpoint) && image_count(project) > 1
}

/// Outcome of opening a detail route.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailResolution {
    /// The project exists.
    Found(Box<Project>),
    /// The project is missing; go elsewhere and show a notice.
    Redirect {
        /// Where to go.
        to: Route,
        /// Notice to show once.
        notice: String,
    },
}

/// Loads the project behind a detail route.
///
/// # Errors
///
/// Returns an error if the document store fails. A missing project is not
/// an error; it resolves to a redirect to the gallery.
pub async fn resolve_detail(documents: &dyn DocumentStore, id: &str) -> Result<DetailResolution> {
    match documents.get_project(id).await? {
        Some(project) => Ok(DetailResolution::Found(Box::new(project))),
        None => {
            tracing::info!(id, "detail route for missing project");
            Ok(DetailResolution::Redirect {
                to: Route::Gallery,
                notice: PROJECT_NOT_FOUND.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_path() {
        for (path, route) in [
            ("/", Route::Gallery),
            ("", Route::Gallery),
            ("/login", Route::Login),
            ("/admin/", Route::Admin),
            ("/upload?x=1", Route::Upload),
            ("/project/prj-abc123", Route::Project("prj-abc123".to_string())),
        ] {
            assert_eq!(Route::parse(path), Some(route.clone()), "{path}");
            assert_eq!(Route::parse(&route.path()), Some(route));
        }
        assert_eq!(Route::parse("/project/"), None);
        assert_eq!(Route::parse("/project/a/b"), None);
        assert_eq!(Route::parse("/nope"), None);
    }

    #[tokio::test]
    async fn test_route_guard_follows_session() {
        use crate::memory::MemoryAuth;
        use crate::ports::AuthProvider;

        let auth = MemoryAuth::new([("admin@folio.test", "pw")]);
        let mut guard = RouteGuard::new(Route::Upload, auth.subscribe());
        assert_eq!(guard.current(), Route::Login);

        auth.sign_in("admin@folio.test", "pw").await.unwrap();
        assert_eq!(guard.changed().await, Some(Route::Upload));
        assert_eq!(
            guard.session().map(|s| s.email().to_string()),
            Some("admin@folio.test".to_string())
        );

        auth.sign_out().await.unwrap();
        assert_eq!(guard.changed().await, Some(Route::Login));
        assert!(guard.session().is_none());

        drop(auth);
        assert_eq!(guard.changed().await, None);
    }

    #[test]
    fn test_card_action_by_viewport() {
        assert_eq!(
            card_action("p1", Viewport { width: 768 }, 768),
            CardAction::OpenOverlay("p1".to_string())
        );
        assert_eq!(
            card_action("p1", Viewport { width: 769 }, 768),
            CardAction::Navigate(Route::Project("p1".to_string()))
        );
    }
}
