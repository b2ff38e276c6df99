// Rust guideline compliant 2026-10-17

//! Mobile detail overlay lifecycle.

use crate::listener::{Binding, ListenerGuard, ListenerRegistry};
use crate::routes::{Route, Viewport};
use folio_core::{CarouselAction, CarouselConfig, CarouselController, Point, Project};
use std::time::Instant;

/// Body class set while an overlay is open.
pub const DETAIL_OPEN_CLASS: &str = "detail-open";
/// Width at or below which the overlay layout applies, unless overridden.
pub const DEFAULT_MOBILE_BREAKPOINT: u32 = 768;

/// Input events routed to a mounted overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlayEvent {
    /// The image strip scrolled.
    Scroll {
        /// Horizontal scroll offset.
        left: f64,
        /// Width of one slide.
        item_width: f64,
    },
    /// A finger touched down.
    TouchStart(Point),
    /// A finger moved.
    TouchMove(Point),
    /// A finger lifted.
    TouchEnd(Point),
    /// The gesture was interrupted.
    TouchCancel,
    /// The logo or close button was pressed.
    CloseRequested,
    /// The window was resized.
    Resize(Viewport),
}

/// What the view must do after an event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayResponse {
    /// Carousel effects to apply.
    pub actions: Vec<CarouselAction>,
    /// True if the browser's default gesture must be prevented.
    pub prevent_default: bool,
    /// Set when the viewport grew past the breakpoint; render this route's
    /// desktop layout instead of the overlay.
    pub switch_to: Option<Route>,
}

/// A mounted detail overlay.
///
/// Mounting acquires the scroll, touch-move and resize listeners and the
/// `detail-open` body class. They are released when the close transition
/// completes or when the overlay is dropped, whichever comes first.
#[derive(Debug)]
pub struct DetailOverlay {
    project_id: String,
    carousel: CarouselController,
    breakpoint: u32,
    guards: Vec<ListenerGuard>,
}

impl DetailOverlay {
    /// Mounts an overlay for a project.
    pub fn mount<F>(
        project: &Project,
        config: CarouselConfig,
        registry: &ListenerRegistry,
        on_close: F,
    ) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let guards = vec![
            registry.acquire(Binding::Scroll),
            registry.acquire(Binding::TouchMove),
            registry.acquire(Binding::Resize),
            registry.acquire(Binding::BodyClass(DETAIL_OPEN_CLASS)),
        ];
        tracing::debug!(id = %project.id, "detail overlay mounted");
        Self {
            project_id: project.id.clone(),
            carousel: CarouselController::for_project(project, config).with_on_close(on_close),
            breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            guards,
        }
    }

    /// Sets the mobile breakpoint used for resize decisions.
    #[must_use]
    pub fn with_breakpoint(mut self, breakpoint: u32) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    /// Returns the project shown.
    #[must_use]
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the carousel state.
    #[must_use]
    pub fn carousel(&self) -> &CarouselController {
        &self.carousel
    }

    /// Returns true until the close transition has completed.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        !self.guards.is_empty()
    }

    /// Routes an input event to the carousel.
    pub fn handle(&mut self, event: OverlayEvent, now: Instant) -> OverlayResponse {
        if !self.is_mounted() {
            return OverlayResponse::default();
        }
        let mut response = OverlayResponse::default();
        match event {
            OverlayEvent::Scroll { left, item_width } => {
                response
                    .actions
                    .extend(self.carousel.on_scroll(left, item_width, now));
            }
            OverlayEvent::TouchStart(point) => self.carousel.touch_start(point),
            OverlayEvent::TouchMove(point) => {
                response.prevent_default = self.carousel.touch_move(point);
            }
            OverlayEvent::TouchEnd(point) => {
                response.actions.extend(self.carousel.touch_end(point, now));
            }
            OverlayEvent::TouchCancel => self.carousel.touch_cancel(),
            OverlayEvent::CloseRequested => {
                response.actions.extend(self.carousel.request_close(now));
            }
            OverlayEvent::Resize(viewport) => {
                if !viewport.is_mobile(self.breakpoint) {
                    response.switch_to = Some(Route::Project(self.project_id.clone()));
                }
            }
        }
        response
    }

    /// Fires due timers and unmounts once the close transition is over.
    pub fn poll(&mut self, now: Instant) -> Vec<CarouselAction> {
        let actions = self.carousel.poll(now);
        if actions.contains(&CarouselAction::Dismissed) {
            self.guards.clear();
            tracing::debug!(id = %self.project_id, "detail overlay unmounted");
        }
        actions
    }
}
