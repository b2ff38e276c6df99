// Rust guideline compliant 2026-10-13

//! Mobile detail carousel state machine.
//!
//! The controller tracks the current slide from the strip's scroll position,
//! schedules a snap correction after scrolling settles, and interprets
//! touch gestures on the overlay. Time is passed in by the caller so the
//! machine stays deterministic:
//!
//! - Idle → Swiping on touch start
//! - Swiping → Closing on touch end when the strip sits at its left edge and
//!   the finger travelled right further than the close threshold
//! - Swiping → Idle on any other touch end
//! - Closing → Closed once the close transition has elapsed; the close
//!   callback runs exactly once at that point

use crate::media::{gallery_images, MediaKind};
use crate::Project;
use std::fmt;
use std::time::{Duration, Instant};

/// Default rightward travel needed to dismiss the overlay.
pub const DEFAULT_CLOSE_THRESHOLD: f64 = 100.0;
/// Default tolerance for "scrolled to the left edge".
pub const DEFAULT_EDGE_TOLERANCE: f64 = 10.0;
/// Default idle time before snapping to the nearest slide.
pub const DEFAULT_SNAP_DELAY: Duration = Duration::from_millis(150);
/// Default length of the close transition.
pub const DEFAULT_CLOSE_DELAY: Duration = Duration::from_millis(300);

/// A touch coordinate in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Tunables for gesture and snap handling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    /// Rightward travel (positive) that dismisses the overlay.
    pub close_threshold: f64,
    /// Scroll offset at or below which the strip counts as left-aligned.
    pub edge_tolerance: f64,
    /// Quiet period after the last scroll event before snapping.
    pub snap_delay: Duration,
    /// Length of the close transition.
    pub close_delay: Duration,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            close_threshold: DEFAULT_CLOSE_THRESHOLD,
            edge_tolerance: DEFAULT_EDGE_TOLERANCE,
            snap_delay: DEFAULT_SNAP_DELAY,
            close_delay: DEFAULT_CLOSE_DELAY,
        }
    }
}

/// Gesture state of the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GesturePhase {
    /// No touch in progress.
    Idle,
    /// A touch is in progress.
    Swiping {
        /// Where the touch started.
        origin: Point,
    },
    /// The close transition is running.
    Closing {
        /// When the transition started.
        started: Instant,
    },
    /// The overlay is gone.
    Closed,
}

/// Effects the view layer must apply.
#[derive(Debug, Clone, PartialEq)]
pub enum CarouselAction {
    /// The active slide changed; repaint pagination.
    IndexChanged(usize),
    /// Scroll the strip to this exact offset.
    SnapTo(f64),
    /// Start the close transition.
    BeginClose,
    /// The transition finished and the close callback ran.
    Dismissed,
}

/// One entry of the image strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slide {
    /// Still image.
    Image(String),
    /// Autoplaying muted video.
    Video(String),
    /// Shown when the project has no media.
    Placeholder,
}

type CloseCallback = Box<dyn FnOnce() + Send>;

/// Per-overlay carousel state.
pub struct CarouselController {
    images: Vec<String>,
    current_index: usize,
    phase: GesturePhase,
    scroll_left: f64,
    item_width: f64,
    snap_deadline: Option<Instant>,
    config: CarouselConfig,
    on_close: Option<CloseCallback>,
}

impl fmt::Debug for CarouselController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselController")
            .field("images", &self.images)
            .field("current_index", &self.current_index)
            .field("phase", &self.phase)
            .field("scroll_left", &self.scroll_left)
            .field("item_width", &self.item_width)
            .field("snap_deadline", &self.snap_deadline)
            .finish_non_exhaustive()
    }
}

impl CarouselController {
    /// Creates a controller over an image list. Empty entries are dropped.
    pub fn new(images: Vec<String>, config: CarouselConfig) -> Self {
        let images = images
            .into_iter()
            .filter(|url| !url.trim().is_empty())
            .collect();
        Self {
            images,
            current_index: 0,
            phase: GesturePhase::Idle,
            scroll_left: 0.0,
            item_width: 0.0,
            snap_deadline: None,
            config,
            on_close: None,
        }
    }

    /// Creates a controller over a project's gallery images.
    pub fn for_project(project: &Project, config: CarouselConfig) -> Self {
        Self::new(gallery_images(project), config)
    }

    /// Registers the callback run when the close transition completes.
    #[must_use]
    pub fn with_on_close<F>(mut self, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.on_close = Some(Box::new(callback));
        self
    }

    /// Returns the active slide index. Always within `[0, max(len - 1, 0)]`.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Returns the number of images.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Returns the gesture phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Returns the last known scroll offset of the strip.
    #[must_use]
    pub fn scroll_left(&self) -> f64 {
        self.scroll_left
    }

    /// Returns true once the close transition has started.
    #[must_use]
    pub fn is_closing(&self) -> bool {
        matches!(self.phase, GesturePhase::Closing { .. } | GesturePhase::Closed)
    }

    /// Returns the slides to render. An empty list yields one placeholder.
    #[must_use]
    pub fn slides(&self) -> Vec<Slide> {
        if self.images.is_empty() {
            return vec![Slide::Placeholder];
        }
        self.images
            .iter()
            .map(|url| match MediaKind::of(url) {
                MediaKind::Image => Slide::Image(url.clone()),
                MediaKind::Video => Slide::Video(url.clone()),
            })
            .collect()
    }

    /// Returns one flag per pagination dot, true for the active one.
    ///
    /// Dots are only shown when there is more than one image.
    #[must_use]
    pub fn pagination(&self) -> Vec<bool> {
        if self.images.len() < 2 {
            return Vec::new();
        }
        (0..self.images.len())
            .map(|idx| idx == self.current_index)
            .collect()
    }

    fn max_index(&self) -> usize {
        self.images.len().saturating_sub(1)
    }

    /// Records the start of a touch.
    pub fn touch_start(&mut self, point: Point) {
        match self.phase {
            GesturePhase::Idle | GesturePhase::Swiping { .. } => {
                self.phase = GesturePhase::Swiping { origin: point };
            }
            GesturePhase::Closing { .. } | GesturePhase::Closed => {}
        }
    }

    /// Handles touch movement.
    ///
    /// # Returns
    ///
    /// True if the browser's default gesture must be suppressed: the motion
    /// is mostly horizontal and heading right, which would otherwise trigger
    /// history navigation.
    pub fn touch_move(&mut self, point: Point) -> bool {
        let GesturePhase::Swiping { origin } = self.phase else {
            return false;
        };
        let distance_x = origin.x - point.x;
        let distance_y = origin.y - point.y;
        distance_x.abs() > distance_y.abs() && distance_x < 0.0
    }

    /// Handles the end of a touch.
    ///
    /// # Returns
    ///
    /// `Some(CarouselAction::BeginClose)` if the gesture dismisses the overlay.
    pub fn touch_end(&mut self, end: Point, now: Instant) -> Option<CarouselAction> {
        let GesturePhase::Swiping { origin } = self.phase else {
            return None;
        };
        self.phase = GesturePhase::Idle;

        let distance = origin.x - end.x;
        let at_left_edge = self.scroll_left <= self.config.edge_tolerance;
        if at_left_edge && distance < -self.config.close_threshold {
            tracing::debug!(distance, "edge swipe dismisses carousel");
            return self.begin_close(now);
        }
        None
    }

    /// Abandons an in-progress touch.
    pub fn touch_cancel(&mut self) {
        if matches!(self.phase, GesturePhase::Swiping { .. }) {
            self.phase = GesturePhase::Idle;
        }
    }

    /// Starts the close transition from an explicit request (logo or close button).
    pub fn request_close(&mut self, now: Instant) -> Option<CarouselAction> {
        self.begin_close(now)
    }

    fn begin_close(&mut self, now: Instant) -> Option<CarouselAction> {
        match self.phase {
            GesturePhase::Closing { .. } | GesturePhase::Closed => None,
            GesturePhase::Idle | GesturePhase::Swiping { .. } => {
                self.phase = GesturePhase::Closing { started: now };
                Some(CarouselAction::BeginClose)
            }
        }
    }

    /// Handles a scroll event from the image strip.
    ///
    /// Recomputes the active index and re-arms the snap timer.
    ///
    /// # Returns
    ///
    /// `Some(CarouselAction::IndexChanged)` when the active slide changed.
    pub fn on_scroll(&mut self, scroll_left: f64, item_width: f64, now: Instant) -> Option<CarouselAction> {
        if self.phase == GesturePhase::Closed || item_width <= 0.0 || !item_width.is_finite() {
            return None;
        }
        self.scroll_left = scroll_left;
        self.item_width = item_width;
        self.snap_deadline = Some(now + self.config.snap_delay);

        let raw = (scroll_left / item_width).round();
        let index = if raw.is_finite() && raw > 0.0 {
            (raw as usize).min(self.max_index())
        } else {
            0
        };

        if index != self.current_index {
            self.current_index = index;
            return Some(CarouselAction::IndexChanged(index));
        }
        None
    }

    /// Returns the next instant at which `poll` has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        let close_at = match self.phase {
            GesturePhase::Closing { started } => Some(started + self.config.close_delay),
            _ => None,
        };
        match (self.snap_deadline, close_at) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Fires any timers that are due.
    pub fn poll(&mut self, now: Instant) -> Vec<CarouselAction> {
        let mut actions = Vec::new();

        if let Some(deadline) = self.snap_deadline {
            if now >= deadline && self.phase != GesturePhase::Closed {
                self.snap_deadline = None;
                let target = self.current_index as f64 * self.item_width;
                self.scroll_left = target;
                actions.push(CarouselAction::SnapTo(target));
            }
        }

        if let GesturePhase::Closing { started } = self.phase {
            if now >= started + self.config.close_delay {
                self.phase = GesturePhase::Closed;
                self.snap_deadline = None;
                if let Some(callback) = self.on_close.take() {
                    callback();
                }
                actions.push(CarouselAction::Dismissed);
            }
        }

        actions
    }
}
