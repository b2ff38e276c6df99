// Rust guideline compliant 2026-10-13

//! Splash screen timing.

use std::time::{Duration, Instant};

/// How long the logo stays fully visible.
pub const SHOW_DURATION: Duration = Duration::from_millis(2200);
/// When the splash is gone and the gallery takes over.
pub const TOTAL_DURATION: Duration = Duration::from_millis(3000);

/// Phase of the splash sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroPhase {
    /// Logo visible.
    Showing,
    /// Fade-out running.
    Exiting,
    /// Splash removed.
    Finished,
}

/// Splash sequence anchored at the moment it was mounted.
#[derive(Debug, Clone, Copy)]
pub struct IntroSequence {
    started: Instant,
}

impl IntroSequence {
    /// Starts the sequence at `started`.
    pub fn start(started: Instant) -> Self {
        Self { started }
    }

    /// Returns the phase at `now`.
    #[must_use]
    pub fn phase(&self, now: Instant) -> IntroPhase {
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed < SHOW_DURATION {
            IntroPhase::Showing
        } else if elapsed < TOTAL_DURATION {
            IntroPhase::Exiting
        } else {
            IntroPhase::Finished
        }
    }

    /// Returns when the next phase change happens, or `None` once finished.
    #[must_use]
    pub fn next_transition(&self, now: Instant) -> Option<Instant> {
        match self.phase(now) {
            IntroPhase::Showing => Some(self.started + SHOW_DURATION),
            IntroPhase::Exiting => Some(self.started + TOTAL_DURATION),
            IntroPhase::Finished => None,
        }
    }
}
