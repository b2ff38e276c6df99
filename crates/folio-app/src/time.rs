// Rust guideline compliant 2026-10-15

//! Clock helpers.

use chrono::{Datelike, Utc};

/// Returns the current Unix timestamp in seconds.
#[must_use]
pub fn unix_timestamp() -> i64 {
    Utc::now().timestamp()
}

/// Returns the current calendar year, used as the default project date.
#[must_use]
pub fn current_year() -> String {
    Utc::now().year().to_string()
}
