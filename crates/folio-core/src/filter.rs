// Rust guideline compliant 2026-10-12

//! Gallery filtering and ordering.
//!
//! `visible_projects` is a pure function of the project list and the three
//! gallery inputs (mode, category, search term). It is cheap enough to be
//! recomputed on every state change, so nothing here caches.

use crate::{Mode, Project};
use rayon::prelude::*;
use std::fmt;

/// Sentinel category label that disables category filtering.
pub const ALL_PROJECTS: &str = "All Project";

const PARALLEL_THRESHOLD: usize = 1_000;

/// Category selection in the gallery filter bar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// No category restriction ("All Project").
    #[default]
    All,
    /// Exact category name.
    Named(String),
}

impl CategoryFilter {
    /// Builds a filter from a filter-bar label, mapping the sentinel to `All`.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_PROJECTS {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(label.to_string())
        }
    }

    /// Returns true if the project's category passes this filter.
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => name == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL_PROJECTS),
            CategoryFilter::Named(name) => f.write_str(name),
        }
    }
}

/// Gallery state that drives the visible list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryQuery {
    /// Active mode.
    pub mode: Mode,
    /// Active category.
    pub category: CategoryFilter,
    /// Free-text search against title and subtitle.
    pub search: String,
}

impl GalleryQuery {
    /// Switches mode and resets the category to "All Project".
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.category = CategoryFilter::All;
    }

    /// Evaluates the query against a project list.
    #[must_use]
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        visible_projects(projects, self.mode, &self.category, &self.search)
    }
}

/// Computes the visible projects for the gallery.
///
/// Keeps projects whose mode equals `mode`, whose category passes
/// `category`, and whose title or subtitle contains `search`
/// case-insensitively (an empty term matches everything). Results are
/// ordered by date descending using string comparison, missing dates
/// sorting as `"0"`. Ties keep their input order.
pub fn visible_projects<'a>(
    projects: &'a [Project],
    mode: Mode,
    category: &CategoryFilter,
    search: &str,
) -> Vec<&'a Project> {
    let needle = search.to_lowercase();

    let predicate = |p: &&Project| {
        p.mode == mode && category.matches(&p.category) && matches_search(p, &needle)
    };

    let mut visible: Vec<&Project> = if projects.len() >= PARALLEL_THRESHOLD {
        projects.par_iter().filter(predicate).collect()
    } else {
        projects.iter().filter(predicate).collect()
    };

    // sort_by is stable
    visible.sort_by(|a, b| b.date_key().cmp(a.date_key()));
    visible
}

fn matches_search(project: &Project, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    if project.title.to_lowercase().contains(needle) {
        return true;
    }
    project
        .subtitle
        .as_deref()
        .is_some_and(|sub| sub.to_lowercase().contains(needle))
}
