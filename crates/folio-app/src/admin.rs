// Rust guideline compliant 2026-10-17

//! Admin list filtering and multi-select.

use folio_core::{CategoryFilter, CategorySet, Mode, Project};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Mode selection in the admin filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModeFilter {
    /// Both modes.
    #[default]
    All,
    /// A single mode.
    Only(Mode),
}

impl FromStr for ModeFilter {
    type Err = folio_core::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("all") {
            return Ok(ModeFilter::All);
        }
        value.parse().map(ModeFilter::Only)
    }
}

impl fmt::Display for ModeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeFilter::All => f.write_str("all"),
            ModeFilter::Only(mode) => write!(f, "{mode}"),
        }
    }
}

/// Filter state of the admin project table.
///
/// Records stored without a mode deserialize as `Mode::Std` and are
/// therefore listed under Std.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdminFilter {
    /// Mode selection.
    pub mode: ModeFilter,
    /// Category selection.
    pub category: CategoryFilter,
}

impl AdminFilter {
    /// Changes the mode selection and clears the category.
    pub fn set_mode(&mut self, mode: ModeFilter) {
        self.mode = mode;
        self.category = CategoryFilter::All;
    }

    /// Returns true if the project passes the filter.
    #[must_use]
    pub fn matches(&self, project: &Project) -> bool {
        let mode_ok = match self.mode {
            ModeFilter::All => true,
            ModeFilter::Only(mode) => project.mode == mode,
        };
        mode_ok && self.category.matches(&project.category)
    }

    /// Returns the matching projects in collection order.
    #[must_use]
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }

    /// Returns the category options for the current mode selection.
    #[must_use]
    pub fn categories(&self, set: &CategorySet) -> Vec<String> {
        match self.mode {
            ModeFilter::All => set.all(),
            ModeFilter::Only(mode) => set.list(mode).to_vec(),
        }
    }
}

/// Checked rows in the admin table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles one row. Returns true if it is now selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    /// Selects exactly the visible rows.
    pub fn select_all<'a, I>(&mut self, visible: I)
    where
        I: IntoIterator<Item = &'a Project>,
    {
        self.ids = visible.into_iter().map(|p| p.id.clone()).collect();
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Returns true if `id` is selected.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Returns true if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the number of selected rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if every visible row is selected and there is at least one.
    #[must_use]
    pub fn all_selected(&self, visible: &[&Project]) -> bool {
        !visible.is_empty() && visible.iter().all(|p| self.ids.contains(&p.id))
    }

    /// Returns the selected IDs in sorted order.
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, mode: Mode, category: &str) -> Project {
        Project::new(id.to_string(), mode, category.to_string(), id.to_string())
    }

    #[test]
    fn test_mode_filter_parse() {
        assert_eq!("all".parse::<ModeFilter>().unwrap(), ModeFilter::All);
        assert_eq!("zine".parse::<ModeFilter>().unwrap(), ModeFilter::Only(Mode::Lab));
        assert!("other".parse::<ModeFilter>().is_err());
    }

    #[test]
    fn test_filter_and_categories() {
        let projects = vec![
            project("a", Mode::Std, "Brand"),
            project("b", Mode::Lab, "Code"),
            project("c", Mode::Std, "Poster"),
        ];
        let mut filter = AdminFilter::default();
        assert_eq!(filter.apply(&projects).len(), 3);

        filter.set_mode(ModeFilter::Only(Mode::Std));
        filter.category = CategoryFilter::Named("Poster".to_string());
        let ids: Vec<&str> = filter.apply(&projects).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["c"]);

        filter.set_mode(ModeFilter::Only(Mode::Lab));
        assert_eq!(filter.category, CategoryFilter::All);
        assert_eq!(
            filter.categories(&CategorySet::with_defaults()),
            vec!["Interaction", "Code", "Experiment"]
        );
    }

    #[test]
    fn test_selection() {
        let projects = vec![project("a", Mode::Std, "Brand"), project("b", Mode::Std, "Brand")];
        let visible: Vec<&Project> = projects.iter().collect();
        let mut selection = Selection::new();

        assert!(selection.toggle("a"));
        assert!(!selection.all_selected(&visible));
        selection.select_all(visible.iter().copied());
        assert!(selection.all_selected(&visible));
        assert!(!selection.toggle("b"));
        assert_eq!(selection.ids(), vec!["a"]);
        selection.clear();
        assert!(selection.is_empty());
        assert!(!selection.all_selected(&[]));
    }
}
