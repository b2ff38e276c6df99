// Rust guideline compliant 2026-10-14

//! Property-based tests for gallery filtering.

use folio_core::{visible_projects, CategoryFilter, Mode, Project};
use proptest::prelude::*;

fn arb_mode() -> impl Strategy<Value = Mode> {
    prop_oneof![Just(Mode::Std), Just(Mode::Lab)]
}

fn arb_category() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Brand".to_string()),
        Just("Poster".to_string()),
        Just("Code".to_string()),
    ]
}

fn arb_project() -> impl Strategy<Value = Project> {
    (
        arb_mode(),
        arb_category(),
        prop::string::string_regex("[a-zA-Z ]{1,20}").unwrap(),
        prop::option::of(prop::string::string_regex("[a-zA-Z ]{0,20}").unwrap()),
        prop::option::of(prop::string::string_regex("20[0-2][0-9]").unwrap()),
    )
        .prop_map(|(mode, category, title, subtitle, date)| {
            let mut project = Project::new(String::new(), mode, category, title);
            project.subtitle = subtitle;
            project.date = date;
            project
        })
}

fn arb_projects() -> impl Strategy<Value = Vec<Project>> {
    prop::collection::vec(arb_project(), 0..40).prop_map(|mut projects| {
        for (i, project) in projects.iter_mut().enumerate() {
            project.id = format!("p{i}");
        }
        projects
    })
}

fn arb_filter() -> impl Strategy<Value = CategoryFilter> {
    prop_oneof![
        Just(CategoryFilter::All),
        arb_category().prop_map(CategoryFilter::Named),
    ]
}

proptest! {
    /// Every visible project passes both the mode and category predicates.
    #[test]
    fn prop_results_match_predicates(
        projects in arb_projects(),
        mode in arb_mode(),
        category in arb_filter(),
        search in prop::string::string_regex("[a-z]{0,3}").unwrap(),
    ) {
        for project in visible_projects(&projects, mode, &category, &search) {
            prop_assert_eq!(project.mode, mode);
            prop_assert!(category.matches(&project.category));
        }
    }

    /// An empty search term keeps every project that passes mode and category.
    #[test]
    fn prop_empty_search_is_no_search(
        projects in arb_projects(),
        mode in arb_mode(),
        category in arb_filter(),
    ) {
        let visible = visible_projects(&projects, mode, &category, "");
        let expected = projects
            .iter()
            .filter(|p| p.mode == mode && category.matches(&p.category))
            .count();
        prop_assert_eq!(visible.len(), expected);
    }

    /// Output is sorted by date descending; equal dates keep input order.
    #[test]
    fn prop_sorted_and_stable(projects in arb_projects(), mode in arb_mode()) {
        let visible = visible_projects(&projects, mode, &CategoryFilter::All, "");
        let position = |id: &str| projects.iter().position(|p| p.id == id).unwrap();
        for pair in visible.windows(2) {
            prop_assert!(pair[0].date_key() >= pair[1].date_key());
            if pair[0].date_key() == pair[1].date_key() {
                prop_assert!(position(&pair[0].id) < position(&pair[1].id));
            }
        }
    }

    /// Filtering never invents or duplicates projects.
    #[test]
    fn prop_subset(projects in arb_projects(), mode in arb_mode(), category in arb_filter()) {
        let visible = visible_projects(&projects, mode, &category, "a");
        let mut seen = std::collections::HashSet::new();
        for project in &visible {
            prop_assert!(seen.insert(project.id.clone()));
            prop_assert!(projects.iter().any(|p| p.id == project.id));
        }
    }
}
