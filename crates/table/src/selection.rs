//! Selection state: the filter and sort choices made in the UI, and the actions
//! that change them.

use core::str::FromStr;

use shelfview_core::DomainError;

use crate::sort::{SortColumn, SortDirection, SortState};

/// A user-triggered change to the [`SelectionState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    /// Show only products owned by this user; `None` shows all owners.
    SelectOwner(Option<String>),
    /// Add the category title if absent, remove it if present.
    ToggleCategory(String),
    ClearCategories,
    SetQuery(String),
    ClearQuery,
    /// A click on a column header.
    HandleSort(SortColumn),
    /// Clear owner, categories and query. The sort is kept.
    ResetAll,
}

/// Current filter and sort choices.
///
/// Category titles are unique and the query never starts with whitespace; only the
/// actions below change the fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_owner: Option<String>,
    selected_categories: Vec<String>,
    query: String,
    sort: Option<SortState>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_owner(&self) -> Option<&str> {
        self.selected_owner.as_deref()
    }

    /// Selected category titles, in the order they were selected.
    pub fn selected_categories(&self) -> &[String] {
        &self.selected_categories
    }

    /// Raw query text as typed (leading whitespace already stripped).
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    pub fn sort_column(&self) -> Option<SortColumn> {
        self.sort.map(|s| s.column)
    }

    pub fn sort_direction(&self) -> Option<SortDirection> {
        self.sort.map(|s| s.direction)
    }

    pub fn is_owner_selected(&self, name: &str) -> bool {
        self.selected_owner.as_deref() == Some(name)
    }

    pub fn is_category_selected(&self, title: &str) -> bool {
        self.selected_categories.iter().any(|t| t == title)
    }

    /// Whether any owner, category or query filter is active.
    pub fn has_active_filters(&self) -> bool {
        self.selected_owner.is_some() || !self.selected_categories.is_empty() || !self.query.is_empty()
    }

    /// Apply a single action.
    pub fn apply(&mut self, action: SelectionAction) {
        tracing::trace!(?action, "applying selection action");

        match action {
            SelectionAction::SelectOwner(owner) => self.select_owner(owner),
            SelectionAction::ToggleCategory(title) => self.toggle_category(title),
            SelectionAction::ClearCategories => self.clear_categories(),
            SelectionAction::SetQuery(text) => self.set_query(text),
            SelectionAction::ClearQuery => self.clear_query(),
            SelectionAction::HandleSort(column) => self.handle_sort(column),
            SelectionAction::ResetAll => self.reset_all(),
        }
    }

    pub fn select_owner(&mut self, owner: Option<String>) {
        self.selected_owner = owner;
    }

    pub fn toggle_category(&mut self, title: impl Into<String>) {
        let title = title.into();
        if let Some(pos) = self.selected_categories.iter().position(|t| *t == title) {
            self.selected_categories.remove(pos);
        } else {
            self.selected_categories.push(title);
        }
    }

    pub fn clear_categories(&mut self) {
        self.selected_categories.clear();
    }

    /// Replace the query. Leading whitespace is dropped as the field is typed into;
    /// trailing whitespace is kept and only ignored when filtering.
    pub fn set_query(&mut self, text: impl AsRef<str>) {
        self.query = text.as_ref().trim_start().to_string();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn handle_sort(&mut self, column: SortColumn) {
        self.sort = SortState::toggle(self.sort, column);
    }

    pub fn reset_all(&mut self) {
        self.selected_owner = None;
        self.selected_categories.clear();
        self.query.clear();
    }
}

/// Textual action grammar: `owner[=NAME]`, `category=TITLE`, `categories`,
/// `query[=TEXT]`, `sort=COLUMN`, `reset`.
impl FromStr for SelectionAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = match s.split_once('=') {
            Some((key, value)) => (key.trim(), Some(value)),
            None => (s.trim(), None),
        };

        let required = |what: &str| {
            value
                .filter(|v| !v.trim().is_empty())
                .map(|v| v.trim().to_string())
                .ok_or_else(|| DomainError::validation(format!("`{key}` needs a {what}")))
        };

        match key {
            "owner" => Ok(SelectionAction::SelectOwner(
                value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string),
            )),
            "category" => Ok(SelectionAction::ToggleCategory(required("category title")?)),
            "categories" => Ok(SelectionAction::ClearCategories),
            "query" => match value {
                Some(text) if !text.is_empty() => Ok(SelectionAction::SetQuery(text.to_string())),
                _ => Ok(SelectionAction::ClearQuery),
            },
            "sort" => Ok(SelectionAction::HandleSort(required("column")?.parse()?)),
            "reset" => Ok(SelectionAction::ResetAll),
            other => Err(DomainError::validation(format!("unknown action: {other:?}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty() {
        let state = SelectionState::new();
        assert_eq!(state.selected_owner(), None);
        assert!(state.selected_categories().is_empty());
        assert_eq!(state.query(), "");
        assert_eq!(state.sort(), None);
        assert!(!state.has_active_filters());
    }

    #[test]
    fn toggle_category_adds_then_removes_keeping_order() {
        let mut state = SelectionState::new();
        state.apply(SelectionAction::ToggleCategory("Dairy".to_string()));
        state.apply(SelectionAction::ToggleCategory("Bakery".to_string()));
        state.apply(SelectionAction::ToggleCategory("Fruits".to_string()));
        assert_eq!(state.selected_categories(), ["Dairy", "Bakery", "Fruits"]);

        state.apply(SelectionAction::ToggleCategory("Bakery".to_string()));
        assert_eq!(state.selected_categories(), ["Dairy", "Fruits"]);
        assert!(state.is_category_selected("Dairy"));
        assert!(!state.is_category_selected("Bakery"));
    }

    #[test]
    fn set_query_strips_leading_whitespace_only() {
        let mut state = SelectionState::new();
        state.apply(SelectionAction::SetQuery("  ice cr ".to_string()));
        assert_eq!(state.query(), "ice cr ");

        state.apply(SelectionAction::ClearQuery);
        assert_eq!(state.query(), "");
    }

    #[test]
    fn select_owner_and_show_all() {
        let mut state = SelectionState::new();
        state.apply(SelectionAction::SelectOwner(Some("Anna".to_string())));
        assert!(state.is_owner_selected("Anna"));
        assert!(!state.is_owner_selected("Max"));

        state.apply(SelectionAction::SelectOwner(None));
        assert_eq!(state.selected_owner(), None);
    }

    #[test]
    fn handle_sort_follows_tri_state_cycle() {
        let mut state = SelectionState::new();
        let mut seen = Vec::new();
        for _ in 0..3 {
            state.apply(SelectionAction::HandleSort(SortColumn::Id));
            seen.push((state.sort_column(), state.sort_direction()));
        }
        assert_eq!(
            seen,
            vec![
                (Some(SortColumn::Id), Some(SortDirection::Asc)),
                (Some(SortColumn::Id), Some(SortDirection::Desc)),
                (None, None),
            ]
        );
    }

    #[test]
    fn handle_sort_on_other_column_resets_to_ascending() {
        let mut state = SelectionState::new();
        state.handle_sort(SortColumn::Product);
        state.handle_sort(SortColumn::Product);
        state.handle_sort(SortColumn::User);
        assert_eq!(state.sort(), Some(SortState::asc(SortColumn::User)));
    }

    #[test]
    fn reset_all_clears_filters_but_keeps_sort() {
        let mut state = SelectionState::new();
        state.select_owner(Some("Anna".to_string()));
        state.toggle_category("Dairy");
        state.set_query("milk");
        state.handle_sort(SortColumn::Category);
        assert!(state.has_active_filters());

        state.apply(SelectionAction::ResetAll);

        assert!(!state.has_active_filters());
        assert_eq!(state.sort(), Some(SortState::asc(SortColumn::Category)));
    }

    #[test]
    fn parses_action_grammar() {
        let parse = |s: &str| s.parse::<SelectionAction>().unwrap();

        assert_eq!(parse("owner=Anna"), SelectionAction::SelectOwner(Some("Anna".to_string())));
        assert_eq!(parse("owner"), SelectionAction::SelectOwner(None));
        assert_eq!(parse("owner="), SelectionAction::SelectOwner(None));
        assert_eq!(parse("category=Ice cream"), SelectionAction::ToggleCategory("Ice cream".to_string()));
        assert_eq!(parse("categories"), SelectionAction::ClearCategories);
        assert_eq!(parse("query= milk"), SelectionAction::SetQuery(" milk".to_string()));
        assert_eq!(parse("query"), SelectionAction::ClearQuery);
        assert_eq!(parse("sort=product"), SelectionAction::HandleSort(SortColumn::Product));
        assert_eq!(parse("reset"), SelectionAction::ResetAll);
    }

    #[test]
    fn rejects_malformed_actions() {
        for bad in ["category", "category=  ", "sort=Price", "sort", "paginate=2"] {
            match bad.parse::<SelectionAction>() {
                Err(DomainError::Validation(_)) => {}
                other => panic!("Expected Validation error for {bad:?}, got {other:?}"),
            }
        }
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_action() -> impl Strategy<Value = SelectionAction> {
            let title = prop_oneof![Just("Dairy"), Just("Bakery"), Just("Fruits")].prop_map(str::to_string);
            prop_oneof![
                proptest::option::of(prop_oneof![Just("Anna"), Just("Max")].prop_map(str::to_string))
                    .prop_map(SelectionAction::SelectOwner),
                title.prop_map(SelectionAction::ToggleCategory),
                Just(SelectionAction::ClearCategories),
                "[ a-z]{0,6}".prop_map(SelectionAction::SetQuery),
                Just(SelectionAction::ClearQuery),
                proptest::sample::select(SortColumn::ALL.to_vec()).prop_map(SelectionAction::HandleSort),
                Just(SelectionAction::ResetAll),
            ]
        }

        proptest! {
            /// Property: no action sequence yields a repeated title or a query with
            /// leading whitespace.
            #[test]
            fn actions_preserve_state_invariants(
                actions in proptest::collection::vec(arb_action(), 0..40)
            ) {
                let mut state = SelectionState::new();
                for action in actions {
                    state.apply(action);

                    let titles = state.selected_categories();
                    for (i, title) in titles.iter().enumerate() {
                        prop_assert!(!titles[i + 1..].contains(title));
                    }
                    prop_assert_eq!(state.query(), state.query().trim_start());
                }
            }

            /// Property: toggling the same title twice restores the selection.
            #[test]
            fn toggle_twice_restores_membership(
                actions in proptest::collection::vec(arb_action(), 0..20),
                title in prop_oneof![Just("Dairy"), Just("Bakery"), Just("Fruits")],
            ) {
                let mut state = SelectionState::new();
                for action in actions {
                    state.apply(action);
                }
                let before = state.clone();

                state.toggle_category(title);
                prop_assert_ne!(state.is_category_selected(title), before.is_category_selected(title));
                state.toggle_category(title);
                prop_assert!(state.is_category_selected(title) == before.is_category_selected(title));
                prop_assert_eq!(state.query(), before.query());
            }
        }
    }
}
