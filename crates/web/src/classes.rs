//! CSS classes (Bulma + Font Awesome) for the filter panel and the table.

use shelfview_catalog::Sex;
use shelfview_table::SortIcon;

/// Owner tab (`All` or a user name).
pub fn owner_tab(active: bool) -> &'static str {
    if active { "is-active" } else { "" }
}

/// The `All` categories button is solid while no category is selected.
pub fn all_categories_button(any_selected: bool) -> &'static str {
    if any_selected {
        "button is-success mr-6 is-outlined"
    } else {
        "button is-success mr-6"
    }
}

pub fn category_button(selected: bool) -> &'static str {
    if selected { "button mr-2 my-1 is-info" } else { "button mr-2 my-1" }
}

/// Header sort icon.
pub fn sort_icon(icon: SortIcon) -> &'static str {
    match icon {
        SortIcon::Unsorted => "fas fa-sort",
        SortIcon::Ascending => "fas fa-sort-up",
        SortIcon::Descending => "fas fa-sort-down",
    }
}

/// Owner cell colour.
pub fn owner_cell(sex: Sex) -> &'static str {
    match sex {
        Sex::Male => "has-text-link",
        Sex::Female => "has-text-danger",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfview_table::{SortColumn, SortState};

    #[test]
    fn sort_icons_follow_the_header_cycle() {
        let mut state = None;
        let mut classes = Vec::new();
        for _ in 0..3 {
            state = SortState::toggle(state, SortColumn::Id);
            classes.push(sort_icon(SortIcon::for_column(state, SortColumn::Id)));
        }
        assert_eq!(classes, vec!["fas fa-sort-up", "fas fa-sort-down", "fas fa-sort"]);
    }

    #[test]
    fn owner_colour_depends_on_sex() {
        assert_eq!(owner_cell(Sex::Male), "has-text-link");
        assert_eq!(owner_cell(Sex::Female), "has-text-danger");
    }

    #[test]
    fn buttons_reflect_selection() {
        assert_eq!(owner_tab(true), "is-active");
        assert_eq!(owner_tab(false), "");
        assert!(all_categories_button(true).ends_with("is-outlined"));
        assert!(!all_categories_button(false).contains("is-outlined"));
        assert!(category_button(true).contains("is-info"));
    }
}
