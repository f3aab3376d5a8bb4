//! Sort engine: column comparators and the tri-state header toggle.

use core::cmp::Ordering;
use core::str::FromStr;

use shelfview_catalog::DisplayProduct;
use shelfview_core::DomainError;

use crate::collate::locale_cmp;

/// Sortable table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Id,
    Product,
    Category,
    User,
}

impl SortColumn {
    /// All columns, in header order.
    pub const ALL: [SortColumn; 4] = [
        SortColumn::Id,
        SortColumn::Product,
        SortColumn::Category,
        SortColumn::User,
    ];

    /// Header label.
    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::Id => "ID",
            SortColumn::Product => "Product",
            SortColumn::Category => "Category",
            SortColumn::User => "User",
        }
    }

    /// Ascending comparator for this column.
    pub fn compare(&self, a: &DisplayProduct, b: &DisplayProduct) -> Ordering {
        match self {
            SortColumn::Id => a.id.cmp(&b.id),
            SortColumn::Product => locale_cmp(&a.name, &b.name),
            SortColumn::Category => locale_cmp(&a.category.to_string(), &b.category.to_string()),
            SortColumn::User => locale_cmp(&a.owner_name, &b.owner_name),
        }
    }
}

impl core::fmt::Display for SortColumn {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortColumn {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::validation(format!("unknown sort column: {wanted:?}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Active sort: a column together with its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortState {
    pub fn asc(column: SortColumn) -> Self {
        Self {
            column,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(column: SortColumn) -> Self {
        Self {
            column,
            direction: SortDirection::Desc,
        }
    }

    /// Next state after a click on the header of `clicked`.
    ///
    /// Same column cycles unset → asc → desc → unset; another column starts at asc.
    pub fn toggle(current: Option<SortState>, clicked: SortColumn) -> Option<SortState> {
        match current {
            Some(state) if state.column == clicked => match state.direction {
                SortDirection::Asc => Some(Self::desc(clicked)),
                SortDirection::Desc => None,
            },
            _ => Some(Self::asc(clicked)),
        }
    }
}

/// Header icon for a column given the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIcon {
    Unsorted,
    Ascending,
    Descending,
}

impl SortIcon {
    pub fn for_column(sort: Option<SortState>, column: SortColumn) -> Self {
        match sort {
            Some(SortState {
                column: active,
                direction: SortDirection::Asc,
            }) if active == column => SortIcon::Ascending,
            Some(SortState {
                column: active,
                direction: SortDirection::Desc,
            }) if active == column => SortIcon::Descending,
            _ => SortIcon::Unsorted,
        }
    }
}

/// Sort products by the active column.
///
/// With no active sort the input order is kept. Ascending sorting is stable; descending
/// is the exact reverse of the ascending result, so ties come out reversed too.
pub fn sort(products: &[DisplayProduct], sort: Option<SortState>) -> Vec<DisplayProduct> {
    let mut sorted = products.to_vec();

    if let Some(state) = sort {
        sorted.sort_by(|a, b| state.column.compare(a, b));
        if state.direction == SortDirection::Desc {
            sorted.reverse();
        }
    }

    sorted
}
