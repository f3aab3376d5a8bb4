//! Table view model: joined products + one selection state.

use shelfview_catalog::{DisplayProduct, Relations, join};
use shelfview_core::DomainResult;

use crate::filter::filter;
use crate::selection::{SelectionAction, SelectionState};
use crate::sort::{SortColumn, SortIcon, SortState, sort};

/// Shown instead of the table when no product survives the filters.
pub const NO_MATCH_MESSAGE: &str = "No products matching selected criteria";

/// Filter then sort: the rows a presentation should display for `state`.
pub fn visible_products(products: &[DisplayProduct], state: &SelectionState) -> Vec<DisplayProduct> {
    sort(&filter(products, state), state.sort())
}

/// Snapshot handed to a presentation after each action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub rows: Vec<DisplayProduct>,
    pub sort: Option<SortState>,
}

impl TableView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn icon(&self, column: SortColumn) -> SortIcon {
        SortIcon::for_column(self.sort, column)
    }

    /// Header columns paired with their current icon.
    pub fn headers(&self) -> [(SortColumn, SortIcon); 4] {
        SortColumn::ALL.map(|column| (column, self.icon(column)))
    }
}

/// The product table of one session.
///
/// Products are joined once at construction and never change afterwards; only the
/// selection moves.
#[derive(Debug, Clone)]
pub struct ProductTable {
    products: Vec<DisplayProduct>,
    owners: Vec<String>,
    category_titles: Vec<String>,
    state: SelectionState,
}

impl ProductTable {
    /// Join `relations` and start with an empty selection.
    pub fn new(relations: &Relations) -> DomainResult<Self> {
        let products = join(relations)?;

        tracing::debug!(products = products.len(), "product table ready");

        Ok(Self {
            products,
            owners: relations.owner_names(),
            category_titles: relations.category_titles(),
            state: SelectionState::default(),
        })
    }

    /// All joined products, in product relation order.
    pub fn products(&self) -> &[DisplayProduct] {
        &self.products
    }

    /// Owner names for the owner tabs, in user relation order.
    pub fn owners(&self) -> &[String] {
        &self.owners
    }

    /// Category titles for the category buttons, in category relation order.
    pub fn category_titles(&self) -> &[String] {
        &self.category_titles
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn dispatch(&mut self, action: SelectionAction) {
        self.state.apply(action);
    }

    pub fn rows(&self) -> Vec<DisplayProduct> {
        visible_products(&self.products, &self.state)
    }

    pub fn view(&self) -> TableView {
        TableView {
            rows: self.rows(),
            sort: self.state.sort(),
        }
    }
}
