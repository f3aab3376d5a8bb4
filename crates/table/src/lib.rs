//! Product table engine: filter pipeline, sort engine and selection state.
//!
//! Everything here is synchronous and pure apart from [`SelectionState`], which is
//! mutated only through [`SelectionAction`]s. Visible rows are recomputed in full from
//! the joined products and the current selection.

pub mod collate;
pub mod filter;
pub mod selection;
pub mod sort;
pub mod table;

#[cfg(test)]
pub(crate) mod test_support;

pub use filter::{ProductFilter, filter};
pub use selection::{SelectionAction, SelectionState};
pub use sort::{SortColumn, SortDirection, SortIcon, SortState, sort};
pub use table::{NO_MATCH_MESSAGE, ProductTable, TableView, visible_products};
