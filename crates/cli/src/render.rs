//! Plain-text rendering of the filter panel and the product table.

use std::fmt::Write;

use shelfview_catalog::{DisplayProduct, Sex};
use shelfview_table::{NO_MATCH_MESSAGE, ProductTable, SortColumn, SortIcon, TableView};

fn icon_glyph(icon: SortIcon) -> &'static str {
    match icon {
        SortIcon::Unsorted => "↕",
        SortIcon::Ascending => "▲",
        SortIcon::Descending => "▼",
    }
}

/// Active choices are wrapped in brackets, as the highlighted tab/button would be.
fn choice(label: &str, active: bool) -> String {
    if active { format!("[{label}]") } else { label.to_string() }
}

fn cell(product: &DisplayProduct, column: SortColumn) -> String {
    match column {
        SortColumn::Id => product.id.to_string(),
        SortColumn::Product => product.name.clone(),
        SortColumn::Category => product.category.to_string(),
        SortColumn::User => match product.owner_sex {
            Sex::Male => format!("{} (m)", product.owner_name),
            Sex::Female => format!("{} (f)", product.owner_name),
        },
    }
}

/// Filter panel: owner tabs, search field and category buttons.
pub fn filter_panel(table: &ProductTable) -> String {
    let state = table.state();

    let owners = std::iter::once(choice("All", state.selected_owner().is_none()))
        .chain(table.owners().iter().map(|o| choice(o, state.is_owner_selected(o))))
        .collect::<Vec<_>>()
        .join(" ");

    let categories = std::iter::once(choice("All", state.selected_categories().is_empty()))
        .chain(
            table
                .category_titles()
                .iter()
                .map(|t| choice(t, state.is_category_selected(t))),
        )
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = String::new();
    let _ = writeln!(out, "Owners:     {owners}");
    let _ = writeln!(out, "Search:     {:?}", state.query());
    let _ = writeln!(out, "Categories: {categories}");
    out
}

/// The table body, or the no-match message when there are no rows.
pub fn table(view: &TableView) -> String {
    if view.is_empty() {
        return format!("{NO_MATCH_MESSAGE}\n");
    }

    let headers: Vec<String> = view
        .headers()
        .iter()
        .map(|(column, icon)| format!("{} {}", column.label(), icon_glyph(*icon)))
        .collect();

    let rows: Vec<Vec<String>> = view
        .rows
        .iter()
        .map(|p| SortColumn::ALL.iter().map(|c| cell(p, *c)).collect())
        .collect();

    let widths: Vec<usize> = (0..SortColumn::ALL.len())
        .map(|i| {
            rows.iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(headers[i].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{c:<width$}", width = *w))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", line(&headers));
    let _ = writeln!(
        out,
        "{}",
        widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().join("-+-")
    );
    for row in &rows {
        let _ = writeln!(out, "{}", line(row));
    }
    out
}

/// Whole screen: title, filter panel, table.
pub fn screen(product_table: &ProductTable) -> String {
    let mut out = String::from("Product Categories\n\n");
    out.push_str(&filter_panel(product_table));
    out.push('\n');
    out.push_str(&table(&product_table.view()));
    out
}
