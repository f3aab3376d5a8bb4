//! Leptos application: filter panel + sortable product table.

use leptos::*;

use shelfview_catalog::Relations;
use shelfview_table::{NO_MATCH_MESSAGE, ProductTable, SelectionAction};

use crate::classes;

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    match Relations::seed().and_then(|relations| ProductTable::new(&relations)) {
        Ok(table) => view! { <ProductPage table=table/> }.into_view(),
        Err(e) => view! {
            <p class="notification is-danger">{format!("Catalog data is malformed: {e}")}</p>
        }
        .into_view(),
    }
}

/// Filter panel and table over one session's [`ProductTable`].
#[component]
fn ProductPage(table: ProductTable) -> impl IntoView {
    let owners = table.owners().to_vec();
    let titles = table.category_titles().to_vec();
    let table = create_rw_signal(table);
    let dispatch = move |action: SelectionAction| table.update(|t| t.dispatch(action));

    view! {
        <div class="section">
            <div class="container">
                <h1 class="title">"Product Categories"</h1>

                <div class="block">
                    <nav class="panel">
                        <p class="panel-heading">"Filters"</p>

                        <p class="panel-tabs has-text-weight-bold">
                            <a
                                href="#/"
                                class=move || table.with(|t| classes::owner_tab(t.state().selected_owner().is_none()))
                                on:click=move |_| dispatch(SelectionAction::SelectOwner(None))
                            >
                                "All"
                            </a>

                            {owners
                                .into_iter()
                                .map(|name| {
                                    let label = name.clone();
                                    let for_class = name.clone();
                                    view! {
                                        <a
                                            href="#/"
                                            class=move || table.with(|t| classes::owner_tab(t.state().is_owner_selected(&for_class)))
                                            on:click=move |_| dispatch(SelectionAction::SelectOwner(Some(name.clone())))
                                        >
                                            {label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </p>

                        <div class="panel-block">
                            <p class="control has-icons-left has-icons-right">
                                <input
                                    type="text"
                                    class="input"
                                    placeholder="Search"
                                    prop:value=move || table.with(|t| t.state().query().to_string())
                                    on:input=move |ev| dispatch(SelectionAction::SetQuery(event_target_value(&ev)))
                                />

                                <span class="icon is-left">
                                    <i class="fas fa-search" aria-hidden="true"></i>
                                </span>

                                <span class="icon is-right">
                                    {move || {
                                        let has_query = table.with(|t| !t.state().query().is_empty());
                                        has_query.then(|| view! {
                                            <button
                                                type="button"
                                                class="delete"
                                                on:click=move |_| dispatch(SelectionAction::ClearQuery)
                                            ></button>
                                        })
                                    }}
                                </span>
                            </p>
                        </div>

                        <div class="panel-block is-flex-wrap-wrap">
                            <a
                                href="#/"
                                class=move || table.with(|t| classes::all_categories_button(!t.state().selected_categories().is_empty()))
                                on:click=move |_| dispatch(SelectionAction::ClearCategories)
                            >
                                "All"
                            </a>

                            {titles
                                .into_iter()
                                .map(|title| {
                                    let label = title.clone();
                                    let for_class = title.clone();
                                    view! {
                                        <a
                                            href="#/"
                                            class=move || table.with(|t| classes::category_button(t.state().is_category_selected(&for_class)))
                                            on:click=move |_| dispatch(SelectionAction::ToggleCategory(title.clone()))
                                        >
                                            {label}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="panel-block">
                            <a
                                href="#/"
                                class="button is-link is-outlined is-fullwidth"
                                on:click=move |_| dispatch(SelectionAction::ResetAll)
                            >
                                "Reset all filters"
                            </a>
                        </div>
                    </nav>
                </div>

                <div class="box table-container">
                    {move || {
                        let view_model = table.with(|t| t.view());
                        if view_model.is_empty() {
                            view! { <p>{NO_MATCH_MESSAGE}</p> }.into_view()
                        } else {
                            let headers = view_model.headers();
                            view! {
                                <table class="table is-striped is-narrow is-fullwidth">
                                    <thead>
                                        <tr>
                                            {headers
                                                .into_iter()
                                                .map(|(column, icon)| view! {
                                                    <th on:click=move |_| dispatch(SelectionAction::HandleSort(column))>
                                                        <span class="is-flex is-flex-wrap-nowrap">
                                                            {column.label()}
                                                            <a href="#/">
                                                                <span class="icon">
                                                                    <i class=classes::sort_icon(icon)></i>
                                                                </span>
                                                            </a>
                                                        </span>
                                                    </th>
                                                })
                                                .collect_view()}
                                        </tr>
                                    </thead>

                                    <tbody>
                                        {view_model
                                            .rows
                                            .into_iter()
                                            .map(|product| view! {
                                                <tr>
                                                    <td class="has-text-weight-bold">{product.id.get()}</td>
                                                    <td>{product.name}</td>
                                                    <td>{product.category.to_string()}</td>
                                                    <td class=classes::owner_cell(product.owner_sex)>{product.owner_name}</td>
                                                </tr>
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            }
                            .into_view()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
