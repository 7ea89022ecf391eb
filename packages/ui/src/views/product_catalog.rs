use catalog::{FilterState, Product};
use dioxus::prelude::*;

use crate::filter_panel::{CategoryButtons, ResetAllButton, SearchField, UserTabs};
use crate::presentation::no_results_text;
use crate::product_table::ProductTable;
use crate::provider::use_catalog;
use crate::selectors;

/// The catalog screen: filter panel above the product table.
///
/// Owns the filter state. Every transition recomputes the visible list from
/// the full product collection.
#[component]
pub fn ProductCatalogView() -> Element {
    let catalog = use_catalog();
    let mut filters = use_signal(FilterState::default);

    let visible = use_memo(move || {
        let catalog = catalog.read();
        let products: Vec<Product> = filters
            .read()
            .apply(&catalog.products)
            .into_iter()
            .cloned()
            .collect();
        products
    });

    let on_select_all = move |_: ()| {
        tracing::debug!("user filter cleared");
        filters.write().select_all();
    };

    let on_select_user = move |name: String| {
        filters.write().select_user(&name);
        tracing::debug!(user = %filters.read().user, "user filter changed");
    };

    let on_input = move |text: String| filters.write().set_query(text);

    let on_clear = move |_: ()| {
        tracing::debug!("search query cleared");
        filters.write().clear_query();
    };

    let on_reset = move |_: ()| {
        tracing::debug!("filters reset");
        filters.write().reset();
    };

    let (users, categories, display) = {
        let catalog = catalog.read();
        (
            catalog.users.clone(),
            catalog.categories.clone(),
            catalog.display.clone(),
        )
    };
    let state = filters();
    let products = visible();
    let message = no_results_text(products.len(), &display.no_results_message).to_string();

    rsx! {
        div {
            class: "section",
            div {
                class: "container",
                h1 { class: "title", "{display.title}" }

                div {
                    class: "block",
                    nav {
                        class: "panel",
                        p { class: "panel-heading", "Filters" }

                        UserTabs {
                            users,
                            state: state.clone(),
                            on_select_all,
                            on_select_user,
                        }

                        SearchField {
                            state,
                            placeholder: display.search_placeholder.clone(),
                            on_input,
                            on_clear,
                        }

                        CategoryButtons { categories }

                        ResetAllButton { on_reset }
                    }
                }

                div {
                    class: "box table-container",
                    p { "data-cy": selectors::NO_MATCHING_MESSAGE, "{message}" }
                    ProductTable { products }
                }
            }
        }
    }
}
