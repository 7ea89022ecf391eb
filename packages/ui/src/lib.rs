//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod presentation;
pub mod selectors;
pub mod views;

pub const CATALOG_CSS: Asset = asset!("/assets/catalog.css");
pub const BULMA_CSS: &str = "https://cdn.jsdelivr.net/npm/bulma@0.9.4/css/bulma.min.css";
pub const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css";

mod provider;
pub use provider::{use_catalog, CatalogProvider};

mod filter_panel;
pub use filter_panel::{CategoryButtons, ResetAllButton, SearchField, UserTabs};

mod product_table;
pub use product_table::{ProductList, ProductRow, ProductTable};

pub use views::ProductCatalogView;

/// Render a root component once and return its HTML.
#[cfg(test)]
pub(crate) fn render_to_string(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
