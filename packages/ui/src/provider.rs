//! Catalog context and hook for the UI.

use catalog::Catalog;
use dioxus::prelude::*;

/// Get the joined catalog loaded by [`CatalogProvider`].
pub fn use_catalog() -> Signal<Catalog> {
    use_context::<Signal<Catalog>>()
}

/// Loads the bundled catalog once and provides it to its children.
/// Wrap the app with this component before using [`use_catalog`].
#[component]
pub fn CatalogProvider(children: Element) -> Element {
    let load_error = use_hook(|| match Catalog::bundled() {
        Ok(catalog) => {
            tracing::debug!(products = catalog.products.len(), "catalog loaded");
            provide_context(Signal::new(catalog));
            None
        }
        Err(e) => {
            tracing::error!("Failed to load catalog: {}", e);
            provide_context(Signal::new(Catalog::default()));
            Some(e.to_string())
        }
    });

    if let Some(message) = load_error {
        return rsx! {
            div {
                class: "notification is-danger",
                "{message}"
            }
        };
    }

    rsx! { {children} }
}
