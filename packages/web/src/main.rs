use dioxus::prelude::*;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::BULMA_CSS }
        document::Link { rel: "stylesheet", href: ui::FONT_AWESOME_CSS }
        document::Link { rel: "stylesheet", href: ui::CATALOG_CSS }

        ui::CatalogProvider {
            ui::ProductCatalogView {}
        }
    }
}
