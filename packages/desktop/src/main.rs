use dioxus::prelude::*;

fn main() {
    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, WindowBuilder};

        let title = catalog::DisplayConfig::default().title;

        dioxus::LaunchBuilder::desktop()
            .with_cfg(Config::new().with_window(WindowBuilder::new().with_title(title)))
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::BULMA_CSS }
        document::Link { rel: "stylesheet", href: ui::FONT_AWESOME_CSS }
        document::Link { rel: "stylesheet", href: ui::CATALOG_CSS }

        ui::CatalogProvider {
            ui::ProductCatalogView {}
        }
    }
}
