use catalog::Product;
use dioxus::prelude::*;

use crate::presentation::{category_cell_text, user_cell_class, user_cell_text, COLUMNS};
use crate::selectors;

#[component]
pub fn ProductTable(products: Vec<Product>) -> Element {
    rsx! {
        table {
            "data-cy": selectors::PRODUCT_TABLE,
            class: "table is-striped is-narrow is-fullwidth",
            thead {
                tr {
                    for (header, icon) in COLUMNS {
                        th {
                            key: "{header}",
                            span {
                                class: "is-flex is-flex-wrap-nowrap",
                                "{header}"
                                // Sorting is not wired up; the icons are placeholders.
                                a {
                                    href: "#/",
                                    span {
                                        class: "icon",
                                        i { "data-cy": selectors::SORT_ICON, class: icon }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            ProductList { products }
        }
    }
}

#[component]
pub fn ProductList(products: Vec<Product>) -> Element {
    rsx! {
        tbody {
            for product in products {
                ProductRow { key: "{product.id}", product }
            }
        }
    }
}

#[component]
pub fn ProductRow(product: Product) -> Element {
    let category = category_cell_text(&product);
    let owner_class = user_cell_class(product.owner());
    let owner_name = user_cell_text(&product);

    rsx! {
        tr {
            "data-cy": selectors::PRODUCT,
            td {
                class: "has-text-weight-bold",
                "data-cy": selectors::PRODUCT_ID,
                "{product.id}"
            }
            td { "data-cy": selectors::PRODUCT_NAME, "{product.name}" }
            td { "data-cy": selectors::PRODUCT_CATEGORY, "{category}" }
            td {
                "data-cy": selectors::PRODUCT_USER,
                class: owner_class,
                "{owner_name}"
            }
        }
    }
}
