//! Class names and cell text derived from catalog data.
//!
//! Kept free of Dioxus so the mapping can be tested without a renderer.
//! Unresolved references render as empty cells.

use catalog::{Product, Sex, User};

/// Column headers with their (decorative) sort icon classes.
pub const COLUMNS: [(&str, &str); 4] = [
    ("ID", "fas fa-sort"),
    ("Product", "fas fa-sort-down"),
    ("Category", "fas fa-sort-up"),
    ("User", "fas fa-sort"),
];

pub fn user_link_class(active: bool) -> &'static str {
    if active {
        "is-active"
    } else {
        ""
    }
}

/// Text colour of the owner cell: blue for men, red for women.
pub fn user_cell_class(owner: Option<&User>) -> &'static str {
    match owner.map(|u| u.sex) {
        Some(Sex::Male) => "has-text-link",
        Some(Sex::Female) => "has-text-danger",
        None => "",
    }
}

pub fn user_cell_text(product: &Product) -> &str {
    product.owner().map(|u| u.name.as_str()).unwrap_or_default()
}

/// "🍞 - Grocery", or empty when the category did not resolve.
pub fn category_cell_text(product: &Product) -> String {
    product
        .category
        .as_ref()
        .map(|c| c.label())
        .unwrap_or_default()
}

/// Category buttons alternate between info-coloured and plain.
pub fn category_button_class(index: usize) -> &'static str {
    if index % 2 == 0 {
        "button mr-2 my-1 is-info"
    } else {
        "button mr-2 my-1"
    }
}

pub fn no_results_text(visible: usize, message: &str) -> &str {
    if visible == 0 {
        message
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::{Catalog, Category};

    fn product(category: Option<Category>) -> Product {
        Product {
            id: 1,
            name: "Milk".into(),
            category_id: 2,
            price: 1.0,
            category,
        }
    }

    #[test]
    fn test_user_cell_class_by_sex() {
        let roma = User { id: 1, name: "Roma".into(), sex: Sex::Male };
        let anna = User { id: 2, name: "Anna".into(), sex: Sex::Female };
        assert_eq!(user_cell_class(Some(&roma)), "has-text-link");
        assert_eq!(user_cell_class(Some(&anna)), "has-text-danger");
        assert_eq!(user_cell_class(None), "");
    }

    #[test]
    fn test_cells_for_resolved_product() {
        let catalog = Catalog::bundled().unwrap();
        let milk = &catalog.products[0];
        assert_eq!(category_cell_text(milk), "🍺 - Drinks");
        assert_eq!(user_cell_text(milk), "Roma");
        assert_eq!(user_cell_class(milk.owner()), "has-text-link");
    }

    #[test]
    fn test_cells_for_dangling_category() {
        let lost = product(None);
        assert_eq!(category_cell_text(&lost), "");
        assert_eq!(user_cell_text(&lost), "");
        assert_eq!(user_cell_class(lost.owner()), "");
    }

    #[test]
    fn test_cells_for_dangling_owner() {
        let orphan = product(Some(Category {
            id: 2,
            title: "Drinks".into(),
            icon: "🍺".into(),
            owner_id: 99,
            owner: None,
        }));
        assert_eq!(category_cell_text(&orphan), "🍺 - Drinks");
        assert_eq!(user_cell_text(&orphan), "");
    }

    #[test]
    fn test_category_buttons_alternate() {
        assert_eq!(category_button_class(0), "button mr-2 my-1 is-info");
        assert_eq!(category_button_class(1), "button mr-2 my-1");
        assert_eq!(category_button_class(2), "button mr-2 my-1 is-info");
    }

    #[test]
    fn test_no_results_text() {
        let msg = "No products matching selected criteria";
        assert_eq!(no_results_text(0, msg), msg);
        assert_eq!(no_results_text(3, msg), "");
    }

    #[test]
    fn test_user_link_class() {
        assert_eq!(user_link_class(true), "is-active");
        assert_eq!(user_link_class(false), "");
    }

    #[test]
    fn test_columns_in_table_order() {
        let headers: Vec<&str> = COLUMNS.iter().map(|(h, _)| *h).collect();
        assert_eq!(headers, vec!["ID", "Product", "Category", "User"]);
    }
}
