//! # Join stage
//!
//! Enriches the raw [`Dataset`] once: every category gets its owner, every
//! product gets its (already enriched) category. Lookups are linear scans
//! that return the first match, so a foreign key with no match simply
//! resolves to `None`.

use crate::config::DisplayConfig;
use crate::dataset::Dataset;
use crate::error::CatalogError;
use crate::models::{Category, Product, User};

/// First user whose id equals `owner_id`.
pub fn find_owner(users: &[User], owner_id: u32) -> Option<&User> {
    users.iter().find(|user| user.id == owner_id)
}

/// First category whose id equals `category_id`.
pub fn find_category(categories: &[Category], category_id: u32) -> Option<&Category> {
    categories.iter().find(|category| category.id == category_id)
}

/// The joined, read-only catalog held for the lifetime of the app.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub display: DisplayConfig,
}

impl Catalog {
    /// Parse the bundled dataset and join it.
    pub fn bundled() -> Result<Self, CatalogError> {
        Ok(Self::join(Dataset::bundled()?))
    }

    /// Run the join stage. Source order of every collection is preserved.
    pub fn join(dataset: Dataset) -> Self {
        let Dataset {
            display,
            users,
            categories,
            products,
        } = dataset;

        let categories: Vec<Category> = categories
            .into_iter()
            .map(|record| {
                let owner = find_owner(&users, record.owner_id).cloned();
                if owner.is_none() {
                    tracing::warn!(
                        category_id = record.id,
                        owner_id = record.owner_id,
                        "category owner not found"
                    );
                }
                Category {
                    id: record.id,
                    title: record.title,
                    icon: record.icon,
                    owner_id: record.owner_id,
                    owner,
                }
            })
            .collect();

        let products: Vec<Product> = products
            .into_iter()
            .map(|record| {
                let category = find_category(&categories, record.category_id).cloned();
                if category.is_none() {
                    tracing::warn!(
                        product_id = record.id,
                        category_id = record.category_id,
                        "product category not found"
                    );
                }
                Product {
                    id: record.id,
                    name: record.name,
                    category_id: record.category_id,
                    price: record.price,
                    category,
                }
            })
            .collect();

        tracing::debug!(
            users = users.len(),
            categories = categories.len(),
            products = products.len(),
            "catalog joined"
        );

        Self {
            users,
            categories,
            products,
            display,
        }
    }
}
