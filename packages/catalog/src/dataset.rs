//! Static data source: the TOML document bundled into the binary.

use std::collections::HashSet;

use serde::Deserialize;

use crate::config::DisplayConfig;
use crate::error::CatalogError;
use crate::models::{CategoryRecord, ProductRecord, UserRecord};

const BUNDLED: &str = include_str!("../data/catalog.toml");

/// Raw collections exactly as read from the data file, before the join.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub categories: Vec<CategoryRecord>,
    #[serde(default)]
    pub products: Vec<ProductRecord>,
}

impl Dataset {
    /// Parse and validate a dataset document.
    ///
    /// Ids must be unique within each collection. Foreign keys are not
    /// checked here.
    pub fn from_toml(s: &str) -> Result<Self, CatalogError> {
        let dataset: Dataset = toml::from_str(s)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// The dataset shipped with the application.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_toml(BUNDLED)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        ensure_unique("user", self.users.iter().map(|u| u.id))?;
        ensure_unique("category", self.categories.iter().map(|c| c.id))?;
        ensure_unique("product", self.products.iter().map(|p| p.id))?;
        Ok(())
    }
}

fn ensure_unique(kind: &'static str, ids: impl Iterator<Item = u32>) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId { kind, id });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sex;

    #[test]
    fn test_bundled_dataset_loads() {
        let dataset = Dataset::bundled().unwrap();
        assert_eq!(dataset.users.len(), 4);
        assert_eq!(dataset.categories.len(), 5);
        assert_eq!(dataset.products.len(), 8);
        assert_eq!(dataset.display, DisplayConfig::default());
    }

    #[test]
    fn test_parse_records() {
        let dataset = Dataset::from_toml(
            r#"
            [[users]]
            id = 7
            name = "Anna"
            sex = "f"

            [[categories]]
            id = 3
            title = "Fruits"
            icon = "🍏"
            ownerId = 7

            [[products]]
            id = 11
            name = "Pineapple"
            categoryId = 3
            price = 2.5
            "#,
        )
        .unwrap();

        assert_eq!(dataset.users[0].sex, Sex::Female);
        assert_eq!(dataset.categories[0].owner_id, 7);
        assert_eq!(dataset.products[0].category_id, 3);
        assert_eq!(dataset.products[0].price, 2.5);
    }

    #[test]
    fn test_missing_price_defaults_to_zero() {
        let dataset = Dataset::from_toml(
            r#"
            [[products]]
            id = 1
            name = "Milk"
            categoryId = 2
            "#,
        )
        .unwrap();
        assert_eq!(dataset.products[0].price, 0.0);
    }

    #[test]
    fn test_empty_document_is_empty_dataset() {
        let dataset = Dataset::from_toml("").unwrap();
        assert_eq!(dataset, Dataset::default());
    }

    #[test]
    fn test_duplicate_user_id_rejected() {
        let err = Dataset::from_toml(
            r#"
            [[users]]
            id = 1
            name = "Roma"
            sex = "m"

            [[users]]
            id = 1
            name = "Anna"
            sex = "f"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { kind: "user", id: 1 }));
    }

    #[test]
    fn test_duplicate_product_id_rejected() {
        let err = Dataset::from_toml(
            r#"
            [[products]]
            id = 4
            name = "Jacket"
            categoryId = 5

            [[products]]
            id = 4
            name = "Drum"
            categoryId = 5
            "#,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "duplicate product id 4");
    }

    #[test]
    fn test_unknown_sex_is_parse_error() {
        let err = Dataset::from_toml(
            r#"
            [[users]]
            id = 1
            name = "Roma"
            sex = "x"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_dangling_keys_are_not_validation_errors() {
        let dataset = Dataset::from_toml(
            r#"
            [[categories]]
            id = 1
            title = "Orphans"
            icon = "?"
            ownerId = 99
            "#,
        );
        assert!(dataset.is_ok());
    }
}
