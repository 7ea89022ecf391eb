//! # Domain models for the product catalog
//!
//! Two layers of types live here:
//!
//! | Layer | Types | Produced by |
//! |-------|-------|-------------|
//! | Records | [`UserRecord`], [`CategoryRecord`], [`ProductRecord`] | [`crate::Dataset`] when the bundled TOML is parsed. Field names follow the data file (`ownerId`, `categoryId`). |
//! | Entities | [`User`], [`Category`], [`Product`] | [`crate::Catalog::join`]. Categories carry their resolved owner, products carry their resolved category. |
//!
//! Resolved references are `Option`s. A foreign key with no matching entity
//! becomes `None` and is never looked up again: entities are immutable once
//! the join has run.

use serde::{Deserialize, Serialize};

/// Sex of a user, stored as `"m"` / `"f"` in the data file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

/// A user who owns categories. Identity is `id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub sex: Sex,
}

/// Category row as it appears in the data file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    pub id: u32,
    pub title: String,
    pub icon: String,
    pub owner_id: u32,
}

/// Product row as it appears in the data file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: u32,
    pub name: String,
    pub category_id: u32,
    #[serde(default)]
    pub price: f64,
}

/// Users need no enrichment, so the record and the entity are the same type.
pub type UserRecord = User;

/// A category with its owner resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct Category {
    pub id: u32,
    pub title: String,
    /// Emoji shown in front of the title: "🍞"
    pub icon: String,
    pub owner_id: u32,
    /// `None` when `owner_id` matches no user.
    pub owner: Option<User>,
}

impl Category {
    /// Display label used in the product table: "🍞 - Grocery"
    pub fn label(&self) -> String {
        format!("{} - {}", self.icon, self.title)
    }
}

/// A product with its category (and through it, the owner) resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category_id: u32,
    pub price: f64,
    /// Copy of the enriched category, `None` when `category_id` is dangling.
    pub category: Option<Category>,
}

impl Product {
    /// Owner of the product's category, if both links resolved.
    pub fn owner(&self) -> Option<&User> {
        self.category.as_ref().and_then(|c| c.owner.as_ref())
    }
}
