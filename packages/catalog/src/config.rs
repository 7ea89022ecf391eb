//! # Display configuration — `[display]` table
//!
//! Text shown by the catalog screen. The table lives in the same TOML
//! document as the dataset:
//!
//! ```toml
//! [display]
//! title = "Product Categories"
//! search_placeholder = "Search"
//! no_results_message = "No products matching selected criteria"
//! ```
//!
//! Every field has a default, so a missing table or a missing key is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Text rendered around the product table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Page heading.
    #[serde(default = "default_title")]
    pub title: String,
    /// Placeholder of the search field.
    #[serde(default = "default_search_placeholder")]
    pub search_placeholder: String,
    /// Shown above the table when no product passes the filters.
    #[serde(default = "default_no_results_message")]
    pub no_results_message: String,
}

fn default_title() -> String {
    "Product Categories".to_string()
}

fn default_search_placeholder() -> String {
    "Search".to_string()
}

fn default_no_results_message() -> String {
    "No products matching selected criteria".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            search_placeholder: default_search_placeholder(),
            no_results_message: default_no_results_message(),
        }
    }
}
