pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod join;
pub mod models;
pub mod state;

pub use config::DisplayConfig;
pub use dataset::Dataset;
pub use error::CatalogError;
pub use filter::{filter_products, prepare_string, UserFilter};
pub use join::{find_category, find_owner, Catalog};
pub use models::{Category, Product, Sex, User};
pub use state::FilterState;
