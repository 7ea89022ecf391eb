mod product_catalog;
pub use product_catalog::ProductCatalogView;
