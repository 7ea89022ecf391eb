//! `data-cy` values the end-to-end suite queries. Changing any of these
//! breaks the UI tests.

pub const FILTER_ALL_USERS: &str = "FilterAllUsers";
pub const FILTER_USER: &str = "FilterUser";
pub const SEARCH_FIELD: &str = "SearchField";
pub const CLEAR_BUTTON: &str = "ClearButton";
pub const ALL_CATEGORIES: &str = "AllCategories";
pub const CATEGORY: &str = "Category";
pub const RESET_ALL_BUTTON: &str = "ResetAllButton";
pub const NO_MATCHING_MESSAGE: &str = "NoMatchingMessage";
pub const PRODUCT_TABLE: &str = "ProductTable";
pub const SORT_ICON: &str = "SortIcon";
pub const PRODUCT: &str = "Product";
pub const PRODUCT_ID: &str = "ProductId";
pub const PRODUCT_NAME: &str = "ProductName";
pub const PRODUCT_CATEGORY: &str = "ProductCategory";
pub const PRODUCT_USER: &str = "ProductUser";

