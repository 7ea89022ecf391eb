//! Transient filter state owned by the catalog screen.

use crate::filter::{filter_products, UserFilter};
use crate::models::Product;

/// Selected owner and search text. Defaults to no filtering.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub user: UserFilter,
    pub query: String,
}

impl FilterState {
    /// Select a user tab by its label. The "All" label clears the filter.
    pub fn select_user(&mut self, name: &str) {
        self.user = UserFilter::from_name(name);
    }

    pub fn select_all(&mut self) {
        self.user = UserFilter::All;
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Back to "All" users and an empty query.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_all_selected(&self) -> bool {
        self.user == UserFilter::All
    }

    pub fn is_user_selected(&self, name: &str) -> bool {
        self.user.is_user(name)
    }

    /// The clear control is only offered for a non-empty query.
    pub fn shows_clear_button(&self) -> bool {
        !self.query.is_empty()
    }

    /// Products visible under this state.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        filter_products(products, &self.user, &self.query)
    }
}
