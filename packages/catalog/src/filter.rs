//! Filter predicate over the joined product list.

use std::fmt;

use crate::models::Product;

/// Label of the "no user filter" choice, as shown in the user tabs.
pub const ALL_USERS: &str = "All";

/// Which owner the product list is narrowed to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum UserFilter {
    #[default]
    All,
    User(String),
}

impl UserFilter {
    /// Map a tab label to a filter. `"All"` means no filter.
    pub fn from_name(name: &str) -> Self {
        if name == ALL_USERS {
            Self::All
        } else {
            Self::User(name.to_string())
        }
    }

    /// Selected user name, or `"All"`.
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_USERS,
            Self::User(name) => name,
        }
    }

    /// True when narrowed to exactly this user name.
    pub fn is_user(&self, name: &str) -> bool {
        matches!(self, Self::User(selected) if selected == name)
    }

    fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::User(name) => product.owner().is_some_and(|owner| &owner.name == name),
        }
    }
}

impl fmt::Display for UserFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Case-fold then trim, the normalisation applied to both sides of a search.
pub fn prepare_string(s: &str) -> String {
    s.to_lowercase().trim().to_string()
}

/// Products owned by `user` whose name contains `query`.
///
/// An empty `query` disables the name filter; a whitespace-only query
/// folds to `""` and therefore matches every name. Survivors keep their
/// source order.
pub fn filter_products<'a>(
    products: &'a [Product],
    user: &UserFilter,
    query: &str,
) -> Vec<&'a Product> {
    let needle = (!query.is_empty()).then(|| prepare_string(query));

    products
        .iter()
        .filter(|product| user.matches(product))
        .filter(|product| match &needle {
            Some(needle) => prepare_string(&product.name).contains(needle.as_str()),
            None => true,
        })
        .collect()
}
