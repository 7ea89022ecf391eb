use catalog::{Category, FilterState, User};
use dioxus::prelude::*;

use crate::presentation::{category_button_class, user_link_class};
use crate::selectors;

/// "All" plus one tab per user.
#[component]
pub fn UserTabs(
    users: Vec<User>,
    state: FilterState,
    on_select_all: EventHandler<()>,
    on_select_user: EventHandler<String>,
) -> Element {
    rsx! {
        p {
            class: "panel-tabs has-text-weight-bold",
            a {
                "data-cy": selectors::FILTER_ALL_USERS,
                href: "#/",
                class: user_link_class(state.is_all_selected()),
                onclick: move |_| on_select_all.call(()),
                "All"
            }
            for user in users {
                a {
                    key: "{user.id}",
                    "data-cy": selectors::FILTER_USER,
                    href: "#/",
                    class: user_link_class(state.is_user_selected(&user.name)),
                    onclick: {
                        let name = user.name.clone();
                        move |_| on_select_user.call(name.clone())
                    },
                    "{user.name}"
                }
            }
        }
    }
}

/// Search input with a clear control shown only while there is a query.
#[component]
pub fn SearchField(
    state: FilterState,
    placeholder: String,
    on_input: EventHandler<String>,
    on_clear: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "panel-block",
            p {
                class: "control has-icons-left has-icons-right",
                input {
                    "data-cy": selectors::SEARCH_FIELD,
                    r#type: "text",
                    class: "input",
                    placeholder: "{placeholder}",
                    value: "{state.query}",
                    oninput: move |evt| on_input.call(evt.value()),
                }
                span {
                    class: "icon is-left",
                    i { class: "fas fa-search", aria_hidden: "true" }
                }
                span {
                    class: "icon is-right",
                    if state.shows_clear_button() {
                        button {
                            "data-cy": selectors::CLEAR_BUTTON,
                            r#type: "button",
                            class: "delete",
                            onclick: move |_| on_clear.call(()),
                        }
                    }
                }
            }
        }
    }
}

/// Category buttons. Visual only: they do not filter.
#[component]
pub fn CategoryButtons(categories: Vec<Category>) -> Element {
    rsx! {
        div {
            class: "panel-block is-flex-wrap-wrap",
            a {
                "data-cy": selectors::ALL_CATEGORIES,
                href: "#/",
                class: "button is-success mr-6 is-outlined",
                "All"
            }
            for (index, category) in categories.iter().enumerate() {
                a {
                    key: "{category.id}",
                    "data-cy": selectors::CATEGORY,
                    class: category_button_class(index),
                    href: "#/",
                    "{category.title}"
                }
            }
        }
    }
}

#[component]
pub fn ResetAllButton(on_reset: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "panel-block",
            a {
                "data-cy": selectors::RESET_ALL_BUTTON,
                href: "#/",
                class: "button is-link is-outlined is-fullwidth",
                onclick: move |_| on_reset.call(()),
                "Reset all filters"
            }
        }
    }
}
