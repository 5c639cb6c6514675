use dioxus::prelude::*;
use portfolio_core::{NavItem, NavigationState};

use crate::components::theme_toggle::ThemeToggle;

pub fn nav_bar_class(state: &NavigationState) -> &'static str {
    if state.is_scrolled {
        "nav-bar scrolled"
    } else {
        "nav-bar"
    }
}

pub fn nav_item_class(state: &NavigationState, id: &str) -> &'static str {
    if state.is_active(id) {
        "nav-item active"
    } else {
        "nav-item"
    }
}

#[component]
pub fn Navigation(
    owner: String,
    items: Vec<NavItem>,
    state: NavigationState,
    on_select: Callback<String>,
    on_toggle_menu: Callback<()>,
    on_close_menu: Callback<()>,
) -> Element {
    let menu_open = state.menu_open;

    rsx! {
        nav {
            class: nav_bar_class(&state),

            div {
                style: "max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; height: 100%; display: flex; align-items: center; justify-content: space-between;",

                span {
                    style: "font-family: var(--font-medieval); font-size: 1.25rem; font-weight: 600; color: var(--text-primary);",
                    "{owner}"
                }

                div {
                    class: "desktop-only",
                    style: "display: flex; align-items: center; gap: 2rem;",

                    div {
                        style: "display: flex; align-items: center; gap: 0.5rem;",
                        for item in items.iter() {
                            NavButton {
                                key: "{item.id}",
                                item: item.clone(),
                                class: nav_item_class(&state, &item.id).to_string(),
                                on_select,
                            }
                        }
                    }
                    ThemeToggle {}
                }

                button {
                    class: "mobile-only",
                    style: "background: none; border: none; font-size: 1.5rem; cursor: pointer; color: var(--text-primary);",
                    onclick: move |_| on_toggle_menu.call(()),
                    if menu_open { "✕" } else { "☰" }
                }
            }
        }

        div {
            class: if menu_open { "mobile-menu mobile-only open" } else { "mobile-menu mobile-only" },
            div {
                style: "padding: 1.5rem; display: flex; flex-direction: column; gap: 1rem;",
                for item in items.iter() {
                    NavButton {
                        key: "{item.id}",
                        item: item.clone(),
                        class: nav_item_class(&state, &item.id).to_string(),
                        on_select,
                    }
                }
                div {
                    style: "margin-top: 1.5rem; padding-top: 1.5rem; border-top: 1px solid var(--border-color); display: flex; justify-content: center;",
                    ThemeToggle { show_label: false }
                }
            }
        }

        if menu_open {
            div {
                class: "mobile-only",
                style: "position: fixed; inset: 0; z-index: 30; background: var(--shadow-color); backdrop-filter: blur(4px);",
                onclick: move |_| on_close_menu.call(()),
            }
        }
    }
}

#[component]
fn NavButton(item: NavItem, class: String, on_select: Callback<String>) -> Element {
    let id = item.id.clone();

    rsx! {
        button {
            class: "{class}",
            style: "display: flex; flex-direction: column; align-items: center; padding: 0.5rem 1rem; background: none; border: none; cursor: pointer;",
            onclick: move |_| on_select.call(id.clone()),
            span {
                class: "primary-label",
                style: "font-weight: 600; color: var(--text-primary);",
                "{item.primary}"
            }
            span {
                style: "font-size: 0.875rem; font-style: italic; opacity: 0.9; margin-top: 4px; color: var(--accent-primary);",
                "{item.secondary}"
            }
        }
    }
}
