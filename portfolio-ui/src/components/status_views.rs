use dioxus::prelude::*;

use crate::theme::use_theme;

#[component]
pub fn LoadingScreen(visible: bool) -> Element {
    let theme = use_theme().state().current;
    let icon = theme.icon();
    let motto = theme.motto();

    rsx! {
        div {
            class: if visible { "loading-screen" } else { "loading-screen hidden" },
            div {
                style: "display: flex; flex-direction: column; align-items: center; gap: 1rem;",
                span { class: "toggle-icon", style: "font-size: 3rem;", "{icon}" }
                p {
                    style: "font-family: var(--font-medieval); letter-spacing: 0.1em; text-transform: uppercase; color: var(--text-secondary);",
                    "{motto}"
                }
            }
        }
    }
}

#[component]
pub fn ScrollProgress(progress: f64) -> Element {
    rsx! {
        div {
            class: "scroll-progress",
            style: "transform: scaleX({progress});",
        }
    }
}

/// Shown instead of the page when the embedded configuration is unusable.
/// Rendered outside the theme provider, so it relies on the root tokens only.
#[component]
pub fn ErrorState(error: String) -> Element {
    rsx! {
        div {
            class: "error-state",
            div {
                class: "error-card",
                h2 {
                    style: "font-family: var(--font-medieval); margin: 0 0 0.5rem;",
                    "The ravens were lost"
                }
                p {
                    style: "margin: 0 0 1rem; color: var(--accent-primary);",
                    "This portfolio could not be assembled."
                }
                p { class: "error-detail", "{error}" }
            }
        }
    }
}
