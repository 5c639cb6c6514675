use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use portfolio_core::{NameAnimation, ThemeClasses};

use crate::interop::scroll_to_section;
use crate::theme::use_theme;

/// Landing section. The `h1.hero-name` element keeps a constant class list so
/// the eruption marker added by the theme controller is not overwritten on
/// re-render; the themed inner span is re-keyed to replay its entrance.
#[component]
pub fn Hero(name: String, title: String, next_section: String, sparkle_ms: u64) -> Element {
    let handle = use_theme();
    let theme = handle.state().current;
    let classes = ThemeClasses::for_theme(theme);
    let mut animation = use_signal(|| NameAnimation::new(theme));
    let mut sparkling = use_signal(|| false);

    use_effect(move || {
        let current = handle.state().current;
        animation.write().observe(current);
    });

    let name_key = animation().key();
    let name_class = if sparkling() {
        format!("{} sparkle-effect", classes.hero_name)
    } else {
        classes.hero_name.clone()
    };

    rsx! {
        div {
            class: "{classes.section_primary}",
            style: "min-height: 100vh; display: flex; align-items: center; justify-content: center; text-align: center;",

            div {
                style: "max-width: 56rem; margin: 0 auto;",

                h1 {
                    class: "hero-name",
                    onmouseenter: move |_| {
                        if sparkling() {
                            return;
                        }
                        sparkling.set(true);
                        spawn(async move {
                            TimeoutFuture::new(u32::try_from(sparkle_ms).unwrap_or(u32::MAX)).await;
                            sparkling.set(false);
                        });
                    },
                    span {
                        key: "{name_key}",
                        class: "{name_class}",
                        "{name}"
                    }
                }

                h2 {
                    style: "font-size: 1.25rem; font-weight: 500; margin-bottom: 1rem; color: var(--accent-primary);",
                    "{title}"
                }

                button {
                    class: "{classes.glow_button}",
                    style: "margin-top: 2rem; background: none; border: 1px solid var(--accent-primary); color: var(--text-primary); padding: 0.75rem 1.5rem; border-radius: var(--radius-md); cursor: pointer;",
                    onclick: move |_| scroll_to_section(&next_section),
                    "Begin the Journey ⌄"
                }
            }
        }
    }
}
