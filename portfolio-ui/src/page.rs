//! Portfolio page - single document with in-page anchors
//!
//! Owns the two pieces of page state:
//! 1. Theme, via the controller provided by `use_theme_provider`
//! 2. Navigation, via a `SectionTracker` fed by a throttled scroll listener

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use portfolio_core::{
    scroll_progress, ConfigError, LayoutProbe, PortfolioConfig, SectionRegistry, SectionTracker,
};

use crate::components::{ContentSection, ErrorState, Hero, LoadingScreen, Navigation, ScrollProgress};
use crate::interop::{page_extent, scroll_to_section, DomLayout, ScrollSubscription};
use crate::styles::DEFAULT_TOKENS;
use crate::theme::use_theme_provider;

const OWNER_NAME: &str = "Suyash Sreekumar";
const OWNER_TITLE: &str = "Software Engineer & AI Specialist";

#[component]
pub fn Portfolio() -> Element {
    let loaded = use_hook(|| load_config().map_err(|e| e.to_string()));

    match loaded {
        Ok((config, registry)) => rsx! {
            PortfolioPage { config, registry }
        },
        Err(error) => {
            dioxus_logger::tracing::error!("Failed to load portfolio config: {}", error);
            rsx! {
                style { {DEFAULT_TOKENS} }
                ErrorState { error }
            }
        }
    }
}

fn load_config() -> Result<(PortfolioConfig, SectionRegistry), ConfigError> {
    let config = PortfolioConfig::builtin()?;
    let registry = config.section_registry()?;
    Ok((config, registry))
}

#[component]
fn PortfolioPage(config: PortfolioConfig, registry: SectionRegistry) -> Element {
    use_theme_provider(config.theme.clone());

    let mut loading = use_signal(|| true);
    let mut progress = use_signal(|| 0.0_f64);
    let mut tracker = use_signal(|| SectionTracker::new(registry.clone(), config.tracker.clone()));
    let scroll_subscription = use_hook(|| Rc::new(RefCell::new(None::<ScrollSubscription>)));

    {
        let scroll_subscription = scroll_subscription.clone();
        use_drop(move || {
            scroll_subscription.borrow_mut().take();
        });
    }

    let loading_ms = config.page.loading_ms;
    use_effect(move || {
        spawn(async move {
            TimeoutFuture::new(u32::try_from(loading_ms).unwrap_or(u32::MAX)).await;
            loading.set(false);
        });
    });

    {
        let scroll_subscription = scroll_subscription.clone();
        use_effect(move || {
            if scroll_subscription.borrow().is_some() {
                return;
            }
            let subscription = ScrollSubscription::attach(move || {
                let update = tracker.peek().observe(&DomLayout);
                if let Some(update) = update {
                    tracker.write().apply(update);
                }

                let (scroll_height, viewport_height) = page_extent();
                let ratio = scroll_progress(DomLayout.scroll_y(), scroll_height, viewport_height);
                if (ratio - *progress.peek()).abs() > f64::EPSILON {
                    progress.set(ratio);
                }
            });
            *scroll_subscription.borrow_mut() = subscription;
        });
    }

    let on_select = use_callback(move |id: String| {
        tracker.write().select(&id);
        scroll_to_section(&id);
    });
    let on_toggle_menu = use_callback(move |_| tracker.write().toggle_menu());
    let on_close_menu = use_callback(move |_| tracker.write().close_menu());

    let nav_state = tracker.read().state().clone();
    let next_section = config
        .sections
        .get(1)
        .map(|item| item.id.clone())
        .unwrap_or_default();

    rsx! {
        style { {DEFAULT_TOKENS} }

        div {
            style: "min-height: 100vh; overflow-x: hidden;",

            LoadingScreen { visible: loading() }

            Navigation {
                owner: OWNER_NAME.to_string(),
                items: config.sections.clone(),
                state: nav_state,
                on_select,
                on_toggle_menu,
                on_close_menu,
            }

            main {
                for (index, item) in config.sections.iter().enumerate() {
                    section {
                        key: "{item.id}",
                        id: "{item.id}",
                        if index == 0 {
                            Hero {
                                name: OWNER_NAME.to_string(),
                                title: OWNER_TITLE.to_string(),
                                next_section: next_section.clone(),
                                sparkle_ms: config.page.sparkle_ms,
                            }
                        } else {
                            ContentSection { item: item.clone(), alternate: index % 2 == 0 }
                        }
                    }
                }
            }

            footer {
                style: "padding: 2rem 1.5rem; text-align: center; border-top: 1px solid var(--border-color); color: var(--text-secondary); font-size: 0.875rem;",
                "© {OWNER_NAME}"
            }

            ScrollProgress { progress: progress() }
        }
    }
}
