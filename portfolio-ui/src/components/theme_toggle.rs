use dioxus::prelude::*;
use portfolio_core::{Theme, ThemeState};

use crate::theme::use_theme;

const ICE_TRACK: &str = "background: linear-gradient(135deg, #3b82f6 0%, #1e40af 100%); box-shadow: 0 4px 15px rgba(59, 130, 246, 0.3), inset 0 2px 4px rgba(255, 255, 255, 0.2);";
const FIRE_TRACK: &str = "background: linear-gradient(135deg, #f97316 0%, #dc2626 100%); box-shadow: 0 4px 15px rgba(249, 115, 22, 0.4), inset 0 2px 4px rgba(255, 255, 255, 0.1);";

/// Horizontal offset of the toggle ball, in pixels.
pub fn ball_offset(theme: Theme) -> u32 {
    match theme {
        Theme::Ice => 0,
        Theme::Fire => 32,
    }
}

pub fn track_style(theme: Theme) -> &'static str {
    match theme {
        Theme::Ice => ICE_TRACK,
        Theme::Fire => FIRE_TRACK,
    }
}

pub fn toggle_class(state: ThemeState) -> &'static str {
    if state.transitioning {
        "theme-toggle transitioning"
    } else {
        "theme-toggle"
    }
}

#[component]
pub fn ThemeToggle(#[props(default = true)] show_label: bool) -> Element {
    let theme = use_theme();
    let state = theme.state();
    let current = state.current;
    let offset = ball_offset(current);
    let track = track_style(current);
    let ice_opacity = ice_side_opacity(current);
    let fire_opacity = fire_side_opacity(current);
    let motto = current.motto();
    let icon = current.icon();

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 0.75rem;",

            if show_label {
                span {
                    class: "desktop-only",
                    style: "font-family: var(--font-medieval); font-size: 0.875rem; text-transform: uppercase; letter-spacing: 0.05em; color: var(--text-secondary);",
                    "{motto}"
                }
            }

            button {
                class: toggle_class(state),
                style: "position: relative; width: 4rem; height: 2rem; border: none; border-radius: 9999px; cursor: pointer; {track}",
                disabled: state.transitioning,
                title: current.switch_hint(),
                onclick: move |_| {
                    // Ignore clicks until the current transition has played out.
                    if !theme.state().transitioning {
                        theme.toggle();
                    }
                },

                span {
                    style: "position: absolute; left: 0.25rem; top: 0.25rem; font-size: 0.875rem; opacity: {ice_opacity};",
                    "❄️"
                }
                span {
                    style: "position: absolute; right: 0.25rem; top: 0.25rem; font-size: 0.875rem; opacity: {fire_opacity};",
                    "🔥"
                }
                div {
                    class: "toggle-ball",
                    style: "position: absolute; top: 0.25rem; left: 0.25rem; width: 1.5rem; height: 1.5rem; border-radius: 9999px; display: flex; align-items: center; justify-content: center; background: linear-gradient(145deg, #ffffff 0%, #f0f0f0 100%); box-shadow: 0 2px 8px rgba(0,0,0,0.2); transform: translateX({offset}px);",
                    span { class: "toggle-icon", "{icon}" }
                }
            }
        }
    }
}

fn ice_side_opacity(theme: Theme) -> &'static str {
    if theme == Theme::Ice {
        "0"
    } else {
        "0.7"
    }
}

fn fire_side_opacity(theme: Theme) -> &'static str {
    if theme == Theme::Fire {
        "0"
    } else {
        "0.7"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ball_sits_on_the_active_side() {
        assert_eq!(ball_offset(Theme::Ice), 0);
        assert_eq!(ball_offset(Theme::Fire), 32);
    }

    #[test]
    fn transitioning_toggle_gets_spin_class() {
        let idle = ThemeState {
            current: Theme::Ice,
            transitioning: false,
        };
        let busy = ThemeState {
            current: Theme::Fire,
            transitioning: true,
        };
        assert_eq!(toggle_class(idle), "theme-toggle");
        assert_eq!(toggle_class(busy), "theme-toggle transitioning");
    }

    #[test]
    fn side_icons_hide_under_the_ball() {
        assert_eq!(ice_side_opacity(Theme::Ice), "0");
        assert_eq!(fire_side_opacity(Theme::Ice), "0.7");
        assert_eq!(track_style(Theme::Fire), FIRE_TRACK);
    }
}
