use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Visual theme of the whole page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Ice,
    #[default]
    Fire,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ice => "ice",
            Self::Fire => "fire",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Ice => Self::Fire,
            Self::Fire => Self::Ice,
        }
    }

    /// Theme derived from the environment's color-scheme preference.
    pub fn from_preference(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Fire
        } else {
            Self::Ice
        }
    }

    pub fn motto(&self) -> &'static str {
        match self {
            Self::Ice => "Winter is Coming",
            Self::Fire => "Fire and Blood",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Ice => "❄️",
            Self::Fire => "🔥",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Ice => "Ice",
            Self::Fire => "Fire",
        }
    }

    /// Tooltip for the toggle, naming the theme a click switches to.
    pub fn switch_hint(&self) -> String {
        format!("Switch to {} Theme", self.toggled().display_name())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("unknown theme: {0:?}")]
pub struct ThemeParseError(pub String);

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ice" => Ok(Self::Ice),
            "fire" => Ok(Self::Fire),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

/// Snapshot of the theme controller, handed to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeState {
    pub current: Theme,
    pub transitioning: bool,
}

/// Theme-dependent CSS class strings used by the page sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeClasses {
    pub section_primary: String,
    pub section_alternate: String,
    pub section_light: String,
    pub card_background: &'static str,
    /// Inner span of the hero heading; the heading element itself keeps a
    /// fixed `hero-name` class.
    pub hero_name: String,
    pub glow_button: &'static str,
}

impl ThemeClasses {
    pub fn for_theme(theme: Theme) -> Self {
        let particles = match theme {
            Theme::Ice => "ice-particles",
            Theme::Fire => "fire-particles",
        };

        Self {
            section_primary: format!("section-primary {particles}"),
            section_alternate: "section-alternate themed-texture".to_string(),
            section_light: format!("section-light {particles}"),
            card_background: "card-background glow-on-hover",
            hero_name: format!("{}-mode name-entrance", theme.as_str()),
            glow_button: "professional-button glow-on-hover",
        }
    }
}

/// Render key for the hero heading; bumps once per observed theme change so
/// the heading remounts and replays its entrance animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameAnimation {
    key: u32,
    last_theme: Theme,
}

impl NameAnimation {
    pub fn new(theme: Theme) -> Self {
        Self {
            key: 0,
            last_theme: theme,
        }
    }

    pub fn key(&self) -> u32 {
        self.key
    }

    /// Returns `true` when `theme` differs from the last observed one.
    pub fn observe(&mut self, theme: Theme) -> bool {
        if theme == self.last_theme {
            return false;
        }
        self.last_theme = theme;
        self.key = self.key.wrapping_add(1);
        true
    }
}
