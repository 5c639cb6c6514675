use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::theme::Theme;
use crate::tracker::{RegistryError, SectionRegistry};

const BUILTIN_CONFIG_TOML: &str = include_str!("../config/portfolio.toml");

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid portfolio config: {0}")]
    Parse(String),
    #[error("invalid section list: {0}")]
    Registry(#[from] RegistryError),
    #[error("{field} must be greater than zero")]
    InvalidDuration { field: &'static str },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub default_theme: Theme,
    pub transition_ms: u64,
    pub eruption_ms: u64,
    pub root_attribute: String,
    pub hero_selector: String,
    pub eruption_class: String,
}

impl ThemeConfig {
    pub fn transition_window(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn eruption_window(&self) -> Duration {
        Duration::from_millis(self.eruption_ms)
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "got-portfolio-theme".to_string(),
            default_theme: Theme::Fire,
            transition_ms: 2000,
            eruption_ms: 2000,
            root_attribute: "data-theme".to_string(),
            hero_selector: ".hero-name".to_string(),
            eruption_class: "hero-name-transition".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Distance below the viewport top, under the fixed nav bar, that
    /// decides which section is active.
    pub activation_offset_px: f64,
    /// Scroll offset past which the nav bar switches to its solid chrome.
    pub scrolled_threshold_px: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            activation_offset_px: 100.0,
            scrolled_threshold_px: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub loading_ms: u64,
    pub sparkle_ms: u64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            loading_ms: 3000,
            sparkle_ms: 1000,
        }
    }
}

/// One navigation entry; `id` doubles as the section anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: String,
    pub primary: String,
    pub secondary: String,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PortfolioConfig {
    pub theme: ThemeConfig,
    pub tracker: TrackerConfig,
    pub page: PageConfig,
    pub sections: Vec<NavItem>,
}

impl PortfolioConfig {
    /// The configuration compiled into the binary.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_toml_str(BUILTIN_CONFIG_TOML)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.theme.transition_ms == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "theme.transition_ms",
            });
        }
        if self.theme.eruption_ms == 0 {
            return Err(ConfigError::InvalidDuration {
                field: "theme.eruption_ms",
            });
        }
        self.section_registry()?;
        Ok(())
    }

    pub fn section_registry(&self) -> Result<SectionRegistry, RegistryError> {
        SectionRegistry::new(self.sections.iter().map(|item| item.id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_config_matches_page_layout() {
        let config = PortfolioConfig::builtin().unwrap();
        assert_eq!(config.theme.storage_key, "got-portfolio-theme");
        assert_eq!(config.theme.default_theme, Theme::Fire);
        assert_eq!(config.theme.transition_window(), Duration::from_millis(2000));
        assert_eq!(config.tracker.activation_offset_px, 100.0);
        assert_eq!(config.tracker.scrolled_threshold_px, 50.0);

        let ids: Vec<&str> = config.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "hero",
                "about",
                "education",
                "skills",
                "projects",
                "experience",
                "contact"
            ]
        );
        assert_eq!(config.sections[3].secondary, "The Arsenal");
        assert_eq!(config.sections[6].href(), "#contact");
    }

    #[test]
    fn missing_tables_fall_back_to_defaults() {
        let config = PortfolioConfig::from_toml_str(
            r#"
            [[sections]]
            id = "hero"
            primary = "Home"
            secondary = "The Throne"
            "#,
        )
        .unwrap();

        assert_eq!(config.theme, ThemeConfig::default());
        assert_eq!(config.tracker, TrackerConfig::default());
        assert_eq!(config.page.loading_ms, 3000);
    }

    #[test]
    fn overrides_thresholds() {
        let config = PortfolioConfig::from_toml_str(
            r#"
            [tracker]
            activation_offset_px = 72.0

            [[sections]]
            id = "hero"
            primary = "Home"
            secondary = "The Throne"
            "#,
        )
        .unwrap();

        assert_eq!(config.tracker.activation_offset_px, 72.0);
        assert_eq!(config.tracker.scrolled_threshold_px, 50.0);
    }

    #[test]
    fn rejects_empty_and_duplicate_sections() {
        assert_eq!(
            PortfolioConfig::from_toml_str(""),
            Err(ConfigError::Registry(RegistryError::Empty))
        );

        let duplicated = r#"
            [[sections]]
            id = "about"
            primary = "About"
            secondary = "The Journey"

            [[sections]]
            id = "about"
            primary = "About again"
            secondary = "The Journey"
        "#;
        assert_eq!(
            PortfolioConfig::from_toml_str(duplicated),
            Err(ConfigError::Registry(RegistryError::Duplicate(
                "about".to_string()
            )))
        );
    }

    #[test]
    fn rejects_zero_transition_window() {
        let raw = r#"
            [theme]
            transition_ms = 0

            [[sections]]
            id = "hero"
            primary = "Home"
            secondary = "The Throne"
        "#;
        assert_eq!(
            PortfolioConfig::from_toml_str(raw),
            Err(ConfigError::InvalidDuration {
                field: "theme.transition_ms"
            })
        );
    }

    #[test]
    fn unknown_theme_literal_is_a_parse_error() {
        let raw = r#"
            [theme]
            default_theme = "water"
        "#;
        assert!(matches!(
            PortfolioConfig::from_toml_str(raw),
            Err(ConfigError::Parse(_))
        ));
    }
}
