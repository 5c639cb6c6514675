//! Client-side state for the ice/fire portfolio page
//!
//! Two independent pieces live here:
//! - [`ThemeController`]: the ice/fire theme, its persistence, and the
//!   transition window that follows a toggle
//! - [`SectionTracker`]: which page section the navigation bar highlights
//!
//! Both talk to the browser only through the traits in [`ports`], so they run
//! natively under `cargo test` with the fakes in [`testing`].

pub mod config;
pub mod controller;
pub mod ports;
pub mod testing;
pub mod theme;
pub mod tracker;

pub use config::{ConfigError, NavItem, PageConfig, PortfolioConfig, ThemeConfig, TrackerConfig};
pub use controller::{SubscriptionId, ThemeController, ThemeEnvironment, ThemeListener};
pub use ports::{
    DocumentSurface, LayoutProbe, PersistenceStore, PreferenceSource, ScheduledTask, Scheduler,
    SectionRect, StorageError, TimerHandle,
};
pub use theme::{NameAnimation, Theme, ThemeClasses, ThemeParseError, ThemeState};
pub use tracker::{
    scroll_progress, select_active_section, NavigationState, RegistryError, ScrollThrottle,
    ScrollUpdate, SectionRegistry, SectionTracker,
};
