pub mod hero;
pub mod navigation;
pub mod sections;
pub mod status_views;
pub mod theme_toggle;

pub use hero::Hero;
pub use navigation::Navigation;
pub use sections::{section_cards, Card, ContentSection};
pub use status_views::{ErrorState, LoadingScreen, ScrollProgress};
pub use theme_toggle::ThemeToggle;
