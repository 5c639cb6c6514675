pub mod components;
pub mod interop;
pub mod page;
pub mod styles;
pub mod theme;

pub use components::*;
pub use interop::*;
pub use page::Portfolio;
pub use theme::{use_theme, use_theme_provider, ThemeHandle, WebScheduler};
