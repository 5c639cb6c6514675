//! Capabilities the core needs from its host environment.
//!
//! The browser build implements these against `web_sys`; tests use the
//! in-memory versions in [`crate::testing`].

use std::time::Duration;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Durable key-value storage (localStorage in the browser).
pub trait PersistenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Environment color-scheme preference.
pub trait PreferenceSource {
    /// `true` when the environment asks for a dark color scheme.
    /// Implementations return `false` when the signal is unavailable.
    fn prefers_dark(&self) -> bool;
}

/// The pieces of the document the theme controller writes to.
pub trait DocumentSurface {
    fn set_root_attribute(&mut self, name: &str, value: &str);

    /// Adds `class` to the first element matching `selector`.
    /// Returns `false` when nothing matched.
    fn add_class(&mut self, selector: &str, class: &str) -> bool;

    fn remove_class(&mut self, selector: &str, class: &str);
}

/// Viewport-relative vertical extent of an element, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

impl SectionRect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Whether the horizontal line `offset` pixels below the viewport top
    /// crosses this rectangle.
    pub fn spans(&self, offset: f64) -> bool {
        self.top <= offset && self.bottom >= offset
    }
}

/// Read-only access to page geometry.
pub trait LayoutProbe {
    /// `None` when no element with this id exists in the document.
    fn section_rect(&self, id: &str) -> Option<SectionRect>;

    fn scroll_y(&self) -> f64;
}

/// Opaque id of a scheduled task, unique per scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub u64);

/// Deferred work the theme controller asks its scheduler to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduledTask {
    EndTransition,
    ClearEruption,
}

/// Cancellable delayed callbacks.
///
/// When a task comes due the host calls
/// [`ThemeController::fire`](crate::ThemeController::fire) with the handle
/// returned here. A cancelled handle must never be delivered.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, task: ScheduledTask) -> TimerHandle;
    fn cancel(&mut self, handle: TimerHandle);
}
