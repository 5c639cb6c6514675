//! Scroll-driven active section tracking for the navigation bar.

use crate::config::TrackerConfig;
use crate::ports::LayoutProbe;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("section registry is empty")]
    Empty,
    #[error("duplicate section id: {0}")]
    Duplicate(String),
}

/// Ordered section ids; order is the tie-break order for the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRegistry {
    ids: Vec<String>,
}

impl SectionRegistry {
    pub fn new<I, S>(ids: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut collected: Vec<String> = Vec::new();
        for id in ids {
            let id = id.into();
            if collected.contains(&id) {
                return Err(RegistryError::Duplicate(id));
            }
            collected.push(id);
        }

        if collected.is_empty() {
            return Err(RegistryError::Empty);
        }
        Ok(Self { ids: collected })
    }

    pub fn first(&self) -> &str {
        &self.ids[0]
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// First registered section whose rectangle crosses the activation line.
/// Sections without a document element are skipped.
pub fn select_active_section<'a>(
    registry: &'a SectionRegistry,
    probe: &dyn LayoutProbe,
    activation_offset: f64,
) -> Option<&'a str> {
    registry.iter().find(|id| {
        probe
            .section_rect(id)
            .is_some_and(|rect| rect.spans(activation_offset))
    })
}

/// Fraction of the page scrolled, clamped to `[0, 1]`; `0` for pages that
/// fit in the viewport.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub active_section: String,
    pub is_scrolled: bool,
    pub menu_open: bool,
}

impl NavigationState {
    pub fn new(registry: &SectionRegistry) -> Self {
        Self {
            active_section: registry.first().to_string(),
            is_scrolled: false,
            menu_open: false,
        }
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_section == id
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

/// Outcome of one scroll sample that differs from the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollUpdate {
    pub is_scrolled: bool,
    /// Newly matched section; `None` keeps the current one.
    pub active_section: Option<String>,
}

pub struct SectionTracker {
    registry: SectionRegistry,
    config: TrackerConfig,
    state: NavigationState,
}

impl std::fmt::Debug for SectionTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionTracker")
            .field("sections", &self.registry.len())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl SectionTracker {
    pub fn new(registry: SectionRegistry, config: TrackerConfig) -> Self {
        let state = NavigationState::new(&registry);
        Self {
            registry,
            config,
            state,
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn active_section(&self) -> &str {
        &self.state.active_section
    }

    pub fn is_scrolled(&self) -> bool {
        self.state.is_scrolled
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    /// Samples the layout once. Returns `true` when the navigation state
    /// changed.
    pub fn on_scroll(&mut self, probe: &dyn LayoutProbe) -> bool {
        match self.observe(probe) {
            Some(update) => {
                self.apply(update);
                true
            }
            None => false,
        }
    }

    /// Read-only half of [`on_scroll`](Self::on_scroll): the change a sample
    /// would make, or `None` when the state already matches the layout.
    pub fn observe(&self, probe: &dyn LayoutProbe) -> Option<ScrollUpdate> {
        let is_scrolled = probe.scroll_y() > self.config.scrolled_threshold_px;
        let active_section =
            select_active_section(&self.registry, probe, self.config.activation_offset_px)
                .filter(|id| *id != self.state.active_section)
                .map(str::to_string);

        if is_scrolled == self.state.is_scrolled && active_section.is_none() {
            return None;
        }
        Some(ScrollUpdate {
            is_scrolled,
            active_section,
        })
    }

    pub fn apply(&mut self, update: ScrollUpdate) {
        self.state.is_scrolled = update.is_scrolled;
        if let Some(id) = update.active_section {
            tracing::trace!(from = %self.state.active_section, to = %id, "active section changed");
            self.state.active_section = id;
        }
    }

    /// Marks a section active directly, as when a nav item is clicked.
    /// Unknown ids are ignored. Closes the mobile menu either way.
    pub fn select(&mut self, id: &str) {
        if self.registry.contains(id) {
            self.state.active_section = id.to_string();
        }
        self.state.close_menu();
    }

    pub fn toggle_menu(&mut self) {
        self.state.toggle_menu();
    }

    pub fn close_menu(&mut self) {
        self.state.close_menu();
    }
}

/// Coalesces scroll events into at most one update per animation frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollThrottle {
    frame_pending: bool,
}

impl ScrollThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called for every scroll event. Returns `true` when the caller should
    /// request an animation frame.
    pub fn request(&mut self) -> bool {
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    /// Called from the animation frame callback before sampling.
    pub fn frame(&mut self) {
        self.frame_pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.frame_pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StaticLayout;

    fn registry(ids: &[&str]) -> SectionRegistry {
        SectionRegistry::new(ids.iter().copied()).unwrap()
    }

    #[test]
    fn registry_rejects_empty_and_duplicates() {
        assert_eq!(
            SectionRegistry::new(Vec::<String>::new()),
            Err(RegistryError::Empty)
        );
        assert_eq!(
            SectionRegistry::new(["hero", "about", "hero"]),
            Err(RegistryError::Duplicate("hero".to_string()))
        );
    }

    #[test]
    fn navigation_defaults_to_first_section() {
        let state = NavigationState::new(&registry(&["hero", "about"]));
        assert_eq!(state.active_section, "hero");
        assert!(!state.is_scrolled);
        assert!(!state.menu_open);
    }

    #[test]
    fn scrolled_flag_has_no_hysteresis() {
        let mut tracker = SectionTracker::new(registry(&["hero"]), TrackerConfig::default());

        assert!(tracker.on_scroll(&StaticLayout::new().scrolled_to(51.0)));
        assert!(tracker.is_scrolled());

        assert!(tracker.on_scroll(&StaticLayout::new().scrolled_to(50.0)));
        assert!(!tracker.is_scrolled());

        tracker.on_scroll(&StaticLayout::new().scrolled_to(50.5));
        assert!(tracker.is_scrolled());
    }

    #[test]
    fn observe_reports_only_differences() {
        let mut tracker =
            SectionTracker::new(registry(&["hero", "about"]), TrackerConfig::default());
        let layout = StaticLayout::new()
            .with_section("hero", -900.0, -100.0)
            .with_section("about", -100.0, 700.0)
            .scrolled_to(900.0);

        let update = tracker.observe(&layout).unwrap();
        assert_eq!(
            update,
            ScrollUpdate {
                is_scrolled: true,
                active_section: Some("about".to_string()),
            }
        );
        assert_eq!(tracker.active_section(), "hero", "observe does not mutate");

        tracker.apply(update);
        assert_eq!(tracker.active_section(), "about");
        assert!(tracker.is_scrolled());
        assert_eq!(tracker.observe(&layout), None);
    }

    #[test]
    fn select_closes_menu_and_ignores_unknown_ids() {
        let mut tracker =
            SectionTracker::new(registry(&["hero", "about"]), TrackerConfig::default());
        tracker.toggle_menu();
        assert!(tracker.state().menu_open);

        tracker.select("about");
        assert_eq!(tracker.active_section(), "about");
        assert!(!tracker.state().menu_open);

        tracker.toggle_menu();
        tracker.select("blog");
        assert_eq!(tracker.active_section(), "about");
        assert!(!tracker.state().menu_open);
    }

    #[test]
    fn throttle_allows_one_frame_request_until_serviced() {
        let mut throttle = ScrollThrottle::new();
        assert!(throttle.request());
        assert!(!throttle.request());
        assert!(!throttle.request());
        assert!(throttle.is_pending());

        throttle.frame();
        assert!(!throttle.is_pending());
        assert!(throttle.request());
    }

    #[test]
    fn progress_is_clamped_and_safe_for_short_pages() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(-20.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(10.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(10.0, 1000.0, 1000.0), 0.0);
    }
}
