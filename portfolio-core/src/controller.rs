//! Theme selection, persistence and the post-toggle transition window.

use std::fmt;

use crate::config::ThemeConfig;
use crate::ports::{
    DocumentSurface, PersistenceStore, PreferenceSource, ScheduledTask, Scheduler, TimerHandle,
};
use crate::theme::{Theme, ThemeState};

/// Host capabilities the controller drives.
pub struct ThemeEnvironment {
    pub store: Box<dyn PersistenceStore>,
    pub preference: Box<dyn PreferenceSource>,
    pub surface: Box<dyn DocumentSurface>,
    pub scheduler: Box<dyn Scheduler>,
}

impl fmt::Debug for ThemeEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeEnvironment").finish_non_exhaustive()
    }
}

pub type ThemeListener = Box<dyn FnMut(ThemeState)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Single owner of the page theme.
///
/// `current` changes instantly on toggle; `transitioning` stays set for the
/// configured window after the most recent toggle so animations can key off it.
/// Every change of `current` is mirrored onto the document root attribute in
/// the same call that makes it.
pub struct ThemeController {
    config: ThemeConfig,
    env: ThemeEnvironment,
    state: ThemeState,
    transition_timer: Option<TimerHandle>,
    eruption_timer: Option<TimerHandle>,
    listeners: Vec<(SubscriptionId, ThemeListener)>,
    next_subscription: u64,
}

impl fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeController")
            .field("state", &self.state)
            .field("transition_timer", &self.transition_timer)
            .field("eruption_timer", &self.eruption_timer)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl ThemeController {
    pub fn new(config: ThemeConfig, env: ThemeEnvironment) -> Self {
        let state = ThemeState {
            current: config.default_theme,
            transitioning: false,
        };

        Self {
            config,
            env,
            state,
            transition_timer: None,
            eruption_timer: None,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> ThemeState {
        self.state
    }

    pub fn current(&self) -> Theme {
        self.state.current
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.transitioning
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Resolves the startup theme: the persisted value when valid, otherwise
    /// the environment preference (which is then persisted).
    pub fn initialize(&mut self) {
        let resolved = match self.read_persisted() {
            Some(theme) => theme,
            None => {
                let theme = Theme::from_preference(self.env.preference.prefers_dark());
                tracing::debug!(theme = %theme, "no stored theme, using environment preference");
                self.persist(theme);
                theme
            }
        };

        self.set_current(resolved);
        self.notify();
    }

    /// Flips the theme and (re)starts the transition window.
    pub fn toggle_theme(&mut self) {
        self.state.transitioning = true;

        let next = self.state.current.toggled();
        self.set_current(next);
        self.persist(next);

        if next == Theme::Fire {
            self.start_eruption();
        }

        if let Some(previous) = self.transition_timer.take() {
            self.env.scheduler.cancel(previous);
        }
        let handle = self.env.scheduler.schedule(
            self.config.transition_window(),
            ScheduledTask::EndTransition,
        );
        self.transition_timer = Some(handle);

        tracing::debug!(theme = %next, timer = handle.0, "theme toggled");
        self.notify();
    }

    /// Runs a task previously handed to the scheduler. Handles that were
    /// superseded by a later toggle are ignored.
    pub fn fire(&mut self, handle: TimerHandle, task: ScheduledTask) {
        match task {
            ScheduledTask::EndTransition => {
                if self.transition_timer != Some(handle) {
                    tracing::debug!(timer = handle.0, "ignoring stale transition timer");
                    return;
                }
                self.transition_timer = None;
                self.state.transitioning = false;
                self.notify();
            }
            ScheduledTask::ClearEruption => {
                if self.eruption_timer != Some(handle) {
                    return;
                }
                self.eruption_timer = None;
                self.env
                    .surface
                    .remove_class(&self.config.hero_selector, &self.config.eruption_class);
            }
        }
    }

    pub fn subscribe(&mut self, listener: ThemeListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, listener));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(existing, _)| *existing != id);
    }

    fn set_current(&mut self, theme: Theme) {
        self.state.current = theme;
        self.env
            .surface
            .set_root_attribute(&self.config.root_attribute, theme.as_str());
    }

    fn start_eruption(&mut self) {
        let added = self
            .env
            .surface
            .add_class(&self.config.hero_selector, &self.config.eruption_class);
        if !added {
            return;
        }

        if let Some(previous) = self.eruption_timer.take() {
            self.env.scheduler.cancel(previous);
        }
        self.eruption_timer = Some(self.env.scheduler.schedule(
            self.config.eruption_window(),
            ScheduledTask::ClearEruption,
        ));
    }

    fn read_persisted(&self) -> Option<Theme> {
        let key = self.config.storage_key.as_str();
        match self.env.store.get(key) {
            Ok(Some(raw)) => match raw.parse::<Theme>() {
                Ok(theme) => Some(theme),
                Err(e) => {
                    tracing::debug!(key, error = %e, "ignoring invalid stored theme");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(key, error = %e, "theme store read failed");
                None
            }
        }
    }

    fn persist(&mut self, theme: Theme) {
        let key = self.config.storage_key.as_str();
        if let Err(e) = self.env.store.set(key, theme.as_str()) {
            tracing::warn!(key, error = %e, "theme store write failed");
        }
    }

    fn notify(&mut self) {
        let state = self.state;
        for (_, listener) in self.listeners.iter_mut() {
            listener(state);
        }
    }
}

impl Drop for ThemeController {
    fn drop(&mut self) {
        if let Some(handle) = self.transition_timer.take() {
            self.env.scheduler.cancel(handle);
        }
        if let Some(handle) = self.eruption_timer.take() {
            self.env.scheduler.cancel(handle);
        }
    }
}
