use std::time::Duration;

use portfolio_core::testing::{FixedPreference, ManualScheduler, MemoryStore, RecordingSurface};
use portfolio_core::{Theme, ThemeConfig, ThemeController, ThemeEnvironment};
use proptest::prelude::*;

const KEY: &str = "got-portfolio-theme";

struct Harness {
    controller: ThemeController,
    store: MemoryStore,
    surface: RecordingSurface,
    clock: ManualScheduler,
}

impl Harness {
    fn new(store: MemoryStore, prefers_dark: bool) -> Self {
        let surface = RecordingSurface::with_elements([".hero-name"]);
        let clock = ManualScheduler::new();
        let env = ThemeEnvironment {
            store: Box::new(store.clone()),
            preference: Box::new(FixedPreference(prefers_dark)),
            surface: Box::new(surface.clone()),
            scheduler: Box::new(clock.clone()),
        };

        Self {
            controller: ThemeController::new(ThemeConfig::default(), env),
            store,
            surface,
            clock,
        }
    }

    fn advance_ms(&mut self, ms: u64) {
        self.clock
            .advance_and_fire(&mut self.controller, Duration::from_millis(ms));
    }
}

#[test]
fn no_stored_value_and_dark_preference_yields_fire() {
    let mut h = Harness::new(MemoryStore::new(), true);
    h.controller.initialize();

    assert_eq!(h.controller.current(), Theme::Fire);
    assert_eq!(h.store.value(KEY).as_deref(), Some("fire"));
    assert_eq!(h.surface.root_attribute("data-theme").as_deref(), Some("fire"));
}

#[test]
fn no_stored_value_and_light_preference_yields_ice() {
    let mut h = Harness::new(MemoryStore::new(), false);
    h.controller.initialize();

    assert_eq!(h.controller.current(), Theme::Ice);
    assert_eq!(h.store.value(KEY).as_deref(), Some("ice"));
}

#[test]
fn stored_value_wins_over_preference() {
    let store = MemoryStore::new();
    store.insert(KEY, "fire");
    let mut h = Harness::new(store, false);
    h.controller.initialize();

    assert_eq!(h.controller.current(), Theme::Fire);
    assert_eq!(h.store.writes(), 0);
}

#[test]
fn corrupted_stored_value_is_treated_as_absent() {
    let store = MemoryStore::new();
    store.insert(KEY, "lava");
    let mut h = Harness::new(store, false);
    h.controller.initialize();

    assert_eq!(h.controller.current(), Theme::Ice);
    assert_eq!(h.store.value(KEY).as_deref(), Some("ice"));
}

#[test]
fn initialize_twice_does_not_drift() {
    let mut h = Harness::new(MemoryStore::new(), true);

    h.controller.initialize();
    let first = h.controller.current();
    let first_stored = h.store.value(KEY);

    h.controller.initialize();

    assert_eq!(h.controller.current(), first);
    assert_eq!(h.store.value(KEY), first_stored);
    assert_eq!(h.store.writes(), 1);
}

#[test]
fn persisted_fire_survives_reload() {
    let store = MemoryStore::new();
    {
        let mut h = Harness::new(store.clone(), false);
        h.controller.initialize();
        assert_eq!(h.controller.current(), Theme::Ice);
        h.controller.toggle_theme();
        assert_eq!(store.value(KEY).as_deref(), Some("fire"));
    }

    let mut reloaded = Harness::new(store, false);
    reloaded.controller.initialize();
    assert_eq!(reloaded.controller.current(), Theme::Fire);
}

#[test]
fn unavailable_storage_runs_in_memory() {
    let mut h = Harness::new(MemoryStore::unavailable(), true);
    h.controller.initialize();
    assert_eq!(h.controller.current(), Theme::Fire);

    h.controller.toggle_theme();
    assert_eq!(h.controller.current(), Theme::Ice);
    assert_eq!(h.surface.root_attribute("data-theme").as_deref(), Some("ice"));
    assert_eq!(h.store.writes(), 0);
}

#[test]
fn toggle_sets_transitioning_for_the_window() {
    let mut h = Harness::new(MemoryStore::new(), false);
    h.controller.initialize();

    h.controller.toggle_theme();
    assert!(h.controller.is_transitioning());
    assert_eq!(h.controller.current(), Theme::Fire);

    h.advance_ms(1999);
    assert!(h.controller.is_transitioning());

    h.advance_ms(1);
    assert!(!h.controller.is_transitioning());
    assert_eq!(h.clock.pending(), 0);
}

#[test]
fn retoggle_restarts_transition_window() {
    let mut h = Harness::new(MemoryStore::new(), false);
    h.controller.initialize();

    h.controller.toggle_theme();
    h.advance_ms(500);
    h.controller.toggle_theme();

    h.advance_ms(1500);
    assert!(h.controller.is_transitioning(), "still transitioning at t=2000");

    h.advance_ms(499);
    assert!(h.controller.is_transitioning(), "still transitioning at t=2499");

    h.advance_ms(1);
    assert!(!h.controller.is_transitioning());
    assert_eq!(h.controller.current(), Theme::Ice);
}

#[test]
fn toggling_to_fire_erupts_the_hero_name() {
    let mut h = Harness::new(MemoryStore::new(), false);
    h.controller.initialize();

    h.controller.toggle_theme();
    assert!(h.surface.has_class(".hero-name", "hero-name-transition"));

    h.advance_ms(2000);
    assert!(!h.surface.has_class(".hero-name", "hero-name-transition"));
}

#[test]
fn second_fire_toggle_restarts_the_eruption_clear() {
    let mut h = Harness::new(MemoryStore::new(), false);
    h.controller.initialize();

    h.controller.toggle_theme();
    h.advance_ms(100);
    h.controller.toggle_theme();
    h.advance_ms(100);
    h.controller.toggle_theme();
    assert_eq!(h.controller.current(), Theme::Fire);

    h.advance_ms(1900);
    assert!(
        h.surface.has_class(".hero-name", "hero-name-transition"),
        "still erupting at t=2100"
    );

    h.advance_ms(100);
    assert!(!h.surface.has_class(".hero-name", "hero-name-transition"));
}

#[test]
fn toggling_to_ice_does_not_erupt() {
    let mut h = Harness::new(MemoryStore::new(), true);
    h.controller.initialize();

    h.controller.toggle_theme();
    assert_eq!(h.controller.current(), Theme::Ice);
    assert!(!h.surface.has_class(".hero-name", "hero-name-transition"));
}

#[test]
fn missing_hero_element_is_skipped() {
    let store = MemoryStore::new();
    let clock = ManualScheduler::new();
    let surface = RecordingSurface::new();
    let env = ThemeEnvironment {
        store: Box::new(store),
        preference: Box::new(FixedPreference(false)),
        surface: Box::new(surface.clone()),
        scheduler: Box::new(clock.clone()),
    };
    let mut controller = ThemeController::new(ThemeConfig::default(), env);
    controller.initialize();

    controller.toggle_theme();

    assert_eq!(controller.current(), Theme::Fire);
    assert_eq!(clock.pending(), 1, "only the transition timer is pending");
}

#[test]
fn every_mutation_is_mirrored_to_root() {
    let mut h = Harness::new(MemoryStore::new(), false);
    h.controller.initialize();
    h.controller.toggle_theme();
    h.controller.toggle_theme();
    h.controller.toggle_theme();

    assert_eq!(h.surface.root_writes(), ["ice", "fire", "ice", "fire"]);
}

#[test]
fn dropping_controller_releases_pending_timers() {
    let clock = ManualScheduler::new();
    {
        let env = ThemeEnvironment {
            store: Box::new(MemoryStore::new()),
            preference: Box::new(FixedPreference(false)),
            surface: Box::new(RecordingSurface::with_elements([".hero-name"])),
            scheduler: Box::new(clock.clone()),
        };
        let mut controller = ThemeController::new(ThemeConfig::default(), env);
        controller.initialize();
        controller.toggle_theme();
        assert_eq!(clock.pending(), 2);
    }

    assert_eq!(clock.pending(), 0);
}

proptest! {
    #[test]
    fn toggle_parity(prefers_dark in any::<bool>(), steps in prop::collection::vec(0u64..3000, 0..24)) {
        let mut h = Harness::new(MemoryStore::new(), prefers_dark);
        h.controller.initialize();
        let initial = h.controller.current();

        for gap in &steps {
            h.controller.toggle_theme();
            h.advance_ms(*gap);
        }

        let expected = if steps.len() % 2 == 0 { initial } else { initial.toggled() };
        prop_assert_eq!(h.controller.current(), expected);
        prop_assert_eq!(h.store.value(KEY), Some(expected.as_str().to_string()));
    }
}
