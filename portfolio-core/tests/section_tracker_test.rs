use portfolio_core::testing::StaticLayout;
use portfolio_core::{
    select_active_section, PortfolioConfig, SectionRegistry, SectionTracker, TrackerConfig,
};

fn tracker(ids: &[&str]) -> SectionTracker {
    let registry = SectionRegistry::new(ids.iter().copied()).unwrap();
    SectionTracker::new(registry, TrackerConfig::default())
}

#[test]
fn picks_section_crossing_the_activation_line() {
    let mut tracker = tracker(&["hero", "about", "skills"]);
    let layout = StaticLayout::new()
        .with_section("hero", -300.0, 40.0)
        .with_section("about", 50.0, 800.0)
        .with_section("skills", 800.0, 1600.0)
        .scrolled_to(340.0);

    assert!(tracker.on_scroll(&layout));
    assert_eq!(tracker.active_section(), "about");
    assert!(tracker.is_scrolled());
}

#[test]
fn earlier_registered_section_wins_ties() {
    let mut tracker = tracker(&["hero", "about", "skills"]);
    let layout = StaticLayout::new()
        .with_section("hero", -300.0, 40.0)
        .with_section("about", 60.0, 100.0)
        .with_section("skills", 100.0, 900.0);

    tracker.on_scroll(&layout);
    assert_eq!(tracker.active_section(), "about");
}

#[test]
fn tie_break_follows_registration_not_geometry() {
    let registry = SectionRegistry::new(["skills", "about"]).unwrap();
    let layout = StaticLayout::new()
        .with_section("about", 0.0, 500.0)
        .with_section("skills", 90.0, 110.0);

    assert_eq!(select_active_section(&registry, &layout, 100.0), Some("skills"));
}

#[test]
fn retains_previous_section_when_nothing_matches() {
    let mut tracker = tracker(&["hero", "about", "skills"]);
    tracker.on_scroll(
        &StaticLayout::new()
            .with_section("about", 0.0, 700.0)
            .scrolled_to(900.0),
    );
    assert_eq!(tracker.active_section(), "about");

    let gap = StaticLayout::new()
        .with_section("hero", -2000.0, -1200.0)
        .with_section("about", -1100.0, 20.0)
        .with_section("skills", 180.0, 900.0)
        .scrolled_to(1500.0);

    assert!(!tracker.on_scroll(&gap));
    assert_eq!(tracker.active_section(), "about");
}

#[test]
fn missing_anchors_are_skipped() {
    let mut tracker = tracker(&["hero", "education", "skills"]);
    let layout = StaticLayout::new()
        .with_section("hero", -900.0, -100.0)
        .with_section("skills", 0.0, 700.0);

    tracker.on_scroll(&layout);
    assert_eq!(tracker.active_section(), "skills");
}

#[test]
fn above_first_section_keeps_default() {
    let mut tracker = tracker(&["hero", "about"]);
    let layout = StaticLayout::new()
        .with_section("hero", 120.0, 900.0)
        .with_section("about", 900.0, 1800.0);

    assert!(!tracker.on_scroll(&layout));
    assert_eq!(tracker.active_section(), "hero");
    assert!(!tracker.is_scrolled());
}

#[test]
fn thresholds_come_from_config() {
    let config = PortfolioConfig::from_toml_str(
        r#"
        [tracker]
        activation_offset_px = 200.0
        scrolled_threshold_px = 10.0

        [[sections]]
        id = "hero"
        primary = "Home"
        secondary = "The Throne"

        [[sections]]
        id = "about"
        primary = "About"
        secondary = "The Journey"
        "#,
    )
    .unwrap();
    let mut tracker = SectionTracker::new(config.section_registry().unwrap(), config.tracker);

    let layout = StaticLayout::new()
        .with_section("hero", -500.0, 150.0)
        .with_section("about", 150.0, 900.0)
        .scrolled_to(20.0);

    tracker.on_scroll(&layout);
    assert_eq!(tracker.active_section(), "about");
    assert!(tracker.is_scrolled());
}

#[test]
fn builtin_registry_matches_nav_order() {
    let config = PortfolioConfig::builtin().unwrap();
    let tracker = SectionTracker::new(config.section_registry().unwrap(), config.tracker);

    assert_eq!(tracker.active_section(), "hero");
    assert_eq!(tracker.registry().len(), config.sections.len());
}
