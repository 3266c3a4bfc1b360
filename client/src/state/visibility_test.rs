use super::*;

#[test]
fn home_unscrolled_is_floating_idle() {
    assert_eq!(display_mode("/", 0.0, false, false), DisplayMode::FloatingIdle);
}

#[test]
fn home_scrolled_past_threshold_docks() {
    assert_eq!(display_mode("/", 400.0, false, false), DisplayMode::DockedIdle);
}

#[test]
fn scroll_exactly_at_threshold_stays_floating() {
    assert_eq!(display_mode("/", DOCK_SCROLL_THRESHOLD, false, false), DisplayMode::FloatingIdle);
}

#[test]
fn non_home_route_docks_regardless_of_scroll() {
    assert_eq!(display_mode("/about", 0.0, false, false), DisplayMode::DockedIdle);
    assert_eq!(display_mode("/about", 1000.0, false, false), DisplayMode::DockedIdle);
}

#[test]
fn bubble_variant_applies_while_bubble_visible() {
    assert_eq!(display_mode("/", 0.0, false, true), DisplayMode::FloatingWithBubble);
    assert_eq!(display_mode("/services", 0.0, false, true), DisplayMode::DockedWithBubble);
}

#[test]
fn open_panel_wins_over_everything() {
    assert_eq!(display_mode("/", 0.0, true, false), DisplayMode::Open);
    assert_eq!(display_mode("/about", 900.0, true, true), DisplayMode::Open);
}

#[test]
fn docking_rule_unaffected_by_bubble_mid_window() {
    // Scrolling past the threshold while the bubble is mid-window keeps the
    // bubble but swaps the dock variant.
    assert_eq!(display_mode("/", 400.0, false, true), DisplayMode::DockedWithBubble);
}

#[test]
fn mode_predicates_match_variants() {
    assert!(DisplayMode::DockedIdle.is_docked());
    assert!(DisplayMode::DockedWithBubble.is_docked());
    assert!(!DisplayMode::FloatingWithBubble.is_docked());
    assert!(DisplayMode::FloatingWithBubble.has_bubble());
    assert!(DisplayMode::DockedWithBubble.has_bubble());
    assert!(!DisplayMode::Open.has_bubble());
}
