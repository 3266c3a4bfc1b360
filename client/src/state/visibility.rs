//! Widget visibility controller.
//!
//! DESIGN
//! ======
//! Display mode is a pure function of (route, scroll offset, open flag,
//! bubble flag) — nothing is stored. The affordance is docked on non-home
//! routes or once the page has scrolled past a fixed threshold, and
//! floating otherwise.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

/// Vertical scroll offset (CSS pixels) past which the affordance docks.
pub const DOCK_SCROLL_THRESHOLD: f64 = 300.0;

/// Route treated as the home page for the floating affordance.
pub const HOME_ROUTE: &str = "/";

/// How the chat affordance is currently presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    FloatingIdle,
    FloatingWithBubble,
    DockedIdle,
    DockedWithBubble,
    Open,
}

impl DisplayMode {
    /// Whether the closed affordance is in its compact docked variant.
    #[must_use]
    pub fn is_docked(self) -> bool {
        matches!(self, Self::DockedIdle | Self::DockedWithBubble)
    }

    /// Whether the hint bubble is drawn next to the affordance.
    #[must_use]
    pub fn has_bubble(self) -> bool {
        matches!(self, Self::FloatingWithBubble | Self::DockedWithBubble)
    }
}

/// Derive the display mode for the chat affordance.
///
/// The open panel always wins. Otherwise the affordance docks when the
/// route is not the home route or the scroll offset exceeds
/// [`DOCK_SCROLL_THRESHOLD`]; the bubble variant applies whenever the
/// bubble schedule currently has the hint visible.
#[must_use]
pub fn display_mode(route: &str, scroll_y: f64, is_open: bool, bubble_visible: bool) -> DisplayMode {
    if is_open {
        return DisplayMode::Open;
    }
    let docked = route != HOME_ROUTE || scroll_y > DOCK_SCROLL_THRESHOLD;
    match (docked, bubble_visible) {
        (true, true) => DisplayMode::DockedWithBubble,
        (true, false) => DisplayMode::DockedIdle,
        (false, true) => DisplayMode::FloatingWithBubble,
        (false, false) => DisplayMode::FloatingIdle,
    }
}
