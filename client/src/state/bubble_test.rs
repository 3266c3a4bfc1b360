#![cfg(not(feature = "hydrate"))]

use super::*;
use leptos::prelude::{Owner, RwSignal};

// =============================================================
// Phase timeline
// =============================================================

#[test]
fn initial_delay_is_hidden_then_shows() {
    let phase = BubblePhase::InitialDelay;
    assert!(!phase.visible());
    assert_eq!(phase.dwell(), INITIAL_DELAY);
    assert_eq!(phase.next(), BubblePhase::Visible);
}

#[test]
fn visible_window_lasts_four_seconds_then_hides() {
    let phase = BubblePhase::Visible;
    assert!(phase.visible());
    assert_eq!(phase.dwell(), VISIBLE_WINDOW);
    assert_eq!(phase.next(), BubblePhase::Hidden);
}

#[test]
fn hidden_pause_lasts_three_seconds_then_shows_again() {
    let phase = BubblePhase::Hidden;
    assert!(!phase.visible());
    assert_eq!(phase.dwell(), HIDDEN_PAUSE);
    assert_eq!(phase.next(), BubblePhase::Visible);
}

#[test]
fn steady_state_period_is_seven_seconds() {
    assert_eq!(VISIBLE_WINDOW + HIDDEN_PAUSE, Duration::from_secs(7));
}

#[test]
fn timeline_repeats_indefinitely() {
    let mut phase = BubblePhase::InitialDelay;
    let mut seen_visible = 0;
    for _ in 0..10 {
        phase = phase.next();
        if phase.visible() {
            seen_visible += 1;
        }
    }
    assert_eq!(seen_visible, 5);
}

// =============================================================
// Cancellation
// =============================================================

#[test]
fn schedule_starts_alive_and_cancels_permanently() {
    let owner = Owner::new();
    owner.set();
    let visible = RwSignal::new(false);
    let schedule = BubbleSchedule::start(visible);
    assert!(!schedule.is_cancelled());

    schedule.cancel();
    assert!(schedule.is_cancelled());

    // Idempotent.
    schedule.cancel();
    assert!(schedule.is_cancelled());
}

#[test]
fn cancel_through_clone_is_shared() {
    let owner = Owner::new();
    owner.set();
    let schedule = BubbleSchedule::start(RwSignal::new(false));
    let other = schedule.clone();
    other.cancel();
    assert!(schedule.is_cancelled());
}
