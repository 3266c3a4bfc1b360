//! Bubble prompt scheduler.
//!
//! DESIGN
//! ======
//! The hint bubble follows a fixed timeline: hidden for an initial 3 s,
//! visible for 4 s, hidden for 3 s, visible for 4 s, and so on (a 7-second
//! steady-state period). `BubblePhase` is the pure transition table; the
//! async driver in `BubbleSchedule::start` merely sleeps and applies it.
//!
//! Cancellation is permanent for the component's lifetime: the first open
//! of the chat (and component teardown) flips the shared alive flag, and
//! the driver exits at its next wake-up without emitting another visible
//! transition. Nothing is persisted across reloads.

#[cfg(test)]
#[path = "bubble_test.rs"]
mod bubble_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use leptos::prelude::RwSignal;

/// Delay before the bubble first appears.
pub const INITIAL_DELAY: Duration = Duration::from_secs(3);
/// How long each appearance stays on screen.
pub const VISIBLE_WINDOW: Duration = Duration::from_secs(4);
/// Pause between appearances.
pub const HIDDEN_PAUSE: Duration = Duration::from_secs(3);

/// Phase of the bubble timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BubblePhase {
    /// Initial hidden stretch after mount.
    InitialDelay,
    /// Bubble shown.
    Visible,
    /// Hidden pause between repeats.
    Hidden,
}

impl BubblePhase {
    /// Dwell time spent in this phase before transitioning.
    #[must_use]
    pub fn dwell(self) -> Duration {
        match self {
            Self::InitialDelay => INITIAL_DELAY,
            Self::Visible => VISIBLE_WINDOW,
            Self::Hidden => HIDDEN_PAUSE,
        }
    }

    /// Whether the bubble is shown during this phase.
    #[must_use]
    pub fn visible(self) -> bool {
        matches!(self, Self::Visible)
    }

    /// Phase entered when the dwell expires. Repeats indefinitely.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::InitialDelay | Self::Hidden => Self::Visible,
            Self::Visible => Self::Hidden,
        }
    }
}

/// Cancellable handle owning the repeating bubble schedule.
///
/// Clones share one alive flag, so any clone can cancel the schedule. The
/// component keeps one clone for the open handler and hands another to
/// `on_cleanup`.
#[derive(Clone)]
pub struct BubbleSchedule {
    alive: Arc<AtomicBool>,
}

impl BubbleSchedule {
    /// Spawn the timer loop driving `visible`. On the server this returns
    /// an inert handle: the schedule only runs in the browser.
    #[must_use]
    pub fn start(visible: RwSignal<bool>) -> Self {
        let schedule = Self { alive: Arc::new(AtomicBool::new(true)) };

        #[cfg(feature = "hydrate")]
        {
            use leptos::prelude::Set;

            let alive = Arc::clone(&schedule.alive);
            leptos::task::spawn_local(async move {
                let mut phase = BubblePhase::InitialDelay;
                loop {
                    gloo_timers::future::sleep(phase.dwell()).await;
                    if !alive.load(Ordering::Relaxed) {
                        break;
                    }
                    phase = phase.next();
                    visible.set(phase.visible());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = visible;
        }

        schedule
    }

    /// Tear the schedule down. Idempotent; no visible transition is ever
    /// emitted after this returns.
    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    /// Whether the schedule has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        !self.alive.load(Ordering::Relaxed)
    }
}
