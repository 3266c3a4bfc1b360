//! Chat widget state: conversation store, visibility derivation, and the
//! bubble prompt schedule.
//!
//! ARCHITECTURE
//! ============
//! Each module isolates a pure, synchronously-testable core; browser
//! concerns (timers, signals, network) stay in `components` and `util`.

pub mod bubble;
pub mod chat;
pub mod visibility;
