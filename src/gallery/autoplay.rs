// SPDX-License-Identifier: MPL-2.0
//! Autoplay timer rules.
//!
//! The interval itself is an Iced subscription (see `app::subscription`).
//! This module decides *whether* a timer is armed and *which* one: the
//! returned [`Lease`] is hashed into the subscription identity, so a new
//! current index tears the old interval down and starts a fresh one, and
//! pausing drops it altogether.

use super::state::GalleryState;
use std::time::Duration;

/// Identity of one armed autoplay interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lease {
    /// Slide that was current when the interval was armed.
    pub armed_for: usize,
    pub interval: Duration,
}

/// Returns the timer that should be running for `state`, if any.
#[must_use]
pub fn lease(state: &GalleryState, interval: Duration) -> Option<Lease> {
    state.is_playing().then(|| Lease {
        armed_for: state.current_index(),
        interval,
    })
}

/// Applies a timer tick. Ticks from a lease that no longer matches the
/// state (paused since, or index changed) are dropped.
///
/// Returns `true` when the carousel advanced.
pub fn on_tick(state: &mut GalleryState, armed_for: usize) -> bool {
    if !state.is_playing() || state.current_index() != armed_for {
        tracing::debug!(armed_for, current = state.current_index(), "dropping stale autoplay tick");
        return false;
    }
    state.advance();
    true
}
