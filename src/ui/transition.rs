// SPDX-License-Identifier: MPL-2.0
//! Slide transition timing and per-layer presentation.
//!
//! A transition starts whenever the current index changes. While it runs,
//! two layers are drawn: the outgoing slide easing toward the side given by
//! its [`VisualState::exiting_to`] and the incoming slide easing in from
//! [`VisualState::entering_from`].

use crate::app::config::{INACTIVE_SLIDE_SCALE, TRANSITION_DURATION, TRANSITION_OFFSET_PX};
use crate::gallery::{Side, VisualState};
use std::time::Instant;

/// A running slide change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveTransition {
    from: usize,
    started: Instant,
}

impl ActiveTransition {
    #[must_use]
    pub fn new(from: usize, started: Instant) -> Self {
        Self { from, started }
    }

    /// Slide that was on stage before the change.
    #[must_use]
    pub fn from(&self) -> usize {
        self.from
    }

    /// Linear progress in `[0, 1]` at `now`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / TRANSITION_DURATION.as_secs_f32()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Cubic ease-in-out.
#[must_use]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// How one slide layer is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerStyle {
    pub opacity: f32,
    /// Horizontal shift in logical pixels, positive to the right.
    pub offset_x: f32,
    pub scale: f32,
}

impl LayerStyle {
    pub const ON_STAGE: Self = Self {
        opacity: 1.0,
        offset_x: 0.0,
        scale: 1.0,
    };

    fn off_stage(side: Option<Side>) -> Self {
        let offset_x = match side {
            Some(Side::Left) => -TRANSITION_OFFSET_PX,
            Some(Side::Right) => TRANSITION_OFFSET_PX,
            None => 0.0,
        };
        Self {
            opacity: 0.0,
            offset_x,
            scale: INACTIVE_SLIDE_SCALE,
        }
    }

    fn lerp(self, to: Self, t: f32) -> Self {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            opacity: mix(self.opacity, to.opacity),
            offset_x: mix(self.offset_x, to.offset_x),
            scale: mix(self.scale, to.scale),
        }
    }
}

/// Presentation of a slide `eased` of the way through a transition.
///
/// At `eased == 1.0` this is the resting layout: the active slide on stage,
/// every other slide invisible and shifted toward its side.
#[must_use]
pub fn layer_style(visual: VisualState, eased: f32) -> LayerStyle {
    let t = eased.clamp(0.0, 1.0);
    if visual.active {
        LayerStyle::off_stage(visual.entering_from).lerp(LayerStyle::ON_STAGE, t)
    } else {
        LayerStyle::ON_STAGE.lerp(LayerStyle::off_stage(visual.exiting_to), t)
    }
}
