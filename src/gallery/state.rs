// SPDX-License-Identifier: MPL-2.0
//! Slide state machine.
//!
//! `GalleryState` owns the current index, the direction of the last move,
//! the autoplay flag and the fullscreen flag. Every transition is a total
//! function: the index is kept inside `[0, len)` with modular arithmetic and
//! `direction` only ever influences which side a slide animates from.

use std::num::NonZeroUsize;

/// Sense of the last move, used to pick the transition animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Next,
    Prev,
}

/// Horizontal side a slide slides in from or out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Presentation state of one slide relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualState {
    /// The slide is the one on stage.
    pub active: bool,
    /// Side the active slide arrives from.
    pub entering_from: Option<Side>,
    /// Side an inactive slide leaves toward (or waits on).
    pub exiting_to: Option<Side>,
}

/// Computes how `slide` should be presented while `current` is on stage.
///
/// Going forward, the slide just before `current` leaves to the left and
/// every other inactive slide waits on the right. Going backward the picture
/// is mirrored: the slide just after `current` leaves to the right and the
/// rest wait on the left.
#[must_use]
pub fn visual_state(
    slide: usize,
    current: usize,
    direction: Direction,
    len: NonZeroUsize,
) -> VisualState {
    let len = len.get();

    if slide == current {
        let entering_from = match direction {
            Direction::Next => Side::Right,
            Direction::Prev => Side::Left,
        };
        return VisualState {
            active: true,
            entering_from: Some(entering_from),
            exiting_to: None,
        };
    }

    let exiting_to = match direction {
        Direction::Next if slide == (current + len - 1) % len => Side::Left,
        Direction::Next => Side::Right,
        Direction::Prev if slide == (current + 1) % len => Side::Right,
        Direction::Prev => Side::Left,
    };

    VisualState {
        active: false,
        entering_from: None,
        exiting_to: Some(exiting_to),
    }
}

/// Transient view state of the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryState {
    current: usize,
    len: NonZeroUsize,
    direction: Direction,
    playing: bool,
    fullscreen: bool,
}

impl GalleryState {
    /// Starts on the first slide, moving forward, playing, windowed.
    #[must_use]
    pub fn new(len: NonZeroUsize) -> Self {
        Self {
            current: 0,
            len,
            direction: Direction::Next,
            playing: true,
            fullscreen: false,
        }
    }

    /// Sets whether autoplay starts enabled.
    #[must_use]
    pub fn with_playing(mut self, playing: bool) -> Self {
        self.playing = playing;
        self
    }

    /// Sets whether the fullscreen overlay starts open.
    #[must_use]
    pub fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    /// Index of the slide on stage, always below [`len`](Self::len).
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> NonZeroUsize {
        self.len
    }

    /// Sense of the last move.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the autoplay timer should be armed.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether the fullscreen overlay is shown.
    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Moves one slide forward, wrapping after the last one.
    pub fn advance(&mut self) {
        self.direction = Direction::Next;
        self.current = (self.current + 1) % self.len.get();
    }

    /// Moves one slide backward, wrapping before the first one.
    pub fn retreat(&mut self) {
        let len = self.len.get();
        self.direction = Direction::Prev;
        self.current = (self.current + len - 1) % len;
    }

    /// Jumps straight to `index`.
    ///
    /// The direction compares raw positions, so wrapping from the last slide
    /// to the first one is reported as `Prev`. Out-of-range indices are
    /// ignored.
    pub fn jump_to(&mut self, index: usize) {
        if index >= self.len.get() {
            tracing::debug!(index, len = self.len.get(), "ignoring out-of-range jump");
            return;
        }
        self.direction = if index > self.current {
            Direction::Next
        } else {
            Direction::Prev
        };
        self.current = index;
    }

    /// Pauses a playing carousel or resumes a paused one.
    ///
    /// ```
    /// use iced_carousel::gallery::GalleryState;
    /// use std::num::NonZeroUsize;
    ///
    /// let mut state = GalleryState::new(NonZeroUsize::MIN);
    /// state.toggle_play();
    /// assert!(!state.is_playing());
    /// state.toggle_play();
    /// assert!(state.is_playing());
    /// ```
    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
    }

    /// Opens or closes the fullscreen overlay.
    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }

    /// Leaves fullscreen. Returns `false` when it was not active.
    pub fn exit_fullscreen(&mut self) -> bool {
        std::mem::replace(&mut self.fullscreen, false)
    }

    /// Visual state of `slide` given the current position.
    #[must_use]
    pub fn visual_state(&self, slide: usize) -> VisualState {
        visual_state(slide, self.current, self.direction, self.len)
    }
}
