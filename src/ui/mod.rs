// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: each view
//! function borrows a `ViewContext` and emits `carousel::Message` values that
//! the application routes to the slide state machine.
//!
//! - [`carousel`] - Slide stage and fullscreen overlay
//! - [`controls`] - Dot indicators, thumbnails, header and counter
//! - [`transition`] - Slide transition timing and layer presentation
//! - [`notifications`] - Toast notifications
//! - [`icons`] - Embedded SVG icons by symbolic name
//! - [`styles`] - Centralized widget styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode

pub mod carousel;
pub mod controls;
pub mod design_tokens;
pub mod icons;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod transition;
