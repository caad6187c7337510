// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Slideshow**: Autoplay interval and its bounds
//! - **Transition**: Slide change animation timing and offsets
//! - **Network**: HTTP client timeouts

use std::time::Duration;

// ==========================================================================
// Slideshow Defaults
// ==========================================================================

/// Default delay between two automatic advances (milliseconds).
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 4000;

/// Minimum autoplay interval accepted from the config file.
pub const MIN_AUTOPLAY_INTERVAL_MS: u64 = 1000;

/// Maximum autoplay interval accepted from the config file.
pub const MAX_AUTOPLAY_INTERVAL_MS: u64 = 60_000;

/// Whether the slideshow starts playing on launch.
pub const DEFAULT_AUTOPLAY: bool = true;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Duration of the cross-fade between two slides.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(700);

/// Horizontal offset (logical pixels) of slides waiting off-stage.
pub const TRANSITION_OFFSET_PX: f32 = 32.0;

/// Scale of slides waiting off-stage.
pub const INACTIVE_SLIDE_SCALE: f32 = 0.95;

// ==========================================================================
// Network Defaults
// ==========================================================================

/// Connect timeout of the shared HTTP client.
pub const HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum number of redirects followed when fetching an image.
pub const HTTP_MAX_REDIRECTS: usize = 10;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_AUTOPLAY_INTERVAL_MS > 0);
    assert!(MAX_AUTOPLAY_INTERVAL_MS >= MIN_AUTOPLAY_INTERVAL_MS);
    assert!(DEFAULT_AUTOPLAY_INTERVAL_MS >= MIN_AUTOPLAY_INTERVAL_MS);
    assert!(DEFAULT_AUTOPLAY_INTERVAL_MS <= MAX_AUTOPLAY_INTERVAL_MS);

    assert!(TRANSITION_OFFSET_PX > 0.0);
    assert!(INACTIVE_SLIDE_SCALE > 0.0 && INACTIVE_SLIDE_SCALE < 1.0);
};
