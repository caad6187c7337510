// SPDX-License-Identifier: MPL-2.0
//! Subscriptions for the application.
//!
//! Every subscription here is declared from state on each update, so it
//! exists exactly as long as the state that needs it: the autoplay interval
//! while playing, the key listener while fullscreen, the frame clock while a
//! transition runs.

use super::Message;
use crate::gallery::{autoplay, GalleryState};
use crate::ui::carousel;
use crate::ui::notifications::NotificationMessage;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Event, Subscription};
use std::time::Duration;

/// Toast expiry check period.
const NOTIFICATION_TICK: Duration = Duration::from_millis(100);

/// Autoplay interval keyed on the slide it was armed for.
///
/// A new current index yields a new identity, so Iced drops the running
/// interval and starts a fresh one; pausing yields no subscription at all.
pub fn create_autoplay_subscription(
    state: &GalleryState,
    interval: Duration,
) -> Subscription<Message> {
    match autoplay::lease(state, interval) {
        Some(lease) => time::every(lease.interval)
            .with(lease)
            .map(|(lease, _instant)| Message::AutoplayTick(lease.armed_for)),
        None => Subscription::none(),
    }
}

/// Whether the arrow/Escape listener should exist for `state`.
#[must_use]
pub fn keyboard_active(state: &GalleryState) -> bool {
    state.is_fullscreen()
}

/// Arrow and Escape keys, only while the fullscreen overlay is up.
pub fn create_keyboard_subscription(state: &GalleryState) -> Subscription<Message> {
    if !keyboard_active(state) {
        return Subscription::none();
    }

    event::listen_with(|event, status, _window_id| {
        if !matches!(status, event::Status::Ignored) {
            return None;
        }
        match event {
            Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                key_to_message(&key).map(Message::Carousel)
            }
            _ => None,
        }
    })
}

/// Maps a pressed key to a carousel action.
#[must_use]
pub fn key_to_message(key: &Key) -> Option<carousel::Message> {
    match key {
        Key::Named(Named::ArrowLeft) => Some(carousel::Message::Previous),
        Key::Named(Named::ArrowRight) => Some(carousel::Message::Next),
        Key::Named(Named::Escape) => Some(carousel::Message::ExitFullscreen),
        _ => None,
    }
}

/// Captures the window id from the first window event.
pub fn create_window_subscription(window_known: bool) -> Subscription<Message> {
    if window_known {
        return Subscription::none();
    }

    event::listen_with(|event, _status, window_id| match event {
        Event::Window(_) => Some(Message::WindowSeen(window_id)),
        _ => None,
    })
}

/// Periodic tick for toast auto-dismiss, only while toasts exist.
pub fn create_notification_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(NOTIFICATION_TICK)
            .map(|now| Message::Notification(NotificationMessage::Tick(now)))
    } else {
        Subscription::none()
    }
}

/// Frame clock driving the slide transition.
pub fn create_animation_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        window::frames().map(Message::AnimationFrame)
    } else {
        Subscription::none()
    }
}
