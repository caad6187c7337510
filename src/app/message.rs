// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::carousel;
use crate::ui::notifications;
use iced::widget::image;
use iced::window;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Clicks and key presses on the carousel.
    Carousel(carousel::Message),
    /// Autoplay interval fired; carries the index the interval was armed for.
    AutoplayTick(usize),
    /// First window event seen, used to switch the window mode.
    WindowSeen(window::Id),
    SlideFetched {
        index: usize,
        result: Result<image::Handle, Error>,
    },
    DownloadCompleted(Result<PathBuf, Error>),
    Notification(notifications::NotificationMessage),
    /// Redraw request while a slide transition runs.
    AnimationFrame(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ru`, `en-US`).
    pub lang: Option<String>,
    /// Start with autoplay paused, whatever the config says.
    pub paused: bool,
    /// Start in fullscreen, whatever the config says.
    pub fullscreen: bool,
}
