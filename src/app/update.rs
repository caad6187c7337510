// SPDX-License-Identifier: MPL-2.0
//! Message handlers for `App::update`.
//!
//! Handlers take an [`UpdateContext`] of borrowed application fields so they
//! can be exercised without booting an Iced runtime.

use super::Message;
use crate::error::Error;
use crate::gallery::{autoplay, Catalog, GalleryState};
use crate::media;
use crate::ui::carousel::{self, SlideImage};
use crate::ui::notifications::{self, Notification};
use crate::ui::transition::ActiveTransition;
use iced::widget::image;
use iced::{window, Task};
use std::path::{Path, PathBuf};
use std::time::Instant;

const DOWNLOAD_ERROR_KEY: &str = "notification-download-error";

pub struct UpdateContext<'a> {
    pub catalog: &'a Catalog,
    pub gallery: &'a mut GalleryState,
    pub slides: &'a mut Vec<SlideImage>,
    pub transition: &'a mut Option<ActiveTransition>,
    pub now: &'a mut Instant,
    pub download_dir: &'a Path,
    pub http: Option<&'a reqwest::Client>,
    pub window_id: &'a mut Option<window::Id>,
    pub notifications: &'a mut notifications::Manager,
}

impl UpdateContext<'_> {
    /// Starts a transition if the current slide differs from `from`.
    fn begin_transition_from(&mut self, from: usize) {
        let to = self.gallery.current_index();
        if to == from {
            return;
        }
        let started = Instant::now();
        tracing::debug!(from, to, direction = ?self.gallery.direction(), "slide transition");
        *self.transition = Some(ActiveTransition::new(from, started));
        *self.now = started;
    }
}

pub fn handle_carousel_message(
    ctx: &mut UpdateContext<'_>,
    message: carousel::Message,
) -> Task<Message> {
    let from = ctx.gallery.current_index();

    let task = match message {
        carousel::Message::Previous => {
            ctx.gallery.retreat();
            Task::none()
        }
        carousel::Message::Next => {
            ctx.gallery.advance();
            Task::none()
        }
        carousel::Message::JumpTo(index) => {
            ctx.gallery.jump_to(index);
            Task::none()
        }
        carousel::Message::TogglePlay => {
            ctx.gallery.toggle_play();
            tracing::debug!(playing = ctx.gallery.is_playing(), "autoplay toggled");
            Task::none()
        }
        carousel::Message::ToggleFullscreen => {
            ctx.gallery.toggle_fullscreen();
            window_mode_task(ctx.gallery.is_fullscreen(), ctx.window_id.as_ref())
        }
        carousel::Message::ExitFullscreen => {
            if ctx.gallery.exit_fullscreen() {
                window_mode_task(false, ctx.window_id.as_ref())
            } else {
                Task::none()
            }
        }
        carousel::Message::Download => start_download(ctx),
    };

    ctx.begin_transition_from(from);
    task
}

pub fn handle_autoplay_tick(ctx: &mut UpdateContext<'_>, armed_for: usize) -> Task<Message> {
    let from = ctx.gallery.current_index();
    if autoplay::on_tick(ctx.gallery, armed_for) {
        ctx.begin_transition_from(from);
    }
    Task::none()
}

pub fn handle_window_seen(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    if ctx.window_id.is_some() {
        return Task::none();
    }
    *ctx.window_id = Some(id);

    // Fullscreen requested at startup takes effect once the window exists.
    if ctx.gallery.is_fullscreen() {
        window_mode_task(true, Some(&id))
    } else {
        Task::none()
    }
}

pub fn handle_slide_fetched(
    ctx: &mut UpdateContext<'_>,
    index: usize,
    result: Result<image::Handle, Error>,
) -> Task<Message> {
    let Some(slot) = ctx.slides.get_mut(index) else {
        return Task::none();
    };
    *slot = match result {
        Ok(handle) => SlideImage::Ready(handle),
        Err(err) => {
            tracing::warn!(index, "failed to fetch slide: {err}");
            SlideImage::Failed
        }
    };
    Task::none()
}

pub fn handle_download_completed(
    ctx: &mut UpdateContext<'_>,
    result: Result<PathBuf, Error>,
) -> Task<Message> {
    match result {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "download reported");
            ctx.notifications.clear_key(DOWNLOAD_ERROR_KEY);
            ctx.notifications
                .push(Notification::success("notification-download-success"));
        }
        Err(err) => {
            tracing::warn!("download failed: {err}");
            ctx.notifications
                .push(Notification::error(DOWNLOAD_ERROR_KEY).with_error(&err));
        }
    }
    Task::none()
}

pub fn handle_animation_frame(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    *ctx.now = now;
    if ctx
        .transition
        .is_some_and(|transition| transition.is_finished(now))
    {
        *ctx.transition = None;
    }
    Task::none()
}

fn start_download(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(image) = ctx.catalog.get(ctx.gallery.current_index()).cloned() else {
        return Task::none();
    };
    let Some(client) = ctx.http.cloned() else {
        ctx.notifications.push(
            Notification::error(DOWNLOAD_ERROR_KEY)
                .with_error(&Error::Network("HTTP client unavailable".into())),
        );
        return Task::none();
    };

    tracing::debug!(id = image.id, url = %image.url, "starting download");
    let dir = ctx.download_dir.to_path_buf();
    Task::perform(
        media::download_image(client, image, dir),
        Message::DownloadCompleted,
    )
}

/// Switches the OS window mode, when the window id is known.
fn window_mode_task(fullscreen: bool, window_id: Option<&window::Id>) -> Task<Message> {
    let Some(window_id) = window_id else {
        return Task::none();
    };

    let mode = if fullscreen {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    window::set_mode(*window_id, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Severity;
    use std::time::Duration;

    struct Fixture {
        catalog: Catalog,
        gallery: GalleryState,
        slides: Vec<SlideImage>,
        transition: Option<ActiveTransition>,
        now: Instant,
        download_dir: PathBuf,
        window_id: Option<window::Id>,
        notifications: notifications::Manager,
    }

    impl Fixture {
        fn new() -> Self {
            let catalog = Catalog::builtin();
            let gallery = GalleryState::new(catalog.len());
            let slides = vec![SlideImage::Loading; catalog.len().get()];
            Self {
                catalog,
                gallery,
                slides,
                transition: None,
                now: Instant::now(),
                download_dir: PathBuf::from("."),
                window_id: None,
                notifications: notifications::Manager::new(),
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                catalog: &self.catalog,
                gallery: &mut self.gallery,
                slides: &mut self.slides,
                transition: &mut self.transition,
                now: &mut self.now,
                download_dir: &self.download_dir,
                http: None,
                window_id: &mut self.window_id,
                notifications: &mut self.notifications,
            }
        }

        fn send(&mut self, message: carousel::Message) {
            let _ = handle_carousel_message(&mut self.ctx(), message);
        }
    }

    #[test]
    fn failed_download_emits_exactly_one_error_toast() {
        let mut fixture = Fixture::new();
        fixture.gallery = fixture.gallery.with_fullscreen(true);
        fixture.send(carousel::Message::Next);
        let before = fixture.gallery;

        let _ = handle_download_completed(
            &mut fixture.ctx(),
            Err(Error::Network("connection refused".into())),
        );

        let toasts: Vec<&Notification> = fixture.notifications.visible().collect();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].severity(), Severity::Error);
        assert_eq!(toasts[0].message_key(), DOWNLOAD_ERROR_KEY);
        assert_eq!(fixture.gallery, before);
    }

    #[test]
    fn successful_download_replaces_stale_error() {
        let mut fixture = Fixture::new();
        let _ = handle_download_completed(&mut fixture.ctx(), Err(Error::Http(404)));
        let _ = handle_download_completed(
            &mut fixture.ctx(),
            Ok(PathBuf::from("/tmp/Силуэт.jpg")),
        );

        let keys: Vec<&str> = fixture
            .notifications
            .visible()
            .map(Notification::message_key)
            .collect();
        assert_eq!(keys, vec!["notification-download-success"]);
    }

    #[test]
    fn download_without_client_reports_error_and_keeps_state() {
        let mut fixture = Fixture::new();
        let before = fixture.gallery;
        fixture.send(carousel::Message::Download);
        assert_eq!(fixture.notifications.visible_count(), 1);
        assert_eq!(fixture.gallery, before);
    }

    #[test]
    fn escape_twice_leaves_fullscreen_once() {
        let mut fixture = Fixture::new();
        fixture.send(carousel::Message::ToggleFullscreen);
        assert!(fixture.gallery.is_fullscreen());

        fixture.send(carousel::Message::ExitFullscreen);
        assert!(!fixture.gallery.is_fullscreen());
        let after_first = fixture.gallery;

        fixture.send(carousel::Message::ExitFullscreen);
        assert_eq!(fixture.gallery, after_first);
    }

    #[test]
    fn navigation_starts_transition_from_previous_slide() {
        let mut fixture = Fixture::new();
        fixture.send(carousel::Message::Previous);
        assert_eq!(fixture.gallery.current_index(), 2);
        assert_eq!(fixture.transition.map(|t| t.from()), Some(0));
    }

    #[test]
    fn toggles_do_not_start_transitions() {
        let mut fixture = Fixture::new();
        fixture.send(carousel::Message::TogglePlay);
        fixture.send(carousel::Message::JumpTo(0));
        assert!(fixture.transition.is_none());
        assert!(!fixture.gallery.is_playing());
    }

    #[test]
    fn stale_autoplay_tick_is_ignored() {
        let mut fixture = Fixture::new();
        fixture.send(carousel::Message::JumpTo(2));
        let _ = handle_autoplay_tick(&mut fixture.ctx(), 0);
        assert_eq!(fixture.gallery.current_index(), 2);

        let _ = handle_autoplay_tick(&mut fixture.ctx(), 2);
        assert_eq!(fixture.gallery.current_index(), 0);
    }

    #[test]
    fn animation_frame_clears_finished_transition() {
        let mut fixture = Fixture::new();
        fixture.send(carousel::Message::Next);
        let started = fixture.now;

        let _ = handle_animation_frame(&mut fixture.ctx(), started + Duration::from_millis(100));
        assert!(fixture.transition.is_some());

        let _ = handle_animation_frame(&mut fixture.ctx(), started + Duration::from_secs(1));
        assert!(fixture.transition.is_none());
    }

    #[test]
    fn slide_fetch_failure_marks_slide_failed() {
        let mut fixture = Fixture::new();
        let _ = handle_slide_fetched(&mut fixture.ctx(), 1, Err(Error::Http(500)));
        let _ = handle_slide_fetched(
            &mut fixture.ctx(),
            0,
            Ok(image::Handle::from_bytes(vec![0_u8; 4])),
        );
        let _ = handle_slide_fetched(&mut fixture.ctx(), 99, Err(Error::Http(500)));

        assert!(fixture.slides[0].is_ready());
        assert!(matches!(fixture.slides[1], SlideImage::Failed));
        assert!(matches!(fixture.slides[2], SlideImage::Loading));
    }
}
