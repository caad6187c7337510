// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the slide state machine to the views, the
//! subscriptions that drive it (autoplay, fullscreen keys, animation) and the
//! async work it starts (slide fetches, downloads).

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::gallery::{Catalog, GalleryState};
use crate::i18n::fluent::I18n;
use crate::media;
use crate::ui::carousel::SlideImage;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use crate::ui::transition::ActiveTransition;
use iced::widget::image;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    catalog: Catalog,
    gallery: GalleryState,
    /// One entry per catalog image, same order.
    slides: Vec<SlideImage>,
    transition: Option<ActiveTransition>,
    /// Clock of the last animation frame.
    now: Instant,
    autoplay_interval: Duration,
    download_dir: PathBuf,
    http: Option<reqwest::Client>,
    window_id: Option<window::Id>,
    theme_mode: ThemeMode,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("gallery", &self.gallery)
            .field("slides", &self.slides.len())
            .field("download_dir", &self.download_dir)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1024.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 900.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants an `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration and builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        Self::with_config(flags, &config, config_warning)
    }

    /// Builds the application from an already loaded configuration and
    /// starts fetching every slide.
    pub fn with_config(
        flags: Flags,
        config: &config::Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), config);
        let mut notifications = notifications::Manager::new();

        if let Some(key) = config_warning {
            notifications.push(Notification::warning(key));
        }

        let catalog = if config.images.is_empty() {
            Catalog::builtin()
        } else {
            match Catalog::new(config.images.clone()) {
                Ok(catalog) => catalog,
                Err(err) => {
                    tracing::warn!("ignoring configured images: {err}");
                    notifications.push(Notification::warning("notification-catalog-invalid"));
                    Catalog::builtin()
                }
            }
        };

        let playing = !flags.paused
            && config
                .slideshow
                .autoplay
                .unwrap_or(config::DEFAULT_AUTOPLAY);
        let fullscreen =
            flags.fullscreen || config.slideshow.start_fullscreen.unwrap_or(false);
        let gallery = GalleryState::new(catalog.len())
            .with_playing(playing)
            .with_fullscreen(fullscreen);

        let http = match media::fetch::client() {
            Ok(client) => Some(client),
            Err(err) => {
                tracing::warn!("HTTP client unavailable: {err}");
                None
            }
        };

        let slides_state = if http.is_some() {
            SlideImage::Loading
        } else {
            SlideImage::Failed
        };
        let slides = vec![slides_state; catalog.len().get()];
        let task = http
            .as_ref()
            .map_or_else(Task::none, |client| fetch_slides(&catalog, client));

        tracing::info!(
            images = catalog.len().get(),
            locale = %i18n.current_locale(),
            playing,
            fullscreen,
            "carousel started"
        );

        let app = App {
            i18n,
            autoplay_interval: config.slideshow.interval(),
            download_dir: paths::get_download_dir(config.download.directory.as_deref()),
            theme_mode: config.general.theme_mode,
            catalog,
            gallery,
            slides,
            transition: None,
            now: Instant::now(),
            http,
            window_id: None,
            notifications,
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.catalog.get(self.gallery.current_index()) {
            Some(image) => format!("{} - {app_name}", image.title),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let autoplay =
            subscription::create_autoplay_subscription(&self.gallery, self.autoplay_interval);
        let keyboard = subscription::create_keyboard_subscription(&self.gallery);
        let window = subscription::create_window_subscription(self.window_id.is_some());
        let toasts =
            subscription::create_notification_subscription(self.notifications.has_notifications());
        let animation = subscription::create_animation_subscription(self.transition.is_some());

        Subscription::batch([autoplay, keyboard, window, toasts, animation])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            catalog: &self.catalog,
            gallery: &mut self.gallery,
            slides: &mut self.slides,
            transition: &mut self.transition,
            now: &mut self.now,
            download_dir: &self.download_dir,
            http: self.http.as_ref(),
            window_id: &mut self.window_id,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Carousel(carousel_message) => {
                update::handle_carousel_message(&mut ctx, carousel_message)
            }
            Message::AutoplayTick(armed_for) => update::handle_autoplay_tick(&mut ctx, armed_for),
            Message::WindowSeen(id) => update::handle_window_seen(&mut ctx, id),
            Message::SlideFetched { index, result } => {
                update::handle_slide_fetched(&mut ctx, index, result)
            }
            Message::DownloadCompleted(result) => {
                update::handle_download_completed(&mut ctx, result)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::AnimationFrame(now) => update::handle_animation_frame(&mut ctx, now),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            catalog: &self.catalog,
            gallery: &self.gallery,
            slides: &self.slides,
            transition: self.transition,
            now: self.now,
            notifications: &self.notifications,
        })
    }

    #[must_use]
    pub fn gallery(&self) -> &GalleryState {
        &self.gallery
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn autoplay_interval(&self) -> Duration {
        self.autoplay_interval
    }
}

/// One fetch task per slide; results arrive as `SlideFetched`.
fn fetch_slides(catalog: &Catalog, client: &reqwest::Client) -> Task<Message> {
    Task::batch(catalog.iter().enumerate().map(|(index, image)| {
        Task::perform(
            media::fetch_bytes(client.clone(), image.url.clone()),
            move |result| Message::SlideFetched {
                index,
                result: result.map(image::Handle::from_bytes),
            },
        )
    }))
}
