// SPDX-License-Identifier: MPL-2.0
use iced_carousel::app::config::{self, Config, GeneralConfig, SlideshowConfig};
use iced_carousel::gallery::{autoplay, Catalog, Direction, GalleryImage, GalleryState, Side};
use iced_carousel::i18n::fluent::I18n;
use iced_carousel::ui::theming::ThemeMode;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::Dark,
        },
        ..Config::default()
    };
    config::save_to_path(&english, &path).expect("Failed to write config");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("notification-download-success"), "Photo downloaded");

    let russian = Config {
        general: GeneralConfig {
            language: Some("ru".to_string()),
            theme_mode: ThemeMode::Dark,
        },
        ..Config::default()
    };
    config::save_to_path(&russian, &path).expect("Failed to write config");
    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "ru");
    assert_eq!(i18n.tr("notification-download-success"), "Фотография загружена");
}

#[test]
fn cli_language_beats_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    let i18n = I18n::new(Some("ru".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "ru");
}

#[test]
fn configured_catalog_loads_from_toml() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        r#"
[slideshow]
autoplay = false
interval_ms = 250

[[images]]
id = 10
url = "https://example.com/sea.jpg"
title = "Sea"
description = "Waves at dusk"

[[images]]
id = 11
url = "https://example.com/hills.png"
title = "Hills"
description = "Morning fog"
"#,
    )
    .expect("Failed to write config");

    let config = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(config.slideshow.autoplay, Some(false));
    // Clamped to the minimum interval.
    assert_eq!(config.slideshow.interval(), Duration::from_millis(1000));

    let catalog = Catalog::new(config.images).expect("valid catalog");
    assert_eq!(catalog.len().get(), 2);
    assert_eq!(catalog.get(1).map(|image| image.title.as_str()), Some("Hills"));
}

#[test]
fn broken_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "slideshow = [not toml")
        .expect("Failed to write config");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}

#[test]
fn missing_config_is_silent() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config.slideshow, SlideshowConfig::default());
    assert!(warning.is_none());
}

#[test]
fn duplicate_ids_are_rejected() {
    let images = vec![
        GalleryImage::new(1, "https://example.com/a.jpg", "A", ""),
        GalleryImage::new(1, "https://example.com/b.jpg", "B", ""),
    ];
    assert!(Catalog::new(images).is_err());
    assert!(Catalog::new(Vec::new()).is_err());
}

#[test]
fn browsing_the_builtin_catalog() {
    let catalog = Catalog::builtin();
    let mut state = GalleryState::new(catalog.len());

    // Prev from the first slide wraps to the last one, entering from the left.
    state.retreat();
    assert_eq!(state.current_index(), 2);
    assert_eq!(state.direction(), Direction::Prev);
    assert_eq!(state.visual_state(2).entering_from, Some(Side::Left));
    assert_eq!(state.visual_state(0).exiting_to, Some(Side::Right));
    assert_eq!(state.visual_state(1).exiting_to, Some(Side::Left));

    // Next wraps back to the start.
    state.advance();
    assert_eq!(state.current_index(), 0);
    assert_eq!(state.visual_state(2).exiting_to, Some(Side::Left));
    assert_eq!(state.visual_state(1).exiting_to, Some(Side::Right));

    state.jump_to(2);
    assert_eq!(state.direction(), Direction::Next);
    state.jump_to(7);
    assert_eq!(state.current_index(), 2);
}

#[test]
fn manual_navigation_rearms_autoplay() {
    let interval = Duration::from_millis(4000);
    let mut state = GalleryState::new(Catalog::builtin().len());

    let first = autoplay::lease(&state, interval).expect("playing by default");
    state.advance();
    let second = autoplay::lease(&state, interval).expect("still playing");
    assert_ne!(first, second);

    // The tick armed before the manual move is stale.
    assert!(!autoplay::on_tick(&mut state, first.armed_for));
    assert_eq!(state.current_index(), 1);
    assert!(autoplay::on_tick(&mut state, second.armed_for));
    assert_eq!(state.current_index(), 2);

    state.toggle_play();
    assert!(autoplay::lease(&state, interval).is_none());
}
