// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Round translucent button laid over the slide (arrows, play/pause, close).
///
/// Turns gold on hover.
pub fn overlay(alpha_normal: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => palette::GOLD_500,
            button::Status::Pressed => Color {
                a: opacity::OVERLAY_PRESSED,
                ..palette::GOLD_500
            },
            _ => Color {
                a: alpha_normal,
                ..BLACK
            },
        };
        let text_color = match status {
            button::Status::Hovered | button::Status::Pressed => BLACK,
            _ => WHITE,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Dot indicator: a gold pill when active, a faint white dot otherwise.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = if active {
            palette::GOLD_500
        } else {
            let a = match status {
                button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_MEDIUM,
                _ => opacity::OVERLAY_SUBTLE,
            };
            Color { a, ..WHITE }
        };

        button::Style {
            background: Some(Background::Color(color)),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Thumbnail frame: gold ring around the active slide.
pub fn thumbnail(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, _status: button::Status| button::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: WHITE,
        border: Border {
            color: if active {
                palette::GOLD_500
            } else {
                Color::TRANSPARENT
            },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
