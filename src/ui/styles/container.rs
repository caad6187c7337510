// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Near-black page behind everything.
pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_950)),
        text_color: Some(palette::GRAY_50),
        ..Default::default()
    }
}

/// The framed slide area.
pub fn stage(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::XL,
        ..Default::default()
    }
}

/// Black backdrop of the fullscreen overlay.
pub fn fullscreen(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLACK)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Caption band at the bottom of a slide.
pub fn caption(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_uses_near_black_background() {
        let style = page(&Theme::Light);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::GRAY_950))
        );
    }

    #[test]
    fn caption_band_is_translucent() {
        match caption(&Theme::Dark).background {
            Some(Background::Color(color)) => assert!(color.a < 1.0),
            _ => panic!("expected a solid background"),
        }
    }
}
