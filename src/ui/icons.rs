// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are requested by symbolic name plus a pixel size. The SVG sources
//! are embedded at compile time via `include_bytes!` and the handles are
//! cached using `OnceLock`, so each icon is parsed once and reused thereafter.
//! Glyphs are drawn with a black stroke and recolored at render time.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons::{self, Icon};
//!
//! let next = button(icons::sized(Icon::ChevronRight, 24.0, Color::WHITE));
//! ```

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Defines a function returning the cached handle of one embedded SVG.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        fn $name() -> Handle {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/icons/",
                $filename
            ));
            HANDLE.get_or_init(|| Handle::from_memory(DATA)).clone()
        }
    };
}

define_icon!(chevron_left, "chevron_left.svg", "Chevron pointing left.");
define_icon!(chevron_right, "chevron_right.svg", "Chevron pointing right.");
define_icon!(pause, "pause.svg", "Two vertical bars.");
define_icon!(play, "play.svg", "Triangle pointing right.");
define_icon!(
    maximize_2,
    "maximize_2.svg",
    "Two diagonal arrows pointing to opposite corners."
);
define_icon!(download, "download.svg", "Arrow into a tray.");
define_icon!(x, "x.svg", "Diagonal cross.");
define_icon!(circle_check, "circle_check.svg", "Check mark in a circle.");
define_icon!(
    alert_triangle,
    "alert_triangle.svg",
    "Exclamation mark in a triangle."
);
define_icon!(info, "info.svg", "Letter i in a circle.");
define_icon!(image, "image.svg", "Framed landscape, used as slide placeholder.");

/// Symbolic icon names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    ChevronLeft,
    ChevronRight,
    Pause,
    Play,
    Maximize2,
    Download,
    X,
    CircleCheck,
    AlertTriangle,
    Info,
    Image,
}

impl Icon {
    pub const ALL: [Icon; 11] = [
        Icon::ChevronLeft,
        Icon::ChevronRight,
        Icon::Pause,
        Icon::Play,
        Icon::Maximize2,
        Icon::Download,
        Icon::X,
        Icon::CircleCheck,
        Icon::AlertTriangle,
        Icon::Info,
        Icon::Image,
    ];

    /// The symbolic name the icon is requested by.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Icon::ChevronLeft => "ChevronLeft",
            Icon::ChevronRight => "ChevronRight",
            Icon::Pause => "Pause",
            Icon::Play => "Play",
            Icon::Maximize2 => "Maximize2",
            Icon::Download => "Download",
            Icon::X => "X",
            Icon::CircleCheck => "CircleCheck",
            Icon::AlertTriangle => "AlertTriangle",
            Icon::Info => "Info",
            Icon::Image => "Image",
        }
    }

    /// Looks an icon up by its symbolic name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.name() == name)
    }

    fn handle(self) -> Handle {
        match self {
            Icon::ChevronLeft => chevron_left(),
            Icon::ChevronRight => chevron_right(),
            Icon::Pause => pause(),
            Icon::Play => play(),
            Icon::Maximize2 => maximize_2(),
            Icon::Download => download(),
            Icon::X => x(),
            Icon::CircleCheck => circle_check(),
            Icon::AlertTriangle => alert_triangle(),
            Icon::Info => info(),
            Icon::Image => image(),
        }
    }
}

/// Renders `icon` as a square of `size` logical pixels, stroked with `color`.
pub fn sized<'a>(icon: Icon, size: f32, color: Color) -> Svg<'a> {
    Svg::new(icon.handle())
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_theme: &Theme, _status| svg::Style { color: Some(color) })
}
