// SPDX-License-Identifier: MPL-2.0
//! Window icon.
//!
//! The branding SVG is embedded and rasterized at startup into an RGBA
//! buffer for the title bar. Any failure yields `None` and the platform
//! default icon is used.

use iced::window::{icon, Icon};
use resvg::usvg;

const SVG_SOURCE: &str = include_str!("../assets/branding/iced_carousel.svg");

/// Edge length of the rasterized icon.
const ICON_SIZE: u32 = 128;

/// Rasterizes the branding SVG to a square RGBA icon.
pub fn load_window_icon() -> Option<Icon> {
    let (rgba, size) = rasterize(ICON_SIZE)?;
    icon::from_rgba(rgba, size, size).ok()
}

fn rasterize(size: u32) -> Option<(Vec<u8>, u32)> {
    let tree = match usvg::Tree::from_data(SVG_SOURCE.as_bytes(), &usvg::Options::default()) {
        Ok(tree) => tree,
        Err(err) => {
            tracing::warn!("failed to parse window icon: {err}");
            return None;
        }
    };

    let source = tree.size();
    let transform = tiny_skia::Transform::from_scale(
        size as f32 / source.width(),
        size as f32 / source.height(),
    );

    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Some((pixmap.data().to_vec(), size))
}
