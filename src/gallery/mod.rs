// SPDX-License-Identifier: MPL-2.0
//! Gallery domain: the image catalog, the slide state machine and the
//! autoplay rules. Nothing in here depends on the GUI toolkit.

pub mod autoplay;
pub mod catalog;
pub mod state;

pub use catalog::{Catalog, CatalogError, GalleryImage};
pub use state::{visual_state, Direction, GalleryState, Side, VisualState};
