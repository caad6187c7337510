// SPDX-License-Identifier: MPL-2.0
//! `iced_carousel` is a desktop image carousel built with the Iced GUI framework.
//!
//! It cycles through a small catalog of remote photographs with captions,
//! advances on a timer, offers arrow, dot, thumbnail and keyboard navigation,
//! saves the current photo to disk, and has a fullscreen presentation mode.

pub mod app;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod icon;
pub mod media;
pub mod ui;
