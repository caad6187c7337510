// SPDX-License-Identifier: MPL-2.0
//! Remote image access: fetching slides for display and saving them locally.

pub mod download;
pub mod fetch;

pub use download::download_image;
pub use fetch::fetch_bytes;
