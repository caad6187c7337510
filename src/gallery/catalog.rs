// SPDX-License-Identifier: MPL-2.0
//! The ordered, immutable sequence of images shown by the carousel.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::num::NonZeroUsize;

/// One entry of the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    /// Unique, stable identifier.
    pub id: u32,
    /// Absolute resource locator of the full-size image.
    pub url: String,
    pub title: String,
    pub description: String,
}

impl GalleryImage {
    pub fn new(
        id: u32,
        url: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            url: url.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Why a candidate catalog was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Empty,
    DuplicateId(u32),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "catalog contains no images"),
            CatalogError::DuplicateId(id) => write!(f, "image id {id} appears more than once"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// A validated, non-empty image sequence with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    images: Vec<GalleryImage>,
}

impl Catalog {
    /// Validates `images` and wraps them.
    pub fn new(images: Vec<GalleryImage>) -> Result<Self, CatalogError> {
        if images.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::with_capacity(images.len());
        for image in &images {
            if !seen.insert(image.id) {
                return Err(CatalogError::DuplicateId(image.id));
            }
        }
        Ok(Self { images })
    }

    /// The three cinematic portraits the application ships with.
    #[must_use]
    pub fn builtin() -> Self {
        const BASE: &str = "https://cdn.poehali.dev/projects/85121e15-6b0a-484d-a79c-12f39ac7ab67/files";
        Self {
            images: vec![
                GalleryImage::new(
                    1,
                    format!("{BASE}/9e9f58b3-d0ef-4ab7-96d2-18d9b39c535d.jpg"),
                    "Момент нежности",
                    "Кинематографичный портрет пары",
                ),
                GalleryImage::new(
                    2,
                    format!("{BASE}/59b3e2df-fc87-4ba0-b640-ce68b211a61b.jpg"),
                    "Элегантность",
                    "Драматический портрет в стиле нуар",
                ),
                GalleryImage::new(
                    3,
                    format!("{BASE}/6ca731be-6e50-4567-af35-52000ad1b38a.jpg"),
                    "Утренний кофе",
                    "Интимный момент за чашкой кофе",
                ),
            ],
        }
    }

    /// Number of images. Never zero.
    #[must_use]
    pub fn len(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.images.len()).unwrap_or(NonZeroUsize::MIN)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&GalleryImage> {
        self.images.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GalleryImage> {
        self.images.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len().get(), 3);
        let revalidated = Catalog::new(catalog.iter().cloned().collect());
        assert_eq!(revalidated, Ok(catalog));
    }

    #[test]
    fn builtin_urls_are_https() {
        for image in Catalog::builtin().iter() {
            assert!(image.url.starts_with("https://"), "{}", image.url);
        }
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert_eq!(Catalog::new(Vec::new()), Err(CatalogError::Empty));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let images = vec![
            GalleryImage::new(4, "https://a", "a", ""),
            GalleryImage::new(5, "https://b", "b", ""),
            GalleryImage::new(4, "https://c", "c", ""),
        ];
        assert_eq!(Catalog::new(images), Err(CatalogError::DuplicateId(4)));
    }

    #[test]
    fn single_image_catalog_is_allowed() {
        let catalog = Catalog::new(vec![GalleryImage::new(1, "https://a", "a", "")])
            .expect("one image is enough");
        assert_eq!(catalog.len().get(), 1);
        assert!(catalog.get(1).is_none());
    }
}
