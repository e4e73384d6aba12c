// SPDX-License-Identifier: MPL-2.0
//! The fixed catalog of images the gallery can display.
//!
//! Images ship inside the binary: the files under `assets/images/` are
//! embedded at compile time and the display order is the hard-coded list
//! below. An image is identified by its asset file name, which is unique
//! within the embedded folder.

use iced::widget::image::Handle;
use rust_embed::RustEmbed;
use std::fmt;

#[derive(RustEmbed)]
#[folder = "assets/images/"]
struct BundledImages;

/// File names of the bundled images, in display order.
const BUNDLED_IMAGES: &[&str] = &[
    "nature1.png",
    "nature2.png",
    "nature3.png",
    "nature4.png",
    "nature5.png",
];

/// Identifier of a catalog image: the bundled asset's file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(&'static str);

impl ImageId {
    /// The asset file name, also used in the window title.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// One catalog entry: an identifier plus the toolkit handle holding the
/// encoded bytes. Decoding is owned by the renderer's image pipeline.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    id: ImageId,
    handle: Handle,
}

impl CatalogEntry {
    #[must_use]
    pub fn id(&self) -> ImageId {
        self.id
    }

    /// Handles are reference-counted, so cloning one is cheap.
    #[must_use]
    pub fn handle(&self) -> Handle {
        self.handle.clone()
    }
}

/// Ordered, immutable sequence of the displayable images.
///
/// Fixed at construction; the only operations are length and lookup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Builds the catalog from the bundled assets.
    ///
    /// A listed file missing from the embedded folder is skipped with a
    /// warning instead of aborting startup, so a stale entry in
    /// `BUNDLED_IMAGES` degrades to a shorter catalog.
    #[must_use]
    pub fn bundled() -> Self {
        let entries = BUNDLED_IMAGES
            .iter()
            .copied()
            .filter_map(|name| match BundledImages::get(name) {
                Some(file) => Some(CatalogEntry {
                    id: ImageId(name),
                    handle: Handle::from_bytes(file.data.into_owned()),
                }),
                None => {
                    tracing::warn!(asset = name, "bundled image missing from embedded assets");
                    None
                }
            })
            .collect();

        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Positional lookup.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    /// Position of the first entry with the given identifier.
    #[must_use]
    pub fn position(&self, id: ImageId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }
}
