// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

/// One displayable item extracted from an archive.
///
/// # Example
///
/// ```
/// use vault_lens::domain::media::MediaItem;
///
/// let item = MediaItem::new("/tmp/vault/cover.png", "cover.png", 2048);
/// assert_eq!(item.name(), "cover.png");
/// assert_eq!(item.size_bytes(), 2048);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    /// Resolvable location of the image data (path or URL).
    location: String,
    /// Display name, usually the entry name inside the archive.
    name: String,
    /// Size of the image data in bytes.
    size_bytes: u64,
    /// Pixel size, when the extractor could read it from the image header.
    dimensions: Option<(u32, u32)>,
}

impl MediaItem {
    #[must_use]
    pub fn new(location: impl Into<String>, name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            location: location.into(),
            name: name.into(),
            size_bytes,
            dimensions: None,
        }
    }

    #[must_use]
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.dimensions = Some((width, height));
        self
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    #[must_use]
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.dimensions
    }
}

/// Ordered, non-empty list of media items for one viewing session.
///
/// Emptiness is rejected at construction, so every index computed modulo
/// [`MediaSequence::len`] is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSequence {
    items: Vec<MediaItem>,
}

impl MediaSequence {
    /// Builds a sequence, returning `None` when `items` is empty.
    #[must_use]
    pub fn new(items: Vec<MediaItem>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }

    /// Number of items; never zero.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Item at `index`, wrapping out-of-range indices.
    #[must_use]
    pub fn get_wrapped(&self, index: usize) -> &MediaItem {
        &self.items[index % self.items.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &MediaItem> {
        self.items.iter()
    }

    /// Total size of all items in bytes.
    #[must_use]
    pub fn total_size_bytes(&self) -> u64 {
        self.items.iter().map(MediaItem::size_bytes).sum()
    }
}
