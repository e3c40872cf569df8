// SPDX-License-Identifier: MPL-2.0
//! Folder-backed archive extractor.
//!
//! Treats an already unpacked directory as an archive: every supported image
//! below it (recursively) becomes one item of the sequence. Entry names are
//! relative paths with `/` separators, as they would appear inside a ZIP.
//! Pixel dimensions are read from image headers when possible; files whose
//! header cannot be parsed are still listed.

use crate::application::port::{ArchiveError, ArchiveExtractor, ArchiveRecord};
use crate::domain::media::{MediaItem, MediaSequence};
use std::path::Path;

/// Image extensions accepted by the viewer (compared case-insensitively).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// macOS resource-fork directory created by the Finder's "Compress" action.
const MACOS_METADATA_DIR: &str = "__MACOSX";

/// Prefix of AppleDouble sidecar files.
const APPLE_DOUBLE_PREFIX: &str = "._";

/// Extracts images from a plain directory. Passwords are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct FolderExtractor;

impl FolderExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Scans `root` and returns its images as a sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::Io`] if `root` cannot be read and
    /// [`ArchiveError::NoImages`] if nothing displayable was found.
    pub fn scan(&self, root: &Path) -> Result<MediaSequence, ArchiveError> {
        if !root.is_dir() {
            return Err(ArchiveError::Io(format!(
                "{} is not a directory",
                root.display()
            )));
        }

        let mut items = Vec::new();
        collect_images(root, "", &mut items)?;
        items.sort_by_cached_key(|item: &MediaItem| item.name().to_lowercase());

        MediaSequence::new(items).ok_or(ArchiveError::NoImages)
    }
}

impl ArchiveExtractor for FolderExtractor {
    fn extract(
        &self,
        record: &ArchiveRecord,
        _password: Option<&str>,
    ) -> Result<MediaSequence, ArchiveError> {
        self.scan(record.location())
    }
}

fn collect_images(dir: &Path, prefix: &str, items: &mut Vec<MediaItem>) -> Result<(), ArchiveError> {
    let entries = std::fs::read_dir(dir).map_err(|e| ArchiveError::Io(e.to_string()))?;

    for entry in entries {
        let entry = entry.map_err(|e| ArchiveError::Io(e.to_string()))?;
        let path = entry.path();
        let file_name = entry.file_name().to_string_lossy().into_owned();
        let name = format!("{prefix}{file_name}");

        if path.is_dir() {
            if file_name != MACOS_METADATA_DIR {
                collect_images(&path, &format!("{name}/"), items)?;
            }
            continue;
        }

        if !is_displayable_entry(&name) {
            continue;
        }

        let size_bytes = match entry.metadata() {
            Ok(metadata) => metadata.len(),
            Err(err) => {
                eprintln!("[folder] Skipping {}: {err}", path.display());
                continue;
            }
        };
        let item = MediaItem::new(path.to_string_lossy(), name, size_bytes);
        items.push(match image_rs::image_dimensions(&path) {
            Ok((width, height)) => item.with_dimensions(width, height),
            Err(_) => item,
        });
    }
    Ok(())
}

/// Whether an entry name (relative, `/`-separated) is an image worth showing.
#[must_use]
pub fn is_displayable_entry(name: &str) -> bool {
    let is_mac_metadata = name.contains("__MACOSX/")
        || name
            .rsplit('/')
            .next()
            .is_some_and(|base| base.starts_with(APPLE_DOUBLE_PREFIX));
    !is_mac_metadata && has_image_extension(name)
}

fn has_image_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}
