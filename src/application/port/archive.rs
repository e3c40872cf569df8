// SPDX-License-Identifier: MPL-2.0
//! Archive extraction port definition.
//!
//! An [`ArchiveExtractor`] turns a stored archive into the ordered list of
//! images the viewer browses. Format detection, decryption and decompression
//! all live behind this trait.

use super::vault::ArchiveRecord;
use crate::domain::media::MediaSequence;
use std::fmt;

// =============================================================================
// ArchiveError
// =============================================================================

/// Ways extraction can fail. Each variant needs a different reaction from the
/// caller (prompt for a password, report a broken file, report an empty archive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveError {
    /// The archive is encrypted and no password was supplied.
    PasswordRequired,

    /// A password was supplied but does not decrypt the archive.
    WrongPassword,

    /// The data is damaged or the format is not supported.
    CorruptOrUnsupported(String),

    /// The archive opened fine but holds no displayable images.
    NoImages,

    /// The archive could not be read.
    Io(String),
}

impl ArchiveError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ArchiveError::PasswordRequired => "error-archive-password-required",
            ArchiveError::WrongPassword => "error-archive-wrong-password",
            ArchiveError::CorruptOrUnsupported(_) => "error-archive-corrupt",
            ArchiveError::NoImages => "error-archive-no-images",
            ArchiveError::Io(_) => "error-archive-io",
        }
    }

    /// Whether asking the user for a (new) password could resolve the error.
    #[must_use]
    pub fn needs_password(&self) -> bool {
        matches!(
            self,
            ArchiveError::PasswordRequired | ArchiveError::WrongPassword
        )
    }
}

impl fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchiveError::PasswordRequired => write!(f, "Archive is encrypted"),
            ArchiveError::WrongPassword => write!(f, "Incorrect archive password"),
            ArchiveError::CorruptOrUnsupported(msg) => {
                write!(f, "Corrupt or unsupported archive: {msg}")
            }
            ArchiveError::NoImages => write!(f, "No images found in archive"),
            ArchiveError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for ArchiveError {}

// =============================================================================
// ArchiveExtractor Trait
// =============================================================================

/// Port for extracting the images of a stored archive.
///
/// Implementations never return an empty sequence: an archive without images
/// yields [`ArchiveError::NoImages`], so the viewer is only ever opened on a
/// non-empty [`MediaSequence`].
///
/// # Example
///
/// ```ignore
/// use vault_lens::application::port::{ArchiveExtractor, ArchiveRecord};
///
/// fn open(extractor: &impl ArchiveExtractor, record: &ArchiveRecord) {
///     match extractor.extract(record, record.cached_password()) {
///         Ok(sequence) => println!("{} images", sequence.len()),
///         Err(e) if e.needs_password() => println!("ask for password"),
///         Err(e) => eprintln!("Failed to open archive: {e}"),
///     }
/// }
/// ```
pub trait ArchiveExtractor: Send + Sync {
    /// Extracts all images of `record`, in display order.
    ///
    /// # Errors
    ///
    /// Returns an [`ArchiveError`] describing why no sequence could be produced.
    fn extract(
        &self,
        record: &ArchiveRecord,
        password: Option<&str>,
    ) -> Result<MediaSequence, ArchiveError>;
}
