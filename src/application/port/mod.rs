// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! These are the boundaries to the collaborators the viewer relies on but
//! does not implement itself.
//!
//! # Available Ports
//!
//! - [`archive`]: Turning a stored archive into a [`MediaSequence`](crate::domain::media::MediaSequence)
//! - [`vault`]: Private storage of archive records
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles)
//! - Methods return `Result` with port-specific error types

pub mod archive;
pub mod vault;

pub use archive::{ArchiveError, ArchiveExtractor};
pub use vault::{ArchiveRecord, VaultError, VaultStore};
