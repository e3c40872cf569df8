// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`folder`]: Unpacked directory as archive (implements [`ArchiveExtractor`])
//!
//! [`ArchiveExtractor`]: crate::application::port::ArchiveExtractor

pub mod folder;

pub use folder::FolderExtractor;
