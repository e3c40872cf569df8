// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) to ensure testability.
//!
//! # Modules
//!
//! - [`media`]: Media types ([`MediaItem`](media::MediaItem),
//!   [`MediaSequence`](media::MediaSequence))

pub mod media;
