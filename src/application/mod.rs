// SPDX-License-Identifier: MPL-2.0
//! Application layer.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer consumes ports through their traits

pub mod port;
