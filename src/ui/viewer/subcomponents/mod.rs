// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the viewer.
//!
//! Each sub-component has its own State, Message, Effect, and handle() method.
//! The main component.rs orchestrates these sub-components.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── gesture     - Pinch / pan / double-tap / swipe classification
//!     ├── navigation  - Wrapping index over the media sequence
//!     └── fullscreen  - Fullscreen ownership flag
//! ```

pub mod fullscreen;
pub mod gesture;
pub mod navigation;
