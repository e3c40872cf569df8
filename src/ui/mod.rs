// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module follows the Elm-style "state down, messages up" pattern.
//!
//! - [`viewer`] - Full-screen viewer session with gestures and navigation
//! - [`state`] - Transform and pointer tracking state
//! - [`widgets`] - Custom Iced widgets (transformed image canvas)

pub mod state;
pub mod viewer;
pub mod widgets;
