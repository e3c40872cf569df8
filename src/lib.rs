// SPDX-License-Identifier: MPL-2.0
//! `vault_lens` is a full-screen, touch-first image viewer for archive vaults,
//! built with the Iced GUI framework.
//!
//! The viewer turns raw pointer input into zoom, pan, double-tap and swipe
//! gestures, navigates a wrapping sequence of images and manages fullscreen
//! presentation. Archive storage and extraction sit behind ports in
//! [`application::port`].

pub mod app;
pub mod application;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
