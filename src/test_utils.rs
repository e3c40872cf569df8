// SPDX-License-Identifier: MPL-2.0
//! Test utilities shared by unit tests.
//!
//! Re-exports the `approx` assertion used for scale and offset comparisons,
//! which `assert_eq!` cannot express reliably for `f32`.

pub use approx::assert_abs_diff_eq;

use crate::domain::media::{MediaItem, MediaSequence};

/// Builds a sequence of `len` placeholder items named `0.png`, `1.png`, ...
///
/// # Panics
///
/// Panics if `len` is zero.
#[must_use]
pub fn sample_sequence(len: usize) -> MediaSequence {
    let items = (0..len)
        .map(|i| MediaItem::new(format!("/vault/{i}.png"), format!("{i}.png"), 100))
        .collect();
    MediaSequence::new(items).expect("sample sequence must not be empty")
}
