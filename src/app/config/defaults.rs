// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Scale**: Transform scale bounds and thresholds
//! - **Zoom Step**: Button zoom increment and its bounds
//! - **Rotation**: Button rotation increment
//! - **Gestures**: Double-tap and swipe recognition

use std::time::Duration;

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Smallest allowed scale (50%).
pub const MIN_SCALE: f32 = 0.5;

/// Largest allowed scale (800%).
pub const MAX_SCALE: f32 = 8.0;

/// Above this scale, pan offsets take effect and dragging pans the image.
pub const PAN_THRESHOLD_SCALE: f32 = 1.05;

/// At or below this scale, the image counts as "at rest": swipes navigate
/// and navigation arrows are shown.
pub const REST_THRESHOLD_SCALE: f32 = 1.1;

/// Scale applied by a double tap on an unzoomed image.
pub const DOUBLE_TAP_SCALE: f32 = 2.5;

// ==========================================================================
// Zoom Step Defaults
// ==========================================================================

/// Default scale increment for the zoom buttons.
pub const DEFAULT_ZOOM_STEP: f32 = 0.25;

/// Minimum allowed zoom step.
pub const MIN_ZOOM_STEP: f32 = 0.05;

/// Maximum allowed zoom step.
pub const MAX_ZOOM_STEP: f32 = 2.0;

// ==========================================================================
// Rotation Defaults
// ==========================================================================

/// Degrees added or removed by the rotate buttons.
pub const ROTATION_STEP_DEGREES: f32 = 90.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Two taps closer together than this form a double tap.
pub const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(300);

/// Minimum horizontal travel of a touch swipe (logical pixels, exclusive).
pub const TOUCH_SWIPE_MIN_DX: f32 = 60.0;

/// Maximum vertical travel of a touch swipe (logical pixels, exclusive).
pub const TOUCH_SWIPE_MAX_DY: f32 = 100.0;

/// Minimum horizontal travel of a mouse swipe (logical pixels, exclusive).
pub const MOUSE_SWIPE_MIN_DX: f32 = 100.0;
