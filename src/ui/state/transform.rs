// SPDX-License-Identifier: MPL-2.0
//! Visual transform of the displayed item.
//!
//! The transform is the only viewer state that rendering depends on. It keeps
//! scale inside `[MIN_SCALE, MAX_SCALE]` on every mutation; rotation accumulates
//! without bound and offsets are stored as-is. Whether offsets are visible is
//! decided at render time (see [`TransformModel::effective_offset`]).

pub use crate::app::config::{
    DEFAULT_ZOOM_STEP, DOUBLE_TAP_SCALE, MAX_SCALE, MIN_SCALE, PAN_THRESHOLD_SCALE,
    REST_THRESHOLD_SCALE,
};

/// Scale, rotation and offset of the current item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformModel {
    /// Zoom factor, always within `[MIN_SCALE, MAX_SCALE]`.
    scale: f32,
    /// Accumulated rotation in degrees (not normalized).
    rotation_degrees: f32,
    /// Horizontal pan offset in logical pixels.
    offset_x: f32,
    /// Vertical pan offset in logical pixels.
    offset_y: f32,
}

impl Default for TransformModel {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TransformModel {
    /// The rest transform `{1, 0, 0, 0}`.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        rotation_degrees: 0.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[must_use]
    pub fn rotation_degrees(&self) -> f32 {
        self.rotation_degrees
    }

    /// Rotation folded into `[0, 360)`, equivalent for rendering.
    #[must_use]
    pub fn normalized_rotation(&self) -> f32 {
        self.rotation_degrees.rem_euclid(360.0)
    }

    /// Stored offset, regardless of zoom level.
    #[must_use]
    pub fn offset(&self) -> (f32, f32) {
        (self.offset_x, self.offset_y)
    }

    /// Offset as it should be drawn: zero unless zoomed past the pan threshold.
    #[must_use]
    pub fn effective_offset(&self) -> (f32, f32) {
        if self.is_pannable() {
            (self.offset_x, self.offset_y)
        } else {
            (0.0, 0.0)
        }
    }

    /// Copy of the transform with offsets replaced by [`Self::effective_offset`].
    #[must_use]
    pub fn visible(&self) -> Self {
        let (offset_x, offset_y) = self.effective_offset();
        Self {
            offset_x,
            offset_y,
            ..*self
        }
    }

    /// Relative zoom; the result is clamped.
    pub fn zoom(&mut self, delta: f32) {
        self.set_scale(self.scale + delta);
    }

    /// Absolute zoom; the result is clamped.
    pub fn set_scale(&mut self, value: f32) {
        self.scale = clamp_scale(value);
    }

    pub fn rotate(&mut self, degrees: f32) {
        self.rotation_degrees += degrees;
    }

    /// Adds to the stored offset.
    ///
    /// Callers gate this on [`Self::is_pannable`]; the model does not re-check.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Whether the scale is far enough above 1 for panning to apply.
    #[must_use]
    pub fn is_pannable(&self) -> bool {
        self.scale > PAN_THRESHOLD_SCALE
    }

    /// Whether the zoom is close enough to rest for swipes and nav arrows.
    #[must_use]
    pub fn is_at_rest_zoom(&self) -> bool {
        self.scale <= REST_THRESHOLD_SCALE
    }

    /// Whether the scale is exactly the identity scale.
    #[must_use]
    pub fn has_unit_scale(&self) -> bool {
        (self.scale - 1.0).abs() < f32::EPSILON
    }

    /// Whether a "reset view" control is meaningful (scale or offset moved).
    #[must_use]
    pub fn is_modified(&self) -> bool {
        !self.has_unit_scale() || self.offset_x != 0.0 || self.offset_y != 0.0
    }
}

/// Clamps a scale value to `[MIN_SCALE, MAX_SCALE]`, mapping NaN to 1.
#[must_use]
pub fn clamp_scale(value: f32) -> f32 {
    if value.is_nan() {
        return 1.0;
    }
    value.clamp(MIN_SCALE, MAX_SCALE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn default_is_identity() {
        let transform = TransformModel::default();
        assert_eq!(transform, TransformModel::IDENTITY);
        assert!(!transform.is_modified());
    }

    #[test]
    fn zoom_clamps_for_any_delta() {
        let mut transform = TransformModel::default();
        for delta in [0.25, 100.0, -0.3, -1000.0, 7.9, f32::MAX, -f32::MAX, 0.0] {
            transform.zoom(delta);
            assert!(transform.scale() >= MIN_SCALE);
            assert!(transform.scale() <= MAX_SCALE);
        }
    }

    #[test]
    fn zoom_is_relative() {
        let mut transform = TransformModel::default();
        transform.zoom(0.25);
        transform.zoom(0.25);
        assert_abs_diff_eq!(transform.scale(), 1.5);
        transform.zoom(-2.0);
        assert_abs_diff_eq!(transform.scale(), MIN_SCALE);
    }

    #[test]
    fn set_scale_clamps_and_rejects_nan() {
        let mut transform = TransformModel::default();
        transform.set_scale(12.0);
        assert_abs_diff_eq!(transform.scale(), MAX_SCALE);
        transform.set_scale(0.1);
        assert_abs_diff_eq!(transform.scale(), MIN_SCALE);
        transform.set_scale(f32::NAN);
        assert_abs_diff_eq!(transform.scale(), 1.0);
    }

    #[test]
    fn rotation_accumulates_without_wrapping() {
        let mut transform = TransformModel::default();
        for _ in 0..5 {
            transform.rotate(90.0);
        }
        assert_abs_diff_eq!(transform.rotation_degrees(), 450.0);
        assert_abs_diff_eq!(transform.normalized_rotation(), 90.0);

        transform.rotate(-540.0);
        assert_abs_diff_eq!(transform.rotation_degrees(), -90.0);
        assert_abs_diff_eq!(transform.normalized_rotation(), 270.0);
    }

    #[test]
    fn reset_restores_identity_from_any_state() {
        let mut transform = TransformModel::default();
        transform.set_scale(3.0);
        transform.rotate(180.0);
        transform.pan(40.0, -12.5);
        transform.reset();
        assert_eq!(transform, TransformModel::IDENTITY);
    }

    #[test]
    fn offsets_are_hidden_at_rest_zoom() {
        let mut transform = TransformModel::default();
        transform.pan(30.0, 30.0);
        assert_eq!(transform.offset(), (30.0, 30.0));
        assert_eq!(transform.effective_offset(), (0.0, 0.0));

        transform.set_scale(1.05);
        assert_eq!(transform.effective_offset(), (0.0, 0.0));

        transform.set_scale(1.2);
        assert_eq!(transform.effective_offset(), (30.0, 30.0));
    }

    #[test]
    fn visible_transform_keeps_stored_offsets_intact() {
        let mut transform = TransformModel::default();
        transform.rotate(90.0);
        transform.pan(12.0, -4.0);

        let visible = transform.visible();
        assert_eq!(visible.offset(), (0.0, 0.0));
        assert_abs_diff_eq!(visible.rotation_degrees(), 90.0);
        assert_eq!(transform.offset(), (12.0, -4.0));

        transform.set_scale(2.0);
        assert_eq!(transform.visible().offset(), (12.0, -4.0));
    }

    #[test]
    fn thresholds_follow_scale() {
        let mut transform = TransformModel::default();
        assert!(transform.is_at_rest_zoom());
        assert!(!transform.is_pannable());

        transform.set_scale(1.08);
        assert!(transform.is_at_rest_zoom());
        assert!(transform.is_pannable());

        transform.set_scale(1.5);
        assert!(!transform.is_at_rest_zoom());
    }
}
