// SPDX-License-Identifier: MPL-2.0
//! Canvas program drawing one image under a [`TransformModel`].
//!
//! The image is first fitted inside the canvas (contain), then scaled around
//! its center, rotated, and moved by the transform's offset. Anything outside
//! the canvas bounds is clipped.

use crate::ui::state::TransformModel;
use iced::widget::canvas::{self, Canvas, Frame, Geometry};
use iced::widget::image::Handle;
use iced::{mouse, Length, Point, Radians, Rectangle, Renderer, Size, Theme, Vector};

/// Transformed image drawn on a canvas.
pub struct TransformedImage {
    handle: Handle,
    /// Intrinsic pixel size, when known.
    dimensions: Option<(u32, u32)>,
    transform: TransformModel,
}

impl TransformedImage {
    #[must_use]
    pub fn new(handle: Handle, dimensions: Option<(u32, u32)>, transform: TransformModel) -> Self {
        Self {
            handle,
            dimensions,
            transform,
        }
    }

    /// Creates a Canvas widget filling the available space.
    pub fn into_element<'a, Message: 'a>(self) -> iced::Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Destination rectangle of the (unrotated) image inside `area`.
    #[must_use]
    pub fn destination(&self, area: Size) -> Rectangle {
        let fitted = match self.dimensions {
            Some((width, height)) => contain(Size::new(width as f32, height as f32), area),
            None => area,
        };
        let scale = self.transform.scale();
        let size = Size::new(fitted.width * scale, fitted.height * scale);
        let (offset_x, offset_y) = self.transform.effective_offset();
        let center = Point::new(area.width / 2.0, area.height / 2.0) + Vector::new(offset_x, offset_y);

        Rectangle::new(
            Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
            size,
        )
    }
}

/// Largest size with the aspect ratio of `content` that fits in `area`.
#[must_use]
pub fn contain(content: Size, area: Size) -> Size {
    if content.width <= 0.0 || content.height <= 0.0 {
        return area;
    }
    let ratio = (area.width / content.width).min(area.height / content.height);
    if !ratio.is_finite() || ratio <= 0.0 {
        return area;
    }
    Size::new(content.width * ratio, content.height * ratio)
}

impl<Message> canvas::Program<Message> for TransformedImage {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let destination = self.destination(bounds.size());
        let rotation = Radians(self.transform.normalized_rotation().to_radians());

        frame.draw_image(
            destination,
            canvas::Image::new(self.handle.clone()).rotation(rotation),
        );

        vec![frame.into_geometry()]
    }
}
