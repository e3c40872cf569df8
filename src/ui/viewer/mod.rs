// SPDX-License-Identifier: MPL-2.0
//! Full-screen image viewer: gesture-driven zoom, pan, rotation and navigation
//! over a media sequence.

pub mod component;
pub mod controls;
pub mod subcomponents;

pub use component::{Effect, Hint, Message, RenderDescriptor, ViewerSession};

use crate::i18n::fluent::I18n;
use crate::ui::widgets::TransformedImage;
use iced::widget::image::Handle;
use iced::widget::{container, Column, Container, Stack, Text};
use iced::{alignment, Color, Element, Length};

/// Draws a session's render descriptor: the transformed image with the
/// control overlay stacked on top.
pub fn view<'a>(i18n: &'a I18n, descriptor: RenderDescriptor<'a>) -> Element<'a, Message> {
    let ctx = controls::ViewContext {
        i18n,
        is_fullscreen: descriptor.is_fullscreen,
    };

    let image = TransformedImage::new(
        Handle::from_path(descriptor.media.location()),
        descriptor.media.dimensions(),
        descriptor.transform,
    )
    .into_element();

    let backdrop = Container::new(image)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &iced::Theme| container::Style {
            background: Some(Color::BLACK.into()),
            ..Default::default()
        });

    let mut overlay = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(controls::top_bar(ctx, descriptor.index_label).map(Message::Controls));

    overlay = if descriptor.show_navigation_arrows {
        overlay.push(controls::navigation_arrows(ctx).map(Message::Controls))
    } else {
        overlay.push(Container::new(Text::new("")).height(Length::Fill))
    };

    let mut footer = Column::new()
        .spacing(12)
        .padding(24)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);
    if descriptor.show_reset {
        footer = footer.push(controls::reset_button(ctx).map(Message::Controls));
    }
    let hint: Element<'a, controls::Message> =
        controls::pill(Text::new(i18n.tr(descriptor.hint.i18n_key())).size(11)).into();
    footer = footer.push(hint.map(Message::Controls));

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(overlay.push(footer))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::{MediaItem, MediaSequence};

    #[test]
    fn view_renders_resting_and_zoomed_states() {
        let i18n = I18n::default();
        let sequence = MediaSequence::new(vec![
            MediaItem::new("/vault/a.png", "a.png", 1).with_dimensions(40, 30),
            MediaItem::new("/vault/b.png", "b.png", 1),
        ])
        .expect("non-empty");
        let mut session = ViewerSession::open(sequence, 0);
        let _ = session.view(&i18n);

        session.handle_message(Message::Controls(controls::Message::ZoomIn));
        let _zoomed = view(&i18n, session.render());
    }
}
