// SPDX-License-Identifier: MPL-2.0
//! Viewer controls: top bar, navigation arrows, and the reset button.

use crate::i18n::fluent::I18n;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, Container, Row, Text},
    Color, Element, Length,
};

#[derive(Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub is_fullscreen: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ZoomIn,
    ZoomOut,
    RotateLeft,
    RotateRight,
    ResetTransform,
    ToggleFullscreen,
    Close,
    NavigatePrevious,
    NavigateNext,
}

/// Close button, position label, and the rotate/zoom/fullscreen group.
pub fn top_bar<'a>(ctx: ViewContext<'a>, index_label: String) -> Element<'a, Message> {
    let close_button = button(Text::new(ctx.i18n.tr("viewer-close")))
        .on_press(Message::Close)
        .padding([6, 12]);

    let position = pill(Text::new(index_label).size(14));

    let fullscreen_key = if ctx.is_fullscreen {
        "viewer-fullscreen-exit"
    } else {
        "viewer-fullscreen-enter"
    };

    let actions = Row::new()
        .spacing(4)
        .align_y(Vertical::Center)
        .push(action(ctx, "viewer-rotate-left", Message::RotateLeft))
        .push(action(ctx, "viewer-rotate-right", Message::RotateRight))
        .push(action(ctx, "viewer-zoom-in", Message::ZoomIn))
        .push(action(ctx, "viewer-zoom-out", Message::ZoomOut))
        .push(action(ctx, fullscreen_key, Message::ToggleFullscreen));

    let leading = Row::new()
        .spacing(12)
        .align_y(Vertical::Center)
        .push(close_button)
        .push(position);

    Row::new()
        .padding(16)
        .align_y(Vertical::Center)
        .push(Container::new(leading).width(Length::Fill))
        .push(pill(actions))
        .into()
}

/// Previous/next arrows pinned to the left and right edges.
pub fn navigation_arrows<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let previous = button(Text::new(format!("‹ {}", ctx.i18n.tr("viewer-previous"))))
        .on_press(Message::NavigatePrevious)
        .padding([12, 16]);
    let next = button(Text::new(format!("{} ›", ctx.i18n.tr("viewer-next"))))
        .on_press(Message::NavigateNext)
        .padding([12, 16]);

    Row::new()
        .padding([0, 16])
        .height(Length::Fill)
        .align_y(Vertical::Center)
        .push(
            Container::new(previous)
                .width(Length::Fill)
                .align_x(Horizontal::Left),
        )
        .push(
            Container::new(next)
                .width(Length::Fill)
                .align_x(Horizontal::Right),
        )
        .into()
}

pub fn reset_button<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    button(Text::new(ctx.i18n.tr("viewer-reset")))
        .on_press(Message::ResetTransform)
        .padding([8, 16])
        .into()
}

fn action<'a>(ctx: ViewContext<'a>, key: &str, message: Message) -> Element<'a, Message> {
    button(Text::new(ctx.i18n.tr(key)).size(14))
        .on_press(message)
        .padding([6, 10])
        .into()
}

/// Translucent dark backdrop used by the overlay labels.
pub fn pill<'a>(content: impl Into<Element<'a, Message>>) -> Container<'a, Message> {
    Container::new(content)
        .padding([4, 12])
        .style(|_theme: &iced::Theme| container::Style {
            background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.6).into()),
            text_color: Some(Color::WHITE),
            border: iced::Border {
                radius: 16.0.into(),
                ..Default::default()
            },
            ..Default::default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            is_fullscreen: false,
        };
        let _top = top_bar(ctx, "1 / 3".to_string());
        let _arrows = navigation_arrows(ctx);
        let _reset = reset_button(ctx);
    }
}
