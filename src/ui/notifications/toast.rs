// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Banners stack in the top-right corner. The slide transition is rendered
//! by fading with the banner's offset factor; layout position stays fixed so
//! neighbors do not jump while one leaves.

use super::manager::Message;
use super::notification::Notification;
use crate::ui::design_tokens::{border, opacity, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::Instant;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single banner.
    pub fn view(notification: &Notification, now: Instant) -> Element<'_, Message> {
        let kind = notification.kind();
        let accent = kind.color();
        // 1.0 while off-screen, 0.0 settled; render as a fade.
        let alpha = opacity::OPAQUE - notification.offset_factor(now) * (1.0 - opacity::OVERLAY_SUBTLE);

        let icon = Text::new(kind.icon())
            .size(typography::LEAD)
            .style(move |_: &Theme| text::Style {
                color: Some(accent),
            });

        let message = Text::new(notification.message().to_owned())
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let close = button(Text::new("\u{00D7}").size(typography::LEAD))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(close_button_style);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon).padding(spacing::XXS))
            .push(
                Container::new(message)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(close);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| banner_style(theme, accent, alpha))
            .into()
    }

    /// Renders the overlay with every active banner, stacked top-right.
    pub fn view_overlay<'a>(
        notifications: impl Iterator<Item = &'a Notification>,
        now: Instant,
    ) -> Element<'a, Message> {
        let banners: Vec<Element<'a, Message>> =
            notifications.map(|n| Self::view(n, now)).collect();

        if banners.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let stack = Column::with_children(banners)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(stack)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top)
            .padding(spacing::MD)
            .into()
    }
}

fn banner_style(theme: &Theme, accent: Color, alpha: f32) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(Color { a: alpha, ..base })),
        border: iced::Border {
            color: Color { a: alpha, ..accent },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn close_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..theme.palette().text
            }))
        }
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        ..button::Style::default()
    }
}
