// SPDX-License-Identifier: MPL-2.0
//! Full-window loading overlay shown while the page warms up.

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{container, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};
use std::time::Instant;

/// Renders the overlay. `started` anchors the spinner rotation so the
/// animation stays smooth across redraws.
pub fn view<Message: 'static>(
    studio_name: &str,
    started: Instant,
    now: Instant,
) -> Element<'static, Message> {
    let rotation = now.duration_since(started).as_secs_f32() * std::f32::consts::TAU;

    let column = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(
            AnimatedSpinner::new(palette::PRIMARY_500, rotation)
                .with_size(sizing::ICON_XL)
                .into_element(),
        )
        .push(
            Text::new(studio_name.to_owned())
                .size(typography::LEAD)
                .style(|_: &Theme| iced::widget::text::Style {
                    color: Some(palette::GRAY_400),
                }),
        );

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(|theme: &Theme| container::Style {
            background: Some(iced::Background::Color(theme.palette().background)),
            ..Default::default()
        })
        .into()
}
