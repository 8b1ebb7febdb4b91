// SPDX-License-Identifier: MPL-2.0
//! Hero section: typewriter title, call-to-action, parallax backdrop.
//!
//! The section itself is stateless; the typewriter lives in the engine and
//! the parallax offsets are pure functions of the scroll position.

use crate::content;
use crate::ui::design_tokens::{palette, radius, shadow, spacing, typography};
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length, Theme};

/// Parallax factor for the hero artwork.
const ART_PARALLAX: f32 = 0.2;

/// Parallax factor for the floating accent layer.
const PARTICLES_PARALLAX: f32 = 0.1;

/// Vertical displacement of the hero artwork at this scroll offset.
#[must_use]
pub fn art_offset(scroll_top: f32) -> f32 {
    scroll_top * ART_PARALLAX
}

/// Vertical displacement of the floating accent layer.
#[must_use]
pub fn particles_offset(scroll_top: f32) -> f32 {
    scroll_top * PARTICLES_PARALLAX
}

#[derive(Debug, Clone)]
pub enum Message {
    /// The call-to-action was pressed; the app scrolls to the contact form.
    RequestQuote,
}

/// Renders the hero. `title` is the typewriter's visible prefix and the
/// parallax offsets have already been computed from the scroll position.
pub fn view(title: &str, art_shift: f32, particles_shift: f32) -> Element<'static, Message> {
    let heading = Text::new(title.to_owned())
        .size(typography::DISPLAY)
        .style(|theme: &Theme| iced::widget::text::Style {
            color: Some(theme.palette().text),
        });

    let subtitle = Text::new(content::HERO_SUBTITLE)
        .size(typography::LEAD)
        .style(|_: &Theme| iced::widget::text::Style {
            color: Some(palette::GRAY_400),
        });

    let cta = button(Text::new(content::HERO_CTA).size(typography::BODY))
        .on_press(Message::RequestQuote)
        .padding([spacing::SM, spacing::LG])
        .style(|_: &Theme, status| {
            let background = match status {
                iced::widget::button::Status::Hovered
                | iced::widget::button::Status::Pressed => palette::PRIMARY_400,
                _ => palette::PRIMARY_500,
            };
            iced::widget::button::Style {
                background: Some(iced::Background::Color(background)),
                text_color: palette::WHITE,
                border: iced::Border {
                    radius: radius::MD.into(),
                    ..Default::default()
                },
                shadow: shadow::MD,
                ..button::Style::default()
            }
        });

    let copy = Column::new()
        .spacing(spacing::LG)
        .max_width(520.0)
        .push(heading)
        .push(subtitle)
        .push(cta);

    // The artwork column slides with the parallax offsets; padding stands in
    // for a translate transform.
    let art = Column::new()
        .push(Space::new().height(Length::Fixed(art_shift.max(0.0))))
        .push(
            Container::new(
                Space::new()
                    .width(Length::Fixed(280.0))
                    .height(Length::Fixed(320.0)),
            )
            .style(
                |_: &Theme| container::Style {
                    background: Some(iced::Background::Color(palette::PRIMARY_200)),
                    border: iced::Border {
                        radius: radius::LG.into(),
                        ..Default::default()
                    },
                    shadow: shadow::MD,
                    ..Default::default()
                },
            ),
        )
        .push(Space::new().height(Length::Fixed(particles_shift.max(0.0))));

    let row = Row::new()
        .spacing(spacing::XXL)
        .align_y(alignment::Vertical::Center)
        .push(copy)
        .push(art);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(content::Section::Hero.height()))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .padding(spacing::XL)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn art_moves_at_a_fifth_of_scroll() {
        assert_abs_diff_eq!(art_offset(500.0), 100.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn particles_move_at_a_tenth_of_scroll() {
        assert_abs_diff_eq!(particles_offset(500.0), 50.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn layers_diverge_as_the_page_scrolls() {
        // The depth illusion needs the two layers to drift apart.
        assert!(art_offset(400.0) > particles_offset(400.0));
    }
}
