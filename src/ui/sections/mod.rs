// SPDX-License-Identifier: MPL-2.0
//! Page sections and the shared entrance-animation wrapper.

pub mod cards;
pub mod contact;
pub mod hero;
pub mod portfolio;
pub mod stats;

use crate::content::ElementId;
use crate::engine::reveal::{AnimationKind, RevealAnimator};
use iced::widget::{container, stack, Container, Row, Space};
use iced::{Element, Length, Theme};
use std::time::Instant;

/// Horizontal travel of the slide entrances, in logical pixels.
const SLIDE_DISTANCE: f32 = 30.0;

/// Starting inset of the scale entrance, in logical pixels per side.
const SCALE_INSET: f32 = 12.0;

/// Inset emulating the scale-up entrance: content starts pulled in on every
/// side and grows to its full footprint.
fn scale_inset(progress: f32) -> f32 {
    SCALE_INSET * (1.0 - progress.clamp(0.0, 1.0))
}

/// Applies an element's entrance animation to its rendered content.
///
/// Slides are emulated with a shrinking spacer on the entry side, scales
/// with an inset that shrinks as the element grows to its footprint, and
/// the fade is a veil in the page background color that thins as the
/// animation progresses. All of them disappear entirely once the element is
/// fully revealed, so settled content costs nothing extra.
pub fn reveal_wrap<'a, Message: 'a>(
    content: Element<'a, Message>,
    animator: &RevealAnimator,
    id: ElementId,
    now: Instant,
) -> Element<'a, Message> {
    let progress = animator.progress(id, now);
    if progress >= 1.0 {
        return content;
    }

    let shift = (1.0 - progress) * SLIDE_DISTANCE;
    let shifted: Element<'a, Message> = match animator.kind(id) {
        AnimationKind::SlideLeft => Row::new()
            .push(content)
            .push(Space::new().width(Length::Fixed(shift)))
            .into(),
        AnimationKind::SlideRight => Row::new()
            .push(Space::new().width(Length::Fixed(shift)))
            .push(content)
            .into(),
        AnimationKind::Scale => Container::new(content)
            .padding(scale_inset(progress))
            .into(),
        AnimationKind::Fade | AnimationKind::None => content,
    };

    let veil_alpha = 1.0 - progress;
    let veil: Element<'a, Message> = Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |theme: &Theme| container::Style {
            background: Some(iced::Background::Color(iced::Color {
                a: veil_alpha,
                ..theme.palette().background
            })),
            ..Default::default()
        })
        .into();

    stack([shifted, veil]).into()
}
