// SPDX-License-Identifier: MPL-2.0
//! Statistics band wired to the counter animator.

use crate::content::{self, ElementId, Group};
use crate::engine::counter::CounterAnimator;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Text shown for one stat: the animated floor value once the counter has
/// started, `0` before its element has ever been seen.
#[must_use]
pub fn stat_text(counters: &CounterAnimator, id: ElementId) -> String {
    counters.display(id).unwrap_or(0).to_string()
}

pub fn view<Message: 'static>(counters: &CounterAnimator) -> Element<'static, Message> {
    let mut row = Row::new().spacing(spacing::XL);

    for (index, (label, _)) in content::STATS.iter().enumerate() {
        #[allow(clippy::cast_possible_truncation)]
        let id = ElementId::new(Group::StatNumber, index as u16);

        let number = Text::new(stat_text(counters, id))
            .size(typography::STAT)
            .style(|_: &Theme| iced::widget::text::Style {
                color: Some(palette::PRIMARY_500),
            });
        let caption = Text::new(*label)
            .size(typography::CAPTION)
            .style(|_: &Theme| iced::widget::text::Style {
                color: Some(palette::GRAY_400),
            });

        row = row.push(
            Column::new()
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Center)
                .width(Length::Fill)
                .push(number)
                .push(caption),
        );
    }

    let titled = Column::new()
        .spacing(spacing::LG)
        .push(Text::new(content::STATS_TITLE).size(typography::HEADING))
        .push(row);

    Container::new(titled)
        .width(Length::Fill)
        .height(Length::Fixed(content::Section::Stats.height()))
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::XL)
        .into()
}
