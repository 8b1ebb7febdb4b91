// SPDX-License-Identifier: MPL-2.0
//! Static card sections: about, services, advantages, timeline, reviews,
//! pricing, and team. All of them render fixed page copy; the only dynamic
//! part is the entrance animation applied per card.

use crate::content::{self, ElementId, Group, Section};
use crate::engine::reveal::RevealAnimator;
use crate::ui::design_tokens::{palette, radius, shadow, spacing, typography};
use crate::ui::sections::reveal_wrap;
use iced::widget::{container, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};
use std::time::Instant;

pub fn about<Message: 'static>(
    animator: &RevealAnimator,
    now: Instant,
) -> Element<'static, Message> {
    let text_block: Element<'static, Message> = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(content::ABOUT_TITLE).size(typography::HEADING))
        .push(Text::new(content::ABOUT_TEXT).size(typography::BODY))
        .into();

    // Stand-in for the studio photograph.
    let visual: Element<'static, Message> = Container::new(
        Text::new("\u{1F3E0}").size(typography::DISPLAY),
    )
    .width(Length::Fixed(320.0))
    .height(Length::Fixed(240.0))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(card_style)
    .into();

    let row = Row::new()
        .spacing(spacing::XL)
        .push(reveal_wrap(
            text_block,
            animator,
            ElementId::new(Group::AboutText, 0),
            now,
        ))
        .push(reveal_wrap(
            visual,
            animator,
            ElementId::new(Group::AboutVisual, 0),
            now,
        ));

    section_shell(Section::About, row.into())
}

pub fn services<Message: 'static>(
    animator: &RevealAnimator,
    now: Instant,
) -> Element<'static, Message> {
    titled_grid(
        Section::Services,
        content::SERVICES_TITLE,
        Group::ServiceCard,
        &content::SERVICES,
        3,
        animator,
        now,
    )
}

pub fn advantages<Message: 'static>(
    animator: &RevealAnimator,
    now: Instant,
) -> Element<'static, Message> {
    titled_grid(
        Section::Advantages,
        content::ADVANTAGES_TITLE,
        Group::AdvantageCard,
        &content::ADVANTAGES,
        4,
        animator,
        now,
    )
}

pub fn team<Message: 'static>(
    animator: &RevealAnimator,
    now: Instant,
) -> Element<'static, Message> {
    titled_grid(
        Section::Team,
        content::TEAM_TITLE,
        Group::TeamMember,
        &content::TEAM,
        4,
        animator,
        now,
    )
}

pub fn timeline<Message: 'static>(
    animator: &RevealAnimator,
    now: Instant,
) -> Element<'static, Message> {
    let mut column = Column::new().spacing(spacing::LG);
    for (index, (stage, detail)) in content::TIMELINE.iter().enumerate() {
        let marker = Text::new(*stage)
            .size(typography::BODY)
            .style(|_: &Theme| iced::widget::text::Style {
                color: Some(palette::PRIMARY_500),
            });
        let entry: Element<'static, Message> = Row::new()
            .spacing(spacing::LG)
            .push(Container::new(marker).width(Length::Fixed(120.0)))
            .push(Text::new(*detail).size(typography::BODY))
            .into();
        #[allow(clippy::cast_possible_truncation)]
        let id = ElementId::new(Group::TimelineItem, index as u16);
        column = column.push(reveal_wrap(entry, animator, id, now));
    }

    let titled = Column::new()
        .spacing(spacing::LG)
        .push(Text::new(content::TIMELINE_TITLE).size(typography::HEADING))
        .push(column);
    section_shell(Section::Timeline, titled.into())
}

pub fn reviews<Message: 'static>(
    animator: &RevealAnimator,
    now: Instant,
) -> Element<'static, Message> {
    let mut row = Row::new().spacing(spacing::LG);
    for (index, (author, quote)) in content::REVIEWS.iter().enumerate() {
        let card: Element<'static, Message> = Container::new(
            Column::new()
                .spacing(spacing::SM)
                .push(Text::new(format!("\u{201C}{quote}\u{201D}")).size(typography::BODY))
                .push(
                    Text::new(*author)
                        .size(typography::CAPTION)
                        .style(|_: &Theme| iced::widget::text::Style {
                            color: Some(palette::GRAY_400),
                        }),
                ),
        )
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(card_style)
        .into();
        #[allow(clippy::cast_possible_truncation)]
        let id = ElementId::new(Group::ReviewCard, index as u16);
        row = row.push(reveal_wrap(card, animator, id, now));
    }

    let titled = Column::new()
        .spacing(spacing::LG)
        .push(Text::new(content::REVIEWS_TITLE).size(typography::HEADING))
        .push(row);
    section_shell(Section::Reviews, titled.into())
}

pub fn pricing<Message: 'static>(
    animator: &RevealAnimator,
    now: Instant,
) -> Element<'static, Message> {
    let mut row = Row::new().spacing(spacing::LG);
    for (index, (name, price, blurb)) in content::PRICING.iter().enumerate() {
        let card: Element<'static, Message> = Container::new(
            Column::new()
                .spacing(spacing::SM)
                .align_x(alignment::Horizontal::Center)
                .push(Text::new(*name).size(typography::LEAD))
                .push(
                    Text::new(*price)
                        .size(typography::HEADING)
                        .style(|_: &Theme| iced::widget::text::Style {
                            color: Some(palette::PRIMARY_500),
                        }),
                )
                .push(Text::new(*blurb).size(typography::BODY)),
        )
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(card_style)
        .into();
        #[allow(clippy::cast_possible_truncation)]
        let id = ElementId::new(Group::PricingCard, index as u16);
        row = row.push(reveal_wrap(card, animator, id, now));
    }

    let titled = Column::new()
        .spacing(spacing::LG)
        .push(Text::new(content::PRICING_TITLE).size(typography::HEADING))
        .push(row);
    section_shell(Section::Pricing, titled.into())
}

/// The informational half of the contact section, shown beside the form.
pub fn contact_info<Message: 'static>(
    animator: &RevealAnimator,
    now: Instant,
) -> Element<'static, Message> {
    let card: Element<'static, Message> = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(content::CONTACT_TITLE).size(typography::HEADING))
        .push(Text::new(content::CONTACT_BLURB).size(typography::BODY))
        .into();
    reveal_wrap(card, animator, ElementId::new(Group::ContactCard, 0), now)
}

fn titled_grid<Message: 'static>(
    section: Section,
    title: &'static str,
    group: Group,
    items: &'static [(&'static str, &'static str)],
    columns: usize,
    animator: &RevealAnimator,
    now: Instant,
) -> Element<'static, Message> {
    let mut grid = Column::new().spacing(spacing::LG);
    let mut row = Row::new().spacing(spacing::LG);
    let mut in_row = 0usize;

    for (index, (heading, blurb)) in items.iter().enumerate() {
        let card: Element<'static, Message> = Container::new(
            Column::new()
                .spacing(spacing::XS)
                .push(Text::new(*heading).size(typography::LEAD))
                .push(Text::new(*blurb).size(typography::BODY)),
        )
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(card_style)
        .into();

        #[allow(clippy::cast_possible_truncation)]
        let id = ElementId::new(group, index as u16);
        row = row.push(reveal_wrap(card, animator, id, now));
        in_row += 1;
        if in_row == columns {
            grid = grid.push(row);
            row = Row::new().spacing(spacing::LG);
            in_row = 0;
        }
    }
    if in_row > 0 {
        grid = grid.push(row);
    }

    let titled = Column::new()
        .spacing(spacing::LG)
        .push(Text::new(title).size(typography::HEADING))
        .push(grid);
    section_shell(section, titled.into())
}

fn section_shell<Message: 'static>(
    section: Section,
    content: Element<'static, Message>,
) -> Element<'static, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(section.height()))
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::XL)
        .into()
}

fn card_style(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        border: iced::Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}
