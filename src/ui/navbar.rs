// SPDX-License-Identifier: MPL-2.0
//! Navigation bar and scroll-position chrome.
//!
//! Tracks three scroll-derived flags: whether the bar draws its "scrolled"
//! background (past 100 px), whether the back-to-top button shows (past
//! 300 px), and whether the compact menu is open. Section jumps and the
//! back-to-top action are surfaced as events for the application to turn
//! into scroll tasks.

use crate::content::{Section, NAVBAR_HEIGHT};
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, Button, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Scroll offset past which the navbar draws its solid background.
pub const SCROLLED_THRESHOLD: f32 = 100.0;

/// Scroll offset past which the back-to-top button appears.
pub const BACK_TO_TOP_THRESHOLD: f32 = 300.0;

/// Scroll-derived navbar state.
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    pub scrolled: bool,
    pub back_to_top_visible: bool,
    pub menu_open: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    JumpTo(Section),
    BackToTop,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Scroll the page to this absolute offset.
    ScrollTo(f32),
}

impl State {
    /// Re-derives the scroll flags. Both thresholds are re-evaluated every
    /// scroll, so the flags clear again when the user scrolls back up.
    pub fn on_scroll(&mut self, scroll_top: f32) {
        self.scrolled = scroll_top > SCROLLED_THRESHOLD;
        self.back_to_top_visible = scroll_top > BACK_TO_TOP_THRESHOLD;
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::ToggleMenu => {
                self.menu_open = !self.menu_open;
                Event::None
            }
            // Sent by Escape and by clicks outside the dropdown.
            Message::CloseMenu => {
                self.menu_open = false;
                Event::None
            }
            Message::JumpTo(section) => {
                self.menu_open = false;
                // Land just below the fixed bar, like the original's
                // offsetTop - 80 anchor correction.
                Event::ScrollTo((section.top() - NAVBAR_HEIGHT).max(0.0))
            }
            Message::BackToTop => Event::ScrollTo(0.0),
        }
    }
}

/// Render the navigation bar.
pub fn view(state: &State, studio_name: &'static str) -> Element<'static, Message> {
    let brand = Text::new(studio_name)
        .size(typography::LEAD)
        .style(|theme: &Theme| iced::widget::text::Style {
            color: Some(theme.palette().text),
        });

    let mut links = Row::new().spacing(spacing::LG);
    for section in Section::ALL {
        if let Some(label) = section.nav_label() {
            links = links.push(nav_link(label, Message::JumpTo(section)));
        }
    }

    let menu_toggle = button(Text::new(if state.menu_open { "\u{00D7}" } else { "\u{2630}" }))
        .on_press(Message::ToggleMenu)
        .padding(spacing::XS)
        .style(link_style);

    let bar = Row::new()
        .spacing(spacing::XL)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(brand).width(Length::Fill))
        .push(links)
        .push(menu_toggle);

    let scrolled = state.scrolled;
    let mut content = Column::new().push(
        Container::new(bar)
            .width(Length::Fill)
            .height(Length::Fixed(NAVBAR_HEIGHT))
            .padding([0.0, spacing::XL])
            .style(move |theme: &Theme| bar_style(theme, scrolled)),
    );

    if state.menu_open {
        content = content.push(menu_dropdown());
    }

    content.into()
}

/// Back-to-top button; the caller overlays it bottom-right when visible.
pub fn back_to_top() -> Element<'static, Message> {
    button(
        Text::new("\u{2191}")
            .size(typography::LEAD)
            .align_x(alignment::Horizontal::Center),
    )
    .on_press(Message::BackToTop)
    .width(Length::Fixed(sizing::BACK_TO_TOP))
    .height(Length::Fixed(sizing::BACK_TO_TOP))
    .style(|_: &Theme, status| {
        let base = match status {
            button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_400,
            _ => palette::PRIMARY_500,
        };
        button::Style {
            background: Some(iced::Background::Color(base)),
            text_color: palette::WHITE,
            border: iced::Border {
                radius: (sizing::BACK_TO_TOP / 2.0).into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            ..button::Style::default()
        }
    })
    .into()
}

fn menu_dropdown() -> Element<'static, Message> {
    let mut column = Column::new().spacing(spacing::XS);
    for section in Section::ALL {
        if let Some(label) = section.nav_label() {
            column = column.push(nav_link(label, Message::JumpTo(section)));
        }
    }

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(|theme: &Theme| container::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::SURFACE,
                ..theme.extended_palette().background.base.color
            })),
            shadow: shadow::MD,
            ..Default::default()
        })
        .into()
}

fn nav_link(label: &'static str, message: Message) -> Button<'static, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XXS, spacing::XS])
        .style(link_style)
}

fn link_style(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_400,
        _ => theme.palette().text,
    };
    button::Style {
        background: None,
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        ..button::Style::default()
    }
}

fn bar_style(theme: &Theme, scrolled: bool) -> container::Style {
    let base = theme.extended_palette().background.base.color;
    let background = if scrolled {
        Color {
            a: opacity::SURFACE,
            ..base
        }
    } else {
        Color {
            a: opacity::TRANSPARENT,
            ..base
        }
    };
    container::Style {
        background: Some(iced::Background::Color(background)),
        shadow: if scrolled { shadow::MD } else { shadow::NONE },
        ..Default::default()
    }
}
