// SPDX-License-Identifier: MPL-2.0
//! Portfolio grid: category filter and lazily loaded thumbnails.
//!
//! Filtering mirrors the original effect: an item that stops matching fades
//! for 300 ms before it is dropped from layout; an item that matches again
//! fades back in. Thumbnails materialize only when the item first scrolls
//! into view, and a missing file is an operator warning, never a user-facing
//! error.

use crate::content::{self, Category, PortfolioEntry};
use crate::ui::design_tokens::{opacity, palette, radius, shadow, spacing, typography};
use iced::widget::image::Handle;
use iced::widget::{button, container, image, mouse_area, Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::path::Path;
use std::time::{Duration, Instant};

/// Fade transition length for filter changes.
pub const FILTER_FADE: Duration = Duration::from_millis(300);

/// Active portfolio filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Category(Category),
}

impl Filter {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Category(c) => c.label(),
        }
    }

    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(c) => c == category,
        }
    }
}

/// Visual phase of one item under the current filter.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ItemPhase {
    /// In layout. `appeared` is set while the fade-in is still relevant.
    Visible { appeared: Option<Instant> },
    /// Fading toward removal from layout.
    FadingOut { since: Instant },
    /// Out of layout entirely.
    Hidden,
}

/// Lazily materialized thumbnail.
#[derive(Debug, Clone, Default)]
struct LazyThumbnail {
    handle: Option<Handle>,
    failed: bool,
}

/// Vertical lift applied to a hovered card.
pub const HOVER_LIFT: f32 = 10.0;

#[derive(Debug, Clone)]
pub enum Message {
    SetFilter(Filter),
    /// The pointer entered or left an item card.
    HoverChanged(usize, bool),
}

/// Effects the application turns into notifications or log entries.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// The filter changed; recorded as an analytics event.
    FilterChanged(&'static str),
}

#[derive(Debug, Clone)]
pub struct State {
    filter: Filter,
    phases: Vec<ItemPhase>,
    thumbnails: Vec<LazyThumbnail>,
    hovered: Option<usize>,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            filter: Filter::All,
            phases: vec![ItemPhase::Visible { appeared: None }; content::PORTFOLIO.len()],
            thumbnails: vec![LazyThumbnail::default(); content::PORTFOLIO.len()],
            hovered: None,
        }
    }

    #[must_use]
    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn handle(&mut self, message: Message, now: Instant) -> Effect {
        match message {
            Message::SetFilter(filter) => {
                if filter == self.filter {
                    return Effect::None;
                }
                self.filter = filter;
                self.apply_filter(now);
                Effect::FilterChanged(filter.label())
            }
            Message::HoverChanged(index, entered) => {
                if entered {
                    self.hovered = Some(index);
                } else if self.hovered == Some(index) {
                    self.hovered = None;
                }
                Effect::None
            }
        }
    }

    #[must_use]
    pub fn is_hovered(&self, index: usize) -> bool {
        self.hovered == Some(index)
    }

    fn apply_filter(&mut self, now: Instant) {
        for (index, entry) in content::PORTFOLIO.iter().enumerate() {
            let matches = self.filter.matches(entry.category);
            let phase = &mut self.phases[index];
            *phase = match (*phase, matches) {
                // Still matching: leave as-is.
                (current @ ItemPhase::Visible { .. }, true) => current,
                // Reappearing, fade back in.
                (ItemPhase::Hidden | ItemPhase::FadingOut { .. }, true) => ItemPhase::Visible {
                    appeared: Some(now),
                },
                // Dropped by the filter: fade before leaving layout.
                (ItemPhase::Visible { .. }, false) => ItemPhase::FadingOut { since: now },
                (current @ ItemPhase::FadingOut { .. }, false) => current,
                (ItemPhase::Hidden, false) => ItemPhase::Hidden,
            };
        }
    }

    /// Finishes fade-outs whose 300 ms have elapsed.
    pub fn tick(&mut self, now: Instant) {
        for phase in &mut self.phases {
            if let ItemPhase::FadingOut { since } = *phase {
                if now.duration_since(since) >= FILTER_FADE {
                    *phase = ItemPhase::Hidden;
                }
            }
        }
    }

    /// Whether any fade is still running; gates the general tick.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.phases
            .iter()
            .any(|p| matches!(p, ItemPhase::FadingOut { .. }))
    }

    /// Whether the item currently occupies layout space.
    #[must_use]
    pub fn is_displayed(&self, index: usize) -> bool {
        !matches!(self.phases.get(index), Some(ItemPhase::Hidden) | None)
    }

    /// Render opacity for an item.
    #[must_use]
    pub fn item_opacity(&self, index: usize, now: Instant) -> f32 {
        match self.phases.get(index) {
            Some(ItemPhase::Visible { appeared }) => match appeared {
                Some(at) => {
                    let t = now.duration_since(*at).as_secs_f32() / FILTER_FADE.as_secs_f32();
                    t.min(1.0)
                }
                None => 1.0,
            },
            Some(ItemPhase::FadingOut { since }) => {
                let t = now.duration_since(*since).as_secs_f32() / FILTER_FADE.as_secs_f32();
                (1.0 - t).max(0.0)
            }
            Some(ItemPhase::Hidden) | None => 0.0,
        }
    }

    /// Loads the thumbnail for an item that just became visible. Returns an
    /// operator warning message if the file is missing; loading is
    /// attempted only once per item either way.
    pub fn materialize_thumbnail(&mut self, index: usize) -> Option<String> {
        let entry = content::PORTFOLIO.get(index)?;
        let thumb = self.thumbnails.get_mut(index)?;
        if thumb.handle.is_some() || thumb.failed {
            return None;
        }
        if Path::new(entry.image_path).exists() {
            thumb.handle = Some(Handle::from_path(entry.image_path));
            None
        } else {
            thumb.failed = true;
            Some(format!("portfolio thumbnail failed to load: {}", entry.image_path))
        }
    }

    #[must_use]
    pub fn thumbnail(&self, index: usize) -> Option<&Handle> {
        self.thumbnails.get(index).and_then(|t| t.handle.as_ref())
    }

    #[must_use]
    pub fn thumbnail_failed(&self, index: usize) -> bool {
        self.thumbnails.get(index).is_some_and(|t| t.failed)
    }
}

pub fn view(state: &State, now: Instant) -> Element<'static, Message> {
    let mut filters = Row::new().spacing(spacing::SM);
    let mut options = vec![Filter::All];
    options.extend(Category::ALL.map(Filter::Category));
    for option in options {
        filters = filters.push(filter_button(option, option == state.filter));
    }

    let mut grid = Column::new().spacing(spacing::LG);
    let mut current_row = Row::new().spacing(spacing::LG);
    let mut in_row = 0usize;
    for (index, entry) in content::PORTFOLIO.iter().enumerate() {
        if !state.is_displayed(index) {
            continue;
        }
        current_row = current_row.push(item_card(entry, state, index, now));
        in_row += 1;
        if in_row == 3 {
            grid = grid.push(current_row);
            current_row = Row::new().spacing(spacing::LG);
            in_row = 0;
        }
    }
    if in_row > 0 {
        grid = grid.push(current_row);
    }

    let content_column = Column::new()
        .spacing(spacing::LG)
        .push(Text::new(content::PORTFOLIO_TITLE).size(typography::HEADING))
        .push(filters)
        .push(grid);

    Container::new(content_column)
        .width(Length::Fill)
        .height(Length::Fixed(content::Section::Portfolio.height()))
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::XL)
        .into()
}

fn item_card(
    entry: &PortfolioEntry,
    state: &State,
    index: usize,
    now: Instant,
) -> Element<'static, Message> {
    let alpha = state.item_opacity(index, now);

    let thumbnail: Element<'static, Message> = match state.thumbnail(index) {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(240.0))
            .height(Length::Fixed(160.0))
            .into(),
        // Placeholder block until the lazy load runs (or if it failed).
        None => Container::new(Text::new(""))
            .width(Length::Fixed(240.0))
            .height(Length::Fixed(160.0))
            .style(|_: &Theme| container::Style {
                background: Some(iced::Background::Color(palette::GRAY_200)),
                border: iced::Border {
                    radius: radius::MD.into(),
                    ..Default::default()
                },
                ..Default::default()
            })
            .into(),
    };

    let card = Column::new()
        .spacing(spacing::XS)
        .push(thumbnail)
        .push(Text::new(entry.title).size(typography::BODY))
        .push(
            Text::new(entry.category.label())
                .size(typography::CAPTION)
                .style(|_: &Theme| iced::widget::text::Style {
                    color: Some(palette::GRAY_400),
                }),
        );

    let surface = Container::new(card)
        .padding(spacing::SM)
        .style(move |theme: &Theme| container::Style {
            background: Some(iced::Background::Color(Color {
                a: alpha * opacity::SURFACE,
                ..theme.extended_palette().background.weak.color
            })),
            border: iced::Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::MD,
            ..Default::default()
        });

    // Hover lift: a hovered card trades its top spacer for a bottom one,
    // moving up 10 px without disturbing the row layout.
    let lift = if state.is_hovered(index) { HOVER_LIFT } else { 0.0 };
    let lifted = Column::new()
        .push(Space::new().height(Length::Fixed(HOVER_LIFT - lift)))
        .push(surface)
        .push(Space::new().height(Length::Fixed(lift)));

    mouse_area(lifted)
        .on_enter(Message::HoverChanged(index, true))
        .on_exit(Message::HoverChanged(index, false))
        .into()
}

fn filter_button(option: Filter, active: bool) -> Element<'static, Message> {
    button(Text::new(option.label()).size(typography::BODY))
        .on_press(Message::SetFilter(option))
        .padding([spacing::XXS, spacing::SM])
        .style(move |theme: &Theme, status| {
            let highlighted = active
                || matches!(
                    status,
                    button::Status::Hovered | button::Status::Pressed
                );
            button::Style {
                background: highlighted
                    .then_some(iced::Background::Color(palette::PRIMARY_500)),
                text_color: if highlighted {
                    palette::WHITE
                } else {
                    theme.palette().text
                },
                border: iced::Border {
                    radius: radius::SM.into(),
                    ..Default::default()
                },
                shadow: shadow::NONE,
                ..button::Style::default()
            }
        })
        .into()
}
