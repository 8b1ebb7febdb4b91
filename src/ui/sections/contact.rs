// SPDX-License-Identifier: MPL-2.0
//! Contact form: field validation and a simulated submission cycle.
//!
//! Name and phone are required; email is validated only when present. A
//! valid submit holds the button in a busy state for two seconds, then
//! clears the fields, raises a success banner, and restores the button a
//! further three seconds later.

use crate::ui::design_tokens::{palette, radius, shadow, spacing, typography};
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};
use regex::Regex;
use std::sync::LazyLock;
use std::time::{Duration, Instant};

/// How long the simulated network round-trip takes.
pub const SUBMIT_BUSY: Duration = Duration::from_millis(2000);
/// How long the button reads "Sent" before returning to normal.
pub const SENT_HOLD: Duration = Duration::from_millis(3000);

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap_or_else(|e| panic!("{e}")));
static PHONE_STRIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-()]").unwrap_or_else(|e| panic!("{e}")));
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").unwrap_or_else(|e| panic!("{e}")));

#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Separators are stripped before the digit check; at least ten characters
/// must remain.
#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    let stripped = PHONE_STRIP_RE.replace_all(value, "");
    stripped.len() >= 10 && PHONE_RE.is_match(&stripped)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SubmitState {
    Idle,
    Busy { started: Instant },
    Sent { since: Instant },
}

#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(Field, String),
    Submit,
}

#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// Raise a success banner with this text.
    NotifySuccess(&'static str),
    /// Raise an error banner with this text.
    NotifyError(&'static str),
    /// A form submission was attempted; `valid` for the analytics log.
    SubmitAttempted { valid: bool },
}

#[derive(Debug, Clone)]
pub struct State {
    name: String,
    phone: String,
    email: String,
    body: String,
    submit: SubmitState,
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
            name: String::new(),
            phone: String::new(),
            email: String::new(),
            body: String::new(),
            submit: SubmitState::Idle,
        }
    }

    #[must_use]
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Body => &self.body,
        }
    }

    #[must_use]
    pub fn submit_state(&self) -> SubmitState {
        self.submit
    }

    /// Name and phone are required, email only checked when non-empty.
    #[must_use]
    pub fn validation_error(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() {
            return Some("Please enter your name.");
        }
        if self.phone.trim().is_empty() {
            return Some("Please enter your phone number.");
        }
        if !is_valid_phone(self.phone.trim()) {
            return Some("Please enter a valid phone number.");
        }
        if !self.email.trim().is_empty() && !is_valid_email(self.email.trim()) {
            return Some("Please enter a valid email address.");
        }
        None
    }

    pub fn handle(&mut self, message: Message, now: Instant) -> Vec<Effect> {
        match message {
            Message::FieldChanged(field, value) => {
                match field {
                    Field::Name => self.name = value,
                    Field::Phone => self.phone = value,
                    Field::Email => self.email = value,
                    Field::Body => self.body = value,
                }
                Vec::new()
            }
            Message::Submit => self.submit(now),
        }
    }

    fn submit(&mut self, now: Instant) -> Vec<Effect> {
        if !matches!(self.submit, SubmitState::Idle) {
            return Vec::new();
        }
        if let Some(error) = self.validation_error() {
            return vec![
                Effect::SubmitAttempted { valid: false },
                Effect::NotifyError(error),
            ];
        }
        self.submit = SubmitState::Busy { started: now };
        vec![Effect::SubmitAttempted { valid: true }]
    }

    /// Drives the simulated round-trip. Completion clears the fields and
    /// asks for a success banner.
    pub fn tick(&mut self, now: Instant) -> Effect {
        match self.submit {
            SubmitState::Busy { started } if now.duration_since(started) >= SUBMIT_BUSY => {
                self.name.clear();
                self.phone.clear();
                self.email.clear();
                self.body.clear();
                self.submit = SubmitState::Sent { since: now };
                Effect::NotifySuccess("Thank you! We will be in touch shortly.")
            }
            SubmitState::Sent { since } if now.duration_since(since) >= SENT_HOLD => {
                self.submit = SubmitState::Idle;
                Effect::None
            }
            _ => Effect::None,
        }
    }

    /// Whether the submit cycle still needs ticks.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        !matches!(self.submit, SubmitState::Idle)
    }
}

pub fn view(state: &State, now: Instant) -> Element<'_, Message> {
    let fields = Column::new()
        .spacing(spacing::SM)
        .push(labelled_input(state, Field::Name, "Your name"))
        .push(labelled_input(state, Field::Phone, "Phone"))
        .push(labelled_input(state, Field::Email, "Email (optional)"))
        .push(labelled_input(state, Field::Body, "How can we help?"));

    let form = Column::new()
        .spacing(spacing::LG)
        .max_width(420.0)
        .push(fields)
        .push(submit_button(state, now));

    Container::new(form)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::XL)
        .into()
}

/// Floating-label input: the label collapses above the field once the
/// field holds text.
fn labelled_input<'a>(
    state: &'a State,
    field: Field,
    label: &'static str,
) -> Element<'a, Message> {
    let value = state.field(field);
    let mut column = Column::new().spacing(spacing::XXS);
    if !value.is_empty() {
        column = column.push(
            Text::new(label)
                .size(typography::CAPTION)
                .style(|_: &Theme| iced::widget::text::Style {
                    color: Some(palette::PRIMARY_500),
                }),
        );
    }
    column
        .push(
            text_input(label, value)
                .on_input(move |v| Message::FieldChanged(field, v))
                .padding(spacing::SM)
                .size(typography::BODY),
        )
        .into()
}

fn submit_button(state: &State, now: Instant) -> Element<'_, Message> {
    let (label, enabled) = match state.submit_state() {
        SubmitState::Idle => ("Send request", true),
        SubmitState::Busy { .. } => ("Sending", false),
        SubmitState::Sent { .. } => ("Sent \u{2713}", false),
    };

    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(label).size(typography::BODY));
    if let SubmitState::Busy { started } = state.submit_state() {
        let rotation = now.duration_since(started).as_secs_f32() * std::f32::consts::TAU;
        row = row.push(
            AnimatedSpinner::new(palette::WHITE, rotation)
                .with_size(typography::BODY)
                .into_element(),
        );
    }

    let mut submit = button(row)
        .padding([spacing::SM, spacing::LG])
        .style(|_: &Theme, status| {
            let background = match status {
                button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_700,
                button::Status::Disabled => palette::GRAY_400,
                button::Status::Active => palette::PRIMARY_500,
            };
            button::Style {
                background: Some(iced::Background::Color(background)),
                text_color: palette::WHITE,
                border: iced::Border {
                    radius: radius::SM.into(),
                    ..Default::default()
                },
                shadow: shadow::NONE,
                ..button::Style::default()
            }
        });
    if enabled {
        submit = submit.on_press(Message::Submit);
    }
    submit.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    fn filled() -> State {
        let mut state = State::new();
        state.name = "Mara Voss".to_owned();
        state.phone = "+4915112345678".to_owned();
        state
    }

    #[test]
    fn email_validation_accepts_plausible_addresses() {
        assert!(is_valid_email("mara@example.com"));
        assert!(is_valid_email("a.b+c@sub.domain.io"));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spaces in@example.com"));
        assert!(!is_valid_email("missing@tld"));
    }

    #[test]
    fn phone_validation_strips_separators() {
        assert!(is_valid_phone("+49 151 1234-5678"));
        assert!(is_valid_phone("(151) 234-567-89"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("not a number"));
        assert!(!is_valid_phone("0000000000"));
    }

    #[test]
    fn missing_required_fields_block_the_submit() {
        let mut state = State::new();
        let effects = state.handle(Message::Submit, Instant::now());
        assert!(effects
            .iter()
            .any(|e| matches!(e, Effect::SubmitAttempted { valid: false })));
        assert!(effects
            .iter()
            .any(|e| matches!(e, Effect::NotifyError(msg) if msg.contains("name"))));
        assert_eq!(state.submit_state(), SubmitState::Idle);
    }

    #[test]
    fn invalid_email_blocks_even_though_optional() {
        let mut state = filled();
        state.email = "broken@".to_owned();
        let effects = state.handle(Message::Submit, Instant::now());
        assert!(effects
            .iter()
            .any(|e| matches!(e, Effect::NotifyError(msg) if msg.contains("email"))));
    }

    #[test]
    fn empty_email_is_fine() {
        let state = filled();
        assert!(state.validation_error().is_none());
    }

    #[test]
    fn valid_submit_runs_the_full_cycle() {
        let mut state = filled();
        let now = Instant::now();

        let effects = state.handle(Message::Submit, now);
        assert!(effects
            .iter()
            .any(|e| matches!(e, Effect::SubmitAttempted { valid: true })));
        assert!(matches!(state.submit_state(), SubmitState::Busy { .. }));

        // Not done yet.
        assert!(matches!(state.tick(at(now, 1999)), Effect::None));

        // Round-trip completes: success banner, fields cleared.
        let done = state.tick(at(now, 2000));
        assert!(matches!(done, Effect::NotifySuccess(_)));
        assert!(state.field(Field::Name).is_empty());
        assert!(state.field(Field::Phone).is_empty());
        assert!(matches!(state.submit_state(), SubmitState::Sent { .. }));

        // Button restores three seconds later.
        state.tick(at(now, 4999));
        assert!(matches!(state.submit_state(), SubmitState::Sent { .. }));
        state.tick(at(now, 5000));
        assert_eq!(state.submit_state(), SubmitState::Idle);
        assert!(!state.is_submitting());
    }

    #[test]
    fn submit_while_busy_is_ignored() {
        let mut state = filled();
        let now = Instant::now();
        state.handle(Message::Submit, now);

        let again = state.handle(Message::Submit, at(now, 500));
        assert!(again.is_empty());
    }

    #[test]
    fn editing_a_field_updates_it() {
        let mut state = State::new();
        state.handle(
            Message::FieldChanged(Field::Body, "Repaint the stairwell".to_owned()),
            Instant::now(),
        );
        assert_eq!(state.field(Field::Body), "Repaint the stairwell");
    }
}
