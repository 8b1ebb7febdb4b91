// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page sections.
//!
//! The `App` struct wires the scroll-driven engine (visibility, reveals,
//! counters, typewriter) to the Iced shell: scroll events from the page
//! scrollable feed the observers, timer subscriptions advance the animators,
//! and section effects turn into banners or diagnostics entries. Policy
//! decisions such as tick cadence and the loading-screen handoff live here,
//! close to the update loop.

use crate::config::{self, Config};
use crate::content::{self, ElementId, Group, Section};
use crate::diagnostics::{
    BufferCapacity, DiagnosticsCollector, DiagnosticsHandle, ErrorEvent, ErrorType, UserAction,
    WarningEvent, WarningType,
};
use crate::engine::counter::{CounterAnimator, TICK_PERIOD};
use crate::engine::reveal::RevealAnimator;
use crate::engine::typewriter::{Typewriter, TYPE_PERIOD};
use crate::engine::visibility::{Observer, ObserverOptions};
use crate::engine::PageViewport;
use crate::ui::notifications::{self, Kind, Toast};
use crate::ui::sections::{cards, contact, hero, portfolio, stats};
use crate::ui::{loading_screen, navbar};
use iced::widget::scrollable::{self, AbsoluteOffset, Viewport};
use iced::widget::{operation, stack, Column, Container, Id};
use iced::{event, keyboard, time, window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 900.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Pause between the loading screen going away and the hero title starting
/// to type.
const TYPEWRITER_DELAY: Duration = Duration::from_millis(500);

/// Cadence of the general housekeeping tick while any transition runs.
const GENERAL_TICK: Duration = Duration::from_millis(100);

/// How many stat elements the counter observer watches.
const STAT_COUNT: u16 = content::STATS.len() as u16;

/// How many portfolio thumbnails the lazy-load observer watches.
const THUMBNAIL_COUNT: u16 = content::PORTFOLIO.len() as u16;

/// Stats count toward their target once half the number is on screen.
const COUNTER_THRESHOLD: f32 = 0.5;

fn page_scroll_id() -> Id {
    Id::new("page")
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Clone, Debug, Default)]
pub struct Flags {
    /// Optional directory to read `settings.toml` from instead of the
    /// platform config directory.
    pub config_dir: Option<String>,
    /// Skip entrance animations regardless of the persisted setting.
    pub reduced_motion: bool,
}

/// Top-level messages consumed by [`App::update`]. The variants forward
/// section messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Hero(hero::Message),
    Portfolio(portfolio::Message),
    Contact(contact::Message),
    Notification(notifications::NotificationMessage),
    /// The page scrollable moved.
    Scrolled(Viewport),
    /// Periodic housekeeping tick for transitions and timeouts.
    Tick(Instant),
    /// Fast tick driving the stat counters.
    CounterTick(Instant),
    /// Tick driving the hero typewriter.
    TypeTick(Instant),
    /// The window changed size; re-run the observers against the new
    /// viewport.
    WindowResized(iced::Size),
    /// Write the collected diagnostics to a JSON file.
    ExportDiagnostics,
}

/// Root Iced application state.
pub struct App {
    config: Config,
    config_dir: Option<String>,
    reduced_motion: bool,
    launched_at: Instant,
    loading: bool,
    /// Set when the loading screen goes away; the typewriter starts once
    /// this deadline passes.
    typewriter_starts_at: Option<Instant>,
    typewriter: Typewriter,
    reveal: RevealAnimator,
    counters: CounterAnimator,
    counter_observer: Observer,
    lazy_observer: Observer,
    scroll_top: f32,
    viewport_height: f32,
    navbar: navbar::State,
    portfolio: portfolio::State,
    contact: contact::State,
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
    diagnostics_handle: DiagnosticsHandle,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("loading", &self.loading)
            .field("scroll_top", &self.scroll_top)
            .finish()
    }
}

fn window_settings(config: &Config) -> window::Settings {
    let size = config
        .window_size
        .map_or(iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT), |[w, h]| {
            iced::Size::new(w.max(MIN_WINDOW_WIDTH), h.max(MIN_WINDOW_HEIGHT))
        });
    window::Settings {
        size,
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let (config, _) = config::load(flags.config_dir.as_deref());
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(|state: &App| state.title())
        .theme(App::theme)
        .window(window_settings(&config))
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let now = Instant::now();
        let (config, config_warning) = config::load(flags.config_dir.as_deref());
        let reduced_motion = flags.reduced_motion || config.reduced_motion();

        let capacity = config
            .diagnostics_capacity
            .map_or_else(BufferCapacity::default, BufferCapacity::new);
        let (diagnostics, diagnostics_handle) = DiagnosticsCollector::new(capacity);

        // First launch writes the defaults out as an editable template.
        if let Err(error) = config::save_if_missing(&config, flags.config_dir.as_deref()) {
            diagnostics_handle
                .log_warning(WarningEvent::new(WarningType::Config, error.to_string()));
        }

        let mut reveal = RevealAnimator::new();
        for group in content::REVEAL_GROUPS {
            reveal.register(
                &content::group_elements(group.group, group.count),
                group.kind,
                group.stagger,
            );
        }

        let mut counter_observer = Observer::new(ObserverOptions {
            threshold: COUNTER_THRESHOLD,
            bottom_margin: 0.0,
        });
        for (id, bounds) in content::group_elements(Group::StatNumber, STAT_COUNT) {
            counter_observer.observe(id, bounds);
        }

        let mut lazy_observer = Observer::new(ObserverOptions {
            threshold: 0.0,
            bottom_margin: 0.0,
        });
        for (id, bounds) in content::group_elements(Group::PortfolioImage, THUMBNAIL_COUNT) {
            lazy_observer.observe(id, bounds);
        }

        let mut app = App {
            config,
            config_dir: flags.config_dir,
            reduced_motion,
            launched_at: now,
            loading: true,
            typewriter_starts_at: None,
            typewriter: Typewriter::new(content::HERO_TITLE),
            reveal,
            counters: CounterAnimator::new(),
            counter_observer,
            lazy_observer,
            scroll_top: 0.0,
            viewport_height: WINDOW_DEFAULT_HEIGHT,
            navbar: navbar::State::default(),
            portfolio: portfolio::State::new(),
            contact: contact::State::new(),
            notifications: notifications::Manager::new(),
            diagnostics,
            diagnostics_handle,
        };

        if let Some(warning) = config_warning {
            app.diagnostics_handle
                .log_warning(WarningEvent::new(WarningType::Config, warning));
            app.notifications.show(warning, Kind::Info, now);
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        content::STUDIO_NAME.to_owned()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn page_viewport(&self) -> PageViewport {
        PageViewport::new(self.scroll_top, self.viewport_height)
    }

    /// Runs every observer against the current viewport and applies what
    /// fired: reveals, counter starts, and lazy thumbnail loads.
    fn apply_visibility(&mut self, now: Instant) {
        let viewport = self.page_viewport();
        self.reveal.sweep(viewport, now);
        self.reveal.scan(viewport, now);

        for id in self.counter_observer.sweep(viewport) {
            if let Some((_, target)) = content::STATS.get(usize::from(id.index)) {
                self.counters.start(id, target);
            }
            self.counter_observer.unobserve(id);
        }
        if self.reduced_motion {
            while !self.counters.is_idle() {
                self.counters.tick();
            }
        }

        for id in self.lazy_observer.sweep(viewport) {
            if let Some(warning) = self.portfolio.materialize_thumbnail(usize::from(id.index)) {
                self.diagnostics_handle
                    .log_warning(WarningEvent::new(WarningType::ResourceLoad, warning));
            }
            self.lazy_observer.unobserve(id);
        }
    }

    fn scroll_page_to(&self, offset: f32) -> Task<Message> {
        operation::scroll_to(page_scroll_id(), AbsoluteOffset { x: 0.0, y: offset })
    }

    fn dismiss_loading(&mut self, now: Instant) {
        self.loading = false;
        if self.reduced_motion {
            self.typewriter.start();
            self.typewriter.complete();
            self.reveal.complete_all(now);
        } else {
            self.typewriter_starts_at = Some(now + TYPEWRITER_DELAY);
        }
        // Reveal whatever is above the fold before the first scroll.
        self.apply_visibility(now);
    }

    fn export_diagnostics(&mut self) {
        self.diagnostics.drain();
        let path = config::sibling_path(self.config_dir.as_deref(), "diagnostics.json");
        let Some(path) = path else {
            return;
        };
        let result = self
            .diagnostics
            .export_json()
            .map_err(|e| e.to_string())
            .and_then(|json| std::fs::write(&path, json).map_err(|e| e.to_string()));
        let now = Instant::now();
        match result {
            Ok(()) => {
                // The file now holds the history; the next export picks up
                // from here.
                self.diagnostics.clear();
                self.notifications.show(
                    format!("Diagnostics written to {}", path.display()),
                    Kind::Info,
                    now,
                );
            }
            Err(message) => {
                self.diagnostics
                    .record_error(ErrorEvent::new(ErrorType::Io, message));
                self.notifications
                    .show("Could not write the diagnostics file.", Kind::Error, now);
            }
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        match message {
            Message::Navbar(msg) => {
                if let navbar::Message::JumpTo(section) = &msg {
                    if let Some(label) = section.nav_label() {
                        self.diagnostics_handle.log_action(UserAction::NavJump {
                            section: label.to_owned(),
                        });
                    }
                }
                match self.navbar.update(msg) {
                    navbar::Event::None => Task::none(),
                    navbar::Event::ScrollTo(offset) => self.scroll_page_to(offset),
                }
            }
            Message::Hero(hero::Message::RequestQuote) => {
                self.diagnostics_handle.log_action(UserAction::ButtonPress {
                    label: content::HERO_CTA.to_owned(),
                });
                let offset =
                    (Section::Contact.top() - content::NAVBAR_HEIGHT).max(0.0);
                self.scroll_page_to(offset)
            }
            Message::Portfolio(msg) => {
                match self.portfolio.handle(msg, now) {
                    portfolio::Effect::None => {}
                    portfolio::Effect::FilterChanged(filter) => {
                        self.diagnostics_handle.log_action(UserAction::FilterChange {
                            filter: filter.to_owned(),
                        });
                    }
                }
                Task::none()
            }
            Message::Contact(msg) => {
                for effect in self.contact.handle(msg, now) {
                    self.apply_contact_effect(effect, now);
                }
                Task::none()
            }
            Message::Notification(msg) => {
                self.notifications.handle_message(&msg, now);
                Task::none()
            }
            Message::Scrolled(viewport) => {
                self.scroll_top = viewport.absolute_offset().y;
                self.viewport_height = viewport.bounds().height;
                self.navbar.on_scroll(self.scroll_top);
                self.apply_visibility(now);
                Task::none()
            }
            Message::Tick(now) => {
                if self.loading
                    && now.duration_since(self.launched_at)
                        >= Duration::from_millis(self.config.loading_delay_ms())
                {
                    self.dismiss_loading(now);
                }
                if let Some(at) = self.typewriter_starts_at {
                    if now >= at {
                        self.typewriter_starts_at = None;
                        self.typewriter.start();
                    }
                }
                self.notifications.tick(now);
                self.portfolio.tick(now);
                let effect = self.contact.tick(now);
                self.apply_contact_effect(effect, now);
                if !self.loading {
                    self.apply_visibility(now);
                }
                self.diagnostics.drain();
                Task::none()
            }
            Message::CounterTick(_) => {
                self.counters.tick();
                Task::none()
            }
            Message::TypeTick(_) => {
                self.typewriter.tick();
                Task::none()
            }
            Message::WindowResized(size) => {
                self.viewport_height = size.height;
                self.apply_visibility(now);
                Task::none()
            }
            Message::ExportDiagnostics => {
                self.export_diagnostics();
                Task::none()
            }
        }
    }

    fn apply_contact_effect(&mut self, effect: contact::Effect, now: Instant) {
        match effect {
            contact::Effect::None => {}
            contact::Effect::NotifySuccess(text) => {
                self.notifications.show(text, Kind::Success, now);
            }
            contact::Effect::NotifyError(text) => {
                self.notifications.show(text, Kind::Error, now);
            }
            contact::Effect::SubmitAttempted { valid } => {
                self.diagnostics_handle
                    .log_action(UserAction::FormSubmit { valid });
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_subscription = event::listen_with(|event, status, _window| {
            if let event::Event::Window(window::Event::Resized(size)) = event {
                return Some(Message::WindowResized(size));
            }
            if status == event::Status::Captured {
                return None;
            }
            let event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) =
                event
            else {
                return None;
            };
            match key.as_ref() {
                keyboard::Key::Named(keyboard::key::Named::Escape) => {
                    Some(Message::Navbar(navbar::Message::CloseMenu))
                }
                keyboard::Key::Character("e") if modifiers.command() => {
                    Some(Message::ExportDiagnostics)
                }
                _ => None,
            }
        });

        let now = Instant::now();
        let needs_general_tick = self.loading
            || self.typewriter_starts_at.is_some()
            || self.notifications.has_notifications()
            || self.portfolio.is_transitioning()
            || self.contact.is_submitting()
            || self.reveal.is_animating(now);
        let tick_subscription = if needs_general_tick {
            time::every(GENERAL_TICK).map(Message::Tick)
        } else {
            Subscription::none()
        };

        let counter_subscription = if self.counters.is_idle() {
            Subscription::none()
        } else {
            time::every(TICK_PERIOD).map(Message::CounterTick)
        };

        let type_subscription = if self.typewriter.is_running() {
            time::every(TYPE_PERIOD).map(Message::TypeTick)
        } else {
            Subscription::none()
        };

        Subscription::batch([
            event_subscription,
            tick_subscription,
            counter_subscription,
            type_subscription,
        ])
    }

    fn view(&self) -> Element<'_, Message> {
        let now = Instant::now();
        if self.loading {
            return loading_screen::view(content::STUDIO_NAME, self.launched_at, now);
        }

        let page = Column::new()
            .push(hero::view(
                self.typewriter.visible(),
                hero::art_offset(self.scroll_top),
                hero::particles_offset(self.scroll_top),
            )
            .map(Message::Hero))
            .push(cards::about(&self.reveal, now))
            .push(cards::services(&self.reveal, now))
            .push(stats::view(&self.counters))
            .push(portfolio::view(&self.portfolio, now).map(Message::Portfolio))
            .push(cards::advantages(&self.reveal, now))
            .push(cards::timeline(&self.reveal, now))
            .push(cards::reviews(&self.reveal, now))
            .push(cards::pricing(&self.reveal, now))
            .push(cards::team(&self.reveal, now))
            .push(self.contact_section(now));

        let page_scroll = scrollable::Scrollable::new(page)
            .id(page_scroll_id())
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(Message::Scrolled);

        let top_bar = Container::new(
            navbar::view(&self.navbar, content::STUDIO_NAME).map(Message::Navbar),
        )
        .width(Length::Fill)
        .align_y(iced::alignment::Vertical::Top);

        // While the dropdown is open, a click anywhere on the page that no
        // widget captures closes it.
        let page_layer: Element<'_, Message> = if self.navbar.menu_open {
            iced::widget::mouse_area(page_scroll)
                .on_press(Message::Navbar(navbar::Message::CloseMenu))
                .into()
        } else {
            page_scroll.into()
        };

        let mut layers: Vec<Element<'_, Message>> = vec![page_layer, top_bar.into()];

        if self.navbar.back_to_top_visible {
            layers.push(
                Container::new(navbar::back_to_top().map(Message::Navbar))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(iced::alignment::Horizontal::Right)
                    .align_y(iced::alignment::Vertical::Bottom)
                    .padding(crate::ui::design_tokens::spacing::LG)
                    .into(),
            );
        }

        if self.notifications.has_notifications() {
            layers.push(
                Toast::view_overlay(self.notifications.active(), now).map(Message::Notification),
            );
        }

        stack(layers).into()
    }

    fn contact_section(&self, now: Instant) -> Element<'_, Message> {
        let info = cards::contact_info(&self.reveal, now);
        let form = crate::ui::sections::reveal_wrap(
            contact::view(&self.contact, now).map(Message::Contact),
            &self.reveal,
            ElementId::new(Group::ContactForm, 0),
            now,
        );
        Container::new(
            iced::widget::Row::new()
                .spacing(crate::ui::design_tokens::spacing::XL)
                .push(info)
                .push(form),
        )
        .width(Length::Fill)
        .height(Length::Fixed(Section::Contact.height()))
        .align_x(iced::alignment::Horizontal::Center)
        .padding(crate::ui::design_tokens::spacing::XL)
        .into()
    }
}
