// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! A notification moves through a small phase machine: it enters (a short
//! grace so the slide-in transition has a starting state to run from), sits
//! shown, and on dismissal slides out before it is removed. Explicit close
//! and the auto-timeout share the dismissal transition, which can fire only
//! once — the phase guard is what makes removal exactly-once.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Entrance grace before the banner starts sliding in.
pub const ENTRANCE_GRACE: Duration = Duration::from_millis(100);

/// Time from creation until automatic dismissal.
pub const AUTO_DISMISS: Duration = Duration::from_millis(5000);

/// Slide-out transition length; the node is removed once it elapses.
pub const SLIDE_OUT: Duration = Duration::from_millis(300);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    pub fn next() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Severity kind; determines color and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    #[default]
    Success,
    Error,
    Info,
}

impl Kind {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Error => palette::ERROR_500,
            Kind::Info => palette::INFO_500,
        }
    }

    /// Check mark for success, warning glyph for everything else.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Kind::Success => "\u{2713}",
            Kind::Error | Kind::Info => "\u{26A0}",
        }
    }
}

/// Lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Just inserted; transition styles not yet applied.
    Entering,
    /// Fully visible.
    Shown,
    /// Sliding out; removed once the transition ends.
    Leaving { since: Instant },
}

/// A single banner. Instances are independent: no queue position, no
/// reference to siblings.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    message: String,
    created_at: Instant,
    phase: Phase,
}

impl Notification {
    #[must_use]
    pub fn new(message: impl Into<String>, kind: Kind, now: Instant) -> Self {
        Self {
            id: NotificationId::next(),
            kind,
            message: message.into(),
            created_at: now,
            phase: Phase::Entering,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Begins the slide-out. Returns `false` if the notification is already
    /// leaving — the guard that keeps close and timeout from removing twice.
    pub fn dismiss(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Leaving { .. } => false,
            Phase::Entering | Phase::Shown => {
                self.phase = Phase::Leaving { since: now };
                true
            }
        }
    }

    /// Advances the phase machine. Returns `true` when the slide-out has
    /// finished and the banner should be removed. Transitions cascade so a
    /// late tick still settles the banner into the right phase.
    pub fn advance(&mut self, now: Instant) -> bool {
        if self.phase == Phase::Entering
            && now.duration_since(self.created_at) >= ENTRANCE_GRACE
        {
            self.phase = Phase::Shown;
        }
        if self.phase == Phase::Shown && now.duration_since(self.created_at) >= AUTO_DISMISS {
            self.phase = Phase::Leaving { since: now };
        }
        if let Phase::Leaving { since } = self.phase {
            return now.duration_since(since) >= SLIDE_OUT;
        }
        false
    }

    /// Horizontal displacement factor for rendering: 1.0 fully off-screen,
    /// 0.0 in place.
    #[must_use]
    pub fn offset_factor(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Entering => 1.0,
            Phase::Shown => 0.0,
            Phase::Leaving { since } => {
                let elapsed = now.duration_since(since).as_secs_f32();
                (elapsed / SLIDE_OUT.as_secs_f32()).min(1.0)
            }
        }
    }
}
