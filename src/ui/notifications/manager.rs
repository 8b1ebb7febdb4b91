// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns all active banners. There is no visible cap and no
//! queue: every `show` creates an independent banner, and overlapping ones
//! simply stack. Explicit close and the auto-timeout both go through the
//! banner's own dismissal guard, so each banner is removed exactly once.

use super::notification::{Kind, Notification, NotificationId};
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Explicit close of a specific banner.
    Dismiss(NotificationId),
}

/// Manages the active banners, newest last.
#[derive(Debug, Default)]
pub struct Manager {
    active: Vec<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new independent banner and returns its id.
    pub fn show(&mut self, message: impl Into<String>, kind: Kind, now: Instant) -> NotificationId {
        let notification = Notification::new(message, kind, now);
        let id = notification.id();
        self.active.push(notification);
        id
    }

    /// Explicit-close path. Returns `true` if a slide-out actually started;
    /// dismissing an already-leaving or unknown banner is a no-op.
    pub fn dismiss(&mut self, id: NotificationId, now: Instant) -> bool {
        self.active
            .iter_mut()
            .find(|n| n.id() == id)
            .is_some_and(|n| n.dismiss(now))
    }

    /// Advances every banner's phase machine and removes the ones whose
    /// slide-out has finished. Drives both the entrance grace and the
    /// 5-second auto-timeout.
    pub fn tick(&mut self, now: Instant) {
        self.active.retain_mut(|n| !n.advance(now));
    }

    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id, now);
            }
        }
    }

    pub fn active(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter()
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Gates the notification tick subscription.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.active_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn show_creates_independent_banners() {
        let mut manager = Manager::new();
        let now = Instant::now();

        manager.show("first", Kind::Success, now);
        manager.show("second", Kind::Error, now);
        manager.show("third", Kind::Info, now);

        // No cap, no queue: all three are active at once.
        assert_eq!(manager.active_count(), 3);
    }

    #[test]
    fn auto_timeout_removes_after_slide_out() {
        let mut manager = Manager::new();
        let now = Instant::now();
        manager.show("Done", Kind::Success, now);

        manager.tick(at(now, 100)); // entered
        manager.tick(at(now, 4999));
        assert_eq!(manager.active_count(), 1);

        manager.tick(at(now, 5000)); // starts leaving
        assert_eq!(manager.active_count(), 1);

        manager.tick(at(now, 5300)); // slide-out done
        assert_eq!(manager.active_count(), 0);
    }

    #[test]
    fn explicit_close_beats_the_timeout() {
        let mut manager = Manager::new();
        let now = Instant::now();
        let id = manager.show("Done", Kind::Success, now);
        manager.tick(at(now, 100));

        assert!(manager.dismiss(id, at(now, 1000)));
        manager.tick(at(now, 1300));
        assert_eq!(manager.active_count(), 0);

        // The would-be timeout finds nothing to remove.
        manager.tick(at(now, 5000));
        manager.tick(at(now, 5300));
        assert_eq!(manager.active_count(), 0);
    }

    #[test]
    fn dismiss_after_dismiss_is_a_safe_noop() {
        let mut manager = Manager::new();
        let now = Instant::now();
        let id = manager.show("Done", Kind::Success, now);
        manager.tick(at(now, 100));

        assert!(manager.dismiss(id, at(now, 1000)));
        assert!(!manager.dismiss(id, at(now, 1010)));
    }

    #[test]
    fn dismiss_unknown_id_is_a_noop() {
        let mut manager = Manager::new();
        let now = Instant::now();
        let stray = {
            let mut other = Manager::new();
            other.show("elsewhere", Kind::Info, now)
        };

        assert!(!manager.dismiss(stray, now));
    }

    #[test]
    fn banners_age_independently() {
        let mut manager = Manager::new();
        let now = Instant::now();
        manager.show("early", Kind::Success, now);
        manager.show("late", Kind::Success, at(now, 3000));

        manager.tick(at(now, 100));
        manager.tick(at(now, 5000)); // early starts leaving
        manager.tick(at(now, 5300)); // early removed, late still shown
        assert_eq!(manager.active_count(), 1);

        manager.tick(at(now, 8000)); // late starts leaving
        manager.tick(at(now, 8300));
        assert_eq!(manager.active_count(), 0);
    }

    #[test]
    fn handle_message_routes_dismiss() {
        let mut manager = Manager::new();
        let now = Instant::now();
        let id = manager.show("Done", Kind::Success, now);
        manager.tick(at(now, 100));

        manager.handle_message(&Message::Dismiss(id), at(now, 500));
        manager.tick(at(now, 800));
        assert_eq!(manager.active_count(), 0);
    }
}
