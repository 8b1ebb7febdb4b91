// SPDX-License-Identifier: MPL-2.0
//! Typewriter effect for the hero title.
//!
//! Once started, one character appears per tick. The tick period lives here
//! so the subscription and the state machine cannot drift apart.

use std::time::Duration;

/// One character per tick at this period.
pub const TYPE_PERIOD: Duration = Duration::from_millis(80);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Running,
    Done,
}

/// Progressive text reveal over a fixed string.
#[derive(Debug, Clone)]
pub struct Typewriter {
    full: String,
    /// Byte offset of the visible prefix; always on a char boundary.
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            full: text.into(),
            shown: 0,
            phase: Phase::Idle,
        }
    }

    /// Starts typing from the beginning. Starting an already-running or
    /// finished typewriter is a no-op.
    pub fn start(&mut self) {
        if self.phase == Phase::Idle {
            self.phase = if self.full.is_empty() {
                Phase::Done
            } else {
                Phase::Running
            };
        }
    }

    /// Reveals the next character.
    pub fn tick(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        match self.full[self.shown..].chars().next() {
            Some(c) => {
                self.shown += c.len_utf8();
                if self.shown >= self.full.len() {
                    self.phase = Phase::Done;
                }
            }
            None => self.phase = Phase::Done,
        }
    }

    /// Skips straight to the full text (reduced-motion path).
    pub fn complete(&mut self) {
        self.shown = self.full.len();
        self.phase = Phase::Done;
    }

    /// The currently visible prefix.
    #[must_use]
    pub fn visible(&self) -> &str {
        &self.full[..self.shown]
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_one_char_per_tick() {
        let mut tw = Typewriter::new("abc");
        tw.start();

        assert_eq!(tw.visible(), "");
        tw.tick();
        assert_eq!(tw.visible(), "a");
        tw.tick();
        assert_eq!(tw.visible(), "ab");
        tw.tick();
        assert_eq!(tw.visible(), "abc");
        assert!(tw.is_done());
    }

    #[test]
    fn does_nothing_before_start() {
        let mut tw = Typewriter::new("abc");
        tw.tick();
        assert_eq!(tw.visible(), "");
        assert!(!tw.is_running());
    }

    #[test]
    fn handles_multibyte_characters() {
        let mut tw = Typewriter::new("héllo — ok");
        tw.start();
        for _ in 0..4 {
            tw.tick();
        }
        assert_eq!(tw.visible(), "héll");
        while tw.is_running() {
            tw.tick();
        }
        assert_eq!(tw.visible(), "héllo — ok");
    }

    #[test]
    fn ticking_past_the_end_is_safe() {
        let mut tw = Typewriter::new("ab");
        tw.start();
        for _ in 0..10 {
            tw.tick();
        }
        assert_eq!(tw.visible(), "ab");
        assert!(tw.is_done());
    }

    #[test]
    fn empty_text_finishes_on_start() {
        let mut tw = Typewriter::new("");
        tw.start();
        assert!(tw.is_done());
    }

    #[test]
    fn complete_jumps_to_full_text() {
        let mut tw = Typewriter::new("slow reveal");
        tw.start();
        tw.tick();
        tw.complete();
        assert_eq!(tw.visible(), "slow reveal");
        assert!(tw.is_done());
    }
}
