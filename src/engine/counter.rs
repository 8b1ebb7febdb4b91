// SPDX-License-Identifier: MPL-2.0
//! Animated statistics counters.
//!
//! A counter runs a displayed value from 0 to its target over a fixed two
//! seconds at a 16 ms tick (the 60 fps approximation the original effect
//! used). The displayed value is the floor of the running value, never
//! decreases, and lands on exactly the target at the tick where the running
//! value reaches it.

use crate::content::ElementId;
use std::collections::HashMap;
use std::time::Duration;

/// Tick period; the subscription driving [`CounterAnimator::tick`] runs at
/// this rate while any counter is unfinished.
pub const TICK_PERIOD: Duration = Duration::from_millis(16);

/// Total animation duration.
pub const COUNT_DURATION: Duration = Duration::from_millis(2000);

/// Ticks in a full run: `2000 / 16`.
const TOTAL_TICKS: f64 = 125.0;

#[derive(Debug, Clone)]
struct Counter {
    target: u64,
    current: f64,
    increment: f64,
    finished: bool,
}

/// Runs all active counters. An element's presence in the map is the
/// "counted" marker: a second `start` for the same element is a no-op even
/// after its animation finished.
#[derive(Debug, Clone, Default)]
pub struct CounterAnimator {
    counters: HashMap<ElementId, Counter>,
}

impl CounterAnimator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a counter toward the target parsed from `raw`.
    ///
    /// The target must be a base-10 non-negative integer; anything else is
    /// a silent no-op by contract — the element simply never animates, and
    /// no error is raised. Re-starting an element that already counted (or
    /// is still counting) is also a no-op.
    pub fn start(&mut self, id: ElementId, raw: &str) {
        if self.counters.contains_key(&id) {
            return;
        }
        let Ok(target) = raw.trim().parse::<u64>() else {
            return;
        };

        #[allow(clippy::cast_precision_loss)]
        let increment = target as f64 / TOTAL_TICKS;
        self.counters.insert(
            id,
            Counter {
                target,
                current: 0.0,
                increment,
                finished: target == 0,
            },
        );
    }

    /// Advances every running counter by one tick. A counter clamps to its
    /// target and stops on the tick where the running value reaches it.
    pub fn tick(&mut self) {
        for counter in self.counters.values_mut() {
            if counter.finished {
                continue;
            }
            counter.current += counter.increment;
            #[allow(clippy::cast_precision_loss)]
            let target = counter.target as f64;
            if counter.current >= target {
                counter.current = target;
                counter.finished = true;
            }
        }
    }

    /// Displayed value: the floor of the running value, or `None` if the
    /// element never started.
    #[must_use]
    pub fn display(&self, id: ElementId) -> Option<u64> {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        self.counters.get(&id).map(|c| c.current.floor() as u64)
    }

    /// Whether the element's counted marker is set.
    #[must_use]
    pub fn has_counted(&self, id: ElementId) -> bool {
        self.counters.contains_key(&id)
    }

    #[must_use]
    pub fn is_finished(&self, id: ElementId) -> bool {
        self.counters.get(&id).is_some_and(|c| c.finished)
    }

    /// True when no counter needs further ticks; gates the 16 ms timer.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.counters.values().all(|c| c.finished)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ElementId, Group};

    fn stat(index: u16) -> ElementId {
        ElementId::new(Group::StatNumber, index)
    }

    #[test]
    fn full_run_lands_exactly_on_target() {
        let mut counters = CounterAnimator::new();
        counters.start(stat(0), "250");

        for _ in 0..125 {
            counters.tick();
        }
        assert_eq!(counters.display(stat(0)), Some(250));
        assert!(counters.is_finished(stat(0)));

        // Further ticks change nothing.
        counters.tick();
        assert_eq!(counters.display(stat(0)), Some(250));
    }

    #[test]
    fn displayed_sequence_is_monotonic_and_bounded() {
        let mut counters = CounterAnimator::new();
        counters.start(stat(0), "177");

        let mut last = 0;
        for _ in 0..200 {
            counters.tick();
            let shown = counters.display(stat(0)).unwrap();
            assert!(shown >= last);
            assert!(shown <= 177);
            last = shown;
        }
        assert_eq!(last, 177);
    }

    #[test]
    fn missing_or_invalid_target_is_a_silent_noop() {
        let mut counters = CounterAnimator::new();
        counters.start(stat(0), "");
        counters.start(stat(1), "many");
        counters.start(stat(2), "-4");
        counters.start(stat(3), "12.5");

        assert!(counters.is_idle());
        assert_eq!(counters.display(stat(0)), None);
        assert!(!counters.has_counted(stat(1)));
    }

    #[test]
    fn restart_is_guarded_by_the_counted_marker() {
        let mut counters = CounterAnimator::new();
        counters.start(stat(0), "100");
        for _ in 0..50 {
            counters.tick();
        }
        let midway = counters.display(stat(0)).unwrap();

        // A second visibility trigger must not reset or double-schedule.
        counters.start(stat(0), "100");
        assert_eq!(counters.display(stat(0)), Some(midway));

        counters.tick();
        let next = counters.display(stat(0)).unwrap();
        // One tick advances by one increment (0.8), never two.
        assert!(next - midway <= 1);
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut counters = CounterAnimator::new();
        counters.start(stat(0), "0");

        assert!(counters.is_finished(stat(0)));
        assert!(counters.is_idle());
        assert_eq!(counters.display(stat(0)), Some(0));
    }

    #[test]
    fn whitespace_around_target_is_tolerated() {
        let mut counters = CounterAnimator::new();
        counters.start(stat(0), " 42 ");
        assert!(counters.has_counted(stat(0)));
    }

    #[test]
    fn tick_math_matches_the_fixed_duration() {
        // 2000 ms at a 16 ms period is 125 ticks.
        let ticks = COUNT_DURATION.as_millis() / TICK_PERIOD.as_millis();
        assert_eq!(ticks, 125);
    }
}
