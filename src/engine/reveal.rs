// SPDX-License-Identifier: MPL-2.0
//! One-shot reveal animation state.
//!
//! Elements register in groups; each element gets a stagger delay from its
//! position within its own group and a revealed marker that is written by
//! two independent paths: the intersection observer and a scroll-position
//! fallback. The marker write is idempotent, which is the only ordering
//! contract between the two paths — once set it is never unset.

use super::visibility::{Observer, ObserverOptions};
use super::{Bounds, PageViewport};
use crate::content::ElementId;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Visual transition applied when the element reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationKind {
    /// Base fade-up.
    #[default]
    Fade,
    SlideLeft,
    SlideRight,
    Scale,
    /// Marker only; no visual transition.
    None,
}

/// How long the reveal transition runs once triggered.
pub const REVEAL_DURATION: Duration = Duration::from_millis(600);

/// Fallback reveal distance: an element reveals once its top edge is more
/// than this many pixels above the viewport bottom, even if the observer
/// path has not fired for it.
pub const SCROLL_REVEAL_MARGIN: f32 = 150.0;

const REVEAL_THRESHOLD: f32 = 0.1;
const REVEAL_BOTTOM_MARGIN: f32 = 50.0;

#[derive(Debug, Clone)]
struct Entry {
    kind: AnimationKind,
    bounds: Bounds,
    /// Stagger offset, `index * stagger` within the registration group.
    delay: Duration,
    /// Set exactly once, by whichever reveal path gets there first.
    revealed_at: Option<Instant>,
}

/// Tracks reveal state for every registered element.
#[derive(Debug, Clone)]
pub struct RevealAnimator {
    observer: Observer,
    entries: HashMap<ElementId, Entry>,
}

impl Default for RevealAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealAnimator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            observer: Observer::new(ObserverOptions {
                threshold: REVEAL_THRESHOLD,
                bottom_margin: REVEAL_BOTTOM_MARGIN,
            }),
            entries: HashMap::new(),
        }
    }

    /// Registers a group of elements. The element at position `i` in the
    /// slice gets a delay of `i * stagger`; the stagger sequence restarts
    /// for every call, not across calls. An empty slice is fine.
    pub fn register(&mut self, elements: &[(ElementId, Bounds)], kind: AnimationKind, stagger: Duration) {
        for (index, (id, bounds)) in elements.iter().enumerate() {
            let delay = stagger * u32::try_from(index).unwrap_or(u32::MAX);
            self.entries.insert(
                *id,
                Entry {
                    kind,
                    bounds: *bounds,
                    delay,
                    revealed_at: None,
                },
            );
            self.observer.observe(*id, *bounds);
        }
    }

    /// Observer-driven path: sweeps the underlying observer and marks every
    /// newly visible element revealed.
    pub fn sweep(&mut self, viewport: PageViewport, now: Instant) {
        for id in self.observer.sweep(viewport) {
            self.mark_revealed(id, now);
        }
    }

    /// Scroll-position fallback path: marks any unrevealed element whose top
    /// edge has crossed `SCROLL_REVEAL_MARGIN` above the viewport bottom.
    pub fn scan(&mut self, viewport: PageViewport, now: Instant) {
        let limit = viewport.bottom() - SCROLL_REVEAL_MARGIN;
        let pending: Vec<ElementId> = self
            .entries
            .iter()
            .filter(|(_, e)| e.revealed_at.is_none() && e.bounds.top < limit)
            .map(|(id, _)| *id)
            .collect();
        for id in pending {
            self.mark_revealed(id, now);
        }
    }

    /// Idempotently sets the revealed marker. The first call records the
    /// instant; every later call is a no-op, so the two reveal paths cannot
    /// conflict.
    pub fn mark_revealed(&mut self, id: ElementId, now: Instant) {
        if let Some(entry) = self.entries.get_mut(&id) {
            entry.revealed_at.get_or_insert(now);
        }
    }

    /// Reveals every registered element with its transition already over,
    /// used when motion is reduced. Elements revealed earlier keep their
    /// original instant.
    pub fn complete_all(&mut self, now: Instant) {
        for entry in self.entries.values_mut() {
            let done = now
                .checked_sub(REVEAL_DURATION + entry.delay)
                .unwrap_or(now);
            entry.revealed_at.get_or_insert(done);
        }
    }

    #[must_use]
    pub fn is_revealed(&self, id: ElementId) -> bool {
        self.entries
            .get(&id)
            .is_some_and(|e| e.revealed_at.is_some())
    }

    /// Stagger delay assigned at registration, if the element is known.
    #[must_use]
    pub fn delay(&self, id: ElementId) -> Option<Duration> {
        self.entries.get(&id).map(|e| e.delay)
    }

    #[must_use]
    pub fn kind(&self, id: ElementId) -> AnimationKind {
        self.entries.get(&id).map_or(AnimationKind::None, |e| e.kind)
    }

    /// Transition progress at `now`, `0.0..=1.0`. Unregistered elements
    /// render fully visible rather than disappearing.
    #[must_use]
    pub fn progress(&self, id: ElementId, now: Instant) -> f32 {
        let Some(entry) = self.entries.get(&id) else {
            return 1.0;
        };
        let Some(revealed_at) = entry.revealed_at else {
            return 0.0;
        };
        let animating_since = revealed_at + entry.delay;
        if now <= animating_since {
            return 0.0;
        }
        let elapsed = now - animating_since;
        (elapsed.as_secs_f32() / REVEAL_DURATION.as_secs_f32()).min(1.0)
    }

    /// Whether any reveal transition is still running at `now`. Gates the
    /// animation tick so the timer stops once the page has settled.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.entries.values().any(|e| {
            e.revealed_at.is_some_and(|at| now < at + e.delay + REVEAL_DURATION)
        })
    }
}
