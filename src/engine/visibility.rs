// SPDX-License-Identifier: MPL-2.0
//! Viewport-intersection observer.
//!
//! The observer answers one question: which of the registered elements have
//! just become visible? It keeps a fired marker per registration so each
//! element reports at most once; re-observing an element resets the marker.
//!
//! There is no polling. The application calls [`Observer::sweep`] whenever
//! the platform reports a scroll, a resize, or a tick — the observer itself
//! never schedules work.

use super::{Bounds, PageViewport};
use crate::content::ElementId;
use std::collections::HashMap;

/// Observer configuration. Threshold and margin are inputs, not constants:
/// reveal registration uses 0.1 with a 50 px bottom margin, counters use
/// 0.5, lazy images use 0.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of the element's height that must be visible, 0.0..=1.0.
    pub threshold: f32,
    /// Shrinks the effective viewport bottom by this many logical pixels.
    pub bottom_margin: f32,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
struct Entry {
    bounds: Bounds,
    fired: bool,
}

/// Watches registered elements and reports, once per registration, when an
/// element's visible fraction crosses the configured threshold.
#[derive(Debug, Clone)]
pub struct Observer {
    options: ObserverOptions,
    entries: HashMap<ElementId, Entry>,
}

impl Observer {
    #[must_use]
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            entries: HashMap::new(),
        }
    }

    /// Registers an element. Observing an already-observed element updates
    /// its bounds and resets the fired marker, so it may report again.
    pub fn observe(&mut self, id: ElementId, bounds: Bounds) {
        self.entries.insert(
            id,
            Entry {
                bounds,
                fired: false,
            },
        );
    }

    /// Stops watching an element. One-shot consumers (counters, lazy
    /// images) call this after their first event.
    pub fn unobserve(&mut self, id: ElementId) {
        self.entries.remove(&id);
    }

    /// Number of elements currently observed.
    #[must_use]
    pub fn observed_count(&self) -> usize {
        self.entries.len()
    }

    /// Whether every observed element has already fired.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.entries.values().all(|e| e.fired)
    }

    /// Returns the ids that became visible in this viewport, unordered, and
    /// marks them fired. An element that already fired is never returned
    /// again unless it is re-observed.
    pub fn sweep(&mut self, viewport: PageViewport) -> Vec<ElementId> {
        let threshold = self.options.threshold;
        let margin = self.options.bottom_margin;
        let mut fired = Vec::new();

        for (id, entry) in &mut self.entries {
            if entry.fired {
                continue;
            }
            if visible_fraction(entry.bounds, viewport, margin) >= threshold.max(f32::EPSILON) {
                entry.fired = true;
                fired.push(*id);
            }
        }

        fired
    }
}

/// Fraction of the element's height inside the margin-adjusted viewport.
/// Returns 0.0 when the element does not intersect it at all.
fn visible_fraction(bounds: Bounds, viewport: PageViewport, bottom_margin: f32) -> f32 {
    if bounds.height <= 0.0 {
        return 0.0;
    }
    let view_top = viewport.scroll_top;
    let view_bottom = viewport.bottom() - bottom_margin;
    let overlap = (bounds.bottom().min(view_bottom) - bounds.top.max(view_top)).max(0.0);
    overlap / bounds.height
}
