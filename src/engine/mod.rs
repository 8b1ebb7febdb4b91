// SPDX-License-Identifier: MPL-2.0
//! Scroll-driven animation engine.
//!
//! The engine modules are platform-independent state machines driven by the
//! application shell: scroll events feed the [`visibility::Observer`], which
//! in turn triggers the [`reveal::RevealAnimator`] and the
//! [`counter::CounterAnimator`]; timer subscriptions advance the counters and
//! the [`typewriter::Typewriter`]. None of them touch Iced directly, so all
//! of their behavior is testable with plain unit tests.

pub mod counter;
pub mod reveal;
pub mod typewriter;
pub mod visibility;

/// Vertical extent of an element in absolute page coordinates.
///
/// The page scrolls only vertically, so horizontal geometry never affects
/// visibility decisions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Distance from the top of the page to the element's top edge.
    pub top: f32,
    /// Element height in logical pixels.
    pub height: f32,
}

impl Bounds {
    #[must_use]
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    /// Bottom edge in absolute page coordinates.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// The currently visible slice of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageViewport {
    /// Current scroll offset from the top of the page.
    pub scroll_top: f32,
    /// Height of the window in logical pixels.
    pub height: f32,
}

impl PageViewport {
    #[must_use]
    pub fn new(scroll_top: f32, height: f32) -> Self {
        Self { scroll_top, height }
    }

    /// Bottom edge of the viewport in absolute page coordinates.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.scroll_top + self.height
    }
}
