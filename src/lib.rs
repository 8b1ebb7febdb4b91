// SPDX-License-Identifier: MPL-2.0
//! `iced_vitrine` is a scroll-animated studio showcase built with the Iced
//! GUI framework.
//!
//! It renders a single long page whose sections reveal as they scroll into
//! view, with animated statistics, a filterable portfolio, and a validated
//! contact form. The animation engine is a set of plain state machines under
//! [`engine`], kept free of UI types so the behavior is unit-testable.

#![doc(html_root_url = "https://docs.rs/iced_vitrine/0.2.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
