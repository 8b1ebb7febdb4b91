// SPDX-License-Identifier: MPL-2.0
//! User interface layer.

pub mod design_tokens;
pub mod loading_screen;
pub mod navbar;
pub mod notifications;
pub mod sections;
pub mod widgets;
