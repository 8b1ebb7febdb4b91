// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens.
//!
//! Every color, spacing step, and size used by the views comes from here so
//! the look stays consistent. The scale follows an 8 px baseline grid.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.10, 0.09, 0.08);
    pub const GRAY_700: Color = Color::from_rgb(0.30, 0.28, 0.26);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.52, 0.50);
    pub const GRAY_200: Color = Color::from_rgb(0.82, 0.80, 0.78);
    pub const GRAY_100: Color = Color::from_rgb(0.93, 0.92, 0.90);

    // Brand colors (warm brown scale, the studio's signature)
    pub const PRIMARY_200: Color = Color::from_rgb(0.85, 0.72, 0.58);
    pub const PRIMARY_400: Color = Color::from_rgb(0.70, 0.47, 0.26);
    pub const PRIMARY_500: Color = Color::from_rgb(0.55, 0.27, 0.07);
    pub const PRIMARY_700: Color = Color::from_rgb(0.40, 0.20, 0.06);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.863, 0.208, 0.271);
    pub const SUCCESS_500: Color = Color::from_rgb(0.157, 0.655, 0.271);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const SURFACE: f32 = 0.95;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_XL: f32 = 48.0;

    pub const TOAST_WIDTH: f32 = 400.0;
    pub const CONTENT_WIDTH: f32 = 960.0;
    pub const BACK_TO_TOP: f32 = 44.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const CAPTION: f32 = 12.0;
    pub const BODY: f32 = 14.0;
    pub const LEAD: f32 = 18.0;
    pub const HEADING: f32 = 28.0;
    pub const DISPLAY: f32 = 44.0;
    pub const STAT: f32 = 36.0;
}

// ============================================================================
// Border & Radius
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::new(0.0, 0.0),
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.2,
        },
        offset: Vector::new(0.0, 4.0),
        blur_radius: 12.0,
    };
}
