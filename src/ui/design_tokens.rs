// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens for the application UI.
//!
//! Organized as palette, opacity, spacing, sizing, typography, radius,
//! and shadow scales. Keep the ratios intact when adjusting values;
//! the compile-time checks at the bottom guard the orderings the
//! components rely on.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (ocean blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.36, 0.65, 0.92);
    pub const PRIMARY_500: Color = Color::from_rgb(0.24, 0.55, 0.85);
    pub const PRIMARY_600: Color = Color::from_rgb(0.16, 0.45, 0.75);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    /// Backdrop behind the lightbox.
    pub const BACKDROP: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Navbar height, matching the window chrome rhythm.
    pub const NAVBAR_HEIGHT: f32 = 48.0;

    /// Height of the Home hero banner.
    pub const HERO_HEIGHT: f32 = 320.0;
    /// Height of the Home background band.
    pub const BAND_HEIGHT: f32 = 180.0;
    /// Width of one featured card.
    pub const CARD_WIDTH: f32 = 220.0;
    /// Height of one featured card image.
    pub const CARD_HEIGHT: f32 = 150.0;

    /// Height of one gallery grid cell.
    pub const GRID_CELL_HEIGHT: f32 = 200.0;

    /// Maximum width of the lightbox image area.
    pub const LIGHTBOX_MAX_WIDTH: f32 = 1100.0;
    /// Maximum height of the lightbox image area.
    pub const LIGHTBOX_MAX_HEIGHT: f32 = 640.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large title - page headings.
    pub const TITLE_LG: f32 = 30.0;
    /// Medium title - section headings.
    pub const TITLE_MD: f32 = 20.0;
    /// Standard body - most UI text.
    pub const BODY: f32 = 14.0;
    /// Caption - counts, captions, small info.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::BACKDROP > opacity::OVERLAY_STRONG);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::HERO_HEIGHT > sizing::BAND_HEIGHT);
};
