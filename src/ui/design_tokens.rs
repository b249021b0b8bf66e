// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the toast card and the demo surface.
//!
//! ```
//! use iced_toast::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let hover = Color {
//!     a: opacity::OVERLAY_SUBTLE,
//!     ..palette::GRAY_400
//! };
//! assert!(hover.a < 1.0);
//! assert_eq!(spacing::MD, 16.0);
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Severity accents
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

pub mod typography {
    //! Font sizes, largest first.

    /// Demo surface heading
    pub const TITLE_MD: f32 = 20.0;
    /// Toast icon glyph
    pub const TITLE_SM: f32 = 18.0;
    /// Dismiss glyph
    pub const BODY_LG: f32 = 16.0;
    /// Toast message and button labels
    pub const BODY: f32 = 14.0;
    /// Queue status line
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    /// Severity accent around a toast card
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::SM > spacing::XXS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(radius::MD > radius::SM);
    assert!(sizing::TOAST_WIDTH > sizing::BUTTON_HEIGHT);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XXS * 4.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn severity_accents_are_distinct() {
        let accents = [
            palette::SUCCESS_500,
            palette::INFO_500,
            palette::WARNING_500,
            palette::ERROR_500,
        ];
        for (i, a) in accents.iter().enumerate() {
            for b in &accents[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
