// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, spacing, size and timing used by the carousel views.

## Organization

- **Palette**: Base colors (near-black stage, gold accent)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_carousel::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let overlay_bg = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    /// Page background behind the stage (#0a0a0a).
    pub const GRAY_950: Color = Color::from_rgb(0.039, 0.039, 0.039);
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    /// Footer counter text (#666).
    pub const GRAY_500: Color = Color::from_rgb(0.4, 0.4, 0.4);
    /// Subtitle text (#999).
    pub const GRAY_400: Color = Color::from_rgb(0.6, 0.6, 0.6);
    /// Caption description text.
    pub const GRAY_300: Color = Color::from_rgb(0.82, 0.835, 0.86);
    /// Heading text (#f5f5f5).
    pub const GRAY_50: Color = Color::from_rgb(0.961, 0.961, 0.961);

    /// Accent used for hover states, the active dot and the thumbnail ring (#d4af37).
    pub const GOLD_500: Color = Color::from_rgb(0.831, 0.686, 0.216);

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
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.3;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const INACTIVE_THUMBNAIL: f32 = 0.6;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
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
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    /// Toolbar icons (play/pause, download, fullscreen).
    pub const ICON_MD: f32 = 20.0;
    /// Previous/next arrows.
    pub const ICON_LG: f32 = 24.0;
    /// Fullscreen arrows and close button.
    pub const ICON_XL: f32 = 32.0;

    // Stage
    pub const STAGE_MAX_WIDTH: f32 = 896.0;
    /// 16:9 at the maximum stage width.
    pub const STAGE_HEIGHT: f32 = 504.0;
    pub const PAGE_MAX_WIDTH: f32 = 1152.0;

    // Dot indicators
    pub const DOT: f32 = 12.0;
    pub const DOT_ACTIVE_WIDTH: f32 = 48.0;

    // Thumbnails
    pub const THUMBNAIL_HEIGHT: f32 = 80.0;

    // Component widths
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Display: the page heading
    //! - Titles: slide captions
    //! - Body: descriptions, toasts
    //! - Caption: counter and hints

    pub const DISPLAY: f32 = 48.0;
    pub const TITLE_LG: f32 = 32.0;
    pub const TITLE_MD: f32 = 24.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    /// Toast accents, active thumbnail ring.
    pub const WIDTH_MD: f32 = 2.0;
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

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const XL: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 25.0 },
        blur_radius: 50.0,
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

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::DOT_ACTIVE_WIDTH > sizing::DOT);
    assert!(sizing::PAGE_MAX_WIDTH > sizing::STAGE_MAX_WIDTH);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
