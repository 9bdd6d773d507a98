//! Immutable theme threaded through layout and paint contexts.
//!
//! There is no global default; the pipeline passes a theme down by
//! reference and no widget mutates it.

use crate::color::Color;
use crate::text::TextStyle;
use serde::{Deserialize, Serialize};

/// A color scheme for document rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPalette {
    /// Primary accent color
    pub primary: Color,
    /// Page/background color
    pub background: Color,
    /// Default ink color for text and strokes
    pub on_background: Color,
    /// Error/annotation color
    pub error: Color,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            primary: Color::new(0.2, 0.47, 0.96, 1.0),
            background: Color::WHITE,
            on_background: Color::new(0.13, 0.13, 0.13, 1.0),
            error: Color::new(0.69, 0.18, 0.18, 1.0),
        }
    }
}

/// Spacing scale based on a single unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    /// Base spacing unit
    pub unit: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self { unit: 8.0 }
    }
}

impl Spacing {
    /// Get spacing for a given multiplier.
    #[must_use]
    pub fn get(&self, multiplier: f32) -> f32 {
        self.unit * multiplier
    }

    /// Small spacing (1x).
    #[must_use]
    pub fn sm(&self) -> f32 {
        self.unit
    }

    /// Medium spacing (2x).
    #[must_use]
    pub fn md(&self) -> f32 {
        self.unit * 2.0
    }

    /// Large spacing (4x).
    #[must_use]
    pub fn lg(&self) -> f32 {
        self.unit * 4.0
    }
}

/// Ambient defaults for layout and paint.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Theme {
    /// Default text style
    pub text_style: TextStyle,
    /// Color scheme
    pub palette: ColorPalette,
    /// Spacing scale
    pub spacing: Spacing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_default() {
        let theme = Theme::default();
        assert_eq!(theme.text_style.font_size, 12.0);
        assert_eq!(theme.palette.background, Color::WHITE);
        assert_eq!(theme.spacing.unit, 8.0);
    }

    #[test]
    fn test_spacing_scale() {
        let spacing = Spacing { unit: 4.0 };
        assert_eq!(spacing.sm(), 4.0);
        assert_eq!(spacing.md(), 8.0);
        assert_eq!(spacing.lg(), 16.0);
        assert_eq!(spacing.get(3.0), 12.0);
    }
}
