//! Text styling and the text-measurement boundary.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// Width of one character as a fraction of the font size, used when no
/// measurement service is available.
pub const FALLBACK_CHAR_WIDTH_FACTOR: f32 = 0.6;

/// Fraction of the font size above the baseline in the fallback metrics.
pub const FALLBACK_ASCENDER_FACTOR: f32 = 0.8;

/// Fraction of the font size below the baseline in the fallback metrics.
pub const FALLBACK_DESCENDER_FACTOR: f32 = 0.2;

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    /// Light (300)
    Light,
    /// Normal (400)
    #[default]
    Normal,
    /// Medium (500)
    Medium,
    /// Bold (700)
    Bold,
}

/// Font style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontStyle {
    /// Normal style
    #[default]
    Normal,
    /// Italic style
    Italic,
}

/// Text style for measurement and rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font family name
    pub font_family: String,
    /// Font size in points
    pub font_size: f32,
    /// Font weight
    pub font_weight: FontWeight,
    /// Font style
    pub font_style: FontStyle,
    /// Text color
    pub color: Color,
    /// Line height multiplier
    pub line_height: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "Helvetica".to_string(),
            font_size: 12.0,
            font_weight: FontWeight::Normal,
            font_style: FontStyle::Normal,
            color: Color::BLACK,
            line_height: 1.2,
        }
    }
}

impl TextStyle {
    /// Height of one rendered line.
    #[must_use]
    pub fn line_extent(&self) -> f32 {
        self.font_size * self.line_height
    }
}

/// Vertical metrics for a font at a given size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontMetrics {
    /// Total line height
    pub height: f32,
    /// Distance from baseline to the top of the tallest glyph
    pub ascender: f32,
    /// Distance from baseline to the bottom of the lowest glyph (positive)
    pub descender: f32,
    /// Distance from the top of the line box to the baseline
    pub baseline: f32,
}

impl FontMetrics {
    /// Fixed-ratio metrics used when no measurement service is present.
    #[must_use]
    pub fn fallback(style: &TextStyle) -> Self {
        let ascender = style.font_size * FALLBACK_ASCENDER_FACTOR;
        let descender = style.font_size * FALLBACK_DESCENDER_FACTOR;
        Self {
            height: style.line_extent(),
            ascender,
            descender,
            baseline: ascender,
        }
    }
}

/// Boundary contract for an accurate text-measurement service.
///
/// Implementations live in the font/document layer; widgets that render
/// text call this during their own layout and fall back to a fixed-ratio
/// estimate when it is absent.
pub trait TextMeasurer {
    /// Measure the rendered width of a single line of text.
    fn measure_width(&self, text: &str, style: &TextStyle) -> f32;

    /// Vertical metrics for the style's font at its size.
    fn font_metrics(&self, style: &TextStyle) -> FontMetrics;

    /// Break text into lines that each fit within `max_width`.
    fn wrap_text(&self, text: &str, max_width: f32, style: &TextStyle) -> Vec<String>;
}

/// Fixed-ratio width estimate: `char_count × font_size × factor`.
#[must_use]
pub fn estimate_text_width(text: &str, style: &TextStyle) -> f32 {
    text.chars().count() as f32 * style.font_size * FALLBACK_CHAR_WIDTH_FACTOR
}

/// Greedy word wrap against the fallback width estimate.
#[must_use]
pub fn estimate_wrap(text: &str, max_width: f32, style: &TextStyle) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if estimate_text_width(&candidate, style) <= max_width || current.is_empty() {
                current = candidate;
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_style_default() {
        let style = TextStyle::default();
        assert_eq!(style.font_size, 12.0);
        assert_eq!(style.font_weight, FontWeight::Normal);
        assert_eq!(style.color, Color::BLACK);
    }

    #[test]
    fn test_line_extent() {
        let style = TextStyle {
            font_size: 10.0,
            line_height: 1.5,
            ..TextStyle::default()
        };
        assert_eq!(style.line_extent(), 15.0);
    }

    #[test]
    fn test_fallback_metrics() {
        let style = TextStyle {
            font_size: 10.0,
            ..TextStyle::default()
        };
        let metrics = FontMetrics::fallback(&style);
        assert_eq!(metrics.ascender, 8.0);
        assert_eq!(metrics.descender, 2.0);
        assert_eq!(metrics.baseline, 8.0);
    }

    #[test]
    fn test_estimate_text_width() {
        let style = TextStyle {
            font_size: 10.0,
            ..TextStyle::default()
        };
        assert_eq!(estimate_text_width("abcd", &style), 24.0);
        assert_eq!(estimate_text_width("", &style), 0.0);
    }

    #[test]
    fn test_estimate_wrap_splits_on_width() {
        let style = TextStyle {
            font_size: 10.0,
            ..TextStyle::default()
        };
        // Each word is 24pt wide; "aaaa bbbb" is 54pt.
        let lines = estimate_wrap("aaaa bbbb cccc", 30.0, &style);
        assert_eq!(lines, vec!["aaaa", "bbbb", "cccc"]);
    }

    #[test]
    fn test_estimate_wrap_keeps_fitting_words_together() {
        let style = TextStyle {
            font_size: 10.0,
            ..TextStyle::default()
        };
        let lines = estimate_wrap("aa bb", 100.0, &style);
        assert_eq!(lines, vec!["aa bb"]);
    }

    #[test]
    fn test_estimate_wrap_overlong_word_gets_own_line() {
        let style = TextStyle {
            font_size: 10.0,
            ..TextStyle::default()
        };
        let lines = estimate_wrap("aaaaaaaaaa bb", 30.0, &style);
        assert_eq!(lines, vec!["aaaaaaaaaa", "bb"]);
    }

    #[test]
    fn test_estimate_wrap_preserves_paragraph_breaks() {
        let style = TextStyle::default();
        let lines = estimate_wrap("one\ntwo", 1000.0, &style);
        assert_eq!(lines, vec!["one", "two"]);
    }
}
