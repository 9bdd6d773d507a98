//! Text widget for laying out and painting runs of text.

use folio_core::{
    estimate_text_width, estimate_wrap, Color, FontMetrics, LayoutContext, LayoutError,
    LayoutResult, PaintContext, Point, Size, TextMeasurer, TextStyle, Widget,
};

/// A leaf widget that measures, wraps, and paints a run of text.
///
/// Uses the ambient [`TextMeasurer`] when one is present; otherwise falls
/// back to a fixed-ratio width estimate.
pub struct Text {
    /// Text content
    content: String,
    /// Font size override (theme default otherwise)
    font_size: Option<f32>,
    /// Color override
    color: Option<Color>,
    /// Font family override
    font_family: Option<String>,
    /// Debug label
    label: Option<String>,
}

impl Text {
    /// Create a new text widget.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            font_size: None,
            color: None,
            font_family: None,
            label: None,
        }
    }

    /// Set font size.
    #[must_use]
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Set text color.
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set font family.
    #[must_use]
    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Set debug label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the text content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Per-widget overrides merged over the theme default.
    fn effective_style(&self, default: &TextStyle) -> TextStyle {
        let mut style = default.clone();
        if let Some(size) = self.font_size {
            style.font_size = size;
        }
        if let Some(color) = self.color {
            style.color = color;
        }
        if let Some(family) = &self.font_family {
            style.font_family.clone_from(family);
        }
        style
    }

    fn metrics(style: &TextStyle, measurer: Option<&dyn TextMeasurer>) -> FontMetrics {
        measurer.map_or_else(|| FontMetrics::fallback(style), |m| m.font_metrics(style))
    }

    fn line_width(line: &str, style: &TextStyle, measurer: Option<&dyn TextMeasurer>) -> f32 {
        measurer.map_or_else(
            || estimate_text_width(line, style),
            |m| m.measure_width(line, style),
        )
    }

    fn break_lines(
        &self,
        max_width: f32,
        style: &TextStyle,
        measurer: Option<&dyn TextMeasurer>,
    ) -> Vec<String> {
        if max_width.is_finite() {
            measurer.map_or_else(
                || estimate_wrap(&self.content, max_width, style),
                |m| m.wrap_text(&self.content, max_width, style),
            )
        } else {
            self.content.split('\n').map(str::to_string).collect()
        }
    }
}

impl Widget for Text {
    fn layout(&self, ctx: &LayoutContext<'_>) -> Result<LayoutResult, LayoutError> {
        let style = self.effective_style(&ctx.theme.text_style);
        let metrics = Self::metrics(&style, ctx.measurer);
        let lines = self.break_lines(ctx.constraints.max_width, &style, ctx.measurer);

        let width = lines
            .iter()
            .map(|line| Self::line_width(line, &style, ctx.measurer))
            .fold(0.0f32, f32::max);
        let height = lines.len() as f32 * style.line_extent();

        let size = ctx.constraints.constrain(Size::new(width, height));
        Ok(LayoutResult::leaf(size).with_baseline(metrics.baseline))
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let style = self.effective_style(&ctx.theme.text_style);
        let metrics = Self::metrics(&style, ctx.measurer);
        let lines = self.break_lines(ctx.size.width, &style, ctx.measurer);

        ctx.sink.begin_text();
        ctx.sink.set_font(&style.font_family, style.font_size);
        ctx.sink.set_fill_color(style.color);
        ctx.sink
            .move_text_position(Point::new(0.0, metrics.baseline));
        for (index, line) in lines.iter().enumerate() {
            if index > 0 {
                ctx.sink
                    .move_text_position(Point::new(0.0, style.line_extent()));
            }
            ctx.sink.show_text(line);
        }
        ctx.sink.end_text();
    }

    fn debug_label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}
