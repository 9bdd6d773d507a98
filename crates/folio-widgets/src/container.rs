//! Container widget: padding, optional fixed size, background fill.

use folio_core::{
    ChildLayout, Color, EdgeInsets, LayoutContext, LayoutError, LayoutResult, PaintContext, Rect,
    Size, Widget,
};

/// A convenience box combining padding, an optional fixed size, and an
/// optional background fill around at most one child.
pub struct Container {
    padding: EdgeInsets,
    width: Option<f32>,
    height: Option<f32>,
    color: Option<Color>,
    children: Vec<Box<dyn Widget>>,
    label: Option<String>,
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Container {
    /// Create an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self {
            padding: EdgeInsets::ZERO,
            width: None,
            height: None,
            color: None,
            children: Vec::new(),
            label: None,
        }
    }

    /// Set padding.
    #[must_use]
    pub fn padding(mut self, insets: EdgeInsets) -> Self {
        self.padding = insets;
        self
    }

    /// Set a fixed width.
    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set a fixed height.
    #[must_use]
    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Set the background fill color.
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the child.
    #[must_use]
    pub fn child(mut self, widget: impl Widget + 'static) -> Self {
        self.children = vec![Box::new(widget)];
        self
    }

    /// Set debug label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl Widget for Container {
    fn layout(&self, ctx: &LayoutContext<'_>) -> Result<LayoutResult, LayoutError> {
        let base = ctx.constraints.tighten(self.width, self.height);

        if let Some(child) = self.children.first() {
            let inner = base.deflate(self.padding).loosen();
            let child_result = ctx.layout_child(child.as_ref(), inner)?;
            let size = base.inflate(self.padding, child_result.size);
            let baseline = child_result.baseline.map(|b| b + self.padding.top);
            let overflow = child_result.overflow;

            let mut result = LayoutResult::leaf(size).with_children(vec![ChildLayout {
                offset: self.padding.top_left(),
                layout: child_result,
            }]);
            result.baseline = baseline;
            result.overflow = overflow;
            Ok(result)
        } else {
            let fallback = Size::new(
                self.width.unwrap_or_else(|| self.padding.horizontal()),
                self.height.unwrap_or_else(|| self.padding.vertical()),
            );
            Ok(LayoutResult::leaf(base.constrain(fallback)))
        }
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        if let Some(color) = self.color {
            ctx.sink.set_fill_color(color);
            ctx.sink.draw_rect(Rect::from_size(ctx.size));
            ctx.sink.fill_path();
        }
    }

    fn children(&self) -> &[Box<dyn Widget>] {
        &self.children
    }

    fn debug_label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{BoxConstraints, Point, RecordingSink, SinkCommand, TextDirection, Theme};

    struct FixedBox(Size);

    impl Widget for FixedBox {
        fn layout(&self, ctx: &LayoutContext<'_>) -> Result<LayoutResult, LayoutError> {
            Ok(LayoutResult::leaf(ctx.constraints.constrain(self.0)))
        }
        fn paint(&self, _ctx: &mut PaintContext<'_>) {}
    }

    #[test]
    fn test_container_wraps_child_with_padding() {
        let theme = Theme::default();
        let ctx = LayoutContext::new(BoxConstraints::loose(Size::new(200.0, 200.0)), &theme);
        let container = Container::new()
            .padding(EdgeInsets::all(8.0))
            .child(FixedBox(Size::new(40.0, 20.0)));

        let result = container.layout(&ctx).unwrap();
        assert_eq!(result.size, Size::new(56.0, 36.0));
        assert_eq!(result.children[0].offset, Point::new(8.0, 8.0));
    }

    #[test]
    fn test_container_fixed_size_wins() {
        let theme = Theme::default();
        let ctx = LayoutContext::new(BoxConstraints::loose(Size::new(200.0, 200.0)), &theme);
        let container = Container::new()
            .width(100.0)
            .height(50.0)
            .child(FixedBox(Size::new(10.0, 10.0)));

        let result = container.layout(&ctx).unwrap();
        assert_eq!(result.size, Size::new(100.0, 50.0));
    }

    #[test]
    fn test_empty_container_sizes_from_padding() {
        let theme = Theme::default();
        let ctx = LayoutContext::new(BoxConstraints::loose(Size::new(200.0, 200.0)), &theme);
        let container = Container::new().padding(EdgeInsets::symmetric(5.0, 3.0));

        let result = container.layout(&ctx).unwrap();
        assert_eq!(result.size, Size::new(10.0, 6.0));
    }

    #[test]
    fn test_container_paints_background() {
        let theme = Theme::default();
        let container = Container::new().color(Color::WHITE);
        let mut sink = RecordingSink::new();
        let mut ctx = PaintContext {
            sink: &mut sink,
            size: Size::new(30.0, 20.0),
            theme: &theme,
            text_direction: TextDirection::LeftToRight,
            measurer: None,
        };
        container.paint(&mut ctx);

        assert_eq!(
            sink.commands(),
            &[
                SinkCommand::SetFillColor(Color::WHITE),
                SinkCommand::DrawRect(Rect::new(0.0, 0.0, 30.0, 20.0)),
                SinkCommand::FillPath,
            ]
        );
    }

    #[test]
    fn test_container_without_color_paints_nothing() {
        let theme = Theme::default();
        let container = Container::new();
        let mut sink = RecordingSink::new();
        let mut ctx = PaintContext {
            sink: &mut sink,
            size: Size::new(30.0, 20.0),
            theme: &theme,
            text_direction: TextDirection::LeftToRight,
            measurer: None,
        };
        container.paint(&mut ctx);
        assert!(sink.is_empty());
    }
}
