//! Fixed-extent box, with or without a child.

use folio_core::{
    ChildLayout, LayoutContext, LayoutError, LayoutResult, PaintContext, Point, Size, Widget,
};

/// Forces an exact width and/or height via tightened constraints.
///
/// Without a child it is an empty spacer of the given extent.
pub struct SizedBox {
    width: Option<f32>,
    height: Option<f32>,
    children: Vec<Box<dyn Widget>>,
    label: Option<String>,
}

impl Default for SizedBox {
    fn default() -> Self {
        Self::new()
    }
}

impl SizedBox {
    /// Create an empty sized box.
    #[must_use]
    pub fn new() -> Self {
        Self {
            width: None,
            height: None,
            children: Vec::new(),
            label: None,
        }
    }

    /// Create an empty spacer with an exact size.
    #[must_use]
    pub fn exact(width: f32, height: f32) -> Self {
        Self::new().width(width).height(height)
    }

    /// Set the fixed width.
    #[must_use]
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the fixed height.
    #[must_use]
    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
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

impl Widget for SizedBox {
    fn layout(&self, ctx: &LayoutContext<'_>) -> Result<LayoutResult, LayoutError> {
        let constraints = ctx.constraints.tighten(self.width, self.height);

        if let Some(child) = self.children.first() {
            let child_result = ctx.layout_child(child.as_ref(), constraints)?;
            let size = constraints.constrain(child_result.size);
            let baseline = child_result.baseline;
            let mut result = LayoutResult::leaf(size).with_children(vec![ChildLayout {
                offset: Point::ORIGIN,
                layout: child_result,
            }]);
            result.baseline = baseline;
            Ok(result)
        } else {
            let size = constraints.constrain(Size::new(
                self.width.unwrap_or(0.0),
                self.height.unwrap_or(0.0),
            ));
            Ok(LayoutResult::leaf(size))
        }
    }

    fn paint(&self, _ctx: &mut PaintContext<'_>) {}

    fn children(&self) -> &[Box<dyn Widget>] {
        &self.children
    }

    fn debug_label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}
