//! Padding widget: insets a single child.

use folio_core::{
    ChildLayout, EdgeInsets, LayoutContext, LayoutError, LayoutResult, PaintContext, Widget,
};

/// Insets its child by a fixed [`EdgeInsets`].
///
/// The child is laid out against deflated constraints and positioned at
/// the inset's top-left corner; the reported size is the child's size
/// inflated by the inset totals.
pub struct Padding {
    insets: EdgeInsets,
    children: Vec<Box<dyn Widget>>,
    label: Option<String>,
}

impl Padding {
    /// Create a padding widget around a child.
    #[must_use]
    pub fn new(insets: EdgeInsets, child: impl Widget + 'static) -> Self {
        Self {
            insets,
            children: vec![Box::new(child)],
            label: None,
        }
    }

    /// Set debug label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the insets.
    #[must_use]
    pub const fn insets(&self) -> EdgeInsets {
        self.insets
    }
}

impl Widget for Padding {
    fn layout(&self, ctx: &LayoutContext<'_>) -> Result<LayoutResult, LayoutError> {
        let inner = ctx.constraints.deflate(self.insets);
        let child_result = ctx.layout_child(self.children[0].as_ref(), inner)?;

        let size = ctx.constraints.inflate(self.insets, child_result.size);
        let baseline = child_result.baseline.map(|b| b + self.insets.top);
        let overflow = child_result.overflow;

        let mut result = LayoutResult::leaf(size).with_children(vec![ChildLayout {
            offset: self.insets.top_left(),
            layout: child_result,
        }]);
        result.baseline = baseline;
        result.overflow = overflow;
        Ok(result)
    }

    fn paint(&self, _ctx: &mut PaintContext<'_>) {}

    fn children(&self) -> &[Box<dyn Widget>] {
        &self.children
    }

    fn debug_label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}
