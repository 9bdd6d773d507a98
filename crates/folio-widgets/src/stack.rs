//! Stack widget: overlapping children aligned within a shared box.

use folio_core::{
    ChildLayout, LayoutContext, LayoutError, LayoutResult, PaintContext, Point, Size, Widget,
};
use serde::{Deserialize, Serialize};

/// Where a stacked child sits within the stack's box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StackAlignment {
    /// Top-left corner
    #[default]
    TopLeft,
    /// Top edge, centered horizontally
    TopCenter,
    /// Top-right corner
    TopRight,
    /// Left edge, centered vertically
    CenterLeft,
    /// Center of the box
    Center,
    /// Right edge, centered vertically
    CenterRight,
    /// Bottom-left corner
    BottomLeft,
    /// Bottom edge, centered horizontally
    BottomCenter,
    /// Bottom-right corner
    BottomRight,
}

impl StackAlignment {
    const fn horizontal_ratio(self) -> f32 {
        match self {
            Self::TopLeft | Self::CenterLeft | Self::BottomLeft => 0.0,
            Self::TopCenter | Self::Center | Self::BottomCenter => 0.5,
            Self::TopRight | Self::CenterRight | Self::BottomRight => 1.0,
        }
    }

    const fn vertical_ratio(self) -> f32 {
        match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => 0.0,
            Self::CenterLeft | Self::Center | Self::CenterRight => 0.5,
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight => 1.0,
        }
    }
}

/// How the stack sizes itself against the offered constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StackFit {
    /// Size to the largest child
    #[default]
    Loose,
    /// Expand to the biggest size the constraints permit
    Expand,
}

/// Overlays children on top of each other.
///
/// Children are laid out against loosened constraints and each is placed
/// according to the stack's alignment. Later children paint over earlier
/// ones, and hit-testing visits them topmost first.
pub struct Stack {
    alignment: StackAlignment,
    fit: StackFit,
    children: Vec<Box<dyn Widget>>,
    label: Option<String>,
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

impl Stack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self {
            alignment: StackAlignment::default(),
            fit: StackFit::default(),
            children: Vec::new(),
            label: None,
        }
    }

    /// Set child alignment.
    #[must_use]
    pub fn alignment(mut self, alignment: StackAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the sizing policy.
    #[must_use]
    pub fn fit(mut self, fit: StackFit) -> Self {
        self.fit = fit;
        self
    }

    /// Add a child on top of the existing ones.
    #[must_use]
    pub fn child(mut self, widget: impl Widget + 'static) -> Self {
        self.children.push(Box::new(widget));
        self
    }

    /// Set debug label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl Widget for Stack {
    fn layout(&self, ctx: &LayoutContext<'_>) -> Result<LayoutResult, LayoutError> {
        let constraints = ctx.constraints;
        if self.children.is_empty() {
            let size = match self.fit {
                StackFit::Loose => constraints.smallest(),
                StackFit::Expand => constraints.biggest(),
            };
            return Ok(LayoutResult::leaf(size));
        }

        let loose = constraints.loosen();
        let mut results = Vec::with_capacity(self.children.len());
        let mut content = Size::ZERO;
        for child in &self.children {
            let result = ctx.layout_child(child.as_ref(), loose)?;
            content.width = content.width.max(result.size.width);
            content.height = content.height.max(result.size.height);
            results.push(result);
        }

        let size = match self.fit {
            StackFit::Loose => constraints.constrain(content),
            StackFit::Expand => {
                if constraints.is_bounded() {
                    constraints.biggest()
                } else {
                    constraints.constrain(content)
                }
            }
        };

        let hr = self.alignment.horizontal_ratio();
        let vr = self.alignment.vertical_ratio();
        let placements = results
            .into_iter()
            .map(|layout| {
                let offset = Point::new(
                    (size.width - layout.size.width) * hr,
                    (size.height - layout.size.height) * vr,
                );
                ChildLayout { offset, layout }
            })
            .collect();

        Ok(LayoutResult::leaf(size).with_children(placements))
    }

    fn paint(&self, _ctx: &mut PaintContext<'_>) {}

    fn children(&self) -> &[Box<dyn Widget>] {
        &self.children
    }

    fn debug_label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}
