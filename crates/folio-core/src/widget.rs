//! The layout/paint protocol every widget satisfies.
//!
//! Widgets are immutable descriptions: `layout` computes a size within the
//! offered constraints (recursively laying out children with derived
//! constraints and publishing their offsets), and `paint` emits drawing
//! primitives for the widget itself once its size is final. Calling
//! `layout` twice with an identical context yields identical results.

use crate::constraints::BoxConstraints;
use crate::error::LayoutError;
use crate::geometry::{Point, Size};
use crate::perf::{PerfSampler, UNLABELED};
use crate::sink::DrawingSink;
use crate::text::TextMeasurer;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Direction in which text flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextDirection {
    /// Left-to-right scripts
    #[default]
    LeftToRight,
    /// Right-to-left scripts
    RightToLeft,
}

/// A layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// The x axis
    Horizontal,
    /// The y axis
    Vertical,
}

impl Axis {
    /// The other axis.
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Extent of a size along this axis.
    #[must_use]
    pub fn main_of(self, size: Size) -> f32 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Extent of a size across this axis.
    #[must_use]
    pub fn cross_of(self, size: Size) -> f32 {
        self.flip().main_of(size)
    }

    /// Build a size from main- and cross-axis extents.
    #[must_use]
    pub fn pack_size(self, main: f32, cross: f32) -> Size {
        match self {
            Self::Horizontal => Size::new(main, cross),
            Self::Vertical => Size::new(cross, main),
        }
    }

    /// Build an offset from main- and cross-axis positions.
    #[must_use]
    pub fn pack_offset(self, main: f32, cross: f32) -> Point {
        match self {
            Self::Horizontal => Point::new(main, cross),
            Self::Vertical => Point::new(cross, main),
        }
    }
}

/// A soft overflow condition: children exceeded the offered extent.
///
/// Recorded on the result rather than raised so a caller may clip, log,
/// or re-flow; painting proceeds with the over-computed sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Overflow {
    /// Axis on which content overflowed
    pub axis: Axis,
    /// Amount by which content exceeds the available extent
    pub amount: f32,
}

/// Placement of one structural child, relative to the parent's content
/// origin.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildLayout {
    /// Offset of the child's top-left corner
    pub offset: Point,
    /// The child's own layout result
    pub layout: LayoutResult,
}

/// Result of laying out a widget.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    /// Computed size; must satisfy the constraints that produced it
    pub size: Size,
    /// Distance from the top edge to the text baseline, if the widget
    /// participates in baseline alignment
    pub baseline: Option<f32>,
    /// Whether the widget needs to be repainted
    pub needs_repaint: bool,
    /// Overflow condition, if children exceeded the available extent
    pub overflow: Option<Overflow>,
    /// Placements for each structural child, in `children()` order
    pub children: Vec<ChildLayout>,
}

impl LayoutResult {
    /// Result for a childless widget.
    #[must_use]
    pub fn leaf(size: Size) -> Self {
        Self {
            size,
            baseline: None,
            needs_repaint: true,
            overflow: None,
            children: Vec::new(),
        }
    }

    /// Attach a baseline.
    #[must_use]
    pub fn with_baseline(mut self, baseline: f32) -> Self {
        self.baseline = Some(baseline);
        self
    }

    /// Attach child placements.
    #[must_use]
    pub fn with_children(mut self, children: Vec<ChildLayout>) -> Self {
        self.children = children;
        self
    }
}

/// Ambient context for one layout call; passed down the tree by value,
/// never mutated in place.
#[derive(Clone, Copy)]
pub struct LayoutContext<'a> {
    /// Constraints offered to the widget being laid out
    pub constraints: BoxConstraints,
    /// Ambient theme
    pub theme: &'a Theme,
    /// Ambient text direction
    pub text_direction: TextDirection,
    /// Optional accurate text-measurement service
    pub measurer: Option<&'a dyn TextMeasurer>,
    /// Optional per-widget layout timing
    pub perf: Option<&'a PerfSampler>,
    /// Re-check derived constraints before descending into children
    pub validate_constraints: bool,
}

impl<'a> LayoutContext<'a> {
    /// Create a context with no measurement service or sampling.
    #[must_use]
    pub fn new(constraints: BoxConstraints, theme: &'a Theme) -> Self {
        Self {
            constraints,
            theme,
            text_direction: TextDirection::default(),
            measurer: None,
            perf: None,
            validate_constraints: false,
        }
    }

    /// Attach a text-measurement service.
    #[must_use]
    pub fn with_measurer(mut self, measurer: &'a dyn TextMeasurer) -> Self {
        self.measurer = Some(measurer);
        self
    }

    /// Attach a performance sampler.
    #[must_use]
    pub fn with_perf(mut self, perf: &'a PerfSampler) -> Self {
        self.perf = Some(perf);
        self
    }

    /// Enable constraint re-validation for derived constraints.
    #[must_use]
    pub fn with_validation(mut self) -> Self {
        self.validate_constraints = true;
        self
    }

    /// Derive a context for a child with new constraints.
    #[must_use]
    pub fn for_child(&self, constraints: BoxConstraints) -> Self {
        Self {
            constraints,
            ..*self
        }
    }

    /// Lay out a child with derived constraints.
    ///
    /// This is the single funnel through which parents descend: it applies
    /// the optional constraint re-validation and per-widget timing.
    ///
    /// # Errors
    ///
    /// Propagates [`LayoutError::InvalidConstraints`] from validation or
    /// from the child's own layout.
    pub fn layout_child(
        &self,
        child: &dyn Widget,
        constraints: BoxConstraints,
    ) -> Result<LayoutResult, LayoutError> {
        if self.validate_constraints {
            constraints.check()?;
        }
        let ctx = self.for_child(constraints);
        match self.perf {
            Some(perf) => {
                let start = Instant::now();
                let result = child.layout(&ctx);
                perf.record(child.debug_label().unwrap_or(UNLABELED), start.elapsed());
                result
            }
            None => child.layout(&ctx),
        }
    }
}

/// Context for one paint call; the sink is the only shared mutable
/// resource a widget touches.
pub struct PaintContext<'a> {
    /// The drawing sink receiving primitives
    pub sink: &'a mut dyn DrawingSink,
    /// The widget's finalized size
    pub size: Size,
    /// Ambient theme
    pub theme: &'a Theme,
    /// Ambient text direction
    pub text_direction: TextDirection,
    /// The measurement service used during layout, so text reproduces
    /// the same line breaks when painting
    pub measurer: Option<&'a dyn TextMeasurer>,
}

/// Core widget trait: an immutable, polymorphic layout description.
pub trait Widget: Send + Sync {
    /// Compute a size within the offered constraints, recursively laying
    /// out children and publishing their placements.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConstraints`] when the incoming or a
    /// derived constraint set is malformed.
    fn layout(&self, ctx: &LayoutContext<'_>) -> Result<LayoutResult, LayoutError>;

    /// Emit drawing primitives for this widget alone; children are painted
    /// by the render pipeline at their recorded offsets.
    fn paint(&self, ctx: &mut PaintContext<'_>);

    /// Structural children, in paint order.
    fn children(&self) -> &[Box<dyn Widget>] {
        &[]
    }

    /// Optional label for diagnostics and performance sampling.
    fn debug_label(&self) -> Option<&str> {
        None
    }
}
