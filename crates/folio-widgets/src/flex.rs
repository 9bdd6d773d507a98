//! Row/column flex container.
//!
//! Sizing runs in two passes: inflexible children are measured with
//! loosened main-axis constraints, then the remaining free extent is
//! distributed across flexible children in proportion to their flex
//! factors. A positioning pass then places children according to the
//! main- and cross-axis alignment policies.

use folio_core::{
    Axis, BoxConstraints, ChildLayout, LayoutContext, LayoutError, LayoutResult, Overflow,
    PaintContext, Size, Widget,
};
use serde::{Deserialize, Serialize};

/// Main axis alignment for flex layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MainAxisAlignment {
    /// Pack children at the start
    #[default]
    Start,
    /// Pack children at the end
    End,
    /// Center children
    Center,
    /// Distribute free space evenly between children
    SpaceBetween,
    /// Distribute free space evenly around children
    SpaceAround,
    /// Distribute free space evenly, including before the first and after
    /// the last child
    SpaceEvenly,
}

/// Cross axis alignment for flex children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CrossAxisAlignment {
    /// Align to the start
    Start,
    /// Align to the end
    End,
    /// Center children
    #[default]
    Center,
    /// Force children to fill the cross extent
    Stretch,
    /// Align each child's text baseline to the deepest baseline
    Baseline,
}

/// How much main-axis room the container claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MainAxisSize {
    /// Shrink to the children's total extent
    Min,
    /// Expand to fill the offered extent
    #[default]
    Max,
}

/// Whether a flexible child must consume exactly its allotted share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlexFit {
    /// The child is forced to exactly its share of free space
    Tight,
    /// The child may be smaller than its share
    #[default]
    Loose,
}

/// Per-child flex metadata.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct FlexFactor {
    /// Flex weight; zero means not flexible
    flex: f32,
    /// Fit mode for flexible children
    fit: FlexFit,
}

/// Flex container laying out children along one axis.
pub struct Flex {
    axis: Axis,
    main_axis_alignment: MainAxisAlignment,
    cross_axis_alignment: CrossAxisAlignment,
    main_axis_size: MainAxisSize,
    spacing: f32,
    children: Vec<Box<dyn Widget>>,
    factors: Vec<FlexFactor>,
    label: Option<String>,
}

impl Flex {
    fn new(axis: Axis) -> Self {
        Self {
            axis,
            main_axis_alignment: MainAxisAlignment::default(),
            cross_axis_alignment: CrossAxisAlignment::default(),
            main_axis_size: MainAxisSize::default(),
            spacing: 0.0,
            children: Vec::new(),
            factors: Vec::new(),
            label: None,
        }
    }

    /// Create a horizontal flex container.
    #[must_use]
    pub fn row() -> Self {
        Self::new(Axis::Horizontal)
    }

    /// Create a vertical flex container.
    #[must_use]
    pub fn column() -> Self {
        Self::new(Axis::Vertical)
    }

    /// Set main axis alignment.
    #[must_use]
    pub fn main_axis_alignment(mut self, alignment: MainAxisAlignment) -> Self {
        self.main_axis_alignment = alignment;
        self
    }

    /// Set cross axis alignment.
    #[must_use]
    pub fn cross_axis_alignment(mut self, alignment: CrossAxisAlignment) -> Self {
        self.cross_axis_alignment = alignment;
        self
    }

    /// Set main axis sizing policy.
    #[must_use]
    pub fn main_axis_size(mut self, size: MainAxisSize) -> Self {
        self.main_axis_size = size;
        self
    }

    /// Set fixed spacing between adjacent children.
    #[must_use]
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Add an inflexible child.
    #[must_use]
    pub fn child(mut self, widget: impl Widget + 'static) -> Self {
        self.children.push(Box::new(widget));
        self.factors.push(FlexFactor {
            flex: 0.0,
            fit: FlexFit::Loose,
        });
        self
    }

    /// Add a flexible child with the given flex factor and fit.
    #[must_use]
    pub fn flexible(mut self, widget: impl Widget + 'static, flex: f32, fit: FlexFit) -> Self {
        self.children.push(Box::new(widget));
        self.factors.push(FlexFactor {
            flex: flex.max(0.0),
            fit,
        });
        self
    }

    /// Add a child forced to consume exactly its share of free space.
    #[must_use]
    pub fn expanded(self, widget: impl Widget + 'static) -> Self {
        self.flexible(widget, 1.0, FlexFit::Tight)
    }

    /// Add a tightly-fit child with an explicit flex factor.
    #[must_use]
    pub fn expanded_flex(self, widget: impl Widget + 'static, flex: f32) -> Self {
        self.flexible(widget, flex, FlexFit::Tight)
    }

    /// Set debug label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    fn axis_max(&self, constraints: BoxConstraints) -> (f32, f32) {
        match self.axis {
            Axis::Horizontal => (constraints.max_width, constraints.max_height),
            Axis::Vertical => (constraints.max_height, constraints.max_width),
        }
    }

    fn child_constraints(
        &self,
        main_min: f32,
        main_max: f32,
        cross_tight: bool,
        cross_max: f32,
    ) -> BoxConstraints {
        let (cross_min, cross_max) = if cross_tight {
            (cross_max, cross_max)
        } else {
            (0.0, cross_max)
        };
        match self.axis {
            Axis::Horizontal => BoxConstraints {
                min_width: main_min,
                max_width: main_max,
                min_height: cross_min,
                max_height: cross_max,
            },
            Axis::Vertical => BoxConstraints {
                min_width: cross_min,
                max_width: cross_max,
                min_height: main_min,
                max_height: main_max,
            },
        }
    }
}

impl Widget for Flex {
    fn layout(&self, ctx: &LayoutContext<'_>) -> Result<LayoutResult, LayoutError> {
        let constraints = ctx.constraints;
        let n = self.children.len();
        if n == 0 {
            return Ok(LayoutResult::leaf(constraints.constrain(Size::ZERO)));
        }

        let axis = self.axis;
        let (main_max, cross_max) = self.axis_max(constraints);
        let cross_tight = self.cross_axis_alignment == CrossAxisAlignment::Stretch
            && cross_max.is_finite();
        let spacing_total = self.spacing * (n - 1) as f32;

        // Intrinsic pass: inflexible children measure with loosened
        // main-axis constraints.
        let mut results: Vec<Option<LayoutResult>> = (0..n).map(|_| None).collect();
        let mut fixed_main = 0.0f32;
        for (i, child) in self.children.iter().enumerate() {
            if self.factors[i].flex > 0.0 {
                continue;
            }
            let cc = self.child_constraints(0.0, main_max, cross_tight, cross_max);
            let result = ctx.layout_child(child.as_ref(), cc)?;
            fixed_main += axis.main_of(result.size);
            results[i] = Some(result);
        }

        let used = fixed_main + spacing_total;
        let total_flex: f32 = self.factors.iter().map(|f| f.flex).sum();

        // Flex pass: distribute the free extent proportionally.
        let expand = self.main_axis_size == MainAxisSize::Max && main_max.is_finite();
        let mut free = if expand { main_max - used } else { 0.0 };
        let mut overflow_amount = 0.0f32;
        if free < 0.0 {
            overflow_amount = -free;
            free = 0.0;
        }

        if total_flex > 0.0 {
            let flex_indices: Vec<usize> = (0..n).filter(|&i| self.factors[i].flex > 0.0).collect();
            let last = flex_indices.len() - 1;
            let mut assigned = 0.0f32;
            for (k, &i) in flex_indices.iter().enumerate() {
                // The last flexible child absorbs the rounding remainder so
                // the allotted shares sum to the free extent exactly.
                let share = if k == last {
                    (free - assigned).max(0.0)
                } else {
                    free * self.factors[i].flex / total_flex
                };
                assigned += share;
                let main_min = match self.factors[i].fit {
                    FlexFit::Tight => share,
                    FlexFit::Loose => 0.0,
                };
                let cc = self.child_constraints(main_min, share, cross_tight, cross_max);
                let result = ctx.layout_child(self.children[i].as_ref(), cc)?;
                results[i] = Some(result);
            }
        }

        let results: Vec<LayoutResult> = results
            .into_iter()
            .map(|r| r.expect("every flex child is laid out in one of the two passes"))
            .collect();

        let content_main: f32 =
            results.iter().map(|r| axis.main_of(r.size)).sum::<f32>() + spacing_total;

        // Baseline bookkeeping for baseline-aligned rows.
        let mut max_ascent = 0.0f32;
        let mut max_descent = 0.0f32;
        let mut any_baseline = false;
        for result in &results {
            if let Some(baseline) = result.baseline {
                any_baseline = true;
                max_ascent = max_ascent.max(baseline);
                max_descent = max_descent.max(axis.cross_of(result.size) - baseline);
            }
        }

        let mut cross_content = results
            .iter()
            .map(|r| axis.cross_of(r.size))
            .fold(0.0f32, f32::max);
        if self.cross_axis_alignment == CrossAxisAlignment::Baseline
            && axis == Axis::Horizontal
            && any_baseline
        {
            cross_content = cross_content.max(max_ascent + max_descent);
        }

        let main_size = if expand { main_max } else { content_main };
        let cross_size = if cross_tight { cross_max } else { cross_content };
        let size = constraints.constrain(axis.pack_size(main_size, cross_size));

        let main_extent = axis.main_of(size);
        let cross_extent = axis.cross_of(size);

        let mut remaining = main_extent - content_main;
        if remaining < 0.0 {
            overflow_amount = overflow_amount.max(-remaining);
            remaining = 0.0;
        }

        // Positioning pass.
        let (start, extra_gap) = match self.main_axis_alignment {
            MainAxisAlignment::Start => (0.0, 0.0),
            MainAxisAlignment::End => (remaining, 0.0),
            MainAxisAlignment::Center => (remaining / 2.0, 0.0),
            MainAxisAlignment::SpaceBetween => {
                if n > 1 {
                    (0.0, remaining / (n - 1) as f32)
                } else {
                    (0.0, 0.0)
                }
            }
            MainAxisAlignment::SpaceAround => {
                let gap = remaining / n as f32;
                (gap / 2.0, gap)
            }
            MainAxisAlignment::SpaceEvenly => {
                let gap = remaining / (n + 1) as f32;
                (gap, gap)
            }
        };

        let mut cursor = start;
        let mut placements = Vec::with_capacity(n);
        for result in results {
            let child_cross = axis.cross_of(result.size);
            let cross_pos = match self.cross_axis_alignment {
                CrossAxisAlignment::Start | CrossAxisAlignment::Stretch => 0.0,
                CrossAxisAlignment::End => cross_extent - child_cross,
                CrossAxisAlignment::Center => (cross_extent - child_cross) / 2.0,
                CrossAxisAlignment::Baseline => match result.baseline {
                    Some(baseline) if axis == Axis::Horizontal => max_ascent - baseline,
                    _ => 0.0,
                },
            };
            let offset = axis.pack_offset(cursor, cross_pos);
            cursor += axis.main_of(result.size) + self.spacing + extra_gap;
            placements.push(ChildLayout {
                offset,
                layout: result,
            });
        }

        let overflow = (overflow_amount > 0.0).then_some(Overflow {
            axis,
            amount: overflow_amount,
        });
        if let Some(overflow) = overflow {
            log::warn!(
                "flex children overflow the {:?} axis by {:.2}",
                overflow.axis,
                overflow.amount
            );
        }

        // Container baseline: the first (topmost) child baseline.
        let baseline = placements
            .iter()
            .filter_map(|p| p.layout.baseline.map(|b| b + p.offset.y))
            .fold(None, |acc: Option<f32>, b| {
                Some(acc.map_or(b, |a| a.min(b)))
            });

        let mut result = LayoutResult::leaf(size).with_children(placements);
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
