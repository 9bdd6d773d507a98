//! Retained render pipeline: layout, invalidation, paint, hit-testing.
//!
//! The pipeline owns the widget tree and mirrors each layout pass into
//! the node arena. Widgets stay oblivious to retention: parents publish
//! child placements in their layout results, and the pipeline walks the
//! widget tree and the arena in lockstep.

use folio_core::{
    BoxConstraints, DrawingSink, LayoutContext, LayoutError, LayoutResult, PaintContext,
    PerfSample, PerfSampler, Point, Rect, TextDirection, TextMeasurer, Theme, Transform2D, Widget,
};
use std::collections::HashMap;

use crate::tree::{NodeId, RenderTree};

/// Togglable pipeline diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    /// Re-validate every derived constraint set before descending
    pub validate_constraints: bool,
    /// Time each widget's layout, keyed by debug label
    pub sample_performance: bool,
}

/// Owns a widget tree and the retained render tree mirrored from it.
pub struct RenderPipeline {
    root: Box<dyn Widget>,
    theme: Theme,
    text_direction: TextDirection,
    measurer: Option<Box<dyn TextMeasurer>>,
    options: PipelineOptions,
    perf: PerfSampler,
    tree: Option<RenderTree>,
    constraints: Option<BoxConstraints>,
}

impl RenderPipeline {
    /// Create a pipeline for a widget tree, with the default theme and no
    /// diagnostics enabled.
    #[must_use]
    pub fn new(root: impl Widget + 'static) -> Self {
        Self {
            root: Box::new(root),
            theme: Theme::default(),
            text_direction: TextDirection::default(),
            measurer: None,
            options: PipelineOptions::default(),
            perf: PerfSampler::new(),
            tree: None,
            constraints: None,
        }
    }

    /// Set the theme.
    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the text direction.
    #[must_use]
    pub fn text_direction(mut self, direction: TextDirection) -> Self {
        self.text_direction = direction;
        self
    }

    /// Attach an accurate text-measurement service.
    #[must_use]
    pub fn measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.measurer = Some(Box::new(measurer));
        self
    }

    /// Set the diagnostics options.
    #[must_use]
    pub fn options(mut self, options: PipelineOptions) -> Self {
        self.options = options;
        self
    }

    /// Lay out the widget tree against `constraints`, mirror the results
    /// into a fresh render tree, and return the root node id.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConstraints`] when `constraints` is
    /// malformed, or when validation is enabled and a widget derives a
    /// malformed constraint set.
    pub fn build(&mut self, constraints: BoxConstraints) -> Result<NodeId, LayoutError> {
        constraints.check()?;
        self.constraints = Some(constraints);
        let result = self.layout_root(constraints)?;

        let mut tree = RenderTree::new();
        let root = tree.root();
        Self::mirror(&mut tree, root, self.root.as_ref(), &result);
        self.tree = Some(tree);
        Ok(root)
    }

    /// Re-run layout on an already-built tree, updating geometry in place
    /// and preserving node transforms.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnbuiltTree`] before the first `build`, or a
    /// constraint error as in [`Self::build`].
    pub fn layout(&mut self) -> Result<(), LayoutError> {
        let constraints = self.constraints.ok_or(LayoutError::UnbuiltTree)?;
        if self.tree.is_none() {
            return Err(LayoutError::UnbuiltTree);
        }
        let result = self.layout_root(constraints)?;
        let tree = self.tree.as_mut().ok_or(LayoutError::UnbuiltTree)?;
        let root = tree.root();
        Self::mirror(tree, root, self.root.as_ref(), &result);
        Ok(())
    }

    fn layout_root(&self, constraints: BoxConstraints) -> Result<LayoutResult, LayoutError> {
        let mut ctx = LayoutContext::new(constraints, &self.theme);
        ctx.text_direction = self.text_direction;
        if let Some(measurer) = self.measurer.as_deref() {
            ctx = ctx.with_measurer(measurer);
        }
        if self.options.sample_performance {
            ctx = ctx.with_perf(&self.perf);
        }
        if self.options.validate_constraints {
            ctx = ctx.with_validation();
        }
        ctx.layout_child(self.root.as_ref(), constraints)
    }

    /// Copy a layout result into the arena, reusing existing nodes so
    /// transforms survive relayout. Widget trees are immutable, so the
    /// structure never changes between passes.
    fn mirror(tree: &mut RenderTree, id: NodeId, widget: &dyn Widget, result: &LayoutResult) {
        {
            let node = tree.node_mut(id);
            node.size = result.size;
            node.baseline = result.baseline;
            node.overflow = result.overflow;
            node.needs_repaint |= result.needs_repaint;
            node.debug_label = widget.debug_label().map(String::from);
        }
        for (i, (child_widget, placement)) in
            widget.children().iter().zip(&result.children).enumerate()
        {
            let child_id = match tree.node(id).children.get(i) {
                Some(&existing) => existing,
                None => tree.add_child(id),
            };
            tree.node_mut(child_id).position = placement.offset;
            Self::mirror(tree, child_id, child_widget.as_ref(), &placement.layout);
        }
    }

    /// Paint the whole tree into `sink` in depth-first pre-order,
    /// skipping only subtrees that fall outside `clip`.
    ///
    /// Every reached node paints unconditionally and has its repaint
    /// flag cleared; the dirty markers are bookkeeping for an external
    /// partial-repaint scheduler, not a paint filter. Painting the same
    /// built tree into a second sink reproduces the full output.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnbuiltTree`] before the first `build`.
    pub fn paint(
        &mut self,
        sink: &mut dyn DrawingSink,
        clip: Option<Rect>,
    ) -> Result<(), LayoutError> {
        let mut tree = self.tree.take().ok_or(LayoutError::UnbuiltTree)?;
        let root = tree.root();
        self.paint_node(&mut tree, root, self.root.as_ref(), sink, clip, Point::ORIGIN, true);
        self.tree = Some(tree);
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn paint_node(
        &self,
        tree: &mut RenderTree,
        id: NodeId,
        widget: &dyn Widget,
        sink: &mut dyn DrawingSink,
        clip: Option<Rect>,
        origin: Point,
        cullable: bool,
    ) {
        let (position, size, transform, overflow) = {
            let node = tree.node(id);
            (node.position, node.size, node.transform, node.overflow)
        };

        let world_origin = origin + position;
        // Culling works on axis-aligned bounds, so it is disabled below any
        // non-identity transform and for nodes whose content overflows.
        if cullable && overflow.is_none() {
            if let Some(clip) = clip {
                let world_bounds = Rect::from_origin_size(world_origin, size);
                if !world_bounds.intersects(&clip) {
                    return;
                }
            }
        }

        let mut local = Transform2D::translate(position.x, position.y);
        let mut child_cullable = cullable;
        if !transform.is_identity() {
            if transform.is_invertible() {
                local = transform.then(&local);
                child_cullable = false;
            } else {
                log::warn!(
                    "skipping singular transform on node {} (det {})",
                    id.index(),
                    transform.determinant()
                );
            }
        }

        sink.save_state();
        sink.set_transform(local);

        let mut ctx = PaintContext {
            sink: &mut *sink,
            size,
            theme: &self.theme,
            text_direction: self.text_direction,
            measurer: self.measurer.as_deref(),
        };
        widget.paint(&mut ctx);
        tree.node_mut(id).needs_repaint = false;

        let children: Vec<NodeId> = tree.node(id).children.clone();
        for (child_widget, child_id) in widget.children().iter().zip(children) {
            self.paint_node(
                tree,
                child_id,
                child_widget.as_ref(),
                sink,
                clip,
                world_origin,
                child_cullable,
            );
        }

        sink.restore_state();
    }

    /// Mark a node and its ancestors as needing repaint.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnbuiltTree`] before the first `build`.
    pub fn invalidate(&mut self, id: NodeId) -> Result<(), LayoutError> {
        let tree = self.tree.as_mut().ok_or(LayoutError::UnbuiltTree)?;
        tree.invalidate(id);
        Ok(())
    }

    /// Set a node's local transform and invalidate it.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnbuiltTree`] before the first `build`.
    pub fn set_node_transform(
        &mut self,
        id: NodeId,
        transform: Transform2D,
    ) -> Result<(), LayoutError> {
        let tree = self.tree.as_mut().ok_or(LayoutError::UnbuiltTree)?;
        tree.node_mut(id).transform = transform;
        tree.invalidate(id);
        Ok(())
    }

    /// Find the deepest node containing `point`, topmost sibling first.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::UnbuiltTree`] before the first `build`.
    pub fn hit_test(&self, point: Point) -> Result<Option<NodeId>, LayoutError> {
        let tree = self.tree.as_ref().ok_or(LayoutError::UnbuiltTree)?;
        Ok(tree.hit_test(point))
    }

    /// The retained tree, once built.
    #[must_use]
    pub fn tree(&self) -> Option<&RenderTree> {
        self.tree.as_ref()
    }

    /// Snapshot of per-label layout timings. Empty unless
    /// [`PipelineOptions::sample_performance`] is set.
    #[must_use]
    pub fn performance_samples(&self) -> HashMap<String, PerfSample> {
        self.perf.samples()
    }
}
