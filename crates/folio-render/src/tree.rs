//! Arena-backed render tree.
//!
//! Nodes live in a flat `Vec` and refer to each other by index, so the
//! tree carries parent links without self-referential ownership. The
//! widget tree is mirrored into this arena by the pipeline; nodes never
//! hold widget references.

use folio_core::{Overflow, Point, Rect, Size, Transform2D};

/// Index of a node in a [`RenderTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Raw arena index, for diagnostics.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One retained node: geometry, paint state, and tree links.
#[derive(Debug, Clone)]
pub struct RenderNode {
    /// Offset from the parent's content origin
    pub position: Point,
    /// Size computed by layout
    pub size: Size,
    /// Baseline distance from the top edge, if any
    pub baseline: Option<f32>,
    /// Local transform applied on top of the position offset
    pub transform: Transform2D,
    /// Parent link; `None` for the root
    pub parent: Option<NodeId>,
    /// Children in paint order
    pub children: Vec<NodeId>,
    /// Whether this node must be repainted on the next paint pass
    pub needs_repaint: bool,
    /// Overflow recorded for this node during layout, if any
    pub overflow: Option<Overflow>,
    /// Label carried over from the widget, for diagnostics
    pub debug_label: Option<String>,
}

impl RenderNode {
    fn new(parent: Option<NodeId>) -> Self {
        Self {
            position: Point::ORIGIN,
            size: Size::ZERO,
            baseline: None,
            transform: Transform2D::IDENTITY,
            parent,
            children: Vec::new(),
            needs_repaint: true,
            overflow: None,
            debug_label: None,
        }
    }

    /// Bounds of this node in its parent's coordinate space, ignoring the
    /// local transform.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }
}

/// Flat arena of render nodes rooted at [`RenderTree::root`].
#[derive(Debug, Clone)]
pub struct RenderTree {
    nodes: Vec<RenderNode>,
}

impl RenderTree {
    /// Create a tree containing only a root node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![RenderNode::new(None)],
        }
    }

    /// The root node id.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds only the root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Append a new child under `parent` and return its id.
    pub fn add_child(&mut self, parent: NodeId) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(RenderNode::new(Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Borrow a node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &RenderNode {
        &self.nodes[id.0]
    }

    /// Mutably borrow a node.
    pub fn node_mut(&mut self, id: NodeId) -> &mut RenderNode {
        &mut self.nodes[id.0]
    }

    /// Mark a node and every ancestor up to the root as needing repaint.
    ///
    /// Walking up keeps the paint pass simple: a dirty node is reachable
    /// because its whole ancestor chain is dirty too.
    pub fn invalidate(&mut self, id: NodeId) {
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = &mut self.nodes[node_id.0];
            if node.needs_repaint {
                break;
            }
            node.needs_repaint = true;
            current = node.parent;
        }
    }

    /// Whether any node in the tree needs repainting.
    #[must_use]
    pub fn any_dirty(&self) -> bool {
        self.nodes.iter().any(|n| n.needs_repaint)
    }

    /// Find the deepest node whose bounds contain `point`.
    ///
    /// `point` is in the root's coordinate space. Children are visited
    /// last-to-first so that the topmost painted sibling wins. A node's
    /// local transform is ignored for hit-testing; bounds are the
    /// position/size rectangle.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<NodeId> {
        self.hit_test_node(self.root(), point)
    }

    fn hit_test_node(&self, id: NodeId, point: Point) -> Option<NodeId> {
        let node = &self.nodes[id.0];
        if !node.bounds().contains_point(&point) {
            return None;
        }
        let local = point - node.position;
        for &child in node.children.iter().rev() {
            if let Some(hit) = self.hit_test_node(child, local) {
                return Some(hit);
            }
        }
        Some(id)
    }
}

impl Default for RenderTree {
    fn default() -> Self {
        Self::new()
    }
}
