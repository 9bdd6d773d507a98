//! Retained render pipeline for the Folio document-composition engine.
//!
//! [`RenderPipeline`] owns an immutable widget tree and mirrors every
//! layout pass into an arena-backed [`RenderTree`]. Paint walks both
//! trees in lockstep, repainting only invalidated nodes and culling
//! subtrees outside an optional clip rectangle.

mod pipeline;
mod tree;

pub use pipeline::{PipelineOptions, RenderPipeline};
pub use tree::{NodeId, RenderNode, RenderTree};
