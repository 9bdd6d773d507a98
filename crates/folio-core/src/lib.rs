//! Core types and contracts for the Folio document-composition engine.
//!
//! This crate provides the value types and boundary traits shared by the
//! widget set and the render pipeline:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`EdgeInsets`]
//! - Box constraints: [`BoxConstraints`]
//! - The widget protocol: [`Widget`], [`LayoutContext`], [`PaintContext`]
//! - The drawing-sink boundary: [`DrawingSink`], [`RecordingSink`]
//! - Text styling and measurement: [`TextStyle`], [`TextMeasurer`]

mod color;
mod constraints;
mod error;
mod geometry;
mod perf;
mod sink;
mod text;
mod theme;
mod transform;
pub mod widget;

pub use color::{Color, ColorParseError};
pub use constraints::BoxConstraints;
pub use error::LayoutError;
pub use geometry::{EdgeInsets, Point, Rect, Size};
pub use perf::{PerfSample, PerfSampler, UNLABELED};
pub use sink::{DrawingSink, RecordingSink, SinkCommand};
pub use text::{
    estimate_text_width, estimate_wrap, FontMetrics, FontStyle, FontWeight, TextMeasurer,
    TextStyle, FALLBACK_CHAR_WIDTH_FACTOR,
};
pub use theme::{ColorPalette, Spacing, Theme};
pub use transform::Transform2D;
pub use widget::{
    Axis, ChildLayout, LayoutContext, LayoutResult, Overflow, PaintContext, TextDirection, Widget,
};
