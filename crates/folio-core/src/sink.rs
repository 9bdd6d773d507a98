//! The drawing-sink boundary and a recording implementation.
//!
//! The pipeline only ever writes to a sink during paint; it never reads
//! back. A persisted-document encoder implements [`DrawingSink`] in the
//! excluded document layer; [`RecordingSink`] captures the same calls as
//! values for tests and deferred encoding.

use crate::color::Color;
use crate::geometry::{Point, Rect};
use crate::transform::Transform2D;
use serde::{Deserialize, Serialize};

/// Vector drawing operations consumed by the paint traversal.
pub trait DrawingSink {
    /// Push the current graphics state (transform, colors, path).
    fn save_state(&mut self);
    /// Pop the most recently saved graphics state.
    fn restore_state(&mut self);
    /// Concatenate a transform onto the current transform.
    fn set_transform(&mut self, transform: Transform2D);

    /// Append a rectangle to the current path.
    fn draw_rect(&mut self, rect: Rect);
    /// Append a line segment between two points to the current path.
    fn draw_line(&mut self, from: Point, to: Point);
    /// Begin a new subpath at the given point.
    fn move_to(&mut self, point: Point);
    /// Append a straight segment to the given point.
    fn line_to(&mut self, point: Point);
    /// Append a cubic Bézier segment.
    fn curve_to(&mut self, control1: Point, control2: Point, end: Point);
    /// Close the current subpath.
    fn close_path(&mut self);
    /// Fill the current path and clear it.
    fn fill_path(&mut self);
    /// Stroke the current path and clear it.
    fn stroke_path(&mut self);

    /// Set the fill color.
    fn set_fill_color(&mut self, color: Color);
    /// Set the stroke color.
    fn set_stroke_color(&mut self, color: Color);

    /// Begin a text object.
    fn begin_text(&mut self);
    /// End the current text object.
    fn end_text(&mut self);
    /// Move the text cursor by an offset.
    fn move_text_position(&mut self, offset: Point);
    /// Select the font for subsequent text.
    fn set_font(&mut self, family: &str, size: f32);
    /// Show a run of text at the current text position.
    fn show_text(&mut self, text: &str);
}

/// One recorded sink call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SinkCommand {
    /// Graphics state push
    SaveState,
    /// Graphics state pop
    RestoreState,
    /// Transform concatenation
    SetTransform(Transform2D),
    /// Rectangle path segment
    DrawRect(Rect),
    /// Line path segment
    DrawLine {
        /// Start point
        from: Point,
        /// End point
        to: Point,
    },
    /// New subpath
    MoveTo(Point),
    /// Straight segment
    LineTo(Point),
    /// Cubic Bézier segment
    CurveTo {
        /// First control point
        control1: Point,
        /// Second control point
        control2: Point,
        /// End point
        end: Point,
    },
    /// Close subpath
    ClosePath,
    /// Fill current path
    FillPath,
    /// Stroke current path
    StrokePath,
    /// Fill color change
    SetFillColor(Color),
    /// Stroke color change
    SetStrokeColor(Color),
    /// Text object start
    BeginText,
    /// Text object end
    EndText,
    /// Text cursor move
    MoveTextPosition(Point),
    /// Font selection
    SetFont {
        /// Font family name
        family: String,
        /// Font size in points
        size: f32,
    },
    /// Text run
    ShowText(String),
}

/// A sink that records every call as a [`SinkCommand`].
#[derive(Debug, Default)]
pub struct RecordingSink {
    commands: Vec<SinkCommand>,
    save_depth: usize,
}

impl RecordingSink {
    /// Create a new empty recording sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded commands.
    #[must_use]
    pub fn commands(&self) -> &[SinkCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the sink.
    pub fn take_commands(&mut self) -> Vec<SinkCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Current save/restore nesting depth.
    #[must_use]
    pub fn save_depth(&self) -> usize {
        self.save_depth
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.save_depth = 0;
    }
}

impl DrawingSink for RecordingSink {
    fn save_state(&mut self) {
        self.save_depth += 1;
        self.commands.push(SinkCommand::SaveState);
    }

    fn restore_state(&mut self) {
        self.save_depth = self.save_depth.saturating_sub(1);
        self.commands.push(SinkCommand::RestoreState);
    }

    fn set_transform(&mut self, transform: Transform2D) {
        self.commands.push(SinkCommand::SetTransform(transform));
    }

    fn draw_rect(&mut self, rect: Rect) {
        self.commands.push(SinkCommand::DrawRect(rect));
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        self.commands.push(SinkCommand::DrawLine { from, to });
    }

    fn move_to(&mut self, point: Point) {
        self.commands.push(SinkCommand::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.commands.push(SinkCommand::LineTo(point));
    }

    fn curve_to(&mut self, control1: Point, control2: Point, end: Point) {
        self.commands.push(SinkCommand::CurveTo {
            control1,
            control2,
            end,
        });
    }

    fn close_path(&mut self) {
        self.commands.push(SinkCommand::ClosePath);
    }

    fn fill_path(&mut self) {
        self.commands.push(SinkCommand::FillPath);
    }

    fn stroke_path(&mut self) {
        self.commands.push(SinkCommand::StrokePath);
    }

    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(SinkCommand::SetFillColor(color));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(SinkCommand::SetStrokeColor(color));
    }

    fn begin_text(&mut self) {
        self.commands.push(SinkCommand::BeginText);
    }

    fn end_text(&mut self) {
        self.commands.push(SinkCommand::EndText);
    }

    fn move_text_position(&mut self, offset: Point) {
        self.commands.push(SinkCommand::MoveTextPosition(offset));
    }

    fn set_font(&mut self, family: &str, size: f32) {
        self.commands.push(SinkCommand::SetFont {
            family: family.to_string(),
            size,
        });
    }

    fn show_text(&mut self, text: &str) {
        self.commands.push(SinkCommand::ShowText(text.to_string()));
    }
}
