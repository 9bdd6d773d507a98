//! Box constraints exchanged between parent and child during layout.

use crate::error::LayoutError;
use crate::geometry::{EdgeInsets, Size};
use serde::{Deserialize, Serialize};

/// Layout constraints that specify minimum and maximum sizes.
///
/// A parent produces constraints, exactly one child consumes them per
/// layout call, and the child's reported size must satisfy them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxConstraints {
    /// Minimum width
    pub min_width: f32,
    /// Maximum width
    pub max_width: f32,
    /// Minimum height
    pub min_height: f32,
    /// Maximum height
    pub max_height: f32,
}

impl BoxConstraints {
    /// Create new constraints, rejecting malformed values.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConstraints`] when any value is
    /// negative or NaN, or when `min > max` on either axis.
    pub fn new(
        min_width: f32,
        max_width: f32,
        min_height: f32,
        max_height: f32,
    ) -> Result<Self, LayoutError> {
        let constraints = Self {
            min_width,
            max_width,
            min_height,
            max_height,
        };
        constraints.check()?;
        Ok(constraints)
    }

    /// Create tight constraints that allow only the exact size.
    #[must_use]
    pub fn tight(size: Size) -> Self {
        let width = size.width.max(0.0);
        let height = size.height.max(0.0);
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }

    /// Create loose constraints that allow any size up to the given maximum.
    #[must_use]
    pub fn loose(size: Size) -> Self {
        Self {
            min_width: 0.0,
            max_width: size.width.max(0.0),
            min_height: 0.0,
            max_height: size.height.max(0.0),
        }
    }

    /// Create unbounded constraints.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            min_width: 0.0,
            max_width: f32::INFINITY,
            min_height: 0.0,
            max_height: f32::INFINITY,
        }
    }

    /// Validate that these constraints are well-formed.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConstraints`] describing the first
    /// violation found.
    pub fn check(&self) -> Result<(), LayoutError> {
        let axes = [
            ("width", self.min_width, self.max_width),
            ("height", self.min_height, self.max_height),
        ];
        for (axis, min, max) in axes {
            if min.is_nan() || max.is_nan() {
                return Err(LayoutError::invalid_constraints(format!(
                    "{axis} constraint is NaN"
                )));
            }
            if min < 0.0 {
                return Err(LayoutError::invalid_constraints(format!(
                    "min {axis} {min} is negative"
                )));
            }
            if min > max {
                return Err(LayoutError::invalid_constraints(format!(
                    "min {axis} {min} exceeds max {axis} {max}"
                )));
            }
        }
        Ok(())
    }

    /// Constrain a size to fit within these constraints.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min_width, self.max_width),
            size.height.clamp(self.min_height, self.max_height),
        )
    }

    /// Check whether a size satisfies these constraints.
    #[must_use]
    pub fn is_satisfied_by(&self, size: Size) -> bool {
        size.width >= self.min_width
            && size.width <= self.max_width
            && size.height >= self.min_height
            && size.height <= self.max_height
    }

    /// Reduce constraints by an edge inset, clamping each bound at zero.
    #[must_use]
    pub fn deflate(&self, insets: EdgeInsets) -> Self {
        let horizontal = insets.horizontal();
        let vertical = insets.vertical();
        Self {
            min_width: (self.min_width - horizontal).max(0.0),
            max_width: (self.max_width - horizontal).max(0.0),
            min_height: (self.min_height - vertical).max(0.0),
            max_height: (self.max_height - vertical).max(0.0),
        }
    }

    /// Report a parent's own size by adding inset totals back onto a
    /// measured child size, constrained to these constraints.
    #[must_use]
    pub fn inflate(&self, insets: EdgeInsets, child_size: Size) -> Size {
        self.constrain(insets.inflate_size(child_size))
    }

    /// Return constraints with minimums reset to zero.
    #[must_use]
    pub fn loosen(&self) -> Self {
        Self {
            min_width: 0.0,
            max_width: self.max_width,
            min_height: 0.0,
            max_height: self.max_height,
        }
    }

    /// Return constraints with exact values substituted where provided.
    ///
    /// Each value is clamped into the existing range for its axis, so the
    /// result is always well-formed.
    #[must_use]
    pub fn tighten(&self, width: Option<f32>, height: Option<f32>) -> Self {
        let mut result = *self;
        if let Some(width) = width {
            let width = width.clamp(self.min_width, self.max_width);
            result.min_width = width;
            result.max_width = width;
        }
        if let Some(height) = height {
            let height = height.clamp(self.min_height, self.max_height);
            result.min_height = height;
            result.max_height = height;
        }
        result
    }

    /// Check if constraints specify an exact size.
    #[must_use]
    pub fn is_tight(&self) -> bool {
        self.min_width == self.max_width && self.min_height == self.max_height
    }

    /// Check if width is bounded (not infinite).
    #[must_use]
    pub fn has_bounded_width(&self) -> bool {
        self.max_width.is_finite()
    }

    /// Check if height is bounded (not infinite).
    #[must_use]
    pub fn has_bounded_height(&self) -> bool {
        self.max_height.is_finite()
    }

    /// Check if both dimensions are bounded.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.has_bounded_width() && self.has_bounded_height()
    }

    /// Get the biggest size that satisfies these constraints.
    #[must_use]
    pub fn biggest(&self) -> Size {
        Size::new(
            if self.max_width.is_finite() {
                self.max_width
            } else {
                self.min_width
            },
            if self.max_height.is_finite() {
                self.max_height
            } else {
                self.min_height
            },
        )
    }

    /// Get the smallest size that satisfies these constraints.
    #[must_use]
    pub fn smallest(&self) -> Size {
        Size::new(self.min_width, self.min_height)
    }
}

impl Default for BoxConstraints {
    fn default() -> Self {
        Self::unbounded()
    }
}
