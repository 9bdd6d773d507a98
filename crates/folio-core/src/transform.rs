//! 2D affine transforms applied to render nodes and drawing sinks.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Determinants below this magnitude are treated as singular.
const SINGULAR_EPSILON: f32 = 1e-6;

/// 2D affine transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// Matrix elements [a, b, c, d, e, f] for:
    /// | a c e |
    /// | b d f |
    /// | 0 0 1 |
    pub matrix: [f32; 6],
}

impl Transform2D {
    /// Identity transform.
    pub const IDENTITY: Self = Self {
        matrix: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    /// Create a translation transform.
    #[must_use]
    pub const fn translate(x: f32, y: f32) -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }

    /// Create a scale transform.
    #[must_use]
    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self {
            matrix: [sx, 0.0, 0.0, sy, 0.0, 0.0],
        }
    }

    /// Create a rotation transform (angle in radians).
    #[must_use]
    pub fn rotate(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            matrix: [cos, sin, -sin, cos, 0.0, 0.0],
        }
    }

    /// Compose with another transform: the result applies `self` first,
    /// then `other`.
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        let [a1, b1, c1, d1, e1, f1] = self.matrix;
        let [a2, b2, c2, d2, e2, f2] = other.matrix;
        Self {
            matrix: [
                a2 * a1 + c2 * b1,
                b2 * a1 + d2 * b1,
                a2 * c1 + c2 * d1,
                b2 * c1 + d2 * d1,
                a2 * e1 + c2 * f1 + e2,
                b2 * e1 + d2 * f1 + f2,
            ],
        }
    }

    /// Apply the transform to a point.
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        let [a, b, c, d, e, f] = self.matrix;
        Point::new(
            a * point.x + c * point.y + e,
            b * point.x + d * point.y + f,
        )
    }

    /// Determinant of the linear part.
    #[must_use]
    pub fn determinant(&self) -> f32 {
        let [a, b, c, d, _, _] = self.matrix;
        a * d - b * c
    }

    /// Whether the transform can be inverted. Singular transforms are
    /// tolerated during paint as a best-effort no-op.
    #[must_use]
    pub fn is_invertible(&self) -> bool {
        self.determinant().abs() > SINGULAR_EPSILON
    }

    /// Whether this is the identity transform.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.matrix == Self::IDENTITY.matrix
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}
