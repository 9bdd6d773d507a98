//! Error taxonomy for the layout pipeline.
//!
//! Only structural/configuration failures surface as errors; soft visual
//! conditions (overflow, degenerate transforms) are recorded on results
//! instead so a malformed subtree cannot abort a whole document render.

use thiserror::Error;

/// Fatal layout errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Constraints with negative values or `min > max` on an axis.
    #[error("invalid constraints: {detail}")]
    InvalidConstraints {
        /// Human-readable description of the violation
        detail: String,
    },

    /// An operation that requires a built render tree ran before any
    /// tree was built.
    #[error("render tree has not been built")]
    UnbuiltTree,
}

impl LayoutError {
    /// Convenience constructor for constraint violations.
    #[must_use]
    pub fn invalid_constraints(detail: impl Into<String>) -> Self {
        Self::InvalidConstraints {
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_constraints_display() {
        let err = LayoutError::invalid_constraints("min_width 50 > max_width 10");
        assert_eq!(
            err.to_string(),
            "invalid constraints: min_width 50 > max_width 10"
        );
    }

    #[test]
    fn test_unbuilt_tree_display() {
        assert_eq!(
            LayoutError::UnbuiltTree.to_string(),
            "render tree has not been built"
        );
    }
}
