//! Error types for tracker construction.

use crate::constants::{DEGREE_MAX, DEGREE_MIN, EXTENT_MAX, EXTENT_MIN};

/// A configuration bound was violated.
///
/// One variant per check, so table-driven callers can assert exactly which
/// bound fired. Checks run in a fixed order (aw, bw, ab, bb, degree) and
/// stop at the first failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("ahead window {0} must exceed {min}", min = EXTENT_MIN)]
    WindowAheadMin(u16),

    #[error("ahead window {0} exceeds maximum {max}", max = EXTENT_MAX)]
    WindowAheadMax(u16),

    #[error("behind window {0} must exceed {min}", min = EXTENT_MIN)]
    WindowBehindMin(u16),

    #[error("behind window {0} exceeds maximum {max}", max = EXTENT_MAX)]
    WindowBehindMax(u16),

    #[error("ahead buffer {0} must exceed {min}", min = EXTENT_MIN)]
    BufferAheadMin(u16),

    #[error("ahead buffer {0} exceeds maximum {max}", max = EXTENT_MAX)]
    BufferAheadMax(u16),

    #[error("behind buffer {0} must exceed {min}", min = EXTENT_MIN)]
    BufferBehindMin(u16),

    #[error("behind buffer {0} exceeds maximum {max}", max = EXTENT_MAX)]
    BufferBehindMax(u16),

    #[error("tree degree {0} below minimum {min}", min = DEGREE_MIN)]
    DegreeMin(u8),

    #[error("tree degree {0} above maximum {max}", max = DEGREE_MAX)]
    DegreeMax(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_value() {
        assert_eq!(
            ConfigError::WindowAheadMin(2).to_string(),
            "ahead window 2 must exceed 3"
        );
        assert_eq!(
            ConfigError::BufferBehindMax(1501).to_string(),
            "behind buffer 1501 exceeds maximum 1500"
        );
        assert_eq!(
            ConfigError::DegreeMin(1).to_string(),
            "tree degree 1 below minimum 2"
        );
    }

    #[test]
    fn display_all_variants_nonempty() {
        let variants: &[ConfigError] = &[
            ConfigError::WindowAheadMin(0),
            ConfigError::WindowAheadMax(9999),
            ConfigError::WindowBehindMin(0),
            ConfigError::WindowBehindMax(9999),
            ConfigError::BufferAheadMin(0),
            ConfigError::BufferAheadMax(9999),
            ConfigError::BufferBehindMin(0),
            ConfigError::BufferBehindMax(9999),
            ConfigError::DegreeMin(0),
            ConfigError::DegreeMax(99),
        ];
        for v in variants {
            assert!(!v.to_string().is_empty(), "{v:?} should have a message");
        }
    }
}
