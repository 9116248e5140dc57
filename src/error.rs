//! Error type shared by every public entry point.

use thiserror::Error;

use crate::catalog::{Group, MAX_CAPACITY};

/// Errors raised while validating a rotation request.
///
/// Allocation itself cannot fail: once the inputs are valid, an empty
/// pool only ends the current stage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotationError {
    /// A group's capacity lies outside `0..=MAX_CAPACITY`.
    #[error("capacity {capacity} for {group} is outside 0..={max}", max = MAX_CAPACITY)]
    InvalidCapacity { group: Group, capacity: i64 },

    /// A group name that is not part of the roster.
    #[error("unknown group: {0:?}")]
    UnknownGroup(String),

    /// A configuration value that failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_capacity_message() {
        let err = RotationError::InvalidCapacity {
            group: Group::Unit7,
            capacity: 12,
        };
        assert_eq!(err.to_string(), "capacity 12 for Unit 7 is outside 0..=11");
    }

    #[test]
    fn test_unknown_group_message() {
        let err = RotationError::UnknownGroup("Unit 4".into());
        assert_eq!(err.to_string(), "unknown group: \"Unit 4\"");
    }
}
