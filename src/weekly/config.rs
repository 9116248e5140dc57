//! Allocator configuration.

/// Which groups share the General areas left after the third-area stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverflowPolicy {
    /// Only groups at or above the third-area threshold (capacity ≥ 8).
    ///
    /// Groups of capacity 1–3 stay at one area and 4–7 at two. Areas are
    /// left unassigned when no group qualifies.
    #[default]
    HighCapacity,

    /// Every group with non-zero capacity.
    ///
    /// This is the unrestricted round-robin rule: capacity 1–7 groups join
    /// the leftover share too, and every area is handed out whenever any
    /// group is active. Pick it to reproduce that behavior.
    AllActive,

    /// Leave the remaining areas unassigned.
    Disabled,
}

/// Configuration for the weekly allocator.
///
/// # Examples
///
/// ```
/// use duty_rotation::weekly::{AllocatorConfig, OverflowPolicy};
///
/// let config = AllocatorConfig::default().with_overflow(OverflowPolicy::AllActive);
/// assert_eq!(config.overflow, OverflowPolicy::AllActive);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocatorConfig {
    /// Recipients of the final round-robin distribution.
    pub overflow: OverflowPolicy,
}

impl AllocatorConfig {
    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }
}
