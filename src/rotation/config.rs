//! Rotation configuration.

use crate::error::RotationError;
use crate::weekly::AllocatorConfig;

/// Number of weeks in a standard rotation.
pub const DEFAULT_WEEKS: usize = 5;

/// Configuration for a multi-week rotation.
///
/// # Examples
///
/// ```
/// use duty_rotation::rotation::RotationConfig;
/// use duty_rotation::weekly::{AllocatorConfig, OverflowPolicy};
///
/// let config = RotationConfig::default()
///     .with_seed(2024)
///     .with_allocator(AllocatorConfig::default().with_overflow(OverflowPolicy::AllActive));
/// assert_eq!(config.weeks, 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationConfig {
    /// Number of consecutive weeks to plan.
    pub weeks: usize,

    /// Master seed. `None` draws one from system entropy; the seed actually
    /// used is reported in the result either way.
    pub seed: Option<u64>,

    /// Per-week allocation settings.
    pub allocator: AllocatorConfig,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            weeks: DEFAULT_WEEKS,
            seed: None,
            allocator: AllocatorConfig::default(),
        }
    }
}

impl RotationConfig {
    pub fn with_weeks(mut self, weeks: usize) -> Self {
        self.weeks = weeks;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_allocator(mut self, allocator: AllocatorConfig) -> Self {
        self.allocator = allocator;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), RotationError> {
        if self.weeks == 0 {
            return Err(RotationError::InvalidConfig(
                "weeks must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
