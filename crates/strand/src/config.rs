//! Array configuration parameters.

use std::error::Error;
use std::fmt;

/// Configuration for a [`DynArray`](crate::DynArray).
///
/// Controls the initial reservation and an optional hard ceiling on growth.
/// Validated at construction; immutable for the lifetime of the array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DynArrayConfig {
    /// Number of slots reserved when the array is created.
    ///
    /// Default: 8. Must be at least 1.
    pub initial_capacity: usize,

    /// Upper bound on the number of reserved slots.
    ///
    /// Default: `None` (bounded only by the allocator). When set, growth
    /// that would pass the bound is clamped to it, and growth beyond it
    /// fails with [`DynArrayError::AllocationFailed`](crate::DynArrayError::AllocationFailed).
    pub max_capacity: Option<usize>,
}

impl DynArrayConfig {
    /// Default initial capacity in slots.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 8;

    /// Create a config with the given initial capacity and no ceiling.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            max_capacity: None,
        }
    }

    /// Builder-style setter for [`max_capacity`](Self::max_capacity).
    pub fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = Some(max_capacity);
        self
    }

    /// Check the invariants the array relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity == 0 {
            return Err(ConfigError::ZeroInitialCapacity);
        }
        if let Some(max) = self.max_capacity {
            if max < self.initial_capacity {
                return Err(ConfigError::MaxBelowInitial {
                    initial: self.initial_capacity,
                    max,
                });
            }
        }
        Ok(())
    }
}

impl Default for DynArrayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}

/// Errors detected by [`DynArrayConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `initial_capacity` is zero; a live array always reserves a slot.
    ZeroInitialCapacity,
    /// `max_capacity` is smaller than `initial_capacity`.
    MaxBelowInitial {
        /// The configured initial capacity.
        initial: usize,
        /// The configured ceiling.
        max: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroInitialCapacity => write!(f, "initial_capacity must be at least 1"),
            Self::MaxBelowInitial { initial, max } => {
                write!(
                    f,
                    "max_capacity {max} is below initial_capacity {initial}"
                )
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_initial_capacity_is_eight() {
        let config = DynArrayConfig::default();
        assert_eq!(config.initial_capacity, 8);
        assert_eq!(config.max_capacity, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_initial_capacity_rejected() {
        let config = DynArrayConfig::new(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroInitialCapacity));
    }

    #[test]
    fn max_below_initial_rejected() {
        let config = DynArrayConfig::new(16).with_max_capacity(4);
        assert_eq!(
            config.validate(),
            Err(ConfigError::MaxBelowInitial {
                initial: 16,
                max: 4
            })
        );
    }

    #[test]
    fn max_equal_to_initial_accepted() {
        let config = DynArrayConfig::new(4).with_max_capacity(4);
        assert!(config.validate().is_ok());
    }
}
