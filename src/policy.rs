//! Capacity policy for [`GrowableArray`](crate::dynamic_array::GrowableArray)
//!
//! The policy fixes the constants behind the array's amortized bounds:
//!
//! | Field              | Default | Meaning                                              |
//! |--------------------|---------|------------------------------------------------------|
//! | `initial_capacity` | 4       | slots allocated by an empty array                    |
//! | `growth_factor`    | 2       | capacity multiplier when a full array grows          |
//! | `shrink_ratio`     | 4       | shrink once `len * shrink_ratio < capacity`          |
//! | `shrink_floor`     | 10      | never shrink a store at or below this many slots     |
//!
//! A shrink targets `max(len * growth_factor, shrink_floor)`, so an array
//! that just shrank is neither full nor below the shrink threshold.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::CollectionError;

/// Capacity constants for a growable array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GrowthPolicy {
    /// Slots allocated by a freshly constructed array
    pub initial_capacity: usize,
    /// Multiplier applied to the capacity when an append finds the store full
    pub growth_factor: usize,
    /// Occupancy divisor: shrink when `len * shrink_ratio < capacity`
    pub shrink_ratio: usize,
    /// Stores with this many slots or fewer are never shrunk
    pub shrink_floor: usize,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            initial_capacity: 4,
            growth_factor: 2,
            shrink_ratio: 4,
            shrink_floor: 10,
        }
    }
}

impl GrowthPolicy {
    /// Checks that the policy cannot stall growth or thrash between resizes
    pub fn validate(&self) -> Result<(), CollectionError> {
        if self.initial_capacity == 0 {
            return Err(CollectionError::InvalidPolicy(
                "initial_capacity must be at least 1",
            ));
        }
        if self.growth_factor < 2 {
            return Err(CollectionError::InvalidPolicy(
                "growth_factor must be at least 2",
            ));
        }
        if self.shrink_ratio <= self.growth_factor {
            return Err(CollectionError::InvalidPolicy(
                "shrink_ratio must exceed growth_factor",
            ));
        }
        Ok(())
    }

    /// Capacity to grow to from `capacity`
    pub(crate) fn grown(&self, capacity: usize) -> usize {
        capacity.saturating_mul(self.growth_factor).max(1)
    }

    /// Capacity to shrink to, or `None` when `len` and `capacity` do not warrant it
    pub(crate) fn shrunk(&self, len: usize, capacity: usize) -> Option<usize> {
        if capacity <= self.shrink_floor || len.saturating_mul(self.shrink_ratio) >= capacity {
            return None;
        }
        Some(len.saturating_mul(self.growth_factor).max(self.shrink_floor))
    }
}
