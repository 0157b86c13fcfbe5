// SPDX-License-Identifier: MPL-2.0
//! Diagnostics newtypes.

/// Buffer capacity bounds (100 to 10000 lifecycle events).
pub mod buffer_capacity_bounds {
    /// Minimum buffer capacity.
    pub const MIN: usize = 100;
    /// Maximum buffer capacity.
    pub const MAX: usize = 10000;
    /// Default buffer capacity.
    pub const DEFAULT: usize = 1000;
}

/// Number of lifecycle events the diagnostics collector retains.
///
/// Values outside 100–10000 are clamped on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a new buffer capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(buffer_capacity_bounds::MIN, buffer_capacity_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= buffer_capacity_bounds::MIN
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= buffer_capacity_bounds::MAX
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(buffer_capacity_bounds::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_is_clamped() {
        assert!(BufferCapacity::new(0).is_min());
        assert!(BufferCapacity::new(1_000_000).is_max());
        assert_eq!(BufferCapacity::new(2500).value(), 2500);
    }
}
