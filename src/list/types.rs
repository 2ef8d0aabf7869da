//! Core windowing newtypes

/// Height of a row in terminal lines. Always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineHeight(u16);

/// Error returned when attempting to create a LineHeight of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("LineHeight must be >= 1 (got {0})")]
pub struct InvalidLineHeight(pub u16);

impl LineHeight {
    /// Minimum row height.
    pub const ONE: Self = Self(1);

    /// Smart constructor that validates height is >= 1.
    pub fn new(height: u16) -> Result<Self, InvalidLineHeight> {
        if height == 0 {
            Err(InvalidLineHeight(height))
        } else {
            Ok(Self(height))
        }
    }

    /// Clamp a raw hint into a valid height (0 becomes 1).
    pub fn saturating(height: u16) -> Self {
        Self(height.max(1))
    }

    /// Get the raw u16 value.
    pub fn get(&self) -> u16 {
        self.0
    }
}

impl Default for LineHeight {
    fn default() -> Self {
        Self::ONE
    }
}

/// Absolute line offset from the top of the list content. 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LineOffset(usize);

impl LineOffset {
    /// Create a new LineOffset from a raw value.
    pub fn new(offset: usize) -> Self {
        Self(offset)
    }

    /// Get the raw usize value.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Move by a signed amount, saturating at 0 and usize::MAX.
    pub fn saturating_offset(&self, delta: isize) -> Self {
        if delta >= 0 {
            Self(self.0.saturating_add(delta.unsigned_abs()))
        } else {
            Self(self.0.saturating_sub(delta.unsigned_abs()))
        }
    }

    /// Clamp to `max`.
    pub fn min(self, max: usize) -> Self {
        Self(self.0.min(max))
    }
}
