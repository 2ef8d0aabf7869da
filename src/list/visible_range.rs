//! Visible range calculation result

use super::types::LineOffset;

/// Range of items visible in the current viewport.
///
/// Indices are into the flattened (possibly grouped) item sequence.
///
/// # Invariants
/// - `start_index <= end_index`
/// - All items in range have some portion visible in the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibleRange {
    /// Index of first visible item (inclusive).
    pub start_index: usize,
    /// Index of last visible item (exclusive).
    pub end_index: usize,
    /// Scroll offset the range was computed for.
    pub scroll_offset: LineOffset,
    /// Viewport height in lines.
    pub viewport_height: u16,
}

impl VisibleRange {
    /// Create new visible range.
    ///
    /// # Panics
    /// In debug builds, panics if start_index > end_index.
    pub fn new(
        start_index: usize,
        end_index: usize,
        scroll_offset: LineOffset,
        viewport_height: u16,
    ) -> Self {
        debug_assert!(
            start_index <= end_index,
            "start_index {} > end_index {}",
            start_index,
            end_index
        );
        Self {
            start_index,
            end_index,
            scroll_offset,
            viewport_height,
        }
    }

    /// Number of visible items.
    pub fn len(&self) -> usize {
        self.end_index - self.start_index
    }

    /// Check if range is empty.
    pub fn is_empty(&self) -> bool {
        self.start_index == self.end_index
    }

    /// Iterate over visible item indices.
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        self.start_index..self.end_index
    }

    /// Check if a specific item index is visible.
    pub fn contains(&self, index: usize) -> bool {
        (self.start_index..self.end_index).contains(&index)
    }

    /// Last visible item, if any.
    pub fn last(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.end_index - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: usize, end: usize) -> VisibleRange {
        VisibleRange::new(start, end, LineOffset::new(0), 24)
    }

    #[test]
    fn new_creates_range_with_given_values() {
        let range = VisibleRange::new(5, 10, LineOffset::new(100), 24);
        assert_eq!(range.start_index, 5);
        assert_eq!(range.end_index, 10);
        assert_eq!(range.scroll_offset, LineOffset::new(100));
        assert_eq!(range.viewport_height, 24);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn new_panics_when_start_greater_than_end() {
        VisibleRange::new(10, 5, LineOffset::new(0), 24);
    }

    #[test]
    fn default_creates_empty_range_at_zero() {
        let range = VisibleRange::default();
        assert!(range.is_empty());
        assert_eq!(range.viewport_height, 0);
        assert_eq!(range.last(), None);
    }

    #[test]
    fn len_and_last() {
        assert_eq!(range(5, 10).len(), 5);
        assert_eq!(range(5, 10).last(), Some(9));
        assert_eq!(range(5, 5).len(), 0);
    }

    #[test]
    fn indices_iterates_from_start_to_end_exclusive() {
        assert_eq!(range(5, 8).indices().collect::<Vec<_>>(), vec![5, 6, 7]);
        assert_eq!(range(2, 12).indices().count(), 10);
    }

    #[test]
    fn contains_is_half_open() {
        let r = range(5, 10);
        assert!(r.contains(5));
        assert!(r.contains(9));
        assert!(!r.contains(10));
        assert!(!r.contains(4));
        assert!(!range(5, 5).contains(5));
    }
}
