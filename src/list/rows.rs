//! Row model: the flattened sequence of header and item rows.

use super::height_index::HeightIndex;
use super::types::LineHeight;

/// Height of a group header row.
pub const HEADER_HEIGHT: LineHeight = LineHeight::ONE;

/// One row of the virtualized list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    /// Label row preceding the first item of a group.
    Header {
        /// Group index into the layout's counts/labels.
        group: usize,
    },
    /// An item at a position in the flattened (grouped) sequence.
    Item {
        /// Flattened item index.
        index: usize,
        /// Owning group when the list is grouped.
        group: Option<usize>,
    },
}

/// Rows plus their cumulative heights.
///
/// Flat strategy: one `Item` row per item. Grouped strategy: each group
/// contributes a `Header` row followed by its `group_counts[g]` item rows.
#[derive(Debug, Clone, Default)]
pub struct RowModel {
    rows: Vec<Row>,
    heights: HeightIndex,
    group_header_rows: Vec<usize>,
    item_rows: Vec<usize>,
}

impl RowModel {
    /// Build the row model.
    ///
    /// `item_height` receives flattened item indices. Group counts are
    /// trusted as-is; indices past `item_count` still get rows and are
    /// filtered at lookup time.
    pub fn build<F>(group_counts: &[usize], item_count: usize, mut item_height: F) -> Self
    where
        F: FnMut(usize) -> LineHeight,
    {
        let row_count = if group_counts.is_empty() {
            item_count
        } else {
            group_counts.len() + group_counts.iter().sum::<usize>()
        };
        let mut model = Self {
            rows: Vec::with_capacity(row_count),
            heights: HeightIndex::new(row_count),
            group_header_rows: Vec::with_capacity(group_counts.len()),
            item_rows: Vec::with_capacity(row_count),
        };

        if group_counts.is_empty() {
            for index in 0..item_count {
                model.push(Row::Item { index, group: None }, item_height(index));
            }
            return model;
        }

        let mut index = 0;
        for (group, &count) in group_counts.iter().enumerate() {
            model.group_header_rows.push(model.rows.len());
            model.push(Row::Header { group }, HEADER_HEIGHT);
            for _ in 0..count {
                model.push(
                    Row::Item {
                        index,
                        group: Some(group),
                    },
                    item_height(index),
                );
                index += 1;
            }
        }
        model
    }

    fn push(&mut self, row: Row, height: LineHeight) {
        if let Row::Item { .. } = row {
            self.item_rows.push(self.rows.len());
        }
        self.rows.push(row);
        self.heights.push(height.get() as usize);
    }

    /// All rows in display order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row at position.
    pub fn row(&self, position: usize) -> Option<Row> {
        self.rows.get(position).copied()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total content height in lines.
    pub fn total_height(&self) -> usize {
        self.heights.total()
    }

    /// Height of the row at position.
    pub fn height(&self, position: usize) -> usize {
        self.heights.height(position).unwrap_or(0)
    }

    /// Line where the row at position starts.
    pub fn offset_of(&self, position: usize) -> usize {
        self.heights.offset_of(position)
    }

    /// Row covering a vertical offset.
    pub fn row_at(&self, offset: usize) -> Option<usize> {
        self.heights.lower_bound(offset)
    }

    /// Row position of a group's header.
    pub fn header_row(&self, group: usize) -> Option<usize> {
        self.group_header_rows.get(group).copied()
    }

    /// Row position of a flattened item index.
    pub fn item_row(&self, index: usize) -> Option<usize> {
        self.item_rows.get(index).copied()
    }
}
