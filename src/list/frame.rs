//! Planned frame: what the list draws this render pass.

use super::types::LineOffset;
use super::visible_range::VisibleRange;

/// Mutually exclusive render state of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    /// Data is pending; skeleton rows are appended as a footer.
    Loading,
    /// Not loading and nothing to show; the empty placeholder is drawn.
    Empty,
    /// Not loading and at least one item.
    Populated,
}

impl ListPhase {
    /// Derive the phase from the loading flag and effective item count.
    pub fn resolve(loading: bool, item_count: usize) -> Self {
        if loading {
            ListPhase::Loading
        } else if item_count == 0 {
            ListPhase::Empty
        } else {
            ListPhase::Populated
        }
    }
}

/// What occupies a planned row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Group label header.
    Header {
        /// Group index into the layout's labels.
        group: usize,
    },
    /// Real item content; the renderer calls `item_content` for it.
    Item {
        /// Flattened item index.
        index: usize,
    },
    /// Lightweight stand-in drawn during fast scrolling.
    SeekPlaceholder {
        /// Flattened item index the placeholder stands in for.
        index: usize,
    },
    /// Loading footer row.
    Skeleton {
        /// Position within the footer.
        ordinal: usize,
    },
}

/// A row clipped to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRow {
    /// Viewport line where the visible part of the row starts.
    pub y: u16,
    /// Lines of the row hidden above the viewport.
    pub skip: u16,
    /// Visible lines.
    pub height: u16,
    /// Row content.
    pub kind: RowKind,
}

/// Output of [`ListState::plan`](super::state::ListState::plan).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFrame {
    /// Render state for this pass.
    pub phase: ListPhase,
    /// Visible rows, top to bottom.
    pub rows: Vec<FrameRow>,
    /// Group whose header is pinned to the top line, if any.
    pub sticky_header: Option<usize>,
    /// True when this pass crossed the tail threshold.
    pub end_reached: bool,
    /// Resolved (clamped) scroll offset.
    pub scroll_offset: LineOffset,
    /// Content height including the loading footer.
    pub total_height: usize,
    /// Items with at least one visible line.
    pub visible_items: VisibleRange,
}

impl ListFrame {
    /// Frame with no rows in the given phase.
    pub fn empty(phase: ListPhase) -> Self {
        Self {
            phase,
            rows: Vec::new(),
            sticky_header: None,
            end_reached: false,
            scroll_offset: LineOffset::default(),
            total_height: 0,
            visible_items: VisibleRange::default(),
        }
    }

    /// Flattened indices of rows drawn with real content.
    pub fn item_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.iter().filter_map(|row| match row.kind {
            RowKind::Item { index } => Some(index),
            _ => None,
        })
    }

    /// Number of skeleton rows in the frame.
    pub fn skeleton_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| matches!(row.kind, RowKind::Skeleton { .. }))
            .count()
    }

    /// Whether any row is a scroll-seek placeholder.
    pub fn is_seeking(&self) -> bool {
        self.rows
            .iter()
            .any(|row| matches!(row.kind, RowKind::SeekPlaceholder { .. }))
    }
}
