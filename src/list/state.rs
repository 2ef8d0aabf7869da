//! ListState - scroll position, viewport, and per-render window planning.
//!
//! The state machine behind the infinite list. One instance per list;
//! nothing here is shared.

use super::frame::{FrameRow, ListFrame, ListPhase, RowKind};
use super::options::ListOptions;
use super::rows::{Row, RowModel, HEADER_HEIGHT};
use super::scroll_seek::ScrollSeek;
use super::types::{LineHeight, LineOffset};
use super::visible_range::VisibleRange;
use crate::grouping::GroupLayout;
use std::fmt;
use std::time::Instant;
use tracing::debug;

/// Per-render input to [`ListState::plan`].
#[derive(Clone, Copy)]
pub struct PlanInput<'a> {
    loading: bool,
    item_count: usize,
    group_counts: &'a [usize],
    revision: u64,
    item_height: Option<&'a dyn Fn(usize) -> LineHeight>,
}

impl<'a> PlanInput<'a> {
    /// Ungrouped list of `item_count` items.
    pub fn flat(item_count: usize) -> Self {
        Self {
            loading: false,
            item_count,
            group_counts: &[],
            revision: 0,
            item_height: None,
        }
    }

    /// Grouped list; empty `group_counts` falls back to the flat strategy.
    pub fn grouped(group_counts: &'a [usize], item_count: usize) -> Self {
        Self {
            group_counts,
            ..Self::flat(item_count)
        }
    }

    /// Input matching a grouping engine layout.
    pub fn from_layout<T>(layout: &'a GroupLayout<T>) -> Self {
        Self::grouped(&layout.group_counts, layout.len())
    }

    /// Builder: loading flag.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Builder: identity of the item data, bump it when height hints change.
    pub fn revision(mut self, revision: u64) -> Self {
        self.revision = revision;
        self
    }

    /// Builder: per-item height hint over flattened indices.
    pub fn item_height(mut self, hint: &'a dyn Fn(usize) -> LineHeight) -> Self {
        self.item_height = Some(hint);
        self
    }

    /// Effective (possibly grouped) item count.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Whether data is pending.
    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

impl fmt::Debug for PlanInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlanInput")
            .field("loading", &self.loading)
            .field("item_count", &self.item_count)
            .field("group_counts", &self.group_counts)
            .field("revision", &self.revision)
            .field("item_height", &self.item_height.is_some())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct RowsKey {
    revision: u64,
    item_count: usize,
    group_counts: Vec<usize>,
}

impl RowsKey {
    fn matches(&self, input: &PlanInput<'_>) -> bool {
        self.revision == input.revision
            && self.item_count == input.item_count
            && self.group_counts == input.group_counts
    }
}

/// Scroll and windowing state for one list instance.
#[derive(Debug, Clone)]
pub struct ListState {
    options: ListOptions,
    offset: LineOffset,
    viewport: Option<u16>,
    max_offset: usize,
    seek: Option<ScrollSeek>,
    end_latch: Option<usize>,
    rows: Option<(RowsKey, RowModel)>,
}

impl ListState {
    /// Fresh state at the top, viewport not yet measured.
    pub fn new(options: ListOptions) -> Self {
        let seek = options.scroll_seek.map(ScrollSeek::new);
        Self {
            options,
            offset: LineOffset::default(),
            viewport: None,
            max_offset: 0,
            seek,
            end_latch: None,
            rows: None,
        }
    }

    /// Windowing options.
    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    /// Replace the windowing options. No-op when unchanged.
    ///
    /// A new scroll-seek band restarts velocity sampling; height changes
    /// rebuild the row model on the next plan.
    pub fn set_options(&mut self, options: &ListOptions) {
        if self.options == *options {
            return;
        }
        if self.options.scroll_seek != options.scroll_seek {
            self.seek = options.scroll_seek.map(ScrollSeek::new);
        }
        self.options = options.clone();
        self.rows = None;
    }

    /// Current scroll offset in lines.
    pub fn scroll_offset(&self) -> LineOffset {
        self.offset
    }

    /// Measured viewport height, if any.
    pub fn viewport_height(&self) -> Option<u16> {
        self.viewport
    }

    /// Largest valid offset as of the last plan.
    pub fn max_offset(&self) -> usize {
        self.max_offset
    }

    /// Record the viewport height.
    pub fn set_viewport(&mut self, height: u16) {
        self.viewport = Some(height);
    }

    /// Whether fast-scroll placeholders are active.
    pub fn is_seeking(&self) -> bool {
        self.seek.as_ref().is_some_and(ScrollSeek::is_active)
    }

    /// Scroll by `delta` lines (negative is up).
    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll_by_at(delta, Instant::now());
    }

    /// Scroll by `delta` lines, sampling velocity at `now`.
    pub fn scroll_by_at(&mut self, delta: isize, now: Instant) {
        let target = self.offset.saturating_offset(delta);
        self.scroll_to_at(target.get(), now);
    }

    /// Jump to an absolute line offset (clamped).
    pub fn scroll_to_at(&mut self, offset: usize, now: Instant) {
        self.offset = LineOffset::new(offset).min(self.max_offset);
        if let Some(seek) = self.seek.as_mut() {
            seek.observe(self.offset.get(), now);
        }
    }

    /// Jump to the first line.
    pub fn scroll_to_top(&mut self) {
        self.scroll_to_at(0, Instant::now());
    }

    /// Jump to the last page.
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_to_at(self.max_offset, Instant::now());
    }

    /// Scroll down by one viewport (less one line of context).
    pub fn page_down(&mut self) {
        self.scroll_by(self.page_size() as isize);
    }

    /// Scroll up by one viewport (less one line of context).
    pub fn page_up(&mut self) {
        self.scroll_by(-(self.page_size() as isize));
    }

    fn page_size(&self) -> usize {
        (self.viewport.unwrap_or(1) as usize).saturating_sub(1).max(1)
    }

    /// Bring a flattened item into view at the top of the viewport.
    ///
    /// In a grouped list the item lands on the line below the top one, which
    /// holds its group header (sticky or real). Uses the row model from the
    /// last plan; no-op before the first plan or for indices past the end.
    pub fn scroll_to_item(&mut self, index: usize) {
        let offset = self.rows.as_ref().and_then(|(_, rows)| {
            let row = rows.item_row(index)?;
            let top = rows.offset_of(row);
            Some(match rows.row(row) {
                Some(Row::Item { group: Some(_), .. }) => {
                    top.saturating_sub(HEADER_HEIGHT.get() as usize)
                }
                _ => top,
            })
        });
        if let Some(offset) = offset {
            self.scroll_to_at(offset, Instant::now());
        }
    }

    /// Let scroll-seek decay when scrolling has stopped.
    pub fn tick(&mut self, now: Instant) {
        if let Some(seek) = self.seek.as_mut() {
            seek.tick(now);
        }
    }

    /// Re-arm the end-reached callback for the current length.
    pub fn reset_end_reached(&mut self) {
        self.end_latch = None;
    }

    /// Drop the cached row model (height hints changed).
    pub fn invalidate_rows(&mut self) {
        self.rows = None;
    }

    /// Compute the frame for this render pass.
    ///
    /// Clamps the scroll offset to the content, selects the visible rows,
    /// swaps item rows for placeholders while scroll-seek is active, appends
    /// the skeleton footer while loading, and decides whether the tail was
    /// reached. The end-reached flag is set at most once per item count.
    pub fn plan(&mut self, input: &PlanInput<'_>, now: Instant) -> ListFrame {
        let phase = ListPhase::resolve(input.loading, input.item_count);
        if phase == ListPhase::Empty {
            self.offset = LineOffset::default();
            self.max_offset = 0;
            self.end_latch = None;
            let mut frame = ListFrame::empty(phase);
            frame.visible_items.viewport_height = self.viewport.unwrap_or(0);
            return frame;
        }

        if !self.rows.as_ref().is_some_and(|(key, _)| key.matches(input)) {
            let default_height = self.options.default_item_height;
            let model = match input.item_height {
                Some(hint) => RowModel::build(input.group_counts, input.item_count, hint),
                None => RowModel::build(input.group_counts, input.item_count, |_| default_height),
            };
            debug!(
                rows = model.len(),
                height = model.total_height(),
                "Rebuilt list row model"
            );
            let key = RowsKey {
                revision: input.revision,
                item_count: input.item_count,
                group_counts: input.group_counts.to_vec(),
            };
            self.rows = Some((key, model));
        }
        let Some((_, rows)) = self.rows.as_ref() else {
            return ListFrame::empty(phase);
        };

        let loading = phase == ListPhase::Loading;
        let footer = if loading { self.options.footer_height() } else { 0 };
        let content = rows.total_height();
        let total = content + footer;

        let (offset, viewport, measured) = match self.viewport {
            Some(height) => {
                self.max_offset = total.saturating_sub(height as usize);
                self.offset = self.offset.min(self.max_offset);
                (self.offset.get(), height as usize, true)
            }
            None => {
                let initial = initial_height(rows, self.options.initial_item_count);
                (0, initial + footer, false)
            }
        };
        let bottom = offset + viewport;

        let seeking = phase == ListPhase::Populated
            && self.seek.as_mut().is_some_and(|seek| seek.tick(now));

        let mut frame_rows = Vec::new();
        let mut first_item: Option<usize> = None;
        let mut last_item: Option<usize> = None;
        let mut sticky_header = None;

        if let Some(start) = rows.row_at(offset) {
            for position in start..rows.len() {
                let top = rows.offset_of(position);
                if top >= bottom {
                    break;
                }
                let height = rows.height(position);
                let kind = match rows.row(position) {
                    Some(Row::Header { group }) => RowKind::Header { group },
                    Some(Row::Item { index, group }) => {
                        if frame_rows.is_empty() {
                            sticky_header = group;
                        }
                        first_item.get_or_insert(index);
                        last_item = Some(index);
                        if seeking {
                            RowKind::SeekPlaceholder { index }
                        } else {
                            RowKind::Item { index }
                        }
                    }
                    None => break,
                };
                frame_rows.push(clip_row(top, height, offset, bottom, kind));
            }
        }

        if loading {
            let skeleton_height = self.options.skeleton_height.get() as usize;
            for ordinal in 0..self.options.skeleton_count {
                let top = content + ordinal * skeleton_height;
                if top >= bottom {
                    break;
                }
                if top + skeleton_height <= offset {
                    continue;
                }
                frame_rows.push(clip_row(
                    top,
                    skeleton_height,
                    offset,
                    bottom,
                    RowKind::Skeleton { ordinal },
                ));
            }
        }

        let visible_items = match (first_item, last_item) {
            (Some(first), Some(last)) => {
                VisibleRange::new(first, last + 1, LineOffset::new(offset), viewport as u16)
            }
            _ => VisibleRange::new(0, 0, LineOffset::new(offset), viewport as u16),
        };

        let near_end = last_item.is_some_and(|last| {
            last.saturating_add(self.options.end_reached_threshold + 1) >= input.item_count
        });
        let end_reached = measured
            && phase == ListPhase::Populated
            && near_end
            && self.end_latch != Some(input.item_count);
        if end_reached {
            self.end_latch = Some(input.item_count);
            debug!(item_count = input.item_count, "List end reached");
        }

        ListFrame {
            phase,
            rows: frame_rows,
            sticky_header,
            end_reached,
            scroll_offset: LineOffset::new(offset),
            total_height: total,
            visible_items,
        }
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new(ListOptions::default())
    }
}

/// Height covering the first `count` items (and their headers).
fn initial_height(rows: &RowModel, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    match rows.item_row(count - 1) {
        Some(row) => rows.offset_of(row + 1),
        None => rows.total_height(),
    }
}

fn clip_row(top: usize, height: usize, offset: usize, bottom: usize, kind: RowKind) -> FrameRow {
    let visible_top = top.max(offset);
    let visible_bottom = (top + height).min(bottom);
    FrameRow {
        y: (visible_top - offset) as u16,
        skip: (visible_top - top) as u16,
        height: visible_bottom.saturating_sub(visible_top) as u16,
        kind,
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
