//! Infinite list widget.
//!
//! Renders a [`GroupedCollection`] through the planned [`ListFrame`] of a
//! [`ListState`]. Only rows inside the viewport are drawn, and
//! `item_content` is called only for rows that show real content. Loading
//! adds a skeleton footer, an empty collection shows the placeholder, and
//! fast scrolling swaps items for shaded bars.

use super::styles::ListStyles;
use crate::grouping::{GroupLayout, GroupedCollection};
use crate::list::{
    FrameRow, LineHeight, ListFrame, ListOptions, ListPhase, ListState, PlanInput, RowKind,
};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Clear, Paragraph, StatefulWidget, Widget};
use std::time::Instant;

type ItemContent<'a, T, C> = Box<dyn Fn(usize, &T, Option<&C>) -> Text<'static> + 'a>;
type ItemHeight<'a, T> = Box<dyn Fn(&T) -> u16 + 'a>;

const SKELETON_FILL: &str = "▒";
const PLACEHOLDER_FILL: &str = "░";

/// Virtualized, optionally grouped list.
///
/// `C` is an optional read-only context handed to every `item_content` call.
pub struct InfiniteList<'a, T, C = ()> {
    collection: &'a GroupedCollection<T>,
    item_content: ItemContent<'a, T, C>,
    context: Option<&'a C>,
    loading: bool,
    empty_placeholder: Option<Text<'a>>,
    options: Option<&'a ListOptions>,
    item_height: Option<ItemHeight<'a, T>>,
    on_end_reached: Option<Box<dyn FnMut() + 'a>>,
    block: Option<Block<'a>>,
    styles: ListStyles,
    now: Option<Instant>,
}

impl<'a, T, C> InfiniteList<'a, T, C> {
    /// List over the collection's cached layout.
    ///
    /// `item_content` receives the flattened (grouped) index, the item, and
    /// the context if one was supplied.
    ///
    /// The collection must be refreshed after every mutation
    /// ([`GroupedCollection::refresh`]); a stale layout keeps the old item
    /// count, so end-reached would never re-arm. Debug builds assert this.
    pub fn new<F>(collection: &'a GroupedCollection<T>, item_content: F) -> Self
    where
        F: Fn(usize, &T, Option<&C>) -> Text<'static> + 'a,
    {
        Self {
            collection,
            item_content: Box::new(item_content),
            context: None,
            loading: false,
            empty_placeholder: None,
            options: None,
            item_height: None,
            on_end_reached: None,
            block: None,
            styles: ListStyles::default(),
            now: None,
        }
    }

    /// Data is pending: show the skeleton footer.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Context passed to every `item_content` call.
    pub fn context(mut self, context: &'a C) -> Self {
        self.context = Some(context);
        self
    }

    /// Content shown when the list is empty and not loading.
    pub fn empty_placeholder(mut self, placeholder: impl Into<Text<'a>>) -> Self {
        self.empty_placeholder = Some(placeholder.into());
        self
    }

    /// Windowing options, applied to the state before planning.
    pub fn options(mut self, options: &'a ListOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Per-item height in lines (0 is treated as 1).
    pub fn item_height(mut self, height: impl Fn(&T) -> u16 + 'a) -> Self {
        self.item_height = Some(Box::new(height));
        self
    }

    /// Called when the last visible item comes within the end-reached
    /// threshold. Fires once per item count.
    pub fn on_end_reached(mut self, callback: impl FnMut() + 'a) -> Self {
        self.on_end_reached = Some(Box::new(callback));
        self
    }

    /// Surrounding block.
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Row styles.
    pub fn styles(mut self, styles: ListStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Clock used for scroll-seek decay; defaults to `Instant::now()`.
    pub fn at(mut self, now: Instant) -> Self {
        self.now = Some(now);
        self
    }
}

impl<T, C> StatefulWidget for InfiniteList<'_, T, C> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ListState) {
        let InfiniteList {
            collection,
            item_content,
            context,
            loading,
            empty_placeholder,
            options,
            item_height,
            mut on_end_reached,
            block,
            styles,
            now,
        } = self;

        let inner = match block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };
        if inner.is_empty() {
            return;
        }
        if let Some(options) = options {
            state.set_options(options);
        }
        state.set_viewport(inner.height);

        debug_assert!(
            !collection.is_stale(),
            "InfiniteList rendered a collection that was mutated without refresh()"
        );
        let layout = collection.cached_layout();
        let frame = {
            let default_height = state.options().default_item_height;
            let hint = item_height.as_deref();
            let height_of = |index: usize| match (hint, collection.item(index)) {
                (Some(hint), Some(item)) => LineHeight::saturating(hint(item)),
                _ => default_height,
            };
            let mut input = PlanInput::from_layout(layout)
                .loading(loading)
                .revision(collection.revision());
            if hint.is_some() {
                input = input.item_height(&height_of);
            }
            state.plan(&input, now.unwrap_or_else(Instant::now))
        };

        if frame.phase == ListPhase::Empty {
            if let Some(placeholder) = empty_placeholder {
                render_placeholder(placeholder, inner, buf, &styles);
            }
        } else {
            for row in &frame.rows {
                let rect = row_rect(inner, row);
                match row.kind {
                    RowKind::Header { group } => {
                        render_header(layout, group, rect, buf, &styles);
                    }
                    RowKind::Item { index } => {
                        if let Some(item) = collection.item(index) {
                            Paragraph::new(item_content(index, item, context))
                                .style(styles.item)
                                .scroll((row.skip, 0))
                                .render(rect, buf);
                        }
                    }
                    RowKind::SeekPlaceholder { index } => {
                        render_bar(rect, buf, PLACEHOLDER_FILL, index, &styles);
                    }
                    RowKind::Skeleton { ordinal } => {
                        render_bar(rect, buf, SKELETON_FILL, ordinal, &styles);
                    }
                }
            }
            render_sticky_header(&frame, layout, inner, buf, &styles);
        }

        if frame.end_reached {
            if let Some(callback) = on_end_reached.as_mut() {
                callback();
            }
        }
    }
}

fn row_rect(inner: Rect, row: &FrameRow) -> Rect {
    Rect {
        x: inner.x,
        y: inner.y + row.y,
        width: inner.width,
        height: row.height,
    }
}

fn header_line<T>(layout: &GroupLayout<T>, group: usize) -> Line<'_> {
    let label = layout.group_labels.get(group).map_or("", String::as_str);
    let count = layout.group_counts.get(group).copied().unwrap_or(0);
    Line::from(format!(" {label} ({count})"))
}

fn render_header<T>(
    layout: &GroupLayout<T>,
    group: usize,
    rect: Rect,
    buf: &mut Buffer,
    styles: &ListStyles,
) {
    buf.set_style(rect, styles.header);
    buf.set_line(rect.x, rect.y, &header_line(layout, group), rect.width);
}

fn render_sticky_header<T>(
    frame: &ListFrame,
    layout: &GroupLayout<T>,
    inner: Rect,
    buf: &mut Buffer,
    styles: &ListStyles,
) {
    let Some(group) = frame.sticky_header else {
        return;
    };
    let rect = Rect { height: 1, ..inner };
    Clear.render(rect, buf);
    render_header(layout, group, rect, buf, styles);
}

/// Shaded bar whose length varies with `seed` so stacked bars look like text.
fn render_bar(rect: Rect, buf: &mut Buffer, fill: &str, seed: usize, styles: &ListStyles) {
    let (style, indent) = if fill == SKELETON_FILL {
        (styles.skeleton, 1)
    } else {
        (styles.placeholder, 0)
    };
    let available = rect.width.saturating_sub(indent * 2) as usize;
    let percent = 45 + (seed * 37) % 50;
    let len = (available * percent / 100).max(1).min(available);
    for y in rect.top()..rect.bottom() {
        buf.set_string(rect.x + indent, y, fill.repeat(len), style);
    }
}

fn render_placeholder(placeholder: Text<'_>, inner: Rect, buf: &mut Buffer, styles: &ListStyles) {
    let height = (placeholder.height() as u16).min(inner.height);
    let rect = Rect {
        y: inner.y + (inner.height - height) / 2,
        height,
        ..inner
    };
    Paragraph::new(placeholder)
        .style(styles.empty)
        .alignment(Alignment::Center)
        .render(rect, buf);
}
