//! Virtualized list core - windowing, loading/empty states, tail detection
//!
//! Headless half of the infinite list. Given the effective item count, the
//! grouping engine's boundaries, and the loading flag, [`ListState::plan`]
//! decides which rows are visible and what they show. Rendering lives in
//! `view::infinite_list`.
//!
//! # Module Structure
//!
//! - `types`: Core newtypes (LineHeight, LineOffset)
//! - `height_index`: HeightIndex - O(log n) prefix sums via Fenwick tree
//! - `rows`: RowModel - header and item rows with cumulative heights
//! - `options`: ListOptions, ScrollSeekConfig - windowing passthrough options
//! - `scroll_seek`: ScrollSeek - velocity sampling with hysteresis
//! - `visible_range`: VisibleRange - items visible in the viewport
//! - `frame`: ListFrame, ListPhase - per-render plan
//! - `state`: ListState - scroll position and planning

pub mod frame;
pub mod height_index;
pub mod options;
pub mod rows;
pub mod scroll_seek;
pub mod state;
pub mod types;
pub mod visible_range;

pub use frame::{FrameRow, ListFrame, ListPhase, RowKind};
pub use options::{ListOptions, OptionsError, ScrollSeekConfig};
pub use state::{ListState, PlanInput};
pub use types::{LineHeight, LineOffset};
pub use visible_range::VisibleRange;
