//! mpdx-list
//!
//! Groupable, virtualized infinite-scrolling list engine, plus a terminal
//! contact browser built on it.
//!
//! The library core is pure:
//! - [`grouping`]: partitions items into labeled, ordered groups
//! - [`list`]: headless windowing (visible rows, loading/empty phases,
//!   end-reached detection, scroll-seek)
//!
//! The shell around it handles I/O:
//! - [`source`]: cursor-paginated contact sources
//! - [`view`]: ratatui widgets and the event loop
//! - [`config`], [`logging`], [`i18n`]: ambient setup

pub mod config;
pub mod grouping;
pub mod i18n;
pub mod list;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;
