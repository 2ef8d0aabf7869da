//! Windowing options passed through to the list.

use super::types::LineHeight;
use thiserror::Error;

/// Default number of skeleton rows shown while loading.
pub const DEFAULT_SKELETON_COUNT: usize = 3;

/// Default scroll speed (lines per second) above which scroll-seek starts.
pub const DEFAULT_SCROLL_SEEK_ENTER: f64 = 200.0;

/// Default scroll speed (lines per second) below which scroll-seek stops.
pub const DEFAULT_SCROLL_SEEK_EXIT: f64 = 50.0;

/// Errors from validating list options.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionsError {
    /// Enter threshold must exceed exit threshold, both finite and >= 0.
    #[error("Scroll-seek enter velocity ({enter}) must be greater than exit velocity ({exit}), both finite and non-negative")]
    InvalidScrollSeek {
        /// Velocity above which placeholders are shown.
        enter: f64,
        /// Velocity below which real content returns.
        exit: f64,
    },

    /// Skeleton rows need a visible height.
    #[error("Skeleton height must be >= 1")]
    ZeroSkeletonHeight,
}

/// Hysteresis band for the fast-scroll placeholder mode.
///
/// # Invariants
/// - `enter > exit >= 0`, both finite (enforced by [`ScrollSeekConfig::new`])
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSeekConfig {
    enter: f64,
    exit: f64,
}

impl ScrollSeekConfig {
    /// Validate and build the band. Velocities are in lines per second.
    pub fn new(enter: f64, exit: f64) -> Result<Self, OptionsError> {
        let valid = enter.is_finite() && exit.is_finite() && exit >= 0.0 && enter > exit;
        if valid {
            Ok(Self { enter, exit })
        } else {
            Err(OptionsError::InvalidScrollSeek { enter, exit })
        }
    }

    /// Velocity magnitude that turns scroll-seek on.
    pub fn enter(&self) -> f64 {
        self.enter
    }

    /// Velocity magnitude that turns scroll-seek off.
    pub fn exit(&self) -> f64 {
        self.exit
    }
}

impl Default for ScrollSeekConfig {
    fn default() -> Self {
        Self {
            enter: DEFAULT_SCROLL_SEEK_ENTER,
            exit: DEFAULT_SCROLL_SEEK_EXIT,
        }
    }
}

/// Windowing configuration for an infinite list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListOptions {
    /// Skeleton rows appended while loading.
    pub skeleton_count: usize,
    /// Height of each skeleton row.
    pub skeleton_height: LineHeight,
    /// Items rendered before the viewport has been measured.
    pub initial_item_count: usize,
    /// Fire end-reached when the last visible item is this close to the end.
    pub end_reached_threshold: usize,
    /// Height used for items without an explicit hint.
    pub default_item_height: LineHeight,
    /// Fast-scroll placeholder band; `None` disables scroll-seek.
    pub scroll_seek: Option<ScrollSeekConfig>,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            skeleton_count: DEFAULT_SKELETON_COUNT,
            skeleton_height: LineHeight::ONE,
            initial_item_count: 0,
            end_reached_threshold: 0,
            default_item_height: LineHeight::ONE,
            scroll_seek: Some(ScrollSeekConfig::default()),
        }
    }
}

impl ListOptions {
    /// Total height of the loading footer.
    pub fn footer_height(&self) -> usize {
        self.skeleton_count * self.skeleton_height.get() as usize
    }

    /// Builder: number of skeleton rows.
    pub fn with_skeleton_count(mut self, count: usize) -> Self {
        self.skeleton_count = count;
        self
    }

    /// Builder: skeleton row height.
    pub fn with_skeleton_height(mut self, height: u16) -> Result<Self, OptionsError> {
        self.skeleton_height = LineHeight::new(height).map_err(|_| OptionsError::ZeroSkeletonHeight)?;
        Ok(self)
    }

    /// Builder: items rendered before the first measurement.
    pub fn with_initial_item_count(mut self, count: usize) -> Self {
        self.initial_item_count = count;
        self
    }

    /// Builder: end-reached look-ahead in items.
    pub fn with_end_reached_threshold(mut self, threshold: usize) -> Self {
        self.end_reached_threshold = threshold;
        self
    }

    /// Builder: default item height.
    pub fn with_default_item_height(mut self, height: u16) -> Self {
        self.default_item_height = LineHeight::saturating(height);
        self
    }

    /// Builder: scroll-seek band (`None` disables it).
    pub fn with_scroll_seek(mut self, config: Option<ScrollSeekConfig>) -> Self {
        self.scroll_seek = config;
        self
    }
}
