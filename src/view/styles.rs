//! List styling configuration.

use crate::model::PartnerStatus;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Explicit setting, ignoring the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::new(true)
    }
}

// ===== ListStyles =====

/// Styles used by the infinite list and the contact rows.
///
/// With colors disabled only modifiers (bold, dim) remain, so headers and
/// placeholders stay distinguishable on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListStyles {
    /// Group header rows and the sticky header.
    pub header: Style,
    /// Base style for item rows.
    pub item: Style,
    /// Skeleton footer bars.
    pub skeleton: Style,
    /// Scroll-seek placeholder bars.
    pub placeholder: Style,
    /// Empty-state message.
    pub empty: Style,
    /// Secondary text inside rows (dates, amounts).
    pub muted: Style,
    colors: bool,
}

impl ListStyles {
    /// Styles for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let dim = Style::default().add_modifier(Modifier::DIM);
        if config.colors_enabled() {
            Self {
                header: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                item: Style::default(),
                skeleton: dim.fg(Color::DarkGray),
                placeholder: dim.fg(Color::Gray),
                empty: Style::default().fg(Color::Yellow),
                muted: Style::default().fg(Color::DarkGray),
                colors: true,
            }
        } else {
            Self {
                header: Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED),
                item: Style::default(),
                skeleton: dim,
                placeholder: dim,
                empty: Style::default(),
                muted: Style::default(),
                colors: false,
            }
        }
    }

    /// Style for a status label.
    pub fn status(&self, status: Option<PartnerStatus>) -> Style {
        if !self.colors {
            return Style::default();
        }
        match status {
            Some(
                PartnerStatus::PartnerFinancial
                | PartnerStatus::PartnerSpecial
                | PartnerStatus::PartnerPray,
            ) => Style::default().fg(Color::Green),
            Some(
                PartnerStatus::AppointmentScheduled
                | PartnerStatus::CallForDecision
                | PartnerStatus::ContactForAppointment,
            ) => Style::default().fg(Color::Yellow),
            Some(
                PartnerStatus::NotInterested
                | PartnerStatus::Unresponsive
                | PartnerStatus::NeverAsk
                | PartnerStatus::ResearchAbandoned
                | PartnerStatus::ExpiredReferral,
            ) => Style::default().fg(Color::DarkGray),
            Some(_) => Style::default().fg(Color::Blue),
            None => self.muted,
        }
    }
}

impl Default for ListStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::default())
    }
}

// ===== Tests =====
