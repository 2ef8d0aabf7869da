//! How the contact browser groups its list.

use super::contact::{Contact, PartnerStatus};
use crate::grouping::{Classifier, GroupSpec};
use crate::i18n::Translator;
use chrono::Datelike;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Grouping applied to the contact list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum GroupMode {
    /// Flat list in load order.
    #[default]
    None,
    /// By pipeline status, in pipeline order.
    Status,
    /// By first letter of the name.
    Name,
    /// By month of the last gift, most recent first.
    LastGift,
}

impl GroupMode {
    /// Every mode, in cycling order.
    pub const ALL: [GroupMode; 4] = [
        GroupMode::None,
        GroupMode::Status,
        GroupMode::Name,
        GroupMode::LastGift,
    ];

    /// Next mode in the cycle (wraps).
    pub fn next(self) -> Self {
        let position = Self::ALL.iter().position(|mode| *mode == self).unwrap_or(0);
        Self::ALL[(position + 1) % Self::ALL.len()]
    }

    /// Config / CLI spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            GroupMode::None => "none",
            GroupMode::Status => "status",
            GroupMode::Name => "name",
            GroupMode::LastGift => "last-gift",
        }
    }

    /// Translation key for the mode's display name.
    pub fn label_key(self) -> &'static str {
        match self {
            GroupMode::None => "mode.none",
            GroupMode::Status => "mode.status",
            GroupMode::Name => "mode.name",
            GroupMode::LastGift => "mode.last_gift",
        }
    }

    /// Classifier for this mode; `None` for the flat list.
    ///
    /// Labels are resolved through `translator` once, up front, so the
    /// classifier owns everything it needs.
    pub fn classifier(self, translator: &Translator) -> Option<Classifier<Contact>> {
        match self {
            GroupMode::None => None,
            GroupMode::Status => {
                let labels: Vec<String> = PartnerStatus::ALL
                    .iter()
                    .map(|status| translator.t(&format!("status.{}", status.code())).to_string())
                    .collect();
                let missing = translator.t("group.no_status").to_string();
                Some(Box::new(move |contact: &Contact| match contact.status {
                    Some(status) => GroupSpec::new(labels[status.rank()].clone())
                        .with_order(status.rank() as u32),
                    None => GroupSpec::new(missing.clone()).with_order(PartnerStatus::ALL.len() as u32),
                }))
            }
            GroupMode::Name => {
                let other = translator.t("group.other").to_string();
                Some(Box::new(move |contact: &Contact| {
                    match contact.name.trim_start().chars().next() {
                        Some(first) if first.is_alphabetic() => {
                            GroupSpec::new(first.to_uppercase().collect::<String>())
                        }
                        _ => GroupSpec::new(other.clone()).with_order("~"),
                    }
                }))
            }
            GroupMode::LastGift => {
                let missing = translator.t("group.no_gift").to_string();
                Some(Box::new(move |contact: &Contact| match contact.last_donation {
                    Some(date) => {
                        let month_index = i64::from(date.year()) * 12 + i64::from(date.month0());
                        GroupSpec::new(date.format("%B %Y").to_string()).with_order(-month_index)
                    }
                    None => GroupSpec::new(missing.clone()).with_order(f64::INFINITY),
                }))
            }
        }
    }
}

impl fmt::Display for GroupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised group mode spelling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown group mode '{0}' (expected none, status, name or last-gift)")]
pub struct InvalidGroupMode(pub String);

impl FromStr for GroupMode {
    type Err = InvalidGroupMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GroupMode::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InvalidGroupMode(s.to_string()))
    }
}
