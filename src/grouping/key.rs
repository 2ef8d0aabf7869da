//! Group sort keys and classifier output.

use std::cmp::Ordering;
use std::fmt;

/// Sort key for a group.
///
/// A tagged union over the two key shapes a classifier may produce.
/// Keys are totally ordered: every `Number` sorts before every `Text`,
/// numbers compare with `f64::total_cmp`, text compares by code point.
#[derive(Debug, Clone)]
pub enum GroupKey {
    /// Numeric sort key (`-0.0` is normalised to `0.0`).
    Number(f64),
    /// Textual sort key.
    Text(String),
}

impl GroupKey {
    /// Create a numeric key.
    pub fn number(value: f64) -> Self {
        // -0.0 and 0.0 name the same group
        if value == 0.0 {
            Self::Number(0.0)
        } else {
            Self::Number(value)
        }
    }

    /// Create a textual key.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    fn rank(&self) -> u8 {
        match self {
            GroupKey::Number(_) => 0,
            GroupKey::Text(_) => 1,
        }
    }
}

impl PartialEq for GroupKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for GroupKey {}

impl PartialOrd for GroupKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GroupKey {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (GroupKey::Number(a), GroupKey::Number(b)) => a.total_cmp(b),
            (GroupKey::Text(a), GroupKey::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Number(n) => write!(f, "{}", n),
            GroupKey::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for GroupKey {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

impl From<i64> for GroupKey {
    fn from(value: i64) -> Self {
        Self::number(value as f64)
    }
}

impl From<i32> for GroupKey {
    fn from(value: i32) -> Self {
        Self::number(f64::from(value))
    }
}

impl From<u32> for GroupKey {
    fn from(value: u32) -> Self {
        Self::number(f64::from(value))
    }
}

impl From<&str> for GroupKey {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for GroupKey {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Classifier output: the group an item belongs to.
///
/// When `order` is `None` the label doubles as the sort key, see
/// [`GroupSpec::sort_key`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSpec {
    /// Display label of the group.
    pub label: String,
    /// Explicit sort key. Falls back to the label when absent.
    pub order: Option<GroupKey>,
}

impl GroupSpec {
    /// Group identified and sorted by its label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            order: None,
        }
    }

    /// Attach an explicit sort key.
    pub fn with_order(mut self, order: impl Into<GroupKey>) -> Self {
        self.order = Some(order.into());
        self
    }

    /// Key used for both group identity and ordering.
    pub fn sort_key(&self) -> GroupKey {
        match &self.order {
            Some(order) => order.clone(),
            None => GroupKey::Text(self.label.clone()),
        }
    }

    /// Consume the spec, yielding `(key, label)`.
    pub fn into_parts(self) -> (GroupKey, String) {
        let key = match self.order {
            Some(order) => order,
            None => GroupKey::Text(self.label.clone()),
        };
        (key, self.label)
    }
}
