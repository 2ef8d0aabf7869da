//! Grouping engine - partitions an ordered collection into labeled groups
//!
//! Pure, leaf-level module. Given items and an optional classifier,
//! [`group_items`] produces a [`GroupLayout`]: the flattened, group-ordered
//! item sequence plus per-group counts and labels.
//!
//! # Module Structure
//!
//! - `key`: GroupKey (comparable sort key) and GroupSpec (classifier output)
//! - `collection`: GroupedCollection - owns items + classifier, memoizes the layout

pub mod collection;
pub mod key;

pub use collection::{Classifier, GroupedCollection};
pub use key::{GroupKey, GroupSpec};

use std::collections::BTreeMap;

/// Output of the grouping engine.
///
/// # Invariants
/// - `group_counts.iter().sum() == items.len()` when grouped
/// - `group_counts.len() == group_labels.len()`
/// - Both are empty when no classifier was supplied ("no grouping")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupLayout<T> {
    /// Items in group order; within a group, in original encounter order.
    pub items: Vec<T>,
    /// Number of consecutive items in `items` belonging to each group.
    pub group_counts: Vec<usize>,
    /// Label of each group, parallel to `group_counts`.
    pub group_labels: Vec<String>,
}

impl<T> GroupLayout<T> {
    /// Layout that passes items through unchanged.
    pub fn ungrouped(items: Vec<T>) -> Self {
        Self {
            items,
            group_counts: Vec::new(),
            group_labels: Vec::new(),
        }
    }

    /// True when at least one group exists.
    pub fn is_grouped(&self) -> bool {
        !self.group_counts.is_empty()
    }

    /// Number of items in the flattened sequence.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the flattened sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of groups.
    pub fn group_count(&self) -> usize {
        self.group_counts.len()
    }

    /// Guarded lookup into the flattened sequence.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Flat index of the first item of `group`.
    pub fn group_start(&self, group: usize) -> Option<usize> {
        if group >= self.group_counts.len() {
            return None;
        }
        Some(self.group_counts[..group].iter().sum())
    }

    /// Group owning the flat index, if grouped and in range.
    pub fn group_of(&self, index: usize) -> Option<usize> {
        let mut end = 0;
        for (group, count) in self.group_counts.iter().enumerate() {
            end += count;
            if index < end {
                return Some(group);
            }
        }
        None
    }

    /// Project each item, keeping the group boundaries.
    pub fn map<U, F>(self, f: F) -> GroupLayout<U>
    where
        F: FnMut(T) -> U,
    {
        GroupLayout {
            items: self.items.into_iter().map(f).collect(),
            group_counts: self.group_counts,
            group_labels: self.group_labels,
        }
    }
}

impl<T> Default for GroupLayout<T> {
    fn default() -> Self {
        Self::ungrouped(Vec::new())
    }
}

/// Partition `data` into groups according to `group_by`.
///
/// Without a classifier the items pass through unchanged and the count and
/// label vectors stay empty. With one, items are accumulated per sort key
/// (the classifier's `order`, or its `label` when `order` is absent), groups
/// are sorted ascending by key, and items keep their encounter order inside
/// each group. A group's label is fixed by the first item classified into it.
///
/// # Examples
///
/// ```
/// # use mpdx_list::grouping::{group_items, GroupSpec};
/// let layout = group_items(vec![0, 1, 2, 3, 4], Some(|id: &i32| match id {
///     1 | 2 => GroupSpec::new("Charlie"),
///     0 | 4 => GroupSpec::new("Bravo"),
///     _ => GroupSpec::new("Alpha"),
/// }));
/// assert_eq!(layout.items, vec![3, 0, 4, 1, 2]);
/// assert_eq!(layout.group_counts, vec![1, 2, 2]);
/// assert_eq!(layout.group_labels, vec!["Alpha", "Bravo", "Charlie"]);
/// ```
pub fn group_items<T, I, F>(data: I, group_by: Option<F>) -> GroupLayout<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> GroupSpec,
{
    let Some(mut classify) = group_by else {
        return GroupLayout::ungrouped(data.into_iter().collect());
    };

    let mut groups: BTreeMap<GroupKey, (String, Vec<T>)> = BTreeMap::new();
    for item in data {
        let (key, label) = classify(&item).into_parts();
        groups
            .entry(key)
            .or_insert_with(|| (label, Vec::new()))
            .1
            .push(item);
    }

    let mut layout = GroupLayout {
        items: Vec::new(),
        group_counts: Vec::with_capacity(groups.len()),
        group_labels: Vec::with_capacity(groups.len()),
    };
    for (label, items) in groups.into_values() {
        layout.group_counts.push(items.len());
        layout.group_labels.push(label);
        layout.items.extend(items);
    }
    layout
}

#[cfg(test)]
#[path = "grouping_tests.rs"]
mod tests;
