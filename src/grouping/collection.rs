//! GroupedCollection - item storage with a memoized group layout.

use super::{group_items, GroupLayout, GroupSpec};
use std::fmt;
use tracing::debug;

/// Caller-supplied classifier mapping an item to its group.
pub type Classifier<T> = Box<dyn Fn(&T) -> GroupSpec>;

/// Owns a paginated item sequence and an optional classifier.
///
/// The group layout is derived state: it is recomputed lazily after the
/// items or the classifier change and reused for every render in between.
/// The cached layout stores original indices, so [`GroupedCollection::item`]
/// translates a flattened position back to the original item without
/// cloning anything.
pub struct GroupedCollection<T> {
    items: Vec<T>,
    classifier: Option<Classifier<T>>,
    layout: GroupLayout<usize>,
    dirty: bool,
    revision: u64,
}

impl<T> GroupedCollection<T> {
    /// Empty, ungrouped collection.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            classifier: None,
            layout: GroupLayout::default(),
            dirty: false,
            revision: 0,
        }
    }

    /// Collection over `items`, ungrouped.
    pub fn from_items(items: Vec<T>) -> Self {
        let mut collection = Self::new();
        collection.replace(items);
        collection
    }

    /// Builder-style classifier setter.
    pub fn with_classifier(mut self, classifier: Classifier<T>) -> Self {
        self.set_classifier(Some(classifier));
        self
    }

    /// Replace the classifier (`None` disables grouping).
    pub fn set_classifier(&mut self, classifier: Option<Classifier<T>>) {
        self.classifier = classifier;
        self.dirty = true;
    }

    /// Whether a classifier is installed.
    pub fn has_classifier(&self) -> bool {
        self.classifier.is_some()
    }

    /// Append a page of items.
    pub fn extend(&mut self, page: impl IntoIterator<Item = T>) {
        let before = self.items.len();
        self.items.extend(page);
        if self.items.len() != before {
            self.dirty = true;
        }
    }

    /// Replace all items.
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
        self.dirty = true;
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        self.items.clear();
        self.dirty = true;
    }

    /// Items in original (load) order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of layout recomputations so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Current layout over original indices, recomputed if stale.
    pub fn layout(&mut self) -> &GroupLayout<usize> {
        self.refresh();
        &self.layout
    }

    /// Recompute the layout if items or classifier changed.
    pub fn refresh(&mut self) {
        if !self.dirty {
            return;
        }
        let items = &self.items;
        self.layout = match &self.classifier {
            Some(classify) => group_items(0..items.len(), Some(|&i: &usize| classify(&items[i]))),
            None => GroupLayout::ungrouped((0..items.len()).collect()),
        };
        self.dirty = false;
        self.revision += 1;
        debug!(
            items = self.items.len(),
            groups = self.layout.group_count(),
            revision = self.revision,
            "Recomputed group layout"
        );
    }

    /// Cached layout without refreshing.
    ///
    /// Callers that hold `&self` (renderers) see the layout as of the last
    /// [`GroupedCollection::refresh`].
    pub fn cached_layout(&self) -> &GroupLayout<usize> {
        &self.layout
    }

    /// Whether the cached layout is out of date.
    pub fn is_stale(&self) -> bool {
        self.dirty
    }

    /// Item at a position in the flattened (grouped) sequence.
    ///
    /// Returns `None` past the end of the cached layout.
    pub fn item(&self, flat_index: usize) -> Option<&T> {
        self.layout
            .get(flat_index)
            .and_then(|&original| self.items.get(original))
    }

    /// Original load-order index for a flattened position.
    pub fn original_index(&self, flat_index: usize) -> Option<usize> {
        self.layout.get(flat_index).copied()
    }
}

impl<T> Default for GroupedCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for GroupedCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupedCollection")
            .field("items", &self.items)
            .field("grouped", &self.classifier.is_some())
            .field("layout", &self.layout)
            .field("dirty", &self.dirty)
            .field("revision", &self.revision)
            .finish()
    }
}
