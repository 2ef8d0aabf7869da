//! Contact browser state.
//!
//! Owns the loaded contacts, the list's scroll state, the active group mode
//! and the pagination driver. Pure apart from the source fetch in
//! [`BrowserState::deliver_pending`]; the view layer only reads it and feeds
//! it key actions.

use crate::grouping::GroupedCollection;
use crate::i18n::Translator;
use crate::list::{ListOptions, ListState};
use crate::model::error::InputError;
use crate::model::{Contact, GroupMode, KeyAction};
use crate::source::{ContactSource, Paginator};
use std::time::Instant;
use tracing::{debug, info};

/// Snapshot of what the status bar shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusInfo {
    /// Active grouping.
    pub mode: GroupMode,
    /// Contacts loaded so far.
    pub count: usize,
    /// Whether the source has more pages.
    pub more: bool,
    /// Whether a page is being fetched.
    pub loading: bool,
    /// Malformed input lines that were skipped.
    pub skipped: usize,
}

/// State of the contact browser.
pub struct BrowserState<S> {
    collection: GroupedCollection<Contact>,
    list: ListState,
    group_mode: GroupMode,
    translator: Translator,
    paginator: Paginator<S>,
    skipped: usize,
}

impl<S: ContactSource> BrowserState<S> {
    /// Browser over `source`. The first page is requested immediately, so
    /// the first render shows the loading footer.
    pub fn new(
        source: S,
        page_size: usize,
        options: ListOptions,
        group_mode: GroupMode,
        translator: Translator,
    ) -> Self {
        let mut paginator = Paginator::new(source, page_size);
        paginator.request();
        let mut collection = GroupedCollection::new();
        collection.set_classifier(group_mode.classifier(&translator));
        collection.refresh();
        Self {
            collection,
            list: ListState::new(options),
            group_mode,
            translator,
            paginator,
            skipped: 0,
        }
    }

    /// Record how many input lines were skipped while loading the source.
    pub fn with_skipped(mut self, skipped: usize) -> Self {
        self.skipped = skipped;
        self
    }

    /// Loaded contacts and their grouping.
    pub fn collection(&self) -> &GroupedCollection<Contact> {
        &self.collection
    }

    /// Scroll state of the list.
    pub fn list_state(&self) -> &ListState {
        &self.list
    }

    /// Active group mode.
    pub fn group_mode(&self) -> GroupMode {
        self.group_mode
    }

    /// String catalog.
    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Whether a page is in flight.
    pub fn is_loading(&self) -> bool {
        self.paginator.is_loading()
    }

    /// Borrow what a render pass needs, all at once.
    pub fn render_parts(&mut self) -> (&GroupedCollection<Contact>, &mut ListState, &Translator) {
        (&self.collection, &mut self.list, &self.translator)
    }

    /// Status bar contents.
    pub fn status(&self) -> StatusInfo {
        StatusInfo {
            mode: self.group_mode,
            count: self.collection.len(),
            more: self.paginator.has_more(),
            loading: self.paginator.is_loading(),
            skipped: self.skipped,
        }
    }

    /// Ask for the next page (the list reached its end).
    ///
    /// Returns `false` when a page is already in flight or the source is
    /// exhausted.
    pub fn request_more(&mut self) -> bool {
        self.paginator.request()
    }

    /// Fetch the requested page, if any, and append it.
    ///
    /// Returns whether contacts were delivered.
    ///
    /// # Errors
    ///
    /// Propagates source read failures; the request stays pending.
    pub fn deliver_pending(&mut self) -> Result<bool, InputError> {
        let Some(page) = self.paginator.deliver()? else {
            return Ok(false);
        };
        debug!(
            contacts = page.contacts.len(),
            total = self.collection.len() + page.contacts.len(),
            "Appending page"
        );
        self.collection.extend(page.contacts);
        self.collection.refresh();
        Ok(true)
    }

    /// Let scroll-seek decay.
    pub fn tick(&mut self, now: Instant) {
        self.list.tick(now);
    }

    /// Switch grouping and return to the top of the list.
    pub fn set_group_mode(&mut self, mode: GroupMode) {
        if mode == self.group_mode {
            return;
        }
        self.group_mode = mode;
        self.collection
            .set_classifier(mode.classifier(&self.translator));
        self.collection.refresh();
        self.list.scroll_to_top();
        info!(mode = %mode, groups = self.collection.cached_layout().group_count(), "Group mode changed");
    }

    /// Scroll by `delta` lines as one input event sampled at `now`.
    pub fn scroll_lines(&mut self, delta: isize, now: Instant) {
        self.list.scroll_by_at(delta, now);
    }

    /// Apply a key action. Returns `true` if the app should quit.
    pub fn apply(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::ScrollUp => self.list.scroll_by(-1),
            KeyAction::ScrollDown => self.list.scroll_by(1),
            KeyAction::PageUp => self.list.page_up(),
            KeyAction::PageDown => self.list.page_down(),
            KeyAction::ScrollToTop => self.list.scroll_to_top(),
            KeyAction::ScrollToBottom => self.list.scroll_to_bottom(),
            KeyAction::CycleGroupMode => self.set_group_mode(self.group_mode.next()),
            KeyAction::Quit => return true,
        }
        false
    }
}

#[cfg(test)]
#[path = "browser_tests.rs"]
mod tests;
