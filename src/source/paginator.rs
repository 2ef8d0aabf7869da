//! Request/deliver pagination over a [`ContactSource`].
//!
//! `request` records intent (what `end_reached` triggers); `deliver` performs
//! the fetch on a later event-loop tick. Between the two the list shows its
//! loading footer. Duplicate requests while a page is in flight, and
//! requests after the last page, are ignored.

use super::{ContactSource, Page, PageCursor};
use crate::model::error::InputError;
use tracing::debug;

/// Pagination driver.
#[derive(Debug)]
pub struct Paginator<S> {
    source: S,
    page_size: usize,
    cursor: Option<PageCursor>,
    exhausted: bool,
    in_flight: bool,
    pages_loaded: usize,
}

impl<S: ContactSource> Paginator<S> {
    /// Paginator at the start of `source`. A zero page size is treated as 1.
    pub fn new(source: S, page_size: usize) -> Self {
        Self {
            source,
            page_size: page_size.max(1),
            cursor: None,
            exhausted: false,
            in_flight: false,
            pages_loaded: 0,
        }
    }

    /// Ask for the next page. Returns whether a new request was recorded.
    pub fn request(&mut self) -> bool {
        if self.in_flight || self.exhausted {
            return false;
        }
        self.in_flight = true;
        debug!(page = self.pages_loaded + 1, "Page requested");
        true
    }

    /// Whether a requested page has not been delivered yet.
    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    /// Whether more pages remain.
    pub fn has_more(&self) -> bool {
        !self.exhausted
    }

    /// Pages delivered so far.
    pub fn pages_loaded(&self) -> usize {
        self.pages_loaded
    }

    /// Fetch the requested page, if any.
    ///
    /// # Errors
    ///
    /// Propagates source errors; the request stays pending so it can be
    /// retried.
    pub fn deliver(&mut self) -> Result<Option<Page>, InputError> {
        if !self.in_flight {
            return Ok(None);
        }
        let page = self.source.fetch(self.cursor, self.page_size)?;
        self.in_flight = false;
        self.pages_loaded += 1;
        self.cursor = page.next_cursor;
        self.exhausted = page.next_cursor.is_none();
        debug!(
            contacts = page.contacts.len(),
            exhausted = self.exhausted,
            "Page delivered"
        );
        Ok(Some(page))
    }

    /// Borrow the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }
}
