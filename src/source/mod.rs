//! Contact sources and cursor pagination.
//!
//! - [`ContactSource`]: page-at-a-time access to a contact collection
//! - [`JsonlSource`]: contacts parsed from a JSONL file or stdin
//! - [`Paginator`]: request/deliver loop that the app drives from
//!   `end_reached`

use crate::model::error::InputError;
use crate::model::Contact;
use std::path::PathBuf;

pub mod jsonl;
pub mod paginator;

pub use jsonl::JsonlSource;
pub use paginator::Paginator;

/// Opaque position in a source, handed back to fetch the next page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageCursor(usize);

impl PageCursor {
    pub(crate) fn new(position: usize) -> Self {
        Self(position)
    }

    pub(crate) fn position(self) -> usize {
        self.0
    }
}

/// One page of contacts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    /// Contacts on this page, in source order.
    pub contacts: Vec<Contact>,
    /// Cursor for the following page; `None` when this was the last.
    pub next_cursor: Option<PageCursor>,
}

impl Page {
    /// Whether more pages follow.
    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }
}

/// Cursor-paginated access to contacts.
pub trait ContactSource {
    /// Fetch up to `limit` contacts starting at `cursor` (`None` is the start).
    ///
    /// # Errors
    ///
    /// Returns `InputError` if the underlying data cannot be read.
    fn fetch(&mut self, cursor: Option<PageCursor>, limit: usize) -> Result<Page, InputError>;
}

/// Open the contact source named on the command line.
///
/// # Logic:
/// 1. If a file path is provided: load it
/// 2. If stdin is piped: read stdin to EOF
/// 3. Else: `InputError::NoInput`
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist,
/// `InputError::NoInput` if neither a file nor piped stdin is available,
/// `InputError::Io` for read failures.
pub fn detect_contact_source(file: Option<PathBuf>) -> Result<JsonlSource, InputError> {
    match file {
        Some(path) => JsonlSource::open(path),
        None => JsonlSource::from_stdin(),
    }
}
