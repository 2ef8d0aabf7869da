//! JSONL contact source.
//!
//! The whole input is parsed up front; pages are slices of the parsed
//! contacts. Malformed lines are skipped and kept for reporting.

use super::{ContactSource, Page, PageCursor};
use crate::model::error::{InputError, ParseError};
use crate::model::Contact;
use std::fs::File;
use std::io::{BufRead, BufReader, IsTerminal};
use std::path::Path;
use tracing::{debug, info, warn};

/// Contacts loaded from JSONL.
#[derive(Debug, Clone, Default)]
pub struct JsonlSource {
    contacts: Vec<Contact>,
    skipped: Vec<ParseError>,
}

impl JsonlSource {
    /// Load contacts from a file.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    /// Returns `InputError::Io` for other I/O errors.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(InputError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let source = Self::from_reader(BufReader::new(File::open(path)?))?;
        info!(
            path = %path.display(),
            contacts = source.len(),
            skipped = source.skipped.len(),
            "Loaded contacts"
        );
        Ok(source)
    }

    /// Load contacts from piped stdin.
    ///
    /// # Errors
    ///
    /// Returns `InputError::NoInput` if stdin is an interactive terminal.
    pub fn from_stdin() -> Result<Self, InputError> {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            return Err(InputError::NoInput);
        }
        Self::from_reader(stdin.lock())
    }

    /// Parse every line of `reader`. Blank lines are ignored.
    ///
    /// Lines are split on raw bytes so one line of invalid UTF-8 is skipped
    /// like any other malformed line.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` if reading fails; parse failures are not errors.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, InputError> {
        let mut source = Self::default();
        for (index, bytes) in reader.split(b'\n').enumerate() {
            let mut bytes = bytes?;
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            let parsed = String::from_utf8(bytes)
                .map_err(|_| ParseError::InvalidUtf8 { line: index + 1 })
                .and_then(|line| {
                    if line.trim().is_empty() {
                        Ok(None)
                    } else {
                        Contact::parse_line(&line, index + 1).map(Some)
                    }
                });
            match parsed {
                Ok(Some(contact)) => source.contacts.push(contact),
                Ok(None) => {}
                Err(error) => {
                    warn!(%error, "Skipping malformed contact line");
                    source.skipped.push(error);
                }
            }
        }
        Ok(source)
    }

    /// Source over already-built contacts.
    pub fn from_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            skipped: Vec::new(),
        }
    }

    /// Total parsed contacts.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether no contact parsed.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Lines that failed to parse.
    pub fn skipped(&self) -> &[ParseError] {
        &self.skipped
    }
}

impl ContactSource for JsonlSource {
    fn fetch(&mut self, cursor: Option<PageCursor>, limit: usize) -> Result<Page, InputError> {
        let start = cursor.map_or(0, PageCursor::position).min(self.contacts.len());
        let end = start.saturating_add(limit).min(self.contacts.len());
        let next_cursor = (end < self.contacts.len()).then(|| PageCursor::new(end));
        debug!(start, end, more = next_cursor.is_some(), "Fetched contact page");
        Ok(Page {
            contacts: self.contacts[start..end].to_vec(),
            next_cursor,
        })
    }
}
