//! Contact row content for the infinite list.
//!
//! One line per contact: name, status, pledge, last gift. Columns are
//! dropped from the right as the terminal narrows, and text is truncated by
//! display width so wide characters never overflow their column.

use super::styles::ListStyles;
use crate::i18n::Translator;
use crate::model::Contact;
use ratatui::text::{Line, Span, Text};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const STATUS_WIDTH: usize = 24;
const PLEDGE_WIDTH: usize = 14;
const GIFT_WIDTH: usize = 10;
const MIN_NAME_WIDTH: usize = 12;
const MISSING: &str = "-";

/// Read-only context shared by every row.
#[derive(Debug, Clone, Copy)]
pub struct RowContext<'a> {
    /// Source of the status labels.
    pub translator: &'a Translator,
    /// Column styles.
    pub styles: ListStyles,
    /// Width available to the row.
    pub width: u16,
}

/// Columns that fit in a given width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    name: usize,
    status: bool,
    details: bool,
}

impl Columns {
    fn fit(width: usize) -> Self {
        // 1 leading space, 1 gap before each extra column
        let full = 1 + STATUS_WIDTH + PLEDGE_WIDTH + GIFT_WIDTH + 3;
        let status_only = 1 + STATUS_WIDTH + 1;
        if width >= full + MIN_NAME_WIDTH {
            Self { name: width - full, status: true, details: true }
        } else if width >= status_only + MIN_NAME_WIDTH {
            Self { name: width - status_only, status: true, details: false }
        } else {
            Self { name: width.saturating_sub(1), status: false, details: false }
        }
    }
}

/// Render one contact. Without a context, only the name is shown.
pub fn contact_text(contact: &Contact, context: Option<&RowContext<'_>>) -> Text<'static> {
    let Some(context) = context else {
        return Text::from(format!(" {}", contact.name));
    };
    let styles = &context.styles;
    let columns = Columns::fit(context.width as usize);

    let mut spans = vec![Span::styled(
        format!(" {}", fit(&contact.name, columns.name)),
        styles.item,
    )];

    if columns.status {
        let label = match contact.status {
            Some(status) => context.translator.t(&format!("status.{}", status.code())).to_string(),
            None => MISSING.to_string(),
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            fit(&label, STATUS_WIDTH),
            styles.status(contact.status),
        ));
    }

    if columns.details {
        let pledge = contact.pledge_display().unwrap_or_else(|| MISSING.to_string());
        let gift = contact
            .last_donation
            .map_or_else(|| MISSING.to_string(), |date| date.format("%Y-%m-%d").to_string());
        spans.push(Span::raw(" "));
        spans.push(Span::styled(fit_right(&pledge, PLEDGE_WIDTH), styles.muted));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(fit(&gift, GIFT_WIDTH), styles.muted));
    }

    Text::from(Line::from(spans))
}

/// Truncate to `width` display columns, marking the cut with `…`.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Truncate, then pad with spaces to exactly `width` columns.
fn fit(text: &str, width: usize) -> String {
    let mut out = truncate(text, width);
    let pad = width.saturating_sub(out.width());
    out.extend(std::iter::repeat(' ').take(pad));
    out
}

fn fit_right(text: &str, width: usize) -> String {
    let out = truncate(text, width);
    let pad = width.saturating_sub(out.width());
    format!("{}{}", " ".repeat(pad), out)
}
