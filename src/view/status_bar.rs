//! Bottom status bar: group mode, counts, key help.

use super::styles::ListStyles;
use crate::i18n::Translator;
use crate::state::StatusInfo;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Left-hand status text, e.g. `By status | 25 contacts, more available`.
pub fn status_text(info: &StatusInfo, translator: &Translator) -> String {
    let count = info.count.to_string();
    let mut parts = vec![
        translator.t(info.mode.label_key()).to_string(),
        translator
            .format(
                if info.more { "status_bar.more" } else { "status_bar.count" },
                &[("count", count.as_str())],
            )
            .into_owned(),
    ];
    if info.loading {
        parts.push(translator.t("list.loading").to_string());
    }
    if info.skipped > 0 {
        let skipped = info.skipped.to_string();
        parts.push(
            translator
                .format("status_bar.skipped", &[("count", skipped.as_str())])
                .into_owned(),
        );
    }
    format!(" {}", parts.join(" | "))
}

/// Render the status bar; the key help is right-aligned when it fits.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    info: &StatusInfo,
    translator: &Translator,
    styles: &ListStyles,
) {
    let style = styles.muted.add_modifier(Modifier::REVERSED);
    let left = status_text(info, translator);
    let help = format!("{} ", translator.t("status_bar.help"));
    let help_fits = left.width() + help.width() + 2 <= area.width as usize;

    frame.render_widget(
        Paragraph::new(Line::from(Span::raw(left))).style(style),
        area,
    );
    if help_fits {
        frame.render_widget(
            Paragraph::new(Line::from(help)).alignment(Alignment::Right),
            area,
        );
    }
}
