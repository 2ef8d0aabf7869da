//! User-facing strings.
//!
//! A [`Translator`] is an explicitly constructed catalog: built-in English
//! defaults, overridden per key from the config file's `[strings]` table.
//! It is passed by reference to whatever renders text; there is no global.

use std::borrow::Cow;
use std::collections::HashMap;

/// Built-in English catalog.
fn default_string(key: &str) -> Option<&'static str> {
    let text = match key {
        "list.empty" => "No contacts found",
        "list.loading" => "Loading…",
        "group.no_status" => "No Status",
        "group.no_gift" => "No Gifts",
        "group.other" => "#",
        "mode.none" => "Ungrouped",
        "mode.status" => "By status",
        "mode.name" => "By name",
        "mode.last_gift" => "By last gift",
        "status_bar.count" => "{count} contacts",
        "status_bar.more" => "{count} contacts, more available",
        "status_bar.skipped" => "{count} lines skipped",
        "status_bar.help" => "j/k scroll  g/G top/bottom  m group  q quit",
        "status.NEVER_CONTACTED" => "Never Contacted",
        "status.ASK_IN_FUTURE" => "Ask in Future",
        "status.CULTIVATE_RELATIONSHIP" => "Cultivate Relationship",
        "status.CONTACT_FOR_APPOINTMENT" => "Contact for Appointment",
        "status.APPOINTMENT_SCHEDULED" => "Appointment Scheduled",
        "status.CALL_FOR_DECISION" => "Call for Decision",
        "status.PARTNER_FINANCIAL" => "Partner - Financial",
        "status.PARTNER_SPECIAL" => "Partner - Special",
        "status.PARTNER_PRAY" => "Partner - Pray",
        "status.NOT_INTERESTED" => "Not Interested",
        "status.UNRESPONSIVE" => "Unresponsive",
        "status.NEVER_ASK" => "Never Ask",
        "status.RESEARCH_ABANDONED" => "Research Abandoned",
        "status.EXPIRED_REFERRAL" => "Expired Referral",
        "status.RESEARCH_CONTACT_INFO" => "Research Contact Info",
        _ => return None,
    };
    Some(text)
}

/// String catalog with per-key overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translator {
    overrides: HashMap<String, String>,
}

impl Translator {
    /// English defaults only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults plus the given overrides.
    pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
        Self { overrides }
    }

    /// Override a single key.
    pub fn set(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.overrides.insert(key.into(), text.into());
    }

    /// Look up `key`. Unknown keys render as the key itself so gaps are
    /// visible rather than blank.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.overrides
            .get(key)
            .map(String::as_str)
            .or_else(|| default_string(key))
            .unwrap_or(key)
    }

    /// Look up `key` and substitute `{name}` placeholders.
    ///
    /// ```
    /// use mpdx_list::i18n::Translator;
    ///
    /// let t = Translator::new();
    /// assert_eq!(t.format("status_bar.count", &[("count", "3")]), "3 contacts");
    /// ```
    pub fn format<'a>(&'a self, key: &'a str, args: &[(&str, &str)]) -> Cow<'a, str> {
        let template = self.t(key);
        if args.is_empty() || !template.contains('{') {
            return Cow::Borrowed(template);
        }
        let mut text = template.to_string();
        for (name, value) in args {
            text = text.replace(&format!("{{{name}}}"), value);
        }
        Cow::Owned(text)
    }
}
