//! Contact records as loaded from JSONL.

use super::error::ParseError;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;

/// Unique identifier for a contact.
///
/// Validated non-empty at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactId(String);

impl ContactId {
    /// Smart constructor: rejects empty and whitespace-only ids.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidContactId> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InvalidContactId::Empty);
        }
        Ok(Self(raw))
    }

    /// Borrow the id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rejected contact id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidContactId {
    /// Empty or whitespace-only.
    #[error("Contact ID cannot be empty")]
    Empty,
}

/// Where a contact sits in the partnership pipeline.
///
/// Declaration order is pipeline order; [`PartnerStatus::rank`] exposes it
/// for sorting groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartnerStatus {
    /// Not yet reached out to.
    NeverContacted,
    /// Postponed ask.
    AskInFuture,
    /// Building the relationship before an ask.
    CultivateRelationship,
    /// Needs an appointment booked.
    ContactForAppointment,
    /// Appointment booked.
    AppointmentScheduled,
    /// Follow up on a pending decision.
    CallForDecision,
    /// Gives financially.
    PartnerFinancial,
    /// Gives special (one-off) gifts.
    PartnerSpecial,
    /// Prayer partner.
    PartnerPray,
    /// Declined.
    NotInterested,
    /// No response to outreach.
    Unresponsive,
    /// Do not ask.
    NeverAsk,
    /// Research dropped.
    ResearchAbandoned,
    /// Referral went stale.
    ExpiredReferral,
    /// Contact details need research.
    ResearchContactInfo,
}

impl PartnerStatus {
    /// Every status, in pipeline order.
    pub const ALL: [PartnerStatus; 15] = [
        PartnerStatus::NeverContacted,
        PartnerStatus::AskInFuture,
        PartnerStatus::CultivateRelationship,
        PartnerStatus::ContactForAppointment,
        PartnerStatus::AppointmentScheduled,
        PartnerStatus::CallForDecision,
        PartnerStatus::PartnerFinancial,
        PartnerStatus::PartnerSpecial,
        PartnerStatus::PartnerPray,
        PartnerStatus::NotInterested,
        PartnerStatus::Unresponsive,
        PartnerStatus::NeverAsk,
        PartnerStatus::ResearchAbandoned,
        PartnerStatus::ExpiredReferral,
        PartnerStatus::ResearchContactInfo,
    ];

    /// Position in the pipeline (0-based).
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Wire name, also used as the translation key suffix.
    pub fn code(self) -> &'static str {
        match self {
            PartnerStatus::NeverContacted => "NEVER_CONTACTED",
            PartnerStatus::AskInFuture => "ASK_IN_FUTURE",
            PartnerStatus::CultivateRelationship => "CULTIVATE_RELATIONSHIP",
            PartnerStatus::ContactForAppointment => "CONTACT_FOR_APPOINTMENT",
            PartnerStatus::AppointmentScheduled => "APPOINTMENT_SCHEDULED",
            PartnerStatus::CallForDecision => "CALL_FOR_DECISION",
            PartnerStatus::PartnerFinancial => "PARTNER_FINANCIAL",
            PartnerStatus::PartnerSpecial => "PARTNER_SPECIAL",
            PartnerStatus::PartnerPray => "PARTNER_PRAY",
            PartnerStatus::NotInterested => "NOT_INTERESTED",
            PartnerStatus::Unresponsive => "UNRESPONSIVE",
            PartnerStatus::NeverAsk => "NEVER_ASK",
            PartnerStatus::ResearchAbandoned => "RESEARCH_ABANDONED",
            PartnerStatus::ExpiredReferral => "EXPIRED_REFERRAL",
            PartnerStatus::ResearchContactInfo => "RESEARCH_CONTACT_INFO",
        }
    }
}

/// Raw JSONL line shape.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawContact {
    id: String,
    name: String,
    #[serde(default)]
    status: Option<PartnerStatus>,
    #[serde(default)]
    pledge_amount: Option<f64>,
    #[serde(default)]
    pledge_currency: Option<String>,
    #[serde(default)]
    last_donation: Option<NaiveDate>,
}

/// A contact in the list.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    /// Stable id.
    pub id: ContactId,
    /// Display name.
    pub name: String,
    /// Pipeline status, if set.
    pub status: Option<PartnerStatus>,
    /// Committed amount per gift.
    pub pledge_amount: Option<f64>,
    /// ISO currency code for the pledge.
    pub pledge_currency: Option<String>,
    /// Date of the most recent gift.
    pub last_donation: Option<NaiveDate>,
}

impl Contact {
    /// Contact with only the required fields.
    pub fn new(id: ContactId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            status: None,
            pledge_amount: None,
            pledge_currency: None,
            last_donation: None,
        }
    }

    /// Builder: status.
    pub fn with_status(mut self, status: PartnerStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Builder: pledge amount and currency.
    pub fn with_pledge(mut self, amount: f64, currency: impl Into<String>) -> Self {
        self.pledge_amount = Some(amount);
        self.pledge_currency = Some(currency.into());
        self
    }

    /// Builder: last gift date.
    pub fn with_last_donation(mut self, date: NaiveDate) -> Self {
        self.last_donation = Some(date);
        self
    }

    /// Parse one JSONL line. `line` is 1-based and only used for errors.
    pub fn parse_line(raw: &str, line: usize) -> Result<Self, ParseError> {
        let parsed: RawContact =
            serde_json::from_str(raw).map_err(|e| ParseError::InvalidJson {
                line,
                message: e.to_string(),
            })?;
        let id = ContactId::new(parsed.id)
            .map_err(|_| ParseError::EmptyField { line, field: "id" })?;
        if parsed.name.trim().is_empty() {
            return Err(ParseError::EmptyField { line, field: "name" });
        }
        Ok(Self {
            id,
            name: parsed.name,
            status: parsed.status,
            pledge_amount: parsed.pledge_amount,
            pledge_currency: parsed.pledge_currency,
            last_donation: parsed.last_donation,
        })
    }

    /// Pledge formatted for display, e.g. `50.00 USD`.
    pub fn pledge_display(&self) -> Option<String> {
        let amount = self.pledge_amount?;
        Some(match &self.pledge_currency {
            Some(currency) => format!("{amount:.2} {currency}"),
            None => format!("{amount:.2}"),
        })
    }
}
