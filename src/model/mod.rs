//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod contact;
pub mod error;
pub mod group_mode;
pub mod key_action;

pub use contact::{Contact, ContactId, InvalidContactId, PartnerStatus};
pub use group_mode::{GroupMode, InvalidGroupMode};
pub use key_action::KeyAction;
