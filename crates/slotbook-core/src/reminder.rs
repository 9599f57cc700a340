//! A reminder is a timestamped notice attached to an event.
//!
//! A reminder has no identity of its own; it is addressed by its position in
//! the owning event's reminder list.

use std::{fmt, str::FromStr};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::Error;

/// How a reminder is delivered.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
  Display,
  EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReminderKind {
  #[default]
  Email,
  System,
}

impl ReminderKind {
  /// Parse a kind name (`"email"`, `"system"`), ignoring ASCII case.
  pub fn parse(name: &str) -> crate::Result<Self> {
    <Self as FromStr>::from_str(name)
      .map_err(|_| Error::InvalidReminderKind(name.to_owned()))
  }
}

/// A notification that fires at `at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
  pub at:   NaiveDateTime,
  pub kind: ReminderKind,
}

impl Reminder {
  pub fn new(at: NaiveDateTime, kind: ReminderKind) -> Self { Self { at, kind } }
}

impl fmt::Display for Reminder {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "Reminder on {} of type {}", self.at, self.kind)
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;

  fn at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2030, 5, 1)
      .unwrap()
      .and_hms_opt(8, 45, 0)
      .unwrap()
  }

  #[test]
  fn kind_parses_case_insensitively() {
    assert_eq!(ReminderKind::parse("email").unwrap(), ReminderKind::Email);
    assert_eq!(ReminderKind::parse("SYSTEM").unwrap(), ReminderKind::System);
  }

  #[test]
  fn unknown_kind_is_rejected() {
    let err = ReminderKind::parse("pager").unwrap_err();
    assert!(matches!(err, Error::InvalidReminderKind(ref s) if s == "pager"));
  }

  #[test]
  fn default_kind_is_email() {
    assert_eq!(ReminderKind::default(), ReminderKind::Email);
  }

  #[test]
  fn display_names_time_and_kind() {
    let r = Reminder::new(at(), ReminderKind::System);
    assert_eq!(r.to_string(), "Reminder on 2030-05-01 08:45:00 of type system");
  }

  #[test]
  fn serde_uses_lowercase_kind() {
    let json = serde_json::to_value(Reminder::new(at(), ReminderKind::Email))
      .unwrap();
    assert_eq!(json["kind"], "email");
  }
}
