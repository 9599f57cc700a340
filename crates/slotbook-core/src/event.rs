//! Event types, the unit of scheduling.
//!
//! An event occupies a [`TimeRange`] on a single date and owns an ordered list
//! of reminders. Events live in the [`Calendar`](crate::calendar::Calendar)
//! registry; a [`Day`](crate::day::Day) only ever sees their [`EventId`].

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
  Error, Result,
  reminder::{Reminder, ReminderKind},
  slot::TimeRange,
};

// ─── Identity ────────────────────────────────────────────────────────────────

/// Opaque, unique identifier of an event.
#[derive(
  Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
  pub fn new(id: impl Into<String>) -> Self { Self(id.into()) }

  pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for EventId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl From<&str> for EventId {
  fn from(id: &str) -> Self { Self::new(id) }
}

/// Source of fresh event ids. Every id returned must be distinct from every
/// id previously returned by the same generator.
pub trait IdGenerator {
  fn next_id(&mut self) -> EventId;
}

/// Random v4 UUIDs rendered as hyphenated strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
  fn next_id(&mut self) -> EventId { EventId(Uuid::new_v4().to_string()) }
}

/// Deterministic ids of the form `<prefix>-1`, `<prefix>-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIds {
  prefix: String,
  next:   u64,
}

impl SequentialIds {
  pub fn new(prefix: impl Into<String>) -> Self {
    Self {
      prefix: prefix.into(),
      next:   1,
    }
  }
}

impl Default for SequentialIds {
  fn default() -> Self { Self::new("evt") }
}

impl IdGenerator for SequentialIds {
  fn next_id(&mut self) -> EventId {
    let id = EventId(format!("{}-{}", self.prefix, self.next));
    self.next += 1;
    id
  }
}

// ─── EventDetails ────────────────────────────────────────────────────────────

/// Caller-supplied fields of an event, used to create or update one.
/// The id and reminders are managed by the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetails {
  pub title:       String,
  pub description: String,
  pub date:        NaiveDate,
  pub start:       NaiveTime,
  pub end:         NaiveTime,
}

impl EventDetails {
  /// Convenience constructor with an empty description.
  pub fn new(
    title: impl Into<String>,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
  ) -> Self {
    Self {
      title: title.into(),
      description: String::new(),
      date,
      start,
      end,
    }
  }

  pub fn with_description(mut self, description: impl Into<String>) -> Self {
    self.description = description.into();
    self
  }

  /// The validated time range of these details.
  pub fn range(&self) -> Result<TimeRange> { TimeRange::new(self.start, self.end) }
}

// ─── Event ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
  id:          EventId,
  title:       String,
  description: String,
  date:        NaiveDate,
  range:       TimeRange,
  reminders:   Vec<Reminder>,
}

impl Event {
  /// Build an event with no reminders. Fails if `details` has `start >= end`.
  pub fn new(id: EventId, details: EventDetails) -> Result<Self> {
    let range = details.range()?;
    Ok(Self::from_parts(id, details, range, Vec::new()))
  }

  pub(crate) fn from_parts(
    id: EventId,
    details: EventDetails,
    range: TimeRange,
    reminders: Vec<Reminder>,
  ) -> Self {
    Self {
      id,
      title: details.title,
      description: details.description,
      date: details.date,
      range,
      reminders,
    }
  }

  pub fn id(&self) -> &EventId { &self.id }

  pub fn title(&self) -> &str { &self.title }

  pub fn description(&self) -> &str { &self.description }

  pub fn date(&self) -> NaiveDate { self.date }

  pub fn start(&self) -> NaiveTime { self.range.start() }

  pub fn end(&self) -> NaiveTime { self.range.end() }

  pub fn range(&self) -> TimeRange { self.range }

  pub fn reminders(&self) -> &[Reminder] { &self.reminders }

  /// Overwrite title, description and time range, keeping id, date and
  /// reminders.
  pub(crate) fn apply(&mut self, details: EventDetails, range: TimeRange) {
    self.title = details.title;
    self.description = details.description;
    self.range = range;
  }

  /// Append a reminder. No ordering or duplicate checks are made.
  pub fn add_reminder(&mut self, at: NaiveDateTime, kind: ReminderKind) {
    self.reminders.push(Reminder::new(at, kind));
  }

  /// Remove and return the reminder at `index`; later reminders shift down.
  pub fn delete_reminder(&mut self, index: usize) -> Result<Reminder> {
    if index >= self.reminders.len() {
      return Err(Error::ReminderNotFound {
        event_id: self.id.clone(),
        index,
        len: self.reminders.len(),
      });
    }
    Ok(self.reminders.remove(index))
  }
}

impl fmt::Display for Event {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "ID: {}", self.id)?;
    writeln!(f, "Event title: {}", self.title)?;
    writeln!(f, "Description: {}", self.description)?;
    write!(f, "Time: {} - {}", self.start(), self.end())
  }
}
