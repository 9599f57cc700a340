//! Error types for `slotbook-core`.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::event::EventId;

#[derive(Debug, Error)]
pub enum Error {
  #[error("date {date} is before today ({today})")]
  DateInPast { date: NaiveDate, today: NaiveDate },

  #[error("event not found: {0}")]
  EventNotFound(EventId),

  #[error("reminder {index} not found on event {event_id} ({len} reminders)")]
  ReminderNotFound {
    event_id: EventId,
    index:    usize,
    len:      usize,
  },

  #[error("slot {slot} on {date} is already booked by event {booked_by}")]
  SlotNotAvailable {
    date:      NaiveDate,
    slot:      NaiveTime,
    booked_by: EventId,
  },

  #[error("invalid time range: start {start} must be before end {end}")]
  InvalidTimeRange { start: NaiveTime, end: NaiveTime },

  #[error("unknown reminder kind: {0:?}")]
  InvalidReminderKind(String),

  #[error("configuration error: {0}")]
  Config(#[from] config::ConfigError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
