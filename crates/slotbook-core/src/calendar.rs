//! [`Calendar`], the aggregate root owning every event and day.
//!
//! The calendar validates requests, asks the relevant [`Day`] to reserve or
//! release slots, and only then touches its event registry. A failed call
//! leaves both the registry and every day unchanged.

use std::collections::{BTreeMap, btree_map::Entry};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::{
  Error, Result,
  clock::{Clock, SystemClock},
  config::CalendarConfig,
  day::Day,
  event::{Event, EventDetails, EventId, IdGenerator, UuidGenerator},
  reminder::{Reminder, ReminderKind},
  slot::slot_times,
};

/// In-memory calendar.
///
/// The clock and id generator are injected so that hosts (and tests) control
/// what "today" is and how ids are minted.
#[derive(Debug)]
pub struct Calendar<C = SystemClock, G = UuidGenerator> {
  events: BTreeMap<EventId, Event>,
  days:   BTreeMap<NaiveDate, Day>,
  clock:  C,
  ids:    G,
  config: CalendarConfig,
}

impl Calendar {
  /// A calendar using the system clock, random UUID ids and default config.
  pub fn new() -> Self {
    Self::with_parts(SystemClock, UuidGenerator, CalendarConfig::default())
  }
}

impl Default for Calendar {
  fn default() -> Self { Self::new() }
}

impl<C: Clock, G: IdGenerator> Calendar<C, G> {
  pub fn with_parts(clock: C, ids: G, config: CalendarConfig) -> Self {
    Self {
      events: BTreeMap::new(),
      days: BTreeMap::new(),
      clock,
      ids,
      config,
    }
  }

  pub fn config(&self) -> &CalendarConfig { &self.config }

  // ── Reads ───────────────────────────────────────────────────────────────

  pub fn event(&self, event_id: &EventId) -> Result<&Event> {
    self
      .events
      .get(event_id)
      .ok_or_else(|| Error::EventNotFound(event_id.clone()))
  }

  /// All events, ordered by id.
  pub fn events(&self) -> impl Iterator<Item = &Event> { self.events.values() }

  pub fn len(&self) -> usize { self.events.len() }

  pub fn is_empty(&self) -> bool { self.events.is_empty() }

  /// The slot ledger for `date`, if anything was ever scheduled there.
  pub fn day(&self, date: NaiveDate) -> Option<&Day> { self.days.get(&date) }

  /// Start times of every free slot on `date`. Never creates a [`Day`].
  pub fn find_available_slots(&self, date: NaiveDate) -> Vec<NaiveTime> {
    match self.days.get(&date) {
      Some(day) => day.available_slots(),
      None => slot_times().collect(),
    }
  }

  /// Events dated within `[start_date, end_date]`, grouped by date in
  /// chronological order. Within a date, events are ordered by start time,
  /// then end time, then id.
  pub fn find_events(
    &self,
    start_date: NaiveDate,
    end_date: NaiveDate,
  ) -> BTreeMap<NaiveDate, Vec<&Event>> {
    let mut found: BTreeMap<NaiveDate, Vec<&Event>> = BTreeMap::new();
    for event in self.events.values() {
      if (start_date..=end_date).contains(&event.date()) {
        found.entry(event.date()).or_default().push(event);
      }
    }
    for group in found.values_mut() {
      group.sort_by(|a, b| {
        (a.start(), a.end(), a.id()).cmp(&(b.start(), b.end(), b.id()))
      });
    }
    found
  }

  pub fn list_reminders(&self, event_id: &EventId) -> Result<&[Reminder]> {
    Ok(self.event(event_id)?.reminders())
  }

  // ── Events ──────────────────────────────────────────────────────────────

  /// Schedule a new event and return its freshly generated id.
  pub fn add_event(&mut self, details: EventDetails) -> Result<EventId> {
    let range = details.range()?;
    self.ensure_not_past(details.date)?;

    let event_id = self.ids.next_id();
    self
      .day_mut(details.date)
      .add_event(&event_id, &range)
      .inspect_err(|e| {
        tracing::warn!("rejected new event {:?}: {e}", details.title);
      })?;

    tracing::info!(
      "scheduled event {event_id} on {} from {} to {}",
      details.date,
      range.start(),
      range.end()
    );
    let event = Event::from_parts(event_id.clone(), details, range, Vec::new());
    self.events.insert(event_id.clone(), event);
    Ok(event_id)
  }

  /// Replace the details of an existing event, keeping its id.
  ///
  /// Within the same day the booking is moved and reminders are kept. A
  /// change of date releases the event from its old day and books a fresh
  /// replacement, without reminders, on the new one. The new date is not
  /// checked against today.
  pub fn update_event(
    &mut self,
    event_id: &EventId,
    details: EventDetails,
  ) -> Result<()> {
    let range = details.range()?;
    let old_date = self.event(event_id)?.date();

    if old_date == details.date {
      self
        .day_mut(old_date)
        .update_event(event_id, &range)
        .inspect_err(|e| tracing::warn!("rejected update of {event_id}: {e}"))?;
      self.event_mut(event_id)?.apply(details, range);
      tracing::info!(
        "moved event {event_id} to {} - {} on {old_date}",
        range.start(),
        range.end()
      );
      return Ok(());
    }

    if let Some(day) = self.days.get(&details.date) {
      day
        .check_free(&range, None)
        .inspect_err(|e| tracing::warn!("rejected update of {event_id}: {e}"))?;
    }

    self.events.remove(event_id);
    if let Some(day) = self.days.get_mut(&old_date) {
      day.release(event_id);
    }

    let new_date = details.date;
    self.day_mut(new_date).add_event(event_id, &range)?;
    let event = Event::from_parts(event_id.clone(), details, range, Vec::new());
    self.events.insert(event_id.clone(), event);

    tracing::info!("moved event {event_id} from {old_date} to {new_date}");
    Ok(())
  }

  /// Remove an event and free its slots.
  pub fn delete_event(&mut self, event_id: &EventId) -> Result<Event> {
    let event = self
      .events
      .remove(event_id)
      .ok_or_else(|| Error::EventNotFound(event_id.clone()))?;
    if let Some(day) = self.days.get_mut(&event.date()) {
      day.release(event_id);
    }
    tracing::info!("deleted event {event_id} on {}", event.date());
    Ok(event)
  }

  // ── Reminders ───────────────────────────────────────────────────────────

  pub fn add_reminder(
    &mut self,
    event_id: &EventId,
    at: NaiveDateTime,
    kind: ReminderKind,
  ) -> Result<()> {
    self.event_mut(event_id)?.add_reminder(at, kind);
    tracing::debug!("added {kind} reminder at {at} to event {event_id}");
    Ok(())
  }

  /// Add a reminder of the configured default kind.
  pub fn add_default_reminder(
    &mut self,
    event_id: &EventId,
    at: NaiveDateTime,
  ) -> Result<()> {
    let kind = self.config.default_reminder_kind;
    self.add_reminder(event_id, at, kind)
  }

  pub fn delete_reminder(
    &mut self,
    event_id: &EventId,
    index: usize,
  ) -> Result<Reminder> {
    let removed = self.event_mut(event_id)?.delete_reminder(index)?;
    tracing::debug!("deleted reminder {index} from event {event_id}");
    Ok(removed)
  }

  // ── Helpers ─────────────────────────────────────────────────────────────

  fn event_mut(&mut self, event_id: &EventId) -> Result<&mut Event> {
    self
      .events
      .get_mut(event_id)
      .ok_or_else(|| Error::EventNotFound(event_id.clone()))
  }

  fn ensure_not_past(&self, date: NaiveDate) -> Result<()> {
    if self.config.allow_past_dates {
      return Ok(());
    }
    let today = self.clock.today();
    if date < today {
      return Err(Error::DateInPast { date, today });
    }
    Ok(())
  }

  /// The day for `date`, created on first use.
  fn day_mut(&mut self, date: NaiveDate) -> &mut Day {
    match self.days.entry(date) {
      Entry::Occupied(entry) => entry.into_mut(),
      Entry::Vacant(entry) => {
        tracing::debug!("creating day {date}");
        entry.insert(Day::new(date))
      }
    }
  }
}
