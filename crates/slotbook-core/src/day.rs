//! [`Day`]: the slot-booking ledger for one calendar date.
//!
//! A day knows nothing about event contents, only which [`EventId`] holds
//! each slot. Every mutation validates the whole target range before writing
//! a single slot, so a rejected booking leaves the day exactly as it was.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::{
  Error, Result,
  event::EventId,
  slot::{SLOTS_PER_DAY, TimeRange, slot_index, slot_time},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Day {
  date:  NaiveDate,
  /// Exactly [`SLOTS_PER_DAY`] entries; entry `i` is the slot at
  /// [`slot_time(i)`](slot_time).
  slots: Vec<Option<EventId>>,
}

impl Day {
  /// A day with every slot free.
  pub fn new(date: NaiveDate) -> Self {
    Self {
      date,
      slots: vec![None; SLOTS_PER_DAY],
    }
  }

  pub fn date(&self) -> NaiveDate { self.date }

  /// Every slot in order, paired with the event holding it.
  pub fn slots(&self) -> impl Iterator<Item = (NaiveTime, Option<&EventId>)> {
    self
      .slots
      .iter()
      .enumerate()
      .map(|(i, holder)| (slot_time(i), holder.as_ref()))
  }

  /// The event holding the slot that starts at `time`. `None` when the slot
  /// is free or `time` is not a slot boundary.
  pub fn booked_by(&self, time: NaiveTime) -> Option<&EventId> {
    slot_index(time).and_then(|i| self.slots[i].as_ref())
  }

  /// Start times of all free slots, in order.
  pub fn available_slots(&self) -> Vec<NaiveTime> {
    self
      .slots()
      .filter(|(_, holder)| holder.is_none())
      .map(|(time, _)| time)
      .collect()
  }

  /// Start times of the slots held by `event_id`, in order.
  pub fn booked_slots(&self, event_id: &EventId) -> Vec<NaiveTime> {
    self
      .slots()
      .filter(|(_, holder)| *holder == Some(event_id))
      .map(|(time, _)| time)
      .collect()
  }

  pub fn holds(&self, event_id: &EventId) -> bool {
    self.slots.iter().any(|s| s.as_ref() == Some(event_id))
  }

  /// Check that every slot of `range` is free, or held by `owner` when one is
  /// given. Reports the first conflicting slot.
  pub fn check_free(
    &self,
    range: &TimeRange,
    owner: Option<&EventId>,
  ) -> Result<()> {
    for i in range.slot_indices() {
      if let Some(holder) = &self.slots[i]
        && Some(holder) != owner
      {
        return Err(Error::SlotNotAvailable {
          date:      self.date,
          slot:      slot_time(i),
          booked_by: holder.clone(),
        });
      }
    }
    Ok(())
  }

  /// Book every slot of `range` for `event_id`.
  ///
  /// Fails with [`Error::SlotNotAvailable`] if any slot in the range is
  /// already booked, including by `event_id` itself.
  pub fn add_event(&mut self, event_id: &EventId, range: &TimeRange) -> Result<()> {
    self.check_free(range, None)?;
    self.fill(event_id, range);
    Ok(())
  }

  /// Free every slot held by `event_id`.
  pub fn delete_event(&mut self, event_id: &EventId) -> Result<()> {
    if self.release(event_id) == 0 {
      return Err(Error::EventNotFound(event_id.clone()));
    }
    Ok(())
  }

  /// Move the booking of `event_id` to `range`.
  ///
  /// Slots already held by `event_id` count as free. On failure the existing
  /// booking is left untouched.
  pub fn update_event(
    &mut self,
    event_id: &EventId,
    range: &TimeRange,
  ) -> Result<()> {
    self.check_free(range, Some(event_id))?;
    self.release(event_id);
    self.fill(event_id, range);
    Ok(())
  }

  /// Free every slot held by `event_id`, returning how many were freed.
  pub(crate) fn release(&mut self, event_id: &EventId) -> usize {
    let mut freed = 0;
    for slot in &mut self.slots {
      if slot.as_ref() == Some(event_id) {
        *slot = None;
        freed += 1;
      }
    }
    freed
  }

  fn fill(&mut self, event_id: &EventId, range: &TimeRange) {
    for i in range.slot_indices() {
      self.slots[i] = Some(event_id.clone());
    }
  }
}
