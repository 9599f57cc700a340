//! The fixed slot grid and the validated time range used to book it.
//!
//! Every day is divided into [`SLOTS_PER_DAY`] slots of [`SLOT_MINUTES`]
//! minutes, the first starting at 00:00 and the last at 23:45. A slot is
//! identified by its index or, equivalently, by its start time.

use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const SLOT_MINUTES: u32 = 15;
pub const SLOTS_PER_DAY: usize = (24 * 60 / SLOT_MINUTES) as usize;

/// The start time of slot `index`. Indices past the end of the day wrap.
pub fn slot_time(index: usize) -> NaiveTime {
  let minutes = (index % SLOTS_PER_DAY) as i64 * i64::from(SLOT_MINUTES);
  NaiveTime::default() + Duration::minutes(minutes)
}

/// The index of the slot starting exactly at `time`, if `time` lies on a slot
/// boundary.
pub fn slot_index(time: NaiveTime) -> Option<usize> {
  let on_boundary = time.second() == 0
    && time.nanosecond() == 0
    && time.minute() % SLOT_MINUTES == 0;
  on_boundary
    .then(|| ((time.hour() * 60 + time.minute()) / SLOT_MINUTES) as usize)
}

/// All slot start times of a day, in order.
pub fn slot_times() -> impl Iterator<Item = NaiveTime> {
  (0..SLOTS_PER_DAY).map(slot_time)
}

// ─── TimeRange ───────────────────────────────────────────────────────────────

/// A half-open `[start, end)` span of a day with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimeRange")]
pub struct TimeRange {
  start: NaiveTime,
  end:   NaiveTime,
}

impl TimeRange {
  pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self> {
    if start >= end {
      return Err(Error::InvalidTimeRange { start, end });
    }
    Ok(Self { start, end })
  }

  pub fn start(&self) -> NaiveTime { self.start }

  pub fn end(&self) -> NaiveTime { self.end }

  /// Whether the slot starting at `slot` falls inside this range.
  pub fn covers(&self, slot: NaiveTime) -> bool {
    self.start <= slot && slot < self.end
  }

  /// Indices of every slot whose start time lies in `[start, end)`.
  ///
  /// A range that contains no slot boundary (e.g. 09:05 to 09:10) yields
  /// nothing.
  pub fn slot_indices(&self) -> impl Iterator<Item = usize> + use<> {
    let range = *self;
    (0..SLOTS_PER_DAY).filter(move |&i| range.covers(slot_time(i)))
  }
}

#[derive(Deserialize)]
struct RawTimeRange {
  start: NaiveTime,
  end:   NaiveTime,
}

impl TryFrom<RawTimeRange> for TimeRange {
  type Error = Error;

  fn try_from(raw: RawTimeRange) -> Result<Self> {
    Self::new(raw.start, raw.end)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn t(h: u32, m: u32) -> NaiveTime { NaiveTime::from_hms_opt(h, m, 0).unwrap() }

  #[test]
  fn grid_spans_the_whole_day() {
    let times: Vec<_> = slot_times().collect();
    assert_eq!(times.len(), 96);
    assert_eq!(times[0], t(0, 0));
    assert_eq!(times[1], t(0, 15));
    assert_eq!(times[95], t(23, 45));
  }

  #[test]
  fn slot_index_only_matches_boundaries() {
    assert_eq!(slot_index(t(9, 0)), Some(36));
    assert_eq!(slot_index(t(23, 45)), Some(95));
    assert_eq!(slot_index(t(9, 10)), None);
    assert_eq!(
      slot_index(NaiveTime::from_hms_opt(9, 0, 30).unwrap()),
      None
    );
  }

  #[test]
  fn empty_and_inverted_ranges_are_rejected() {
    assert!(matches!(
      TimeRange::new(t(10, 0), t(10, 0)),
      Err(Error::InvalidTimeRange { .. })
    ));
    assert!(matches!(
      TimeRange::new(t(11, 0), t(10, 0)),
      Err(Error::InvalidTimeRange { .. })
    ));
  }

  #[test]
  fn range_is_half_open() {
    let r = TimeRange::new(t(9, 0), t(10, 0)).unwrap();
    let idx: Vec<_> = r.slot_indices().collect();
    assert_eq!(idx, vec![36, 37, 38, 39]);
    assert!(r.covers(t(9, 45)));
    assert!(!r.covers(t(10, 0)));
  }

  #[test]
  fn unaligned_range_covers_inner_boundaries() {
    let r = TimeRange::new(t(9, 10), t(9, 40)).unwrap();
    let times: Vec<_> = r.slot_indices().map(slot_time).collect();
    assert_eq!(times, vec![t(9, 15), t(9, 30)]);

    let tiny = TimeRange::new(t(9, 5), t(9, 10)).unwrap();
    assert_eq!(tiny.slot_indices().count(), 0);
  }

  #[test]
  fn deserialize_validates_order() {
    let ok: TimeRange =
      serde_json::from_str(r#"{"start":"09:00:00","end":"09:30:00"}"#).unwrap();
    assert_eq!(ok.end(), t(9, 30));

    let bad = serde_json::from_str::<TimeRange>(
      r#"{"start":"10:00:00","end":"09:30:00"}"#,
    );
    assert!(bad.is_err());
  }
}
