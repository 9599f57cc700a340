//! Core types and scheduling logic for the slotbook calendar.
//!
//! Events are booked onto a fixed grid of 15-minute slots per day. The
//! [`Calendar`] owns every event and day and refuses any booking that would
//! double-book a slot.
//!
//! ```
//! use chrono::{Duration, Local, NaiveTime};
//! use slotbook_core::{Calendar, EventDetails};
//!
//! let mut calendar = Calendar::new();
//! let date = Local::now().date_naive() + Duration::days(1);
//! let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
//! let quarter_past = NaiveTime::from_hms_opt(9, 15, 0).unwrap();
//!
//! let id = calendar
//!   .add_event(EventDetails::new("Standup", date, nine, quarter_past))
//!   .unwrap();
//! assert!(!calendar.find_available_slots(date).contains(&nine));
//!
//! calendar.delete_event(&id).unwrap();
//! assert!(calendar.find_available_slots(date).contains(&nine));
//! ```

pub mod calendar;
pub mod clock;
pub mod config;
pub mod day;
pub mod error;
pub mod event;
pub mod reminder;
pub mod slot;

pub use calendar::Calendar;
pub use config::CalendarConfig;
pub use error::{Error, Result};
pub use event::{Event, EventDetails, EventId};
pub use reminder::{Reminder, ReminderKind};
