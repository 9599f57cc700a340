//! Calendar configuration.
//!
//! Values come from an optional TOML file overlaid with `SLOTBOOK_*`
//! environment variables, e.g. `SLOTBOOK_DEFAULT_REMINDER_KIND=system`.

use std::path::Path;

use serde::Deserialize;

use crate::{Result, reminder::ReminderKind};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
  /// Kind used by [`Calendar::add_default_reminder`](crate::calendar::Calendar::add_default_reminder).
  pub default_reminder_kind: ReminderKind,
  /// Accept events dated before today. Off by default.
  pub allow_past_dates:      bool,
}

impl CalendarConfig {
  /// Load configuration from `path` (which need not exist) and the
  /// environment. Environment variables take precedence.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path.as_ref()).required(false))
      .add_source(config::Environment::with_prefix("SLOTBOOK"))
      .build()?;
    Ok(settings.try_deserialize()?)
  }
}
