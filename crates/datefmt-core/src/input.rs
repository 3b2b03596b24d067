//! Point-in-time input representations accepted by the render call.

use std::time::SystemTime;

use jiff::civil;
use jiff::tz::TimeZone;
use jiff::{Timestamp, Zoned};

use crate::error::{FormatError, Result};

/// A point in time, in one of the three accepted representations.
///
/// All three normalize to the same absolute instant before formatting:
/// a [`civil::DateTime`] is interpreted in the system's current default
/// timezone, and a legacy [`SystemTime`] is converted to a timestamp.
/// Formatting the same wall-clock moment through any representation yields
/// identical output while the system timezone is held constant.
///
/// Values convert implicitly via `From`, so render calls can take the
/// concrete types directly:
///
/// ```rust
/// use datefmt_core::{fmt, locale, DateTimeValue};
/// use jiff::civil;
///
/// let value: DateTimeValue = civil::date(2025, 7, 30).at(15, 30, 45, 0).into();
/// let formatted = fmt::year_abbr_month_day(locale!("en-US")).format(value);
/// assert_eq!(formatted.unwrap(), "Jul 30, 2025");
/// ```
#[derive(Debug, Clone, Copy)]
pub enum DateTimeValue {
    /// An absolute instant.
    Instant(Timestamp),
    /// A timezone-free calendar date-time, interpreted in the system's
    /// current default timezone.
    Civil(civil::DateTime),
    /// The platform legacy date type.
    System(SystemTime),
}

impl DateTimeValue {
    /// Normalizes the value into a zoned datetime in the system default
    /// timezone.
    pub(crate) fn to_zoned(self) -> Result<Zoned> {
        let tz = TimeZone::system();
        match self {
            DateTimeValue::Instant(timestamp) => Ok(timestamp.to_zoned(tz)),
            DateTimeValue::Civil(datetime) => {
                datetime.to_zoned(tz).map_err(FormatError::out_of_range)
            }
            DateTimeValue::System(system_time) => {
                let timestamp =
                    Timestamp::try_from(system_time).map_err(FormatError::out_of_range)?;
                Ok(timestamp.to_zoned(tz))
            }
        }
    }
}

impl From<Timestamp> for DateTimeValue {
    fn from(timestamp: Timestamp) -> Self {
        DateTimeValue::Instant(timestamp)
    }
}

impl From<civil::DateTime> for DateTimeValue {
    fn from(datetime: civil::DateTime) -> Self {
        DateTimeValue::Civil(datetime)
    }
}

impl From<SystemTime> for DateTimeValue {
    fn from(system_time: SystemTime) -> Self {
        DateTimeValue::System(system_time)
    }
}
