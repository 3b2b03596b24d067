//! The skeleton catalog: a fixed mapping from mnemonic names to ICU
//! skeleton tokens.
//!
//! Every mnemonic the library exposes lives in one table,
//! [`for_each_mnemonic`]. The table generates the [`Mnemonic`] enum, its
//! token map, and the per-mnemonic method surfaces on the builders
//! ([`crate::Formatter`], [`crate::LocaleFormat`], [`crate::fmt`]), so the
//! three surfaces cannot drift apart.
//!
//! Lookup is total: every enum variant has a token by construction, and no
//! validation happens here. Whether a token (or a combination of chained
//! tokens) can actually be rendered is decided by the ICU engine at format
//! time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// X-macro listing every mnemonic as `Variant, method_name => "token",
/// "description";`.
///
/// Invoke with the name of a macro that accepts the whole table.
macro_rules! for_each_mnemonic {
    ($mac:ident) => {
        $mac! {
            Year, year => "y", "numeric year";
            YearMonth, year_month => "yM", "year and numeric month";
            YearMonthDay, year_month_day => "yMd", "year, numeric month, and day";
            YearMonthWeekdayDay, year_month_weekday_day => "yMEd", "year, numeric month, day, and abbreviated weekday";
            YearAbbrMonth, year_abbr_month => "yMMM", "year and abbreviated month";
            YearAbbrMonthDay, year_abbr_month_day => "yMMMd", "year, abbreviated month, and day";
            YearAbbrMonthWeekdayDay, year_abbr_month_weekday_day => "yMMMEd", "year, abbreviated month, day, and abbreviated weekday";
            YearFullMonth, year_full_month => "yMMMM", "year and full month name";
            Month, month => "M", "numeric month";
            AbbrMonth, abbr_month => "MMM", "abbreviated month name";
            FullMonth, full_month => "MMMM", "full month name";
            MonthDay, month_day => "Md", "numeric month and day";
            MonthWeekdayDay, month_weekday_day => "MEd", "numeric month, day, and abbreviated weekday";
            AbbrMonthDay, abbr_month_day => "MMMd", "abbreviated month and day";
            AbbrMonthWeekdayDay, abbr_month_weekday_day => "MMMEd", "abbreviated month, day, and abbreviated weekday";
            Day, day => "d", "day of month";
            AbbrWeekday, abbr_weekday => "E", "abbreviated weekday name";
            FullWeekday, full_weekday => "EEEE", "full weekday name";
            Hour24, hour24 => "H", "hour, 24-hour clock";
            Hour24Minute, hour24_minute => "Hm", "hour and minute, 24-hour clock";
            Hour24MinuteSecond, hour24_minute_second => "Hms", "hour, minute, and second, 24-hour clock";
            Hour12, hour12 => "h", "hour, 12-hour clock";
            Hour12Minute, hour12_minute => "hm", "hour and minute, 12-hour clock";
            Hour12MinuteSecond, hour12_minute_second => "hms", "hour, minute, and second, 12-hour clock";
            Hour, hour => "j", "hour, locale-preferred clock";
            HourMinute, hour_minute => "jm", "hour and minute, locale-preferred clock";
            HourMinuteSecond, hour_minute_second => "jms", "hour, minute, and second, locale-preferred clock";
            Minute, minute => "m", "minute";
            MinuteSecond, minute_second => "ms", "minute and second";
            Second, second => "s", "second";
            Zone, zone => "z", "timezone, specific short name";
            ZoneLong, zone_long => "zzzz", "timezone, specific long name";
            ZoneGeneric, zone_generic => "v", "timezone, generic short name";
            ZoneGenericLong, zone_generic_long => "vvvv", "timezone, generic long name";
            WeekOfYear, week_of_year => "w", "week of year";
            WeekOfMonth, week_of_month => "W", "week of month";
            Quarter, quarter => "Q", "numeric quarter";
            AbbrQuarter, abbr_quarter => "QQQ", "abbreviated quarter";
            FullQuarter, full_quarter => "QQQQ", "full quarter";
            Era, era => "G", "abbreviated era";
            FullEra, full_era => "GGGG", "full era";
            WeekYear, week_year => "Y", "week-based (ISO) year";
        }
    };
}
pub(crate) use for_each_mnemonic;

macro_rules! define_mnemonics {
    ($( $variant:ident, $method:ident => $token:literal, $desc:literal; )+) => {
        /// A mnemonic name for one ICU skeleton token.
        ///
        /// Serializes as its token string (`"yMMMd"`), and parses back from
        /// it via [`FromStr`].
        #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
        pub enum Mnemonic {
            $(
                #[doc = concat!("`", $token, "` — ", $desc, ".")]
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl Mnemonic {
            /// Every mnemonic in the catalog, in table order.
            pub const ALL: &'static [Mnemonic] = &[$(Mnemonic::$variant),+];

            /// The ICU skeleton token for this mnemonic.
            pub fn token(self) -> &'static str {
                match self {
                    $(Mnemonic::$variant => $token,)+
                }
            }

            /// A short human-readable description of the fields the token
            /// requests.
            pub fn description(self) -> &'static str {
                match self {
                    $(Mnemonic::$variant => $desc,)+
                }
            }
        }

        impl FromStr for Mnemonic {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok(Mnemonic::$variant),)+
                    _ => Err(format!("Unknown mnemonic: {s}")),
                }
            }
        }
    };
}
for_each_mnemonic!(define_mnemonics);

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
