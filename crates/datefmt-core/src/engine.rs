//! Skeleton resolution against the ICU pattern engine.
//!
//! ICU4X replaced string skeletons with typed "semantic" field sets. This
//! module adapts between the two: it scans an accumulated skeleton string
//! into field requests and hands them to the engine's [`FieldSetBuilder`],
//! which performs the locale-aware pattern generation. Skeletons are
//! order-independent sets, so scan order does not matter and whitespace
//! between chained tokens is ignored.
//!
//! Anything the engine cannot express (quarters, week numbers, week-based
//! years, hour-less minute/second fields, date subsets like year+day)
//! surfaces as [`FormatError::UnsupportedSkeleton`]: the acceptance
//! boundary is the engine's, not ours.

use icu::calendar::Iso;
use icu::datetime::fieldsets::builder::{DateFields, FieldSetBuilder, ZoneStyle};
use icu::datetime::fieldsets::enums::CompositeFieldSet;
use icu::datetime::options::{Length, TimePrecision, YearStyle};
use icu::datetime::{DateTimeFormatter, DateTimeFormatterPreferences};
use icu::locale::preferences::extensions::unicode::keywords::HourCycle;
use icu::locale::Locale;
use icu::time::zone::IanaParser;
use icu::time::ZonedDateTime;
use jiff::Zoned;

use crate::error::{FormatError, Result};

/// A skeleton resolved into the engine's validated field set and
/// formatter preferences, ready to render.
///
/// The engine's `DateTimeFormatter` holds thread-local data handles and
/// is not `Send`; only the validated request is kept so formatters stay
/// shareable across threads, and the engine formatter is rebuilt from it
/// per render.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResolvedPattern {
    field_set: CompositeFieldSet,
    preferences: DateTimeFormatterPreferences,
}

impl ResolvedPattern {
    /// Resolves an accumulated skeleton for a locale.
    ///
    /// Fails with [`FormatError::UnsupportedSkeleton`] when the skeleton
    /// contains fields or field combinations the engine cannot turn into a
    /// pattern.
    pub(crate) fn resolve(skeleton: &str, locale: &Locale) -> Result<Self> {
        let request = FieldRequest::scan(skeleton, locale)?;

        let mut preferences = DateTimeFormatterPreferences::from(locale);
        if let Some(hour_cycle) = request.hour_cycle {
            preferences.hour_cycle = Some(hour_cycle);
        }

        let field_set = request.into_field_set(skeleton, locale)?;

        // Validate against the engine's data up front so resolution
        // failures are memoized exactly like successes.
        DateTimeFormatter::try_new(preferences, field_set)
            .map_err(|_| FormatError::unsupported(skeleton, locale))?;

        Ok(Self {
            field_set,
            preferences,
        })
    }

    /// Renders a zoned datetime through the resolved pattern.
    pub(crate) fn render(&self, zoned: &Zoned, skeleton: &str, locale: &Locale) -> Result<String> {
        let formatter = DateTimeFormatter::try_new(self.preferences, self.field_set)
            .map_err(|_| FormatError::unsupported(skeleton, locale))?;

        // jiff and icu both speak RFC 9557; the text form carries the civil
        // fields, offset, and zone annotation the engine needs for every
        // zone style.
        let zoned_datetime =
            ZonedDateTime::try_strict_from_str(&zoned.to_string(), Iso, IanaParser::new())
                .map_err(FormatError::conversion)?;
        Ok(formatter.format(&zoned_datetime).to_string())
    }
}

/// The set of fields requested by a skeleton, accumulated by scanning
/// letter runs.
#[derive(Debug, Default)]
struct FieldRequest {
    year: bool,
    era: bool,
    month: Option<usize>,
    day: bool,
    weekday: Option<usize>,
    hour: bool,
    hour_cycle: Option<HourCycle>,
    minute: bool,
    second: bool,
    zone: Option<ZoneStyle>,
}

impl FieldRequest {
    /// Scans a skeleton string into field requests.
    ///
    /// Repeated or conflicting runs are not rejected here, matching the
    /// pass-through contract for chained tokens: width-carrying fields
    /// merge to the widest run, and for the hour cycle the last token
    /// wins.
    fn scan(skeleton: &str, locale: &Locale) -> Result<Self> {
        let mut request = FieldRequest::default();
        let mut chars = skeleton.chars().peekable();
        while let Some(ch) = chars.next() {
            let mut run = 1;
            while chars.peek() == Some(&ch) {
                chars.next();
                run += 1;
            }
            match ch {
                'y' | 'u' => request.year = true,
                'G' => request.era = true,
                'M' | 'L' => request.month = Some(request.month.unwrap_or(0).max(run)),
                'd' => request.day = true,
                'E' | 'e' | 'c' => request.weekday = Some(request.weekday.unwrap_or(0).max(run)),
                'j' => request.hour = true,
                'H' | 'k' => {
                    request.hour = true;
                    request.hour_cycle = Some(HourCycle::H23);
                }
                'h' | 'K' => {
                    request.hour = true;
                    request.hour_cycle = Some(HourCycle::H12);
                }
                'm' => request.minute = true,
                's' => request.second = true,
                'z' => {
                    request.zone = Some(if run >= 4 {
                        ZoneStyle::SpecificLong
                    } else {
                        ZoneStyle::SpecificShort
                    });
                }
                'v' => {
                    request.zone = Some(if run >= 4 {
                        ZoneStyle::GenericLong
                    } else {
                        ZoneStyle::GenericShort
                    });
                }
                c if c.is_whitespace() => {}
                _ => return Err(FormatError::unsupported(skeleton, locale)),
            }
        }
        Ok(request)
    }

    /// Translates the requested fields into the engine's composite field
    /// set.
    fn into_field_set(self, skeleton: &str, locale: &Locale) -> Result<CompositeFieldSet> {
        let unsupported = || FormatError::unsupported(skeleton, locale);
        let mut builder = FieldSetBuilder::new();

        let has_year = self.year || self.era;
        let date_fields = match (has_year, self.month.is_some(), self.day, self.weekday.is_some())
        {
            (false, false, false, false) => None,
            (true, false, false, false) => Some(DateFields::Y),
            (true, true, false, false) => Some(DateFields::YM),
            (true, true, true, false) => Some(DateFields::YMD),
            (true, true, true, true) => Some(DateFields::YMDE),
            (false, true, false, false) => Some(DateFields::M),
            (false, true, true, false) => Some(DateFields::MD),
            (false, true, true, true) => Some(DateFields::MDE),
            (false, false, true, false) => Some(DateFields::D),
            (false, false, true, true) => Some(DateFields::DE),
            (false, false, false, true) => Some(DateFields::E),
            // Year+day without a month, or year+weekday without a day, has
            // no field set in the engine.
            _ => return Err(unsupported()),
        };

        if date_fields.is_some() {
            let month_len = self.month.unwrap_or(0);
            let weekday_len = self.weekday.unwrap_or(0);
            builder.length = Some(if month_len >= 4 || weekday_len >= 4 {
                Length::Long
            } else if month_len == 3 || month_len == 0 {
                Length::Medium
            } else {
                // Numeric month; Short would also shorten the year to two
                // digits, which YearStyle::Full below restores.
                Length::Short
            });
        }
        builder.date_fields = date_fields;

        if self.era {
            builder.year_style = Some(YearStyle::WithEra);
        } else if self.year {
            builder.year_style = Some(YearStyle::Full);
        }

        if self.hour {
            builder.time_precision = Some(if self.second {
                TimePrecision::Second
            } else if self.minute {
                TimePrecision::Minute
            } else {
                TimePrecision::Hour
            });
        } else if self.minute || self.second {
            // The engine has no hour-less time field sets.
            return Err(unsupported());
        }

        builder.zone_style = self.zone;

        builder.build_composite().map_err(|_| unsupported())
    }
}
