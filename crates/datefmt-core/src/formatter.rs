//! The immutable formatter builder and its locale-first counterpart.
//!
//! A [`Formatter`] is a value: an accumulated skeleton string plus a
//! locale. Chaining never mutates the receiver; every chain call allocates
//! a new `Formatter`, so any instance stays valid and reusable after being
//! chained from. The skeleton is only resolved against the ICU engine on
//! the first render, and the resolved field-set request (or its failure)
//! is memoized per instance behind a [`OnceLock`] so concurrent first
//! renders cannot race and the whole value stays `Send + Sync`.
//!
//! [`LocaleFormat`] pre-binds a locale so call sites that build several
//! formatters for one locale do not have to repeat it.

use std::fmt;
use std::sync::OnceLock;

use icu::locale::Locale;

use crate::catalog::{for_each_mnemonic, Mnemonic};
use crate::engine::ResolvedPattern;
use crate::error::{FormatError, Result};
use crate::input::DateTimeValue;

/// An immutable (skeleton, locale) pair that renders points in time.
///
/// Created from an entry point ([`Formatter::new`], [`Formatter::custom`],
/// the [`crate::fmt`] functions, or [`LocaleFormat`]) and extended by
/// chaining. Construction and chaining never fail; an unresolvable
/// skeleton only surfaces at [`format`](Formatter::format) time.
///
/// ```rust
/// use datefmt_core::{locale, Formatter, Mnemonic};
/// use jiff::civil;
///
/// let date = Formatter::new(Mnemonic::YearAbbrMonthDay, locale!("en-US"));
/// let stamp = date.hour24_minute_second();
/// assert_eq!(stamp.skeleton(), "yMMMd Hms");
///
/// let moment = civil::date(2025, 7, 30).at(15, 30, 45, 0);
/// assert_eq!(date.format(moment).unwrap(), "Jul 30, 2025");
/// ```
#[derive(Clone)]
pub struct Formatter {
    skeleton: String,
    locale: Locale,
    /// Memoized resolution result: `Some` holds the resolved pattern,
    /// `None` records that resolution failed for this (skeleton, locale).
    resolved: OnceLock<Option<ResolvedPattern>>,
}

impl Formatter {
    /// Creates a formatter for a single mnemonic in the given locale.
    pub fn new(mnemonic: Mnemonic, locale: Locale) -> Self {
        Self::from_skeleton(mnemonic.token().to_owned(), locale)
    }

    /// Creates a formatter from a raw skeleton string, bypassing the
    /// catalog.
    ///
    /// The skeleton is not validated here; an unsupported skeleton fails
    /// on the first [`format`](Formatter::format) call.
    pub fn custom(skeleton: impl Into<String>, locale: Locale) -> Self {
        Self::from_skeleton(skeleton.into(), locale)
    }

    fn from_skeleton(skeleton: String, locale: Locale) -> Self {
        Self {
            skeleton,
            locale,
            resolved: OnceLock::new(),
        }
    }

    /// The accumulated skeleton string.
    pub fn skeleton(&self) -> &str {
        &self.skeleton
    }

    /// The locale the skeleton will be resolved against.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Returns a new formatter with the mnemonic's token appended,
    /// inheriting this formatter's locale.
    pub fn then(&self, mnemonic: Mnemonic) -> Self {
        self.then_in(mnemonic, self.locale.clone())
    }

    /// Returns a new formatter with the mnemonic's token appended and the
    /// locale replaced.
    ///
    /// The override persists: subsequent chains without their own override
    /// inherit it.
    pub fn then_in(&self, mnemonic: Mnemonic, locale: Locale) -> Self {
        let mut skeleton = String::with_capacity(self.skeleton.len() + 1 + mnemonic.token().len());
        skeleton.push_str(&self.skeleton);
        skeleton.push(' ');
        skeleton.push_str(mnemonic.token());
        Self::from_skeleton(skeleton, locale)
    }

    /// Renders a point in time through the locale-resolved pattern.
    ///
    /// Accepts an absolute instant ([`jiff::Timestamp`]), a civil
    /// date-time ([`jiff::civil::DateTime`], interpreted in the system
    /// default timezone), or a legacy [`std::time::SystemTime`]. All three
    /// representations of the same wall-clock moment render identically.
    ///
    /// Deterministic for a fixed (skeleton, locale, instant, system
    /// timezone, CLDR data version); never mutates the formatter beyond
    /// memoizing the resolved pattern.
    pub fn format(&self, value: impl Into<DateTimeValue>) -> Result<String> {
        let pattern = self.resolved()?;
        pattern.render(&value.into().to_zoned()?, &self.skeleton, &self.locale)
    }

    /// Resolves the skeleton once and reuses the result for subsequent
    /// renders. Failure is memoized like success: resolution is pure, so
    /// retrying cannot change the outcome.
    fn resolved(&self) -> Result<ResolvedPattern> {
        let slot = self
            .resolved
            .get_or_init(|| ResolvedPattern::resolve(&self.skeleton, &self.locale).ok());
        match slot {
            Some(pattern) => Ok(*pattern),
            None => Err(FormatError::unsupported(self.skeleton.clone(), &self.locale)),
        }
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formatter")
            .field("skeleton", &self.skeleton)
            .field("locale", &self.locale.to_string())
            .finish_non_exhaustive()
    }
}

macro_rules! formatter_chain_methods {
    ($( $variant:ident, $method:ident => $token:literal, $desc:literal; )+) => {
        /// Chaining methods, one per catalog mnemonic. Each appends the
        /// mnemonic's token and inherits the current locale; use
        /// [`Formatter::then_in`] to override the locale while chaining.
        impl Formatter {
            $(
                #[doc = concat!("Appends the `", $token, "` token (", $desc, ").")]
                pub fn $method(&self) -> Formatter {
                    self.then(Mnemonic::$variant)
                }
            )+
        }
    };
}
for_each_mnemonic!(formatter_chain_methods);

/// An entry point with the locale fixed up front.
///
/// Holds no state beyond the locale; every mnemonic call delegates to
/// [`Formatter::new`] with the bound locale.
///
/// ```rust
/// use datefmt_core::{locale, LocaleFormat};
/// use jiff::civil;
///
/// let korean = LocaleFormat::new(locale!("ko-KR"));
/// let date = korean.year_abbr_month_day();
/// let time = korean.hour24_minute();
/// assert_eq!(date.locale().to_string(), "ko-KR");
/// assert_eq!(time.skeleton(), "Hm");
/// ```
#[derive(Debug, Clone)]
pub struct LocaleFormat {
    locale: Locale,
}

impl LocaleFormat {
    /// Fixes a locale for subsequent mnemonic calls.
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// The bound locale.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Creates a formatter for a mnemonic in the bound locale.
    pub fn of(&self, mnemonic: Mnemonic) -> Formatter {
        Formatter::new(mnemonic, self.locale.clone())
    }

    /// Creates a formatter from a raw skeleton in the bound locale.
    pub fn custom(&self, skeleton: impl Into<String>) -> Formatter {
        Formatter::custom(skeleton, self.locale.clone())
    }
}

macro_rules! locale_format_methods {
    ($( $variant:ident, $method:ident => $token:literal, $desc:literal; )+) => {
        /// Mnemonic entry points, one per catalog entry.
        impl LocaleFormat {
            $(
                #[doc = concat!("Creates a formatter for the `", $token, "` token (", $desc, ").")]
                pub fn $method(&self) -> Formatter {
                    self.of(Mnemonic::$variant)
                }
            )+
        }
    };
}
for_each_mnemonic!(locale_format_methods);

#[cfg(test)]
mod tests {
    use icu::locale::locale;

    use super::{Formatter, LocaleFormat};
    use crate::catalog::Mnemonic;

    #[test]
    fn test_chaining_accumulates_space_separated_tokens() {
        let formatter = Formatter::new(Mnemonic::YearAbbrMonthDay, locale!("en-US"))
            .then(Mnemonic::Hour24MinuteSecond)
            .then(Mnemonic::Zone);
        assert_eq!(formatter.skeleton(), "yMMMd Hms z");
        assert_eq!(formatter.locale().to_string(), "en-US");
    }

    #[test]
    fn test_chaining_does_not_mutate_the_receiver() {
        let date = Formatter::new(Mnemonic::YearAbbrMonthDay, locale!("en-US"));
        let _stamp = date.then(Mnemonic::Hour24MinuteSecond);
        assert_eq!(date.skeleton(), "yMMMd");
    }

    #[test]
    fn test_locale_override_persists_through_later_chains() {
        let formatter = Formatter::new(Mnemonic::YearAbbrMonthDay, locale!("en-US"))
            .then_in(Mnemonic::Hour24Minute, locale!("ko-KR"))
            .then(Mnemonic::Second);
        assert_eq!(formatter.locale().to_string(), "ko-KR");
        assert_eq!(formatter.skeleton(), "yMMMd Hm s");
    }

    #[test]
    fn test_generated_methods_match_then() {
        let base = Formatter::new(Mnemonic::Year, locale!("en-US"));
        assert_eq!(
            base.hour24_minute_second().skeleton(),
            base.then(Mnemonic::Hour24MinuteSecond).skeleton()
        );
    }

    #[test]
    fn test_locale_format_binds_the_locale_once() {
        let korean = LocaleFormat::new(locale!("ko-KR"));
        assert_eq!(korean.year_month_day().locale().to_string(), "ko-KR");
        assert_eq!(korean.custom("yMMMd").skeleton(), "yMMMd");
        assert_eq!(korean.of(Mnemonic::Hour).skeleton(), "j");
    }

    #[test]
    fn test_formatter_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Formatter>();
        assert_send_sync::<LocaleFormat>();
    }
}
