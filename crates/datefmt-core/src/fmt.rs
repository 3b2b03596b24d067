//! Stateless entry points: one constructor function per catalog mnemonic.
//!
//! These are the locale-last entry points; use [`crate::LocaleFormat`] to
//! fix the locale first instead.
//!
//! ```rust
//! use datefmt_core::{fmt, locale};
//! use jiff::civil;
//!
//! let moment = civil::date(2025, 7, 30).at(15, 30, 45, 0);
//! let formatted = fmt::hour24_minute_second(locale!("en-US")).format(moment);
//! assert_eq!(formatted.unwrap(), "15:30:45");
//! ```

use icu::locale::Locale;

use crate::catalog::{for_each_mnemonic, Mnemonic};
use crate::formatter::Formatter;

macro_rules! entry_points {
    ($( $variant:ident, $method:ident => $token:literal, $desc:literal; )+) => {
        $(
            #[doc = concat!("Creates a [`Formatter`] for the `", $token, "` token (", $desc, ").")]
            pub fn $method(locale: Locale) -> Formatter {
                Formatter::new(Mnemonic::$variant, locale)
            }
        )+
    };
}
for_each_mnemonic!(entry_points);

#[cfg(test)]
mod tests {
    use icu::locale::locale;

    #[test]
    fn test_entry_points_seed_the_skeleton() {
        assert_eq!(super::year_abbr_month_day(locale!("en-US")).skeleton(), "yMMMd");
        assert_eq!(super::hour_minute(locale!("en-US")).skeleton(), "jm");
        assert_eq!(super::zone_generic_long(locale!("en-US")).skeleton(), "vvvv");
    }
}
