//! Core library for datefmt, a thin convenience façade over the ICU
//! locale-aware date/time formatting engine.
//!
//! The library does three small things and delegates everything else to
//! the engine (the [`icu`] crate, with compiled CLDR data):
//!
//! - **Skeleton Catalog** ([`catalog`]): a fixed mapping from mnemonic
//!   names (`yMMMd`, `Hms`, `jm`, …) to ICU skeleton tokens.
//! - **Formatter Builder** ([`formatter`]): an immutable (skeleton,
//!   locale) value whose chaining calls append space-separated tokens and
//!   return new instances.
//! - **Render** ([`Formatter::format`]): resolves the accumulated skeleton
//!   against the locale and formats one of three point-in-time
//!   representations ([`input`]).
//!
//! Skeleton-to-pattern resolution, calendar and timezone logic, and locale
//! data all live in the engine. The one contract worth knowing: skeletons
//! are never validated during construction or chaining — an unsupported
//! skeleton surfaces as [`FormatError::UnsupportedSkeleton`] on the first
//! render, and the outcome is memoized per formatter instance.
//!
//! # Quick Start
//!
//! ```rust
//! use datefmt_core::{fmt, locale, LocaleFormat};
//! use jiff::civil;
//!
//! let moment = civil::date(2025, 7, 30).at(15, 30, 45, 0);
//!
//! // Locale-last: pick a mnemonic, hand it a locale.
//! let date = fmt::year_abbr_month_day(locale!("en-US"));
//! assert_eq!(date.format(moment).unwrap(), "Jul 30, 2025");
//!
//! // Chain more tokens; the original formatter stays usable.
//! let stamp = date.hour24_minute_second();
//! assert_eq!(stamp.skeleton(), "yMMMd Hms");
//!
//! // Locale-first: fix the locale once.
//! let english = LocaleFormat::new(locale!("en-US"));
//! assert_eq!(
//!     english.hour24_minute_second().format(moment).unwrap(),
//!     "15:30:45"
//! );
//! ```

pub mod catalog;
mod engine;
pub mod error;
pub mod fmt;
pub mod formatter;
pub mod input;

// Re-export commonly used types
pub use catalog::Mnemonic;
pub use error::{FormatError, Result};
pub use formatter::{Formatter, LocaleFormat};
pub use input::DateTimeValue;

// The locale type and literal macro of the underlying engine, re-exported
// so callers do not need a direct icu dependency.
pub use icu::locale::{locale, Locale};
