//! End-to-end formatting tests against the compiled CLDR data.
//!
//! Exact strings are only asserted for civil inputs, whose rendered fields
//! do not depend on the host timezone. Instant inputs are covered by the
//! equivalence and determinism tests, which derive their expectations
//! through the same system timezone the render path uses.

use datefmt_core::{fmt, locale, FormatError, Formatter, LocaleFormat, Mnemonic};
use jiff::civil;
use jiff::tz::TimeZone;
use jiff::Timestamp;

/// 2025-07-30T15:30:45 as civil wall-clock fields.
fn moment() -> civil::DateTime {
    civil::date(2025, 7, 30).at(15, 30, 45, 0)
}

#[test]
fn test_year_abbr_month_day_english() {
    let formatter = fmt::year_abbr_month_day(locale!("en-US"));
    assert_eq!(formatter.format(moment()).unwrap(), "Jul 30, 2025");
}

#[test]
fn test_hour24_minute_second_english() {
    let formatter = fmt::hour24_minute_second(locale!("en-US"));
    assert_eq!(formatter.format(moment()).unwrap(), "15:30:45");
}

#[test]
fn test_hour12_minute_english() {
    // CLDR separates the day period with U+202F.
    let formatter = fmt::hour12_minute(locale!("en-US"));
    assert_eq!(formatter.format(moment()).unwrap(), "3:30\u{202f}PM");
}

#[test]
fn test_chained_date_and_time_english() {
    let formatter = fmt::year_abbr_month_day(locale!("en-US")).hour24_minute_second();
    assert_eq!(
        formatter.format(moment()).unwrap(),
        "Jul 30, 2025, 15:30:45"
    );
}

#[test]
fn test_render_is_deterministic() {
    let formatter = fmt::year_abbr_month_day(locale!("en-US")).hour24_minute_second();
    let first = formatter.format(moment()).unwrap();
    let second = formatter.format(moment()).unwrap();
    assert_eq!(first, second);

    // A freshly built formatter with the same inputs agrees as well.
    let rebuilt = Formatter::custom("yMMMd Hms", locale!("en-US"));
    assert_eq!(rebuilt.format(moment()).unwrap(), first);
}

#[test]
fn test_input_representations_are_equivalent() {
    let timestamp: Timestamp = "2025-07-30T15:30:45Z".parse().unwrap();
    let zoned = timestamp.to_zoned(TimeZone::system());
    let civil = zoned.datetime();
    let system_time = std::time::SystemTime::from(timestamp);

    let formatter = fmt::year_abbr_month_day(locale!("en-US")).hour24_minute_second();
    let from_instant = formatter.format(timestamp).unwrap();
    let from_civil = formatter.format(civil).unwrap();
    let from_system = formatter.format(system_time).unwrap();
    assert_eq!(from_instant, from_civil);
    assert_eq!(from_instant, from_system);
}

#[test]
fn test_chaining_matches_custom_concatenation() {
    let chained = fmt::year_abbr_month_day(locale!("en-US"))
        .hour24_minute_second()
        .zone();
    let custom = Formatter::custom("yMMMd Hms z", locale!("en-US"));
    assert_eq!(chained.skeleton(), custom.skeleton());

    let timestamp: Timestamp = "2025-07-30T15:30:45Z".parse().unwrap();
    assert_eq!(
        chained.format(timestamp).unwrap(),
        custom.format(timestamp).unwrap()
    );
}

#[test]
fn test_chaining_does_not_affect_prior_renders() {
    let date = fmt::year_abbr_month_day(locale!("en-US"));
    let before = date.format(moment()).unwrap();
    let _stamp = date.hour24_minute_second();
    let after = date.format(moment()).unwrap();
    assert_eq!(before, after);
    assert_eq!(before, "Jul 30, 2025");
}

#[test]
fn test_locale_override_applies_to_render() {
    let korean = fmt::year_abbr_month_day(locale!("en-US"))
        .then_in(Mnemonic::Hour24MinuteSecond, locale!("ko-KR"));
    assert_eq!(korean.locale().to_string(), "ko-KR");

    // The engine's Korean output differs from English; pin only the
    // stable pieces rather than one data version's byte layout.
    let output = korean.format(moment()).unwrap();
    assert!(output.contains("2025"), "unexpected output: {output}");
    assert!(output.contains("15:30:45"), "unexpected output: {output}");
    assert_ne!(
        output,
        fmt::year_abbr_month_day(locale!("en-US"))
            .hour24_minute_second()
            .format(moment())
            .unwrap()
    );
}

#[test]
fn test_unsupported_custom_skeleton_fails_at_render() {
    let formatter = Formatter::custom("invalid", locale!("en-US"));

    // Construction succeeded; render reports the failure, repeatably.
    let err = formatter.format(moment()).unwrap_err();
    assert_eq!(
        err,
        FormatError::UnsupportedSkeleton {
            skeleton: "invalid".to_string(),
            locale: "en-US".to_string(),
        }
    );
    assert_eq!(formatter.format(moment()).unwrap_err(), err);
    assert!(err.to_string().contains("Unsupported skeleton"));
}

#[test]
fn test_every_mnemonic_renders_or_reports_unsupported() {
    let english = LocaleFormat::new(locale!("en-US"));
    for mnemonic in Mnemonic::ALL {
        match english.of(*mnemonic).format(moment()) {
            Ok(output) => assert!(!output.is_empty(), "{mnemonic} rendered nothing"),
            Err(FormatError::UnsupportedSkeleton { skeleton, .. }) => {
                assert_eq!(skeleton, mnemonic.token());
            }
            Err(other) => panic!("{mnemonic} failed unexpectedly: {other}"),
        }
    }
}

#[test]
fn test_week_and_quarter_mnemonics_are_engine_unsupported() {
    // The engine's semantic field sets cover no week or quarter fields;
    // the catalog still maps them and the failure surfaces at render.
    let english = LocaleFormat::new(locale!("en-US"));
    for mnemonic in [
        Mnemonic::WeekOfYear,
        Mnemonic::WeekOfMonth,
        Mnemonic::Quarter,
        Mnemonic::WeekYear,
    ] {
        assert!(matches!(
            english.of(mnemonic).format(moment()),
            Err(FormatError::UnsupportedSkeleton { .. })
        ));
    }
}

#[test]
fn test_repeated_field_runs_merge_to_the_widest() {
    // 2025-07-30 is a Wednesday; the widest run decides the width no
    // matter where it appears in the chain.
    let weekday = Formatter::custom("E EEEE", locale!("en-US"));
    assert_eq!(weekday.format(moment()).unwrap(), "Wednesday");

    let month = Formatter::custom("MMMM M", locale!("en-US"));
    assert_eq!(month.format(moment()).unwrap(), "July");
}

#[test]
fn test_shared_formatter_renders_concurrently() {
    let formatter = fmt::year_abbr_month_day(locale!("en-US")).hour24_minute_second();
    let expected = "Jul 30, 2025, 15:30:45";

    // Both threads race the first (memoizing) render.
    std::thread::scope(|scope| {
        let first = scope.spawn(|| formatter.format(moment()).unwrap());
        let second = scope.spawn(|| formatter.format(moment()).unwrap());
        assert_eq!(first.join().unwrap(), expected);
        assert_eq!(second.join().unwrap(), expected);
    });
}
