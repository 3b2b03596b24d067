//! datefmt CLI application
//!
//! Command-line front end for the datefmt formatting library: chains the
//! given mnemonics into one skeleton, resolves it for the requested
//! locale, and prints the rendered moment.

mod args;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use datefmt_core::{Formatter, Locale, LocaleFormat, Mnemonic};
use jiff::Timestamp;
use log::debug;

fn main() -> Result<()> {
    env_logger::init();

    let Args { mnemonics, locale, skeleton, at, list } = Args::parse();

    if list {
        for mnemonic in Mnemonic::ALL {
            println!("{:<8} {}", mnemonic.token(), mnemonic.description());
        }
        return Ok(());
    }

    let formatter = build_formatter(mnemonics, skeleton, locale)?;
    debug!(
        "accumulated skeleton '{}' for locale '{}'",
        formatter.skeleton(),
        formatter.locale()
    );

    let formatted = match at {
        Some(civil) => formatter.format(civil),
        None => formatter.format(Timestamp::now()),
    }
    .context("Failed to format the requested moment")?;

    println!("{formatted}");
    Ok(())
}

/// Chains the mnemonics in argument order, or takes the raw skeleton
/// verbatim.
fn build_formatter(
    mnemonics: Vec<Mnemonic>,
    skeleton: Option<String>,
    locale: Locale,
) -> Result<Formatter> {
    if let Some(skeleton) = skeleton {
        return Ok(Formatter::custom(skeleton, locale));
    }

    let mut iter = mnemonics.into_iter();
    let first = iter.next().context("At least one mnemonic is required")?;
    let seed = LocaleFormat::new(locale).of(first);
    Ok(iter.fold(seed, |formatter, mnemonic| formatter.then(mnemonic)))
}
