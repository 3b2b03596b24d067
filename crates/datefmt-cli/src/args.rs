use clap::Parser;
use datefmt_core::{Locale, Mnemonic};
use jiff::civil;

/// Format a moment in time through locale-aware ICU patterns
///
/// Mnemonics name ICU skeleton tokens (`yMMMd`, `Hms`, `jm`, ...) and are
/// chained in the order given; the engine decides field order and
/// separators per locale. Use `--skeleton` to pass a raw skeleton instead
/// of catalog mnemonics, and `--list` to see every supported mnemonic.
#[derive(Parser)]
#[command(version, about, name = "dfmt")]
pub struct Args {
    /// Mnemonic skeleton tokens to chain, e.g. `yMMMd Hms`
    #[arg(value_name = "MNEMONIC", required_unless_present_any = ["skeleton", "list"])]
    pub mnemonics: Vec<Mnemonic>,

    /// BCP-47 locale identifier to resolve the skeleton against
    #[arg(short, long, default_value = "en-US")]
    pub locale: Locale,

    /// Raw ICU skeleton, bypassing the mnemonic catalog
    #[arg(long, conflicts_with = "mnemonics")]
    pub skeleton: Option<String>,

    /// Civil datetime to format, e.g. 2025-07-30T15:30:45. Interpreted in
    /// the system timezone; defaults to the current moment
    #[arg(long, value_name = "DATETIME")]
    pub at: Option<civil::DateTime>,

    /// List every catalog mnemonic with its description and exit
    #[arg(long)]
    pub list: bool,
}
