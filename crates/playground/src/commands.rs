//! The work behind each `splice-playground` subcommand.
//!
//! The binary reads input and prints results; everything in between lives
//! here so it can be exercised without a terminal.

use jiff::civil::DateTime;
use splice_core::{Step, step, tap};

use crate::{
    Error, PlaygroundConfig, TradingHours,
    clock::market_open_check,
    csv::{Row, parse_table},
    quote::{ContentSource, Document, decode_document},
    trace::{log_presence, log_stage},
};

/// Returns the rows of `text` that have exactly `width` fields.
#[must_use]
pub fn csv_rows(text: &str, width: usize) -> Vec<Row> {
    let table = tap(parse_table(width), log_stage("csv.rows"));
    table(text)
}

/// Resolves `symbol` to its document using the tables in `config`.
///
/// Every stage logs whether it produced a value, so a failed lookup shows
/// where it stopped when debug logging is enabled.
///
/// # Errors
///
/// Returns [`Error::Unresolved`] if the symbol is unknown, its location has
/// no page, or the page does not decode.
pub fn quote(symbol: &str, config: &PlaygroundConfig) -> Result<Document, Error> {
    let table = config.symbol_table();
    let pages = config.page_store();

    let resolve = step(|symbol: &str| table.resolve(symbol)).tap(log_presence("quote.resolve"));
    let fetch = step(|location: String| pages.fetch(&location)).tap(log_presence("quote.fetch"));
    let decode = step(decode_document).tap(log_presence("quote.decode"));
    let pipeline = resolve.and_then(fetch).and_then(decode);

    pipeline
        .call(symbol)
        .ok_or_else(|| Error::Unresolved(symbol.to_string()))
}

/// Returns `true` if the market is open at `at`.
#[must_use]
pub fn market_open(at: DateTime, hours: TradingHours) -> bool {
    let is_open = tap(market_open_check(hours), log_stage("hours.open"));
    is_open(at)
}
