//! Splitting comma-separated text into rows.
//!
//! This is not a CSV parser: quoting, escaping, and embedded newlines are
//! not supported. Each function here is a single step, and
//! [`parse_table`] strings them together with [`pipe!`].

use splice_core::pipe;

/// A single row of fields.
pub type Row = Vec<String>;

/// Splits text into its non-blank lines.
///
/// Both `\n` and `\r\n` line endings are accepted.
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Splits each line on commas, trimming whitespace around every field.
#[must_use]
pub fn tokenize_rows(lines: Vec<String>) -> Vec<Row> {
    lines
        .iter()
        .map(|line| line.split(',').map(|field| field.trim().to_string()).collect())
        .collect()
}

/// Returns a step that keeps only rows with exactly `width` fields.
pub fn rows_of_width(width: usize) -> impl Fn(Vec<Row>) -> Vec<Row> {
    move |rows| rows.into_iter().filter(|row| row.len() == width).collect()
}

/// Returns a pipeline that turns text into the rows having `width` fields.
///
/// The pipeline borrows its input only for the duration of a call, so one
/// pipeline can be applied to any number of texts.
///
/// # Example
///
/// ```
/// use splice_playground::csv::parse_table;
///
/// let table = parse_table(3);
///
/// assert_eq!(
///     table("Ace,Ale,Are\nBag,Beg,Bug\nCar,Cat"),
///     vec![vec!["Ace", "Ale", "Are"], vec!["Bag", "Beg", "Bug"]],
/// );
/// ```
pub fn parse_table(width: usize) -> impl Fn(&str) -> Vec<Row> {
    let to_rows = pipe!(tokenize_rows, rows_of_width(width));
    move |text: &str| to_rows(split_lines(text))
}
