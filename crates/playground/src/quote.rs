//! Resolving a stock symbol to a document.
//!
//! Each step of the lookup may come up empty: the symbol may be unknown, the
//! location may have no content, or the content may not decode. The steps
//! return `Option`s and [`quote_pipeline`] chains them with
//! [`compose_optional`](splice_core::compose_optional), so the first empty
//! result ends the lookup.

use std::{collections::BTreeMap, fmt};

use splice_core::pipe_optional;

/// Maps stock symbols to content locations.
///
/// Symbols are matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    locations: BTreeMap<String, String>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the table with `symbol` mapped to `location`.
    #[must_use]
    pub fn with_symbol(mut self, symbol: &str, location: impl Into<String>) -> Self {
        self.insert(symbol, location);
        self
    }

    /// Maps `symbol` to `location`, replacing any previous mapping.
    pub fn insert(&mut self, symbol: &str, location: impl Into<String>) {
        self.locations.insert(normalize(symbol), location.into());
    }

    /// Returns the location for `symbol`, if it is known.
    #[must_use]
    pub fn resolve(&self, symbol: &str) -> Option<String> {
        self.locations.get(&normalize(symbol)).cloned()
    }

    /// Returns the number of known symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns `true` if no symbols are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

impl FromIterator<(String, String)> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (symbol, location) in iter {
            table.insert(&symbol, location);
        }
        table
    }
}

fn normalize(symbol: &str) -> String {
    symbol.trim().to_ascii_uppercase()
}

/// A source of raw content, addressed by location.
///
/// Implementations return `None` when a location has no content.
pub trait ContentSource {
    /// Fetches the content stored at `location`.
    fn fetch(&self, location: &str) -> Option<Vec<u8>>;
}

impl<S> ContentSource for &S
where
    S: ContentSource + ?Sized,
{
    fn fetch(&self, location: &str) -> Option<Vec<u8>> {
        (**self).fetch(location)
    }
}

/// An in-memory [`ContentSource`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageStore {
    pages: BTreeMap<String, Vec<u8>>,
}

impl PageStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the store with `content` stored at `location`.
    #[must_use]
    pub fn with_page(mut self, location: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        self.pages.insert(location.into(), content.into());
        self
    }
}

impl ContentSource for PageStore {
    fn fetch(&self, location: &str) -> Option<Vec<u8>> {
        self.pages.get(location).cloned()
    }
}

/// Text content with a title line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub body: String,
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.body.is_empty() {
            write!(f, "{}", self.title)
        } else {
            write!(f, "{}\n\n{}", self.title, self.body)
        }
    }
}

/// Decodes raw content into a [`Document`].
///
/// The first non-blank line becomes the title and the remaining lines the
/// body. Returns `None` if the content is not UTF-8 or has no non-blank line.
#[must_use]
pub fn decode_document(bytes: Vec<u8>) -> Option<Document> {
    let text = String::from_utf8(bytes).ok()?;
    let mut lines = text.lines().map(str::trim).skip_while(|line| line.is_empty());

    let title = lines.next()?.to_string();
    let body = lines.collect::<Vec<_>>().join("\n").trim().to_string();

    Some(Document { title, body })
}

/// Returns a pipeline that resolves a symbol to its decoded document.
///
/// The pipeline runs three steps in order: look up the symbol's location in
/// `table`, fetch that location from `source`, then decode the content. It
/// returns `None` as soon as any step does, without running later steps.
///
/// The pipeline borrows `table` and `source` for as long as it lives, but
/// borrows each symbol only for the call it is passed to.
///
/// # Example
///
/// ```
/// use splice_playground::quote::{PageStore, SymbolTable, quote_pipeline};
///
/// let table = SymbolTable::new().with_symbol("AAPL", "http://apple.com");
/// let pages = PageStore::new().with_page("http://apple.com", "Apple Inc.");
///
/// let quote = quote_pipeline(&table, &pages);
///
/// assert_eq!(quote("AAPL").map(|doc| doc.title), Some("Apple Inc.".to_string()));
/// assert_eq!(quote("UNKNOWN"), None);
/// ```
pub fn quote_pipeline<'a, S>(
    table: &'a SymbolTable,
    source: &'a S,
) -> impl Fn(&str) -> Option<Document> + 'a
where
    S: ContentSource + ?Sized,
{
    move |symbol: &str| {
        let lookup = pipe_optional!(
            move |symbol: &str| table.resolve(symbol),
            move |location: String| source.fetch(&location),
            decode_document,
        );
        lookup(symbol)
    }
}
