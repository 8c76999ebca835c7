use std::{collections::BTreeMap, fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::{
    Error,
    quote::{PageStore, SymbolTable},
};

/// Settings for the playground pipelines, usually loaded from a TOML file.
///
/// ```toml
/// [symbols]
/// AAPL = "http://apple.com"
///
/// [pages]
/// "http://apple.com" = "Apple Inc.\nDesigned in Cupertino."
///
/// [trading_hours]
/// open = 9
/// close = 16
/// ```
///
/// Every table is optional. A missing `symbols` or `pages` table is empty,
/// and a missing `trading_hours` table means 9:00 to 16:00. Only
/// [`PlaygroundConfig::default`] comes with a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlaygroundConfig {
    /// Stock symbol to content location.
    #[serde(default)]
    pub symbols: BTreeMap<String, String>,

    /// Content location to page text.
    #[serde(default)]
    pub pages: BTreeMap<String, String>,

    /// Hours during which the market is considered open.
    #[serde(default)]
    pub trading_hours: TradingHours,
}

/// Errors that can occur when validating a playground config.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("trading hour {0} is outside 0..=24")]
    HourOutOfRange(i8),

    #[error("market must open before it closes (open {open}, close {close})")]
    EmptyWindow { open: i8, close: i8 },

    #[error("symbol {0:?} has an empty location")]
    EmptyLocation(String),
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        let location = "http://apple.com".to_string();

        Self {
            symbols: BTreeMap::from([("AAPL".to_string(), location.clone())]),
            pages: BTreeMap::from([(
                location,
                "Apple Inc.\nDesigned by Apple in California.".to_string(),
            )]),
            trading_hours: TradingHours::default(),
        }
    }
}

impl PlaygroundConfig {
    /// Parses and validates a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this config or if
    /// validation fails.
    pub fn from_toml_str(text: &str) -> Result<Self, Error> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are invalid.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Checks invariants that the TOML structure alone cannot express.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.trading_hours.validate()?;

        if let Some((symbol, _)) = self
            .symbols
            .iter()
            .find(|(_, location)| location.trim().is_empty())
        {
            return Err(ConfigError::EmptyLocation(symbol.clone()));
        }
        Ok(())
    }

    /// Builds a symbol table from the `symbols` table.
    #[must_use]
    pub fn symbol_table(&self) -> SymbolTable {
        self.symbols
            .iter()
            .map(|(symbol, location)| (symbol.clone(), location.clone()))
            .collect()
    }

    /// Builds an in-memory page store from the `pages` table.
    #[must_use]
    pub fn page_store(&self) -> PageStore {
        self.pages
            .iter()
            .fold(PageStore::new(), |store, (location, text)| {
                store.with_page(location, text.as_bytes())
            })
    }
}

/// A half-open range of hours, `open..close`, on a 24-hour clock.
///
/// Hours read from TOML are checked by [`PlaygroundConfig::validate`], so a
/// bad range surfaces as [`Error::Config`] like every other invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TradingHours {
    open: i8,
    close: i8,
}

impl Default for TradingHours {
    fn default() -> Self {
        Self { open: 9, close: 16 }
    }
}

impl TradingHours {
    /// Creates validated trading hours.
    ///
    /// # Errors
    ///
    /// Returns an error if either hour is outside `0..=24` or if `open` is
    /// not strictly before `close`.
    pub fn new(open: i8, close: i8) -> Result<Self, ConfigError> {
        let hours = Self { open, close };
        hours.validate()?;
        Ok(hours)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let Self { open, close } = *self;

        for hour in [open, close] {
            if !(0..=24).contains(&hour) {
                return Err(ConfigError::HourOutOfRange(hour));
            }
        }
        if open >= close {
            return Err(ConfigError::EmptyWindow { open, close });
        }
        Ok(())
    }

    /// Returns the first hour of trading.
    #[must_use]
    pub fn open(&self) -> i8 {
        self.open
    }

    /// Returns the hour trading stops.
    #[must_use]
    pub fn close(&self) -> i8 {
        self.close
    }

    /// Returns `true` if `hour` falls within `open..close`.
    #[must_use]
    pub fn contains(&self, hour: i8) -> bool {
        (self.open..self.close).contains(&hour)
    }
}
