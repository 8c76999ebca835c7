//! Worked examples for the `splice-core` combinators.
//!
//! Each module supplies small collaborator functions and assembles them into
//! a pipeline with one of the combinators:
//!
//! - [`csv`] – split text into rows and keep those of a given width
//!   ([`pipe!`](splice_core::pipe))
//! - [`quote`] – resolve a stock symbol to a document, stopping as soon as a
//!   lookup comes up empty ([`compose_optional`](splice_core::compose_optional))
//! - [`clock`] – decide whether a civil date-time falls within trading hours
//!   ([`compose`](splice_core::compose()))
//! - [`trace`] – observers that log the values flowing through a pipeline
//!   ([`tap`](splice_core::tap))
//!
//! [`commands`] runs those pipelines on behalf of the `splice-playground`
//! binary.
//!
//! The collaborators are deliberately simple. They are not a CSV parser, an
//! HTTP client, or a calendar library.

pub mod clock;
pub mod commands;
pub mod config;
pub mod csv;
mod error;
pub mod quote;
pub mod trace;

pub use config::{ConfigError, PlaygroundConfig, TradingHours};
pub use error::Error;
