//! Combinators for building functions out of smaller functions.
//!
//! This crate offers two ways to compose unary functions:
//!
//! - Free functions, each returning a plain `impl Fn`:
//!   - [`compose()`] – run two steps in sequence
//!   - [`tap`] – run a step, then hand its output to an observer
//!   - [`compose_optional`] – chain `Option`-returning steps, stopping at `None`
//!   - [`compose_result`] – chain `Result`-returning steps, stopping at `Err`
//! - The [`Step`] trait, whose provided methods build the same pipelines
//!   fluently out of named wrapper types.
//!
//! The [`pipe!`] and [`pipe_optional!`] macros compose any number of steps.
//!
//! In every form, steps run in the order they are written, left to right.
//! Composition itself does no work: it captures the steps and nothing else.
//! Panics raised by a step unwind through the composed function untouched.

mod compose;
mod macros;
mod step;

pub use compose::{compose, compose_optional, compose_result, tap};
pub use step::{AndThen, FnStep, Identity, MapSome, Step, Tap, Then, TryThen, identity, step};
