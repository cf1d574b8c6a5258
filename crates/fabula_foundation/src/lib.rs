//! Runtime values, story lists, and errors for the Fabula operator engine.
//!
//! This crate provides:
//! - [`Value`] - The tagged runtime value the operator engine evaluates
//! - [`ValueType`] - The ordered type tag used by the coercion lattice
//! - [`StoryList`] - The ordered-set list value with origin provenance
//! - [`Path`] - Symbolic divert-target addresses
//! - [`Error`] - Rich error types split into story diagnostics and
//!   internal errors

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod list;
mod path;
mod types;
mod value;

pub use error::{Error, ErrorKind};
pub use list::{ListItem, ListOrigin, StoryList};
pub use path::Path;
pub use types::ValueType;
pub use value::Value;

/// Result type alias used throughout Fabula.
pub type Result<T> = std::result::Result<T, Error>;
