//! Native operator dispatch, coercion, and list-aware evaluation.
//!
//! This crate is the execution engine for Fabula's built-in operators.
//! The stack machine hands it an operator name and 1-2 operand values;
//! the engine validates operand types, coerces them to a common
//! representation, resolves the list-bearing special cases, and applies
//! the registered per-type implementation:
//!
//! - [`names`] - Operator name constants
//! - [`NativeOp`] - Flyweight handle onto a registered operator
//! - [`call`] - The invocation facade consumed by the stack machine
//! - [`exists`] - Operator name recognition

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod coerce;
mod dispatch;
pub mod names;
mod registry;

pub use dispatch::{NativeOp, call, exists};
