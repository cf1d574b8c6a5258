//! Fabula - Native-operator execution engine for a narrative scripting
//! runtime
//!
//! This crate re-exports both layers of the engine for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: fabula_engine     — Operator registry, coercion, dispatch
//! Layer 0: fabula_foundation — Core types (Value, StoryList, Error)
//! ```

pub use fabula_engine as engine;
pub use fabula_foundation as foundation;
