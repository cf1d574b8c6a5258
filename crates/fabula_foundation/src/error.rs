//! Error types for the Fabula operator engine.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Errors fall into two classes (see [`Error::is_internal`]):
//! - *story diagnostics*: recoverable author-level faults such as
//!   applying an operator to an unsupported type or mixing lists with
//!   incompatible values;
//! - *internal errors*: bugs in the caller or the story compiler, such
//!   as an arity mismatch or an unknown operator name.

use thiserror::Error;

use crate::types::ValueType;

/// The main error type for Fabula operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Returns true for programming errors that indicate a bug in the
    /// caller or the story compiler, rather than an authoring fault.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::ArityMismatch { .. }
                | ErrorKind::UnknownOperator(_)
                | ErrorKind::Internal(_)
        )
    }

    /// Creates a void-operand diagnostic.
    #[must_use]
    pub fn void_operand(op: impl Into<String>) -> Self {
        Self::new(ErrorKind::VoidOperand { op: op.into() })
    }

    /// Creates an unsupported-type diagnostic.
    #[must_use]
    pub fn unsupported_type(op: impl Into<String>, operand_type: ValueType) -> Self {
        Self::new(ErrorKind::UnsupportedType {
            op: op.into(),
            operand_type,
        })
    }

    /// Creates a list-mixing diagnostic.
    #[must_use]
    pub fn list_type_mix(other: ValueType) -> Self {
        Self::new(ErrorKind::ListTypeMix { other })
    }

    /// Creates a missing-list-item diagnostic.
    #[must_use]
    pub fn list_item_not_found(value: i64, origin: impl Into<String>) -> Self {
        Self::new(ErrorKind::ListItemNotFound {
            value,
            origin: origin.into(),
        })
    }

    /// Creates a diagnostic for a list/non-list pairing with no defined
    /// meaning.
    #[must_use]
    pub fn invalid_list_pair(op: impl Into<String>, lhs: ValueType, rhs: ValueType) -> Self {
        Self::new(ErrorKind::InvalidListPair {
            op: op.into(),
            lhs,
            rhs,
        })
    }

    /// Creates a truthiness diagnostic for a type with no defined
    /// truth value.
    #[must_use]
    pub fn truthiness_undefined(operand_type: ValueType) -> Self {
        Self::new(ErrorKind::TruthinessUndefined(operand_type))
    }

    /// Creates a bad-cast diagnostic.
    #[must_use]
    pub fn bad_cast(from: ValueType, to: ValueType) -> Self {
        Self::new(ErrorKind::BadCast { from, to })
    }

    /// Creates an arity mismatch error.
    #[must_use]
    pub fn arity_mismatch(op: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::new(ErrorKind::ArityMismatch {
            op: op.into(),
            expected,
            actual,
        })
    }

    /// Creates an unknown-operator error.
    #[must_use]
    pub fn unknown_operator(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownOperator(name.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// An operand was the void result of a function call.
    #[error(
        "attempted to perform {op} on a void value; did you forget to return a value from a function you called here?"
    )]
    VoidOperand {
        /// The operator that was applied.
        op: String,
    },

    /// The operator has no implementation for the coerced operand type.
    #[error("cannot perform operation {op} on {operand_type} values")]
    UnsupportedType {
        /// The operator that was applied.
        op: String,
        /// The common type the operands coerced to.
        operand_type: ValueType,
    },

    /// A list operand was combined with a value that cannot be promoted
    /// to a list.
    #[error("cannot mix lists and {other} values in this operation")]
    ListTypeMix {
        /// The non-promotable operand type.
        other: ValueType,
    },

    /// No item with the requested value exists in the list's origin.
    #[error("could not find list item with the value {value} in {origin}")]
    ListItemNotFound {
        /// The integer value that was looked up.
        value: i64,
        /// The origin that was searched.
        origin: String,
    },

    /// A binary list/non-list pairing with no defined meaning.
    #[error("cannot use {op} on {lhs} and {rhs}")]
    InvalidListPair {
        /// The operator that was applied.
        op: String,
        /// Type of the left operand.
        lhs: ValueType,
        /// Type of the right operand.
        rhs: ValueType,
    },

    /// The type has no defined truth value (divert targets, void).
    #[error("cannot test the truthiness of a {0} value")]
    TruthinessUndefined(ValueType),

    /// A value could not be cast to the requested type.
    #[error("cannot cast {from} to {to}")]
    BadCast {
        /// The source type.
        from: ValueType,
        /// The requested target type.
        to: ValueType,
    },

    /// Division or modulo by integer zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Wrong number of operands for the operator's fixed arity.
    #[error("{op} expects {expected} operands, got {actual}")]
    ArityMismatch {
        /// The operator that was applied.
        op: String,
        /// The operator's fixed arity.
        expected: usize,
        /// Actual number of operands.
        actual: usize,
    },

    /// An operator name with no registered definition reached the
    /// invocation facade.
    #[error("unknown native operator: {0}")]
    UnknownOperator(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
