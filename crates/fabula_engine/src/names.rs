//! Operator name constants.
//!
//! These are the exact spellings the story compiler emits; the registry
//! is keyed by them.

/// Addition, string concatenation, list union, list increment.
pub const ADD: &str = "+";
/// Subtraction, list difference, list decrement.
pub const SUBTRACT: &str = "-";
/// Division (integer division truncates toward zero).
pub const DIVIDE: &str = "/";
/// Multiplication.
pub const MULTIPLY: &str = "*";
/// Modulo (truncated remainder).
pub const MOD: &str = "%";
/// Unary negation.
pub const NEGATE: &str = "_";
/// Equality.
pub const EQUAL: &str = "==";
/// Strictly greater.
pub const GREATER: &str = ">";
/// Strictly less.
pub const LESS: &str = "<";
/// Greater or equal.
pub const GREATER_OR_EQUALS: &str = ">=";
/// Less or equal.
pub const LESS_OR_EQUALS: &str = "<=";
/// Inequality.
pub const NOT_EQUALS: &str = "!=";
/// Unary logical not.
pub const NOT: &str = "!";
/// Logical and.
pub const AND: &str = "&&";
/// Logical or.
pub const OR: &str = "||";
/// Binary minimum.
pub const MIN: &str = "MIN";
/// Binary maximum.
pub const MAX: &str = "MAX";
/// Containment: substring for strings, subset for lists.
pub const HAS: &str = "?";
/// Negated containment.
pub const HASNT: &str = "!?";
/// List intersection.
pub const INTERSECT: &str = "^";
/// Minimum list entry as a singleton list.
pub const LIST_MIN: &str = "LIST_MIN";
/// Maximum list entry as a singleton list.
pub const LIST_MAX: &str = "LIST_MAX";
/// Every item declared by the list's origins.
pub const LIST_ALL: &str = "LIST_ALL";
/// Number of entries in a list.
pub const LIST_COUNT: &str = "LIST_COUNT";
/// Value of the maximum list entry.
pub const LIST_VALUE: &str = "LIST_VALUE";
/// Complement of a list within its origins.
pub const LIST_INVERT: &str = "LIST_INVERT";
