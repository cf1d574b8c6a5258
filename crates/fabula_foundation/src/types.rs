//! Value type tags and their coercion ordering.

use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Type tag for a runtime [`Value`](crate::Value).
///
/// The tags form a total order used by the coercion resolver: when two
/// operands disagree on type, both are cast to the *widest* (maximum)
/// tag among them. The order is encoded explicitly in [`ValueType::rank`]
/// rather than relying on declaration order.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ValueType {
    /// The sentinel "no value" result of a function call. Never a legal
    /// operand; rejected before coercion runs.
    Void,
    /// Boolean type.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// String type.
    String,
    /// Symbolic divert-target address.
    DivertTarget,
    /// Ordered-set list value.
    List,
}

impl ValueType {
    /// Number of type tags; sizes the per-type operation tables.
    pub const COUNT: usize = 7;

    /// Position of this tag in the coercion order.
    ///
    /// `Bool < Int < Float < String < DivertTarget < List`; ranks are
    /// dense so they double as table indices.
    #[must_use]
    pub const fn rank(self) -> usize {
        match self {
            Self::Void => 0,
            Self::Bool => 1,
            Self::Int => 2,
            Self::Float => 3,
            Self::String => 4,
            Self::DivertTarget => 5,
            Self::List => 6,
        }
    }
}

impl PartialOrd for ValueType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ValueType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Debug for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Void => write!(f, "void"),
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::String => write!(f, "string"),
            Self::DivertTarget => write!(f, "divert-target"),
            Self::List => write!(f, "list"),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
