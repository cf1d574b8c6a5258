//! The tagged runtime value the operator engine evaluates.

use std::fmt;
use std::sync::Arc;

use crate::error::Error;
use crate::list::StoryList;
use crate::path::Path;
use crate::types::ValueType;
use crate::Result;

/// A runtime value in a Fabula story.
///
/// Values are immutable and cheaply cloneable; the list payload uses
/// structural sharing. `Void` is the sentinel result of a function call
/// that returned nothing and is never a legal operand.
#[derive(Clone)]
pub enum Value {
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(Arc<str>),
    /// Symbolic divert-target address.
    DivertTarget(Path),
    /// Ordered-set list value.
    List(StoryList),
    /// The "no value" result of a function call.
    Void,
}

impl Value {
    /// Returns the type tag of this value.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Bool(_) => ValueType::Bool,
            Self::Int(_) => ValueType::Int,
            Self::Float(_) => ValueType::Float,
            Self::String(_) => ValueType::String,
            Self::DivertTarget(_) => ValueType::DivertTarget,
            Self::List(_) => ValueType::List,
            Self::Void => ValueType::Void,
        }
    }

    /// Returns this value's truth value.
    ///
    /// Numbers are truthy when non-zero, strings when non-empty, lists
    /// when non-empty. Divert targets and void have no defined
    /// truthiness; asking for one is a story diagnostic (fail closed).
    pub fn truthiness(&self) -> Result<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            Self::Int(n) => Ok(*n != 0),
            Self::Float(n) => Ok(*n != 0.0),
            Self::String(s) => Ok(!s.is_empty()),
            Self::List(list) => Ok(!list.is_empty()),
            Self::DivertTarget(_) | Self::Void => {
                Err(Error::truthiness_undefined(self.value_type()))
            }
        }
    }

    /// Casts this value to the target type.
    ///
    /// Identity casts always succeed. Bool/Int/Float promote among each
    /// other and format to String; String parses to Int/Float. Divert
    /// targets, lists, and void cast only to themselves.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn cast(&self, target: ValueType) -> Result<Value> {
        if self.value_type() == target {
            return Ok(self.clone());
        }
        match (self, target) {
            (Self::Bool(b), ValueType::Int) => Ok(Self::Int(i64::from(*b))),
            (Self::Bool(b), ValueType::Float) => Ok(Self::Float(if *b { 1.0 } else { 0.0 })),
            (Self::Bool(b), ValueType::String) => Ok(Self::String(b.to_string().into())),

            (Self::Int(n), ValueType::Bool) => Ok(Self::Bool(*n != 0)),
            (Self::Int(n), ValueType::Float) => Ok(Self::Float(*n as f64)),
            (Self::Int(n), ValueType::String) => Ok(Self::String(n.to_string().into())),

            (Self::Float(n), ValueType::Bool) => Ok(Self::Bool(*n != 0.0)),
            (Self::Float(n), ValueType::Int) => Ok(Self::Int(*n as i64)),
            (Self::Float(n), ValueType::String) => {
                Ok(Self::String(format_float(*n).into()))
            }

            (Self::String(s), ValueType::Int) => s
                .trim()
                .parse()
                .map(Self::Int)
                .map_err(|_| Error::bad_cast(ValueType::String, target)),
            (Self::String(s), ValueType::Float) => s
                .trim()
                .parse()
                .map(Self::Float)
                .map_err(|_| Error::bad_cast(ValueType::String, target)),

            _ => Err(Error::bad_cast(self.value_type(), target)),
        }
    }

    /// Attempts to extract an integer value.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a float value.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a list reference.
    #[must_use]
    pub const fn as_list(&self) -> Option<&StoryList> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    /// Attempts to extract a divert-target path reference.
    #[must_use]
    pub const fn as_divert_target(&self) -> Option<&Path> {
        match self {
            Self::DivertTarget(path) => Some(path),
            _ => None,
        }
    }
}

/// Formats a float the way story text does: integral values print
/// without a fractional part.
fn format_float(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{n:.0}")
    } else {
        n.to_string()
    }
}

// Implement PartialEq manually to handle float comparison: bit equality
// keeps Eq reflexive for NaN.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::DivertTarget(a), Self::DivertTarget(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Void, Self::Void) => true,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::DivertTarget(path) => write!(f, "-> {path}"),
            Self::List(list) => write!(f, "{list:?}"),
            Self::Void => write!(f, "void"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{}", format_float(*n)),
            Self::String(s) => write!(f, "{s}"),
            Self::DivertTarget(path) => write!(f, "-> {path}"),
            Self::List(list) => write!(f, "{list}"),
            Self::Void => Ok(()),
        }
    }
}

// Convenience From implementations: the construction factory the
// operator tables wrap raw results with.

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Path> for Value {
    fn from(path: Path) -> Self {
        Self::DivertTarget(path)
    }
}

impl From<StoryList> for Value {
    fn from(list: StoryList) -> Self {
        Self::List(list)
    }
}
