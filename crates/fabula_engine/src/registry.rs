//! The process-wide operator table registry.
//!
//! Every native operator is described by one canonical [`OperatorDef`]:
//! a name, a fixed arity, and a per-type table of implementation
//! functions. The registry is populated exactly once, on first use,
//! behind a [`OnceLock`] initialization barrier, and is read-only
//! afterwards.

#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::float_cmp)]

use std::collections::HashMap;
use std::sync::OnceLock;

use fabula_foundation::{Error, ErrorKind, Path, Result, StoryList, Value, ValueType};

use crate::names;

/// A registered implementation for one (operator, type) pair.
///
/// The functions are pure: raw payloads in, raw result out, wrapped
/// back into a [`Value`]. Each entry pattern-matches the payload variant
/// it was registered for; receiving anything else is a dispatch bug.
pub(crate) enum OpFn {
    /// One-operand implementation.
    Unary(Box<dyn Fn(&Value) -> Result<Value> + Send + Sync>),
    /// Two-operand implementation.
    Binary(Box<dyn Fn(&Value, &Value) -> Result<Value> + Send + Sync>),
}

/// The canonical definition of one native operator.
pub(crate) struct OperatorDef {
    name: &'static str,
    arity: usize,
    table: [Option<OpFn>; ValueType::COUNT],
}

impl OperatorDef {
    fn new(name: &'static str, arity: usize) -> Self {
        Self {
            name,
            arity,
            table: std::array::from_fn(|_| None),
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn arity(&self) -> usize {
        self.arity
    }

    /// The implementation registered for the given operand type, if any.
    pub(crate) fn op_for(&self, ty: ValueType) -> Option<&OpFn> {
        self.table[ty.rank()].as_ref()
    }
}

/// Returns the process-wide operator table, building it on first use.
pub(crate) fn operators() -> &'static HashMap<&'static str, OperatorDef> {
    static OPERATORS: OnceLock<HashMap<&'static str, OperatorDef>> = OnceLock::new();
    OPERATORS.get_or_init(build)
}

#[derive(Default)]
struct Builder {
    defs: HashMap<&'static str, OperatorDef>,
}

impl Builder {
    /// Registers one (operator, type) implementation, creating the
    /// canonical definition on first sight of the name. Arity is fixed
    /// at first registration per name.
    fn register(&mut self, name: &'static str, arity: usize, ty: ValueType, op: OpFn) {
        let def = self
            .defs
            .entry(name)
            .or_insert_with(|| OperatorDef::new(name, arity));
        debug_assert_eq!(def.arity, arity, "arity of {name} fixed at first registration");
        def.table[ty.rank()] = Some(op);
    }

    fn int_binary(&mut self, name: &'static str, f: fn(i64, i64) -> Result<Value>) {
        self.register(
            name,
            2,
            ValueType::Int,
            OpFn::Binary(Box::new(move |a, b| match (a, b) {
                (Value::Int(x), Value::Int(y)) => f(*x, *y),
                _ => Err(table_bug(name, ValueType::Int)),
            })),
        );
    }

    fn int_unary(&mut self, name: &'static str, f: fn(i64) -> Result<Value>) {
        self.register(
            name,
            1,
            ValueType::Int,
            OpFn::Unary(Box::new(move |a| match a {
                Value::Int(x) => f(*x),
                _ => Err(table_bug(name, ValueType::Int)),
            })),
        );
    }

    fn float_binary(&mut self, name: &'static str, f: fn(f64, f64) -> Result<Value>) {
        self.register(
            name,
            2,
            ValueType::Float,
            OpFn::Binary(Box::new(move |a, b| match (a, b) {
                (Value::Float(x), Value::Float(y)) => f(*x, *y),
                _ => Err(table_bug(name, ValueType::Float)),
            })),
        );
    }

    fn float_unary(&mut self, name: &'static str, f: fn(f64) -> Result<Value>) {
        self.register(
            name,
            1,
            ValueType::Float,
            OpFn::Unary(Box::new(move |a| match a {
                Value::Float(x) => f(*x),
                _ => Err(table_bug(name, ValueType::Float)),
            })),
        );
    }

    fn string_binary(&mut self, name: &'static str, f: fn(&str, &str) -> Result<Value>) {
        self.register(
            name,
            2,
            ValueType::String,
            OpFn::Binary(Box::new(move |a, b| match (a, b) {
                (Value::String(x), Value::String(y)) => f(x, y),
                _ => Err(table_bug(name, ValueType::String)),
            })),
        );
    }

    fn list_binary(&mut self, name: &'static str, f: fn(&StoryList, &StoryList) -> Result<Value>) {
        self.register(
            name,
            2,
            ValueType::List,
            OpFn::Binary(Box::new(move |a, b| match (a, b) {
                (Value::List(x), Value::List(y)) => f(x, y),
                _ => Err(table_bug(name, ValueType::List)),
            })),
        );
    }

    fn list_unary(&mut self, name: &'static str, f: fn(&StoryList) -> Result<Value>) {
        self.register(
            name,
            1,
            ValueType::List,
            OpFn::Unary(Box::new(move |a| match a {
                Value::List(x) => f(x),
                _ => Err(table_bug(name, ValueType::List)),
            })),
        );
    }

    fn divert_binary(&mut self, name: &'static str, f: fn(&Path, &Path) -> Result<Value>) {
        self.register(
            name,
            2,
            ValueType::DivertTarget,
            OpFn::Binary(Box::new(move |a, b| match (a, b) {
                (Value::DivertTarget(x), Value::DivertTarget(y)) => f(x, y),
                _ => Err(table_bug(name, ValueType::DivertTarget)),
            })),
        );
    }
}

fn table_bug(name: &str, ty: ValueType) -> Error {
    Error::internal(format!(
        "{ty} table entry for {name} applied to a differently-typed operand"
    ))
}

#[allow(clippy::too_many_lines)]
fn build() -> HashMap<&'static str, OperatorDef> {
    let mut b = Builder::default();

    // Int operations. Arithmetic wraps on overflow so every call is
    // total: `i64::MIN / -1` and `i64::MIN % -1` would otherwise panic,
    // as would `+`/`-`/`*`/negate at the i64 limits in debug builds.
    b.int_binary(names::ADD, |x, y| Ok(Value::Int(x.wrapping_add(y))));
    b.int_binary(names::SUBTRACT, |x, y| Ok(Value::Int(x.wrapping_sub(y))));
    b.int_binary(names::MULTIPLY, |x, y| Ok(Value::Int(x.wrapping_mul(y))));
    b.int_binary(names::DIVIDE, |x, y| {
        if y == 0 {
            Err(Error::new(ErrorKind::DivisionByZero))
        } else {
            // Truncates toward zero
            Ok(Value::Int(x.wrapping_div(y)))
        }
    });
    b.int_binary(names::MOD, |x, y| {
        if y == 0 {
            Err(Error::new(ErrorKind::DivisionByZero))
        } else {
            Ok(Value::Int(x.wrapping_rem(y)))
        }
    });
    b.int_unary(names::NEGATE, |x| Ok(Value::Int(x.wrapping_neg())));

    b.int_binary(names::EQUAL, |x, y| Ok(Value::Int(i64::from(x == y))));
    b.int_binary(names::GREATER, |x, y| Ok(Value::Int(i64::from(x > y))));
    b.int_binary(names::LESS, |x, y| Ok(Value::Int(i64::from(x < y))));
    b.int_binary(names::GREATER_OR_EQUALS, |x, y| {
        Ok(Value::Int(i64::from(x >= y)))
    });
    b.int_binary(names::LESS_OR_EQUALS, |x, y| {
        Ok(Value::Int(i64::from(x <= y)))
    });
    b.int_binary(names::NOT_EQUALS, |x, y| Ok(Value::Int(i64::from(x != y))));
    b.int_unary(names::NOT, |x| Ok(Value::Int(i64::from(x == 0))));

    b.int_binary(names::AND, |x, y| {
        Ok(Value::Int(i64::from(x != 0 && y != 0)))
    });
    b.int_binary(names::OR, |x, y| {
        Ok(Value::Int(i64::from(x != 0 || y != 0)))
    });

    b.int_binary(names::MIN, |x, y| Ok(Value::Int(x.min(y))));
    b.int_binary(names::MAX, |x, y| Ok(Value::Int(x.max(y))));

    // Float operations
    b.float_binary(names::ADD, |x, y| Ok(Value::Float(x + y)));
    b.float_binary(names::SUBTRACT, |x, y| Ok(Value::Float(x - y)));
    b.float_binary(names::MULTIPLY, |x, y| Ok(Value::Float(x * y)));
    b.float_binary(names::DIVIDE, |x, y| Ok(Value::Float(x / y)));
    // Truncated IEEE remainder: the result takes the dividend's sign
    b.float_binary(names::MOD, |x, y| Ok(Value::Float(x % y)));
    b.float_unary(names::NEGATE, |x| Ok(Value::Float(-x)));

    b.float_binary(names::EQUAL, |x, y| Ok(Value::Int(i64::from(x == y))));
    b.float_binary(names::GREATER, |x, y| Ok(Value::Int(i64::from(x > y))));
    b.float_binary(names::LESS, |x, y| Ok(Value::Int(i64::from(x < y))));
    b.float_binary(names::GREATER_OR_EQUALS, |x, y| {
        Ok(Value::Int(i64::from(x >= y)))
    });
    b.float_binary(names::LESS_OR_EQUALS, |x, y| {
        Ok(Value::Int(i64::from(x <= y)))
    });
    b.float_binary(names::NOT_EQUALS, |x, y| {
        Ok(Value::Int(i64::from(x != y)))
    });
    b.float_unary(names::NOT, |x| Ok(Value::Int(i64::from(x == 0.0))));

    b.float_binary(names::AND, |x, y| {
        Ok(Value::Int(i64::from(x != 0.0 && y != 0.0)))
    });
    b.float_binary(names::OR, |x, y| {
        Ok(Value::Int(i64::from(x != 0.0 || y != 0.0)))
    });

    b.float_binary(names::MIN, |x, y| Ok(Value::Float(x.min(y))));
    b.float_binary(names::MAX, |x, y| Ok(Value::Float(x.max(y))));

    // String operations
    b.string_binary(names::ADD, |x, y| Ok(Value::String(format!("{x}{y}").into())));
    b.string_binary(names::EQUAL, |x, y| Ok(Value::Int(i64::from(x == y))));
    b.string_binary(names::NOT_EQUALS, |x, y| {
        Ok(Value::Int(i64::from(x != y)))
    });
    b.string_binary(names::HAS, |x, y| {
        Ok(Value::Int(i64::from(x.contains(y))))
    });
    b.string_binary(names::HASNT, |x, y| {
        Ok(Value::Int(i64::from(!x.contains(y))))
    });

    // List operations
    b.list_binary(names::ADD, |x, y| Ok(Value::List(x.union(y))));
    b.list_binary(names::SUBTRACT, |x, y| Ok(Value::List(x.without(y))));
    b.list_binary(names::HAS, |x, y| Ok(Value::Int(i64::from(x.contains(y)))));
    b.list_binary(names::HASNT, |x, y| {
        Ok(Value::Int(i64::from(!x.contains(y))))
    });
    b.list_binary(names::INTERSECT, |x, y| Ok(Value::List(x.intersect(y))));

    b.list_binary(names::EQUAL, |x, y| Ok(Value::Int(i64::from(x == y))));
    b.list_binary(names::GREATER, |x, y| {
        Ok(Value::Int(i64::from(x.greater_than(y))))
    });
    b.list_binary(names::LESS, |x, y| {
        Ok(Value::Int(i64::from(x.less_than(y))))
    });
    b.list_binary(names::GREATER_OR_EQUALS, |x, y| {
        Ok(Value::Int(i64::from(x.greater_than_or_equals(y))))
    });
    b.list_binary(names::LESS_OR_EQUALS, |x, y| {
        Ok(Value::Int(i64::from(x.less_than_or_equals(y))))
    });
    b.list_binary(names::NOT_EQUALS, |x, y| Ok(Value::Int(i64::from(x != y))));

    b.list_binary(names::AND, |x, y| {
        Ok(Value::Int(i64::from(!x.is_empty() && !y.is_empty())))
    });
    b.list_binary(names::OR, |x, y| {
        Ok(Value::Int(i64::from(!x.is_empty() || !y.is_empty())))
    });

    b.list_unary(names::NOT, |x| Ok(Value::Int(i64::from(x.is_empty()))));

    b.list_unary(names::LIST_INVERT, |x| Ok(Value::List(x.inverse())));
    b.list_unary(names::LIST_ALL, |x| Ok(Value::List(x.all())));
    b.list_unary(names::LIST_MIN, |x| Ok(Value::List(x.min_as_list())));
    b.list_unary(names::LIST_MAX, |x| Ok(Value::List(x.max_as_list())));
    #[allow(clippy::cast_possible_wrap)]
    b.list_unary(names::LIST_COUNT, |x| Ok(Value::Int(x.count() as i64)));
    b.list_unary(names::LIST_VALUE, |x| {
        Ok(Value::Int(x.max_item().map_or(0, |(_, v)| v)))
    });

    // Special case: the only operation you can do on divert targets
    b.divert_binary(names::EQUAL, |x, y| Ok(Value::Int(i64::from(x == y))));

    b.defs
}
