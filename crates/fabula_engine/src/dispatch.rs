//! The invocation facade and list-aware dispatch.
//!
//! [`NativeOp`] is a flyweight handle onto one canonical operator
//! definition in the process-wide registry; every observable property
//! (name, arity, the per-type table) reads through the shared
//! definition, which is built once and never rebuilt per call site.

use fabula_foundation::{Error, Result, StoryList, Value, ValueType};

use crate::coerce::coerce_to_single_type;
use crate::names;
use crate::registry::{self, OpFn, OperatorDef};

/// A call-site handle onto a registered native operator.
///
/// Cheap to construct and copy: resolution against the canonical
/// definition happens once, in [`NativeOp::from_name`].
#[derive(Clone, Copy)]
pub struct NativeOp {
    def: &'static OperatorDef,
}

impl NativeOp {
    /// Resolves a handle for the named operator, building the registry
    /// on first use. Returns `None` for unrecognized names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        registry::operators().get(name).map(|def| Self { def })
    }

    /// Returns true if `name` is a recognized native operator.
    #[must_use]
    pub fn exists(name: &str) -> bool {
        registry::operators().contains_key(name)
    }

    /// The operator's canonical name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.def.name()
    }

    /// The operator's fixed arity (1 or 2).
    #[must_use]
    pub fn arity(&self) -> usize {
        self.def.arity()
    }

    /// Evaluates the operator over the given operands.
    ///
    /// Operand count must match the operator's arity; void operands are
    /// rejected; binary calls with a list operand take the list-aware
    /// path; everything else is coerced to a single type and applied
    /// through the per-type table.
    pub fn call(&self, operands: &[Value]) -> Result<Value> {
        if operands.len() != self.arity() {
            return Err(Error::arity_mismatch(
                self.name(),
                self.arity(),
                operands.len(),
            ));
        }

        if operands.iter().any(|v| matches!(v, Value::Void)) {
            return Err(Error::void_operand(self.name()));
        }

        let has_list = operands.iter().any(|v| matches!(v, Value::List(_)));
        if let [lhs, rhs] = operands {
            if has_list {
                return self.call_binary_list(lhs, rhs);
            }
        }

        let coerced = coerce_to_single_type(operands)?;
        self.apply(&coerced)
    }

    /// Applies the table entry for the operands' (already common) type.
    fn apply(&self, operands: &[Value]) -> Result<Value> {
        let ty = operands[0].value_type();
        let Some(op) = self.def.op_for(ty) else {
            return Err(Error::unsupported_type(self.name(), ty));
        };
        match (op, operands) {
            (OpFn::Binary(f), [a, b]) => f(a, b),
            (OpFn::Unary(f), [a]) => f(a),
            _ => Err(Error::internal(format!(
                "table entry for {} does not match its operand count",
                self.name()
            ))),
        }
    }

    /// Binary dispatch when at least one operand is a list.
    fn call_binary_list(&self, lhs: &Value, rhs: &Value) -> Result<Value> {
        // List ± Int is increment/decrement, not coercion
        if matches!(self.name(), names::ADD | names::SUBTRACT) {
            if let (Value::List(list), Value::Int(n)) = (lhs, rhs) {
                return self.call_list_increment(list, *n);
            }
        }

        let (left_type, right_type) = (lhs.value_type(), rhs.value_type());

        // Logical operators reduce mixed operands to their truthiness
        // and run on the int table; types with no defined truthiness
        // (divert targets) fail closed.
        if matches!(self.name(), names::AND | names::OR)
            && (left_type != ValueType::List || right_type != ValueType::List)
        {
            let a = Value::Int(i64::from(lhs.truthiness()?));
            let b = Value::Int(i64::from(rhs.truthiness()?));
            let Some(OpFn::Binary(f)) = self.def.op_for(ValueType::Int) else {
                return Err(Error::internal(format!(
                    "no int table entry for logical operator {}",
                    self.name()
                )));
            };
            return f(&a, &b);
        }

        if left_type == ValueType::List && right_type == ValueType::List {
            return self.apply(&[lhs.clone(), rhs.clone()]);
        }

        Err(Error::invalid_list_pair(self.name(), left_type, right_type))
    }

    /// List increment/decrement: shifts every entry's value through the
    /// int table's `+`/`-` and keeps only targets that exist in the
    /// entry's origin. Out-of-range targets are silently dropped; the
    /// source list is never touched.
    fn call_list_increment(&self, list: &StoryList, n: i64) -> Result<Value> {
        let Some(OpFn::Binary(int_op)) = self.def.op_for(ValueType::Int) else {
            return Err(Error::internal(format!(
                "no int table entry for {} during list increment",
                self.name()
            )));
        };

        let mut result = StoryList::new();
        for (item, value) in list.iter() {
            let target = match int_op(&Value::Int(*value), &Value::Int(n))? {
                Value::Int(target) => target,
                other => {
                    return Err(Error::internal(format!(
                        "int table entry for {} produced a {} value",
                        self.name(),
                        other.value_type()
                    )));
                }
            };

            // Linear scan; origin sets are small
            let origin = list
                .origins()
                .iter()
                .find(|origin| origin.name() == item.origin_name());
            if let Some(origin) = origin {
                if let Some(shifted) = origin.item_with_value(target) {
                    result.add(shifted, target);
                }
            }
        }
        for origin in list.origins() {
            result.add_origin(origin.clone());
        }

        Ok(Value::List(result))
    }
}

/// Evaluates the named operator over the given operands.
///
/// This is the single execution entry point the stack machine uses. An
/// unrecognized name is an internal error: the compiler should never
/// emit one.
pub fn call(name: &str, operands: &[Value]) -> Result<Value> {
    NativeOp::from_name(name)
        .ok_or_else(|| Error::unknown_operator(name))?
        .call(operands)
}

/// Returns true if `name` is a recognized native operator.
#[must_use]
pub fn exists(name: &str) -> bool {
    NativeOp::exists(name)
}
