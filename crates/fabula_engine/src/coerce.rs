//! The type lattice and coercion resolver.
//!
//! Before an operator's table is consulted, all operands are brought to
//! one common type: the *widest* type tag among them under the fixed
//! ordering `Bool < Int < Float < String < DivertTarget < List`. Lists
//! get a special promotion rule: an integer operand can stand for the
//! item with that value in the list's origin.

use fabula_foundation::{Error, Result, StoryList, Value, ValueType};

/// The widest type tag among the operands, seeded with `Int`.
///
/// Seeding with `Int` means a pure-`Bool` operand set still evaluates on
/// the int tables, which is where boolean logic is registered.
pub(crate) fn widest_type(operands: &[Value]) -> ValueType {
    operands
        .iter()
        .map(Value::value_type)
        .fold(ValueType::Int, Ord::max)
}

/// Casts every operand to the operands' common type.
///
/// When the widest type is `List`, list operands pass through untouched
/// and integer operands are promoted against the origin of the list's
/// maximum item; any other type alongside a list is a mixing diagnostic.
/// Otherwise each operand is cast via its own cast operation.
pub(crate) fn coerce_to_single_type(operands: &[Value]) -> Result<Vec<Value>> {
    let widest = widest_type(operands);

    if widest == ValueType::List {
        let special_case_list = operands.iter().find_map(Value::as_list);
        return operands
            .iter()
            .map(|operand| match operand {
                Value::List(_) => Ok(operand.clone()),
                Value::Int(n) => {
                    let list = special_case_list
                        .ok_or_else(|| Error::internal("list coercion without a list operand"))?;
                    promote_int_to_list(*n, list)
                }
                other => Err(Error::list_type_mix(other.value_type())),
            })
            .collect();
    }

    operands.iter().map(|operand| operand.cast(widest)).collect()
}

/// Resolves an integer against the origin of the list's maximum item,
/// producing a singleton list carrying that origin.
fn promote_int_to_list(n: i64, list: &StoryList) -> Result<Value> {
    let Some(origin) = list.origin_of_max_item() else {
        // An empty list has no maximum item, hence no origin to search.
        return Err(Error::list_item_not_found(n, "the operand list's origin"));
    };
    match origin.item_with_value(n) {
        Some(item) => Ok(Value::List(StoryList::singleton(item, n, origin))),
        None => Err(Error::list_item_not_found(n, origin.name())),
    }
}
