//! List walkers that require a proper list.

use ksu_value::{
    index_out_of_range, malformed_list, type_error, Args, Environment, EvalError, Thunk, Value,
};

use super::{operands, resume};

/// `list-ref(list, index)`: the element at zero-based `index`.
pub(super) fn list_ref(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    let [list, index, k] = operands::<3>("list-ref", args)?;
    let Value::Number(index) = index else {
        return Err(type_error("list-ref", "a number", index.type_name()));
    };
    let element = nth(&list, index)?;
    resume(&k, element)
}

fn nth(list: &Value, index: i64) -> Result<Value, EvalError> {
    let Ok(mut remaining) = usize::try_from(index) else {
        return Err(index_out_of_range(index));
    };
    let mut cursor = list;
    loop {
        match cursor {
            Value::Pair(pair) if remaining == 0 => return Ok(pair.first().clone()),
            Value::Pair(pair) => {
                remaining -= 1;
                cursor = pair.second();
            }
            Value::Nil => return Err(index_out_of_range(index)),
            other => return Err(malformed_list("list-ref", other.type_name())),
        }
    }
}
