use ksu_value::{not_a_string, Args, Environment, EvalError, Thunk, Value};

use super::{operands, resume};

/// `string->symbol`: a symbol with the same text.
pub(super) fn string_to_symbol(_env: &Environment, args: Args) -> Result<Thunk, EvalError> {
    let [text, k] = operands::<2>("string->symbol", args)?;
    let Some(text) = text.as_str() else {
        return Err(not_a_string("string->symbol", text.type_name()));
    };
    resume(&k, Value::symbol(text))
}
