//! Writer-argument packing rules.

use quipu_core::Value;

use crate::errors::AccessorError;

/// Pack writer arguments into the single value stored for a field.
///
/// Zero arguments is an arity error (`target` names the offending method or
/// field in the message); one argument is stored unwrapped; two or more are
/// stored as an ordered [`Value::List`] in call order. Values are never
/// coerced.
pub fn pack(target: &str, args: &[Value]) -> Result<Value, AccessorError> {
    match args {
        [] => Err(AccessorError::Arity {
            target: target.to_string(),
        }),
        [single] => Ok(single.clone()),
        many => Ok(Value::List(many.to_vec())),
    }
}
