//! Type predicates: Isinteger, Isstring, Istuple, Isdummy, Isfunction, Istruthvalue
//!
//! Each takes exactly one argument of any type and returns a `Truth` of
//! whether it matches the named variant (spec §4.5).

use crate::error::EvalError;
use crate::value::Value;

pub fn is_integer(arg: &Value) -> Result<Value, EvalError> {
    Ok(Value::Truth(matches!(arg, Value::Int(_))))
}

pub fn is_string(arg: &Value) -> Result<Value, EvalError> {
    Ok(Value::Truth(matches!(arg, Value::Str(_))))
}

pub fn is_tuple(arg: &Value) -> Result<Value, EvalError> {
    Ok(Value::Truth(matches!(arg, Value::Tuple(_))))
}

pub fn is_dummy(arg: &Value) -> Result<Value, EvalError> {
    Ok(Value::Truth(matches!(arg, Value::Dummy)))
}

pub fn is_function(arg: &Value) -> Result<Value, EvalError> {
    Ok(Value::Truth(arg.is_function()))
}

pub fn is_truthvalue(arg: &Value) -> Result<Value, EvalError> {
    Ok(Value::Truth(matches!(arg, Value::Truth(_))))
}
