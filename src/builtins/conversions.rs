//! Conversion and arithmetic-adjacent builtins: ItoS, neg
//!
//! `neg` is the reserved-identifier spelling of integer negation, distinct
//! from the `Neg` operator token a standardized AST emits for `-x` syntax
//! (spec §6 reserved identifier set; see `eval::apply_operator` for the
//! operator form).

use crate::error::EvalError;
use crate::value::Value;

fn expect_int(function: &str, arg: &Value) -> Result<i64, EvalError> {
    match arg {
        Value::Int(n) => Ok(*n),
        other => Err(EvalError::type_error(function, "integer", other, 1)),
    }
}

pub fn itos(arg: &Value) -> Result<Value, EvalError> {
    let n = expect_int("ItoS", arg)?;
    Ok(Value::Str(n.to_string()))
}

pub fn neg(arg: &Value) -> Result<Value, EvalError> {
    let n = expect_int("neg", arg)?;
    Ok(Value::Int(-n))
}
