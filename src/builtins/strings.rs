//! String builtins: Stem, Stern, Conc/conc
//!
//! `Conc` is the one curried builtin in the reserved set (spec §4.5): the
//! second application arrives as a second `Gamma` still sitting on the
//! control stack rather than as a second `rand` handed to this dispatch in
//! one shot, so it alone needs access to the control and value stacks.

use crate::control::ControlItem;
use crate::error::{EvalError, ARITY_TWO_CURRIED};
use crate::value::Value;

fn expect_str<'a>(function: &str, arg: &'a Value) -> Result<&'a str, EvalError> {
    match arg {
        Value::Str(s) => Ok(s),
        other => Err(EvalError::type_error(function, "string", other, 1)),
    }
}

pub fn stem(arg: &Value) -> Result<Value, EvalError> {
    let s = expect_str("Stem", arg)?;
    Ok(Value::Str(s.chars().next().map(|c| c.to_string()).unwrap_or_default()))
}

pub fn stern(arg: &Value) -> Result<Value, EvalError> {
    let s = expect_str("Stern", arg)?;
    Ok(Value::Str(s.chars().skip(1).collect()))
}

/// `(Conc a) b` — `a` is the already-popped `rand` of the first gamma
/// reduction; this pops the extra `Gamma` the Delta compiler emitted for the
/// second application, then the second operand underneath it.
pub fn conc(
    a: &Value,
    control_stack: &mut Vec<ControlItem>,
    value_stack: &mut Vec<Value>,
) -> Result<Value, EvalError> {
    let a = expect_str("Conc", a)?.to_string();
    match control_stack.pop() {
        Some(ControlItem::Gamma) => {}
        _ => return Err(EvalError::arity_error("Conc", ARITY_TWO_CURRIED, 1)),
    }
    let b_val = value_stack.pop().ok_or_else(EvalError::stack_underflow)?;
    let b = expect_str("Conc", &b_val)?;
    Ok(Value::Str(format!("{a}{b}")))
}
