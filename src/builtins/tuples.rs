//! Tuple builtins: Order, Null

use crate::error::EvalError;
use crate::value::Value;

fn expect_tuple<'a>(function: &str, arg: &'a Value) -> Result<&'a [Value], EvalError> {
    match arg {
        Value::Tuple(items) => Ok(items),
        other => Err(EvalError::type_error(function, "tuple", other, 1)),
    }
}

pub fn order(arg: &Value) -> Result<Value, EvalError> {
    let items = expect_tuple("Order", arg)?;
    Ok(Value::Int(items.len() as i64))
}

pub fn null(arg: &Value) -> Result<Value, EvalError> {
    let items = expect_tuple("Null", arg)?;
    Ok(Value::Truth(items.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_of_empty_tuple_is_zero() {
        // spec §8: ItoS(Order(nil)) = "0"
        assert!(matches!(order(&Value::Tuple(vec![])).unwrap(), Value::Int(0)));
    }

    #[test]
    fn test_order_counts_elements() {
        let t = Value::Tuple(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
        assert!(matches!(order(&t).unwrap(), Value::Int(3)));
    }

    #[test]
    fn test_null_true_for_empty_tuple() {
        assert!(matches!(null(&Value::Tuple(vec![])).unwrap(), Value::Truth(true)));
    }

    #[test]
    fn test_null_false_for_nonempty_tuple() {
        let t = Value::Tuple(vec![Value::Int(1)]);
        assert!(matches!(null(&t).unwrap(), Value::Truth(false)));
    }

    #[test]
    fn test_order_rejects_non_tuple() {
        assert!(order(&Value::Int(1)).is_err());
    }
}
