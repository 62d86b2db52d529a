//! Console I/O: Print, print
//!
//! Writes a value's canonical printed form (spec §4.5, `Value`'s `Display`
//! impl) to standard output and returns `Dummy`. This is the machine's only
//! side effect (spec §5).

use crate::error::EvalError;
use crate::value::Value;

pub fn print(arg: &Value) -> Result<Value, EvalError> {
    print!("{arg}");
    Ok(Value::Dummy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_returns_dummy() {
        // Output goes to stdout; we only assert the return value here since
        // capturing stdout is out of scope for a unit test.
        assert!(matches!(print(&Value::Int(5)).unwrap(), Value::Dummy));
    }
}
