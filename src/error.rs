// ABOUTME: Error types for CSE-machine evaluation failures

use crate::value::Value;
use thiserror::Error;

// ===== Common arity-description strings (mirrors teacher's ARITY_* constants) =====
pub const ARITY_ONE: &str = "1";
pub const ARITY_TWO: &str = "2";
pub const ARITY_TWO_CURRIED: &str = "2 (curried)";

/// All errors the CSE machine can raise. Per spec §7, every variant is
/// fatal: there is no `try`/recovery construct in RPAL, and the evaluator
/// has no recovery path once one of these escapes `Evaluator::run`.
#[derive(Error, Debug, Clone)]
pub enum EvalError {
    /// An operator or builtin received a value of the wrong variant.
    #[error("{function}: expected {expected}, got {actual} at argument {position}")]
    TypeMismatch {
        function: String,
        expected: String,
        actual: String,
        position: usize,
    },

    /// A builtin or multi-binding lambda received the wrong number of
    /// arguments, or a tuple was selected/applied with arity mismatch.
    #[error("{function}: expected {expected} argument{}, got {actual}", if *.expected == "1" { "" } else { "s" })]
    ArityError {
        function: String,
        expected: String,
        actual: usize,
    },

    /// Tuple selection (gamma applied to a tuple) with an out-of-range index.
    #[error("tuple index {index} out of range for tuple of arity {arity} (1-based)")]
    TupleIndexOutOfBounds { index: i64, arity: usize },

    /// Name missing from the environment chain and not a reserved identifier.
    #[error("undeclared identifier: {0}")]
    UndeclaredIdentifier(String),

    /// Gamma applied to a value that is not a lambda, eta, tuple or builtin.
    #[error("not a function: {0}")]
    NotAFunction(String),

    /// Integer division or modulo by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Control/value stack underflow, or any other state reachable only if
    /// the Delta compiler or standardizer produced a malformed program.
    #[error("malformed control sequence: {0}")]
    MalformedControl(String),
}

impl EvalError {
    pub fn type_error(function: &str, expected: &str, actual: &Value, position: usize) -> Self {
        EvalError::TypeMismatch {
            function: function.to_string(),
            expected: expected.to_string(),
            actual: actual.type_name().to_string(),
            position,
        }
    }

    pub fn arity_error(function: &str, expected: impl Into<String>, actual: usize) -> Self {
        EvalError::ArityError {
            function: function.to_string(),
            expected: expected.into(),
            actual,
        }
    }

    pub fn tuple_index_error(index: i64, arity: usize) -> Self {
        EvalError::TupleIndexOutOfBounds { index, arity }
    }

    pub fn undeclared_identifier(name: impl Into<String>) -> Self {
        EvalError::UndeclaredIdentifier(name.into())
    }

    pub fn not_a_function(value: &Value) -> Self {
        EvalError::NotAFunction(value.type_name().to_string())
    }

    /// A pop from the control or value stack came up empty. This should be
    /// unreachable for any program the Delta compiler produced; see spec §7
    /// "Malformed AST".
    pub fn stack_underflow() -> Self {
        EvalError::MalformedControl("stack underflow".to_string())
    }
}
