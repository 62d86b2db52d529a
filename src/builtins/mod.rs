//! # Built-in Functions
//!
//! The reserved identifiers of spec §6, organized into categories the way
//! the predicate/string/tuple/io split in spec §4.5 suggests:
//!
//! - **[predicates]** (6): Isinteger, Isstring, Istuple, Isdummy, Isfunction, Istruthvalue
//! - **[strings]** (3): Stem, Stern, Conc/conc
//! - **[conversions]** (2): ItoS, neg
//! - **[tuples]** (2): Order, Null
//! - **[io]** (2): Print/print
//!
//! `Y*` is handled directly in `eval::Evaluator::apply_gamma` (Rule 3) since
//! it doesn't dispatch like an ordinary builtin — it builds an `Eta` value
//! rather than computing a result from its operand.

pub mod conversions;
pub mod io;
pub mod predicates;
pub mod strings;
pub mod tuples;

use crate::control::ControlItem;
use crate::error::EvalError;
use crate::value::Value;

/// The reserved identifier set (spec §6), including both spellings of the
/// two builtins with synonyms.
pub const RESERVED_IDENTIFIERS: &[&str] = &[
    "Isinteger",
    "Isstring",
    "Istuple",
    "Isdummy",
    "Istruthvalue",
    "Isfunction",
    "ItoS",
    "Order",
    "Conc",
    "conc",
    "Stern",
    "Stem",
    "Null",
    "Print",
    "print",
    "neg",
    "Y*",
];

pub fn is_reserved(name: &str) -> bool {
    RESERVED_IDENTIFIERS.contains(&name)
}

/// Maps a reserved identifier's synonym to its canonical spelling
/// (`conc`/`Conc` -> `Conc`, `print`/`Print` -> `Print`); all other names
/// pass through unchanged.
fn canonical(name: &str) -> &str {
    match name {
        "conc" => "Conc",
        "print" => "Print",
        other => other,
    }
}

/// Dispatches a non-`Y*` builtin application. `Y*` is intercepted before
/// this is called (see module docs); everything else here is arity-1 except
/// `Conc`, which reaches into the control/value stacks to consume its
/// curried second application (spec §4.5).
pub fn dispatch(
    name: &str,
    rand: Value,
    control_stack: &mut Vec<ControlItem>,
    value_stack: &mut Vec<Value>,
) -> Result<Value, EvalError> {
    match canonical(name) {
        "Isinteger" => predicates::is_integer(&rand),
        "Isstring" => predicates::is_string(&rand),
        "Istuple" => predicates::is_tuple(&rand),
        "Isdummy" => predicates::is_dummy(&rand),
        "Istruthvalue" => predicates::is_truthvalue(&rand),
        "Isfunction" => predicates::is_function(&rand),
        "Stem" => strings::stem(&rand),
        "Stern" => strings::stern(&rand),
        "Conc" => strings::conc(&rand, control_stack, value_stack),
        "ItoS" => conversions::itos(&rand),
        "neg" => conversions::neg(&rand),
        "Order" => tuples::order(&rand),
        "Null" => tuples::null(&rand),
        "Print" => io::print(&rand),
        other => Err(EvalError::undeclared_identifier(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_set_contains_synonyms() {
        assert!(is_reserved("Conc"));
        assert!(is_reserved("conc"));
        assert!(is_reserved("Print"));
        assert!(is_reserved("print"));
        assert!(is_reserved("Y*"));
        assert!(!is_reserved("not_a_builtin"));
    }

    #[test]
    fn test_dispatch_routes_by_canonical_name() {
        let mut control_stack = Vec::new();
        let mut value_stack = Vec::new();
        let result = dispatch("print", Value::Int(5), &mut control_stack, &mut value_stack)
            .unwrap();
        assert!(matches!(result, Value::Dummy));
    }

    #[test]
    fn test_dispatch_unknown_reserved_name_is_undeclared() {
        // Not reachable from the evaluator (guarded by `is_reserved`), but
        // `dispatch` itself should fail closed rather than panic.
        let mut control_stack = Vec::new();
        let mut value_stack = Vec::new();
        let err = dispatch("nonsense", Value::Int(1), &mut control_stack, &mut value_stack)
            .unwrap_err();
        assert!(matches!(err, EvalError::UndeclaredIdentifier(_)));
    }
}
