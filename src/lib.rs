// ABOUTME: Library module exposing the CSE machine's public API

pub mod ast;
pub mod builtins;
pub mod config;
pub mod control;
pub mod delta;
pub mod env;
pub mod error;
pub mod eval;
pub mod value;

use env::Environment;
use error::EvalError;
use value::Value;

/// Compiles `ast` and runs it to completion against a fresh global
/// environment, per spec §6's top-level `evaluate(ast) -> Value` contract.
pub fn evaluate(ast: &ast::Ast) -> Result<Value, EvalError> {
    let program = delta::compile(ast);
    let evaluator = eval::Evaluator::new(&program);
    evaluator.run(std::rc::Rc::clone(&program.root), Environment::new())
}

/// As [`evaluate`], but enforces `max_depth` on lambda-application nesting
/// (spec §9 Design Notes; see `SPEC_FULL.md` §A.6).
pub fn evaluate_with_max_depth(ast: &ast::Ast, max_depth: usize) -> Result<Value, EvalError> {
    let program = delta::compile(ast);
    let evaluator = eval::Evaluator::with_max_depth(&program, max_depth);
    evaluator.run(std::rc::Rc::clone(&program.root), Environment::new())
}
