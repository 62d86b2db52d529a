// ABOUTME: The evaluator — the CSE machine's reduction-rule dispatcher

use crate::ast::Operator;
use crate::builtins;
use crate::control::ControlItem;
use crate::delta::DeltaProgram;
use crate::env::Environment;
use crate::error::EvalError;
use crate::value::{Closure, Value};
use std::rc::Rc;

/// Drives one `DeltaProgram` to completion.
///
/// Holds the lambda body table (`DeltaProgram::bodies`) and an optional
/// recursion-depth guard (`SPEC_FULL.md` §A.6); everything else — the
/// control stack, value stack and current environment — is local to each
/// activation, matching spec §4.3/§5's description of a fresh control stack
/// per lambda application.
pub struct Evaluator<'a> {
    bodies: &'a [Rc<Vec<ControlItem>>],
    max_depth: Option<usize>,
}

impl<'a> Evaluator<'a> {
    pub fn new(program: &'a DeltaProgram) -> Self {
        Evaluator {
            bodies: &program.bodies,
            max_depth: None,
        }
    }

    pub fn with_max_depth(program: &'a DeltaProgram, max_depth: usize) -> Self {
        Evaluator {
            bodies: &program.bodies,
            max_depth: Some(max_depth),
        }
    }

    /// Runs the root control sequence against the primordial environment.
    /// On success, the value stack holds exactly one value (spec §8 value
    /// stack balance invariant).
    pub fn run(&self, root: Rc<Vec<ControlItem>>, global_env: Rc<Environment>) -> Result<Value, EvalError> {
        let mut value_stack = Vec::new();
        self.eval_sequence(root, global_env, &mut value_stack, 0)?;
        if value_stack.len() != 1 {
            return Err(EvalError::MalformedControl(format!(
                "value stack held {} values after evaluation, expected 1",
                value_stack.len()
            )));
        }
        Ok(value_stack.pop().unwrap())
    }

    /// Loads `seq` onto a fresh control stack and drives it to exhaustion.
    /// `value_stack` is shared with the caller — the only state that
    /// survives across activations (spec §5).
    fn eval_sequence(
        &self,
        seq: Rc<Vec<ControlItem>>,
        env: Rc<Environment>,
        value_stack: &mut Vec<Value>,
        depth: usize,
    ) -> Result<(), EvalError> {
        if let Some(max) = self.max_depth {
            if depth > max {
                return Err(EvalError::MalformedControl(
                    "recursion depth exceeded".to_string(),
                ));
            }
        }

        let mut control_stack: Vec<ControlItem> = seq.iter().rev().cloned().collect();
        let mut current_env = env;

        while let Some(item) = control_stack.pop() {
            self.step(item, &mut control_stack, value_stack, &mut current_env, depth)?;
        }
        Ok(())
    }

    fn step(
        &self,
        item: ControlItem,
        control_stack: &mut Vec<ControlItem>,
        value_stack: &mut Vec<Value>,
        env: &mut Rc<Environment>,
        depth: usize,
    ) -> Result<(), EvalError> {
        match item {
            // Rule: literal control items push their value directly.
            ControlItem::Literal(v) => value_stack.push(v),

            // Rule 1 — Name.
            ControlItem::Name(name) => {
                if let Some(v) = env.lookup(&name) {
                    value_stack.push(v);
                } else if builtins::is_reserved(&name) {
                    value_stack.push(Value::Builtin(name));
                } else {
                    return Err(EvalError::undeclared_identifier(name));
                }
            }

            // Rule 2 — LambdaForm.
            ControlItem::LambdaForm { bound_vars, body_index } => {
                value_stack.push(Value::Lambda(Closure {
                    bound_vars,
                    body_index,
                    env: Rc::clone(env),
                }));
            }

            // Rule 3 — Gamma.
            ControlItem::Gamma => self.apply_gamma(control_stack, value_stack, depth)?,

            // Rule 4 — Beta.
            ControlItem::Beta { then_seq, else_seq } => {
                let cond = value_stack.pop().ok_or_else(EvalError::stack_underflow)?;
                let Value::Truth(b) = cond else {
                    return Err(EvalError::type_error("->", "truth value", &cond, 1));
                };
                let chosen = if b { then_seq } else { else_seq };
                for control_item in chosen.iter().rev().cloned() {
                    control_stack.push(control_item);
                }
            }

            // Rule 5 — TupleFormer.
            ControlItem::TupleFormer(n) => {
                let mut items = Vec::with_capacity(n);
                for _ in 0..n {
                    items.push(value_stack.pop().ok_or_else(EvalError::stack_underflow)?);
                }
                items.reverse();
                value_stack.push(Value::Tuple(items));
            }

            // Rules 6-10 — operators.
            ControlItem::Op(op) => self.apply_operator(op, value_stack)?,
        }
        Ok(())
    }

    /// Rule 3: pops `rator`/`rand` and dispatches on `rator`'s variant.
    fn apply_gamma(
        &self,
        control_stack: &mut Vec<ControlItem>,
        value_stack: &mut Vec<Value>,
        depth: usize,
    ) -> Result<(), EvalError> {
        let rator = value_stack.pop().ok_or_else(EvalError::stack_underflow)?;
        let rand = value_stack.pop().ok_or_else(EvalError::stack_underflow)?;

        match rator {
            Value::Lambda(closure) => self.apply_lambda(closure, rand, value_stack, depth)?,

            Value::Builtin(name) if name == "Y*" => {
                let Value::Lambda(closure) = rand else {
                    return Err(EvalError::type_error("Y*", "lambda", &rand, 1));
                };
                value_stack.push(Value::Eta(closure));
            }

            // Y* unrolling: (Y* L) applied to rand becomes L (Y* L) rand.
            // Stack order top-down after this push sequence is
            // [Lambda, Eta, rand]; the first of the two queued Gammas
            // applies Lambda to Eta, the second applies that result to
            // rand (spec §4.4 Rule 3, Eta case).
            Value::Eta(closure) => {
                value_stack.push(rand);
                value_stack.push(Value::Eta(closure.clone()));
                value_stack.push(Value::Lambda(closure));
                control_stack.push(ControlItem::Gamma);
                control_stack.push(ControlItem::Gamma);
            }

            Value::Tuple(items) => {
                let Value::Int(k) = rand else {
                    return Err(EvalError::type_error("tuple selection", "integer", &rand, 1));
                };
                if k < 1 || k as usize > items.len() {
                    return Err(EvalError::tuple_index_error(k, items.len()));
                }
                value_stack.push(items[(k - 1) as usize].clone());
            }

            Value::Builtin(name) => {
                let result = builtins::dispatch(&name, rand, control_stack, value_stack)?;
                value_stack.push(result);
            }

            other => return Err(EvalError::not_a_function(&other)),
        }
        Ok(())
    }

    /// Rule 3, Lambda case: binds the lambda's parameters, seals the fresh
    /// frame, then recursively evaluates the body — a new activation
    /// sharing only the value stack with its caller.
    fn apply_lambda(
        &self,
        closure: Closure,
        rand: Value,
        value_stack: &mut Vec<Value>,
        depth: usize,
    ) -> Result<(), EvalError> {
        let new_env = Environment::with_parent(closure.env);

        if closure.bound_vars.len() == 1 {
            new_env.bind(closure.bound_vars[0].clone(), rand);
        } else {
            let Value::Tuple(items) = rand else {
                return Err(EvalError::type_error("lambda application", "tuple", &rand, 1));
            };
            if items.len() != closure.bound_vars.len() {
                return Err(EvalError::arity_error(
                    "lambda application",
                    closure.bound_vars.len().to_string(),
                    items.len(),
                ));
            }
            for (name, value) in closure.bound_vars.iter().zip(items.into_iter()) {
                new_env.bind(name.clone(), value);
            }
        }
        new_env.seal();

        let body = Rc::clone(&self.bodies[closure.body_index]);
        self.eval_sequence(body, new_env, value_stack, depth + 1)
    }

    /// Rules 6-10: binary/unary operator reduction.
    fn apply_operator(&self, op: Operator, value_stack: &mut Vec<Value>) -> Result<(), EvalError> {
        if op.is_unary() {
            let a = value_stack.pop().ok_or_else(EvalError::stack_underflow)?;
            let result = match op {
                Operator::Neg => Value::Int(-expect_int(op_name(op), &a)?),
                Operator::Not => Value::Truth(!expect_truth(op_name(op), &a)?),
                _ => unreachable!("is_unary only matches Neg/Not"),
            };
            value_stack.push(result);
            return Ok(());
        }

        let a = value_stack.pop().ok_or_else(EvalError::stack_underflow)?;
        let b = value_stack.pop().ok_or_else(EvalError::stack_underflow)?;
        let name = op_name(op);

        let result = match op {
            Operator::Plus | Operator::Minus | Operator::Mult | Operator::Div | Operator::Exp => {
                let x = expect_int(name, &a)?;
                let y = expect_int(name, &b)?;
                Value::Int(match op {
                    Operator::Plus => x + y,
                    Operator::Minus => x - y,
                    Operator::Mult => x * y,
                    Operator::Div => {
                        if y == 0 {
                            return Err(EvalError::DivisionByZero);
                        }
                        x / y
                    }
                    Operator::Exp => x.pow(u32::try_from(y).unwrap_or(0)),
                    _ => unreachable!(),
                })
            }
            Operator::Ls | Operator::Le | Operator::Gr | Operator::Ge => {
                let x = expect_int(name, &a)?;
                let y = expect_int(name, &b)?;
                Value::Truth(match op {
                    Operator::Ls => x < y,
                    Operator::Le => x <= y,
                    Operator::Gr => x > y,
                    Operator::Ge => x >= y,
                    _ => unreachable!(),
                })
            }
            Operator::Eq | Operator::Ne => {
                let equal = values_equal(name, &a, &b)?;
                Value::Truth(if op == Operator::Eq { equal } else { !equal })
            }
            Operator::Or | Operator::And => {
                let x = expect_truth(name, &a)?;
                let y = expect_truth(name, &b)?;
                Value::Truth(if op == Operator::Or { x || y } else { x && y })
            }
            Operator::Aug => {
                let Value::Tuple(mut items) = a else {
                    return Err(EvalError::type_error("aug", "tuple", &a, 1));
                };
                items.push(b);
                Value::Tuple(items)
            }
            Operator::Not | Operator::Neg => unreachable!("handled in the unary branch above"),
        };
        value_stack.push(result);
        Ok(())
    }
}

fn op_name(op: Operator) -> &'static str {
    match op {
        Operator::Plus => "+",
        Operator::Minus => "-",
        Operator::Mult => "*",
        Operator::Div => "/",
        Operator::Exp => "**",
        Operator::Ls => "ls",
        Operator::Le => "le",
        Operator::Gr => "gr",
        Operator::Ge => "ge",
        Operator::Eq => "eq",
        Operator::Ne => "ne",
        Operator::Or => "or",
        Operator::And => "and",
        Operator::Aug => "aug",
        Operator::Not => "not",
        Operator::Neg => "neg",
    }
}

fn expect_int(function: &str, v: &Value) -> Result<i64, EvalError> {
    match v {
        Value::Int(n) => Ok(*n),
        other => Err(EvalError::type_error(function, "integer", other, 1)),
    }
}

fn expect_truth(function: &str, v: &Value) -> Result<bool, EvalError> {
    match v {
        Value::Truth(b) => Ok(*b),
        other => Err(EvalError::type_error(function, "truth value", other, 1)),
    }
}

/// Rule 7: truth values compare by variant; otherwise the variants must
/// match exactly (Int/Int or Str/Str) — cross-type comparison is an error.
fn values_equal(function: &str, a: &Value, b: &Value) -> Result<bool, EvalError> {
    match (a, b) {
        (Value::Truth(x), Value::Truth(y)) => Ok(x == y),
        (Value::Int(x), Value::Int(y)) => Ok(x == y),
        (Value::Str(x), Value::Str(y)) => Ok(x == y),
        _ => Err(EvalError::type_error(function, a.type_name(), b, 2)),
    }
}
