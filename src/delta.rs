// ABOUTME: The Delta compiler — flattens a standardized AST into control sequences

use crate::ast::{Ast, BoundVars, Operator};
use crate::control::ControlItem;
use crate::value::Value;
use std::rc::Rc;

/// The output of compilation: the root control sequence plus every lambda
/// body encountered, keyed by the index the compiler assigned it (spec
/// §4.1). A `LambdaForm` control item only ever carries the index; the
/// evaluator resolves the body sequence through this table when the
/// resulting lambda is applied.
#[derive(Debug)]
pub struct DeltaProgram {
    pub root: Rc<Vec<ControlItem>>,
    pub bodies: Vec<Rc<Vec<ControlItem>>>,
}

/// Compiles a standardized AST into a `DeltaProgram`.
pub fn compile(ast: &Ast) -> DeltaProgram {
    let mut bodies = Vec::new();
    let root = compile_sequence(ast, &mut bodies);
    DeltaProgram {
        root: Rc::new(root),
        bodies,
    }
}

fn compile_sequence(ast: &Ast, bodies: &mut Vec<Rc<Vec<ControlItem>>>) -> Vec<ControlItem> {
    let mut seq = Vec::new();
    compile_into(ast, &mut seq, bodies);
    seq
}

fn bound_var_names(bound_vars: &BoundVars) -> Vec<String> {
    match bound_vars {
        BoundVars::Single(name) => vec![name.clone()],
        BoundVars::Tuple(names) => names.clone(),
        BoundVars::Empty => Vec::new(),
    }
}

fn compile_into(ast: &Ast, seq: &mut Vec<ControlItem>, bodies: &mut Vec<Rc<Vec<ControlItem>>>) {
    match ast {
        Ast::Identifier(name) => seq.push(ControlItem::Name(name.clone())),
        Ast::IntLiteral(n) => seq.push(ControlItem::Literal(Value::Int(*n))),
        Ast::StrLiteral(s) => seq.push(ControlItem::Literal(Value::Str(s.clone()))),
        Ast::TruthLiteral(b) => seq.push(ControlItem::Literal(Value::Truth(*b))),
        Ast::Nil => seq.push(ControlItem::Literal(Value::Tuple(Vec::new()))),
        Ast::Dummy => seq.push(ControlItem::Literal(Value::Dummy)),

        Ast::Lambda { bound_vars, body } => {
            let body_seq = compile_sequence(body, bodies);
            let body_index = bodies.len();
            bodies.push(Rc::new(body_seq));
            seq.push(ControlItem::LambdaForm {
                bound_vars: bound_var_names(bound_vars),
                body_index,
            });
        }

        // Emit rand, then rator, then Gamma: this leaves the operator on
        // top of the value stack (popped first) and the operand directly
        // beneath it, matching Rule 3's "rator is on top" convention.
        Ast::Gamma { rator, rand } => {
            compile_into(rand, seq, bodies);
            compile_into(rator, seq, bodies);
            seq.push(ControlItem::Gamma);
        }

        // Condition evaluates inline; then/else are compiled into their own
        // sequences and spliced in by Rule 4 once Beta sees the Truth.
        Ast::Conditional {
            cond,
            then_branch,
            else_branch,
        } => {
            compile_into(cond, seq, bodies);
            let then_seq = compile_sequence(then_branch, bodies);
            let else_seq = compile_sequence(else_branch, bodies);
            seq.push(ControlItem::Beta {
                then_seq: Rc::new(then_seq),
                else_seq: Rc::new(else_seq),
            });
        }

        // Items compiled left to right: the first element ends up deepest
        // on the value stack, matching Rule 5's "first element is the
        // deepest of the popped values".
        Ast::Tau(items) => {
            for item in items {
                compile_into(item, seq, bodies);
            }
            seq.push(ControlItem::TupleFormer(items.len()));
        }

        // Right then left, so the tuple (the left operand, `a` in Rule 9)
        // ends up on top and is popped first.
        Ast::Aug { left, right } => {
            compile_into(right, seq, bodies);
            compile_into(left, seq, bodies);
            seq.push(ControlItem::Op(Operator::Aug));
        }

        Ast::UnaryOp { op, operand } => {
            compile_into(operand, seq, bodies);
            seq.push(ControlItem::Op(*op));
        }

        // Right then left, so `a` (popped first, Rule 6/7/8's left operand)
        // is on top.
        Ast::BinaryOp { op, left, right } => {
            compile_into(right, seq, bodies);
            compile_into(left, seq, bodies);
            seq.push(ControlItem::Op(*op));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_compiles_to_single_item() {
        let program = compile(&Ast::IntLiteral(5));
        assert_eq!(program.root.len(), 1);
        assert!(matches!(program.root[0], ControlItem::Literal(Value::Int(5))));
        assert!(program.bodies.is_empty());
    }

    #[test]
    fn test_gamma_emits_rand_then_rator_then_gamma() {
        let ast = Ast::Gamma {
            rator: Box::new(Ast::Identifier("Print".to_string())),
            rand: Box::new(Ast::IntLiteral(5)),
        };
        let program = compile(&ast);
        assert_eq!(program.root.len(), 3);
        assert!(matches!(program.root[0], ControlItem::Literal(Value::Int(5))));
        assert!(matches!(program.root[1], ControlItem::Name(ref n) if n == "Print"));
        assert!(matches!(program.root[2], ControlItem::Gamma));
    }

    #[test]
    fn test_lambda_registers_body_and_emits_lambda_form() {
        let ast = Ast::Lambda {
            bound_vars: BoundVars::Single("x".to_string()),
            body: Box::new(Ast::Identifier("x".to_string())),
        };
        let program = compile(&ast);
        assert_eq!(program.bodies.len(), 1);
        assert_eq!(program.bodies[0].len(), 1);
        assert!(matches!(
            program.root[0],
            ControlItem::LambdaForm { body_index: 0, .. }
        ));
    }

    #[test]
    fn test_tuple_former_arity_matches_item_count() {
        let ast = Ast::Tau(vec![Ast::IntLiteral(1), Ast::IntLiteral(2), Ast::IntLiteral(3)]);
        let program = compile(&ast);
        assert_eq!(program.root.len(), 4);
        assert!(matches!(program.root[3], ControlItem::TupleFormer(3)));
    }

    #[test]
    fn test_conditional_splits_branches() {
        let ast = Ast::Conditional {
            cond: Box::new(Ast::TruthLiteral(true)),
            then_branch: Box::new(Ast::IntLiteral(1)),
            else_branch: Box::new(Ast::IntLiteral(2)),
        };
        let program = compile(&ast);
        assert_eq!(program.root.len(), 2);
        match &program.root[1] {
            ControlItem::Beta { then_seq, else_seq } => {
                assert!(matches!(then_seq[0], ControlItem::Literal(Value::Int(1))));
                assert!(matches!(else_seq[0], ControlItem::Literal(Value::Int(2))));
            }
            other => panic!("expected Beta, got {other:?}"),
        }
    }
}
