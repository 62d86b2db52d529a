// ABOUTME: The standardized AST — the only input the CSE machine accepts

use serde::{Deserialize, Serialize};

/// A lambda's parameter list, as the standardizer leaves it: a single
/// identifier, a parenthesized comma-list, or the empty-parameter marker
/// `()` (spec §4.1 step 1, §6).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundVars {
    Single(String),
    Tuple(Vec<String>),
    Empty,
}

/// Binary/unary operator tokens a standardized AST may carry (spec §3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Plus,
    Minus,
    Mult,
    Div,
    Exp,
    Ls,
    Le,
    Gr,
    Ge,
    Eq,
    Ne,
    Or,
    And,
    Aug,
    Not,
    Neg,
}

impl Operator {
    pub fn is_unary(self) -> bool {
        matches!(self, Operator::Not | Operator::Neg)
    }
}

/// A standardized RPAL AST node. The standardizer guarantees no occurrences
/// of `let`, `where`, `within`, `and`, `rec`, `fn`, `fcn_form` (spec §4.1);
/// `Y*` is carried as the reserved identifier `Identifier("Y*")`, applied via
/// an ordinary `Gamma` node like any other builtin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Ast {
    Identifier(String),
    IntLiteral(i64),
    StrLiteral(String),
    TruthLiteral(bool),
    Nil,
    Dummy,
    Lambda {
        bound_vars: BoundVars,
        body: Box<Ast>,
    },
    Gamma {
        rator: Box<Ast>,
        rand: Box<Ast>,
    },
    Conditional {
        cond: Box<Ast>,
        then_branch: Box<Ast>,
        else_branch: Box<Ast>,
    },
    Tau(Vec<Ast>),
    Aug {
        left: Box<Ast>,
        right: Box<Ast>,
    },
    UnaryOp {
        op: Operator,
        operand: Box<Ast>,
    },
    BinaryOp {
        op: Operator,
        left: Box<Ast>,
        right: Box<Ast>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let ast = Ast::Gamma {
            rator: Box::new(Ast::Identifier("Print".to_string())),
            rand: Box::new(Ast::IntLiteral(5)),
        };
        let json = serde_json::to_string(&ast).unwrap();
        let back: Ast = serde_json::from_str(&json).unwrap();
        match back {
            Ast::Gamma { rator, rand } => {
                assert!(matches!(*rator, Ast::Identifier(ref n) if n == "Print"));
                assert!(matches!(*rand, Ast::IntLiteral(5)));
            }
            other => panic!("unexpected node: {other:?}"),
        }
    }

    #[test]
    fn test_bound_vars_variants() {
        assert_eq!(BoundVars::Single("x".into()), BoundVars::Single("x".into()));
        assert_ne!(BoundVars::Empty, BoundVars::Single("x".into()));
    }
}
