//
// Expression trees produced by the parser.
//

use alloc::boxed::Box;
use derive_more::Display;

///
/// A binary arithmetic operator.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum BinOp {
    #[display("+")]
    Add,
    #[display("-")]
    Sub,
    #[display("*")]
    Mul,
    #[display("/")]
    Div,
}

///
/// An arithmetic expression.
///
/// Nodes own their children and are never mutated once built. Displays as a
/// prefix s-expression, e.g. `(+ (* 3 1) 0)`.
///
#[derive(Debug, Clone, PartialEq, Display)]
pub enum Expr {
    #[display("{_0}")]
    Number(f64),

    #[display("(- {_0})")]
    Neg(Box<Expr>),

    #[display("({op} {lhs} {rhs})")]
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

macro_rules! binary_op {
    ($vis:vis $name:ident, $op:ident) => {
        #[must_use]
        $vis fn $name(lhs: Expr, rhs: Expr) -> Self {
            Self::binary(BinOp::$op, lhs, rhs)
        }
    };
}

#[allow(clippy::should_implement_trait)]
impl Expr {
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number(value)
    }

    #[must_use]
    pub fn neg(arg: Expr) -> Self {
        Self::Neg(Box::new(arg))
    }

    #[must_use]
    pub fn binary(op: BinOp, lhs: Expr, rhs: Expr) -> Self {
        Self::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    binary_op!(pub add, Add);
    binary_op!(pub sub, Sub);
    binary_op!(pub mul, Mul);
    binary_op!(pub div, Div);

    ///
    /// Number of nodes in the tree.
    ///
    #[must_use]
    pub fn size(&self) -> usize {
        match self {
            Self::Number(_) => 1,
            Self::Neg(arg) => 1 + arg.size(),
            Self::Binary { lhs, rhs, .. } => 1 + lhs.size() + rhs.size(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{BinOp, Expr};
    use alloc::string::ToString;

    #[test]
    fn constructors() {
        let expr = Expr::sub(Expr::number(0.0), Expr::number(2.0));

        let Expr::Binary { op, lhs, rhs } = &expr else {
            panic!("expected a binary node, got {expr:?}");
        };
        assert_eq!(*op, BinOp::Sub);
        assert_eq!(**lhs, Expr::Number(0.0));
        assert_eq!(**rhs, Expr::Number(2.0));
    }

    #[test]
    fn display() {
        let expr = Expr::add(
            Expr::mul(Expr::number(3.0), Expr::number(1.0)),
            Expr::neg(Expr::div(Expr::number(0.5), Expr::number(2.0))),
        );

        assert_eq!(expr.to_string(), "(+ (* 3 1) (- (/ 0.5 2)))");
        assert_eq!(expr.size(), 8);
    }

    #[test]
    fn clones_are_independent() {
        let a = Expr::neg(Expr::number(1.0));
        let b = a.clone();

        assert_eq!(a, b);
        drop(a);
        assert_eq!(b.to_string(), "(- 1)");
    }
}
