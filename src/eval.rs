//
// Post-order evaluation of expression trees.
//

use crate::{
    ast::{expr::BinOp, Expr, Node},
    value::Number,
};

///
/// Evaluate an expression tree.
///
/// Division follows IEEE-754: dividing by zero gives an infinity or NaN.
///
#[must_use]
pub fn evaluate(expr: &Expr) -> f64 {
    expr.eval().into()
}

impl BinOp {
    #[must_use]
    pub fn apply(self, lhs: Number, rhs: Number) -> Number {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
        }
    }
}

impl Node for Expr {
    fn eval(&self) -> Number {
        match self {
            Self::Number(value) => Number::real(*value),
            Self::Neg(arg) => -arg.eval(),
            Self::Binary { op, lhs, rhs } => op.apply(lhs.eval(), rhs.eval()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::evaluate;
    use crate::{ast::Expr, parse::parse};

    ///
    /// Declares a test case with a name, given input and expected value.
    ///
    macro_rules! test_case {
        ($name:ident, $input:expr, $expected:expr $(,)?) => {
            #[test]
            fn $name() {
                let expected: f64 = $expected;
                assert_eq!(evaluate(&parse($input).unwrap()), expected);
            }
        };
    }

    test_case!(number, "3", 3.0);
    test_case!(fraction, "2.5", 2.5);
    test_case!(precedence, "1+2*3", 7.0);
    test_case!(parens, "(1+2)*3", 9.0);
    test_case!(double_negation, "--3", 3.0);
    test_case!(negated_parens, "-(2-5)", 3.0);
    test_case!(unary_binds_tighter, "-2*3", -6.0);
    test_case!(subtraction_chain, "2-3-4", -5.0);
    test_case!(long_subtraction_chain, "10-2-3-1", 4.0);
    test_case!(mixed_additive, "1-2+3", 2.0);
    test_case!(mixed_additive_rev, "1+2-3", 0.0);
    test_case!(division_chain, "64/4/2", 8.0);
    test_case!(long_division_chain, "256/2/4/8", 4.0);
    test_case!(mixed_multiplicative, "8/2*4", 16.0);
    test_case!(mixed_multiplicative_rev, "2*3/4", 1.5);
    test_case!(everything, "2 * (3 + 4) - 10 / 4", 11.5);
    test_case!(div_by_zero, "1/0", f64::INFINITY);
    test_case!(neg_div_by_zero, "-1/0", f64::NEG_INFINITY);

    #[test]
    fn zero_over_zero() {
        assert!(evaluate(&parse("0/0").unwrap()).is_nan());
    }

    #[test]
    fn hand_built() {
        let expr = Expr::sub(Expr::number(1.0), Expr::neg(Expr::number(2.0)));

        assert_eq!(evaluate(&expr), 3.0);
    }
}
