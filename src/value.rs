use crate::ast::Node;
use core::{fmt, ops};
use derive_more::{Add, From, Into, Neg, Sub};

///
/// A real number.
///
/// Formats like C's `%f`: six fractional digits unless the formatter asks
/// for another precision.
///
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
#[derive(Add, Sub, Neg)]
#[derive(From, Into)]
pub struct Number(f64);

impl Number {
    #[must_use]
    pub const fn real(f: f64) -> Self {
        Self(f)
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            f.write_str("nan")
        } else if v.is_infinite() {
            f.write_str(if v.is_sign_negative() { "-inf" } else { "inf" })
        } else {
            write!(f, "{:.*}", f.precision().unwrap_or(6), v)
        }
    }
}

// derive_more only forwards `Mul`/`Div` to a scalar rhs
impl ops::Mul for Number {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl ops::Div for Number {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Node for Number {
    fn eval(&self) -> Number {
        *self
    }
}
