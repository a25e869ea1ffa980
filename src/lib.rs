#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod ast;
pub mod error;
pub mod eval;
pub mod lex;
pub mod parse;
pub mod value;

pub use error::{SyntaxError, SyntaxErrorKind};
pub use eval::evaluate;
pub use parse::parse;

///
/// Parse and evaluate a single line of text.
///
/// # Errors
///
/// Returns a [`SyntaxError`] if `src` is not a well-formed expression.
///
pub fn calc(src: &str) -> Result<f64, SyntaxError> {
    parse(src).map(|expr| evaluate(&expr))
}

pub mod prelude {
    pub use crate::ast::{expr::BinOp, Expr, Node};
    pub use crate::error::{SyntaxError, SyntaxErrorKind};
    pub use crate::lex::{Lexer, Token};
    pub use crate::value::Number;
    pub use crate::{calc, evaluate, parse};
}
