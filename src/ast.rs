use crate::value::Number;
use alloc::boxed::Box;

pub mod expr;

pub use expr::Expr;

///
/// An evaluatable AST node.
///
pub trait Node {
    fn eval(&self) -> Number;
}

impl<T: Node + ?Sized> Node for Box<T> {
    fn eval(&self) -> Number {
        (**self).eval()
    }
}
