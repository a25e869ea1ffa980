use core::fmt;
use derive_more::Display;

///
/// What went wrong while reading an expression.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SyntaxErrorKind {
    #[display("unrecognized input symbol")]
    UnrecognizedSymbol,
    #[display("invalid number literal")]
    InvalidNumber,
    #[display("expected ')'")]
    ExpectedCloseParen,
    #[display("unexpected token")]
    UnexpectedToken,
    #[display("unexpected end of input")]
    UnexpectedEnd,
    #[display("unexpected input after expression")]
    TrailingInput,
    #[display("expression nested too deeply")]
    NestingTooDeep,
    #[display("too many operators in one expression")]
    ChainTooLong,
}

///
/// A syntax error, located at a byte offset into the parsed line.
///
/// `symbol` is the character found at `position`, or [`None`] at the end of
/// the line.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub symbol: Option<char>,
    pub position: usize,
}

impl SyntaxError {
    ///
    /// Build an error of `kind` pointing at byte `position` of `src`.
    ///
    #[must_use]
    pub fn at(kind: SyntaxErrorKind, src: &str, position: usize) -> Self {
        Self {
            kind,
            symbol: src.get(position..).and_then(|rest| rest.chars().next()),
            position,
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol {
            Some(c) => {
                write!(f, "{}: '{c}' at position {}", self.kind, self.position)
            }
            None => write!(f, "{} at position {}", self.kind, self.position),
        }
    }
}

impl core::error::Error for SyntaxError {}
