//
// Recursive descent over the left-recursion-free grammar:
//
//   expression  := term expression1
//   expression1 := '+' term expression1 | '-' term expression1 | ε
//   term        := factor term1
//   term1       := '*' factor term1 | '/' factor term1 | ε
//   factor      := number | '-' factor | '(' expression ')'
//
// `expression` and `term` always emit an `Add` / `Mul` node; an empty tail
// contributes the identity (0 or 1). A non-empty tail is assembled as
// `op(rest, operand)`, so `a - b - c` becomes `a + ((0 - c) - b)`.
//

use crate::{
    ast::{expr::BinOp, Expr},
    error::{SyntaxError, SyntaxErrorKind},
    lex::{Lexer, Token},
};

///
/// Deepest nesting of parentheses and unary minus accepted on one line.
///
pub const MAX_NESTING: usize = 256;

///
/// Most operators accepted in pending `+`/`-` and `*`/`/` chains.
///
pub const MAX_CHAIN: usize = 2048;

///
/// Parse one line of text into an expression tree.
///
/// # Errors
///
/// Returns a [`SyntaxError`] for malformed input; nothing that was built
/// before the error is kept.
///
pub fn parse(src: &str) -> Result<Expr, SyntaxError> {
    Parser::new(src)?.parse()
}

///
/// Parser state for a single line: the lexer, the lookahead token and how
/// deep the recursion currently is.
///
#[derive(Debug)]
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    token: Token,
    nesting: usize,
    chain: usize,
}

impl<'src> Parser<'src> {
    ///
    /// Create a parser and read the first lookahead token.
    ///
    /// # Errors
    ///
    /// Fails if the first token cannot be scanned.
    ///
    pub fn new(src: &'src str) -> Result<Self, SyntaxError> {
        let mut lexer = Lexer::new(src);
        let token = lexer.next_token()?;

        Ok(Self {
            lexer,
            token,
            nesting: 0,
            chain: 0,
        })
    }

    ///
    /// Parse the whole line as one expression.
    ///
    /// # Errors
    ///
    /// Fails on malformed input or on input left over after the expression.
    ///
    pub fn parse(mut self) -> Result<Expr, SyntaxError> {
        let result = self.expression().and_then(|expr| match self.token {
            Token::EndOfText => Ok(expr),
            _ => Err(self.lexer.error(SyntaxErrorKind::TrailingInput)),
        });

        match &result {
            Ok(expr) => {
                tracing::debug!(nodes = expr.size(), "parsed expression");
            }
            Err(err) => tracing::debug!(%err, "parse aborted"),
        }

        result
    }

    fn advance(&mut self) -> Result<(), SyntaxError> {
        self.token = self.lexer.next_token()?;
        Ok(())
    }

    // parentheses and unary minus
    fn nested(
        &mut self,
        rule: fn(&mut Self) -> Result<Expr, SyntaxError>,
    ) -> Result<Expr, SyntaxError> {
        if self.nesting >= MAX_NESTING {
            return Err(self.lexer.error(SyntaxErrorKind::NestingTooDeep));
        }

        self.nesting += 1;
        let result = rule(self);
        self.nesting -= 1;
        result
    }

    // one more pending operator in a `+`/`-` or `*`/`/` chain
    fn link(&mut self) -> Result<(), SyntaxError> {
        if self.chain >= MAX_CHAIN {
            return Err(self.lexer.error(SyntaxErrorKind::ChainTooLong));
        }

        self.chain += 1;
        Ok(())
    }

    fn expression(&mut self) -> Result<Expr, SyntaxError> {
        let term = self.term()?;
        let rest = self.expression1()?;

        Ok(node(BinOp::Add, term, rest))
    }

    fn expression1(&mut self) -> Result<Expr, SyntaxError> {
        let op = match self.token {
            Token::Plus => BinOp::Add,
            Token::Minus => BinOp::Sub,
            _ => return Ok(leaf(0.0)),
        };

        self.link()?;
        self.advance()?;
        let term = self.term()?;
        let rest = self.expression1()?;
        self.chain -= 1;

        Ok(node(op, rest, term))
    }

    fn term(&mut self) -> Result<Expr, SyntaxError> {
        let factor = self.factor()?;
        let rest = self.term1()?;

        Ok(node(BinOp::Mul, factor, rest))
    }

    fn term1(&mut self) -> Result<Expr, SyntaxError> {
        let op = match self.token {
            Token::Mul => BinOp::Mul,
            Token::Div => BinOp::Div,
            _ => return Ok(leaf(1.0)),
        };

        self.link()?;
        self.advance()?;
        let factor = self.factor()?;
        let rest = self.term1()?;
        self.chain -= 1;

        Ok(node(op, rest, factor))
    }

    fn factor(&mut self) -> Result<Expr, SyntaxError> {
        match self.token {
            Token::OpenParen => {
                self.advance()?;
                let expr = self.nested(Self::expression)?;
                if self.token != Token::CloseParen {
                    return Err(self
                        .lexer
                        .error(SyntaxErrorKind::ExpectedCloseParen));
                }
                self.advance()?;

                Ok(expr)
            }
            Token::Minus => {
                self.advance()?;
                let arg = self.nested(Self::factor)?;

                tracing::trace!("new unary node");
                Ok(Expr::neg(arg))
            }
            Token::Number(value) => {
                self.advance()?;

                Ok(leaf(value))
            }
            Token::EndOfText => {
                Err(self.lexer.error(SyntaxErrorKind::UnexpectedEnd))
            }
            _ => Err(self.lexer.error(SyntaxErrorKind::UnexpectedToken)),
        }
    }
}

fn node(op: BinOp, lhs: Expr, rhs: Expr) -> Expr {
    tracing::trace!(%op, "new node");
    Expr::binary(op, lhs, rhs)
}

fn leaf(value: f64) -> Expr {
    tracing::trace!(value, "new leaf");
    Expr::number(value)
}
