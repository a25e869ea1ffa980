use crate::error::{SyntaxError, SyntaxErrorKind};

type NomResult<'src, O> = nom::IResult<&'src str, O>;

///
/// Longest accepted number lexeme, in bytes.
///
pub const MAX_NUMBER_LEN: usize = 32;

///
/// A syntactic arithmetic token.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),

    Plus,
    Minus,
    Mul,
    Div,

    OpenParen,
    CloseParen,

    EndOfText,
}

///
/// Produces one token at a time from a line of text.
///
/// The lexer never looks further than the token it is asked for; the parser
/// holds the single lookahead token.
///
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    src: &'src str,
    rest: &'src str,
    start: usize,
    done: bool,
}

impl Token {
    ///
    /// Parse a [`Token`] from an input slice, assuming no preceding whitespace.
    ///
    /// A number lexeme that is too long fails with [`nom::Err::Failure`];
    /// anything else that isn't a token fails with [`nom::Err::Error`].
    ///
    #[allow(clippy::missing_errors_doc)]
    pub fn parse(src: &str) -> NomResult<Self> {
        use nom::{branch::alt, bytes::complete::tag, combinator::map};

        fn sign(src: &str) -> NomResult<Token> {
            alt((
                map(tag("+"), |_| Token::Plus),
                map(tag("-"), |_| Token::Minus),
                map(tag("*"), |_| Token::Mul),
                map(tag("/"), |_| Token::Div),
            ))(src)
        }

        fn paren(src: &str) -> NomResult<Token> {
            alt((
                map(tag("("), |_| Token::OpenParen),
                map(tag(")"), |_| Token::CloseParen),
            ))(src)
        }

        alt((map(util::real, Token::Number), sign, paren))(src)
    }
}

impl<'src> Lexer<'src> {
    #[must_use]
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            rest: src,
            start: 0,
            done: false,
        }
    }

    ///
    /// Scan the next token, skipping whitespace before it.
    ///
    /// Once the text is exhausted this keeps returning [`Token::EndOfText`].
    ///
    /// # Errors
    ///
    /// Fails on a character that starts no token, or on a number lexeme
    /// longer than [`MAX_NUMBER_LEN`].
    ///
    pub fn next_token(&mut self) -> Result<Token, SyntaxError> {
        self.rest = util::skip_whitespace(self.rest);
        self.start = self.src.len() - self.rest.len();

        if self.rest.is_empty() {
            return Ok(Token::EndOfText);
        }

        match Token::parse(self.rest) {
            Ok((rest, token)) => {
                self.rest = rest;
                Ok(token)
            }
            Err(nom::Err::Failure(_)) => {
                Err(self.error(SyntaxErrorKind::InvalidNumber))
            }
            Err(_) => Err(self.error(SyntaxErrorKind::UnrecognizedSymbol)),
        }
    }

    ///
    /// Byte offset of the most recently scanned token.
    ///
    #[must_use]
    pub fn position(&self) -> usize {
        self.start
    }

    ///
    /// Build an error pointing at the most recently scanned token.
    ///
    #[must_use]
    pub fn error(&self, kind: SyntaxErrorKind) -> SyntaxError {
        SyntaxError::at(kind, self.src, self.start)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, SyntaxError>;

    ///
    /// Yields tokens up to and including [`Token::EndOfText`], or up to the
    /// first error.
    ///
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let item = self.next_token();
        self.done = !matches!(item, Ok(token) if token != Token::EndOfText);
        Some(item)
    }
}

mod util {
    use super::{NomResult, MAX_NUMBER_LEN};

    pub fn skip_whitespace(src: &str) -> &str {
        nom::bytes::complete::take_while::<_, _, nom::error::Error<_>>(
            char::is_whitespace,
        )(src)
        .map_or(src, |(rest, _)| rest)
    }

    ///
    /// Parse a real number from an input slice, assuming no preceding
    /// whitespace.
    ///
    /// The lexeme is `digit* ('.' digit*)?`; a lone `.` reads as zero.
    ///
    pub fn real(src: &str) -> NomResult<f64> {
        use nom::{
            character::complete::{char, digit0},
            combinator::{opt, recognize},
            error::{make_error, ErrorKind},
            sequence::pair,
            Err,
        };

        let (rest, lexeme) =
            recognize(pair(digit0, opt(pair(char('.'), digit0))))(src)?;

        if lexeme.is_empty() {
            return Err(Err::Error(make_error(src, ErrorKind::Digit)));
        }
        if lexeme.len() > MAX_NUMBER_LEN {
            return Err(Err::Failure(make_error(src, ErrorKind::TooLarge)));
        }
        if lexeme == "." {
            return Ok((rest, 0.0));
        }

        let value = lexeme
            .parse::<f64>()
            .map_err(|_| Err::Failure(make_error(src, ErrorKind::Float)))?;

        Ok((rest, value))
    }
}
