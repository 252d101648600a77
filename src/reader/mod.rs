//! Support for reading expressions from strings.

use std::io::ErrorKind;

use crate::data::{Expr, InternPool, Interner};

pub use parse::Parser;
pub use token::{tokenize, LexOptions, Overflow, Span, Token, TokenKind, Tokenizer, Tokens};

mod parse;
mod token;

/// Parse the string as a single expression and render it fully parenthesized.
///
/// Uses a fresh intern pool and the default (permissive) options.
pub fn parse_and_render(input: &str) -> ReadResult<String> {
    let mut pool = InternPool::new();
    parse_and_render_with(&mut pool, input, LexOptions::default())
}

/// As `parse_and_render`, with the caller's interner and options.
pub fn parse_and_render_with(
    interner: &mut impl Interner,
    input: &str,
    options: LexOptions,
) -> ReadResult<String> {
    Ok(parse(interner, input, options)?.to_string())
}

/// Parse the string as a single expression.
///
/// The whole input must be consumed: anything after a complete expression is an error.
pub fn parse(interner: &mut impl Interner, input: &str, options: LexOptions) -> ReadResult<Expr> {
    let mut parser = Parser::new(interner, input.as_bytes(), options)?;
    let expr = parser.parse_expr()?;
    parser.finish()?;
    tracing::debug!(len = input.len(), %expr, "parsed expression");
    Ok(expr)
}

/// Error type if a read does not complete.
///
/// Some errors can't be fixed by more input, e.g. "1)": the `)` is wrong wherever the input goes next.
/// Others hit the end of the input while something was still expected, e.g. "(1":
/// more input may fix it. `is_incomplete` tells the two apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadErr {
    /// A particular token was required, and something else was found.
    Unexpected {
        span: Span,
        expected: TokenKind,
        found: TokenKind,
    },
    /// An operand was required, and something else was found.
    MissingOperand { span: Span, found: TokenKind },
    /// An integer literal does not fit in 64 bits.
    Overflow { span: Span },
    /// A byte outside the expression language, in strict mode.
    UnknownCharacter { span: Span, byte: u8 },
    /// The expression nests deeper than the parser's limit.
    TooDeep { span: Span, limit: usize },
}

impl ReadErr {
    /// Where in the input the error is.
    pub fn span(&self) -> Span {
        match self {
            ReadErr::Unexpected { span, .. }
            | ReadErr::MissingOperand { span, .. }
            | ReadErr::Overflow { span }
            | ReadErr::UnknownCharacter { span, .. }
            | ReadErr::TooDeep { span, .. } => *span,
        }
    }

    /// True if the input ended where something else was required.
    pub fn is_incomplete(&self) -> bool {
        matches!(
            self,
            ReadErr::Unexpected {
                found: TokenKind::Eof,
                ..
            } | ReadErr::MissingOperand {
                found: TokenKind::Eof,
                ..
            }
        )
    }
}

impl std::fmt::Display for ReadErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        match self {
            ReadErr::Unexpected {
                span,
                expected,
                found,
            } => write!(f, "at {span}: expected {expected}, got {found}"),
            ReadErr::MissingOperand { span, found } => {
                write!(f, "at {span}: expected an operand, got {found}")
            }
            ReadErr::Overflow { span } => {
                write!(f, "at {span}: integer literal does not fit in 64 bits")
            }
            ReadErr::UnknownCharacter { span, byte } => {
                write!(f, "at {span}: unknown character {}", TokenKind::Char(*byte))
            }
            ReadErr::TooDeep { span, limit } => {
                write!(f, "at {span}: expression nested deeper than {limit} levels")
            }
        }
    }
}

impl std::error::Error for ReadErr {}

/// The main result type for this module:
/// a T (token, expression, etc), or an error.
pub type ReadResult<T> = Result<T, ReadErr>;

impl From<ReadErr> for std::io::Error {
    fn from(value: ReadErr) -> Self {
        let kind = if value.is_incomplete() {
            ErrorKind::UnexpectedEof
        } else {
            ErrorKind::InvalidInput
        };
        std::io::Error::new(kind, value)
    }
}
