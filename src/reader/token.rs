//! Module for extracting expression tokens from an input stream.
//!
//! The tokenizer recognizes one token at a time, on demand:
//! the parser holds the "current" token and advances past it when it's consumed.

use crate::data::{InternPool, Interner, Symbol};
use crate::reader::{ReadErr, ReadResult};

/// The kind of a token.
///
/// Any byte that doesn't start an integer, a name, or a shift operator
/// is a token of its own, `Char(byte)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Int,
    Name,
    /// `<<`
    LeftShift,
    /// `>>`
    RightShift,
    /// End of the buffer, or a NUL byte.
    Eof,
    Char(u8),
}

/// Single-character operators; the only `Char` tokens strict mode accepts.
const OPERATORS: &[u8] = b"+-*/%()~^|&<>";

impl TokenKind {
    /// Whether this is an operator token (or an operand token, or end of input)
    /// as opposed to an arbitrary byte.
    pub fn is_known(self) -> bool {
        match self {
            TokenKind::Char(c) => OPERATORS.contains(&c),
            _ => true,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Int => write!(f, "integer"),
            TokenKind::Name => write!(f, "name"),
            TokenKind::LeftShift => write!(f, "'<<'"),
            TokenKind::RightShift => write!(f, "'>>'"),
            TokenKind::Eof => write!(f, "end of input"),
            TokenKind::Char(c) if c.is_ascii_graphic() || *c == b' ' => {
                write!(f, "'{}'", *c as char)
            }
            TokenKind::Char(c) => write!(f, "<ASCII {}>", c),
        }
    }
}

/// A half-open byte range in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "bytes {}..{}", self.start, self.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Payload {
    None,
    Int(u64),
    Name(Symbol),
}

/// A token along with its position in the input stream.
///
/// Integer tokens carry their value, name tokens their symbol;
/// the constructors keep the payload consistent with the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    span: Span,
    payload: Payload,
}

impl Token {
    pub(crate) fn int(value: u64, span: Span) -> Self {
        Token {
            kind: TokenKind::Int,
            span,
            payload: Payload::Int(value),
        }
    }

    pub(crate) fn name(symbol: Symbol, span: Span) -> Self {
        Token {
            kind: TokenKind::Name,
            span,
            payload: Payload::Name(symbol),
        }
    }

    fn punct(kind: TokenKind, span: Span) -> Self {
        debug_assert!(!matches!(kind, TokenKind::Int | TokenKind::Name));
        Token {
            kind,
            span,
            payload: Payload::None,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// The value of an integer token.
    pub fn int_value(&self) -> Option<u64> {
        match self.payload {
            Payload::Int(v) => Some(v),
            _ => None,
        }
    }

    /// The symbol of a name token.
    pub fn symbol(&self) -> Option<Symbol> {
        match self.payload {
            Payload::Name(s) => Some(s),
            _ => None,
        }
    }
}

/// What to do with an integer literal that doesn't fit in 64 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    /// Report `ReadErr::Overflow`.
    #[default]
    Error,
    /// Keep the low 64 bits.
    Wrap,
    /// Clamp to `u64::MAX`.
    Saturate,
}

/// Tokenizer settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LexOptions {
    /// Reject bytes that aren't operators, digits, or name characters,
    /// rather than passing them through as `Char` tokens.
    pub strict: bool,
    pub overflow: Overflow,
}

mod regex {
    use regex::bytes::Regex;
    use std::sync::OnceLock;

    pub(super) fn integer() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| Regex::new(r#"\A[0-9]+"#).expect("could not compile regex for integer"))
    }

    pub(super) fn name() -> &'static Regex {
        static MATCH: OnceLock<Regex> = OnceLock::new();
        MATCH.get_or_init(|| {
            Regex::new(r#"\A[A-Za-z_][A-Za-z0-9_]*"#).expect("could not compile regex for name")
        })
    }
}

/// Cursor over an input buffer, holding the token at the cursor.
pub struct Tokenizer<'a, I: Interner = InternPool> {
    interner: &'a mut I,
    source: &'a [u8],
    cursor: usize,
    token: Token,
    options: LexOptions,
}

impl<'a, I: Interner> Tokenizer<'a, I> {
    /// Start tokenizing the source, recognizing the first token.
    pub fn new(interner: &'a mut I, source: &'a [u8], options: LexOptions) -> ReadResult<Self> {
        let mut tokenizer = Self::unstarted(interner, source, options);
        tokenizer.advance()?;
        Ok(tokenizer)
    }

    fn unstarted(interner: &'a mut I, source: &'a [u8], options: LexOptions) -> Self {
        Tokenizer {
            interner,
            source,
            cursor: 0,
            token: Token::punct(TokenKind::Eof, Span::default()),
            options,
        }
    }

    /// Start over on a new source, recognizing its first token.
    pub fn reset(&mut self, source: &'a [u8]) -> ReadResult<()> {
        self.source = source;
        self.cursor = 0;
        self.advance()
    }

    /// Recognize the next token, replacing the current one.
    ///
    /// At end of input this is a no-op: the current token stays `Eof`.
    /// On error, the current token and cursor are unchanged.
    pub fn advance(&mut self) -> ReadResult<()> {
        let token = self.scan()?;
        tracing::trace!(kind = %token.kind, span = %token.span, "recognized token");
        self.cursor = token.span.end;
        self.token = token;
        Ok(())
    }

    pub fn current(&self) -> &Token {
        &self.token
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.token.kind == kind
    }

    pub fn is_name(&self, symbol: Symbol) -> bool {
        self.token.symbol() == Some(symbol)
    }

    /// If the current token is of this kind, consume it.
    pub fn match_token(&mut self, kind: TokenKind) -> ReadResult<bool> {
        if self.is(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consume a token of this kind, or report what was there instead.
    pub fn expect(&mut self, kind: TokenKind) -> ReadResult<()> {
        if self.match_token(kind)? {
            Ok(())
        } else {
            Err(ReadErr::Unexpected {
                span: self.token.span,
                expected: kind,
                found: self.token.kind,
            })
        }
    }

    /// The source text a token was recognized from.
    ///
    /// None if the token's span isn't in the current source,
    /// e.g. a token kept from before a `reset`.
    pub fn text(&self, token: &Token) -> Option<&'a [u8]> {
        let source = self.source;
        source.get(token.span.range())
    }

    pub fn interner(&self) -> &I {
        &*self.interner
    }

    /// Get the token at the cursor, without moving the cursor.
    fn scan(&mut self) -> ReadResult<Token> {
        let start = self.cursor;
        let source = self.source;
        let rest = &source[start..];
        let first = match rest.first() {
            None | Some(0) => return Ok(Token::punct(TokenKind::Eof, Span::new(start, start))),
            Some(&b) => b,
        };

        if let Some(m) = regex::integer().find(rest) {
            let span = Span::new(start, start + m.end());
            let value = self.accumulate(m.as_bytes(), span)?;
            return Ok(Token::int(value, span));
        }

        if let Some(m) = regex::name().find(rest) {
            let name = std::str::from_utf8(m.as_bytes())
                .expect("internal error: regex recognized name that was not UTF-8");
            let span = Span::new(start, start + m.end());
            return Ok(Token::name(self.interner.intern_name(name), span));
        }

        let (kind, len) = match (first, rest.get(1)) {
            (b'<', Some(b'<')) => (TokenKind::LeftShift, 2),
            (b'>', Some(b'>')) => (TokenKind::RightShift, 2),
            (c, _) => (TokenKind::Char(c), 1),
        };
        let span = Span::new(start, start + len);
        if self.options.strict && !kind.is_known() {
            return Err(ReadErr::UnknownCharacter { span, byte: first });
        }
        Ok(Token::punct(kind, span))
    }

    /// Convert a run of decimal digits to a value.
    fn accumulate(&self, digits: &[u8], span: Span) -> ReadResult<u64> {
        let mut value: u64 = 0;
        for d in digits {
            let d = u64::from(d - b'0');
            value = match self.options.overflow {
                Overflow::Wrap => value.wrapping_mul(10).wrapping_add(d),
                Overflow::Saturate => value.saturating_mul(10).saturating_add(d),
                Overflow::Error => value
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(d))
                    .ok_or(ReadErr::Overflow { span })?,
            };
        }
        Ok(value)
    }
}

/// Lazy, single-pass token stream. Ends after `Eof`, or after the first error.
pub struct Tokens<'a, I: Interner = InternPool> {
    tokenizer: Tokenizer<'a, I>,
    started: bool,
    done: bool,
}

/// Split the input into tokens, on demand.
pub fn tokenize<'a, I: Interner>(
    interner: &'a mut I,
    source: &'a [u8],
    options: LexOptions,
) -> Tokens<'a, I> {
    Tokens {
        tokenizer: Tokenizer::unstarted(interner, source, options),
        started: false,
        done: false,
    }
}

impl<I: Interner> Iterator for Tokens<'_, I> {
    type Item = ReadResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.started && self.tokenizer.is(TokenKind::Eof) {
            self.done = true;
            return None;
        }
        self.started = true;
        match self.tokenizer.advance() {
            Ok(()) => Some(Ok(*self.tokenizer.current())),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<I: Interner> std::iter::FusedIterator for Tokens<'_, I> {}
