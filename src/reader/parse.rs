//! Recursive-descent parser for arithmetic expressions.
//!
//! Each precedence tier is a grammar rule:
//!
//! ```text
//! expr   := term   { ('+' | '-' | '|' | '^') term }
//! term   := factor { ('*' | '/' | '%') factor }
//! factor := integer
//!         | '(' expr ')'
//!         | ('-' | '~') term
//! ```
//!
//! Binary operators are left-associative within their tier.
//! Note that a prefix operator takes a whole `term`, not a `factor`:
//! `-2*3` is `-(2*3)`.

use crate::data::{BinaryOp, Expr, InternPool, Interner, UnaryOp};

use super::{LexOptions, ReadErr, ReadResult, TokenKind, Tokenizer};

fn additive(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Char(b'+') => Some(BinaryOp::Add),
        TokenKind::Char(b'-') => Some(BinaryOp::Sub),
        TokenKind::Char(b'|') => Some(BinaryOp::Or),
        TokenKind::Char(b'^') => Some(BinaryOp::Xor),
        _ => None,
    }
}

fn multiplicative(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Char(b'*') => Some(BinaryOp::Mul),
        TokenKind::Char(b'/') => Some(BinaryOp::Div),
        TokenKind::Char(b'%') => Some(BinaryOp::Rem),
        _ => None,
    }
}

fn prefix(kind: TokenKind) -> Option<UnaryOp> {
    match kind {
        TokenKind::Char(b'-') => Some(UnaryOp::Neg),
        TokenKind::Char(b'~') => Some(UnaryOp::Not),
        _ => None,
    }
}

/// Parser state: the token stream, positioned at the next unconsumed token.
///
/// Nesting is limited: both the depth of parentheses and prefix operators,
/// and the height of the resulting tree, are at most `max_depth`.
pub struct Parser<'a, I: Interner = InternPool> {
    tokens: Tokenizer<'a, I>,
    depth: usize,
    max_depth: usize,
}

impl<'a, I: Interner> Parser<'a, I> {
    /// Default limit on expression nesting.
    pub const DEFAULT_MAX_DEPTH: usize = 256;

    pub fn new(interner: &'a mut I, input: &'a [u8], options: LexOptions) -> ReadResult<Self> {
        Ok(Self::from_tokenizer(Tokenizer::new(interner, input, options)?))
    }

    /// Parse from an already-positioned tokenizer.
    pub fn from_tokenizer(tokens: Tokenizer<'a, I>) -> Self {
        Parser {
            tokens,
            depth: 0,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn tokenizer(&self) -> &Tokenizer<'a, I> {
        &self.tokens
    }

    pub fn into_tokenizer(self) -> Tokenizer<'a, I> {
        self.tokens
    }

    /// Parse one expression, leaving any tokens after it unconsumed.
    pub fn parse_expr(&mut self) -> ReadResult<Expr> {
        Ok(self.expr()?.0)
    }

    fn too_deep(&self) -> ReadErr {
        ReadErr::TooDeep {
            span: self.tokens.current().span(),
            limit: self.max_depth,
        }
    }

    // Heights count nodes on the longest root-to-leaf path; an integer is 1.
    fn check_height(&self, height: usize) -> ReadResult<usize> {
        if height > self.max_depth {
            Err(self.too_deep())
        } else {
            Ok(height)
        }
    }

    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> ReadResult<T>) -> ReadResult<T> {
        if self.depth >= self.max_depth {
            return Err(self.too_deep());
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn expr(&mut self) -> ReadResult<(Expr, usize)> {
        let (mut lhs, mut height) = self.term()?;
        while let Some(op) = additive(self.tokens.current().kind()) {
            self.tokens.advance()?;
            let (rhs, rh) = self.term()?;
            height = self.check_height(height.max(rh) + 1)?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        Ok((lhs, height))
    }

    fn term(&mut self) -> ReadResult<(Expr, usize)> {
        let (mut lhs, mut height) = self.factor()?;
        while let Some(op) = multiplicative(self.tokens.current().kind()) {
            self.tokens.advance()?;
            let (rhs, rh) = self.factor()?;
            height = self.check_height(height.max(rh) + 1)?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        Ok((lhs, height))
    }

    fn factor(&mut self) -> ReadResult<(Expr, usize)> {
        let token = *self.tokens.current();
        if let Some(value) = token.int_value() {
            let height = self.check_height(1)?;
            self.tokens.advance()?;
            return Ok((Expr::int(value), height));
        }
        if self.tokens.match_token(TokenKind::Char(b'('))? {
            let inner = self.nested(|p| p.expr())?;
            self.tokens.expect(TokenKind::Char(b')'))?;
            return Ok(inner);
        }
        if let Some(op) = prefix(token.kind()) {
            self.tokens.advance()?;
            let (operand, height) = self.nested(|p| p.term())?;
            let height = self.check_height(height + 1)?;
            return Ok((Expr::unary(op, operand), height));
        }
        Err(ReadErr::MissingOperand {
            span: token.span(),
            found: token.kind(),
        })
    }

    /// Require that the input is used up.
    pub fn finish(&mut self) -> ReadResult<()> {
        self.tokens.expect(TokenKind::Eof)
    }
}
