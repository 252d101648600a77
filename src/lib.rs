//! Arithmetic expression reader: tokenizer, precedence-climbing parser,
//! and a fully parenthesized prefix printer.
//!

pub mod data;
pub mod eval;
pub mod reader;

pub use reader::{parse, parse_and_render, parse_and_render_with, tokenize, ReadErr, ReadResult};

#[cfg(feature = "render")]
mod render;
#[cfg(feature = "render")]
pub use render::render_expr;
