//! Data types for expressions, and the containers behind them.
//!
//! - `Seq` is the growable sequence everything else is stored in.
//! - `InternPool` maps names to `Symbol`s by content, and back.
//!   Symbols are perpetual: the pool never forgets a name.
//! - `Expr` is the parsed expression tree.

mod expr;
mod intern;
mod seq;

pub use expr::*;
pub use intern::*;
pub use seq::Seq;
