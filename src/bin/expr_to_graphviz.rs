//! Render an expression tree as Graphviz.
//!
//! Usage:
//!
//! ```ignore
//! echo -n '(1+2)*3' | expr_to_graphviz | dot -T png >output.png
//! ```

use std::io::{stdout, Read, Write};

use exprish::{data::InternPool, reader::LexOptions, render_expr};

pub fn main() -> std::io::Result<()> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let mut pool = InternPool::new();
    let expr = exprish::parse(&mut pool, input.trim_end(), LexOptions::default())?;
    stdout().write_all(&render_expr(&expr))
}
