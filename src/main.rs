//! Render expressions, one per line of stdin, as fully parenthesized prefix expressions.
//!
//! With `--eval`, also print each expression's value.
//!
//! ```ignore
//! echo '1+2*3' | exprish
//! (+ 1 (* 2 3))
//! ```

use std::io::{BufRead, Write};

use exprish::data::InternPool;
use exprish::eval::evaluate;
use exprish::reader::{parse, LexOptions};

fn main() -> std::io::Result<()> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let show_value = std::env::args().skip(1).any(|a| a == "--eval");
    let strict = std::env::args().skip(1).any(|a| a == "--strict");
    let options = LexOptions {
        strict,
        ..Default::default()
    };

    // One pool for the whole session; names stay interned across lines.
    let mut pool = InternPool::new();
    let mut stdout = std::io::stdout().lock();
    let mut failed = false;
    for (lineno, line) in std::io::stdin().lock().lines().enumerate() {
        let line = line?;
        match parse(&mut pool, &line, options) {
            Ok(expr) if show_value => match evaluate(&expr) {
                Ok(v) => writeln!(stdout, "{expr} = {v}")?,
                Err(e) => {
                    writeln!(stdout, "{expr}")?;
                    eprintln!("line {}: {e}", lineno + 1);
                    failed = true;
                }
            },
            Ok(expr) => writeln!(stdout, "{expr}")?,
            Err(e) => {
                eprintln!("line {}: {e}", lineno + 1);
                failed = true;
            }
        }
    }
    if failed {
        stdout.flush()?;
        std::process::exit(1);
    }
    Ok(())
}
