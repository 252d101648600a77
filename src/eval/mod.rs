//! Expression evaluator.
//!
//! Values are 64-bit unsigned integers with two's-complement wrapping arithmetic,
//! so `-1` evaluates to `u64::MAX` and `~0` does too.

use crate::data::{BinaryOp, Expr, UnaryOp};

/// Errors in evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The right-hand side of `/` or `%` was zero.
    DivisionByZero { op: BinaryOp, lhs: u64 },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::DivisionByZero { op, lhs } => write!(f, "division by zero: ({op} {lhs} 0)"),
        }
    }
}

impl std::error::Error for Error {}

/// Compute the value of an expression.
pub fn evaluate(expr: &Expr) -> Result<u64, Error> {
    match expr {
        Expr::Int(v) => Ok(*v),
        Expr::Unary { op, operand } => {
            let v = evaluate(operand)?;
            Ok(match op {
                UnaryOp::Neg => v.wrapping_neg(),
                UnaryOp::Not => !v,
            })
        }
        Expr::Binary { op, lhs, rhs } => {
            let lhs = evaluate(lhs)?;
            let rhs = evaluate(rhs)?;
            apply(*op, lhs, rhs)
        }
    }
}

fn apply(op: BinaryOp, lhs: u64, rhs: u64) -> Result<u64, Error> {
    let v = match op {
        BinaryOp::Add => lhs.wrapping_add(rhs),
        BinaryOp::Sub => lhs.wrapping_sub(rhs),
        BinaryOp::Or => lhs | rhs,
        BinaryOp::Xor => lhs ^ rhs,
        BinaryOp::Mul => lhs.wrapping_mul(rhs),
        BinaryOp::Div => lhs
            .checked_div(rhs)
            .ok_or(Error::DivisionByZero { op, lhs })?,
        BinaryOp::Rem => lhs
            .checked_rem(rhs)
            .ok_or(Error::DivisionByZero { op, lhs })?,
    };
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::InternPool;
    use crate::reader::{parse, LexOptions};

    fn eval_str(input: &str) -> Result<u64, Error> {
        let mut pool = InternPool::new();
        let e = parse(&mut pool, input, LexOptions::default()).unwrap();
        evaluate(&e)
    }

    #[test]
    fn arithmetic() {
        for (input, want) in [
            ("1+2*3", 7u64),
            ("(1+2)*3", 9),
            ("10-2-3", 5),
            ("100/10/5", 2),
            ("17%5", 2),
            ("6|9", 15),
            ("6^3", 5),
            ("2*3-4/5*6+7", 13),
        ] {
            assert_eq!(eval_str(input), Ok(want), "unexpected value for {:?}", input);
        }
    }

    #[test]
    fn wrapping() {
        assert_eq!(eval_str("-1"), Ok(u64::MAX));
        assert_eq!(eval_str("~0"), Ok(u64::MAX));
        assert_eq!(eval_str("0-1+1"), Ok(0));
        // The prefix applies to the whole term.
        assert_eq!(eval_str("-2*3"), Ok(6u64.wrapping_neg()));
        assert_eq!(eval_str("18446744073709551615+1"), Ok(0));
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(
            eval_str("7/(1-1)"),
            Err(Error::DivisionByZero {
                op: BinaryOp::Div,
                lhs: 7
            })
        );
        let e = eval_str("3%0").unwrap_err();
        assert_eq!(e.to_string(), "division by zero: (% 3 0)");
    }
}
