//! Expression trees.
//!
//! The Display implementation renders a tree as a fully parenthesized prefix expression:
//! every operator application is `(op arg1 [arg2])`.

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `-`
    Neg,
    /// `~`
    Not,
}

/// Infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Or,
    Xor,
    Mul,
    Div,
    Rem,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "~",
        }
    }
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Or => "|",
            BinaryOp::Xor => "^",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
        }
    }
}

impl std::fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An arithmetic expression.
///
/// Each node owns its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Int(u64),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    pub fn int(value: u64) -> Self {
        Expr::Int(value)
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Int(v) => write!(f, "{v}"),
            Expr::Unary { op, operand } => write!(f, "({op} {operand})"),
            Expr::Binary { op, lhs, rhs } => write!(f, "({op} {lhs} {rhs})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BinaryOp, Expr, UnaryOp};

    #[test]
    fn render_leaves() {
        assert_eq!(Expr::int(42).to_string(), "42");
        assert_eq!(Expr::int(u64::MAX).to_string(), "18446744073709551615");
    }

    #[test]
    fn render_unary() {
        let e = Expr::unary(UnaryOp::Neg, Expr::int(80));
        assert_eq!(e.to_string(), "(- 80)");
        let e = Expr::unary(UnaryOp::Not, e);
        assert_eq!(e.to_string(), "(~ (- 80))");
    }

    #[test]
    fn render_nested() {
        let e = Expr::binary(
            BinaryOp::Add,
            Expr::int(1),
            Expr::binary(BinaryOp::Mul, Expr::int(2), Expr::int(3)),
        );
        assert_eq!(e.to_string(), "(+ 1 (* 2 3))");

        for (op, want) in [
            (BinaryOp::Sub, "(- 7 8)"),
            (BinaryOp::Or, "(| 7 8)"),
            (BinaryOp::Xor, "(^ 7 8)"),
            (BinaryOp::Div, "(/ 7 8)"),
            (BinaryOp::Rem, "(% 7 8)"),
        ] {
            let got = Expr::binary(op, Expr::int(7), Expr::int(8)).to_string();
            assert_eq!(got, want, "unexpected rendering for {:?}", op);
        }
    }
}
