use std::collections::VecDeque;

use dot_writer::Attributes;
use dot_writer::DotWriter;

use crate::data::Expr;

fn node_name(idx: usize) -> String {
    format!("expr_{idx}")
}

/// Render an expression tree into a Graphviz graph.
///
/// Operators are nodes labeled with their symbol, with edges to their operands
/// (left before right); integers are record-shaped leaves.
pub fn render_expr(expr: &Expr) -> Vec<u8> {
    let mut outbuf = Vec::new();
    {
        let mut writer = DotWriter::from(&mut outbuf);
        let mut graph = writer.digraph();
        let mut queue = VecDeque::new();
        queue.push_back((node_name(0), expr));
        let mut next_idx = 1;

        while let Some((id, it)) = queue.pop_front() {
            let mut node = graph.node_named(&id);
            let children: Vec<&Expr> = match it {
                Expr::Int(v) => {
                    node.set_shape(dot_writer::Shape::Record);
                    node.set_label(&v.to_string());
                    Vec::new()
                }
                Expr::Unary { op, operand } => {
                    node.set_label(op.symbol());
                    vec![operand.as_ref()]
                }
                Expr::Binary { op, lhs, rhs } => {
                    node.set_label(op.symbol());
                    vec![lhs.as_ref(), rhs.as_ref()]
                }
            };
            std::mem::drop(node);

            for child in children {
                let child_id = node_name(next_idx);
                next_idx += 1;
                graph.edge(&id, &child_id);
                queue.push_back((child_id, child));
            }
        }
    }
    outbuf
}
