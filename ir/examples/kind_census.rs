//! Builds a small scheduled loop nest, prints it, and reports how many
//! nodes of each kind it contains.
//!
//! Run with: `cargo run --example kind_census`

use fuser_ir::{
    BinaryOp, BinaryOpType, Expr, Float, ForLoop, IfThenElse, Int, IterDomain, KindCensus,
    OptOutDispatch, ParallelType, Statement, UnaryOp, UnaryOpType,
};

/// Marks the outer loop as a block loop and the inner one as a thread loop.
struct Schedule {
    depth: usize,
}

impl OptOutDispatch for Schedule {
    fn handle_for_loop(&mut self, node: &mut ForLoop) {
        node.range.parallel = match self.depth {
            0 => ParallelType::BlockX,
            _ => ParallelType::ThreadX,
        };
        self.depth += 1;
        for expr in &mut node.body {
            self.handle_expr(expr);
        }
        self.depth -= 1;
    }
}

fn main() {
    let bound = Int::new(10);
    let guard = IfThenElse::new(
        Int::new(11),
        [Expr::from(BinaryOp::new(
            BinaryOpType::Mul,
            Float::new(20),
            Float::new(21),
            Float::constant(22, 0.5),
        ))],
        [Expr::from(UnaryOp::new(UnaryOpType::Neg, Float::new(20), Float::new(21)))],
    );
    let inner = ForLoop::new(Int::new(1), IterDomain::new(Int::constant(0, 0), Int::constant(2, 128)))
        .with_body([Expr::from(guard)]);
    let outer = ForLoop::new(Int::new(0), IterDomain::new(Int::constant(0, 0), bound))
        .with_body([Expr::from(inner)]);

    let mut stmt = Statement::from(outer);
    Schedule { depth: 0 }.handle_statement(&mut stmt);

    print!("{}", stmt);
    println!();
    for (kind, count) in KindCensus::of(&stmt).iter() {
        println!("{:>12}: {}", kind.to_string(), count);
    }
}
