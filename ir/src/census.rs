//! Per-kind node counts.

use crate::ir::{
    BinaryOp, Float, ForLoop, IfThenElse, Int, IterDomain, Merge, NodeKind, Reorder, Split,
    Statement, Tensor, TensorDomain, TensorView, UnaryOp,
};
use crate::visit::OptInConstDispatch;
use hashbrown::HashMap;

/// Counts every node reachable from a statement, grouped by kind.
///
/// Children are counted too: the scalars bounding an `IterDomain`, the axes
/// of a `TensorDomain`, the operands of an arithmetic op, loop bodies, and
/// so on.
///
/// # Example
///
/// ```
/// use fuser_ir::{Float, Int, KindCensus, NodeKind, Statement, UnaryOp, UnaryOpType};
///
/// let cast = UnaryOp::new(UnaryOpType::Cast, Float::new(0), Int::new(1));
/// let census = KindCensus::of(&Statement::from(cast));
///
/// assert_eq!(census.count(NodeKind::UnaryOp), 1);
/// assert_eq!(census.count(NodeKind::Float), 1);
/// assert_eq!(census.count(NodeKind::Int), 1);
/// assert_eq!(census.total(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KindCensus {
    counts: HashMap<NodeKind, usize>,
}

impl KindCensus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of(stmt: &Statement) -> Self {
        let mut census = Self::new();
        census.handle_statement(stmt);
        census
    }

    pub fn count(&self, kind: NodeKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Non-zero counts, in `NodeKind` order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeKind, usize)> + '_ {
        NodeKind::ALL
            .into_iter()
            .map(|kind| (kind, self.count(kind)))
            .filter(|&(_, n)| n > 0)
    }

    fn record(&mut self, kind: NodeKind) {
        *self.counts.entry(kind).or_insert(0) += 1;
    }
}

impl OptInConstDispatch for KindCensus {
    fn handle_iter_domain(&mut self, node: &IterDomain) {
        self.record(NodeKind::IterDomain);
        self.handle_int(&node.start);
        self.handle_int(&node.extent);
    }

    fn handle_tensor_domain(&mut self, node: &TensorDomain) {
        self.record(NodeKind::TensorDomain);
        for axis in &node.axes {
            self.handle_iter_domain(axis);
        }
    }

    fn handle_tensor(&mut self, node: &Tensor) {
        self.record(NodeKind::Tensor);
        if let Some(domain) = &node.domain {
            self.handle_tensor_domain(domain);
        }
    }

    fn handle_tensor_view(&mut self, node: &TensorView) {
        self.record(NodeKind::TensorView);
        self.handle_tensor(&node.tensor);
        self.handle_tensor_domain(&node.domain);
    }

    fn handle_float(&mut self, _node: &Float) {
        self.record(NodeKind::Float);
    }

    fn handle_int(&mut self, _node: &Int) {
        self.record(NodeKind::Int);
    }

    fn handle_split(&mut self, node: &Split) {
        self.record(NodeKind::Split);
        self.handle_tensor_domain(&node.out);
        self.handle_tensor_domain(&node.input);
        self.handle_int(&node.factor);
    }

    fn handle_merge(&mut self, node: &Merge) {
        self.record(NodeKind::Merge);
        self.handle_tensor_domain(&node.out);
        self.handle_tensor_domain(&node.input);
    }

    fn handle_reorder(&mut self, node: &Reorder) {
        self.record(NodeKind::Reorder);
        self.handle_tensor_domain(&node.out);
        self.handle_tensor_domain(&node.input);
    }

    fn handle_unary_op(&mut self, node: &UnaryOp) {
        self.record(NodeKind::UnaryOp);
        self.handle_val(&node.out);
        self.handle_val(&node.input);
    }

    fn handle_binary_op(&mut self, node: &BinaryOp) {
        self.record(NodeKind::BinaryOp);
        self.handle_val(&node.out);
        self.handle_val(&node.lhs);
        self.handle_val(&node.rhs);
    }

    fn handle_for_loop(&mut self, node: &ForLoop) {
        self.record(NodeKind::ForLoop);
        self.handle_int(&node.index);
        self.handle_iter_domain(&node.range);
        for expr in &node.body {
            self.handle_expr(expr);
        }
    }

    fn handle_if_then_else(&mut self, node: &IfThenElse) {
        self.record(NodeKind::IfThenElse);
        self.handle_int(&node.cond);
        for expr in node.then_body.iter().chain(&node.else_body) {
            self.handle_expr(expr);
        }
    }
}
