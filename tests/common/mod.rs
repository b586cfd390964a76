#![allow(dead_code)]

use fuser::{
    BinaryOp, BinaryOpType, DataType, Float, ForLoop, IfThenElse, Int, IterDomain, IterFlags,
    Merge, NodeKind, OptInConstDispatch, OptInDispatch, OptInMutator, ParallelType, Reorder, Split,
    Statement, Tensor, TensorDomain, TensorView, UnaryOp, UnaryOpType,
};

pub fn axis(start: i64, extent: u32) -> IterDomain {
    IterDomain::new(Int::constant(0, start), Int::new(extent))
}

pub fn domain(rank: u32) -> TensorDomain {
    TensorDomain::new((0..rank).map(|i| axis(0, 100 + i)))
}

/// One representative node of the given kind.
pub fn sample(kind: NodeKind) -> Statement {
    match kind {
        NodeKind::IterDomain => axis(0, 1)
            .with_parallel(ParallelType::ThreadY)
            .with_flags(IterFlags::BROADCAST)
            .into(),
        NodeKind::TensorDomain => domain(3).into(),
        NodeKind::Tensor => Tensor::new(1, DataType::Int).with_domain(domain(2)).into(),
        NodeKind::TensorView => {
            TensorView::new(2, Tensor::new(1, DataType::Float), domain(2)).into()
        }
        NodeKind::Float => Float::constant(3, 0.25).into(),
        NodeKind::Int => Int::new(4).into(),
        NodeKind::Split => Split::new(domain(3), domain(2), 1, Int::constant(5, 4))
            .expect("axis 1 exists")
            .into(),
        NodeKind::Merge => Merge::new(domain(1), domain(2), 0)
            .expect("axes 0 and 1 exist")
            .into(),
        NodeKind::Reorder => Reorder::new(domain(3), domain(3), vec![2, 0, 1])
            .expect("a permutation")
            .into(),
        NodeKind::UnaryOp => UnaryOp::new(UnaryOpType::Cast, Float::new(6), Int::new(7)).into(),
        NodeKind::BinaryOp => {
            BinaryOp::new(BinaryOpType::CeilDiv, Int::new(8), Int::new(9), Int::constant(10, 32))
                .into()
        }
        NodeKind::ForLoop => ForLoop::new(Int::new(11), axis(0, 12))
            .with_body([UnaryOp::new(UnaryOpType::Neg, Int::new(13), Int::new(14)).into()])
            .into(),
        NodeKind::IfThenElse => IfThenElse::new(
            Int::new(15),
            [BinaryOp::new(BinaryOpType::Lt, Int::new(16), Int::new(17), Int::new(18)).into()],
            [],
        )
        .into(),
    }
}

/// A representative node of every kind, in `NodeKind` order.
pub fn samples() -> Vec<Statement> {
    NodeKind::ALL.into_iter().map(sample).collect()
}

/// Logs which per-kind method received which node.
#[derive(Default)]
pub struct Recorder {
    pub calls: Vec<(NodeKind, Statement)>,
}

impl Recorder {
    fn record(&mut self, kind: NodeKind, node: impl Into<Statement>) {
        self.calls.push((kind, node.into()));
    }
}

macro_rules! record_visits {
    ($visitor:ident, $($method:ident($node:ty) => $kind:ident),+ $(,)?) => {
        impl $visitor for Recorder {
            $(
                fn $method(&mut self, node: $node) {
                    self.record(NodeKind::$kind, node.clone());
                }
            )+
        }
    };
}

macro_rules! record_mutations {
    ($($method:ident($node:ident) => $kind:ident),+ $(,)?) => {
        impl OptInMutator for Recorder {
            $(
                fn $method(&mut self, node: $node) -> Statement {
                    self.record(NodeKind::$kind, node.clone());
                    node.into()
                }
            )+
        }
    };
}

record_visits!(
    OptInDispatch,
    handle_iter_domain(&mut IterDomain) => IterDomain,
    handle_tensor_domain(&mut TensorDomain) => TensorDomain,
    handle_tensor(&mut Tensor) => Tensor,
    handle_tensor_view(&mut TensorView) => TensorView,
    handle_float(&mut Float) => Float,
    handle_int(&mut Int) => Int,
    handle_split(&mut Split) => Split,
    handle_merge(&mut Merge) => Merge,
    handle_reorder(&mut Reorder) => Reorder,
    handle_unary_op(&mut UnaryOp) => UnaryOp,
    handle_binary_op(&mut BinaryOp) => BinaryOp,
    handle_for_loop(&mut ForLoop) => ForLoop,
    handle_if_then_else(&mut IfThenElse) => IfThenElse,
);

record_visits!(
    OptInConstDispatch,
    handle_iter_domain(&IterDomain) => IterDomain,
    handle_tensor_domain(&TensorDomain) => TensorDomain,
    handle_tensor(&Tensor) => Tensor,
    handle_tensor_view(&TensorView) => TensorView,
    handle_float(&Float) => Float,
    handle_int(&Int) => Int,
    handle_split(&Split) => Split,
    handle_merge(&Merge) => Merge,
    handle_reorder(&Reorder) => Reorder,
    handle_unary_op(&UnaryOp) => UnaryOp,
    handle_binary_op(&BinaryOp) => BinaryOp,
    handle_for_loop(&ForLoop) => ForLoop,
    handle_if_then_else(&IfThenElse) => IfThenElse,
);

record_mutations!(
    mutate_iter_domain(IterDomain) => IterDomain,
    mutate_tensor_domain(TensorDomain) => TensorDomain,
    mutate_tensor(Tensor) => Tensor,
    mutate_tensor_view(TensorView) => TensorView,
    mutate_float(Float) => Float,
    mutate_int(Int) => Int,
    mutate_split(Split) => Split,
    mutate_merge(Merge) => Merge,
    mutate_reorder(Reorder) => Reorder,
    mutate_unary_op(UnaryOp) => UnaryOp,
    mutate_binary_op(BinaryOp) => BinaryOp,
    mutate_for_loop(ForLoop) => ForLoop,
    mutate_if_then_else(IfThenElse) => IfThenElse,
);
