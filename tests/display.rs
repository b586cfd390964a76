//! Printed forms of every node kind.

mod common;

use common::sample;
use fuser::{IrPrinter, NodeKind};
use pretty_assertions::assert_eq;

#[test]
fn test_every_kind_prints() {
    let printed: Vec<(NodeKind, String)> = NodeKind::ALL
        .into_iter()
        .map(|kind| (kind, sample(kind).to_string()))
        .collect();

    let expected = [
        (NodeKind::IterDomain, "I{0 : i1}b.threadIdx.y"),
        (NodeKind::TensorDomain, "[ I{0 : i100}, I{0 : i101}, I{0 : i102} ]"),
        (NodeKind::Tensor, "T1"),
        (NodeKind::TensorView, "TV2[ I{0 : i100}, I{0 : i101} ]"),
        (NodeKind::Float, "0.25f"),
        (NodeKind::Int, "i4"),
        (
            NodeKind::Split,
            "[ I{0 : i100}, I{0 : i101}, I{0 : i102} ] = split([ I{0 : i100}, I{0 : i101} ], axis = 1, factor = 4)\n",
        ),
        (
            NodeKind::Merge,
            "[ I{0 : i100} ] = merge([ I{0 : i100}, I{0 : i101} ], axis = 0)\n",
        ),
        (
            NodeKind::Reorder,
            "[ I{0 : i100}, I{0 : i101}, I{0 : i102} ] = reorder([ I{0 : i100}, I{0 : i101}, I{0 : i102} ], new2old = [2, 0, 1])\n",
        ),
        (NodeKind::UnaryOp, "f6 = cast(i7)\n"),
        (NodeKind::BinaryOp, "i8 = ceilDiv(i9, 32)\n"),
        (NodeKind::ForLoop, "for i11 in I{0 : i12} {\n  i13 = -i14\n}\n"),
        (NodeKind::IfThenElse, "if ( i15 ) {\n  i16 = i17 < i18\n}\n"),
    ];
    let expected: Vec<(NodeKind, String)> = expected
        .into_iter()
        .map(|(kind, text)| (kind, text.to_string()))
        .collect();

    assert_eq!(printed, expected);
}

#[test]
fn test_printer_accumulates_across_statements() {
    let mut printer = IrPrinter::new();
    for kind in [NodeKind::UnaryOp, NodeKind::BinaryOp] {
        fuser::OptInConstDispatch::handle_statement(&mut printer, &sample(kind));
    }
    assert_eq!(printer.finish(), "f6 = cast(i7)\ni8 = ceilDiv(i9, 32)\n");
}
