//! Generic dispatch from a node to the handler method for its concrete kind.
//!
//! There are three parallel families, one per way of touching the IR:
//!
//! - **visit** ([`Handler`]): `&mut` access, no result. Printers that annotate,
//!   passes that tweak fields in place, collectors.
//! - **const visit** ([`ConstHandler`]): `&` access only, no result. A
//!   handler reached through this path can't mutate the node or its children.
//! - **mutate** ([`MutHandler`]): takes the node by value and returns the
//!   statement that replaces it, which may be of a different kind.
//!
//! Each family has the same three entry points. At the `Statement` level the
//! dispatcher picks the category and re-enters through the handler's own
//! `val`/`expr` method, so a handler that overrides its category entry point
//! sees every node of that category. At the `Val`/`Expr` level it selects
//! the concrete kind (and, for scalars, the data type) and calls the matching
//! per-kind method.
//!
//! The dispatcher keeps no state and never walks children: a handler that
//! wants to recurse calls back into its own entry points.
//!
//! Most code should not implement these contracts directly; implement one of
//! the opt-out/opt-in traits in [`crate::visit`] or [`crate::mutate`] instead.

use crate::ir::{
    BinaryOp, Expr, Float, ForLoop, IfThenElse, Int, IterDomain, Merge, Reorder, Scalar, Split,
    Statement, Tensor, TensorDomain, TensorView, UnaryOp, Val,
};

#[cfg(feature = "forged-tags")]
use crate::error::{TagSpace, unknown_tag};
#[cfg(feature = "forged-tags")]
use crate::ir::RawTag;

/// Handler contract for the visit family.
pub trait Handler {
    fn val(&mut self, val: &mut Val);
    fn expr(&mut self, expr: &mut Expr);

    fn iter_domain(&mut self, node: &mut IterDomain);
    fn tensor_domain(&mut self, node: &mut TensorDomain);
    fn tensor(&mut self, node: &mut Tensor);
    fn tensor_view(&mut self, node: &mut TensorView);
    fn float(&mut self, node: &mut Float);
    fn int(&mut self, node: &mut Int);

    fn split(&mut self, node: &mut Split);
    fn merge(&mut self, node: &mut Merge);
    fn reorder(&mut self, node: &mut Reorder);
    fn unary_op(&mut self, node: &mut UnaryOp);
    fn binary_op(&mut self, node: &mut BinaryOp);
    fn for_loop(&mut self, node: &mut ForLoop);
    fn if_then_else(&mut self, node: &mut IfThenElse);
}

/// Handler contract for the const visit family.
pub trait ConstHandler {
    fn val(&mut self, val: &Val);
    fn expr(&mut self, expr: &Expr);

    fn iter_domain(&mut self, node: &IterDomain);
    fn tensor_domain(&mut self, node: &TensorDomain);
    fn tensor(&mut self, node: &Tensor);
    fn tensor_view(&mut self, node: &TensorView);
    fn float(&mut self, node: &Float);
    fn int(&mut self, node: &Int);

    fn split(&mut self, node: &Split);
    fn merge(&mut self, node: &Merge);
    fn reorder(&mut self, node: &Reorder);
    fn unary_op(&mut self, node: &UnaryOp);
    fn binary_op(&mut self, node: &BinaryOp);
    fn for_loop(&mut self, node: &ForLoop);
    fn if_then_else(&mut self, node: &IfThenElse);
}

/// Handler contract for the mutate family.
///
/// Every method consumes the node and returns its replacement. Returning the
/// input unchanged is the identity mutation.
pub trait MutHandler {
    fn val(&mut self, val: Val) -> Statement;
    fn expr(&mut self, expr: Expr) -> Statement;

    fn iter_domain(&mut self, node: IterDomain) -> Statement;
    fn tensor_domain(&mut self, node: TensorDomain) -> Statement;
    fn tensor(&mut self, node: Tensor) -> Statement;
    fn tensor_view(&mut self, node: TensorView) -> Statement;
    fn float(&mut self, node: Float) -> Statement;
    fn int(&mut self, node: Int) -> Statement;

    fn split(&mut self, node: Split) -> Statement;
    fn merge(&mut self, node: Merge) -> Statement;
    fn reorder(&mut self, node: Reorder) -> Statement;
    fn unary_op(&mut self, node: UnaryOp) -> Statement;
    fn binary_op(&mut self, node: BinaryOp) -> Statement;
    fn for_loop(&mut self, node: ForLoop) -> Statement;
    fn if_then_else(&mut self, node: IfThenElse) -> Statement;
}

// ============================================================================
// Visit
// ============================================================================

pub fn dispatch_statement<H: Handler + ?Sized>(handler: &mut H, stmt: &mut Statement) {
    match stmt {
        Statement::Val(val) => handler.val(val),
        Statement::Expr(expr) => handler.expr(expr),
    }
}

pub fn dispatch_val<H: Handler + ?Sized>(handler: &mut H, val: &mut Val) {
    match val {
        Val::IterDomain(node) => handler.iter_domain(node),
        Val::TensorDomain(node) => handler.tensor_domain(node),
        Val::Tensor(node) => handler.tensor(node),
        Val::TensorView(node) => handler.tensor_view(node),
        Val::Scalar(Scalar::Float(node)) => handler.float(node),
        Val::Scalar(Scalar::Int(node)) => handler.int(node),
        #[cfg(feature = "forged-tags")]
        Val::Scalar(Scalar::Forged(RawTag(raw))) => unknown_tag(TagSpace::DataType, *raw),
        #[cfg(feature = "forged-tags")]
        Val::Forged(RawTag(raw)) => unknown_tag(TagSpace::ValType, *raw),
    }
}

pub fn dispatch_expr<H: Handler + ?Sized>(handler: &mut H, expr: &mut Expr) {
    match expr {
        Expr::Split(node) => handler.split(node),
        Expr::Merge(node) => handler.merge(node),
        Expr::Reorder(node) => handler.reorder(node),
        Expr::UnaryOp(node) => handler.unary_op(node),
        Expr::BinaryOp(node) => handler.binary_op(node),
        Expr::ForLoop(node) => handler.for_loop(node),
        Expr::IfThenElse(node) => handler.if_then_else(node),
        #[cfg(feature = "forged-tags")]
        Expr::Forged(RawTag(raw)) => unknown_tag(TagSpace::ExprType, *raw),
    }
}

// ============================================================================
// Const visit
// ============================================================================

pub fn const_dispatch_statement<H: ConstHandler + ?Sized>(handler: &mut H, stmt: &Statement) {
    match stmt {
        Statement::Val(val) => handler.val(val),
        Statement::Expr(expr) => handler.expr(expr),
    }
}

pub fn const_dispatch_val<H: ConstHandler + ?Sized>(handler: &mut H, val: &Val) {
    match val {
        Val::IterDomain(node) => handler.iter_domain(node),
        Val::TensorDomain(node) => handler.tensor_domain(node),
        Val::Tensor(node) => handler.tensor(node),
        Val::TensorView(node) => handler.tensor_view(node),
        Val::Scalar(Scalar::Float(node)) => handler.float(node),
        Val::Scalar(Scalar::Int(node)) => handler.int(node),
        #[cfg(feature = "forged-tags")]
        Val::Scalar(Scalar::Forged(RawTag(raw))) => unknown_tag(TagSpace::DataType, *raw),
        #[cfg(feature = "forged-tags")]
        Val::Forged(RawTag(raw)) => unknown_tag(TagSpace::ValType, *raw),
    }
}

pub fn const_dispatch_expr<H: ConstHandler + ?Sized>(handler: &mut H, expr: &Expr) {
    match expr {
        Expr::Split(node) => handler.split(node),
        Expr::Merge(node) => handler.merge(node),
        Expr::Reorder(node) => handler.reorder(node),
        Expr::UnaryOp(node) => handler.unary_op(node),
        Expr::BinaryOp(node) => handler.binary_op(node),
        Expr::ForLoop(node) => handler.for_loop(node),
        Expr::IfThenElse(node) => handler.if_then_else(node),
        #[cfg(feature = "forged-tags")]
        Expr::Forged(RawTag(raw)) => unknown_tag(TagSpace::ExprType, *raw),
    }
}

// ============================================================================
// Mutate
// ============================================================================

pub fn mutator_dispatch_statement<M: MutHandler + ?Sized>(
    mutator: &mut M,
    stmt: Statement,
) -> Statement {
    let category = stmt.category();
    let replacement = match stmt {
        Statement::Val(val) => mutator.val(val),
        Statement::Expr(expr) => mutator.expr(expr),
    };
    if replacement.category() != category {
        tracing::debug!(
            from = %category,
            to = %replacement.category(),
            "mutation replaced statement with one of another category"
        );
    }
    replacement
}

pub fn mutator_dispatch_val<M: MutHandler + ?Sized>(mutator: &mut M, val: Val) -> Statement {
    match val {
        Val::IterDomain(node) => mutator.iter_domain(node),
        Val::TensorDomain(node) => mutator.tensor_domain(node),
        Val::Tensor(node) => mutator.tensor(node),
        Val::TensorView(node) => mutator.tensor_view(node),
        Val::Scalar(Scalar::Float(node)) => mutator.float(node),
        Val::Scalar(Scalar::Int(node)) => mutator.int(node),
        #[cfg(feature = "forged-tags")]
        Val::Scalar(Scalar::Forged(RawTag(raw))) => unknown_tag(TagSpace::DataType, raw),
        #[cfg(feature = "forged-tags")]
        Val::Forged(RawTag(raw)) => unknown_tag(TagSpace::ValType, raw),
    }
}

pub fn mutator_dispatch_expr<M: MutHandler + ?Sized>(mutator: &mut M, expr: Expr) -> Statement {
    match expr {
        Expr::Split(node) => mutator.split(node),
        Expr::Merge(node) => mutator.merge(node),
        Expr::Reorder(node) => mutator.reorder(node),
        Expr::UnaryOp(node) => mutator.unary_op(node),
        Expr::BinaryOp(node) => mutator.binary_op(node),
        Expr::ForLoop(node) => mutator.for_loop(node),
        Expr::IfThenElse(node) => mutator.if_then_else(node),
        #[cfg(feature = "forged-tags")]
        Expr::Forged(RawTag(raw)) => unknown_tag(TagSpace::ExprType, raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{NodeKind, UnaryOpType};
    use alloc::vec::Vec;

    /// Records which per-kind method each dispatch lands in.
    #[derive(Default)]
    struct Trace {
        entries: Vec<&'static str>,
        kinds: Vec<NodeKind>,
    }

    impl Handler for Trace {
        fn val(&mut self, val: &mut Val) {
            self.entries.push("val");
            dispatch_val(self, val)
        }
        fn expr(&mut self, expr: &mut Expr) {
            self.entries.push("expr");
            dispatch_expr(self, expr)
        }
        fn iter_domain(&mut self, _: &mut IterDomain) {
            self.kinds.push(NodeKind::IterDomain)
        }
        fn tensor_domain(&mut self, _: &mut TensorDomain) {
            self.kinds.push(NodeKind::TensorDomain)
        }
        fn tensor(&mut self, _: &mut Tensor) {
            self.kinds.push(NodeKind::Tensor)
        }
        fn tensor_view(&mut self, _: &mut TensorView) {
            self.kinds.push(NodeKind::TensorView)
        }
        fn float(&mut self, _: &mut Float) {
            self.kinds.push(NodeKind::Float)
        }
        fn int(&mut self, node: &mut Int) {
            node.value = Some(node.value.unwrap_or(0) + 1);
            self.kinds.push(NodeKind::Int)
        }
        fn split(&mut self, _: &mut Split) {
            self.kinds.push(NodeKind::Split)
        }
        fn merge(&mut self, _: &mut Merge) {
            self.kinds.push(NodeKind::Merge)
        }
        fn reorder(&mut self, _: &mut Reorder) {
            self.kinds.push(NodeKind::Reorder)
        }
        fn unary_op(&mut self, _: &mut UnaryOp) {
            self.kinds.push(NodeKind::UnaryOp)
        }
        fn binary_op(&mut self, _: &mut BinaryOp) {
            self.kinds.push(NodeKind::BinaryOp)
        }
        fn for_loop(&mut self, _: &mut ForLoop) {
            self.kinds.push(NodeKind::ForLoop)
        }
        fn if_then_else(&mut self, _: &mut IfThenElse) {
            self.kinds.push(NodeKind::IfThenElse)
        }
    }

    #[test]
    fn test_statement_reenters_through_category_hook() {
        let mut trace = Trace::default();
        let mut stmt = Statement::from(Int::new(0));
        dispatch_statement(&mut trace, &mut stmt);
        dispatch_statement(
            &mut trace,
            &mut Statement::from(UnaryOp::new(UnaryOpType::Neg, Int::new(1), Int::new(2))),
        );

        assert_eq!(trace.entries, ["val", "expr"]);
        assert_eq!(trace.kinds, [NodeKind::Int, NodeKind::UnaryOp]);
    }

    #[test]
    fn test_visit_can_edit_in_place() {
        let mut trace = Trace::default();
        let mut val = Val::from(Int::constant(0, 41));
        dispatch_val(&mut trace, &mut val);
        assert_eq!(val, Val::from(Int::constant(0, 42)));
        // The category hook was bypassed.
        assert!(trace.entries.is_empty());
    }

    /// Swaps every scalar for the other data type.
    struct FlipScalars;

    impl MutHandler for FlipScalars {
        fn val(&mut self, val: Val) -> Statement {
            mutator_dispatch_val(self, val)
        }
        fn expr(&mut self, expr: Expr) -> Statement {
            mutator_dispatch_expr(self, expr)
        }
        fn iter_domain(&mut self, node: IterDomain) -> Statement {
            node.into()
        }
        fn tensor_domain(&mut self, node: TensorDomain) -> Statement {
            node.into()
        }
        fn tensor(&mut self, node: Tensor) -> Statement {
            node.into()
        }
        fn tensor_view(&mut self, node: TensorView) -> Statement {
            node.into()
        }
        fn float(&mut self, node: Float) -> Statement {
            Int::new(node.name).into()
        }
        fn int(&mut self, node: Int) -> Statement {
            Float::new(node.name).into()
        }
        fn split(&mut self, node: Split) -> Statement {
            node.into()
        }
        fn merge(&mut self, node: Merge) -> Statement {
            node.into()
        }
        fn reorder(&mut self, node: Reorder) -> Statement {
            node.into()
        }
        fn unary_op(&mut self, node: UnaryOp) -> Statement {
            node.into()
        }
        fn binary_op(&mut self, node: BinaryOp) -> Statement {
            node.into()
        }
        fn for_loop(&mut self, node: ForLoop) -> Statement {
            // Collapse the loop to its index.
            node.index.into()
        }
        fn if_then_else(&mut self, node: IfThenElse) -> Statement {
            node.into()
        }
    }

    #[test]
    fn test_mutate_returns_handler_result() {
        let out = mutator_dispatch_statement(&mut FlipScalars, Float::new(3).into());
        assert_eq!(out, Statement::from(Int::new(3)));

        let out = mutator_dispatch_val(&mut FlipScalars, Int::new(4).into());
        assert_eq!(out, Statement::from(Float::new(4)));
    }

    #[test]
    fn test_mutate_may_change_category() {
        crate::test_utils::init_test_logging();
        let range = IterDomain::new(Int::constant(0, 0), Int::new(1));
        let fl = ForLoop::new(Int::new(2), range);
        let out = mutator_dispatch_statement(&mut FlipScalars, fl.into());
        assert_eq!(out, Statement::from(Int::new(2)));
    }
}
