//! Visitor base traits.
//!
//! Three flavours, all built on the dispatcher in [`crate::dispatch`]:
//!
//! - [`OptOutDispatch`]: every per-kind method has a no-op default. Override
//!   the kinds you care about and ignore the rest.
//! - [`OptInDispatch`]: every per-kind method is required. A visitor that
//!   forgets a kind does not compile.
//! - [`OptInConstDispatch`]: like `OptInDispatch`, but every method receives
//!   a shared reference, so nothing reached through it can be mutated.
//!
//! The `handle_statement`/`handle_val`/`handle_expr` entry points are what a
//! visitor calls to recurse into children. None of the defaults walk
//! children on their own.

use crate::dispatch::{
    ConstHandler, Handler, const_dispatch_expr, const_dispatch_statement, const_dispatch_val,
    dispatch_expr, dispatch_statement, dispatch_val,
};
use crate::ir::{
    BinaryOp, Expr, Float, ForLoop, IfThenElse, Int, IterDomain, Merge, Reorder, Split,
    Statement, Tensor, TensorDomain, TensorView, UnaryOp, Val,
};

/// Visitor that only handles the node kinds it overrides.
///
/// # Example
///
/// ```
/// use fuser_ir::{Float, Int, OptOutDispatch, Statement};
///
/// // Round every float constant; everything else is left alone.
/// struct RoundFloats;
///
/// impl OptOutDispatch for RoundFloats {
///     fn handle_float(&mut self, node: &mut Float) {
///         node.value = node.value.map(f32::round);
///     }
/// }
///
/// let mut stmt = Statement::from(Float::constant(0, 2.7));
/// RoundFloats.handle_statement(&mut stmt);
/// assert_eq!(stmt, Statement::from(Float::constant(0, 3.0)));
///
/// let mut stmt = Statement::from(Int::constant(1, 5));
/// RoundFloats.handle_statement(&mut stmt);
/// assert_eq!(stmt, Statement::from(Int::constant(1, 5)));
/// ```
pub trait OptOutDispatch {
    fn handle_statement(&mut self, stmt: &mut Statement) {
        dispatch_statement(&mut OptOut(self), stmt)
    }

    fn handle_val(&mut self, val: &mut Val) {
        dispatch_val(&mut OptOut(self), val)
    }

    fn handle_expr(&mut self, expr: &mut Expr) {
        dispatch_expr(&mut OptOut(self), expr)
    }

    fn handle_iter_domain(&mut self, _node: &mut IterDomain) {}
    fn handle_tensor_domain(&mut self, _node: &mut TensorDomain) {}
    fn handle_tensor(&mut self, _node: &mut Tensor) {}
    fn handle_tensor_view(&mut self, _node: &mut TensorView) {}
    fn handle_float(&mut self, _node: &mut Float) {}
    fn handle_int(&mut self, _node: &mut Int) {}

    fn handle_split(&mut self, _node: &mut Split) {}
    fn handle_merge(&mut self, _node: &mut Merge) {}
    fn handle_reorder(&mut self, _node: &mut Reorder) {}
    fn handle_unary_op(&mut self, _node: &mut UnaryOp) {}
    fn handle_binary_op(&mut self, _node: &mut BinaryOp) {}
    fn handle_for_loop(&mut self, _node: &mut ForLoop) {}
    fn handle_if_then_else(&mut self, _node: &mut IfThenElse) {}
}

/// Visitor that must handle every node kind.
///
/// Leaving out a kind is a compile error:
///
/// ```compile_fail
/// use fuser_ir::*;
///
/// struct NoMerge;
///
/// impl OptInDispatch for NoMerge {
///     fn handle_iter_domain(&mut self, _: &mut IterDomain) {}
///     fn handle_tensor_domain(&mut self, _: &mut TensorDomain) {}
///     fn handle_tensor(&mut self, _: &mut Tensor) {}
///     fn handle_tensor_view(&mut self, _: &mut TensorView) {}
///     fn handle_float(&mut self, _: &mut Float) {}
///     fn handle_int(&mut self, _: &mut Int) {}
///     fn handle_split(&mut self, _: &mut Split) {}
///     fn handle_reorder(&mut self, _: &mut Reorder) {}
///     fn handle_unary_op(&mut self, _: &mut UnaryOp) {}
///     fn handle_binary_op(&mut self, _: &mut BinaryOp) {}
///     fn handle_for_loop(&mut self, _: &mut ForLoop) {}
///     fn handle_if_then_else(&mut self, _: &mut IfThenElse) {}
/// }
/// ```
pub trait OptInDispatch {
    fn handle_statement(&mut self, stmt: &mut Statement) {
        dispatch_statement(&mut OptIn(self), stmt)
    }

    fn handle_val(&mut self, val: &mut Val) {
        dispatch_val(&mut OptIn(self), val)
    }

    fn handle_expr(&mut self, expr: &mut Expr) {
        dispatch_expr(&mut OptIn(self), expr)
    }

    fn handle_iter_domain(&mut self, node: &mut IterDomain);
    fn handle_tensor_domain(&mut self, node: &mut TensorDomain);
    fn handle_tensor(&mut self, node: &mut Tensor);
    fn handle_tensor_view(&mut self, node: &mut TensorView);
    fn handle_float(&mut self, node: &mut Float);
    fn handle_int(&mut self, node: &mut Int);

    fn handle_split(&mut self, node: &mut Split);
    fn handle_merge(&mut self, node: &mut Merge);
    fn handle_reorder(&mut self, node: &mut Reorder);
    fn handle_unary_op(&mut self, node: &mut UnaryOp);
    fn handle_binary_op(&mut self, node: &mut BinaryOp);
    fn handle_for_loop(&mut self, node: &mut ForLoop);
    fn handle_if_then_else(&mut self, node: &mut IfThenElse);
}

/// Read-only visitor that must handle every node kind.
///
/// See [`crate::IrPrinter`] and [`crate::KindCensus`] for implementations.
/// As with [`OptInDispatch`], a missing kind does not compile:
///
/// ```compile_fail
/// use fuser_ir::*;
///
/// struct NoBranches;
///
/// impl OptInConstDispatch for NoBranches {
///     fn handle_iter_domain(&mut self, _: &IterDomain) {}
///     fn handle_tensor_domain(&mut self, _: &TensorDomain) {}
///     fn handle_tensor(&mut self, _: &Tensor) {}
///     fn handle_tensor_view(&mut self, _: &TensorView) {}
///     fn handle_float(&mut self, _: &Float) {}
///     fn handle_int(&mut self, _: &Int) {}
///     fn handle_split(&mut self, _: &Split) {}
///     fn handle_merge(&mut self, _: &Merge) {}
///     fn handle_reorder(&mut self, _: &Reorder) {}
///     fn handle_unary_op(&mut self, _: &UnaryOp) {}
///     fn handle_binary_op(&mut self, _: &BinaryOp) {}
///     fn handle_for_loop(&mut self, _: &ForLoop) {}
/// }
/// ```
pub trait OptInConstDispatch {
    fn handle_statement(&mut self, stmt: &Statement) {
        const_dispatch_statement(&mut OptInConst(self), stmt)
    }

    fn handle_val(&mut self, val: &Val) {
        const_dispatch_val(&mut OptInConst(self), val)
    }

    fn handle_expr(&mut self, expr: &Expr) {
        const_dispatch_expr(&mut OptInConst(self), expr)
    }

    fn handle_iter_domain(&mut self, node: &IterDomain);
    fn handle_tensor_domain(&mut self, node: &TensorDomain);
    fn handle_tensor(&mut self, node: &Tensor);
    fn handle_tensor_view(&mut self, node: &TensorView);
    fn handle_float(&mut self, node: &Float);
    fn handle_int(&mut self, node: &Int);

    fn handle_split(&mut self, node: &Split);
    fn handle_merge(&mut self, node: &Merge);
    fn handle_reorder(&mut self, node: &Reorder);
    fn handle_unary_op(&mut self, node: &UnaryOp);
    fn handle_binary_op(&mut self, node: &BinaryOp);
    fn handle_for_loop(&mut self, node: &ForLoop);
    fn handle_if_then_else(&mut self, node: &IfThenElse);
}

// ============================================================================
// Adapters onto the dispatcher contracts
// ============================================================================

struct OptOut<'v, V: ?Sized>(&'v mut V);
struct OptIn<'v, V: ?Sized>(&'v mut V);
struct OptInConst<'v, V: ?Sized>(&'v mut V);

// The three adapters differ only in the trait they forward to and the
// reference type of the node.
macro_rules! forward_handler {
    ($contract:ident for $adapter:ident<$visitor:ident>, $($ref:tt)+) => {
        impl<V: $visitor + ?Sized> $contract for $adapter<'_, V> {
            fn val(&mut self, val: $($ref)+ Val) {
                self.0.handle_val(val)
            }
            fn expr(&mut self, expr: $($ref)+ Expr) {
                self.0.handle_expr(expr)
            }
            fn iter_domain(&mut self, node: $($ref)+ IterDomain) {
                self.0.handle_iter_domain(node)
            }
            fn tensor_domain(&mut self, node: $($ref)+ TensorDomain) {
                self.0.handle_tensor_domain(node)
            }
            fn tensor(&mut self, node: $($ref)+ Tensor) {
                self.0.handle_tensor(node)
            }
            fn tensor_view(&mut self, node: $($ref)+ TensorView) {
                self.0.handle_tensor_view(node)
            }
            fn float(&mut self, node: $($ref)+ Float) {
                self.0.handle_float(node)
            }
            fn int(&mut self, node: $($ref)+ Int) {
                self.0.handle_int(node)
            }
            fn split(&mut self, node: $($ref)+ Split) {
                self.0.handle_split(node)
            }
            fn merge(&mut self, node: $($ref)+ Merge) {
                self.0.handle_merge(node)
            }
            fn reorder(&mut self, node: $($ref)+ Reorder) {
                self.0.handle_reorder(node)
            }
            fn unary_op(&mut self, node: $($ref)+ UnaryOp) {
                self.0.handle_unary_op(node)
            }
            fn binary_op(&mut self, node: $($ref)+ BinaryOp) {
                self.0.handle_binary_op(node)
            }
            fn for_loop(&mut self, node: $($ref)+ ForLoop) {
                self.0.handle_for_loop(node)
            }
            fn if_then_else(&mut self, node: $($ref)+ IfThenElse) {
                self.0.handle_if_then_else(node)
            }
        }
    };
}

forward_handler!(Handler for OptOut<OptOutDispatch>, &mut);
forward_handler!(Handler for OptIn<OptInDispatch>, &mut);
forward_handler!(ConstHandler for OptInConst<OptInConstDispatch>, &);
