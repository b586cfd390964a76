//! Mutator base traits.
//!
//! A mutator consumes a node and returns the statement that replaces it.
//! Rewriting by replacement (rather than editing in place) is what lets a
//! mutation change a node's concrete kind, e.g. fold a `BinaryOp` into an
//! `Int`.
//!
//! - [`OptOutMutator`]: every per-kind method defaults to the identity
//!   mutation and hands the node back unchanged.
//! - [`OptInMutator`]: every per-kind method is required.
//!
//! As with the visitors, the defaults never recurse into children.

use crate::dispatch::{
    MutHandler, mutator_dispatch_expr, mutator_dispatch_statement, mutator_dispatch_val,
};
use crate::ir::{
    BinaryOp, Expr, Float, ForLoop, IfThenElse, Int, IterDomain, Merge, Reorder, Split,
    Statement, Tensor, TensorDomain, TensorView, UnaryOp, Val,
};

/// Mutator that only rewrites the node kinds it overrides.
///
/// # Example
///
/// ```
/// use fuser_ir::{BinaryOp, BinaryOpType, Int, OptOutMutator, Statement};
///
/// // Fold `a + b` when both sides are constants.
/// struct FoldAdd;
///
/// impl OptOutMutator for FoldAdd {
///     fn mutate_binary_op(&mut self, node: BinaryOp) -> Statement {
///         let constant = |val: &fuser_ir::Val| match val {
///             fuser_ir::Val::Scalar(fuser_ir::Scalar::Int(i)) => i.value,
///             _ => None,
///         };
///         match (node.op, constant(&node.lhs), constant(&node.rhs)) {
///             (BinaryOpType::Add, Some(l), Some(r)) => Int::constant(0, l + r).into(),
///             _ => node.into(),
///         }
///     }
/// }
///
/// let add = BinaryOp::new(BinaryOpType::Add, Int::new(9), Int::constant(1, 2), Int::constant(2, 3));
/// assert_eq!(FoldAdd.mutate_statement(add.into()), Statement::from(Int::constant(0, 5)));
///
/// // Kinds without an override come back unchanged.
/// let int = Statement::from(Int::new(4));
/// assert_eq!(FoldAdd.mutate_statement(int.clone()), int);
/// ```
pub trait OptOutMutator {
    fn mutate_statement(&mut self, stmt: Statement) -> Statement {
        mutator_dispatch_statement(&mut OptOut(self), stmt)
    }

    fn mutate_val(&mut self, val: Val) -> Statement {
        mutator_dispatch_val(&mut OptOut(self), val)
    }

    fn mutate_expr(&mut self, expr: Expr) -> Statement {
        mutator_dispatch_expr(&mut OptOut(self), expr)
    }

    fn mutate_iter_domain(&mut self, node: IterDomain) -> Statement {
        node.into()
    }
    fn mutate_tensor_domain(&mut self, node: TensorDomain) -> Statement {
        node.into()
    }
    fn mutate_tensor(&mut self, node: Tensor) -> Statement {
        node.into()
    }
    fn mutate_tensor_view(&mut self, node: TensorView) -> Statement {
        node.into()
    }
    fn mutate_float(&mut self, node: Float) -> Statement {
        node.into()
    }
    fn mutate_int(&mut self, node: Int) -> Statement {
        node.into()
    }

    fn mutate_split(&mut self, node: Split) -> Statement {
        node.into()
    }
    fn mutate_merge(&mut self, node: Merge) -> Statement {
        node.into()
    }
    fn mutate_reorder(&mut self, node: Reorder) -> Statement {
        node.into()
    }
    fn mutate_unary_op(&mut self, node: UnaryOp) -> Statement {
        node.into()
    }
    fn mutate_binary_op(&mut self, node: BinaryOp) -> Statement {
        node.into()
    }
    fn mutate_for_loop(&mut self, node: ForLoop) -> Statement {
        node.into()
    }
    fn mutate_if_then_else(&mut self, node: IfThenElse) -> Statement {
        node.into()
    }
}

/// Mutator that must rewrite every node kind.
///
/// Leaving out a kind is a compile error; there is no implicit identity.
///
/// ```compile_fail
/// use fuser_ir::*;
///
/// struct KeepAllButLoops;
///
/// impl OptInMutator for KeepAllButLoops {
///     fn mutate_iter_domain(&mut self, node: IterDomain) -> Statement { node.into() }
///     fn mutate_tensor_domain(&mut self, node: TensorDomain) -> Statement { node.into() }
///     fn mutate_tensor(&mut self, node: Tensor) -> Statement { node.into() }
///     fn mutate_tensor_view(&mut self, node: TensorView) -> Statement { node.into() }
///     fn mutate_float(&mut self, node: Float) -> Statement { node.into() }
///     fn mutate_int(&mut self, node: Int) -> Statement { node.into() }
///     fn mutate_split(&mut self, node: Split) -> Statement { node.into() }
///     fn mutate_merge(&mut self, node: Merge) -> Statement { node.into() }
///     fn mutate_reorder(&mut self, node: Reorder) -> Statement { node.into() }
///     fn mutate_unary_op(&mut self, node: UnaryOp) -> Statement { node.into() }
///     fn mutate_binary_op(&mut self, node: BinaryOp) -> Statement { node.into() }
///     fn mutate_if_then_else(&mut self, node: IfThenElse) -> Statement { node.into() }
/// }
/// ```
pub trait OptInMutator {
    fn mutate_statement(&mut self, stmt: Statement) -> Statement {
        mutator_dispatch_statement(&mut OptIn(self), stmt)
    }

    fn mutate_val(&mut self, val: Val) -> Statement {
        mutator_dispatch_val(&mut OptIn(self), val)
    }

    fn mutate_expr(&mut self, expr: Expr) -> Statement {
        mutator_dispatch_expr(&mut OptIn(self), expr)
    }

    fn mutate_iter_domain(&mut self, node: IterDomain) -> Statement;
    fn mutate_tensor_domain(&mut self, node: TensorDomain) -> Statement;
    fn mutate_tensor(&mut self, node: Tensor) -> Statement;
    fn mutate_tensor_view(&mut self, node: TensorView) -> Statement;
    fn mutate_float(&mut self, node: Float) -> Statement;
    fn mutate_int(&mut self, node: Int) -> Statement;

    fn mutate_split(&mut self, node: Split) -> Statement;
    fn mutate_merge(&mut self, node: Merge) -> Statement;
    fn mutate_reorder(&mut self, node: Reorder) -> Statement;
    fn mutate_unary_op(&mut self, node: UnaryOp) -> Statement;
    fn mutate_binary_op(&mut self, node: BinaryOp) -> Statement;
    fn mutate_for_loop(&mut self, node: ForLoop) -> Statement;
    fn mutate_if_then_else(&mut self, node: IfThenElse) -> Statement;
}

struct OptOut<'m, M: ?Sized>(&'m mut M);
struct OptIn<'m, M: ?Sized>(&'m mut M);

macro_rules! forward_mutator {
    ($adapter:ident<$mutator:ident>) => {
        impl<M: $mutator + ?Sized> MutHandler for $adapter<'_, M> {
            fn val(&mut self, val: Val) -> Statement {
                self.0.mutate_val(val)
            }
            fn expr(&mut self, expr: Expr) -> Statement {
                self.0.mutate_expr(expr)
            }
            fn iter_domain(&mut self, node: IterDomain) -> Statement {
                self.0.mutate_iter_domain(node)
            }
            fn tensor_domain(&mut self, node: TensorDomain) -> Statement {
                self.0.mutate_tensor_domain(node)
            }
            fn tensor(&mut self, node: Tensor) -> Statement {
                self.0.mutate_tensor(node)
            }
            fn tensor_view(&mut self, node: TensorView) -> Statement {
                self.0.mutate_tensor_view(node)
            }
            fn float(&mut self, node: Float) -> Statement {
                self.0.mutate_float(node)
            }
            fn int(&mut self, node: Int) -> Statement {
                self.0.mutate_int(node)
            }
            fn split(&mut self, node: Split) -> Statement {
                self.0.mutate_split(node)
            }
            fn merge(&mut self, node: Merge) -> Statement {
                self.0.mutate_merge(node)
            }
            fn reorder(&mut self, node: Reorder) -> Statement {
                self.0.mutate_reorder(node)
            }
            fn unary_op(&mut self, node: UnaryOp) -> Statement {
                self.0.mutate_unary_op(node)
            }
            fn binary_op(&mut self, node: BinaryOp) -> Statement {
                self.0.mutate_binary_op(node)
            }
            fn for_loop(&mut self, node: ForLoop) -> Statement {
                self.0.mutate_for_loop(node)
            }
            fn if_then_else(&mut self, node: IfThenElse) -> Statement {
                self.0.mutate_if_then_else(node)
            }
        }
    };
}

forward_mutator!(OptOut<OptOutMutator>);
forward_mutator!(OptIn<OptInMutator>);
