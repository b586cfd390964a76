//! Intermediate Representation (IR) nodes consumed by the dispatcher.
//!
//! ## Structure
//!
//! - **Tags**: `Category`, `ValType`, `DataType`, `ExprType`, `NodeKind`
//! - **Sum types**: `Statement`, `Val`, `Scalar`, `Expr` - one variant per
//!   concrete kind, so a node's tag can't drift from its payload type
//! - **Values**: domains, tensors, scalars
//! - **Operations**: loop transforms, arithmetic, control flow

pub mod expr;
pub mod node;
pub mod tag;
pub mod val;

pub use expr::{
    BinaryOp, BinaryOpType, ForLoop, IfThenElse, Merge, Reorder, Split, UnaryOp, UnaryOpType,
};
pub use node::{Expr, Scalar, Statement, Val};
#[cfg(feature = "forged-tags")]
pub use tag::RawTag;
pub use tag::{Category, DataType, ExprType, NodeKind, ValType};
pub use val::{Float, Int, IterDomain, IterFlags, ParallelType, Tensor, TensorDomain, TensorView};
