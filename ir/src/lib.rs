//! Kind-directed dispatch for the fuser IR.
//!
//! IR nodes form a closed, two-level hierarchy: a [`Statement`] is either a
//! [`Val`] or an [`Expr`], and each of those is one of a fixed set of
//! concrete node types. Operations over the IR (printers, analyses, loop
//! transforms) are open-ended, so nodes don't carry a method per operation.
//! Instead an operation implements one of five base traits and the
//! dispatcher routes each node to the method for its concrete kind.
//!
//! | Trait                  | Access     | Unhandled kinds        |
//! |------------------------|------------|------------------------|
//! | [`OptOutDispatch`]     | `&mut`     | no-op                  |
//! | [`OptInDispatch`]      | `&mut`     | compile error          |
//! | [`OptInConstDispatch`] | `&`        | compile error          |
//! | [`OptOutMutator`]      | by value   | returned unchanged     |
//! | [`OptInMutator`]       | by value   | compile error          |
//!
//! # Example
//!
//! ```
//! use fuser_ir::{ForLoop, Int, IterDomain, OptOutDispatch, ParallelType, Statement};
//!
//! struct BindThreads;
//!
//! impl OptOutDispatch for BindThreads {
//!     fn handle_for_loop(&mut self, node: &mut ForLoop) {
//!         node.range.parallel = ParallelType::ThreadX;
//!     }
//! }
//!
//! let range = IterDomain::new(Int::constant(0, 0), Int::new(1));
//! let mut stmt = Statement::from(ForLoop::new(Int::new(2), range));
//! BindThreads.handle_statement(&mut stmt);
//! assert_eq!(stmt.to_string(), "for i2 in I{0 : i1}.threadIdx.x {\n}\n");
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
extern crate alloc;

// Node model
pub mod ir;

// Dispatch core
pub mod dispatch;
pub mod mutate;
pub mod visit;

// Operations shipped with the IR
pub mod census;
pub mod display;

pub mod error;

pub use census::KindCensus;
pub use display::IrPrinter;
pub use error::{IrError, TagSpace, UnknownTag};
pub use ir::{
    BinaryOp, BinaryOpType, Category, DataType, Expr, ExprType, Float, ForLoop, IfThenElse, Int,
    IterDomain, IterFlags, Merge, NodeKind, ParallelType, Reorder, Scalar, Split, Statement,
    Tensor, TensorDomain, TensorView, UnaryOp, UnaryOpType, Val, ValType,
};
#[cfg(feature = "forged-tags")]
pub use ir::RawTag;
pub use mutate::{OptInMutator, OptOutMutator};
pub use visit::{OptInConstDispatch, OptInDispatch, OptOutDispatch};
