//! Fuser - kind-directed dispatch over a loop-nest IR
//!
//! # Overview
//!
//! Fuser models the values and operations of a tensor loop-nest compiler
//! (iteration domains, tensors, scalars, loop transforms, arithmetic and
//! control flow) as a closed set of IR node kinds. Passes over that IR are
//! written against five base traits, and the dispatcher routes every node
//! to the method for its concrete kind.
//!
//! # Quick Start
//!
//! ```
//! use fuser::prelude::*;
//!
//! // Rewrite every `Neg` into a `Cast`, leave everything else alone.
//! struct NoNegation;
//!
//! impl OptOutMutator for NoNegation {
//!     fn mutate_unary_op(&mut self, node: UnaryOp) -> Statement {
//!         UnaryOp { op: UnaryOpType::Cast, ..node }.into()
//!     }
//! }
//!
//! let neg = UnaryOp::new(UnaryOpType::Neg, Float::new(0), Float::new(1));
//! let out = NoNegation.mutate_statement(neg.into());
//! assert_eq!(out.to_string(), "f0 = cast(f1)\n");
//! ```
//!
//! # API Tiers
//!
//! - [`prelude`]: node types and the five base traits, enough to write a pass.
//! - The crate root re-exports everything from `fuser-ir`, including the
//!   raw contract traits in [`dispatch`] and the shipped passes
//!   ([`IrPrinter`], [`KindCensus`]).

#![cfg_attr(not(feature = "std"), no_std)]

pub use fuser_ir::*;

/// Everything needed to define and run a pass.
pub mod prelude {
    pub use fuser_ir::{
        BinaryOp, BinaryOpType, DataType, Expr, Float, ForLoop, IfThenElse, Int, IterDomain,
        IterFlags, Merge, NodeKind, OptInConstDispatch, OptInDispatch, OptInMutator,
        OptOutDispatch, OptOutMutator, ParallelType, Reorder, Scalar, Split, Statement, Tensor,
        TensorDomain, TensorView, UnaryOp, UnaryOpType, Val,
    };
}
