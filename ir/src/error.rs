//! Errors raised by the node layer and the dispatcher.
//!
//! The node layer reports recoverable construction and conversion problems
//! through [`IrError`]. The dispatcher has exactly one failure mode, an
//! unknown tag ([`UnknownTag`]), and it is never returned: it means the tag
//! enumerations and the dispatch tables disagree, so dispatch aborts.

use crate::ir::{Category, NodeKind};
use core::fmt;

/// Recoverable errors from building or converting IR nodes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IrError {
    #[error("expected {expected} node, found {found}")]
    CategoryMismatch { expected: Category, found: NodeKind },

    #[error("axis {axis} is out of range for a domain of rank {rank}")]
    AxisOutOfRange { axis: usize, rank: usize },

    #[error("reorder is not a permutation of the {rank} input axes")]
    InvalidPermutation { rank: usize },
}

/// Which tag enumeration an unknown tag was read from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TagSpace {
    ValType,
    DataType,
    ExprType,
}

impl fmt::Display for TagSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagSpace::ValType => write!(f, "valtype"),
            TagSpace::DataType => write!(f, "datatype"),
            TagSpace::ExprType => write!(f, "exprtype"),
        }
    }
}

/// A tag value no dispatch table recognizes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {space} in dispatch! (raw tag {raw})")]
pub struct UnknownTag {
    pub space: TagSpace,
    pub raw: u8,
}

/// Abort on an unknown tag.
///
/// Only reachable through the `forged-tags` escape hatch: without it every
/// tag is a variant of a closed enum and the match is checked at compile time.
#[cfg(feature = "forged-tags")]
#[cold]
#[track_caller]
pub(crate) fn unknown_tag(space: TagSpace, raw: u8) -> ! {
    let violation = UnknownTag { space, raw };
    tracing::error!(%violation, "tag enumeration and dispatch tables disagree");
    panic!("{}", violation)
}
