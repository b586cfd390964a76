//! Kind tags for IR nodes.
//!
//! Every node is either a value (`Val`) or an operation (`Expr`). Values are
//! narrowed by a [`ValType`], and scalar values further by a [`DataType`].
//! Operations are narrowed by an [`ExprType`]. [`NodeKind`] flattens all of
//! these into one enumeration with exactly one entry per concrete node type.
//!
//! Tags are never stored next to a node: they are derived from the variant of
//! the node's sum type, so a tag can't disagree with the node it describes.

use core::fmt;

/// Top-level category of a statement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Val,
    Expr,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Val, Category::Expr];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Val => write!(f, "Val"),
            Category::Expr => write!(f, "Expr"),
        }
    }
}

/// Kind of a value node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValType {
    IterDomain,
    TensorDomain,
    Tensor,
    TensorView,
    /// Narrowed further by [`DataType`].
    Scalar,
}

impl ValType {
    pub const ALL: [ValType; 5] = [
        ValType::IterDomain,
        ValType::TensorDomain,
        ValType::Tensor,
        ValType::TensorView,
        ValType::Scalar,
    ];
}

impl fmt::Display for ValType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValType::IterDomain => "IterDomain",
            ValType::TensorDomain => "TensorDomain",
            ValType::Tensor => "Tensor",
            ValType::TensorView => "TensorView",
            ValType::Scalar => "Scalar",
        };
        f.write_str(name)
    }
}

/// Data type of a scalar value (and the element type of a tensor).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DataType {
    Float,
    Int,
}

impl DataType {
    pub const ALL: [DataType; 2] = [DataType::Float, DataType::Int];
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Float => write!(f, "float"),
            DataType::Int => write!(f, "int"),
        }
    }
}

/// Kind of an operation node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExprType {
    Split,
    Merge,
    Reorder,
    UnaryOp,
    BinaryOp,
    ForLoop,
    IfThenElse,
}

impl ExprType {
    pub const ALL: [ExprType; 7] = [
        ExprType::Split,
        ExprType::Merge,
        ExprType::Reorder,
        ExprType::UnaryOp,
        ExprType::BinaryOp,
        ExprType::ForLoop,
        ExprType::IfThenElse,
    ];
}

impl fmt::Display for ExprType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExprType::Split => "Split",
            ExprType::Merge => "Merge",
            ExprType::Reorder => "Reorder",
            ExprType::UnaryOp => "UnaryOp",
            ExprType::BinaryOp => "BinaryOp",
            ExprType::ForLoop => "ForLoop",
            ExprType::IfThenElse => "IfThenElse",
        };
        f.write_str(name)
    }
}

/// One entry per concrete node type.
///
/// This is the granularity handlers are written at: every `handle_*` and
/// `mutate_*` method corresponds to exactly one `NodeKind`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeKind {
    IterDomain,
    TensorDomain,
    Tensor,
    TensorView,
    Float,
    Int,
    Split,
    Merge,
    Reorder,
    UnaryOp,
    BinaryOp,
    ForLoop,
    IfThenElse,
}

impl NodeKind {
    pub const ALL: [NodeKind; 13] = [
        NodeKind::IterDomain,
        NodeKind::TensorDomain,
        NodeKind::Tensor,
        NodeKind::TensorView,
        NodeKind::Float,
        NodeKind::Int,
        NodeKind::Split,
        NodeKind::Merge,
        NodeKind::Reorder,
        NodeKind::UnaryOp,
        NodeKind::BinaryOp,
        NodeKind::ForLoop,
        NodeKind::IfThenElse,
    ];

    pub fn category(self) -> Category {
        if self.expr_type().is_some() {
            Category::Expr
        } else {
            Category::Val
        }
    }

    /// The value kind tag, or `None` for operation kinds.
    pub fn val_type(self) -> Option<ValType> {
        match self {
            NodeKind::IterDomain => Some(ValType::IterDomain),
            NodeKind::TensorDomain => Some(ValType::TensorDomain),
            NodeKind::Tensor => Some(ValType::Tensor),
            NodeKind::TensorView => Some(ValType::TensorView),
            NodeKind::Float | NodeKind::Int => Some(ValType::Scalar),
            _ => None,
        }
    }

    /// The scalar sub-tag, only present for `Float` and `Int`.
    pub fn data_type(self) -> Option<DataType> {
        match self {
            NodeKind::Float => Some(DataType::Float),
            NodeKind::Int => Some(DataType::Int),
            _ => None,
        }
    }

    /// The operation kind tag, or `None` for value kinds.
    pub fn expr_type(self) -> Option<ExprType> {
        match self {
            NodeKind::Split => Some(ExprType::Split),
            NodeKind::Merge => Some(ExprType::Merge),
            NodeKind::Reorder => Some(ExprType::Reorder),
            NodeKind::UnaryOp => Some(ExprType::UnaryOp),
            NodeKind::BinaryOp => Some(ExprType::BinaryOp),
            NodeKind::ForLoop => Some(ExprType::ForLoop),
            NodeKind::IfThenElse => Some(ExprType::IfThenElse),
            _ => None,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.val_type(), self.data_type(), self.expr_type()) {
            (_, Some(DataType::Float), _) => f.write_str("Float"),
            (_, Some(DataType::Int), _) => f.write_str("Int"),
            (Some(val_type), None, _) => write!(f, "{}", val_type),
            (None, None, Some(expr_type)) => write!(f, "{}", expr_type),
            (None, None, None) => unreachable!("every node kind has a value or operation tag"),
        }
    }
}

/// Raw tag value outside of every declared enumeration.
///
/// Only exists to exercise the dispatcher's unreachable-tag path.
#[cfg(feature = "forged-tags")]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RawTag(pub u8);
