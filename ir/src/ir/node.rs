//! Sum types over the concrete nodes.
//!
//! A `Statement` is exactly one of a `Val` or an `Expr`; each of those is
//! exactly one concrete node. The tag accessors below read the variant, so
//! they always agree with the node's payload type.

use super::{
    BinaryOp, Category, DataType, ExprType, Float, ForLoop, IfThenElse, Int, IterDomain, Merge,
    NodeKind, Reorder, Split, Tensor, TensorDomain, TensorView, UnaryOp, ValType,
};
use crate::IrError;

#[cfg(feature = "forged-tags")]
use super::RawTag;
#[cfg(feature = "forged-tags")]
use crate::error::{TagSpace, unknown_tag};

/// Root of every IR node.
#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    Val(Val),
    Expr(Expr),
}

/// A value: a domain, a tensor, or a scalar.
#[derive(Clone, Debug, PartialEq)]
pub enum Val {
    IterDomain(IterDomain),
    TensorDomain(TensorDomain),
    Tensor(Tensor),
    TensorView(TensorView),
    Scalar(Scalar),
    /// A value whose kind tag is outside [`ValType`].
    #[cfg(feature = "forged-tags")]
    Forged(RawTag),
}

/// Scalar values, narrowed by [`DataType`].
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Float(Float),
    Int(Int),
    /// A scalar whose data type tag is outside [`DataType`].
    #[cfg(feature = "forged-tags")]
    Forged(RawTag),
}

/// An operation relating values, or a control construct.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Split(Split),
    Merge(Merge),
    Reorder(Reorder),
    UnaryOp(UnaryOp),
    BinaryOp(BinaryOp),
    ForLoop(ForLoop),
    IfThenElse(IfThenElse),
    /// An operation whose kind tag is outside [`ExprType`].
    #[cfg(feature = "forged-tags")]
    Forged(RawTag),
}

impl Statement {
    pub fn is_val(&self) -> bool {
        matches!(self, Statement::Val(_))
    }

    pub fn is_expr(&self) -> bool {
        matches!(self, Statement::Expr(_))
    }

    pub fn category(&self) -> Category {
        match self {
            Statement::Val(_) => Category::Val,
            Statement::Expr(_) => Category::Expr,
        }
    }

    /// The concrete kind of this statement.
    pub fn kind(&self) -> NodeKind {
        match self {
            Statement::Val(val) => val.kind(),
            Statement::Expr(expr) => expr.kind(),
        }
    }

    pub fn as_val(&self) -> Option<&Val> {
        match self {
            Statement::Val(val) => Some(val),
            Statement::Expr(_) => None,
        }
    }

    pub fn as_expr(&self) -> Option<&Expr> {
        match self {
            Statement::Expr(expr) => Some(expr),
            Statement::Val(_) => None,
        }
    }

    /// Recover a value from a statement, typically a mutation result.
    pub fn into_val(self) -> Result<Val, IrError> {
        match self {
            Statement::Val(val) => Ok(val),
            Statement::Expr(expr) => Err(IrError::CategoryMismatch {
                expected: Category::Val,
                found: expr.kind(),
            }),
        }
    }

    /// Recover an operation from a statement, typically a mutation result.
    pub fn into_expr(self) -> Result<Expr, IrError> {
        match self {
            Statement::Expr(expr) => Ok(expr),
            Statement::Val(val) => Err(IrError::CategoryMismatch {
                expected: Category::Expr,
                found: val.kind(),
            }),
        }
    }
}

impl Val {
    pub fn val_type(&self) -> ValType {
        match self {
            Val::IterDomain(_) => ValType::IterDomain,
            Val::TensorDomain(_) => ValType::TensorDomain,
            Val::Tensor(_) => ValType::Tensor,
            Val::TensorView(_) => ValType::TensorView,
            Val::Scalar(_) => ValType::Scalar,
            #[cfg(feature = "forged-tags")]
            Val::Forged(RawTag(raw)) => unknown_tag(TagSpace::ValType, *raw),
        }
    }

    /// The scalar sub-tag; `None` for non-scalar values.
    pub fn data_type(&self) -> Option<DataType> {
        match self {
            Val::Scalar(scalar) => Some(scalar.data_type()),
            _ => None,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Val::IterDomain(_) => NodeKind::IterDomain,
            Val::TensorDomain(_) => NodeKind::TensorDomain,
            Val::Tensor(_) => NodeKind::Tensor,
            Val::TensorView(_) => NodeKind::TensorView,
            Val::Scalar(Scalar::Float(_)) => NodeKind::Float,
            Val::Scalar(Scalar::Int(_)) => NodeKind::Int,
            #[cfg(feature = "forged-tags")]
            Val::Scalar(Scalar::Forged(RawTag(raw))) => unknown_tag(TagSpace::DataType, *raw),
            #[cfg(feature = "forged-tags")]
            Val::Forged(RawTag(raw)) => unknown_tag(TagSpace::ValType, *raw),
        }
    }

    /// A value carrying an undeclared kind tag.
    #[cfg(feature = "forged-tags")]
    pub fn forged(raw: u8) -> Self {
        Val::Forged(RawTag(raw))
    }

    /// A scalar carrying an undeclared data type tag.
    #[cfg(feature = "forged-tags")]
    pub fn forged_scalar(raw: u8) -> Self {
        Val::Scalar(Scalar::Forged(RawTag(raw)))
    }
}

impl Scalar {
    pub fn data_type(&self) -> DataType {
        match self {
            Scalar::Float(_) => DataType::Float,
            Scalar::Int(_) => DataType::Int,
            #[cfg(feature = "forged-tags")]
            Scalar::Forged(RawTag(raw)) => unknown_tag(TagSpace::DataType, *raw),
        }
    }
}

impl Expr {
    pub fn expr_type(&self) -> ExprType {
        match self {
            Expr::Split(_) => ExprType::Split,
            Expr::Merge(_) => ExprType::Merge,
            Expr::Reorder(_) => ExprType::Reorder,
            Expr::UnaryOp(_) => ExprType::UnaryOp,
            Expr::BinaryOp(_) => ExprType::BinaryOp,
            Expr::ForLoop(_) => ExprType::ForLoop,
            Expr::IfThenElse(_) => ExprType::IfThenElse,
            #[cfg(feature = "forged-tags")]
            Expr::Forged(RawTag(raw)) => unknown_tag(TagSpace::ExprType, *raw),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self.expr_type() {
            ExprType::Split => NodeKind::Split,
            ExprType::Merge => NodeKind::Merge,
            ExprType::Reorder => NodeKind::Reorder,
            ExprType::UnaryOp => NodeKind::UnaryOp,
            ExprType::BinaryOp => NodeKind::BinaryOp,
            ExprType::ForLoop => NodeKind::ForLoop,
            ExprType::IfThenElse => NodeKind::IfThenElse,
        }
    }

    /// An operation carrying an undeclared kind tag.
    #[cfg(feature = "forged-tags")]
    pub fn forged(raw: u8) -> Self {
        Expr::Forged(RawTag(raw))
    }
}

impl From<Val> for Statement {
    fn from(val: Val) -> Self {
        Statement::Val(val)
    }
}

impl From<Expr> for Statement {
    fn from(expr: Expr) -> Self {
        Statement::Expr(expr)
    }
}

impl From<Scalar> for Val {
    fn from(scalar: Scalar) -> Self {
        Val::Scalar(scalar)
    }
}

impl From<Float> for Scalar {
    fn from(node: Float) -> Self {
        Scalar::Float(node)
    }
}

impl From<Int> for Scalar {
    fn from(node: Int) -> Self {
        Scalar::Int(node)
    }
}

impl From<Float> for Val {
    fn from(node: Float) -> Self {
        Val::Scalar(Scalar::Float(node))
    }
}

impl From<Int> for Val {
    fn from(node: Int) -> Self {
        Val::Scalar(Scalar::Int(node))
    }
}

// Every concrete node converts into its category enum and into `Statement`.
macro_rules! impl_node_from {
    ($category:ident: $($node:ident),* $(,)?) => {
        $(
            impl From<$node> for $category {
                fn from(node: $node) -> Self {
                    $category::$node(node)
                }
            }

            impl From<$node> for Statement {
                fn from(node: $node) -> Self {
                    Statement::$category($category::from(node))
                }
            }
        )*
    };
}

impl_node_from!(Val: IterDomain, TensorDomain, Tensor, TensorView);
impl_node_from!(Expr: Split, Merge, Reorder, UnaryOp, BinaryOp, ForLoop, IfThenElse);

impl From<Float> for Statement {
    fn from(node: Float) -> Self {
        Statement::Val(node.into())
    }
}

impl From<Int> for Statement {
    fn from(node: Int) -> Self {
        Statement::Val(node.into())
    }
}

impl From<Scalar> for Statement {
    fn from(scalar: Scalar) -> Self {
        Statement::Val(Val::Scalar(scalar))
    }
}
