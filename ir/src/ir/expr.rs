//! Concrete operation nodes.
//!
//! Loop-transform operations (`Split`, `Merge`, `Reorder`) relate an input
//! domain to the domain it is rewritten into. Arithmetic operations relate
//! values. Control operations own nested operation lists.

use super::{Expr, Int, IterDomain, TensorDomain, Val};
use crate::IrError;
use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;

/// Splits axis `axis` of `input` into an outer and an inner axis of extent
/// `factor`, producing `out`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Split {
    pub out: TensorDomain,
    pub input: TensorDomain,
    pub axis: usize,
    pub factor: Int,
}

impl Split {
    pub fn new(
        out: TensorDomain,
        input: TensorDomain,
        axis: usize,
        factor: Int,
    ) -> Result<Self, IrError> {
        check_axis(axis, input.ndims())?;
        Ok(Self {
            out,
            input,
            axis,
            factor,
        })
    }
}

/// Merges axes `axis` and `axis + 1` of `input` into one, producing `out`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Merge {
    pub out: TensorDomain,
    pub input: TensorDomain,
    pub axis: usize,
}

impl Merge {
    pub fn new(out: TensorDomain, input: TensorDomain, axis: usize) -> Result<Self, IrError> {
        let rank = input.ndims();
        // Needs a right-hand neighbour to merge with.
        if !axis.checked_add(1).is_some_and(|next| next < rank) {
            return Err(IrError::AxisOutOfRange { axis, rank });
        }
        Ok(Self { out, input, axis })
    }
}

/// Permutes the axes of `input`, producing `out`.
///
/// `new2old[i]` is the position in `input` of the axis placed at position
/// `i` in `out`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Reorder {
    pub out: TensorDomain,
    pub input: TensorDomain,
    pub new2old: Vec<usize>,
}

impl Reorder {
    pub fn new(
        out: TensorDomain,
        input: TensorDomain,
        new2old: Vec<usize>,
    ) -> Result<Self, IrError> {
        let rank = input.ndims();
        if new2old.len() != rank {
            return Err(IrError::InvalidPermutation { rank });
        }
        let mut seen = vec![false; rank];
        for &old in &new2old {
            match seen.get_mut(old) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(IrError::InvalidPermutation { rank }),
            }
        }
        Ok(Self {
            out,
            input,
            new2old,
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UnaryOpType {
    Neg,
    Cast,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnaryOp {
    pub op: UnaryOpType,
    pub out: Box<Val>,
    pub input: Box<Val>,
}

impl UnaryOp {
    pub fn new(op: UnaryOpType, out: impl Into<Val>, input: impl Into<Val>) -> Self {
        Self {
            op,
            out: Box::new(out.into()),
            input: Box::new(input.into()),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BinaryOpType {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Lt,
    CeilDiv,
}

impl BinaryOpType {
    /// Infix symbol, or `None` for operations printed as a call.
    pub fn symbol(self) -> Option<&'static str> {
        match self {
            BinaryOpType::Add => Some("+"),
            BinaryOpType::Sub => Some("-"),
            BinaryOpType::Mul => Some("*"),
            BinaryOpType::Div => Some("/"),
            BinaryOpType::Mod => Some("%"),
            BinaryOpType::Lt => Some("<"),
            BinaryOpType::CeilDiv => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BinaryOp {
    pub op: BinaryOpType,
    pub out: Box<Val>,
    pub lhs: Box<Val>,
    pub rhs: Box<Val>,
}

impl BinaryOp {
    pub fn new(
        op: BinaryOpType,
        out: impl Into<Val>,
        lhs: impl Into<Val>,
        rhs: impl Into<Val>,
    ) -> Self {
        Self {
            op,
            out: Box::new(out.into()),
            lhs: Box::new(lhs.into()),
            rhs: Box::new(rhs.into()),
        }
    }
}

/// Runs `body` once per point of `range`, binding the point to `index`.
#[derive(Clone, Debug, PartialEq)]
pub struct ForLoop {
    pub index: Int,
    pub range: IterDomain,
    pub body: Vec<Expr>,
}

impl ForLoop {
    pub fn new(index: Int, range: IterDomain) -> Self {
        Self {
            index,
            range,
            body: Vec::new(),
        }
    }

    pub fn with_body(mut self, body: impl IntoIterator<Item = Expr>) -> Self {
        self.body.extend(body);
        self
    }

    pub fn push(&mut self, expr: impl Into<Expr>) {
        self.body.push(expr.into());
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct IfThenElse {
    pub cond: Int,
    pub then_body: Vec<Expr>,
    pub else_body: Vec<Expr>,
}

impl IfThenElse {
    pub fn new(
        cond: Int,
        then_body: impl IntoIterator<Item = Expr>,
        else_body: impl IntoIterator<Item = Expr>,
    ) -> Self {
        Self {
            cond,
            then_body: then_body.into_iter().collect(),
            else_body: else_body.into_iter().collect(),
        }
    }

    pub fn has_else(&self) -> bool {
        !self.else_body.is_empty()
    }
}

fn check_axis(axis: usize, rank: usize) -> Result<(), IrError> {
    if axis < rank {
        Ok(())
    } else {
        Err(IrError::AxisOutOfRange { axis, rank })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn domain(rank: usize) -> TensorDomain {
        TensorDomain::new(
            (0..rank).map(|i| IterDomain::new(Int::constant(0, 0), Int::new(i as u32))),
        )
    }

    #[test]
    fn test_split_axis_bounds() {
        assert!(Split::new(domain(3), domain(2), 1, Int::constant(9, 4)).is_ok());
        assert_eq!(
            Split::new(domain(3), domain(2), 2, Int::constant(9, 4)),
            Err(IrError::AxisOutOfRange { axis: 2, rank: 2 })
        );
    }

    #[test]
    fn test_merge_needs_a_neighbour() {
        assert!(Merge::new(domain(1), domain(2), 0).is_ok());
        assert_eq!(
            Merge::new(domain(1), domain(2), 1),
            Err(IrError::AxisOutOfRange { axis: 1, rank: 2 })
        );
        assert_eq!(
            Merge::new(domain(1), domain(2), usize::MAX),
            Err(IrError::AxisOutOfRange {
                axis: usize::MAX,
                rank: 2,
            })
        );
    }

    #[test]
    fn test_reorder_rejects_non_permutations() {
        assert!(Reorder::new(domain(3), domain(3), vec![2, 0, 1]).is_ok());
        assert_eq!(
            Reorder::new(domain(3), domain(3), vec![0, 0, 1]),
            Err(IrError::InvalidPermutation { rank: 3 })
        );
        assert_eq!(
            Reorder::new(domain(3), domain(3), vec![0, 1]),
            Err(IrError::InvalidPermutation { rank: 3 })
        );
        assert_eq!(
            Reorder::new(domain(2), domain(2), vec![0, 2]),
            Err(IrError::InvalidPermutation { rank: 2 })
        );
    }

    #[test]
    fn test_for_loop_body() {
        let range = IterDomain::new(Int::constant(0, 0), Int::new(1));
        let mut fl = ForLoop::new(Int::new(2), range);
        fl.push(UnaryOp::new(UnaryOpType::Neg, Int::new(3), Int::new(4)));
        assert_eq!(fl.body.len(), 1);
        assert!(!IfThenElse::new(Int::new(5), [], []).has_else());
    }
}
