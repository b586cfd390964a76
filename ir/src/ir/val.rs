//! Concrete value nodes.

use super::DataType;
use alloc::vec::Vec;
use bitflags::bitflags;

/// Floating-point scalar, either symbolic or a compile-time constant.
#[derive(Clone, Debug, PartialEq)]
pub struct Float {
    pub name: u32,
    pub value: Option<f32>,
}

impl Float {
    /// A symbolic float, known only by name.
    pub fn new(name: u32) -> Self {
        Self { name, value: None }
    }

    pub fn constant(name: u32, value: f32) -> Self {
        Self {
            name,
            value: Some(value),
        }
    }

    pub fn is_symbolic(&self) -> bool {
        self.value.is_none()
    }
}

/// Integer scalar, either symbolic or a compile-time constant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Int {
    pub name: u32,
    pub value: Option<i64>,
}

impl Int {
    /// A symbolic integer, known only by name.
    pub fn new(name: u32) -> Self {
        Self { name, value: None }
    }

    pub fn constant(name: u32, value: i64) -> Self {
        Self {
            name,
            value: Some(value),
        }
    }

    pub fn is_symbolic(&self) -> bool {
        self.value.is_none()
    }
}

/// How the iterations of an axis are mapped onto hardware.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParallelType {
    #[default]
    Serial,
    BlockX,
    BlockY,
    BlockZ,
    ThreadX,
    ThreadY,
    ThreadZ,
    Vectorize,
    Unroll,
}

impl ParallelType {
    /// Suffix used when printing a parallelized axis.
    pub fn as_str(self) -> &'static str {
        match self {
            ParallelType::Serial => "serial",
            ParallelType::BlockX => "blockIdx.x",
            ParallelType::BlockY => "blockIdx.y",
            ParallelType::BlockZ => "blockIdx.z",
            ParallelType::ThreadX => "threadIdx.x",
            ParallelType::ThreadY => "threadIdx.y",
            ParallelType::ThreadZ => "threadIdx.z",
            ParallelType::Vectorize => "V",
            ParallelType::Unroll => "U",
        }
    }
}

bitflags! {
    /// Properties of an iteration axis.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct IterFlags: u8 {
        /// The axis is reduced away by the producing operation.
        const REDUCTION = 1;
        /// The axis has extent one and is broadcast to its consumer.
        const BROADCAST = 1 << 1;
    }
}

/// A single iteration axis `[start, start + extent)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IterDomain {
    pub start: Int,
    pub extent: Int,
    pub parallel: ParallelType,
    pub flags: IterFlags,
}

impl IterDomain {
    pub fn new(start: Int, extent: Int) -> Self {
        Self {
            start,
            extent,
            parallel: ParallelType::Serial,
            flags: IterFlags::empty(),
        }
    }

    pub fn with_parallel(mut self, parallel: ParallelType) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_flags(mut self, flags: IterFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn is_reduction(&self) -> bool {
        self.flags.contains(IterFlags::REDUCTION)
    }

    pub fn is_broadcast(&self) -> bool {
        self.flags.contains(IterFlags::BROADCAST)
    }

    pub fn is_parallelized(&self) -> bool {
        self.parallel != ParallelType::Serial
    }
}

/// Ordered list of iteration axes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TensorDomain {
    pub axes: Vec<IterDomain>,
}

impl TensorDomain {
    pub fn new(axes: impl IntoIterator<Item = IterDomain>) -> Self {
        Self {
            axes: axes.into_iter().collect(),
        }
    }

    pub fn ndims(&self) -> usize {
        self.axes.len()
    }

    pub fn axis(&self, i: usize) -> Option<&IterDomain> {
        self.axes.get(i)
    }

    pub fn has_reduction(&self) -> bool {
        self.axes.iter().any(IterDomain::is_reduction)
    }
}

/// A tensor as produced by the frontend.
///
/// The domain is absent until the tensor's shape is known.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tensor {
    pub name: u32,
    pub dtype: DataType,
    pub domain: Option<TensorDomain>,
}

impl Tensor {
    pub fn new(name: u32, dtype: DataType) -> Self {
        Self {
            name,
            dtype,
            domain: None,
        }
    }

    pub fn with_domain(mut self, domain: TensorDomain) -> Self {
        self.domain = Some(domain);
        self
    }
}

/// A tensor seen through a (possibly transformed) domain.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TensorView {
    pub name: u32,
    pub tensor: Tensor,
    pub domain: TensorDomain,
}

impl TensorView {
    pub fn new(name: u32, tensor: Tensor, domain: TensorDomain) -> Self {
        Self {
            name,
            tensor,
            domain,
        }
    }

    pub fn dtype(&self) -> DataType {
        self.tensor.dtype
    }

    pub fn ndims(&self) -> usize {
        self.domain.ndims()
    }
}
