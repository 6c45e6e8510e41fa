// Reductions over explicit axis lists.
//
// Bad axes are `IncompatibleShape`. `sum` and `product` saturate into the
// input's format since accumulation can overflow it; the rest only
// reformat.

use ng_tensor::{ArgReduceOp, ComputeBackend, DType, ReduceOp, Tensor};

use crate::checked::checked;
use crate::error::Result;
use crate::guard::Guard;

impl<B: ComputeBackend> Guard<B> {
    fn reduce_as_bool(&self, op: ReduceOp, x: &Tensor, axes: &[usize]) -> Result<Tensor> {
        checked(|| {
            let b = self.cast_to(x, DType::Bool)?;
            let r = self.backend.reduce(op, &b, axes)?;
            self.cast_to(&r, x.dtype())
        })
        .shape_result()
    }

    fn reduce_reformatted(&self, op: ReduceOp, x: &Tensor, axes: &[usize]) -> Result<Tensor> {
        checked(|| {
            let r = self.backend.reduce(op, x, axes)?;
            self.cast_to(&r, x.dtype())
        })
        .shape_result()
    }

    fn reduce_clipped(&self, op: ReduceOp, x: &Tensor, axes: &[usize]) -> Result<Tensor> {
        checked(|| self.backend.reduce(op, x, axes))
            .shape_result()
            .and_then(|r| self.clip_reformat_like(&r, x))
    }

    fn arg_reduce(&self, op: ArgReduceOp, x: &Tensor, axis: usize) -> Result<Tensor> {
        checked(|| {
            let r = self.backend.arg_reduce(op, x, axis)?;
            self.cast_to(&r, x.dtype())
        })
        .shape_result()
    }

    /// 1 where every element along `axes` is non-zero.
    pub fn all(&self, x: &Tensor, axes: &[usize]) -> Result<Tensor> {
        self.reduce_as_bool(ReduceOp::All, x, axes)
    }

    /// 1 where any element along `axes` is non-zero.
    pub fn any(&self, x: &Tensor, axes: &[usize]) -> Result<Tensor> {
        self.reduce_as_bool(ReduceOp::Any, x, axes)
    }

    /// Index of the first maximum along `axis`, in `x`'s format.
    pub fn arg_max(&self, x: &Tensor, axis: usize) -> Result<Tensor> {
        self.arg_reduce(ArgReduceOp::ArgMax, x, axis)
    }

    /// Index of the first minimum along `axis`, in `x`'s format.
    pub fn arg_min(&self, x: &Tensor, axis: usize) -> Result<Tensor> {
        self.arg_reduce(ArgReduceOp::ArgMin, x, axis)
    }

    pub fn max_over(&self, x: &Tensor, axes: &[usize]) -> Result<Tensor> {
        self.reduce_reformatted(ReduceOp::Max, x, axes)
    }

    pub fn min_over(&self, x: &Tensor, axes: &[usize]) -> Result<Tensor> {
        self.reduce_reformatted(ReduceOp::Min, x, axes)
    }

    pub fn sum(&self, x: &Tensor, axes: &[usize]) -> Result<Tensor> {
        self.reduce_clipped(ReduceOp::Sum, x, axes)
    }

    pub fn product(&self, x: &Tensor, axes: &[usize]) -> Result<Tensor> {
        self.reduce_clipped(ReduceOp::Prod, x, axes)
    }

    /// Mean along `axes`, truncated for integer formats. A mean over zero
    /// elements is `InvalidData`.
    pub fn mean(&self, x: &Tensor, axes: &[usize]) -> Result<Tensor> {
        self.reduce_reformatted(ReduceOp::Mean, x, axes)
    }
}
