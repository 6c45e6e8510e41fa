pub mod binary;
pub mod layout;
pub mod reduce;
pub mod unary;

use crate::backend::{ArgReduceOp, BinaryOp, ComputeBackend, ReduceOp, UnaryOp};
use crate::dtype::DType;
use crate::error::Result;
use crate::shape::Shape;
use crate::tensor::Tensor;

/// Pure-Rust CPU compute backend.
///
/// Implements all operations with straightforward loops optimized for
/// correctness rather than peak performance. Intended as a reference
/// implementation and fallback.
#[derive(Debug, Clone)]
pub struct CpuBackend;

impl CpuBackend {
    pub fn new() -> Self {
        CpuBackend
    }
}

impl Default for CpuBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputeBackend for CpuBackend {
    fn name(&self) -> &str {
        "cpu"
    }

    fn binary(&self, op: BinaryOp, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        binary::binary(op, a, b)
    }

    fn unary(&self, op: UnaryOp, x: &Tensor) -> Result<Tensor> {
        unary::unary(op, x)
    }

    fn reduce(&self, op: ReduceOp, x: &Tensor, axes: &[usize]) -> Result<Tensor> {
        reduce::reduce(op, x, axes)
    }

    fn arg_reduce(&self, op: ArgReduceOp, x: &Tensor, axis: usize) -> Result<Tensor> {
        reduce::arg_reduce(op, x, axis)
    }

    fn cast(&self, x: &Tensor, dtype: DType) -> Result<Tensor> {
        Ok(Tensor::from_storage(
            x.storage().cast(dtype),
            x.shape().clone(),
        ))
    }

    fn reshape(&self, x: &Tensor, shape: &Shape) -> Result<Tensor> {
        layout::reshape(x, shape)
    }

    fn broadcast_to(&self, x: &Tensor, shape: &Shape) -> Result<Tensor> {
        layout::broadcast_to(x, shape)
    }

    fn squeeze(&self, x: &Tensor, axes: &[usize]) -> Result<Tensor> {
        layout::squeeze(x, axes)
    }

    fn concat(&self, xs: &[Tensor], axis: usize) -> Result<Tensor> {
        layout::concat(xs, axis)
    }

    fn select(&self, mask: &Tensor, if_true: &Tensor, if_false: &Tensor) -> Result<Tensor> {
        layout::select(mask, if_true, if_false)
    }
}
