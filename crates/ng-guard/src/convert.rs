//! Native scalars and flat lists out of tensors.

use ng_tensor::{ComputeBackend, DType, Shape, Tensor};

use crate::checked::checked;
use crate::error::{GuardError, Result};
use crate::guard::Guard;

/// Extraction of a single native number.
pub trait ToNumber {
    /// The single value held, or `IncompatibleShape` when there is not
    /// exactly one.
    fn to_number(&self) -> Result<f64>;
}

impl ToNumber for f64 {
    fn to_number(&self) -> Result<f64> {
        if self.is_finite() {
            Ok(*self)
        } else {
            Err(GuardError::IncompatibleShape)
        }
    }
}

impl ToNumber for Tensor {
    /// Accepts rank-0 tensors and degenerate shapes whose every dimension
    /// is 1.
    fn to_number(&self) -> Result<f64> {
        if self.shape().dims().iter().all(|&d| d == 1) {
            self.get(0).ok_or(GuardError::IncompatibleShape)
        } else {
            Err(GuardError::IncompatibleShape)
        }
    }
}

impl<B: ComputeBackend> Guard<B> {
    /// The single element of `x` as a saturated float32.
    pub fn to_float(&self, x: &Tensor) -> Result<f32> {
        let y = self.clip_reformat(x, DType::F32)?;
        checked(|| y.to_number()).shape_result().map(|v| v as f32)
    }

    /// The single element of `x` as a saturated int32.
    pub fn to_int(&self, x: &Tensor) -> Result<i32> {
        let y = self.clip_reformat(x, DType::I32)?;
        checked(|| y.to_number()).shape_result().map(|v| v as i32)
    }

    /// Every element of `x` in row-major order, as an owned copy.
    pub fn to_flat_list(&self, x: &Tensor) -> Result<Vec<f64>> {
        checked(|| {
            let flat = self.backend.reshape(x, &Shape::new(vec![x.numel()]))?;
            Ok::<_, ng_tensor::TensorError>(flat.data().to_vec())
        })
        .shape_result()
    }

    /// Every element saturated into float32.
    pub fn to_floats(&self, x: &Tensor) -> Result<Vec<f32>> {
        let y = self.clip_reformat(x, DType::F32)?;
        Ok(self.to_flat_list(&y)?.into_iter().map(|v| v as f32).collect())
    }

    /// Every element saturated into int32.
    pub fn to_ints(&self, x: &Tensor) -> Result<Vec<i32>> {
        let y = self.clip_reformat(x, DType::I32)?;
        Ok(self.to_flat_list(&y)?.into_iter().map(|v| v as i32).collect())
    }
}
