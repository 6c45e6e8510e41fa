// Construction and reflection.

use ng_tensor::{ComputeBackend, DType, Shape, Tensor, TensorError};

use crate::checked::checked;
use crate::error::{GuardError, Result};
use crate::guard::Guard;

impl<B: ComputeBackend> Guard<B> {
    /// Build a rank-1 tensor from `values`, saturated into `dtype`.
    ///
    /// Fails with `InvalidData` for an empty sequence or a NaN value.
    pub fn tensor(&self, values: &[f64], dtype: DType) -> Result<Tensor> {
        checked(|| {
            if values.is_empty() {
                return Err(TensorError::Other(
                    "cannot build a tensor from zero values".to_string(),
                ));
            }
            let x = Tensor::new(values.to_vec(), Shape::new(vec![values.len()]), dtype)?;
            self.saturate(&x)
        })
        .result()
    }

    /// Build a tensor of an explicit shape from row-major `values`.
    ///
    /// An empty sequence is `InvalidData`; a count that does not match
    /// `dims` is `IncompatibleShape`.
    pub fn tensor_with_shape(&self, values: &[f64], dims: &[usize], dtype: DType) -> Result<Tensor> {
        if values.is_empty() {
            return Err(GuardError::InvalidData);
        }
        checked(|| {
            let x = Tensor::new(values.to_vec(), Shape::from_slice(dims), dtype)?;
            self.saturate(&x)
        })
        .shape_result()
    }

    /// Build a rank-0 tensor.
    pub fn scalar(&self, value: f64, dtype: DType) -> Result<Tensor> {
        checked(|| self.saturate(&Tensor::scalar(value, dtype))).result()
    }
}

/// Number of elements.
pub fn size(x: &Tensor) -> usize {
    x.numel()
}

/// Dimension sizes.
pub fn shape(x: &Tensor) -> Vec<usize> {
    x.shape().dims().to_vec()
}

/// Element format.
pub fn format(x: &Tensor) -> DType {
    x.dtype()
}

/// Lower-case native name of a format, e.g. `"int32"`.
pub fn format_to_native(dtype: DType) -> String {
    dtype.to_string()
}
