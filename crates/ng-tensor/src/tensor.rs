use crate::dtype::DType;
use crate::error::{Result, TensorError};
use crate::shape::Shape;
use crate::storage::CpuStorage;

/// A tensor backed by CPU storage.
///
/// Holds contiguous, row-major data with an associated shape and dtype.
/// Tensors are immutable: every operation yields a new tensor.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    storage: CpuStorage,
    shape: Shape,
}

impl Tensor {
    /// Create a new tensor from flat row-major data, a shape and a dtype.
    ///
    /// Values are narrowed to `dtype`. Fails when `data.len()` does not match
    /// the shape's element count.
    pub fn new(data: Vec<f64>, shape: Shape, dtype: DType) -> Result<Self> {
        if shape.checked_numel() != Some(data.len()) {
            return Err(TensorError::ShapeMismatch {
                expected: shape.dims().to_vec(),
                got: vec![data.len()],
            });
        }
        Ok(Tensor {
            storage: CpuStorage::from_values(data, dtype),
            shape,
        })
    }

    /// Create a rank-0 tensor holding a single value.
    pub fn scalar(value: f64, dtype: DType) -> Self {
        Tensor {
            storage: CpuStorage::from_values(vec![value], dtype),
            shape: Shape::scalar(),
        }
    }

    /// Create a zero-filled tensor with the given shape.
    ///
    /// # Panics
    /// Panics if the shape's element count overflows `usize`.
    pub fn zeros(shape: Shape, dtype: DType) -> Self {
        let n = shape.numel();
        Tensor {
            storage: CpuStorage::zeros(dtype, n),
            shape,
        }
    }

    pub(crate) fn from_storage(storage: CpuStorage, shape: Shape) -> Self {
        debug_assert_eq!(storage.len(), shape.numel());
        Tensor { storage, shape }
    }

    /// Returns a reference to the tensor's shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the tensor's data type.
    pub fn dtype(&self) -> DType {
        self.storage.dtype()
    }

    /// Number of elements.
    pub fn numel(&self) -> usize {
        self.storage.len()
    }

    /// Returns the elements in row-major order.
    pub fn data(&self) -> &[f64] {
        self.storage.as_slice()
    }

    /// Element at a row-major linear index.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.storage.as_slice().get(index).copied()
    }

    /// Returns the underlying storage reference.
    pub fn storage(&self) -> &CpuStorage {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tensor() {
        let t = Tensor::new(
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            Shape::new(vec![2, 3]),
            DType::F32,
        )
        .unwrap();
        assert_eq!(t.shape().ndim(), 2);
        assert_eq!(t.shape().dim(0), 2);
        assert_eq!(t.shape().dim(1), 3);
        assert_eq!(t.dtype(), DType::F32);
        assert_eq!(t.numel(), 6);
        assert_eq!(t.data(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_new_shape_mismatch() {
        let err = Tensor::new(vec![1.0, 2.0], Shape::new(vec![3]), DType::F32).unwrap_err();
        assert!(matches!(err, TensorError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_new_rejects_overflowing_shape() {
        let err = Tensor::new(
            vec![1.0, 2.0],
            Shape::new(vec![usize::MAX / 2 + 2, 2]),
            DType::F32,
        )
        .unwrap_err();
        assert!(matches!(err, TensorError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_new_narrows_to_dtype() {
        let t = Tensor::new(vec![1.9, -0.5], Shape::new(vec![2]), DType::I32).unwrap();
        assert_eq!(t.data(), &[1.0, 0.0]);
    }

    #[test]
    fn test_scalar() {
        let t = Tensor::scalar(3.0, DType::I32);
        assert!(t.shape().is_scalar());
        assert_eq!(t.get(0), Some(3.0));
        assert_eq!(t.get(1), None);
    }

    #[test]
    fn test_zeros() {
        let z = Tensor::zeros(Shape::new(vec![2, 3]), DType::Bool);
        assert_eq!(z.data(), &[0.0; 6]);
        assert_eq!(z.dtype(), DType::Bool);
    }
}
