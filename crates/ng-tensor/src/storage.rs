use crate::dtype::DType;

/// CPU-side tensor storage.
///
/// Elements are held wide (`f64`) and narrowed to their format on the way
/// in, so every format shares one buffer type and out-of-range integer
/// results stay observable instead of wrapping.
#[derive(Debug, Clone, PartialEq)]
pub struct CpuStorage {
    data: Vec<f64>,
    dtype: DType,
}

impl CpuStorage {
    /// Create storage for `dtype`, narrowing each value to that format.
    pub fn from_values(data: Vec<f64>, dtype: DType) -> Self {
        let data = data.into_iter().map(|v| dtype.narrow(v)).collect();
        CpuStorage { data, dtype }
    }

    /// Create zero-filled storage for the given dtype and element count.
    pub fn zeros(dtype: DType, n: usize) -> Self {
        CpuStorage {
            data: vec![0.0; n],
            dtype,
        }
    }

    /// Number of elements in this storage.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the storage contains no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns the dtype of this storage.
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    /// Re-narrow every element into `dtype`, returning new storage.
    pub fn cast(&self, dtype: DType) -> Self {
        CpuStorage::from_values(self.data.clone(), dtype)
    }
}
