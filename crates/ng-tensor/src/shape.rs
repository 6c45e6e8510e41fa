use crate::error::{Result, TensorError};
use std::fmt;

/// A tensor shape, wrapping a vector of dimension sizes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    /// Create a new shape from a vector of dimensions.
    pub fn new(dims: Vec<usize>) -> Self {
        Shape { dims }
    }

    /// Create a shape from a slice of dimensions.
    pub fn from_slice(dims: &[usize]) -> Self {
        Shape {
            dims: dims.to_vec(),
        }
    }

    /// The rank-0 shape.
    pub fn scalar() -> Self {
        Shape { dims: vec![] }
    }

    /// Number of dimensions (rank).
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Total number of elements (product of all dimension sizes).
    ///
    /// Saturates at `usize::MAX` when the product overflows; use
    /// `checked_numel` where an unrepresentable shape must be rejected.
    pub fn numel(&self) -> usize {
        self.checked_numel().unwrap_or(usize::MAX)
    }

    /// Total number of elements, or `None` when the product overflows.
    pub fn checked_numel(&self) -> Option<usize> {
        if self.dims.contains(&0) {
            return Some(0);
        }
        self.dims.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
    }

    /// True when the shape has no dimensions.
    pub fn is_scalar(&self) -> bool {
        self.dims.is_empty()
    }

    /// Returns the size of dimension `i`.
    ///
    /// # Panics
    /// Panics if `i >= ndim()`.
    pub fn dim(&self, i: usize) -> usize {
        self.dims[i]
    }

    /// Returns a reference to the underlying dimension sizes.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Computes row-major contiguous strides for this shape.
    ///
    /// For a shape [d0, d1, d2], the strides are [d1*d2, d2, 1].
    pub fn strides(&self) -> Vec<usize> {
        if self.dims.is_empty() {
            return vec![];
        }
        let mut strides = vec![0usize; self.dims.len()];
        strides[self.dims.len() - 1] = 1;
        for i in (0..self.dims.len() - 1).rev() {
            strides[i] = strides[i + 1] * self.dims[i + 1];
        }
        strides
    }

    /// Splits a row-major linear index into per-dimension coordinates.
    pub fn unravel(&self, mut index: usize) -> Vec<usize> {
        let mut coords = vec![0usize; self.dims.len()];
        for i in (0..self.dims.len()).rev() {
            let d = self.dims[i];
            if d > 0 {
                coords[i] = index % d;
                index /= d;
            }
        }
        coords
    }

    /// Linear offset into a tensor of this shape for coordinates taken from a
    /// broadcast output shape.
    ///
    /// `coords` may have more leading dimensions than `self`; those are
    /// ignored, and any dimension of size 1 is read at position 0.
    pub fn broadcast_offset(&self, coords: &[usize]) -> usize {
        let skip = coords.len() - self.dims.len();
        let strides = self.strides();
        self.dims
            .iter()
            .zip(strides.iter())
            .zip(coords[skip..].iter())
            .map(|((&d, &s), &c)| if d == 1 { 0 } else { c * s })
            .sum()
    }

    /// Compute the broadcast shape of `a` and `b` using numpy-style broadcasting rules.
    ///
    /// Rules:
    /// 1. If the shapes have different numbers of dimensions, the shorter shape is
    ///    padded with ones on the left.
    /// 2. For each dimension, sizes must either be equal, or one of them must be 1.
    ///    The output dimension is the maximum of the two.
    pub fn broadcast_shape(a: &Shape, b: &Shape) -> Result<Shape> {
        let max_ndim = a.ndim().max(b.ndim());
        let mut result = Vec::with_capacity(max_ndim);

        for i in 0..max_ndim {
            // Index from the right: dim at position (ndim - 1 - i) from the right
            let da = if i < a.ndim() {
                a.dims[a.ndim() - 1 - i]
            } else {
                1
            };
            let db = if i < b.ndim() {
                b.dims[b.ndim() - 1 - i]
            } else {
                1
            };

            if da == db {
                result.push(da);
            } else if da == 1 {
                result.push(db);
            } else if db == 1 {
                result.push(da);
            } else {
                return Err(TensorError::BroadcastError {
                    a: a.dims.clone(),
                    b: b.dims.clone(),
                });
            }
        }

        result.reverse();
        Ok(Shape::new(result))
    }

    /// Checks that `self` can be broadcast to exactly `target`.
    ///
    /// Unlike `broadcast_shape`, only `self` may be stretched.
    pub fn can_broadcast_to(&self, target: &Shape) -> bool {
        if self.ndim() > target.ndim() {
            return false;
        }
        let skip = target.ndim() - self.ndim();
        self.dims
            .iter()
            .zip(target.dims[skip..].iter())
            .all(|(&d, &t)| d == t || d == 1)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", d)?;
        }
        write!(f, "]")
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Shape::new(dims)
    }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Shape::from_slice(dims)
    }
}
