// Shape transformations.

use ng_tensor::{ComputeBackend, Shape, Tensor};

use crate::checked::checked;
use crate::error::Result;
use crate::guard::Guard;

impl<B: ComputeBackend> Guard<B> {
    /// Same elements under new dimensions; the element count must match.
    pub fn reshape(&self, x: &Tensor, dims: &[usize]) -> Result<Tensor> {
        checked(|| self.backend.reshape(x, &Shape::from_slice(dims))).shape_result()
    }

    /// Stretch `x` to `dims` under broadcasting rules.
    pub fn broadcast(&self, x: &Tensor, dims: &[usize]) -> Result<Tensor> {
        checked(|| self.backend.broadcast_to(x, &Shape::from_slice(dims))).broadcast_result()
    }

    /// Drop the listed size-1 axes, or every size-1 axis when `axes` is empty.
    pub fn squeeze(&self, x: &Tensor, axes: &[usize]) -> Result<Tensor> {
        checked(|| self.backend.squeeze(x, axes)).shape_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GuardError;
    use ng_tensor::DType;

    #[test]
    fn test_reshape_and_back() {
        let g = Guard::cpu();
        let x = g
            .tensor_with_shape(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3], DType::F32)
            .unwrap();
        let y = g.reshape(&x, &[3, 1, 2]).unwrap();
        assert_eq!(y.shape().dims(), &[3, 1, 2]);
        let z = g.reshape(&y, &[2, 3]).unwrap();
        assert_eq!(z, x);
    }

    #[test]
    fn test_reshape_count_mismatch() {
        let g = Guard::cpu();
        let x = g.tensor(&[1.0, 2.0, 3.0], DType::F32).unwrap();
        assert_eq!(g.reshape(&x, &[2, 2]), Err(GuardError::IncompatibleShape));
    }

    #[test]
    fn test_reshape_overflowing_dims() {
        let g = Guard::cpu();
        let x = g.tensor(&[1.0, 2.0], DType::F32).unwrap();
        assert_eq!(
            g.reshape(&x, &[usize::MAX / 2 + 2, 2]),
            Err(GuardError::IncompatibleShape)
        );
    }

    #[test]
    fn test_broadcast() {
        let g = Guard::cpu();
        let x = g.tensor(&[1.0, 2.0], DType::I32).unwrap();
        let y = g.broadcast(&x, &[2, 2]).unwrap();
        assert_eq!(y.data(), &[1.0, 2.0, 1.0, 2.0]);
        assert_eq!(g.broadcast(&x, &[3]), Err(GuardError::CannotBroadcast));
    }

    #[test]
    fn test_squeeze() {
        let g = Guard::cpu();
        let x = g.tensor_with_shape(&[1.0, 2.0], &[1, 2, 1], DType::F32).unwrap();
        assert_eq!(g.squeeze(&x, &[]).unwrap().shape().dims(), &[2]);
        assert_eq!(g.squeeze(&x, &[0]).unwrap().shape().dims(), &[2, 1]);
        assert_eq!(g.squeeze(&x, &[1]), Err(GuardError::IncompatibleShape));
    }
}
