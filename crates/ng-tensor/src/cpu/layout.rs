// Shape-changing and element-moving kernels.

use crate::dtype::DType;
use crate::error::{Result, TensorError};
use crate::shape::Shape;
use crate::tensor::Tensor;

pub(crate) fn reshape(x: &Tensor, shape: &Shape) -> Result<Tensor> {
    if shape.checked_numel() != Some(x.numel()) {
        return Err(TensorError::ShapeMismatch {
            expected: x.shape().dims().to_vec(),
            got: shape.dims().to_vec(),
        });
    }
    Ok(Tensor::from_storage(x.storage().clone(), shape.clone()))
}

pub(crate) fn broadcast_to(x: &Tensor, shape: &Shape) -> Result<Tensor> {
    if shape.checked_numel().is_none() || !x.shape().can_broadcast_to(shape) {
        return Err(TensorError::BroadcastError {
            a: x.shape().dims().to_vec(),
            b: shape.dims().to_vec(),
        });
    }
    let data = x.data();
    let out = (0..shape.numel())
        .map(|i| data[x.shape().broadcast_offset(&shape.unravel(i))])
        .collect();
    Tensor::new(out, shape.clone(), x.dtype())
}

pub(crate) fn squeeze(x: &Tensor, axes: &[usize]) -> Result<Tensor> {
    let dims = x.shape().dims();
    let ndim = dims.len();

    let kept: Vec<usize> = if axes.is_empty() {
        dims.iter().copied().filter(|&d| d != 1).collect()
    } else {
        for &axis in axes {
            if axis >= ndim {
                return Err(TensorError::InvalidAxis { axis, ndim });
            }
            if dims[axis] != 1 {
                return Err(TensorError::SqueezeError {
                    axis,
                    size: dims[axis],
                });
            }
        }
        dims.iter()
            .enumerate()
            .filter(|(i, _)| !axes.contains(i))
            .map(|(_, &d)| d)
            .collect()
    };

    reshape(x, &Shape::new(kept))
}

pub(crate) fn concat(xs: &[Tensor], axis: usize) -> Result<Tensor> {
    let first = xs
        .first()
        .ok_or_else(|| TensorError::Other("concat: no tensors given".to_string()))?;
    let dims = first.shape().dims();
    let ndim = dims.len();
    if axis >= ndim {
        return Err(TensorError::InvalidAxis { axis, ndim });
    }

    let mut axis_len = 0usize;
    let mut dtype = first.dtype();
    for x in xs {
        let other = x.shape().dims();
        let compatible = other.len() == ndim
            && other
                .iter()
                .zip(dims.iter())
                .enumerate()
                .all(|(i, (a, b))| i == axis || a == b);
        if !compatible {
            return Err(TensorError::ShapeMismatch {
                expected: dims.to_vec(),
                got: other.to_vec(),
            });
        }
        axis_len += other[axis];
        dtype = DType::promote(dtype, x.dtype());
    }

    let outer: usize = dims[..axis].iter().product();
    let inner: usize = dims[axis + 1..].iter().product();
    let mut out_dims = dims.to_vec();
    out_dims[axis] = axis_len;

    let mut data = Vec::with_capacity(outer * axis_len * inner);
    for o in 0..outer {
        for x in xs {
            let chunk = x.shape().dim(axis) * inner;
            data.extend_from_slice(&x.data()[o * chunk..(o + 1) * chunk]);
        }
    }

    Tensor::new(data, Shape::new(out_dims), dtype)
}

pub(crate) fn select(mask: &Tensor, if_true: &Tensor, if_false: &Tensor) -> Result<Tensor> {
    let branches = Shape::broadcast_shape(if_true.shape(), if_false.shape())?;
    let shape = Shape::broadcast_shape(mask.shape(), &branches)?;
    let (m, t, f) = (mask.data(), if_true.data(), if_false.data());

    let data = (0..shape.numel())
        .map(|i| {
            let coords = shape.unravel(i);
            if m[mask.shape().broadcast_offset(&coords)] != 0.0 {
                t[if_true.shape().broadcast_offset(&coords)]
            } else {
                f[if_false.shape().broadcast_offset(&coords)]
            }
        })
        .collect();

    Tensor::new(data, shape, if_false.dtype())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(data: Vec<f64>, dims: Vec<usize>) -> Tensor {
        Tensor::new(data, Shape::new(dims), DType::F32).unwrap()
    }

    #[test]
    fn test_reshape() {
        let x = t(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]);
        let r = reshape(&x, &Shape::new(vec![3, 2])).unwrap();
        assert_eq!(r.shape().dims(), &[3, 2]);
        assert_eq!(r.data(), x.data());
    }

    #[test]
    fn test_reshape_mismatch() {
        let x = t(vec![1.0, 2.0, 3.0], vec![3]);
        assert!(reshape(&x, &Shape::new(vec![2, 2])).is_err());
    }

    #[test]
    fn test_reshape_overflowing_shape() {
        // The product wraps to 2 in modular arithmetic.
        let x = t(vec![1.0, 2.0], vec![2]);
        let err = reshape(&x, &Shape::new(vec![usize::MAX / 2 + 2, 2])).unwrap_err();
        assert!(matches!(err, TensorError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_broadcast_to_overflowing_shape() {
        let x = t(vec![1.0], vec![1]);
        assert!(broadcast_to(&x, &Shape::new(vec![usize::MAX, 2])).is_err());
    }

    #[test]
    fn test_broadcast_to() {
        let x = t(vec![1.0, 2.0], vec![2, 1]);
        let r = broadcast_to(&x, &Shape::new(vec![2, 3])).unwrap();
        assert_eq!(r.data(), &[1.0, 1.0, 1.0, 2.0, 2.0, 2.0]);
        assert!(broadcast_to(&x, &Shape::new(vec![3, 3])).is_err());
    }

    #[test]
    fn test_squeeze_all_and_selected() {
        let x = t(vec![1.0, 2.0], vec![1, 2, 1]);
        assert_eq!(squeeze(&x, &[]).unwrap().shape().dims(), &[2]);
        assert_eq!(squeeze(&x, &[2]).unwrap().shape().dims(), &[1, 2]);
        assert!(squeeze(&x, &[1]).is_err());
        assert!(squeeze(&x, &[3]).is_err());
    }

    #[test]
    fn test_concat_axis_0_and_1() {
        let a = t(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]);
        let b = t(vec![5.0, 6.0], vec![1, 2]);
        let r = concat(&[a.clone(), b], 0).unwrap();
        assert_eq!(r.shape().dims(), &[3, 2]);
        assert_eq!(r.data(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        let c = t(vec![9.0, 8.0], vec![2, 1]);
        let r = concat(&[a, c], 1).unwrap();
        assert_eq!(r.shape().dims(), &[2, 3]);
        assert_eq!(r.data(), &[1.0, 2.0, 9.0, 3.0, 4.0, 8.0]);
    }

    #[test]
    fn test_concat_rejects_mismatch() {
        let a = t(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]);
        let b = t(vec![5.0, 6.0, 7.0], vec![1, 3]);
        assert!(concat(&[a, b], 0).is_err());
        assert!(concat(&[], 0).is_err());
    }

    #[test]
    fn test_select_is_pure() {
        let mask = Tensor::new(vec![1.0, 0.0, 1.0], Shape::new(vec![3]), DType::Bool).unwrap();
        let on = Tensor::scalar(9.0, DType::F32);
        let off = t(vec![1.0, 2.0, 3.0], vec![3]);
        let r = select(&mask, &on, &off).unwrap();
        assert_eq!(r.data(), &[9.0, 2.0, 9.0]);
        assert_eq!(off.data(), &[1.0, 2.0, 3.0]);
    }
}
