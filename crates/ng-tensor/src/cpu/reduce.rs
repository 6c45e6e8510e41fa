// Axis reductions.

use crate::backend::{ArgReduceOp, ReduceOp};
use crate::dtype::DType;
use crate::error::{Result, TensorError};
use crate::shape::Shape;
use crate::tensor::Tensor;

/// Marks the reduced axes, rejecting out-of-range and repeated ones.
fn reduced_mask(shape: &Shape, axes: &[usize]) -> Result<Vec<bool>> {
    let ndim = shape.ndim();
    let mut reduced = vec![false; ndim];
    for &axis in axes {
        if axis >= ndim || reduced[axis] {
            return Err(TensorError::InvalidAxis { axis, ndim });
        }
        reduced[axis] = true;
    }
    Ok(reduced)
}

fn output_dtype(op: ReduceOp, input: DType) -> DType {
    match op {
        ReduceOp::All | ReduceOp::Any => DType::Bool,
        ReduceOp::Sum | ReduceOp::Prod => input.arithmetic(),
        ReduceOp::Max | ReduceOp::Min => input,
        ReduceOp::Mean => {
            if input.is_float() {
                input
            } else {
                DType::F32
            }
        }
    }
}

fn init(op: ReduceOp) -> f64 {
    match op {
        ReduceOp::All | ReduceOp::Prod => 1.0,
        ReduceOp::Any | ReduceOp::Sum | ReduceOp::Mean => 0.0,
        ReduceOp::Max => f64::NEG_INFINITY,
        ReduceOp::Min => f64::INFINITY,
    }
}

fn fold(op: ReduceOp, acc: f64, v: f64) -> f64 {
    match op {
        ReduceOp::All => {
            if acc != 0.0 && v != 0.0 {
                1.0
            } else {
                0.0
            }
        }
        ReduceOp::Any => {
            if acc != 0.0 || v != 0.0 {
                1.0
            } else {
                0.0
            }
        }
        ReduceOp::Sum | ReduceOp::Mean => acc + v,
        ReduceOp::Prod => acc * v,
        ReduceOp::Max => {
            if acc.is_nan() || v.is_nan() {
                f64::NAN
            } else {
                acc.max(v)
            }
        }
        ReduceOp::Min => {
            if acc.is_nan() || v.is_nan() {
                f64::NAN
            } else {
                acc.min(v)
            }
        }
    }
}

pub(crate) fn reduce(op: ReduceOp, x: &Tensor, axes: &[usize]) -> Result<Tensor> {
    let shape = x.shape();
    let reduced = reduced_mask(shape, axes)?;

    let out_dims: Vec<usize> = shape
        .dims()
        .iter()
        .zip(reduced.iter())
        .filter(|&(_, &r)| !r)
        .map(|(&d, _)| d)
        .collect();
    let count: usize = shape
        .dims()
        .iter()
        .zip(reduced.iter())
        .filter(|&(_, &r)| r)
        .map(|(&d, _)| d)
        .product();
    let out_shape = Shape::new(out_dims);
    let out_n = out_shape.numel();

    if count == 0 && out_n > 0 && matches!(op, ReduceOp::Max | ReduceOp::Min) {
        return Err(TensorError::EmptyReduction { op: op.to_string() });
    }

    let out_strides = out_shape.strides();
    let mut acc = vec![init(op); out_n];
    for (i, &v) in x.data().iter().enumerate() {
        let coords = shape.unravel(i);
        let o: usize = coords
            .iter()
            .zip(reduced.iter())
            .filter(|&(_, &r)| !r)
            .map(|(&c, _)| c)
            .zip(out_strides.iter())
            .map(|(c, &s)| c * s)
            .sum();
        acc[o] = fold(op, acc[o], v);
    }

    if op == ReduceOp::Mean {
        // A mean over zero elements is 0/0, i.e. NaN.
        let n = count as f64;
        acc.iter_mut().for_each(|a| *a /= n);
    }

    Tensor::new(acc, out_shape, output_dtype(op, x.dtype()))
}

pub(crate) fn arg_reduce(op: ArgReduceOp, x: &Tensor, axis: usize) -> Result<Tensor> {
    let shape = x.shape();
    let ndim = shape.ndim();
    if axis >= ndim {
        return Err(TensorError::InvalidAxis { axis, ndim });
    }
    let len = shape.dim(axis);
    if len == 0 {
        return Err(TensorError::EmptyReduction {
            op: format!("{:?}", op).to_lowercase(),
        });
    }

    let mut out_dims = shape.dims().to_vec();
    out_dims.remove(axis);
    let out_shape = Shape::new(out_dims);
    let strides = shape.strides();
    let data = x.data();

    let indices = (0..out_shape.numel())
        .map(|o| {
            let mut coords = out_shape.unravel(o);
            coords.insert(axis, 0);
            let base: usize = coords.iter().zip(strides.iter()).map(|(c, s)| c * s).sum();

            let mut best = 0usize;
            let mut best_val = data[base];
            for k in 1..len {
                let v = data[base + k * strides[axis]];
                let better = match op {
                    ArgReduceOp::ArgMax => v > best_val,
                    ArgReduceOp::ArgMin => v < best_val,
                };
                if better {
                    best = k;
                    best_val = v;
                }
            }
            best as f64
        })
        .collect();

    Tensor::new(indices, out_shape, DType::I32)
}
