// Broadcasting element-wise kernels.

use crate::backend::BinaryOp;
use crate::dtype::DType;
use crate::error::Result;
use crate::shape::Shape;
use crate::tensor::Tensor;

/// Applies `f` pairwise over `a` and `b` broadcast together, returning the
/// broadcast shape and the raw (not yet narrowed) results.
pub(crate) fn zip_broadcast<F>(a: &Tensor, b: &Tensor, f: F) -> Result<(Shape, Vec<f64>)>
where
    F: Fn(f64, f64) -> f64,
{
    let out_shape = Shape::broadcast_shape(a.shape(), b.shape())?;

    // Fast path: identical shapes need no index arithmetic.
    if a.shape() == b.shape() {
        let data = a
            .data()
            .iter()
            .zip(b.data().iter())
            .map(|(&x, &y)| f(x, y))
            .collect();
        return Ok((out_shape, data));
    }

    let (ad, bd) = (a.data(), b.data());
    let data = (0..out_shape.numel())
        .map(|i| {
            let coords = out_shape.unravel(i);
            let x = ad[a.shape().broadcast_offset(&coords)];
            let y = bd[b.shape().broadcast_offset(&coords)];
            f(x, y)
        })
        .collect();
    Ok((out_shape, data))
}

pub(crate) fn binary(op: BinaryOp, a: &Tensor, b: &Tensor) -> Result<Tensor> {
    let dtype = if op.is_predicate() {
        DType::Bool
    } else {
        DType::promote(a.dtype(), b.dtype()).arithmetic()
    };
    let integer = dtype.is_integer();
    let (shape, data) = zip_broadcast(a, b, |x, y| apply(op, x, y, integer))?;
    Tensor::new(data, shape, dtype)
}

fn truth(v: bool) -> f64 {
    if v {
        1.0
    } else {
        0.0
    }
}

fn apply(op: BinaryOp, x: f64, y: f64, integer: bool) -> f64 {
    match op {
        BinaryOp::Add => x + y,
        BinaryOp::Sub => x - y,
        BinaryOp::Mul => x * y,
        BinaryOp::Div => {
            let q = x / y;
            if integer {
                q.floor()
            } else {
                q
            }
        }
        BinaryOp::Mod => {
            let r = x % y;
            if r != 0.0 && (r < 0.0) != (y < 0.0) {
                r + y
            } else {
                r
            }
        }
        BinaryOp::Pow => x.powf(y),
        BinaryOp::Maximum => {
            if x.is_nan() || y.is_nan() {
                f64::NAN
            } else {
                x.max(y)
            }
        }
        BinaryOp::Minimum => {
            if x.is_nan() || y.is_nan() {
                f64::NAN
            } else {
                x.min(y)
            }
        }
        BinaryOp::Equal => truth(x == y),
        BinaryOp::NotEqual => truth(x != y),
        BinaryOp::Greater => truth(x > y),
        BinaryOp::GreaterEqual => truth(x >= y),
        BinaryOp::Less => truth(x < y),
        BinaryOp::LessEqual => truth(x <= y),
        BinaryOp::LogicalAnd => truth(x != 0.0 && y != 0.0),
        BinaryOp::LogicalOr => truth(x != 0.0 || y != 0.0),
        BinaryOp::LogicalXor => truth((x != 0.0) != (y != 0.0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(data: Vec<f64>, dims: Vec<usize>, dtype: DType) -> Tensor {
        Tensor::new(data, Shape::new(dims), dtype).unwrap()
    }

    #[test]
    fn test_add_same_shape() {
        let a = t(vec![1.0, 2.0], vec![2], DType::F32);
        let b = t(vec![3.0, 4.0], vec![2], DType::F32);
        let r = binary(BinaryOp::Add, &a, &b).unwrap();
        assert_eq!(r.data(), &[4.0, 6.0]);
        assert_eq!(r.dtype(), DType::F32);
    }

    #[test]
    fn test_broadcast_row_and_column() {
        let a = t(vec![10.0, 20.0], vec![2, 1], DType::I32);
        let b = t(vec![1.0, 2.0, 3.0], vec![3], DType::I32);
        let r = binary(BinaryOp::Add, &a, &b).unwrap();
        assert_eq!(r.shape().dims(), &[2, 3]);
        assert_eq!(r.data(), &[11.0, 12.0, 13.0, 21.0, 22.0, 23.0]);
    }

    #[test]
    fn test_incompatible_shapes() {
        let a = t(vec![0.0; 6], vec![2, 3], DType::F32);
        let b = t(vec![0.0; 4], vec![4], DType::F32);
        assert!(binary(BinaryOp::Add, &a, &b).is_err());
    }

    #[test]
    fn test_integer_division_floors() {
        let a = t(vec![7.0, -7.0], vec![2], DType::I32);
        let b = Tensor::scalar(2.0, DType::I32);
        let r = binary(BinaryOp::Div, &a, &b).unwrap();
        assert_eq!(r.data(), &[3.0, -4.0]);
    }

    #[test]
    fn test_integer_overflow_is_not_wrapped() {
        let a = Tensor::scalar(i32::MAX as f64, DType::I32);
        let b = Tensor::scalar(1.0, DType::I32);
        let r = binary(BinaryOp::Add, &a, &b).unwrap();
        assert_eq!(r.data(), &[i32::MAX as f64 + 1.0]);
    }

    #[test]
    fn test_floor_modulo() {
        let a = t(vec![5.0, -5.0, 5.0], vec![3], DType::I32);
        let b = t(vec![3.0, 3.0, -3.0], vec![3], DType::I32);
        let r = binary(BinaryOp::Mod, &a, &b).unwrap();
        assert_eq!(r.data(), &[2.0, 1.0, -1.0]);
    }

    #[test]
    fn test_predicates_yield_bool() {
        let a = t(vec![1.0, 2.0, 3.0], vec![3], DType::F32);
        let b = Tensor::scalar(2.0, DType::F32);
        let r = binary(BinaryOp::GreaterEqual, &a, &b).unwrap();
        assert_eq!(r.dtype(), DType::Bool);
        assert_eq!(r.data(), &[0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_logical_xor() {
        let a = t(vec![0.0, 0.0, 1.0, 1.0], vec![4], DType::Bool);
        let b = t(vec![0.0, 1.0, 0.0, 1.0], vec![4], DType::Bool);
        let r = binary(BinaryOp::LogicalXor, &a, &b).unwrap();
        assert_eq!(r.data(), &[0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_bool_arithmetic_runs_as_int() {
        let a = t(vec![1.0, 1.0], vec![2], DType::Bool);
        let r = binary(BinaryOp::Add, &a, &a).unwrap();
        assert_eq!(r.dtype(), DType::I32);
        assert_eq!(r.data(), &[2.0, 2.0]);
    }
}
