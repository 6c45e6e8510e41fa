// Element-wise unary kernels.

use crate::backend::UnaryOp;
use crate::error::Result;
use crate::tensor::Tensor;

pub(crate) fn unary(op: UnaryOp, x: &Tensor) -> Result<Tensor> {
    let dtype = op.output_dtype(x.dtype());
    let data = x.data().iter().map(|&v| apply(op, v)).collect();
    Tensor::new(data, x.shape().clone(), dtype)
}

fn apply(op: UnaryOp, v: f64) -> f64 {
    match op {
        UnaryOp::Abs => v.abs(),
        UnaryOp::Neg => -v,
        // f64::signum maps 0.0 to 1.0, which is not what sign means here.
        UnaryOp::Sign => {
            if v > 0.0 {
                1.0
            } else if v < 0.0 {
                -1.0
            } else {
                v
            }
        }
        UnaryOp::Round => v.round_ties_even(),
        UnaryOp::Ceil => v.ceil(),
        UnaryOp::Floor => v.floor(),
        UnaryOp::Exp => v.exp(),
        UnaryOp::Sqrt => v.sqrt(),
        UnaryOp::Log => v.ln(),
        UnaryOp::LogicalNot => {
            if v == 0.0 {
                1.0
            } else {
                0.0
            }
        }
    }
}
