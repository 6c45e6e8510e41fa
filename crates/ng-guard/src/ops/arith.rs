// Broadcasting arithmetic.
//
// Results stay in their natural (promoted) format and are not clipped,
// except for `divide`, which saturates into the left operand's format.

use ng_tensor::{BinaryOp, ComputeBackend, Tensor};

use crate::checked::checked;
use crate::error::Result;
use crate::guard::Guard;

impl<B: ComputeBackend> Guard<B> {
    fn arith(&self, op: BinaryOp, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        checked(|| self.backend.binary(op, a, b)).broadcast_result()
    }

    pub fn add(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        self.arith(BinaryOp::Add, a, b)
    }

    pub fn subtract(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        self.arith(BinaryOp::Sub, a, b)
    }

    pub fn multiply(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        self.arith(BinaryOp::Mul, a, b)
    }

    /// Integer operands use floor division. The quotient is cast to `a`'s
    /// format and saturated, so dividing by zero or overflowing the format
    /// yields an extremum; 0/0 is `InvalidData`.
    pub fn divide(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        self.arith(BinaryOp::Div, a, b)
            .and_then(|q| self.clip_reformat_like(&q, a))
    }

    /// Floor modulo; the result has the sign of the divisor.
    pub fn modulo(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        self.arith(BinaryOp::Mod, a, b)
    }

    pub fn power(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        self.arith(BinaryOp::Pow, a, b)
    }

    /// Element-wise maximum.
    pub fn max(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        self.arith(BinaryOp::Maximum, a, b)
    }

    /// Element-wise minimum.
    pub fn min(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        self.arith(BinaryOp::Minimum, a, b)
    }
}
