// Comparisons and boolean logic.
//
// Results are masks of 0 and 1 expressed in the left operand's format, not
// forced to Bool.

use ng_tensor::{BinaryOp, ComputeBackend, DType, Tensor, UnaryOp};

use crate::checked::checked;
use crate::error::Result;
use crate::guard::Guard;

impl<B: ComputeBackend> Guard<B> {
    fn compare(&self, op: BinaryOp, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        checked(|| {
            let mask = self.backend.binary(op, a, b)?;
            self.cast_to(&mask, a.dtype())
        })
        .broadcast_result()
    }

    fn logic(&self, op: BinaryOp, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        checked(|| {
            let x = self.cast_to(a, DType::Bool)?;
            let y = self.cast_to(b, DType::Bool)?;
            let mask = self.backend.binary(op, &x, &y)?;
            self.cast_to(&mask, a.dtype())
        })
        .broadcast_result()
    }

    pub fn equal(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        self.compare(BinaryOp::Equal, a, b)
    }

    pub fn not_equal(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        self.compare(BinaryOp::NotEqual, a, b)
    }

    pub fn greater(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        self.compare(BinaryOp::Greater, a, b)
    }

    pub fn greater_or_equal(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        self.compare(BinaryOp::GreaterEqual, a, b)
    }

    pub fn less(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        self.compare(BinaryOp::Less, a, b)
    }

    pub fn less_or_equal(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        self.compare(BinaryOp::LessEqual, a, b)
    }

    pub fn logical_and(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        self.logic(BinaryOp::LogicalAnd, a, b)
    }

    pub fn logical_or(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        self.logic(BinaryOp::LogicalOr, a, b)
    }

    pub fn logical_xor(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        self.logic(BinaryOp::LogicalXor, a, b)
    }

    pub fn logical_not(&self, x: &Tensor) -> Result<Tensor> {
        checked(|| {
            let b = self.cast_to(x, DType::Bool)?;
            let mask = self.backend.unary(UnaryOp::LogicalNot, &b)?;
            self.cast_to(&mask, x.dtype())
        })
        .result()
    }
}
