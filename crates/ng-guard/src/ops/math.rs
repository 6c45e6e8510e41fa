// Element-wise basic math.

use ng_tensor::{ComputeBackend, DType, Tensor, UnaryOp};

use crate::checked::checked;
use crate::error::Result;
use crate::guard::Guard;

impl<B: ComputeBackend> Guard<B> {
    fn plain(&self, op: UnaryOp, x: &Tensor) -> Result<Tensor> {
        checked(|| self.backend.unary(op, x)).result()
    }

    /// Runs `op` on a float32 copy of `x` and casts back to `x`'s format.
    fn via_float(&self, op: UnaryOp, x: &Tensor) -> Result<Tensor> {
        checked(|| {
            let f = self.cast_to(x, DType::F32)?;
            let y = self.backend.unary(op, &f)?;
            self.cast_to(&y, x.dtype())
        })
        .result()
    }

    /// Runs `op` on a float32 copy of `x`; domain errors surface as NaN and
    /// thus `InvalidData`. The result saturates into `x`'s format.
    fn via_float_clipped(&self, op: UnaryOp, x: &Tensor) -> Result<Tensor> {
        checked(|| {
            let f = self.cast_to(x, DType::F32)?;
            self.backend.unary(op, &f)
        })
        .result()
        .and_then(|y| self.clip_reformat_like(&y, x))
    }

    pub fn absolute_value(&self, x: &Tensor) -> Result<Tensor> {
        self.plain(UnaryOp::Abs, x)
    }

    pub fn negate(&self, x: &Tensor) -> Result<Tensor> {
        self.plain(UnaryOp::Neg, x)
    }

    /// -1, 0 or 1 per element.
    pub fn sign(&self, x: &Tensor) -> Result<Tensor> {
        self.plain(UnaryOp::Sign, x)
    }

    /// Round half to even.
    pub fn round(&self, x: &Tensor) -> Result<Tensor> {
        self.plain(UnaryOp::Round, x)
    }

    pub fn ceiling(&self, x: &Tensor) -> Result<Tensor> {
        self.via_float(UnaryOp::Ceil, x)
    }

    pub fn floor(&self, x: &Tensor) -> Result<Tensor> {
        self.via_float(UnaryOp::Floor, x)
    }

    /// `e^x`, saturated into `x`'s format.
    pub fn exp(&self, x: &Tensor) -> Result<Tensor> {
        checked(|| self.backend.unary(UnaryOp::Exp, x))
            .result()
            .and_then(|y| self.clip_reformat_like(&y, x))
    }

    /// Negative input is `InvalidData`.
    pub fn square_root(&self, x: &Tensor) -> Result<Tensor> {
        self.via_float_clipped(UnaryOp::Sqrt, x)
    }

    /// Natural logarithm. Negative input is `InvalidData`; zero saturates to
    /// the format minimum.
    pub fn ln(&self, x: &Tensor) -> Result<Tensor> {
        self.via_float_clipped(UnaryOp::Log, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GuardError;
    use approx::assert_relative_eq;

    fn g() -> Guard {
        Guard::cpu()
    }

    #[test]
    fn test_abs_negate_sign() {
        let g = g();
        let x = g.tensor(&[-2.0, 0.0, 3.0], DType::I32).unwrap();
        assert_eq!(g.absolute_value(&x).unwrap().data(), &[2.0, 0.0, 3.0]);
        assert_eq!(g.negate(&x).unwrap().data(), &[2.0, 0.0, -3.0]);
        assert_eq!(g.sign(&x).unwrap().data(), &[-1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_round() {
        let g = g();
        let x = g.tensor(&[1.5, 2.5, -1.2], DType::F32).unwrap();
        assert_eq!(g.round(&x).unwrap().data(), &[2.0, 2.0, -1.0]);
    }

    #[test]
    fn test_ceiling_floor_keep_format() {
        let g = g();
        let x = g.tensor(&[1.25, -1.25], DType::F32).unwrap();
        assert_eq!(g.ceiling(&x).unwrap().data(), &[2.0, -1.0]);
        assert_eq!(g.floor(&x).unwrap().data(), &[1.0, -2.0]);

        let i = g.tensor(&[4.0], DType::I32).unwrap();
        let c = g.ceiling(&i).unwrap();
        assert_eq!(c.dtype(), DType::I32);
        assert_eq!(c.data(), &[4.0]);
    }

    #[test]
    fn test_exp() {
        let g = g();
        let x = g.tensor(&[0.0, 1.0], DType::F32).unwrap();
        let r = g.exp(&x).unwrap();
        assert_eq!(r.data()[0], 1.0);
        assert_relative_eq!(r.data()[1], std::f64::consts::E, max_relative = 1e-6);
    }

    #[test]
    fn test_exp_saturates() {
        let g = g();
        let x = g.tensor(&[1000.0], DType::F32).unwrap();
        assert_eq!(g.exp(&x).unwrap().data(), &[f32::MAX as f64]);

        let i = g.tensor(&[2.0, 100.0], DType::I32).unwrap();
        let r = g.exp(&i).unwrap();
        assert_eq!(r.dtype(), DType::I32);
        assert_eq!(r.data(), &[7.0, i32::MAX as f64]);
    }

    #[test]
    fn test_square_root() {
        let g = g();
        let x = g.tensor(&[4.0, 9.0], DType::I32).unwrap();
        let r = g.square_root(&x).unwrap();
        assert_eq!(r.dtype(), DType::I32);
        assert_eq!(r.data(), &[2.0, 3.0]);
    }

    #[test]
    fn test_square_root_of_negative_is_invalid() {
        let g = g();
        let x = g.tensor(&[4.0, -1.0], DType::F32).unwrap();
        assert_eq!(g.square_root(&x), Err(GuardError::InvalidData));
    }

    #[test]
    fn test_ln() {
        let g = g();
        let x = g.tensor(&[1.0, std::f64::consts::E], DType::F32).unwrap();
        let r = g.ln(&x).unwrap();
        assert_eq!(r.data()[0], 0.0);
        assert_relative_eq!(r.data()[1], 1.0, max_relative = 1e-6);

        let neg = g.tensor(&[-1.0], DType::F32).unwrap();
        assert_eq!(g.ln(&neg), Err(GuardError::InvalidData));

        let zero = g.tensor(&[0.0], DType::F32).unwrap();
        assert_eq!(g.ln(&zero).unwrap().data(), &[f32::MIN as f64]);
    }
}
