//! Reformatting and saturating clips.
//!
//! `reformat*` only changes the format. `clip*` additionally replaces every
//! element outside the target format's extrema with the nearest extremum,
//! so conversions saturate instead of wrapping. The clip runs even when the
//! cast is a no-op.

use ng_tensor::{BinaryOp, ComputeBackend, DType, Tensor};

use crate::checked::checked;
use crate::error::Result;
use crate::extrema::extrema;
use crate::guard::Guard;

impl<B: ComputeBackend> Guard<B> {
    /// Cast `x` to `dtype`, or return it unchanged if it already has it.
    pub fn reformat(&self, x: &Tensor, dtype: DType) -> Result<Tensor> {
        checked(|| self.cast_to(x, dtype)).result()
    }

    /// Cast `x` to the format of `like`.
    pub fn reformat_like(&self, x: &Tensor, like: &Tensor) -> Result<Tensor> {
        self.reformat(x, like.dtype())
    }

    /// Saturate `x` into the extrema of its own format.
    pub fn clip_based_on(&self, x: &Tensor) -> Result<Tensor> {
        checked(|| self.saturate(x)).result()
    }

    /// Cast `x` to `dtype` if needed, then saturate.
    pub fn clip_reformat(&self, x: &Tensor, dtype: DType) -> Result<Tensor> {
        checked(|| {
            let y = self.cast_to(x, dtype)?;
            self.saturate(&y)
        })
        .result()
    }

    /// Cast `x` to the format of `like` if needed, then saturate.
    pub fn clip_reformat_like(&self, x: &Tensor, like: &Tensor) -> Result<Tensor> {
        self.clip_reformat(x, like.dtype())
    }

    pub(crate) fn cast_to(&self, x: &Tensor, dtype: DType) -> ng_tensor::Result<Tensor> {
        if x.dtype() == dtype {
            Ok(x.clone())
        } else {
            self.backend.cast(x, dtype)
        }
    }

    /// Replace below-minimum elements with the minimum and above-maximum
    /// elements with the maximum. NaN compares false both ways and is left
    /// for the NaN scan.
    pub(crate) fn saturate(&self, x: &Tensor) -> ng_tensor::Result<Tensor> {
        let Some(range) = extrema(x.dtype()) else {
            return Ok(x.clone());
        };
        let min = Tensor::scalar(range.min, x.dtype());
        let max = Tensor::scalar(range.max, x.dtype());

        let below = self.backend.binary(BinaryOp::Less, x, &min)?;
        let above = self.backend.binary(BinaryOp::Greater, x, &max)?;

        let raised = self.backend.select(&below, &min, x)?;
        self.backend.select(&above, &max, &raised)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ng_tensor::Shape;

    fn raw(data: Vec<f64>, dtype: DType) -> Tensor {
        let n = data.len();
        Tensor::new(data, Shape::new(vec![n]), dtype).unwrap()
    }

    #[test]
    fn test_reformat_noop_and_cast() {
        let g = Guard::cpu();
        let x = raw(vec![1.5, -2.5], DType::F32);
        assert_eq!(g.reformat(&x, DType::F32).unwrap(), x);
        let y = g.reformat(&x, DType::I32).unwrap();
        assert_eq!(y.dtype(), DType::I32);
        assert_eq!(y.data(), &[1.0, -2.0]);
    }

    #[test]
    fn test_clip_int32() {
        let g = Guard::cpu();
        let x = raw(vec![3e9, -3e9, 7.0], DType::I32);
        let c = g.clip_based_on(&x).unwrap();
        assert_eq!(c.data(), &[i32::MAX as f64, i32::MIN as f64, 7.0]);
        assert_eq!(c.dtype(), DType::I32);
    }

    #[test]
    fn test_clip_float32_infinity() {
        let g = Guard::cpu();
        let x = raw(vec![f64::INFINITY, f64::NEG_INFINITY, 0.25], DType::F32);
        let c = g.clip_based_on(&x).unwrap();
        assert_eq!(c.data(), &[f32::MAX as f64, f32::MIN as f64, 0.25]);
    }

    #[test]
    fn test_clip_bool_is_noop() {
        let g = Guard::cpu();
        let x = raw(vec![1.0, 0.0], DType::Bool);
        assert_eq!(g.clip_based_on(&x).unwrap(), x);
    }

    #[test]
    fn test_clip_reformat_float_to_int_saturates() {
        let g = Guard::cpu();
        let x = raw(vec![1e20, -1e20, 42.7], DType::F32);
        let c = g.clip_reformat(&x, DType::I32).unwrap();
        assert_eq!(c.data(), &[i32::MAX as f64, i32::MIN as f64, 42.0]);
    }

    #[test]
    fn test_clip_reformat_like_same_format_still_clips() {
        let g = Guard::cpu();
        let x = raw(vec![i32::MAX as f64 + 10.0], DType::I32);
        let like = raw(vec![0.0], DType::I32);
        let c = g.clip_reformat_like(&x, &like).unwrap();
        assert_eq!(c.data(), &[i32::MAX as f64]);
    }

    #[test]
    fn test_clip_reformat_to_float16() {
        let g = Guard::cpu();
        let x = raw(vec![1e6, 2.0], DType::F32);
        let c = g.clip_reformat(&x, DType::F16).unwrap();
        assert_eq!(c.dtype(), DType::F16);
        assert_eq!(c.data(), &[65504.0, 2.0]);
    }

    #[test]
    fn test_clip_does_not_touch_input() {
        let g = Guard::cpu();
        let x = raw(vec![5e9], DType::I32);
        let _ = g.clip_based_on(&x).unwrap();
        assert_eq!(x.data(), &[5e9]);
    }

    #[test]
    fn test_nan_input_is_invalid() {
        let g = Guard::cpu();
        let x = raw(vec![f64::NAN], DType::F32);
        assert_eq!(g.clip_based_on(&x), Err(crate::GuardError::InvalidData));
    }
}
