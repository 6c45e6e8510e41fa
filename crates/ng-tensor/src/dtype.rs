use std::fmt;
use std::str::FromStr;

use half::f16;

use crate::error::TensorError;

/// Supported element formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// 32-bit floating point.
    F32,
    /// 16-bit floating point (IEEE 754 half-precision, via the `half` crate).
    F16,
    /// 32-bit signed integer.
    I32,
    /// Boolean, stored as 0 or 1.
    Bool,
}

impl DType {
    /// Returns true for floating point formats.
    pub fn is_float(&self) -> bool {
        matches!(self, DType::F32 | DType::F16)
    }

    /// Returns true for integer formats. `Bool` is not an integer format.
    pub fn is_integer(&self) -> bool {
        matches!(self, DType::I32)
    }

    /// The format arithmetic runs in for operands of this format.
    ///
    /// Booleans are counted as 32-bit integers.
    pub fn arithmetic(&self) -> DType {
        match self {
            DType::Bool => DType::I32,
            other => *other,
        }
    }

    /// The format both operands of a binary operation are promoted to.
    ///
    /// Ordering is Bool < I32 < F16 < F32, except that I32 combined with
    /// F16 promotes to F32 since half precision cannot hold every i32.
    pub fn promote(a: DType, b: DType) -> DType {
        match (a, b) {
            (x, y) if x == y => x,
            (DType::I32, DType::F16) | (DType::F16, DType::I32) => DType::F32,
            (x, y) => {
                if x.rank() >= y.rank() {
                    x
                } else {
                    y
                }
            }
        }
    }

    fn rank(&self) -> u8 {
        match self {
            DType::Bool => 0,
            DType::I32 => 1,
            DType::F16 => 2,
            DType::F32 => 3,
        }
    }

    /// Represents a wide value in this format.
    ///
    /// Floats round to the format's precision and overflow to infinity.
    /// I32 truncates toward zero but does not wrap, so values beyond the
    /// i32 range survive until a caller saturates them. NaN is kept as-is
    /// for every numeric format.
    pub fn narrow(&self, v: f64) -> f64 {
        match self {
            DType::F32 => v as f32 as f64,
            DType::F16 => f16::from_f64(v).to_f64(),
            DType::I32 => v.trunc(),
            DType::Bool => {
                if v != 0.0 && !v.is_nan() {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DType::F32 => write!(f, "float32"),
            DType::F16 => write!(f, "float16"),
            DType::I32 => write!(f, "int32"),
            DType::Bool => write!(f, "bool"),
        }
    }
}

impl FromStr for DType {
    type Err = TensorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "float32" | "f32" => Ok(DType::F32),
            "float16" | "f16" => Ok(DType::F16),
            "int32" | "i32" => Ok(DType::I32),
            "bool" => Ok(DType::Bool),
            other => Err(TensorError::UnsupportedDType(other.to_string())),
        }
    }
}
