use ng_tensor::DType;

/// Smallest and largest finite value a format can hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extrema {
    pub min: f64,
    pub max: f64,
}

/// Representable range of `dtype`, or `None` for formats that are never
/// clipped (`Bool`).
pub fn extrema(dtype: DType) -> Option<Extrema> {
    match dtype {
        DType::I32 => Some(Extrema {
            min: i32::MIN as f64,
            max: i32::MAX as f64,
        }),
        DType::F32 => Some(Extrema {
            min: f32::MIN as f64,
            max: f32::MAX as f64,
        }),
        DType::F16 => Some(Extrema {
            min: half::f16::MIN.to_f64(),
            max: half::f16::MAX.to_f64(),
        }),
        DType::Bool => None,
    }
}
