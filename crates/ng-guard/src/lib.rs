//! `ng-guard` - Total, format-bounded, NaN-free tensor operations.
//!
//! Every public operation returns `Result<_, GuardError>`; backend faults and
//! contained panics become typed failures, and any result holding a NaN is
//! reported as `GuardError::InvalidData`. Conversions into a narrower
//! format saturate at the format's extrema instead of wrapping.
//!
//! ```no_run
//! use ng_guard::{DType, Guard};
//!
//! let guard = Guard::cpu();
//! let a = guard.tensor(&[1.0, 2.0, 3.0], DType::I32).unwrap();
//! let b = guard.tensor(&[2.0], DType::I32).unwrap();
//! let q = guard.divide(&a, &b).unwrap();
//! assert_eq!(guard.to_ints(&q).unwrap(), vec![0, 1, 1]);
//! ```

pub mod checked;
pub mod clip;
pub mod config;
pub mod convert;
pub mod display;
pub mod error;
pub mod extrema;
pub mod guard;
pub mod ops;

pub use checked::{checked, Checked, NanScan};
pub use config::DisplayConfig;
pub use convert::ToNumber;
pub use display::columns;
pub use error::{GuardError, Result};
pub use extrema::{extrema, Extrema};
pub use guard::Guard;
pub use ops::create::{format, format_to_native, shape, size};

pub use ng_tensor::{ComputeBackend, CpuBackend, DType, Shape, Tensor};
