//! `ng-tensor` - Reference numeric backend for numeric-guard.
//!
//! This crate provides:
//! - A `Tensor` value type backed by wide CPU storage
//! - A `ComputeBackend` trait for pluggable compute
//! - A reference `CpuBackend` implementation with numpy-style broadcasting
//! - Shape utilities and broadcasting
//! - Data type definitions (F32, F16, I32, Bool)
//!
//! The backend reports faults as `TensorError` values and never bounds or
//! wraps out-of-range results; saturation is the caller's concern.

pub mod backend;
pub mod cpu;
pub mod dtype;
pub mod error;
pub mod shape;
pub mod storage;
pub mod tensor;

// Re-export primary types at the crate root for convenience.
pub use backend::{ArgReduceOp, BinaryOp, ComputeBackend, ReduceOp, UnaryOp};
pub use cpu::CpuBackend;
pub use dtype::DType;
pub use error::{Result, TensorError};
pub use shape::Shape;
pub use storage::CpuStorage;
pub use tensor::Tensor;
