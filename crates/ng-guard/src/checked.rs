//! The boundary where backend faults and NaN results become typed failures.
//!
//! A [`Checked`] wraps a deferred computation. Evaluating it through one of
//! its `*result` methods runs the computation with panics contained, maps
//! any error to the chosen [`GuardError`] kind, and then scans the value for
//! NaN. A NaN anywhere turns an otherwise successful result into
//! `InvalidData`; the scan always visits every element.

use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};

use ng_tensor::Tensor;
use tracing::{debug, trace};

use crate::error::{GuardError, Result};

/// Values the NaN scan can inspect.
pub trait NanScan {
    fn contains_nan(&self) -> bool;
}

impl NanScan for Tensor {
    fn contains_nan(&self) -> bool {
        self.data().iter().any(|v| v.is_nan())
    }
}

impl NanScan for f64 {
    fn contains_nan(&self) -> bool {
        self.is_nan()
    }
}

impl NanScan for f32 {
    fn contains_nan(&self) -> bool {
        self.is_nan()
    }
}

impl NanScan for i32 {
    fn contains_nan(&self) -> bool {
        false
    }
}

impl<T: NanScan> NanScan for Vec<T> {
    fn contains_nan(&self) -> bool {
        self.iter().any(NanScan::contains_nan)
    }
}

/// A deferred computation, evaluated only inside the mapper.
pub struct Checked<F> {
    f: F,
}

/// Defer `f` until one of the `Checked` result methods evaluates it.
pub fn checked<F>(f: F) -> Checked<F> {
    Checked { f }
}

impl<T, E, F> Checked<F>
where
    T: NanScan,
    E: Display,
    F: FnOnce() -> std::result::Result<T, E>,
{
    /// Evaluate, reporting faults as `InvalidData`.
    pub fn result(self) -> Result<T> {
        self.result_or(GuardError::InvalidData)
    }

    /// Evaluate, reporting faults as `CannotBroadcast`.
    pub fn broadcast_result(self) -> Result<T> {
        self.result_or(GuardError::CannotBroadcast)
    }

    /// Evaluate, reporting faults as `IncompatibleShape`.
    pub fn shape_result(self) -> Result<T> {
        self.result_or(GuardError::IncompatibleShape)
    }

    /// Evaluate, reporting faults as `kind`. NaN results are always
    /// `InvalidData` regardless of `kind`.
    pub fn result_or(self, kind: GuardError) -> Result<T> {
        match panic::catch_unwind(AssertUnwindSafe(self.f)) {
            Ok(Ok(value)) => {
                if value.contains_nan() {
                    trace!("result contains NaN");
                    Err(GuardError::InvalidData)
                } else {
                    Ok(value)
                }
            }
            Ok(Err(e)) => {
                debug!(error = %e, kind = %kind, "backend fault");
                Err(kind)
            }
            Err(_) => {
                debug!(kind = %kind, "panic contained in checked operation");
                Err(kind)
            }
        }
    }
}
