//! Guarded tensor operations, grouped by category.
//!
//! Every operation that touches the backend runs through the checked
//! boundary, including the metadata-only ones (squeeze, reductions, concat).

pub mod arith;
pub mod create;
pub mod join;
pub mod logical;
pub mod math;
pub mod reduce;
pub mod transform;
