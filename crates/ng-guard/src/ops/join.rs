// Joining.

use ng_tensor::{ComputeBackend, Tensor};

use crate::checked::checked;
use crate::error::Result;
use crate::guard::Guard;

impl<B: ComputeBackend> Guard<B> {
    /// Join `xs` along `axis`. Every other dimension must agree; the result
    /// takes the promoted format of all inputs.
    pub fn concat(&self, xs: &[Tensor], axis: usize) -> Result<Tensor> {
        checked(|| self.backend.concat(xs, axis)).shape_result()
    }
}
