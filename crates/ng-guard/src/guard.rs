use ng_tensor::{ComputeBackend, CpuBackend};

use crate::config::DisplayConfig;

/// Owned wrapper around a compute backend that exposes the guarded
/// operations.
///
/// All tensor operations are methods on `Guard`; see the `ops`, `clip`,
/// `convert` and `display` modules. A `Guard` holds no tensors between
/// calls.
#[derive(Debug, Clone, Default)]
pub struct Guard<B: ComputeBackend = CpuBackend> {
    pub(crate) backend: B,
    pub(crate) display: DisplayConfig,
}

impl Guard<CpuBackend> {
    /// A guard over the reference CPU backend.
    pub fn cpu() -> Self {
        Self::new(CpuBackend::new())
    }
}

impl<B: ComputeBackend> Guard<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            display: DisplayConfig::default(),
        }
    }

    /// Replace the display settings.
    pub fn with_display_config(mut self, display: DisplayConfig) -> Self {
        self.display = display;
        self
    }

    /// The wrapped backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn display_config(&self) -> &DisplayConfig {
        &self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_guard() {
        let guard = Guard::cpu();
        assert_eq!(guard.backend().name(), "cpu");
        assert_eq!(guard.display_config().precision, 3);
    }

    #[test]
    fn test_default_matches_cpu() {
        let guard: Guard = Guard::default();
        assert_eq!(guard.backend().name(), "cpu");
    }

    #[test]
    fn test_with_display_config() {
        let guard = Guard::cpu().with_display_config(DisplayConfig::default().with_precision(1));
        assert_eq!(guard.display_config().precision, 1);
    }
}
