/// Settings for the display formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Digits after the decimal point before trailing zeros are trimmed.
    pub precision: usize,
}

impl DisplayConfig {
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { precision: 3 }
    }
}
