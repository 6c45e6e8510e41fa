use thiserror::Error;

/// The three ways a guarded operation can fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuardError {
    /// A NaN was produced, a math domain was violated, or construction
    /// input was empty or malformed.
    #[error("invalid data")]
    InvalidData,
    /// Operand shapes cannot be combined element-wise.
    #[error("cannot broadcast")]
    CannotBroadcast,
    /// A target shape does not fit the source's element count or rank.
    #[error("incompatible shape")]
    IncompatibleShape,
}

pub type Result<T> = std::result::Result<T, GuardError>;
