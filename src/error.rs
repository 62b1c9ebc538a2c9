use std::convert::Infallible;
use thiserror::Error;

/// Errors that can occur when talking to a PCA9536.
///
/// `E` is the error type of the underlying I2C bus implementation. Bus
/// failures are propagated verbatim and never retried internally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error<E> {
    /// Error from the underlying I2C bus.
    #[error("I2C bus error: {0:?}")]
    Bus(E),
    /// Pin index outside the valid 0-3 range.
    #[error(transparent)]
    InvalidPin(#[from] InvalidPin),
    /// Unrecognized pin mode name.
    #[error(transparent)]
    InvalidMode(#[from] InvalidMode),
}

/// A pin index outside the expander's 0-3 range.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("pin index {0} out of range (0-3)")]
pub struct InvalidPin(pub u8);

/// A mode name that is neither `"input"` nor `"output"`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unrecognized pin mode {0:?} (expected \"input\" or \"output\")")]
pub struct InvalidMode(pub String);

// `TryInto<PinMode>` with `M = PinMode` itself has `Error = Infallible`.
impl<E> From<Infallible> for Error<E> {
    fn from(infallible: Infallible) -> Self {
        match infallible {}
    }
}

/// Result type alias for PCA9536 operations.
pub type Result<T, E> = std::result::Result<T, Error<E>>;
