//! Error kinds raised by the checked packing functions, quantization and the
//! loop rate limiter.

use thiserror::Error;

/// A checked write would have gone past the end of the buffer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Write of {needed} bytes does not fit, only {available} bytes left in buffer")]
pub struct OutOfBounds {
    /// Bytes the write needed
    pub needed: usize,
    /// Bytes left between the cursor and the end of the buffer
    pub available: usize,
}

/// An argument was outside the range an operation accepts.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Invalid argument: {0}")]
pub struct InvalidArgument(pub &'static str);

/// A scaled value does not fit the target integer width.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Scaled value does not fit into {bits} bits")]
pub struct Overflow {
    pub bits: u32,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    OutOfBounds(#[from] OutOfBounds),
    #[error("{0}")]
    InvalidArgument(#[from] InvalidArgument),
    #[error("{0}")]
    Overflow(#[from] Overflow),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
