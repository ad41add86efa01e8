//! Error types shared by the coding engine.

use thiserror::Error;

/// Errors raised while building or driving a code.
///
/// Uncorrectable codewords are not errors: they are reported through the
/// boolean (or [`Correction`](crate::ecc::Correction)) results of the
/// correction routines so the caller can pick a policy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The code cannot be built with the requested parameters
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A message, codeword or stream buffer does not satisfy the code's contract
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for all fallible operations in this crate
pub type Result<T> = std::result::Result<T, Error>;
