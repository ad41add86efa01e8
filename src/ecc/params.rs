//! Code parameters and the configuration they are derived from.
//!
//! An extended Hamming code carrying `m` data bits needs `x` index parity bits,
//! where `x` is the smallest integer with `2^x - x - 1 >= m`, plus one overall
//! parity bit. The codeword therefore has `m + x + 1` bits.

use crate::error::{Error, Result};

/// Default ceiling on the number of data bits per codeword
pub const MAX_MESSAGE_LENGTH: usize = 32;

/// User-facing configuration of a Hamming code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HammingConfig {
    /// Number of raw data bits per codeword
    pub message_length: usize,
    /// Largest message length accepted by [`HammingConfig::validate`]
    pub max_message_length: usize,
}

impl HammingConfig {
    /// Configuration for `message_length` data bits under the default ceiling.
    pub fn new(message_length: usize) -> Self {
        HammingConfig {
            message_length,
            max_message_length: MAX_MESSAGE_LENGTH,
        }
    }

    /// Overrides the message length ceiling.
    pub fn with_max_message_length(mut self, max_message_length: usize) -> Self {
        self.max_message_length = max_message_length;
        self
    }

    /// Checks the configuration and derives the code parameters from it.
    pub fn validate(&self) -> Result<CodeParameters> {
        CodeParameters::with_ceiling(self.message_length, self.max_message_length)
    }
}

impl Default for HammingConfig {
    /// Extended (8,4) code
    fn default() -> Self {
        Self::new(4)
    }
}

/// Derived dimensions of an extended Hamming code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeParameters {
    message_length: usize,
    parity_bits: usize,
    encoded_length: usize,
}

impl CodeParameters {
    /// Derives the parameters for `message_length` data bits under the default ceiling.
    pub fn new(message_length: usize) -> Result<Self> {
        Self::with_ceiling(message_length, MAX_MESSAGE_LENGTH)
    }

    /// Derives the parameters for `message_length` data bits, rejecting
    /// lengths of zero or above `ceiling`.
    pub fn with_ceiling(message_length: usize, ceiling: usize) -> Result<Self> {
        if ceiling == 0 {
            return Err(Error::InvalidConfiguration(
                "Message length ceiling must be positive".to_string(),
            ));
        }
        if message_length == 0 {
            return Err(Error::InvalidConfiguration(
                "Message length must be positive".to_string(),
            ));
        }
        if message_length > ceiling {
            return Err(Error::InvalidConfiguration(format!(
                "Message length {} exceeds the maximum of {}",
                message_length, ceiling
            )));
        }

        let index_bits = index_parity_bits(message_length);
        let parity_bits = index_bits + 1;

        Ok(CodeParameters {
            message_length,
            parity_bits,
            encoded_length: message_length + parity_bits,
        })
    }

    /// Number of data bits per codeword
    pub fn message_length(&self) -> usize {
        self.message_length
    }

    /// Number of parity bits per codeword, overall parity bit included
    pub fn parity_bits(&self) -> usize {
        self.parity_bits
    }

    /// Total codeword length
    pub fn encoded_length(&self) -> usize {
        self.encoded_length
    }

    /// Code rate `k / n`
    pub fn rate(&self) -> f64 {
        self.message_length as f64 / self.encoded_length as f64
    }
}

/// Smallest `x >= 1` with `2^x - x - 1 >= message_length`.
fn index_parity_bits(message_length: usize) -> usize {
    let mut x = 1;
    while (1usize << x) - x - 1 < message_length {
        x += 1;
    }
    x
}
