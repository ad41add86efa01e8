//! Error correction code implementations.
//!
//! Error correction codes are used to detect and correct errors in data
//! transmission and storage, making digital communications more reliable.
//!
//! Currently implemented:
//! - Extended Hamming (SECDED) codes of any message length up to a configurable ceiling
//!
//! # Examples
//!
//! ```
//! use hamming_ecc::ecc::{ErrorCorrection, HammingCode};
//!
//! let code = HammingCode::new(8).unwrap();
//! let data = [1, 0, 1, 1, 0, 0, 1, 0];
//!
//! let mut encoded = ErrorCorrection::encode(&code, &data).unwrap();
//! encoded[6] ^= 1;
//!
//! let decoded = ErrorCorrection::decode(&code, &encoded).unwrap();
//! assert_eq!(decoded, data);
//! ```

/// Result type for error correction operations
pub use crate::error::Result;

/// Trait for error correction code implementations
pub trait ErrorCorrection {
    /// Encode data with error correction symbols
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Decode data and correct errors if possible
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>>;
}

pub mod dictionary;
pub mod hamming;
pub mod matrix;
pub mod params;

pub use dictionary::ErrorDictionary;
pub use hamming::{
    create_hamming, create_hamming_8_4, Correction, CorrectionReport, HammingCode,
};
pub use params::{CodeParameters, HammingConfig, MAX_MESSAGE_LENGTH};
