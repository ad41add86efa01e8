pub mod ecc;
pub mod error;

pub use ecc::{HammingCode, HammingConfig};
pub use error::{Error, Result};
