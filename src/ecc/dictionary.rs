//! Syndrome lookup table for single-bit errors.

use crate::ecc::matrix::{gf2_mul_vec, gf2_vec_mul};
use ndarray::Array2;

/// Packs syndrome rows into an integer, row 0 as the most significant bit.
pub fn pack_syndrome(rows: &[u8]) -> usize {
    rows.iter().fold(0, |acc, &bit| (acc << 1) | usize::from(bit & 1))
}

/// Syndrome integer produced by each single-bit flip, indexed by bit position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDictionary {
    entries: Vec<usize>,
}

impl ErrorDictionary {
    /// Builds the table by flipping, one at a time, every bit of a fixed
    /// encoded message and recording the resulting syndrome.
    pub fn build(h: &Array2<u8>, g: &Array2<u8>) -> Self {
        let message: Vec<u8> = (0..g.nrows()).map(|i| (i % 2) as u8).collect();
        let mut codeword = gf2_vec_mul(&message, g);

        let mut entries = Vec::with_capacity(codeword.len());
        for i in 0..codeword.len() {
            codeword[i] ^= 1;
            entries.push(pack_syndrome(&gf2_mul_vec(h, &codeword)));
            codeword[i] ^= 1;
        }

        ErrorDictionary { entries }
    }

    /// Position of the single-bit error with the given syndrome.
    ///
    /// Scans in position order and gives up at the first empty (zero) entry,
    /// so a syndrome no single flip can produce yields `None`.
    pub fn lookup(&self, syndrome: usize) -> Option<usize> {
        for (position, &entry) in self.entries.iter().enumerate() {
            if entry == syndrome {
                return Some(position);
            }
            if entry == 0 {
                return None;
            }
        }
        None
    }

    /// Raw table entries
    pub fn entries(&self) -> &[usize] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
