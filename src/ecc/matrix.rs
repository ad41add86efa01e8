//! Generator and parity-check matrix construction.
//!
//! The parity-check matrix has the systematic form `H = [A | I]` over GF(2),
//! with the overall parity row on top, so the generator is `G = [I | Aᵀ]`.
//! Row 0 of `H` is chosen so that it plus every other row is the all-ones
//! vector, which turns the plain Hamming code into an extended one.

use crate::ecc::params::CodeParameters;
use ndarray::Array2;

/// The first `count` positions `1, 2, 3, ...` that are not powers of two.
///
/// Powers of two are the parity positions of a classic Hamming layout, so these
/// are the indices assigned to data bits.
pub fn data_positions(count: usize) -> Vec<usize> {
    (1..)
        .filter(|position: &usize| !position.is_power_of_two())
        .take(count)
        .collect()
}

/// Builds the `parity_bits x encoded_length` parity-check matrix.
pub fn parity_check_matrix(params: &CodeParameters) -> Array2<u8> {
    let m = params.message_length();
    let p = params.parity_bits();
    let n = params.encoded_length();
    let mut h = Array2::<u8>::zeros((p, n));

    // Data columns are filled right to left; row 1 holds the most significant bit.
    for (i, &position) in data_positions(m).iter().enumerate() {
        let column = m - 1 - i;
        for bit in 0..p - 1 {
            h[[p - 1 - bit, column]] = ((position >> bit) & 1) as u8;
        }
    }

    for row in 1..p {
        h[[row, m + row]] = 1;
    }

    for column in 0..n {
        let weight: u8 = (1..p).map(|row| h[[row, column]]).fold(0, |acc, b| acc ^ b);
        h[[0, column]] = 1 ^ weight;
    }

    h
}

/// Builds the `message_length x encoded_length` generator matrix matching `h`.
pub fn generator_matrix(params: &CodeParameters, h: &Array2<u8>) -> Array2<u8> {
    let m = params.message_length();
    let p = params.parity_bits();
    let mut g = Array2::<u8>::zeros((m, params.encoded_length()));

    for i in 0..m {
        g[[i, i]] = 1;
        for j in 0..p {
            g[[i, m + j]] = h[[j, i]];
        }
    }

    g
}

/// GF(2) row-vector product `v · a`.
pub fn gf2_vec_mul(v: &[u8], a: &Array2<u8>) -> Vec<u8> {
    a.columns()
        .into_iter()
        .map(|column| {
            column
                .iter()
                .zip(v)
                .fold(0, |acc, (&x, &y)| acc ^ (x & y))
        })
        .collect()
}

/// GF(2) column-vector product `a · v`.
pub fn gf2_mul_vec(a: &Array2<u8>, v: &[u8]) -> Vec<u8> {
    a.rows()
        .into_iter()
        .map(|row| row.iter().zip(v).fold(0, |acc, (&x, &y)| acc ^ (x & y)))
        .collect()
}

/// GF(2) product `a · bᵀ`, used to check that generator rows satisfy every parity check.
pub fn gf2_mul_transpose(a: &Array2<u8>, b: &Array2<u8>) -> Array2<u8> {
    let mut product = Array2::<u8>::zeros((a.nrows(), b.nrows()));
    for (i, row_a) in a.rows().into_iter().enumerate() {
        for (j, row_b) in b.rows().into_iter().enumerate() {
            product[[i, j]] = row_a
                .iter()
                .zip(row_b.iter())
                .fold(0, |acc, (&x, &y)| acc ^ (x & y));
        }
    }
    product
}
