//! Extended Hamming (SECDED) code engine.
//!
//! Hamming codes are a family of linear error-correcting codes developed by Richard Hamming in 1950.
//! Appending one overall parity bit gives the extended variant, which corrects any single-bit
//! error and detects (but cannot correct) any double-bit error. The most common
//! configuration is the (8,4) code, which encodes 4 data bits into 8 bits.
//!
//! This implementation provides:
//! - Codes for any message length up to a configurable ceiling (32 by default)
//! - Systematic encoding: the message is the prefix of its codeword
//! - Syndrome-table single-bit error correction with double-bit error detection
//! - Decoding of concatenated codeword streams
//!
//! Bits are exchanged unpacked, one `0`/`1` value per `u8`.
//!
//! # Applications
//!
//! - Computer memory (ECC RAM)
//! - Radio links between microcontrollers
//! - Data storage systems
//!
//! # Examples
//!
//! ```
//! use hamming_ecc::ecc::HammingCode;
//!
//! let code = HammingCode::new(4).unwrap();
//! let mut codeword = code.encode(&[1, 0, 1, 1]).unwrap();
//! codeword[2] ^= 1;
//!
//! assert!(code.correct(&mut codeword).unwrap());
//! assert_eq!(&codeword[..4], &[1, 0, 1, 1]);
//! ```

use crate::ecc::dictionary::{pack_syndrome, ErrorDictionary};
use crate::ecc::matrix::{generator_matrix, gf2_mul_vec, gf2_vec_mul, parity_check_matrix};
use crate::ecc::params::{CodeParameters, HammingConfig};
use crate::ecc::{ErrorCorrection, Result};
use crate::error::Error;
use log::{debug, trace, warn};
use ndarray::Array2;
use std::fmt::{self, Display, Formatter};

/// Outcome of checking a single codeword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correction {
    /// The syndrome was zero
    Clean,
    /// A single-bit error was found at `position`
    Corrected { position: usize },
    /// The syndrome matches no single-bit error, typically a double-bit error
    Uncorrectable,
}

impl Correction {
    /// `false` only for [`Correction::Uncorrectable`]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Correction::Uncorrectable)
    }
}

/// Per-block tally produced by [`HammingCode::correct_multi`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorrectionReport {
    /// Codewords with a zero syndrome
    pub clean: usize,
    /// Codewords repaired by flipping one bit
    pub corrected: usize,
    /// Codewords left as received
    pub uncorrectable: usize,
}

impl CorrectionReport {
    /// Number of whole codewords examined
    pub fn blocks(&self) -> usize {
        self.clean + self.corrected + self.uncorrectable
    }
}

/// An extended Hamming code with precomputed matrices and syndrome table.
///
/// All tables are built once by the constructor and only read afterwards, so
/// a code can be shared between threads by reference.
#[derive(Debug, Clone)]
pub struct HammingCode {
    params: CodeParameters,
    /// Generator matrix G, `message_length x encoded_length`
    generator: Array2<u8>,
    /// Parity-check matrix H, `parity_bits x encoded_length`
    parity_check: Array2<u8>,
    dictionary: ErrorDictionary,
}

impl HammingCode {
    /// Creates the smallest extended Hamming code carrying `message_length` data bits.
    ///
    /// # Arguments
    ///
    /// * `message_length` - Number of data bits per codeword, between 1 and
    ///   [`MAX_MESSAGE_LENGTH`](crate::ecc::MAX_MESSAGE_LENGTH)
    ///
    /// # Returns
    ///
    /// A new `HammingCode` or `Error::InvalidConfiguration` for an unsupported length
    pub fn new(message_length: usize) -> Result<Self> {
        Self::from_config(HammingConfig::new(message_length))
    }

    /// Creates a code from an explicit configuration.
    pub fn from_config(config: HammingConfig) -> Result<Self> {
        let params = config.validate()?;
        Ok(Self::from_params(params))
    }

    /// Builds the matrices and error dictionary for already validated parameters.
    pub fn from_params(params: CodeParameters) -> Self {
        let parity_check = parity_check_matrix(&params);
        let generator = generator_matrix(&params, &parity_check);
        let dictionary = ErrorDictionary::build(&parity_check, &generator);

        debug!(
            "Built Hamming({}, {}) code with {} parity bits",
            params.encoded_length(),
            params.message_length(),
            params.parity_bits()
        );

        HammingCode {
            params,
            generator,
            parity_check,
            dictionary,
        }
    }

    /// Creates an extended (8,4) Hamming code
    pub fn extended_8_4() -> Self {
        // Four data bits are always within the default ceiling
        Self::from_params(CodeParameters::new(4).unwrap())
    }

    /// Number of data bits per codeword
    pub fn message_length(&self) -> usize {
        self.params.message_length()
    }

    /// Number of bits per codeword
    pub fn encoded_length(&self) -> usize {
        self.params.encoded_length()
    }

    /// Number of parity bits per codeword, overall parity bit included
    pub fn parity_bits(&self) -> usize {
        self.params.parity_bits()
    }

    pub fn params(&self) -> &CodeParameters {
        &self.params
    }

    pub fn generator_matrix(&self) -> &Array2<u8> {
        &self.generator
    }

    pub fn parity_check_matrix(&self) -> &Array2<u8> {
        &self.parity_check
    }

    /// Syndrome integer of every single-bit error, indexed by bit position
    pub fn error_dictionary(&self) -> &[usize] {
        self.dictionary.entries()
    }

    /// Encodes one message into a codeword.
    ///
    /// # Arguments
    ///
    /// * `message` - Exactly `message_length` bits, each 0 or 1
    ///
    /// # Returns
    ///
    /// The `encoded_length`-bit codeword, whose first `message_length` bits are the message
    pub fn encode(&self, message: &[u8]) -> Result<Vec<u8>> {
        check_length("Message", message.len(), self.message_length())?;
        check_binary(message)?;
        Ok(gf2_vec_mul(message, &self.generator))
    }

    /// Encodes a concatenation of whole messages into a concatenation of codewords.
    pub fn encode_stream(&self, messages: &[u8]) -> Result<Vec<u8>> {
        if messages.len() % self.message_length() != 0 {
            return Err(Error::InvalidInput(format!(
                "Message stream of {} bits is not a multiple of the message length {}",
                messages.len(),
                self.message_length()
            )));
        }
        check_binary(messages)?;

        let mut encoded = Vec::with_capacity(
            messages.len() / self.message_length() * self.encoded_length(),
        );
        for message in messages.chunks_exact(self.message_length()) {
            encoded.extend(gf2_vec_mul(message, &self.generator));
        }
        Ok(encoded)
    }

    /// Parity sums of every row of H against `codeword`, row 0 first.
    pub fn syndrome_rows(&self, codeword: &[u8]) -> Result<Vec<u8>> {
        self.check_codeword(codeword)?;
        Ok(gf2_mul_vec(&self.parity_check, codeword))
    }

    /// Syndrome of `codeword` packed into an integer, row 0 as the most significant bit.
    ///
    /// Zero exactly when `codeword` is a valid codeword.
    pub fn syndrome(&self, codeword: &[u8]) -> Result<usize> {
        self.check_codeword(codeword)?;
        Ok(self.syndrome_unchecked(codeword))
    }

    /// Position of the single-bit error producing `syndrome`, if there is one.
    pub fn locate_error(&self, syndrome: usize) -> Option<usize> {
        self.dictionary.lookup(syndrome)
    }

    /// Checks a codeword without modifying it.
    pub fn classify(&self, codeword: &[u8]) -> Result<Correction> {
        self.check_codeword(codeword)?;
        Ok(self.classify_unchecked(codeword))
    }

    /// Corrects a single-bit error in place.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if the codeword was valid or has been repaired, `Ok(false)` if the error
    /// is uncorrectable, in which case the codeword is left untouched
    pub fn correct(&self, codeword: &mut [u8]) -> Result<bool> {
        self.check_codeword(codeword)?;
        Ok(self.correct_unchecked(codeword).is_recoverable())
    }

    /// Non-mutating variant of [`HammingCode::correct`] returning the corrected copy.
    pub fn correct_copy(&self, codeword: &[u8]) -> Result<(Vec<u8>, bool)> {
        let mut corrected = codeword.to_vec();
        let no_double_error = self.correct(&mut corrected)?;
        Ok((corrected, no_double_error))
    }

    /// Corrects every whole codeword in `stream[..total_bits]` in place.
    ///
    /// Uncorrectable codewords are left as received. Trailing bits that do not form a
    /// whole codeword are not examined.
    pub fn correct_multi(&self, stream: &mut [u8], total_bits: usize) -> Result<CorrectionReport> {
        let stream = self.check_stream(stream, total_bits)?;

        let mut report = CorrectionReport::default();
        for (block, codeword) in stream.chunks_exact_mut(self.encoded_length()).enumerate() {
            match self.correct_unchecked(codeword) {
                Correction::Clean => report.clean += 1,
                Correction::Corrected { position } => {
                    trace!("Corrected bit {} of codeword {}", position, block);
                    report.corrected += 1;
                }
                Correction::Uncorrectable => {
                    warn!("Codeword {} has an uncorrectable error", block);
                    report.uncorrectable += 1;
                }
            }
        }

        debug!(
            "Checked {} codewords: {} clean, {} corrected, {} uncorrectable",
            report.blocks(),
            report.clean,
            report.corrected,
            report.uncorrectable
        );
        Ok(report)
    }

    /// Corrects a codeword stream in place and extracts its data bits.
    ///
    /// `total_bits` should be a multiple of `encoded_length`. If it is not, the trailing
    /// partial codeword is not corrected and at most its first `message_length` bits are
    /// copied to the output as they are.
    ///
    /// # Returns
    ///
    /// The concatenated data bits and their count
    pub fn decode(&self, stream: &mut [u8], total_bits: usize) -> Result<(Vec<u8>, usize)> {
        self.correct_multi(stream, total_bits)?;

        let m = self.message_length();
        let decoded: Vec<u8> = stream[..total_bits]
            .chunks(self.encoded_length())
            .flat_map(|codeword| &codeword[..m.min(codeword.len())])
            .copied()
            .collect();

        let count = decoded.len();
        Ok((decoded, count))
    }

    fn syndrome_unchecked(&self, codeword: &[u8]) -> usize {
        pack_syndrome(&gf2_mul_vec(&self.parity_check, codeword))
    }

    fn classify_unchecked(&self, codeword: &[u8]) -> Correction {
        let syndrome = self.syndrome_unchecked(codeword);
        if syndrome == 0 {
            return Correction::Clean;
        }
        match self.locate_error(syndrome) {
            Some(position) => Correction::Corrected { position },
            None => Correction::Uncorrectable,
        }
    }

    fn correct_unchecked(&self, codeword: &mut [u8]) -> Correction {
        let correction = self.classify_unchecked(codeword);
        if let Correction::Corrected { position } = correction {
            codeword[position] ^= 1;
        }
        correction
    }

    fn check_codeword(&self, codeword: &[u8]) -> Result<()> {
        check_length("Codeword", codeword.len(), self.encoded_length())?;
        check_binary(codeword)
    }

    fn check_stream<'a>(&self, stream: &'a mut [u8], total_bits: usize) -> Result<&'a mut [u8]> {
        if total_bits > stream.len() {
            return Err(Error::InvalidInput(format!(
                "Stream length {} exceeds the buffer of {} bits",
                total_bits,
                stream.len()
            )));
        }
        let stream = &mut stream[..total_bits];
        check_binary(stream)?;
        Ok(stream)
    }
}

impl Default for HammingCode {
    fn default() -> Self {
        Self::extended_8_4()
    }
}

impl ErrorCorrection for HammingCode {
    /// Encodes a stream of whole messages
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.encode_stream(data)
    }

    /// Decodes a stream of whole codewords
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        if data.len() % self.encoded_length() != 0 {
            return Err(Error::InvalidInput(format!(
                "Codeword stream of {} bits is not a multiple of the codeword length {}",
                data.len(),
                self.encoded_length()
            )));
        }
        let mut stream = data.to_vec();
        let (decoded, _) = HammingCode::decode(self, &mut stream, data.len())?;
        Ok(decoded)
    }
}

impl Display for HammingCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Hamming({}, {}) code",
            self.encoded_length(),
            self.message_length()
        )?;
        writeln!(f, "H:")?;
        write_matrix(f, &self.parity_check)?;
        writeln!(f, "G:")?;
        write_matrix(f, &self.generator)
    }
}

fn write_matrix(f: &mut Formatter<'_>, matrix: &Array2<u8>) -> fmt::Result {
    for row in matrix.rows() {
        let line: Vec<String> = row.iter().map(|bit| bit.to_string()).collect();
        writeln!(f, "{}", line.join(" "))?;
    }
    Ok(())
}

fn check_length(what: &str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidInput(format!(
            "{} has {} bits, expected {}",
            what, actual, expected
        )));
    }
    Ok(())
}

fn check_binary(bits: &[u8]) -> Result<()> {
    match bits.iter().position(|&bit| bit > 1) {
        Some(index) => Err(Error::InvalidInput(format!(
            "Bit {} has value {}, expected 0 or 1",
            index, bits[index]
        ))),
        None => Ok(()),
    }
}

/// Creates an extended (8,4) Hamming code
pub fn create_hamming_8_4() -> HammingCode {
    HammingCode::extended_8_4()
}

/// Creates a Hamming code with custom parameters
pub fn create_hamming(message_length: usize) -> Result<HammingCode> {
    HammingCode::new(message_length)
}
