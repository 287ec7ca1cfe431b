use std::fmt;
use std::str::FromStr;

use crate::bit_vec::BitVec;
use crate::codebook::Code;
use crate::error::{HuffmanError, Result};

/// An ordered sequence of binary digits, stored packed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedOutput {
    bits: BitVec,
}

impl EncodedOutput {
    pub fn new() -> Self {
        EncodedOutput::default()
    }

    pub(crate) fn with_capacity(bit_capacity: usize) -> Self {
        EncodedOutput { bits: BitVec::with_capacity(bit_capacity) }
    }

    pub(crate) fn push_code(&mut self, code: &Code) {
        self.bits.extend_bits(code.bits().iter().copied());
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.bits.bit_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter()
    }

    /// The digits packed MSB-first; the last byte is zero-padded.
    pub fn as_bytes(&self) -> &[u8] {
        self.bits.as_bytes()
    }

    pub fn from_packed(bytes: Vec<u8>, bit_count: usize) -> Result<Self> {
        let len = bytes.len();
        BitVec::from_packed(bytes, bit_count)
            .map(|bits| EncodedOutput { bits })
            .ok_or(HuffmanError::InvalidLength { bit_count, bytes: len })
    }
}

impl FromIterator<bool> for EncodedOutput {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bits = BitVec::new();
        bits.extend_bits(iter);
        EncodedOutput { bits }
    }
}

impl FromStr for EncodedOutput {
    type Err = HuffmanError;

    fn from_str(digits: &str) -> Result<Self> {
        let mut bits = BitVec::with_capacity(digits.len());
        for (position, found) in digits.chars().enumerate() {
            match found {
                '0' => bits.push_bit(false),
                '1' => bits.push_bit(true),
                _ => return Err(HuffmanError::InvalidDigit { position, found }),
            }
        }
        Ok(EncodedOutput { bits })
    }
}

impl fmt::Display for EncodedOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
