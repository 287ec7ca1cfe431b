/// Bits packed MSB-first into bytes. Trailing bits of the last byte are zero.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct BitVec {
    bits: Vec<u8>,
    bit_count: usize,
}

impl BitVec {
    pub fn new() -> Self {
        BitVec {
            bits: Vec::new(),
            bit_count: 0,
        }
    }

    pub fn with_capacity(bit_capacity: usize) -> Self {
        BitVec {
            bits: Vec::with_capacity(bit_capacity.div_ceil(8)),
            bit_count: 0,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    pub fn push_bit(&mut self, bit: bool) {
        let byte_index = self.bit_count / 8; // which byte is target?
        let bit_offset = self.bit_count % 8; // which bit position is target?

        // make a new byte if needed
        if byte_index >= self.bits.len() {
            self.bits.push(0);
        }

        if bit {
            self.bits[byte_index] |= 1 << (7 - bit_offset);
        }

        self.bit_count += 1;
    }

    pub fn extend_bits<I: IntoIterator<Item = bool>>(&mut self, bits: I) {
        for bit in bits {
            self.push_bit(bit);
        }
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.bit_count {
            return None;
        }
        Some(self.bits[index / 8] >> (7 - index % 8) & 1 == 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.bit_count).map(move |i| self.bits[i / 8] >> (7 - i % 8) & 1 == 1)
    }

    /// Adopts packed storage; returns `None` when `bits` is too short for `bit_count`.
    /// Padding bits past `bit_count` are cleared.
    pub fn from_packed(mut bits: Vec<u8>, bit_count: usize) -> Option<Self> {
        let needed = bit_count.div_ceil(8);
        if bits.len() < needed {
            return None;
        }
        bits.truncate(needed);
        let tail = bit_count % 8;
        if tail != 0 {
            if let Some(last) = bits.last_mut() {
                *last &= 0xFFu8 << (8 - tail);
            }
        }
        Some(BitVec { bits, bit_count })
    }
}
