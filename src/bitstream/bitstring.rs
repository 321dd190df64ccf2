//! BitString: an ordered, growable sequence of bits.
//!
//! Bits are packed most significant bit first into a byte buffer, the same order the bzip2
//! BitWriter puts them on the stream. Unused bits in the last byte are always zero, so two
//! BitStrings holding the same bits compare (and hash) equal.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::{HuffmanError, Result};

/// Packed sequence of binary digits. Used both for a single symbol's code and for a whole
/// encoded message.
#[derive(Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct BitString {
    /// Packed bits, MSB first.
    bits: Vec<u8>,
    /// Count of valid bits in the buffer.
    len: usize,
}

impl BitString {
    /// Create an empty BitString.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty BitString able to hold `bits` bits without reallocating.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bits: Vec::with_capacity((bits + 7) / 8),
            len: 0,
        }
    }

    /// Build a BitString from pre-packed bytes holding `len` valid bits.
    pub fn from_bytes(bytes: &[u8], len: usize) -> Result<Self> {
        if len > bytes.len() * 8 {
            return Err(HuffmanError::Argument(format!(
                "{} bits requested from {} bytes",
                len,
                bytes.len()
            )));
        }
        let mut bits = bytes[..(len + 7) / 8].to_vec();
        // Clear any padding so equality only depends on the valid bits
        if len % 8 != 0 {
            if let Some(last) = bits.last_mut() {
                *last &= 0xff_u8 << (8 - len % 8);
            }
        }
        Ok(Self { bits, len })
    }

    /// Count of bits held.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Packed bytes. The last byte is padded with zeros in its least significant bits.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    /// Number of zero bits padding out the last byte.
    pub fn padding(&self) -> u8 {
        ((8 - self.len % 8) % 8) as u8
    }

    /// Append a single bit.
    pub fn push(&mut self, bit: bool) {
        let bit_offset = self.len % 8;
        if bit_offset == 0 {
            self.bits.push(0);
        }
        if bit {
            let last = self.bits.len() - 1;
            self.bits[last] |= 0x80_u8 >> bit_offset;
        }
        self.len += 1;
    }

    /// Remove and return the last bit.
    pub fn pop(&mut self) -> Option<bool> {
        if self.len == 0 {
            return None;
        }
        let bit = self.bit_at(self.len - 1);
        self.len -= 1;
        let bit_offset = self.len % 8;
        if bit_offset == 0 {
            self.bits.pop();
        } else {
            let last = self.bits.len() - 1;
            self.bits[last] &= !(0x80_u8 >> bit_offset);
        }
        Some(bit)
    }

    /// Append every bit of `other`.
    pub fn extend_from(&mut self, other: &BitString) {
        // Fast path: byte aligned, copy whole bytes
        if self.len % 8 == 0 {
            self.bits.extend_from_slice(&other.bits);
            self.len += other.len;
        } else {
            other.iter().for_each(|bit| self.push(bit));
        }
    }

    /// Bit at `index`, or None if out of range.
    pub fn get(&self, index: usize) -> Option<bool> {
        if index < self.len {
            Some(self.bit_at(index))
        } else {
            None
        }
    }

    fn bit_at(&self, index: usize) -> bool {
        self.bits[index / 8] & (0x80_u8 >> (index % 8)) != 0
    }

    /// True if every bit of `prefix` matches the start of this BitString.
    pub fn starts_with(&self, prefix: &BitString) -> bool {
        prefix.len <= self.len && prefix.iter().zip(self.iter()).all(|(a, b)| a == b)
    }

    /// Iterate over the bits in order, `true` for 1.
    pub fn iter(&self) -> Bits<'_> {
        Bits {
            source: self,
            index: 0,
        }
    }
}

/// Iterator over the bits of a BitString.
#[derive(Debug, Clone)]
pub struct Bits<'a> {
    source: &'a BitString,
    index: usize,
}

impl Iterator for Bits<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        let bit = self.source.get(self.index)?;
        self.index += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.source.len - self.index;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Bits<'_> {}

impl<'a> IntoIterator for &'a BitString {
    type Item = bool;
    type IntoIter = Bits<'a>;

    fn into_iter(self) -> Bits<'a> {
        self.iter()
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut out = BitString::new();
        iter.into_iter().for_each(|bit| out.push(bit));
        out
    }
}

impl Display for BitString {
    /// Writes the bits as a string of '0' and '1' characters.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text: String = self.iter().map(|b| if b { '1' } else { '0' }).collect();
        f.pad(&text)
    }
}

impl FromStr for BitString {
    type Err = HuffmanError;

    /// Parse a string of '0' and '1' characters. Anything else is rejected.
    fn from_str(s: &str) -> Result<Self> {
        let mut out = BitString::with_capacity(s.len());
        for (i, c) in s.chars().enumerate() {
            match c {
                '0' => out.push(false),
                '1' => out.push(true),
                other => {
                    return Err(HuffmanError::Argument(format!(
                        "'{}' at position {} is not a binary digit",
                        other, i
                    )))
                }
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod test {
    use super::BitString;
    use crate::error::HuffmanError;

    #[test]
    fn push_test() {
        let mut bs = BitString::new();
        [true, false, false, false, false, false, false, true, true]
            .iter()
            .for_each(|&b| bs.push(b));
        assert_eq!(bs.len(), 9);
        assert_eq!(bs.as_bytes(), &[0b1000_0001, 0b1000_0000]);
        assert_eq!(bs.padding(), 7);
    }

    #[test]
    fn display_parse_test() {
        let bs: BitString = "0110100".parse().unwrap();
        assert_eq!(bs.to_string(), "0110100");
        assert_eq!(bs.as_bytes(), &[0b0110_1000]);
    }

    #[test]
    fn parse_rejects_non_binary() {
        let err = "01x1".parse::<BitString>().unwrap_err();
        assert!(matches!(err, HuffmanError::Argument(_)));
    }

    #[test]
    fn extend_unaligned_test() {
        let mut a: BitString = "101".parse().unwrap();
        let b: BitString = "0011".parse().unwrap();
        a.extend_from(&b);
        assert_eq!(a.to_string(), "1010011");
    }

    #[test]
    fn extend_aligned_test() {
        let mut a: BitString = "11110000".parse().unwrap();
        let b: BitString = "101".parse().unwrap();
        a.extend_from(&b);
        assert_eq!(a.to_string(), "11110000101");
        assert_eq!(a.len(), 11);
    }

    #[test]
    fn pop_clears_bit() {
        let mut a: BitString = "1011".parse().unwrap();
        assert_eq!(a.pop(), Some(true));
        assert_eq!(a, "101".parse().unwrap());
        let mut b: BitString = "1".parse().unwrap();
        assert_eq!(b.pop(), Some(true));
        assert_eq!(b.pop(), None);
        assert!(b.is_empty());
        assert_eq!(b, BitString::new());
    }

    #[test]
    fn from_bytes_masks_padding() {
        let bs = BitString::from_bytes(&[0b1111_1111], 3).unwrap();
        assert_eq!(bs.to_string(), "111");
        assert_eq!(bs, "111".parse().unwrap());
        assert!(BitString::from_bytes(&[0], 9).is_err());
    }

    #[test]
    fn starts_with_test() {
        let a: BitString = "10110".parse().unwrap();
        assert!(a.starts_with(&"101".parse().unwrap()));
        assert!(a.starts_with(&BitString::new()));
        assert!(!a.starts_with(&"100".parse().unwrap()));
        assert!(!a.starts_with(&"101100".parse().unwrap()));
    }
}
