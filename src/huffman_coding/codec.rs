//! A tree paired with its code mapping, plus the text round trip used by the binary.

use std::fmt::Debug;
use std::hash::Hash;

use log::info;

use super::code_map::CodeMapping;
use super::decode::decode;
use super::encode::encode;
use super::tree::HuffmanTree;
use crate::bitstream::BitString;
use crate::error::Result;

/// Holds a Huffman tree and the code mapping generated from it. Encoding uses the mapping,
/// decoding walks the tree.
#[derive(Debug, Clone)]
pub struct HuffmanCodec<S> {
    tree: HuffmanTree<S>,
    mapping: CodeMapping<S>,
}

impl<S: Hash + Eq + Clone + Debug> HuffmanCodec<S> {
    pub fn new(tree: HuffmanTree<S>) -> Self {
        let mapping = CodeMapping::from_tree(&tree);
        HuffmanCodec { tree, mapping }
    }

    /// Build the tree and mapping for `symbols`. Fails with EmptyInput if there are none.
    pub fn from_symbols<I: IntoIterator<Item = S>>(symbols: I) -> Result<Self> {
        Ok(Self::new(HuffmanTree::from_symbols(symbols)?))
    }

    pub fn tree(&self) -> &HuffmanTree<S> {
        &self.tree
    }

    pub fn mapping(&self) -> &CodeMapping<S> {
        &self.mapping
    }

    pub fn encode<'a, I>(&self, symbols: I) -> Result<BitString>
    where
        I: IntoIterator<Item = &'a S>,
        S: 'a,
    {
        encode(symbols, &self.mapping)
    }

    pub fn decode(&self, bits: &BitString) -> Result<Vec<S>> {
        decode(bits, &self.tree)
    }
}

/// Encode `text` with a code built from its own characters, then decode it again.
/// Returns (encoded bits, decoded text, code mapping). Empty text skips the tree entirely
/// and gives empty results.
pub fn round_trip(text: &str) -> Result<(BitString, String, CodeMapping<char>)> {
    if text.is_empty() {
        info!("Empty input, nothing to encode");
        return Ok((BitString::new(), String::new(), CodeMapping::default()));
    }
    let symbols: Vec<char> = text.chars().collect();
    let codec = HuffmanCodec::from_symbols(symbols.iter().copied())?;
    let encoded = codec.encode(&symbols)?;
    let decoded: String = codec.decode(&encoded)?.into_iter().collect();
    let HuffmanCodec { mapping, .. } = codec;
    Ok((encoded, decoded, mapping))
}

#[cfg(test)]
mod test {
    use super::{round_trip, HuffmanCodec};

    #[test]
    fn round_trip_text() {
        let (encoded, decoded, mapping) = round_trip("abracadabra").unwrap();
        assert_eq!(decoded, "abracadabra");
        assert_eq!(encoded.len(), 23);
        assert_eq!(mapping.len(), 5);
    }

    #[test]
    fn round_trip_empty() {
        let (encoded, decoded, mapping) = round_trip("").unwrap();
        assert!(encoded.is_empty());
        assert!(decoded.is_empty());
        assert!(mapping.is_empty());
    }

    #[test]
    fn codec_on_bytes() {
        let data = b"the quick brown fox jumps over the lazy dog".to_vec();
        let codec = HuffmanCodec::from_symbols(data.iter().copied()).unwrap();
        let bits = codec.encode(&data).unwrap();
        assert_eq!(bits.len(), codec.tree().weighted_path_length());
        assert_eq!(codec.decode(&bits).unwrap(), data);
    }
}
