use std::fmt::Debug;
use std::hash::Hash;

use log::debug;

use super::code_map::CodeMapping;
use crate::bitstream::BitString;
use crate::error::{HuffmanError, Result};

/// Encode `symbols` by concatenating, in order, the code of every symbol. Fails with
/// UnknownSymbol if a symbol has no entry in `mapping`.
pub fn encode<'a, S, I>(symbols: I, mapping: &CodeMapping<S>) -> Result<BitString>
where
    S: Hash + Eq + Clone + Debug + 'a,
    I: IntoIterator<Item = &'a S>,
{
    let mut out = BitString::new();
    let mut count = 0;
    for sym in symbols {
        let code = mapping
            .get(sym)
            .ok_or_else(|| HuffmanError::UnknownSymbol(format!("{:?}", sym)))?;
        out.extend_from(code);
        count += 1;
    }
    debug!("Encoded {} symbols into {} bits", count, out.len());
    Ok(out)
}

#[cfg(test)]
mod test {
    use super::encode;
    use crate::error::HuffmanError;
    use crate::huffman_coding::code_map::CodeMapping;
    use crate::huffman_coding::tree::HuffmanTree;

    fn mapping(text: &str) -> CodeMapping<char> {
        CodeMapping::from_tree(&HuffmanTree::from_symbols(text.chars()).unwrap())
    }

    #[test]
    fn abracadabra_bits() {
        let text: Vec<char> = "abracadabra".chars().collect();
        let bits = encode(&text, &mapping("abracadabra")).unwrap();
        assert_eq!(bits.to_string(), "01101110100010101101110");
        assert_eq!(bits.len(), 23);
        assert!(bits.len() < text.len() * 8);
    }

    #[test]
    fn singleton_one_bit_each() {
        let text: Vec<char> = "aaaa".chars().collect();
        let bits = encode(&text, &mapping("aaaa")).unwrap();
        assert_eq!(bits.to_string(), "0000");
    }

    #[test]
    fn empty_sequence_is_empty() {
        let bits = encode(&Vec::<char>::new(), &mapping("ab")).unwrap();
        assert!(bits.is_empty());
    }

    #[test]
    fn unknown_symbol_fails() {
        let text: Vec<char> = "abz".chars().collect();
        let err = encode(&text, &mapping("ab")).unwrap_err();
        assert_eq!(err, HuffmanError::UnknownSymbol("'z'".to_string()));
    }
}
